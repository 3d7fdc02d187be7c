use std::net::SocketAddr;

mod app;
mod config;
mod error;
mod extract;
mod state;
mod storage;
mod users;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "userbase=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init()?;
    let config = state.config.clone();

    let app = app::build_app(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!("listening on {}", addr);
    tracing::info!(users_file = %config.users_file.display(), "serving users from flat file");
    tracing::info!("available endpoints:");
    tracing::info!("  GET    /users       - get all users");
    tracing::info!("  GET    /users?id=X  - get user by id");
    tracing::info!("  POST   /users       - create new user");
    tracing::info!("  PUT    /users/:id   - update user");
    tracing::info!("  DELETE /users/:id   - delete user");
    match config.mongo_uri.as_deref() {
        Some(uri) => tracing::info!(%uri, "MONGO_URI is set but unused, no database connection is made"),
        None => tracing::info!("MONGO_URI is not set"),
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
