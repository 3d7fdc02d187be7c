use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub users_file: PathBuf,
    /// Read and logged at startup only; no connection is ever made.
    pub mongo_uri: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(v) => v.parse::<u16>().context("PORT must be a port number")?,
            Err(_) => 3000,
        };
        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            users_file: std::env::var("USERS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("users.json")),
            mongo_uri: std::env::var("MONGO_URI").ok(),
        })
    }
}
