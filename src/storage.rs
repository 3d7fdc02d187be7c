use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use tokio::{fs, sync::RwLock};
use tracing::error;

use crate::users::model::User;

/// Whole-document access to the persisted user collection.
///
/// There is no mutual exclusion between concurrent mutations: two requests
/// may each load the same snapshot, change it independently, and the later
/// `save` overwrites the earlier one. Single-instance use only.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load the full collection. A missing, unreadable, or malformed
    /// document is logged and degrades to an empty collection.
    async fn load(&self) -> Vec<User>;

    /// Serialize the full collection and overwrite the document.
    async fn save(&self, users: &[User]) -> anyhow::Result<()>;
}

/// Store backed by a single pretty-printed JSON array on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn load(&self) -> Vec<User> {
        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) => {
                error!(error = %e, path = %self.path.display(), "error reading users file");
                return Vec::new();
            }
        };
        match serde_json::from_slice(&data) {
            Ok(users) => users,
            Err(e) => {
                error!(error = %e, path = %self.path.display(), "error parsing users file");
                Vec::new()
            }
        }
    }

    async fn save(&self, users: &[User]) -> anyhow::Result<()> {
        let data = serde_json::to_vec_pretty(users).context("serialize users")?;
        fs::write(&self.path, data)
            .await
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory store used by tests in place of a real file.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn load(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn save(&self, users: &[User]) -> anyhow::Result<()> {
        *self.users.write().await = users.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_users() -> Vec<User> {
        vec![
            User {
                id: "1700000000000".into(),
                name: "Ann".into(),
                email: "a@x.com".into(),
                password: "$2b$10$abcdefghijklmnopqrstuv".into(),
                profile_picture_url: "".into(),
            },
            User {
                id: "1700000000001".into(),
                name: "Bob".into(),
                email: "b@x.com".into(),
                password: "$2b$10$vutsrqponmlkjihgfedcba".into(),
                profile_picture_url: "https://pics.example/bob.png".into(),
            },
        ]
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("users.json"));
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        tokio::fs::write(&path, b"not json at all").await.unwrap();
        let store = JsonFileStore::new(path);
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("users.json"));
        store.save(&sample_users()).await.unwrap();
        assert_eq!(store.load().await, sample_users());
    }

    #[tokio::test]
    async fn saving_an_unmodified_load_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let store = JsonFileStore::new(path.clone());
        store.save(&sample_users()).await.unwrap();
        let before = tokio::fs::read(&path).await.unwrap();

        let loaded = store.load().await;
        store.save(&loaded).await.unwrap();
        let after = tokio::fs::read(&path).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn document_is_pretty_printed_with_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let store = JsonFileStore::new(path.clone());
        store.save(&sample_users()).await.unwrap();
        let text = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\""));
    }

    #[tokio::test]
    async fn memory_store_round_trips() {
        let store = MemoryStore::default();
        assert!(store.load().await.is_empty());
        store.save(&sample_users()).await.unwrap();
        assert_eq!(store.load().await, sample_users());
    }
}
