use crate::core::{CandidateUser, Result, UserStore};
use crate::utils::error::RegistrarError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Appends every registered user as one JSON document per line.
#[derive(Debug, Clone)]
pub struct JsonLinesUserStore {
    path: PathBuf,
    // Serialises appends from concurrent registrations sharing this store.
    write_lock: Arc<Mutex<()>>,
}

impl JsonLinesUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads back every stored user.
    pub async fn load_all(&self) -> Result<Vec<CandidateUser>> {
        if !fs::try_exists(&self.path).await? {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).await?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(RegistrarError::from))
            .collect()
    }
}

#[async_trait]
impl UserStore for JsonLinesUserStore {
    async fn add(&self, user: &CandidateUser) -> Result<()> {
        let mut line = serde_json::to_string(user)?;
        line.push('\n');

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| RegistrarError::UserStoreError {
                message: format!("cannot open {}: {}", self.path.display(), e),
            })?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::debug!("Appended user to {}", self.path.display());
        Ok(())
    }
}

/// Keeps users in memory only. Used for dry runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<Mutex<Vec<CandidateUser>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn users(&self) -> Vec<CandidateUser> {
        self.users.lock().await.clone()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn add(&self, user: &CandidateUser) -> Result<()> {
        self.users.lock().await.push(user.clone());
        Ok(())
    }
}
