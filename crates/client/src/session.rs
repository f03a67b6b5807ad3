//! Session context and token persistence
//!
//! The session is an explicitly passed handle, not an ambient
//! singleton: the API client and services receive a `SessionContext`
//! and read the token through it. The token slot uses a synchronous
//! lock so the 401 path can clear it without awaiting.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use roomsense_core::user::User;

/// Fixed key under which the auth token is persisted
pub const TOKEN_KEY: &str = "roomsense.auth_token";

/// Errors from token persistence
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Persistent key-value store for the auth token
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> SessionResult<Option<String>>;
    async fn save(&self, token: &str) -> SessionResult<()>;
    async fn clear(&self) -> SessionResult<()>;
}

/// Process-wide authentication context
///
/// Cheap to clone; all clones share the same token slot and user.
#[derive(Clone, Default)]
pub struct SessionContext {
    inner: Arc<SessionInner>,
}

#[derive(Default)]
struct SessionInner {
    token: RwLock<Option<String>>,
    user: RwLock<Option<User>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session and load any token persisted from a previous run
    pub async fn init(store: &dyn TokenStore) -> SessionResult<Self> {
        let session = Self::new();
        if let Some(token) = store.load().await? {
            debug!("Restored persisted auth token");
            session.set_token(token);
        }
        Ok(session)
    }

    pub fn token(&self) -> Option<String> {
        self.inner.token.read().unwrap().clone()
    }

    pub fn set_token(&self, token: String) {
        *self.inner.token.write().unwrap() = Some(token);
    }

    /// Drop the in-memory token; does not touch the store
    pub fn clear_token(&self) {
        *self.inner.token.write().unwrap() = None;
    }

    pub fn user(&self) -> Option<User> {
        self.inner.user.read().unwrap().clone()
    }

    pub fn set_user(&self, user: User) {
        *self.inner.user.write().unwrap() = Some(user);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Role check against the signed-in user; false when nobody is
    pub fn has_role(&self, tag: &str) -> bool {
        self.user().is_some_and(|user| user.has_role(tag))
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.is_admin())
    }

    pub fn is_super_admin(&self) -> bool {
        self.user().is_some_and(|user| user.is_super_admin())
    }

    /// Tear the session down: in-memory state and persisted token
    pub async fn logout(&self, store: &dyn TokenStore) -> SessionResult<()> {
        self.clear_token();
        *self.inner.user.write().unwrap() = None;
        store.clear().await
    }
}

/// File-backed token store
///
/// Persists a small JSON key-value map; the token lives under
/// [`TOKEN_KEY`]. The parent directory is created on first write.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_map(&self) -> SessionResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn write_map(&self, map: &HashMap<String, String>) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(map)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> SessionResult<Option<String>> {
        Ok(self.read_map().await?.remove(TOKEN_KEY))
    }

    async fn save(&self, token: &str) -> SessionResult<()> {
        let mut map = self.read_map().await?;
        map.insert(TOKEN_KEY.to_string(), token.to_string());
        self.write_map(&map).await
    }

    async fn clear(&self) -> SessionResult<()> {
        let mut map = self.read_map().await?;
        if map.remove(TOKEN_KEY).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}

/// In-memory token store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> SessionResult<Option<String>> {
        Ok(self.token.lock().unwrap().clone())
    }

    async fn save(&self, token: &str) -> SessionResult<()> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> SessionResult<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}
