//! Session store abstraction and implementations
//!
//! The core never assumes persistence success: sessions are mutated in
//! memory through their contracted operations and handed to a store
//! afterwards. Load failures surface as `SessionNotFound` and are not
//! retried here; retry policy belongs to the caller.

use async_trait::async_trait;
use prdgen_core::{PrdError, Result, SessionId};
use prdgen_engine::{Session, SessionSummary};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::fs;
use tracing::{debug, instrument, warn};

/// Persistence collaborator for sessions (allows mocking in tests)
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load a session by id
    async fn load(&self, id: SessionId) -> Result<Session>;

    /// Persist a session, overwriting any previous version
    async fn save(&self, session: &Session) -> Result<()>;

    /// Summaries of all stored sessions, most recently updated first
    async fn list(&self) -> Result<Vec<SessionSummary>>;

    /// Remove a session permanently
    async fn delete(&self, id: SessionId) -> Result<()>;

    /// Allocate the next unused session id
    async fn next_id(&self) -> Result<SessionId>;
}

/// File-backed store writing one pretty-printed JSON file per session
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    sessions_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(sessions_dir: impl Into<PathBuf>) -> Self {
        Self {
            sessions_dir: sessions_dir.into(),
        }
    }

    fn session_path(&self, id: SessionId) -> PathBuf {
        self.sessions_dir.join(format!("{}.json", id))
    }

    /// Session ids present on disk, in no particular order
    async fn stored_ids(&self) -> Result<Vec<SessionId>> {
        let mut ids = Vec::new();
        let mut entries = match fs::read_dir(&self.sessions_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ids),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if let Ok(id) = stem.parse::<SessionId>() {
                    ids.push(id);
                }
            }
        }
        Ok(ids)
    }
}

#[async_trait]
impl SessionStore for JsonFileStore {
    #[instrument(skip(self))]
    async fn load(&self, id: SessionId) -> Result<Session> {
        let path = self.session_path(id);
        debug!("Loading session file: {}", path.display());

        let data = match fs::read(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PrdError::SessionNotFound(id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        let session: Session = serde_json::from_slice(&data)?;
        Ok(session)
    }

    #[instrument(skip(self, session))]
    async fn save(&self, session: &Session) -> Result<()> {
        fs::create_dir_all(&self.sessions_dir).await?;

        let data = serde_json::to_vec_pretty(session)?;
        let path = self.session_path(session.id);
        debug!("Writing session file: {}", path.display());
        fs::write(&path, data).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<SessionSummary>> {
        let mut summaries = Vec::new();
        for id in self.stored_ids().await? {
            // Corrupt files are skipped, not fatal: a listing should
            // still show every loadable session.
            match self.load(id).await {
                Ok(session) => summaries.push(session.summary()),
                Err(e) => warn!("Skipping unreadable session {}: {}", id, e),
            }
        }
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: SessionId) -> Result<()> {
        let path = self.session_path(id);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PrdError::SessionNotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn next_id(&self) -> Result<SessionId> {
        let max = self
            .stored_ids()
            .await?
            .into_iter()
            .map(|id| id.0)
            .max()
            .unwrap_or(0);
        Ok(SessionId(max + 1))
    }
}

/// In-memory store for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: Mutex<HashMap<SessionId, Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, Session>>> {
        self.sessions
            .lock()
            .map_err(|_| PrdError::Other("session store lock poisoned".to_string()))
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self, id: SessionId) -> Result<Session> {
        self.lock()?
            .get(&id)
            .cloned()
            .ok_or_else(|| PrdError::SessionNotFound(id.to_string()))
    }

    async fn save(&self, session: &Session) -> Result<()> {
        self.lock()?.insert(session.id, session.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<SessionSummary>> {
        let mut summaries: Vec<SessionSummary> =
            self.lock()?.values().map(|s| s.summary()).collect();
        summaries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(summaries)
    }

    async fn delete(&self, id: SessionId) -> Result<()> {
        self.lock()?
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PrdError::SessionNotFound(id.to_string()))
    }

    async fn next_id(&self) -> Result<SessionId> {
        let max = self.lock()?.keys().map(|id| id.0).max().unwrap_or(0);
        Ok(SessionId(max + 1))
    }
}

/// Sanitized export file path for a session document
///
/// Mirrors the session name with filesystem-hostile characters removed,
/// suffixed with the version index.
pub fn export_path(exports_dir: &Path, session: &Session, version: usize, extension: &str) -> PathBuf {
    let safe_name: String = session
        .name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else if c == ' ' {
                '_'
            } else {
                '-'
            }
        })
        .collect();
    exports_dir.join(format!("{}_{}_v{}.{}", session.id, safe_name, version, extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use prdgen_core::{Complexity, ProductContext, ProductType};

    fn session(seq: u32) -> Session {
        let context = ProductContext::new(ProductType::WebApp, Complexity::Moderate);
        Session::new(SessionId(seq), format!("Session {}", seq), context).unwrap()
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        let s = session(1);
        store.save(&s).await.unwrap();

        let loaded = store.load(SessionId(1)).await.unwrap();
        assert_eq!(loaded.id, s.id);
        assert_eq!(loaded.name, s.name);
    }

    #[tokio::test]
    async fn test_memory_store_missing_session() {
        let store = MemoryStore::new();
        let err = store.load(SessionId(9)).await.unwrap_err();
        assert!(matches!(err, PrdError::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn test_memory_store_next_id() {
        let store = MemoryStore::new();
        assert_eq!(store.next_id().await.unwrap(), SessionId(1));

        store.save(&session(3)).await.unwrap();
        assert_eq!(store.next_id().await.unwrap(), SessionId(4));
    }

    #[test]
    fn test_export_path_sanitizes_name() {
        let context = ProductContext::new(ProductType::WebApp, Complexity::Moderate);
        let s = Session::new(SessionId(1), "My App: v2/beta", context).unwrap();
        let path = export_path(Path::new("exports"), &s, 1, "md");
        assert_eq!(
            path,
            PathBuf::from("exports/PRD-001_My_App-_v2-beta_v1.md")
        );
    }
}
