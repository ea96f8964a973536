use std::collections::HashMap;

use tokio::sync::Mutex;
use uuid::Uuid;

use veracity_scorer::{Analyzer, Session};

/// Shared state for all handlers
pub struct AppState {
    pub analyzer: Analyzer,
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            sessions: SessionRegistry::default(),
        }
    }
}

/// Live sessions by id. Each session owns its history; nothing is shared
/// between sessions.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl SessionRegistry {
    pub async fn create(&self) -> Uuid {
        let session = Session::new();
        let id = session.id();
        self.sessions.lock().await.insert(id, session);
        id
    }

    pub async fn end(&self, id: Uuid) -> bool {
        self.sessions.lock().await.remove(&id).is_some()
    }

    pub async fn exists(&self, id: Uuid) -> bool {
        self.sessions.lock().await.contains_key(&id)
    }

    /// Run `f` against the session, or return `None` if it does not exist.
    pub async fn with_session<T>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> T) -> Option<T> {
        let mut sessions = self.sessions.lock().await;
        sessions.get_mut(&id).map(f)
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
