use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::{Result, UnoError};
use crate::uno::Uno;

pub type SharedUno = Arc<Mutex<Uno>>;

/// Sessions keyed by a host chosen id (a channel, a room, ...).
///
/// Each session sits behind its own lock, so calls against one session are
/// serialized while different sessions never wait on each other. The
/// registry lock is only held to look a session up.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, SharedUno>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<String, SharedUno>> {
        // Map updates are single inserts/removes, a panic elsewhere cannot leave it torn.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a fresh, empty session.
    pub fn create(&self, session_id: impl Into<String>) -> Result<SharedUno> {
        self.insert(session_id, Uno::new())
    }

    pub fn insert(&self, session_id: impl Into<String>, uno: Uno) -> Result<SharedUno> {
        let session_id = session_id.into();
        let mut sessions = self.sessions();
        if sessions.contains_key(&session_id) {
            return Err(UnoError::SessionExists(session_id));
        }

        let shared = Arc::new(Mutex::new(uno));
        debug!(session = %session_id, "session created");
        sessions.insert(session_id, Arc::clone(&shared));
        Ok(shared)
    }

    pub fn get(&self, session_id: &str) -> Result<SharedUno> {
        self.sessions()
            .get(session_id)
            .cloned()
            .ok_or_else(|| UnoError::UnknownSession(session_id.to_string()))
    }

    pub fn remove(&self, session_id: &str) -> Result<SharedUno> {
        let removed = self
            .sessions()
            .remove(session_id)
            .ok_or_else(|| UnoError::UnknownSession(session_id.to_string()))?;
        debug!(session = %session_id, "session removed");
        Ok(removed)
    }

    /// Runs `f` with exclusive access to one session.
    pub fn with_session<T>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut Uno) -> Result<T>,
    ) -> Result<T> {
        let shared = self.get(session_id)?;
        let mut uno = shared
            .lock()
            .map_err(|_| UnoError::SessionPoisoned(session_id.to_string()))?;
        f(&mut *uno)
    }

    pub fn session_ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.sessions().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.sessions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions().is_empty()
    }
}
