use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::session::{Session, SessionStore};

/// Process-local sessions; everyone is signed out on restart.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Session>>> {
        self.sessions
            .lock()
            .map_err(|_| Error::Session("session store mutex poisoned".to_string()))
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self, key: &str) -> Result<Option<Session>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn save(&self, key: &str, session: &Session) -> Result<()> {
        self.lock()?.insert(key.to_string(), session.clone());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::sample_profile;

    #[test]
    fn save_load_clear() {
        let store = MemorySessionStore::new();
        let session = Session::new(sample_profile());

        assert!(store.load("k1").unwrap().is_none());
        store.save("k1", &session).unwrap();
        assert_eq!(store.load("k1").unwrap(), Some(session));

        store.clear("k1").unwrap();
        assert!(store.load("k1").unwrap().is_none());
        store.clear("k1").unwrap();
    }
}
