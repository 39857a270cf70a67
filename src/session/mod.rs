//! Server-side session state.
//!
//! A session holds the signed-in recruiter's profile and the calendar
//! connection flag. The storage medium sits behind [`SessionStore`] so the
//! rest of the crate only ever loads, saves, or clears an entry by key.

pub mod file;
pub mod memory;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::user::UserProfile;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub profile: UserProfile,
    #[serde(default)]
    pub google_calendar_connected: bool,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            google_calendar_connected: false,
            created_at: crate::utils::time::now(),
        }
    }

    pub fn is_expired(&self, ttl_hours: i64, now: DateTime<Utc>) -> bool {
        self.created_at + Duration::hours(ttl_hours) < now
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Session>>;
    fn save(&self, key: &str, session: &Session) -> Result<()>;
    fn clear(&self, key: &str) -> Result<()>;
}

/// Loads a session, treating any storage failure as "no session".
pub fn restore(store: &dyn SessionStore, key: &str) -> Option<Session> {
    match store.load(key) {
        Ok(session) => session,
        Err(err) => {
            tracing::warn!(error = %err, "session could not be restored");
            None
        }
    }
}

/// Session keys double as file names, so only short alphanumeric keys are
/// accepted.
pub(crate) fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.len() <= 128 && key.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
pub(crate) fn sample_profile() -> UserProfile {
    UserProfile {
        id: 7,
        name: "Rita".into(),
        email: "rita@example.com".into(),
        company: "Acme".into(),
        phone: "11999990000".into(),
        avatar_url: None,
    }
}
