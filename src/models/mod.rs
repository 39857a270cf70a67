pub mod candidate;
pub mod job;
pub mod navigation;
pub mod schedule;
pub mod user;

use serde::{Deserialize, Serialize};

/// Reference to a row of another table, as the table store renders link-row
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    pub id: i64,
    #[serde(default)]
    pub value: String,
}

impl LinkRef {
    /// Id used for references that were built from free text rather than an
    /// actual link.
    pub const SYNTHETIC_ID: i64 = 0;

    pub fn new(id: i64, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }

    pub fn synthetic(value: impl Into<String>) -> Self {
        Self::new(Self::SYNTHETIC_ID, value)
    }
}

/// Records that carry a list of owning users.
pub trait Owned {
    fn owners(&self) -> &[LinkRef];

    fn is_visible_to(&self, user_id: i64) -> bool {
        self.owners().iter().any(|owner| owner.id == user_id)
    }
}

/// Keeps only the records owned by `user_id`.
pub fn visible_to<T: Owned>(records: Vec<T>, user_id: i64) -> Vec<T> {
    records
        .into_iter()
        .filter(|record| record.is_visible_to(user_id))
        .collect()
}
