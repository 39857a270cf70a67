use serde::{Deserialize, Serialize};

/// Recruiter profile, kept in the session once signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub avatar_url: Option<String>,
}
