use serde::{Deserialize, Serialize};

use crate::models::{LinkRef, Owned};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub required_skills: String,
    pub desired_skills: String,
    pub users: Vec<LinkRef>,
}

impl Owned for JobPosting {
    fn owners(&self) -> &[LinkRef] {
        &self.users
    }
}
