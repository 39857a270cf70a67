use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fields of the new-screening form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub required_skills: String,
    #[serde(default)]
    pub desired_skills: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeUploadResponse {
    pub job_id: i64,
    pub files_sent: usize,
}
