use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::candidate::CandidateSource;
use crate::models::schedule::ScheduledEvent;

fn regular_source() -> CandidateSource {
    CandidateSource::Regular
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScheduleRequest {
    pub candidate_id: i64,
    #[serde(default = "regular_source")]
    pub candidate_source: CandidateSource,
    pub job_id: i64,
    #[validate(length(min = 1))]
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub details: String,
}

/// Body sent to the calendar automation after the event row is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleNotification {
    pub candidate_name: String,
    pub job_title: String,
    pub start_time: String,
    pub end_time: String,
    pub details: String,
    pub recruiter_email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleListResponse {
    pub events: Vec<ScheduledEvent>,
}
