use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::LinkRef;

/// Interview booked for a candidate on a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub id: i64,
    pub title: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub details: String,
    pub candidate: Option<LinkRef>,
    pub job: Option<LinkRef>,
}
