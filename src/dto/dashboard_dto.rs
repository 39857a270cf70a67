use serde::Serialize;

use crate::models::candidate::Candidate;
use crate::models::job::JobPosting;
use crate::services::aggregation_service::{DashboardData, DashboardLoad, DashboardStats};

#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub jobs: Vec<JobPosting>,
    pub candidates: Vec<Candidate>,
    pub stats: DashboardStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<DashboardData> for DashboardResponse {
    fn from(data: DashboardData) -> Self {
        DashboardLoad { data, error: None }.into()
    }
}

impl From<DashboardLoad> for DashboardResponse {
    fn from(load: DashboardLoad) -> Self {
        let stats = load.data.stats();
        Self {
            jobs: load.data.jobs,
            candidates: load.data.candidates,
            stats,
            error: load.error,
        }
    }
}
