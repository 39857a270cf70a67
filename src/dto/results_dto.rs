use serde::{Deserialize, Serialize};

use crate::models::candidate::{Candidate, CandidateStatus};
use crate::models::job::JobPosting;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsView {
    #[default]
    Table,
    Kanban,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Score,
    Name,
    Age,
}

impl SortKey {
    /// Best score first; names and ages ascending.
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortKey::Score => SortDirection::Desc,
            SortKey::Name | SortKey::Age => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsQuery {
    #[serde(default)]
    pub view: ResultsView,
    #[serde(default)]
    pub sort: SortKey,
    pub direction: Option<SortDirection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KanbanColumn {
    pub status: CandidateStatus,
    pub label: &'static str,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ResultsBoard {
    Table { candidates: Vec<Candidate> },
    Kanban { columns: Vec<KanbanColumn> },
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsResponse {
    pub job: JobPosting,
    pub total: usize,
    #[serde(flatten)]
    pub board: ResultsBoard,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdatePayload {
    pub status: CandidateStatus,
}
