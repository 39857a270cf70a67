use serde::Serialize;
use tracing::{error, info, instrument};

use crate::config::TableIds;
use crate::error::Result;
use crate::models::candidate::{Candidate, CandidateSource, CandidateStatus};
use crate::models::job::JobPosting;
use crate::models::visible_to;
use crate::table_store::rows::{
    chat_candidate, regular_candidate, ChatCandidateRow, JobRow, RegularCandidateRow,
};
use crate::table_store::{RowQuery, TableStoreClient};

/// Jobs and candidates visible to one recruiter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardData {
    pub jobs: Vec<JobPosting>,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_jobs: usize,
    pub total_candidates: usize,
    pub screening: usize,
    pub interview: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl DashboardData {
    pub fn find_job(&self, job_id: i64) -> Option<&JobPosting> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    pub fn find_candidate(&self, source: CandidateSource, candidate_id: i64) -> Option<&Candidate> {
        self.candidates
            .iter()
            .find(|candidate| candidate.source == source && candidate.id == candidate_id)
    }

    pub fn stats(&self) -> DashboardStats {
        let count = |status: CandidateStatus| {
            self.candidates
                .iter()
                .filter(|candidate| candidate.status == status)
                .count()
        };
        DashboardStats {
            total_jobs: self.jobs.len(),
            total_candidates: self.candidates.len(),
            screening: count(CandidateStatus::Screening),
            interview: count(CandidateStatus::Interview),
            approved: count(CandidateStatus::Approved),
            rejected: count(CandidateStatus::Rejected),
        }
    }
}

/// Outcome of a dashboard load as the views see it: either the full data, or
/// empty lists with a message.
#[derive(Debug, Clone, Default)]
pub struct DashboardLoad {
    pub data: DashboardData,
    pub error: Option<String>,
}

/// Adapts both candidate sources, merges them (regular first) and drops
/// everything the user does not own.
pub fn merge_candidates(
    user_id: i64,
    regular: Vec<RegularCandidateRow>,
    chat: Vec<ChatCandidateRow>,
) -> Vec<Candidate> {
    let merged = regular
        .into_iter()
        .map(regular_candidate)
        .chain(chat.into_iter().map(chat_candidate))
        .collect();
    visible_to(merged, user_id)
}

pub fn merge(
    user_id: i64,
    jobs: Vec<JobRow>,
    regular: Vec<RegularCandidateRow>,
    chat: Vec<ChatCandidateRow>,
) -> DashboardData {
    DashboardData {
        jobs: visible_to(jobs.into_iter().map(JobPosting::from).collect(), user_id),
        candidates: merge_candidates(user_id, regular, chat),
    }
}

#[derive(Clone)]
pub struct AggregationService {
    store: TableStoreClient,
    tables: TableIds,
}

impl AggregationService {
    pub fn new(store: TableStoreClient, tables: TableIds) -> Self {
        Self { store, tables }
    }

    /// Fetches the three tables concurrently. Any failed fetch fails the
    /// whole load.
    #[instrument(skip(self))]
    pub async fn load(&self, user_id: i64) -> Result<DashboardData> {
        let all = RowQuery::new();
        let (jobs, regular, chat) = tokio::try_join!(
            self.store.get::<JobRow>(self.tables.jobs, &all),
            self.store
                .get::<RegularCandidateRow>(self.tables.candidates, &all),
            self.store
                .get::<ChatCandidateRow>(self.tables.chat_candidates, &all),
        )?;

        let data = merge(user_id, jobs.results, regular.results, chat.results);
        info!(
            jobs = data.jobs.len(),
            candidates = data.candidates.len(),
            "dashboard data loaded"
        );
        Ok(data)
    }

    pub async fn load_or_empty(&self, user_id: i64) -> DashboardLoad {
        match self.load(user_id).await {
            Ok(data) => DashboardLoad { data, error: None },
            Err(err) => {
                error!(error = %err, user_id, "failed to load dashboard data");
                DashboardLoad {
                    data: DashboardData::default(),
                    error: Some("Could not load your jobs and candidates. Please try again.".to_string()),
                }
            }
        }
    }

    /// Both candidate tables with the same query, merged and owner-filtered.
    #[instrument(skip(self, query))]
    pub async fn load_candidates(&self, user_id: i64, query: &RowQuery) -> Result<Vec<Candidate>> {
        let (regular, chat) = tokio::try_join!(
            self.store
                .get::<RegularCandidateRow>(self.tables.candidates, query),
            self.store
                .get::<ChatCandidateRow>(self.tables.chat_candidates, query),
        )?;
        Ok(merge_candidates(user_id, regular.results, chat.results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn rows<T: serde::de::DeserializeOwned>(value: Value) -> Vec<T> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn merge_filters_by_owner_and_normalises_chat_jobs() {
        let jobs = rows(json!([
            { "id": 1, "titulo": "Backend", "usuario": [{ "id": 7, "value": "Rita" }] },
            { "id": 2, "titulo": "Other", "usuario": [{ "id": 8, "value": "Joao" }] },
            { "id": 3, "titulo": "Orphan", "usuario": null }
        ]));
        let regular = rows(json!([
            { "id": 10, "nome": "Ana", "vaga": [{ "id": 1, "value": "Backend" }], "usuario": [{ "id": 7, "value": "Rita" }] },
            { "id": 11, "nome": "Hidden", "usuario": [{ "id": 8, "value": "Joao" }] }
        ]));
        let chat = rows(json!([
            { "id": 10, "nome": "Bruno", "vaga": "Vaga X", "usuario": [{ "id": 7, "value": "Rita" }] },
            { "id": 12, "nome": "NoOwner", "vaga": "Vaga X" }
        ]));

        let data = merge(7, jobs, regular, chat);

        assert_eq!(data.jobs.iter().map(|j| j.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(data.candidates.len(), 2);
        assert_eq!(data.candidates[0].source, CandidateSource::Regular);
        let bruno = data.find_candidate(CandidateSource::Chat, 10).unwrap();
        assert_eq!(bruno.jobs.len(), 1);
        assert_eq!(bruno.jobs[0].value, "Vaga X");
        assert!(data
            .candidates
            .iter()
            .all(|c| c.users.iter().any(|u| u.id == 7)));
    }

    #[test]
    fn stats_count_each_status() {
        let regular = rows(json!([
            { "id": 1, "usuario": [{ "id": 7 }], "status": { "id": 1, "value": "Entrevista" } },
            { "id": 2, "usuario": [{ "id": 7 }] },
            { "id": 3, "usuario": [{ "id": 7 }], "status": "Reprovado" }
        ]));
        let data = merge(7, vec![], regular, vec![]);
        let stats = data.stats();

        assert_eq!(stats.total_candidates, 3);
        assert_eq!(stats.screening, 1);
        assert_eq!(stats.interview, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.approved, 0);
    }
}
