use std::cmp::Ordering;

use tracing::{info, instrument};

use crate::config::TableIds;
use crate::dto::results_dto::{
    KanbanColumn, ResultsBoard, ResultsQuery, ResultsResponse, ResultsView, SortDirection, SortKey,
};
use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, CandidateSource, CandidateStatus};
use crate::models::job::JobPosting;
use crate::models::user::UserProfile;
use crate::services::aggregation_service::{AggregationService, DashboardData};
use crate::services::webhook_service::{ResumeFile, WebhookService};
use crate::table_store::rows::CandidateStatusUpdate;
use crate::table_store::TableStoreClient;

/// Candidates that applied to `job`, in aggregation order.
pub fn candidates_for_job(data: &DashboardData, job: &JobPosting) -> Vec<Candidate> {
    data.candidates
        .iter()
        .filter(|candidate| candidate.applied_to(job.id, &job.title))
        .cloned()
        .collect()
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Missing values sort last in both directions.
fn missing_last<T>(
    a: Option<T>,
    b: Option<T>,
    direction: SortDirection,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(cmp(&a, &b), direction),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn sort_candidates(candidates: &mut [Candidate], key: SortKey, direction: SortDirection) {
    candidates.sort_by(|a, b| match key {
        SortKey::Score => missing_last(a.score, b.score, direction, f64::total_cmp),
        SortKey::Age => missing_last(a.age, b.age, direction, u32::cmp),
        SortKey::Name => directed(
            a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            direction,
        ),
    });
}

/// One column per status, in pipeline order. Columns are kept even when
/// empty.
pub fn kanban(candidates: Vec<Candidate>) -> Vec<KanbanColumn> {
    let mut columns: Vec<KanbanColumn> = CandidateStatus::ALL
        .iter()
        .map(|&status| KanbanColumn {
            status,
            label: status.stored_value(),
            candidates: Vec::new(),
        })
        .collect();

    for candidate in candidates {
        if let Some(column) = columns.iter_mut().find(|c| c.status == candidate.status) {
            column.candidates.push(candidate);
        }
    }
    columns
}

#[derive(Clone)]
pub struct CandidateService {
    store: TableStoreClient,
    tables: TableIds,
    aggregation: AggregationService,
    webhooks: WebhookService,
}

impl CandidateService {
    pub fn new(
        store: TableStoreClient,
        tables: TableIds,
        aggregation: AggregationService,
        webhooks: WebhookService,
    ) -> Self {
        Self {
            store,
            tables,
            aggregation,
            webhooks,
        }
    }

    fn table_for(&self, source: CandidateSource) -> u32 {
        match source {
            CandidateSource::Regular => self.tables.candidates,
            CandidateSource::Chat => self.tables.chat_candidates,
        }
    }

    fn visible_job(data: &DashboardData, job_id: i64) -> Result<JobPosting> {
        data.find_job(job_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", job_id)))
    }

    /// Results board for one job.
    #[instrument(skip(self, query))]
    pub async fn results(
        &self,
        user_id: i64,
        job_id: i64,
        query: &ResultsQuery,
    ) -> Result<ResultsResponse> {
        let data = self.aggregation.load(user_id).await?;
        let job = Self::visible_job(&data, job_id)?;
        let mut candidates = candidates_for_job(&data, &job);
        let direction = query
            .direction
            .unwrap_or_else(|| query.sort.default_direction());
        sort_candidates(&mut candidates, query.sort, direction);

        let total = candidates.len();
        let board = match query.view {
            ResultsView::Table => ResultsBoard::Table { candidates },
            ResultsView::Kanban => ResultsBoard::Kanban {
                columns: kanban(candidates),
            },
        };
        Ok(ResultsResponse { job, total, board })
    }

    /// Moves a candidate to `status` on its source table and returns the
    /// refreshed data.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        user_id: i64,
        source: CandidateSource,
        candidate_id: i64,
        status: CandidateStatus,
    ) -> Result<DashboardData> {
        let data = self.aggregation.load(user_id).await?;
        if data.find_candidate(source, candidate_id).is_none() {
            return Err(Error::NotFound(format!(
                "Candidate {} not found",
                candidate_id
            )));
        }

        let fields = CandidateStatusUpdate {
            status: status.stored_value(),
        };
        let _: serde_json::Value = self
            .store
            .patch(self.table_for(source), candidate_id, &fields)
            .await?;
        info!(status = status.stored_value(), "candidate status updated");

        self.aggregation.load(user_id).await
    }

    /// Sends resumes for a visible job to the scoring automation.
    #[instrument(skip(self, recruiter, files), fields(user_id = recruiter.id))]
    pub async fn submit_resumes(
        &self,
        recruiter: &UserProfile,
        job_id: i64,
        files: Vec<ResumeFile>,
    ) -> Result<usize> {
        if files.is_empty() {
            return Err(Error::BadRequest("Select at least one resume.".to_string()));
        }

        let data = self.aggregation.load(recruiter.id).await?;
        let job = Self::visible_job(&data, job_id)?;
        let count = files.len();
        self.webhooks
            .send_resumes(&job, recruiter, files)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, job_id, "resume forwarding failed");
                Error::Upstream("Could not send the resumes for scoring. Please try again.".to_string())
            })?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LinkRef;

    fn candidate(id: i64, name: &str, score: Option<f64>, age: Option<u32>) -> Candidate {
        Candidate {
            id,
            source: CandidateSource::Regular,
            name: name.to_string(),
            age,
            sex: None,
            education: None,
            jobs: vec![LinkRef::new(1, "Backend")],
            users: vec![LinkRef::new(7, "Rita")],
            status: CandidateStatus::Screening,
            score,
            email: None,
            phone: None,
            summary: None,
        }
    }

    fn ids(candidates: &[Candidate]) -> Vec<i64> {
        candidates.iter().map(|c| c.id).collect()
    }

    #[test]
    fn score_sort_puts_best_first_and_unscored_last() {
        let mut list = vec![
            candidate(1, "a", Some(40.0), None),
            candidate(2, "b", None, None),
            candidate(3, "c", Some(90.0), None),
        ];
        sort_candidates(&mut list, SortKey::Score, SortKey::Score.default_direction());
        assert_eq!(ids(&list), vec![3, 1, 2]);

        sort_candidates(&mut list, SortKey::Score, SortDirection::Asc);
        assert_eq!(ids(&list), vec![1, 3, 2]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut list = vec![
            candidate(1, "bruno", None, None),
            candidate(2, "Ana", None, None),
            candidate(3, "Carla", None, None),
        ];
        sort_candidates(&mut list, SortKey::Name, SortDirection::Asc);
        assert_eq!(ids(&list), vec![2, 1, 3]);
    }

    #[test]
    fn kanban_has_every_column_in_pipeline_order() {
        let mut approved = candidate(1, "a", None, Some(30));
        approved.status = CandidateStatus::Approved;
        let columns = kanban(vec![approved, candidate(2, "b", None, None)]);

        let statuses: Vec<_> = columns.iter().map(|c| c.status).collect();
        assert_eq!(statuses, CandidateStatus::ALL.to_vec());
        assert_eq!(ids(&columns[0].candidates), vec![2]);
        assert!(columns[1].candidates.is_empty());
        assert_eq!(ids(&columns[2].candidates), vec![1]);
    }

    #[test]
    fn candidates_for_job_includes_chat_title_matches() {
        let job = JobPosting {
            id: 1,
            title: "Backend".into(),
            description: String::new(),
            required_skills: String::new(),
            desired_skills: String::new(),
            users: vec![],
        };
        let mut chat = candidate(2, "chat", None, None);
        chat.source = CandidateSource::Chat;
        chat.jobs = vec![LinkRef::synthetic("Backend")];
        let mut other = candidate(3, "other", None, None);
        other.jobs = vec![LinkRef::new(5, "Frontend")];

        let data = DashboardData {
            jobs: vec![job.clone()],
            candidates: vec![candidate(1, "linked", None, None), chat, other],
        };
        assert_eq!(ids(&candidates_for_job(&data, &job)), vec![1, 2]);
    }
}
