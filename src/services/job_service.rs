use tracing::{info, instrument};

use crate::dto::job_dto::CreateJobPayload;
use crate::error::{Error, Result};
use crate::models::job::JobPosting;
use crate::services::aggregation_service::{AggregationService, DashboardData};
use crate::table_store::rows::{JobRow, NewJobRow};
use crate::table_store::TableStoreClient;

#[derive(Clone)]
pub struct JobService {
    store: TableStoreClient,
    jobs_table: u32,
    aggregation: AggregationService,
}

impl JobService {
    pub fn new(store: TableStoreClient, jobs_table: u32, aggregation: AggregationService) -> Self {
        Self {
            store,
            jobs_table,
            aggregation,
        }
    }

    /// Creates a posting owned by `user_id` alone.
    #[instrument(skip(self, payload), fields(title = %payload.title))]
    pub async fn create(&self, user_id: i64, payload: &CreateJobPayload) -> Result<JobPosting> {
        let record = NewJobRow {
            titulo: payload.title.trim(),
            descricao: payload.description.trim(),
            requisitos_obrigatorios: payload.required_skills.trim(),
            requisitos_desejaveis: payload.desired_skills.trim(),
            usuario: vec![user_id],
        };
        let row: JobRow = self.store.post(self.jobs_table, &record).await?;
        info!(job_id = row.id, "job created");
        Ok(JobPosting::from(row))
    }

    /// Deletes a posting the user can see and returns the refreshed data.
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: i64, job_id: i64) -> Result<DashboardData> {
        let data = self.aggregation.load(user_id).await?;
        if data.find_job(job_id).is_none() {
            return Err(Error::NotFound(format!("Job {} not found", job_id)));
        }

        self.store.delete(self.jobs_table, job_id).await?;
        info!("job deleted");
        self.aggregation.load(user_id).await
    }
}
