use std::collections::HashSet;

use tracing::{error, info, instrument};

use crate::config::TableIds;
use crate::dto::schedule_dto::{ScheduleNotification, ScheduleRequest};
use crate::error::{Error, Result};
use crate::models::candidate::CandidateSource;
use crate::models::job::JobPosting;
use crate::models::schedule::ScheduledEvent;
use crate::models::visible_to;
use crate::services::aggregation_service::AggregationService;
use crate::services::webhook_service::WebhookService;
use crate::session::Session;
use crate::table_store::rows::{JobRow, NewScheduleRow, ScheduleRow};
use crate::table_store::{RowQuery, TableStoreClient};
use crate::utils::time::to_iso8601;

#[derive(Clone)]
pub struct ScheduleService {
    store: TableStoreClient,
    tables: TableIds,
    aggregation: AggregationService,
    webhooks: WebhookService,
}

impl ScheduleService {
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

    /// Books an interview: writes the event row, then notifies the calendar
    /// automation. A failed notification does not remove the row.
    #[instrument(skip(self, session, request), fields(user_id = session.profile.id, job_id = request.job_id))]
    pub async fn schedule(&self, session: &Session, request: ScheduleRequest) -> Result<ScheduledEvent> {
        if !session.google_calendar_connected {
            return Err(Error::CalendarNotConnected);
        }
        if request.end <= request.start {
            return Err(Error::BadRequest(
                "The interview must end after it starts.".to_string(),
            ));
        }

        let data = self.aggregation.load(session.profile.id).await?;
        let job = data
            .find_job(request.job_id)
            .ok_or_else(|| Error::NotFound(format!("Job {} not found", request.job_id)))?;
        let candidate = data
            .find_candidate(request.candidate_source, request.candidate_id)
            .filter(|candidate| candidate.applied_to(job.id, &job.title))
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "Candidate {} not found for job {}",
                    request.candidate_id, job.id
                ))
            })?;

        let start = to_iso8601(request.start);
        let end = to_iso8601(request.end);
        // `Candidato` links rows of the regular candidates table only.
        let (candidato, detalhes) = match candidate.source {
            CandidateSource::Regular => (vec![candidate.id], request.details.clone()),
            CandidateSource::Chat => (Vec::new(), chat_details(&candidate.name, &request.details)),
        };
        let record = NewScheduleRow {
            titulo: request.title.trim(),
            inicio: start.clone(),
            fim: end.clone(),
            detalhes: &detalhes,
            candidato,
            vaga: vec![job.id],
        };
        let row: ScheduleRow = self.store.post(self.tables.schedule, &record).await?;
        let event = ScheduledEvent::from(row);
        info!(event_id = event.id, "interview saved");

        let notification = ScheduleNotification {
            candidate_name: candidate.name.clone(),
            job_title: job.title.clone(),
            start_time: start,
            end_time: end,
            details: request.details.clone(),
            recruiter_email: session.profile.email.clone(),
        };
        if let Err(err) = self.webhooks.notify_schedule(&notification).await {
            error!(error = %err, event_id = event.id, "calendar notification failed after the event was saved");
            return Err(Error::Upstream(
                "The interview was saved but the calendar invitation could not be sent.".to_string(),
            ));
        }

        Ok(event)
    }

    /// Agenda: events on the user's jobs, earliest first.
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: i64) -> Result<Vec<ScheduledEvent>> {
        let all = RowQuery::new();
        let (jobs, events) = tokio::try_join!(
            self.store.get::<JobRow>(self.tables.jobs, &all),
            self.store.get::<ScheduleRow>(self.tables.schedule, &all),
        )?;

        let own_jobs: HashSet<i64> = visible_to(
            jobs.results.into_iter().map(JobPosting::from).collect(),
            user_id,
        )
        .into_iter()
        .map(|job| job.id)
        .collect();

        Ok(agenda(events.results, &own_jobs))
    }
}

fn chat_details(name: &str, details: &str) -> String {
    let details = details.trim();
    if details.is_empty() {
        format!("Candidato (chat): {name}")
    } else {
        format!("Candidato (chat): {name}\n{details}")
    }
}

fn agenda(rows: Vec<ScheduleRow>, own_jobs: &HashSet<i64>) -> Vec<ScheduledEvent> {
    let mut events: Vec<ScheduledEvent> = rows
        .into_iter()
        .map(ScheduledEvent::from)
        .filter(|event| {
            event
                .job
                .as_ref()
                .is_some_and(|job| own_jobs.contains(&job.id))
        })
        .collect();
    events.sort_by(|a, b| match (a.start, b.start) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    events
}
