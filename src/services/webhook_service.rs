use std::time::Duration;

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{error, info, instrument};

use crate::dto::schedule_dto::ScheduleNotification;
use crate::error::{Error, Result};
use crate::models::job::JobPosting;
use crate::models::user::UserProfile;

/// One uploaded resume, as received from the browser.
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Client for the workflow-automation webhooks: resume scoring and the
/// calendar mirror.
#[derive(Clone)]
pub struct WebhookService {
    client: Client,
    resume_url: String,
    schedule_url: String,
}

impl WebhookService {
    pub fn new(resume_url: String, schedule_url: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            resume_url,
            schedule_url,
        })
    }

    /// Forwards resumes for scoring. The automation writes the scored
    /// candidates back to the candidates table on its own.
    #[instrument(skip(self, job, recruiter, files), fields(job_id = job.id, files = files.len()))]
    pub async fn send_resumes(
        &self,
        job: &JobPosting,
        recruiter: &UserProfile,
        files: Vec<ResumeFile>,
    ) -> Result<()> {
        let mut form = Form::new()
            .text("jobId", job.id.to_string())
            .text("jobTitle", job.title.clone())
            .text("description", job.description.clone())
            .text("requiredSkills", job.required_skills.clone())
            .text("desiredSkills", job.desired_skills.clone())
            .text("userId", recruiter.id.to_string())
            .text("recruiterEmail", recruiter.email.clone());

        for file in files {
            let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.file_name);
            if let Some(content_type) = file.content_type.as_deref() {
                part = part.mime_str(content_type)?;
            }
            form = form.part("files", part);
        }

        let response = self
            .client
            .post(&self.resume_url)
            .multipart(form)
            .send()
            .await?;
        Self::check(response.status(), "resume")?;
        info!("resumes forwarded for scoring");
        Ok(())
    }

    #[instrument(skip(self, notification), fields(candidate = %notification.candidate_name))]
    pub async fn notify_schedule(&self, notification: &ScheduleNotification) -> Result<()> {
        let response = self
            .client
            .post(&self.schedule_url)
            .json(notification)
            .send()
            .await?;
        Self::check(response.status(), "schedule")?;
        info!("schedule webhook delivered");
        Ok(())
    }

    fn check(status: reqwest::StatusCode, hook: &str) -> Result<()> {
        if status.is_success() {
            return Ok(());
        }
        error!(%status, hook, "webhook rejected the request");
        Err(Error::Upstream(format!("The {} webhook returned {}", hook, status)))
    }
}
