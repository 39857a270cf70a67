use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        dashboard_dto::DashboardResponse,
        job_dto::{CreateJobPayload, ResumeUploadResponse},
        results_dto::ResultsQuery,
    },
    error::Result,
    services::{auth_service::ActiveSession, webhook_service::ResumeFile},
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job created"),
        (status = 400, description = "Invalid payload"),
        (status = 502, description = "Table store unavailable")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state
        .job_service
        .create(active.profile().id, &payload)
        .await?;
    Ok((StatusCode::CREATED, Json(job)))
}

#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    params(
        ("id" = i64, Path, description = "Job row ID")
    ),
    responses(
        (status = 200, description = "Job deleted; refreshed data", body = Json<DashboardResponse>),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let data = state.job_service.delete(active.profile().id, id).await?;
    Ok(Json(DashboardResponse::from(data)))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}/results",
    params(
        ("id" = i64, Path, description = "Job row ID"),
        ("view" = Option<String>, Query, description = "table | kanban"),
        ("sort" = Option<String>, Query, description = "score | name | age"),
        ("direction" = Option<String>, Query, description = "asc | desc")
    ),
    responses(
        (status = 200, description = "Candidates for the job"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn job_results(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
    Path(id): Path<i64>,
    Query(query): Query<ResultsQuery>,
) -> Result<impl IntoResponse> {
    let results = state
        .candidate_service
        .results(active.profile().id, id, &query)
        .await?;
    Ok(Json(results))
}

#[utoipa::path(
    post,
    path = "/api/jobs/{id}/resumes",
    params(
        ("id" = i64, Path, description = "Job row ID")
    ),
    responses(
        (status = 202, description = "Resumes forwarded for scoring", body = Json<ResumeUploadResponse>),
        (status = 400, description = "No files"),
        (status = 404, description = "Job not found"),
        (status = 502, description = "Scoring webhook failed")
    )
)]
#[axum::debug_handler]
pub async fn upload_resumes(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
    Path(id): Path<i64>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse> {
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        if bytes.is_empty() {
            continue;
        }
        files.push(ResumeFile {
            file_name,
            content_type,
            bytes,
        });
    }

    let files_sent = state
        .candidate_service
        .submit_resumes(active.profile(), id, files)
        .await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(ResumeUploadResponse {
            job_id: id,
            files_sent,
        }),
    ))
}
