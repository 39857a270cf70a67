use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::{dashboard_dto::DashboardResponse, results_dto::StatusUpdatePayload},
    error::{Error, Result},
    models::candidate::CandidateSource,
    services::auth_service::ActiveSession,
    AppState,
};

#[utoipa::path(
    patch,
    path = "/api/candidates/{source}/{id}/status",
    params(
        ("source" = String, Path, description = "regular | chat"),
        ("id" = i64, Path, description = "Candidate row ID")
    ),
    request_body = StatusUpdatePayload,
    responses(
        (status = 200, description = "Status changed; refreshed data", body = Json<DashboardResponse>),
        (status = 404, description = "Candidate not found")
    )
)]
#[axum::debug_handler]
pub async fn update_status(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
    Path((source, id)): Path<(String, i64)>,
    Json(payload): Json<StatusUpdatePayload>,
) -> Result<impl IntoResponse> {
    let source: CandidateSource = source.parse().map_err(Error::BadRequest)?;
    let data = state
        .candidate_service
        .update_status(active.profile().id, source, id, payload.status)
        .await?;
    Ok(Json(DashboardResponse::from(data)))
}
