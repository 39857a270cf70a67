use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::schedule_dto::{ScheduleListResponse, ScheduleRequest},
    error::Result,
    services::auth_service::ActiveSession,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/schedule",
    responses(
        (status = 200, description = "Interviews on the user's jobs", body = Json<ScheduleListResponse>)
    )
)]
#[axum::debug_handler]
pub async fn list_events(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
) -> Result<impl IntoResponse> {
    let events = state.schedule_service.list(active.profile().id).await?;
    Ok(Json(ScheduleListResponse { events }))
}

#[utoipa::path(
    post,
    path = "/api/schedule",
    request_body = ScheduleRequest,
    responses(
        (status = 201, description = "Interview booked"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Job or candidate not found"),
        (status = 412, description = "Calendar not connected"),
        (status = 502, description = "Calendar notification failed")
    )
)]
#[axum::debug_handler]
pub async fn create_event(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
    Json(payload): Json<ScheduleRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let event = state
        .schedule_service
        .schedule(&active.session, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(event)))
}
