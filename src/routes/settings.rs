use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::settings_dto::CalendarConnectionResponse, error::Result,
    services::auth_service::ActiveSession, AppState,
};

fn connection(state: &AppState, connected: bool) -> Json<CalendarConnectionResponse> {
    Json(CalendarConnectionResponse {
        connected,
        authorize_url: state.google_oauth_url.clone(),
    })
}

#[utoipa::path(
    get,
    path = "/api/settings/google-calendar",
    responses(
        (status = 200, description = "Calendar connection state", body = Json<CalendarConnectionResponse>)
    )
)]
#[axum::debug_handler]
pub async fn calendar_status(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
) -> impl IntoResponse {
    connection(&state, active.session.google_calendar_connected)
}

/// Returns the URL the browser opens in the authorization popup. The
/// connection is only recorded once the popup reports back via `confirm`.
#[utoipa::path(
    post,
    path = "/api/settings/google-calendar/connect",
    responses(
        (status = 200, description = "Authorization URL", body = Json<CalendarConnectionResponse>)
    )
)]
#[axum::debug_handler]
pub async fn calendar_connect(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
) -> impl IntoResponse {
    connection(&state, active.session.google_calendar_connected)
}

#[utoipa::path(
    post,
    path = "/api/settings/google-calendar/confirm",
    responses(
        (status = 200, description = "Calendar marked as connected", body = Json<CalendarConnectionResponse>)
    )
)]
#[axum::debug_handler]
pub async fn calendar_confirm(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
) -> Result<impl IntoResponse> {
    let session = state.auth_service.set_calendar_connected(&active, true)?;
    Ok(connection(&state, session.google_calendar_connected))
}

#[utoipa::path(
    delete,
    path = "/api/settings/google-calendar",
    responses(
        (status = 200, description = "Calendar disconnected", body = Json<CalendarConnectionResponse>)
    )
)]
#[axum::debug_handler]
pub async fn calendar_disconnect(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
) -> Result<impl IntoResponse> {
    let session = state.auth_service.set_calendar_connected(&active, false)?;
    Ok(connection(&state, session.google_calendar_connected))
}
