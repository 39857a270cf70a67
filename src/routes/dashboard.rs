use axum::{
    extract::State,
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::dashboard_dto::DashboardResponse, services::auth_service::ActiveSession, AppState,
};

/// Always 200: a failed load comes back as empty lists with an `error`
/// message.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Jobs, candidates and stats", body = Json<DashboardResponse>),
        (status = 401, description = "Not signed in")
    )
)]
#[axum::debug_handler]
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
) -> impl IntoResponse {
    let load = state
        .aggregation_service
        .load_or_empty(active.profile().id)
        .await;
    Json(DashboardResponse::from(load))
}
