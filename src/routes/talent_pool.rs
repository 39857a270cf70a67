use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    Extension,
};

use crate::{
    dto::talent_pool_dto::{CandidateFilter, TalentPoolResponse},
    error::Result,
    services::{
        auth_service::ActiveSession,
        export_service::{ExportService, XLSX_CONTENT_TYPE},
    },
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/talent-pool",
    params(
        ("name" = Option<String>, Query, description = "Name contains (case-insensitive)"),
        ("job" = Option<String>, Query, description = "Job title"),
        ("sex" = Option<String>, Query, description = "Sex"),
        ("education" = Option<String>, Query, description = "Education level"),
        ("min_age" = Option<u32>, Query, description = "Minimum age"),
        ("max_age" = Option<u32>, Query, description = "Maximum age")
    ),
    responses(
        (status = 200, description = "Filtered candidates", body = Json<TalentPoolResponse>)
    )
)]
#[axum::debug_handler]
pub async fn search(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
    Query(filter): Query<CandidateFilter>,
) -> Result<impl IntoResponse> {
    let response = state
        .talent_pool_service
        .search(active.profile().id, &filter)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/talent-pool/export",
    responses(
        (status = 200, description = "Filtered candidates as XLSX")
    )
)]
#[axum::debug_handler]
pub async fn export(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
    Query(filter): Query<CandidateFilter>,
) -> Result<impl IntoResponse> {
    let response = state
        .talent_pool_service
        .search(active.profile().id, &filter)
        .await?;
    let buffer = ExportService::talent_pool_xlsx(&response.candidates)?;

    let filename = format!("talentos_{}.xlsx", chrono::Utc::now().format("%Y%m%d"));
    let disposition = format!("attachment; filename=\"{}\"", filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        buffer,
    ))
}
