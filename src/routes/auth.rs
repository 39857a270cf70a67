use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use tracing::warn;
use validator::Validate;

use crate::{
    dto::auth_dto::{
        AuthResponse, ProfileUpdatePayload, SessionResponse, SignInPayload, SignUpPayload,
    },
    error::Result,
    services::auth_service::ActiveSession,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignUpPayload,
    responses(
        (status = 201, description = "Account created and signed in", body = Json<AuthResponse>),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "E-mail already registered")
    )
)]
#[axum::debug_handler]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpPayload>,
) -> Result<impl IntoResponse> {
    let payload = payload.normalized();
    payload.validate()?;
    let profile = state.auth_service.sign_up(&payload).await?;
    let signed_in = match state
        .auth_service
        .sign_in(&payload.email, &payload.password)
        .await
    {
        Ok(signed_in) => signed_in,
        Err(err) => {
            warn!(user_id = profile.id, error = %err, "account created but sign-in failed");
            return Err(err);
        }
    };
    Ok((StatusCode::CREATED, Json(AuthResponse::from(signed_in))))
}

#[utoipa::path(
    post,
    path = "/api/auth/signin",
    request_body = SignInPayload,
    responses(
        (status = 200, description = "Signed in", body = Json<AuthResponse>),
        (status = 401, description = "Invalid credentials or account")
    )
)]
#[axum::debug_handler]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let signed_in = state
        .auth_service
        .sign_in(&payload.email, &payload.password)
        .await?;
    Ok(Json(AuthResponse::from(signed_in)))
}

#[utoipa::path(
    post,
    path = "/api/auth/signout",
    responses(
        (status = 204, description = "Session cleared"),
        (status = 401, description = "Not signed in")
    )
)]
#[axum::debug_handler]
pub async fn sign_out(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
) -> Result<impl IntoResponse> {
    state.auth_service.sign_out(&active)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/auth/session",
    responses(
        (status = 200, description = "Current session", body = Json<SessionResponse>),
        (status = 401, description = "Not signed in")
    )
)]
#[axum::debug_handler]
pub async fn current_session(Extension(active): Extension<ActiveSession>) -> impl IntoResponse {
    Json(SessionResponse {
        profile: active.session.profile,
        google_calendar_connected: active.session.google_calendar_connected,
    })
}

#[utoipa::path(
    patch,
    path = "/api/auth/profile",
    request_body = ProfileUpdatePayload,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Not signed in")
    )
)]
#[axum::debug_handler]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveSession>,
    Json(payload): Json<ProfileUpdatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let profile = state.auth_service.update_profile(&active, payload).await?;
    Ok(Json(profile))
}
