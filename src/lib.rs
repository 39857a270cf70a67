pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod table_store;
pub mod utils;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::Result;
use crate::middleware::{auth::require_session, cors::api_cors, rate_limit};
use crate::services::{
    aggregation_service::AggregationService, auth_service::AuthService,
    candidate_service::CandidateService, job_service::JobService,
    schedule_service::ScheduleService, talent_pool_service::TalentPoolService,
    webhook_service::WebhookService,
};
use crate::session::SessionStore;
use crate::table_store::TableStoreClient;

const RESUME_UPLOAD_LIMIT: usize = 50 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub aggregation_service: AggregationService,
    pub job_service: JobService,
    pub candidate_service: CandidateService,
    pub schedule_service: ScheduleService,
    pub talent_pool_service: TalentPoolService,
    pub google_oauth_url: String,
    pub public_rps: u32,
}

impl AppState {
    pub fn new(config: &Config, sessions: Arc<dyn SessionStore>) -> Result<Self> {
        let store = TableStoreClient::new(
            &config.table_store_url,
            &config.table_store_token,
            config.http_timeout_secs,
        )?;
        let webhooks = WebhookService::new(
            config.resume_webhook_url.clone(),
            config.schedule_webhook_url.clone(),
            config.http_timeout_secs,
        )?;
        let tables = config.tables;

        let aggregation_service = AggregationService::new(store.clone(), tables);
        let auth_service = AuthService::new(
            store.clone(),
            tables.users,
            sessions,
            config.jwt_secret.clone(),
            config.session_ttl_hours,
        );
        let job_service = JobService::new(store.clone(), tables.jobs, aggregation_service.clone());
        let candidate_service = CandidateService::new(
            store.clone(),
            tables,
            aggregation_service.clone(),
            webhooks.clone(),
        );
        let schedule_service =
            ScheduleService::new(store, tables, aggregation_service.clone(), webhooks);
        let talent_pool_service = TalentPoolService::new(aggregation_service.clone());

        Ok(Self {
            auth_service,
            aggregation_service,
            job_service,
            candidate_service,
            schedule_service,
            talent_pool_service,
            google_oauth_url: config.google_oauth_url.clone(),
            public_rps: config.public_rps,
        })
    }
}

/// The full HTTP surface.
pub fn app(state: AppState) -> Router {
    let base_routes = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/navigation", get(routes::navigation::navigation));

    let public_api = Router::new()
        .route("/api/auth/signup", post(routes::auth::sign_up))
        .route("/api/auth/signin", post(routes::auth::sign_in))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::RateLimiter::new(state.public_rps),
            rate_limit::rps_middleware,
        ));

    let session_api = Router::new()
        .route("/api/auth/signout", post(routes::auth::sign_out))
        .route("/api/auth/session", get(routes::auth::current_session))
        .route("/api/auth/profile", patch(routes::auth::update_profile))
        .route("/api/dashboard", get(routes::dashboard::dashboard))
        .route("/api/jobs", post(routes::jobs::create_job))
        .route(
            "/api/jobs/:id",
            axum::routing::delete(routes::jobs::delete_job),
        )
        .route("/api/jobs/:id/results", get(routes::jobs::job_results))
        .route(
            "/api/jobs/:id/resumes",
            post(routes::jobs::upload_resumes).layer(DefaultBodyLimit::max(RESUME_UPLOAD_LIMIT)),
        )
        .route(
            "/api/candidates/:source/:id/status",
            patch(routes::candidates::update_status),
        )
        .route(
            "/api/schedule",
            get(routes::schedule::list_events).post(routes::schedule::create_event),
        )
        .route("/api/talent-pool", get(routes::talent_pool::search))
        .route("/api/talent-pool/export", get(routes::talent_pool::export))
        .route(
            "/api/settings/google-calendar",
            get(routes::settings::calendar_status).delete(routes::settings::calendar_disconnect),
        )
        .route(
            "/api/settings/google-calendar/connect",
            post(routes::settings::calendar_connect),
        )
        .route(
            "/api/settings/google-calendar/confirm",
            post(routes::settings::calendar_confirm),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    base_routes
        .merge(public_api)
        .merge(session_api)
        .with_state(state)
        .layer(api_cors())
        .layer(TraceLayer::new_for_http())
}
