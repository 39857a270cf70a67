#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use recruitment_portal::{
    app,
    config::{Config, TableIds},
    models::user::UserProfile,
    session::{MemorySessionStore, Session, SessionStore},
    utils::token::{generate_session_key, issue_token},
    AppState,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use wiremock::MockServer;

pub const JWT_SECRET: &str = "test_secret_key";
pub const STORE_TOKEN: &str = "store-token";
pub const TABLES: TableIds = TableIds {
    jobs: 709,
    candidates: 710,
    users: 711,
    chat_candidates: 712,
    schedule: 713,
};

pub fn rows_path(table_id: u32) -> String {
    format!("/api/database/rows/table/{}/", table_id)
}

pub fn row_path(table_id: u32, row_id: i64) -> String {
    format!("/api/database/rows/table/{}/{}/", table_id, row_id)
}

pub struct TestApp {
    pub router: Router,
    pub store: MockServer,
    pub webhooks: MockServer,
    pub sessions: Arc<MemorySessionStore>,
}

pub fn test_config(store: &MockServer, webhooks: &MockServer) -> Config {
    Config {
        server_address: "127.0.0.1:0".to_string(),
        table_store_url: store.uri(),
        table_store_token: STORE_TOKEN.to_string(),
        tables: TABLES,
        jwt_secret: JWT_SECRET.to_string(),
        session_ttl_hours: 1,
        session_dir: None,
        resume_webhook_url: format!("{}/webhook/resumes", webhooks.uri()),
        schedule_webhook_url: format!("{}/webhook/schedule", webhooks.uri()),
        google_oauth_url: "https://auth.example.com/callback".to_string(),
        public_rps: 100,
        http_timeout_secs: 5,
    }
}

pub async fn setup_app() -> TestApp {
    let store = MockServer::start().await;
    let webhooks = MockServer::start().await;
    let sessions = Arc::new(MemorySessionStore::new());

    let config = test_config(&store, &webhooks);
    let state = AppState::new(&config, sessions.clone()).expect("app state");

    TestApp {
        router: app(state),
        store,
        webhooks,
        sessions,
    }
}

pub fn recruiter(id: i64) -> UserProfile {
    UserProfile {
        id,
        name: "Rita Recruiter".to_string(),
        email: "rita@example.com".to_string(),
        company: "Acme".to_string(),
        phone: "11999990000".to_string(),
        avatar_url: None,
    }
}

impl TestApp {
    /// Stores a session directly and returns a bearer token for it.
    pub fn sign_in_as(&self, profile: UserProfile, calendar_connected: bool) -> String {
        let key = generate_session_key();
        let mut session = Session::new(profile.clone());
        session.google_calendar_connected = calendar_connected;
        self.sessions.save(&key, &session).expect("save session");
        issue_token(profile.id, &key, JWT_SECRET, 1).expect("issue token")
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, JsonValue) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
        };
        (status, body)
    }
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Option<JsonValue>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn page(results: JsonValue) -> JsonValue {
    let count = results.as_array().map(|rows| rows.len()).unwrap_or(0);
    serde_json::json!({
        "count": count,
        "next": null,
        "previous": null,
        "results": results,
    })
}

/// Mounts list responses for the jobs table and both candidate tables.
pub async fn mount_dashboard_tables(
    store: &MockServer,
    jobs: JsonValue,
    regular: JsonValue,
    chat: JsonValue,
) {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    for (table, rows) in [
        (TABLES.jobs, jobs),
        (TABLES.candidates, regular),
        (TABLES.chat_candidates, chat),
    ] {
        Mock::given(method("GET"))
            .and(path(rows_path(table)))
            .respond_with(ResponseTemplate::new(200).set_body_json(page(rows)))
            .mount(store)
            .await;
    }
}

pub fn sample_jobs() -> JsonValue {
    serde_json::json!([
        { "id": 1, "titulo": "Backend", "descricao": "Rust", "usuario": [{ "id": 7, "value": "Rita" }] },
        { "id": 2, "titulo": "Vaga X", "descricao": "Ops", "usuario": [{ "id": 7, "value": "Rita" }] },
        { "id": 3, "titulo": "Foreign", "usuario": [{ "id": 8, "value": "Joao" }] }
    ])
}

pub fn sample_regular() -> JsonValue {
    serde_json::json!([
        {
            "id": 10, "nome": "Ana", "idade": 25, "score": "88.5",
            "sexo": { "id": 1, "value": "Feminino" },
            "escolaridade": { "id": 4, "value": "Superior completo" },
            "vaga": [{ "id": 1, "value": "Backend" }],
            "usuario": [{ "id": 7, "value": "Rita" }],
            "status": { "id": 1, "value": "Triagem" }
        },
        {
            "id": 11, "nome": "Carlos", "idade": 41, "score": 60,
            "sexo": { "id": 2, "value": "Masculino" },
            "vaga": [{ "id": 1, "value": "Backend" }],
            "usuario": [{ "id": 7, "value": "Rita" }],
            "status": { "id": 2, "value": "Entrevista" }
        },
        {
            "id": 12, "nome": "Hidden",
            "vaga": [{ "id": 3, "value": "Foreign" }],
            "usuario": [{ "id": 8, "value": "Joao" }]
        }
    ])
}

pub fn sample_chat() -> JsonValue {
    serde_json::json!([
        {
            "id": 10, "nome": "Bruno", "idade": "33", "sexo": "Masculino",
            "vaga": "Vaga X",
            "usuario": [{ "id": 7, "value": "Rita" }],
            "status": "Aprovado"
        },
        { "id": 11, "nome": "No owner", "vaga": "Vaga X" }
    ])
}
