mod common;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use common::{
    json_request, mount_dashboard_tables, recruiter, rows_path, sample_chat, sample_jobs,
    sample_regular, setup_app, TABLES,
};

fn booking() -> serde_json::Value {
    json!({
        "candidate_id": 10,
        "candidate_source": "regular",
        "job_id": 1,
        "title": "Entrevista Ana",
        "start": "2025-03-10T14:00:00Z",
        "end": "2025-03-10T15:00:00Z",
        "details": "Google Meet"
    })
}

fn event_row() -> serde_json::Value {
    json!({
        "id": 90,
        "Título": "Entrevista Ana",
        "Início": "2025-03-10T14:00:00.000Z",
        "Fim": "2025-03-10T15:00:00.000Z",
        "Detalhes": "Google Meet",
        "Candidato": [{ "id": 10, "value": "Ana" }],
        "Vaga": [{ "id": 1, "value": "Backend" }]
    })
}

#[tokio::test]
async fn scheduling_requires_a_connected_calendar() {
    let app = setup_app().await;
    let token = app.sign_in_as(recruiter(7), false);

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.store)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.webhooks)
        .await;

    let (status, _) = app
        .send(json_request("POST", "/api/schedule", Some(token.as_str()), Some(booking())))
        .await;
    assert_eq!(status, StatusCode::PRECONDITION_FAILED);
}

#[tokio::test]
async fn scheduling_writes_the_row_then_notifies() {
    let app = setup_app().await;
    mount_dashboard_tables(&app.store, sample_jobs(), sample_regular(), sample_chat()).await;
    let token = app.sign_in_as(recruiter(7), true);

    Mock::given(method("POST"))
        .and(path(rows_path(TABLES.schedule)))
        .and(body_partial_json(json!({
            "Título": "Entrevista Ana",
            "Início": "2025-03-10T14:00:00.000Z",
            "Candidato": [10],
            "Vaga": [1]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(event_row()))
        .expect(1)
        .mount(&app.store)
        .await;
    Mock::given(method("POST"))
        .and(path("/webhook/schedule"))
        .and(body_json(json!({
            "candidateName": "Ana",
            "jobTitle": "Backend",
            "startTime": "2025-03-10T14:00:00.000Z",
            "endTime": "2025-03-10T15:00:00.000Z",
            "details": "Google Meet",
            "recruiterEmail": "rita@example.com"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.webhooks)
        .await;

    let (status, body) = app
        .send(json_request("POST", "/api/schedule", Some(token.as_str()), Some(booking())))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 90);
    assert_eq!(body["job"]["id"], 1);
}

#[tokio::test]
async fn webhook_failure_keeps_the_row_and_reports_bad_gateway() {
    let app = setup_app().await;
    mount_dashboard_tables(&app.store, sample_jobs(), sample_regular(), sample_chat()).await;
    let token = app.sign_in_as(recruiter(7), true);

    Mock::given(method("POST"))
        .and(path(rows_path(TABLES.schedule)))
        .respond_with(ResponseTemplate::new(200).set_body_json(event_row()))
        .expect(1)
        .mount(&app.store)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&app.store)
        .await;
    Mock::given(method("POST"))
        .and(path("/webhook/schedule"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.webhooks)
        .await;

    let (status, body) = app
        .send(json_request("POST", "/api/schedule", Some(token.as_str()), Some(booking())))
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("saved"));
}

#[tokio::test]
async fn chat_candidates_are_named_in_the_details_not_linked() {
    let app = setup_app().await;
    mount_dashboard_tables(&app.store, sample_jobs(), sample_regular(), sample_chat()).await;
    let token = app.sign_in_as(recruiter(7), true);

    Mock::given(method("POST"))
        .and(path(rows_path(TABLES.schedule)))
        .and(body_partial_json(json!({
            "Candidato": [],
            "Vaga": [2],
            "Detalhes": "Candidato (chat): Bruno\nGoogle Meet"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 91,
            "Título": "Entrevista Bruno",
            "Início": "2025-03-10T14:00:00.000Z",
            "Fim": "2025-03-10T15:00:00.000Z",
            "Detalhes": "Candidato (chat): Bruno\nGoogle Meet",
            "Candidato": [],
            "Vaga": [{ "id": 2, "value": "Vaga X" }]
        })))
        .expect(1)
        .mount(&app.store)
        .await;
    Mock::given(method("POST"))
        .and(path("/webhook/schedule"))
        .and(body_partial_json(json!({ "candidateName": "Bruno", "jobTitle": "Vaga X" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.webhooks)
        .await;

    let mut request = booking();
    request["candidate_source"] = json!("chat");
    request["job_id"] = json!(2);
    request["title"] = json!("Entrevista Bruno");
    let (status, body) = app
        .send(json_request("POST", "/api/schedule", Some(token.as_str()), Some(request)))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 91);

    let requests = app.store.received_requests().await.unwrap();
    let created = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .expect("event row request");
    let sent: serde_json::Value = serde_json::from_slice(&created.body).unwrap();
    assert_eq!(sent["Candidato"], json!([]));
}

#[tokio::test]
async fn candidate_must_have_applied_to_the_job() {
    let app = setup_app().await;
    mount_dashboard_tables(&app.store, sample_jobs(), sample_regular(), sample_chat()).await;
    let token = app.sign_in_as(recruiter(7), true);

    Mock::given(method("POST"))
        .and(path(rows_path(TABLES.schedule)))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.store)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.webhooks)
        .await;

    // Ana applied to Backend (1), not to Vaga X (2).
    let mut request = booking();
    request["job_id"] = json!(2);
    let (status, _) = app
        .send(json_request("POST", "/api/schedule", Some(token.as_str()), Some(request)))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn end_before_start_is_rejected() {
    let app = setup_app().await;
    let token = app.sign_in_as(recruiter(7), true);

    let mut request = booking();
    request["end"] = json!("2025-03-10T13:00:00Z");
    let (status, _) = app
        .send(json_request("POST", "/api/schedule", Some(token.as_str()), Some(request)))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn calendar_confirmation_unlocks_scheduling_state() {
    let app = setup_app().await;
    let token = app.sign_in_as(recruiter(7), false);

    let (_, body) = app
        .send(json_request("GET", "/api/settings/google-calendar", Some(token.as_str()), None))
        .await;
    assert_eq!(body["connected"], false);
    assert_eq!(body["authorize_url"], "https://auth.example.com/callback");

    let (status, body) = app
        .send(json_request(
            "POST",
            "/api/settings/google-calendar/confirm",
            Some(token.as_str()),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["connected"], true);

    let (_, body) = app
        .send(json_request("GET", "/api/auth/session", Some(token.as_str()), None))
        .await;
    assert_eq!(body["google_calendar_connected"], true);

    let (_, body) = app
        .send(json_request("DELETE", "/api/settings/google-calendar", Some(token.as_str()), None))
        .await;
    assert_eq!(body["connected"], false);
}

#[tokio::test]
async fn agenda_lists_events_on_own_jobs() {
    let app = setup_app().await;
    Mock::given(method("GET"))
        .and(path(rows_path(TABLES.jobs)))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::page(sample_jobs())))
        .mount(&app.store)
        .await;
    let mut foreign = event_row();
    foreign["id"] = json!(91);
    foreign["Vaga"] = json!([{ "id": 3, "value": "Foreign" }]);
    Mock::given(method("GET"))
        .and(path(rows_path(TABLES.schedule)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::page(json!([event_row(), foreign]))),
        )
        .mount(&app.store)
        .await;
    let token = app.sign_in_as(recruiter(7), true);

    let (status, body) = app
        .send(json_request("GET", "/api/schedule", Some(token.as_str()), None))
        .await;
    assert_eq!(status, StatusCode::OK);
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["id"], 90);
}
