use recruitment_portal::error::Error;
use recruitment_portal::table_store::{RowQuery, TableStoreClient};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn get_sends_token_field_names_and_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/database/rows/table/709/"))
        .and(header("authorization", "Token tok"))
        .and(query_param("user_field_names", "true"))
        .and(query_param("filter__usuario__contains", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{ "id": 1 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    // A trailing slash on the base URL must not double up.
    let client = TableStoreClient::new(&format!("{}/", server.uri()), "tok", 5).unwrap();
    let query = RowQuery::new().filter_contains("usuario", 7);
    let page = client.get::<Value>(709, &query).await.unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.results, vec![json!({ "id": 1 })]);
}

#[tokio::test]
async fn post_patch_and_delete_target_rows() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/database/rows/table/713/"))
        .and(body_json(json!({ "Título": "x" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/database/rows/table/710/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/database/rows/table/709/5/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = TableStoreClient::new(&server.uri(), "tok", 5).unwrap();
    let created: Value = client.post(713, &json!({ "Título": "x" })).await.unwrap();
    assert_eq!(created["id"], 5);
    let _: Value = client
        .patch(710, 5, &json!({ "status": "Aprovado" }))
        .await
        .unwrap();
    client.delete(709, 5).await.unwrap();
}

#[tokio::test]
async fn non_success_status_becomes_a_table_store_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let client = TableStoreClient::new(&server.uri(), "bad", 5).unwrap();
    let err = client
        .get::<Value>(711, &RowQuery::new())
        .await
        .unwrap_err();

    match err {
        Error::TableStore { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("invalid token"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
