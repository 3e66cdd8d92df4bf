use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use solvelog_core::db::open_db_in_memory;
use solvelog_server::config::Config;
use solvelog_server::llm::GeminiClient;
use solvelog_server::routes::build_router;
use solvelog_server::state::AppState;
use tower::ServiceExt;

fn test_router() -> Router {
    let conn = open_db_in_memory().expect("in-memory db should open");
    let config = Config::from_env();
    let llm = GeminiClient::new(&config.gemini).expect("llm handle should build");
    build_router(AppState::new(conn, llm, config))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("request should not fail at transport level");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("response body should be JSON");
    (status, body)
}

fn post_journal(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/journal")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request should build")
}

fn get_journal() -> Request<Body> {
    Request::builder()
        .uri("/journal")
        .body(Body::empty())
        .expect("request should build")
}

#[tokio::test]
async fn post_then_get_roundtrip() {
    let router = test_router();

    let (status, body) = send(
        &router,
        post_journal(&json!({
            "id": 1,
            "problemName": "Two Sum",
            "problemId": "1",
            "topic": "Array",
            "difficulty": "Easy"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], json!(false));
    assert_eq!(body["message"], json!("Entry added successfully"));

    let (status, body) = send(&router, get_journal()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("success"));

    let entries = body["data"].as_array().expect("data should be an array");
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry["id"], json!("1"));
    assert_eq!(entry["problemName"], json!("Two Sum"));
    assert_eq!(entry["problemId"], json!("1"));
    assert_eq!(entry["topic"], json!("Array"));
    assert_eq!(entry["difficulty"], json!("Easy"));

    let date_done: DateTime<Utc> = entry["dateDone"]
        .as_str()
        .expect("dateDone should be a string")
        .parse()
        .expect("dateDone should be RFC 3339");
    let age = Utc::now().signed_duration_since(date_done);
    assert!(age.num_seconds().abs() < 5, "dateDone should be close to now");
}

#[tokio::test]
async fn post_with_empty_required_field_is_rejected_and_not_persisted() {
    let router = test_router();

    let (status, body) = send(
        &router,
        post_journal(&json!({
            "problemName": "",
            "problemId": "1",
            "topic": "Array",
            "difficulty": "Easy"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["message"], json!("missing required field: problemName"));

    let (status, body) = send(&router, get_journal()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn malformed_body_is_rejected_with_envelope() {
    let router = test_router();

    let request = Request::builder()
        .method("POST")
        .uri("/journal")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request should build");

    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["message"], json!("Invalid request body"));
}

#[tokio::test]
async fn get_on_empty_store_returns_empty_data() {
    let router = test_router();

    let (status, body) = send(&router, get_journal()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], json!(false));
    assert_eq!(body["message"], json!("success"));
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn duplicate_id_returns_conflict() {
    let router = test_router();
    let payload = json!({
        "id": 7,
        "problemName": "Valid Parentheses",
        "problemId": "20",
        "topic": "Stack",
        "difficulty": "Easy"
    });

    let (status, _) = send(&router, post_journal(&payload)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&router, post_journal(&payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], json!(true));

    let (_, body) = send(&router, get_journal()).await;
    assert_eq!(
        body["data"].as_array().expect("data should be an array").len(),
        1
    );
}

#[tokio::test]
async fn entry_with_details_roundtrips_on_the_wire() {
    let router = test_router();

    let (status, _) = send(
        &router,
        post_journal(&json!({
            "id": 2,
            "problemName": "Add Two Numbers",
            "problemId": "2",
            "dateDone": "2024-03-15",
            "topic": "Linked List",
            "difficulty": "Medium",
            "details": {
                "inputs": "two linked lists",
                "ideas": [{"title": "digit-by-digit", "pros": "simple", "cons": ""}],
                "keyLearnings": {"coreIdea": "carry propagation"},
                "selfReflection": {"confidenceLevel": "medium"}
            }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&router, get_journal()).await;
    let entry = &body["data"][0];
    let date_done: DateTime<Utc> = entry["dateDone"]
        .as_str()
        .expect("dateDone should be a string")
        .parse()
        .expect("dateDone should be RFC 3339");
    assert_eq!(date_done.to_rfc3339(), "2024-03-15T00:00:00+00:00");
    assert_eq!(entry["details"]["inputs"], json!("two linked lists"));
    assert_eq!(entry["details"]["ideas"][0]["title"], json!("digit-by-digit"));
    assert_eq!(
        entry["details"]["keyLearnings"]["coreIdea"],
        json!("carry propagation")
    );
    assert_eq!(
        entry["details"]["selfReflection"]["confidenceLevel"],
        json!("medium")
    );
}

#[tokio::test]
async fn health_reports_version_and_llm_model() {
    let router = test_router();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request should build");
    let (status, body) = send(&router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["error"], json!(false));
    assert_eq!(body["data"]["status"], json!("ok"));
    assert!(body["data"]["version"].as_str().is_some());
    assert!(body["data"]["llmModel"].as_str().is_some());
}
