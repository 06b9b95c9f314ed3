use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use spectrum_lambda::router;
use spectrum_lambda::state::AppState;
use spectrum_profiles::QuestionBank;
use spectrum_storage::MemoryResultStore;

const USER: &str = "6f1c2a9e-3b7d-4c1e-9a55-0d2e8f4b7c31";

fn app() -> Router {
    router(AppState {
        store: Arc::new(MemoryResultStore::new()),
        questions: Arc::new(QuestionBank::builtin()),
    })
}

fn reference_body() -> Value {
    json!({
        "answers": [
            { "questionId": 1, "selectedColor": "cool-blue", "rating": "L" },
            { "questionId": 1, "selectedColor": "earth-green", "rating": "M" },
            { "questionId": 1, "selectedColor": "sunshine-yellow", "rating": 2 },
            { "questionId": 1, "selectedColor": "fiery-red", "rating": "4" },
            { "questionId": 2, "selectedColor": "cool-blue", "rating": "3" },
            { "questionId": 2, "selectedColor": "earth-green", "rating": 5 },
            { "questionId": 2, "selectedColor": "sunshine-yellow", "rating": "L" },
            { "questionId": 2, "selectedColor": "fiery-red", "rating": "M" },
            { "questionId": 3, "selectedColor": "cool-blue", "rating": "5" },
            { "questionId": 3, "selectedColor": "earth-green", "rating": "L" },
            { "questionId": 3, "selectedColor": "sunshine-yellow", "rating": "M" },
            { "questionId": 3, "selectedColor": "fiery-red", "rating": 3 }
        ]
    })
}

fn post_json(uri: &str, body: &Value, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header("content-type", "application/json");
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, user: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(user) = user {
        builder = builder.header("x-user-id", user);
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let response = app().oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn submit_returns_classified_result() {
    let response = app()
        .oneshot(post_json("/results", &reference_body(), Some(USER)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["personalityType"], "Director");
    assert_eq!(body["dominantColor"], "fiery-red");
    assert_eq!(body["secondaryColor"], "earth-green");
    assert_eq!(body["scores"]["fiery-red"], 33);
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn empty_answers_are_rejected() {
    let response = app()
        .oneshot(post_json("/results", &json!({ "answers": [] }), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "no answers submitted");
}

#[tokio::test]
async fn unknown_question_is_rejected() {
    let body = json!({
        "answers": [{ "questionId": 99, "selectedColor": "cool-blue" }]
    });
    let response = app()
        .oneshot(post_json("/results", &body, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_owner_header_is_rejected() {
    let response = app()
        .oneshot(get("/results", Some("not-a-uuid")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_result_is_not_found() {
    let uri = format!("/results/{}", uuid::Uuid::new_v4());
    let response = app().oneshot(get(&uri, Some(USER))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn results_are_scoped_to_owner() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/results", &reference_body(), Some(USER)))
        .await
        .unwrap();
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    let own = app
        .clone()
        .oneshot(get(&format!("/results/{id}"), Some(USER)))
        .await
        .unwrap();
    assert_eq!(own.status(), StatusCode::OK);

    let anonymous = app
        .clone()
        .oneshot(get(&format!("/results/{id}"), None))
        .await
        .unwrap();
    assert_eq!(anonymous.status(), StatusCode::NOT_FOUND);

    let listed = app.oneshot(get("/results", Some(USER))).await.unwrap();
    let listed = json_body(listed).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn stored_result_serves_dynamics_and_report() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/results", &reference_body(), None))
        .await
        .unwrap();
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    let dynamics = app
        .clone()
        .oneshot(get(&format!("/results/{id}/dynamics"), None))
        .await
        .unwrap();
    assert_eq!(dynamics.status(), StatusCode::OK);
    let dynamics = json_body(dynamics).await;
    assert_eq!(dynamics["conscious"]["preferenceFlow"]["topColor"], "fiery-red");
    assert!(dynamics["unconscious"].is_null());

    let report = app
        .oneshot(get(&format!("/results/{id}/report"), None))
        .await
        .unwrap();
    assert_eq!(report.status(), StatusCode::OK);
    let bytes = to_bytes(report.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with("# Director"));
}

#[tokio::test]
async fn unknown_color_is_not_found() {
    let ok = app().oneshot(get("/colors/cool-blue", None)).await.unwrap();
    assert_eq!(ok.status(), StatusCode::OK);

    let missing = app().oneshot(get("/colors/purple", None)).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn compare_reports_deltas() {
    let body = json!({
        "a": { "fiery-red": 40, "sunshine-yellow": 30, "earth-green": 20, "cool-blue": 10 },
        "b": { "fiery-red": 10, "sunshine-yellow": 30, "earth-green": 20, "cool-blue": 40 }
    });
    let response = app()
        .oneshot(post_json("/compare", &body, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["deltas"]["fiery-red"], -30);
    assert_eq!(body["deltas"]["cool-blue"], 30);
    assert_eq!(body["distance"], 60);
    assert_eq!(body["largestShift"], "fiery-red");
}

#[tokio::test]
async fn team_summary_uses_latest_result_per_user() {
    let app = app();

    app.clone()
        .oneshot(post_json("/results", &reference_body(), Some(USER)))
        .await
        .unwrap();

    let body = json!({ "userIds": [USER, uuid::Uuid::new_v4()] });
    let response = app
        .oneshot(post_json("/team/summary", &body, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["memberCount"], 1);
    assert_eq!(body["dominantColors"]["fiery-red"], 1);
    assert_eq!(body["personalityTypes"]["Director"], 1);
}

#[tokio::test]
async fn non_percentage_vectors_are_rejected() {
    let huge = json!({
        "fiery-red": 3_000_000_000u32, "sunshine-yellow": 3_000_000_000u32,
        "earth-green": 1, "cool-blue": 1
    });
    let response = app()
        .oneshot(post_json("/dynamics", &huge, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json!({
        "a": { "fiery-red": 0, "sunshine-yellow": 0, "earth-green": 0, "cool-blue": 0 },
        "b": { "fiery-red": 3_000_000_000u32, "sunshine-yellow": 0, "earth-green": 0, "cool-blue": 0 }
    });
    let response = app()
        .oneshot(post_json("/compare", &body, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dynamics_accepts_percentages() {
    let body = json!({ "fiery-red": 0, "sunshine-yellow": 0, "earth-green": 0, "cool-blue": 100 });
    let response = app()
        .oneshot(post_json("/dynamics", &body, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["preferenceFlow"]["value"], 100);
}

#[tokio::test]
async fn delete_returns_no_content() {
    let app = app();

    let response = app
        .clone()
        .oneshot(post_json("/results", &reference_body(), Some(USER)))
        .await
        .unwrap();
    let id = json_body(response).await["id"].as_str().unwrap().to_string();

    let deleted = app
        .clone()
        .oneshot(
            Request::delete(format!("/results/{id}"))
                .header("x-user-id", USER)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    let bytes = to_bytes(deleted.into_body(), usize::MAX).await.unwrap();
    assert!(bytes.is_empty());

    let gone = app
        .oneshot(get(&format!("/results/{id}"), Some(USER)))
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}
