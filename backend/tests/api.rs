use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use backend::{app, db, repositories::contact_repository::ContactRepository, AppState};

fn test_app() -> Router {
    let pool = db::memory_pool().expect("in-memory pool");
    let state = Arc::new(AppState {
        contact_store: Arc::new(ContactRepository::new(pool)),
    });
    app(state, None).expect("router")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn full_form() -> Value {
    json!({
        "name": "John Doe",
        "email": "john@example.com",
        "subject": "Product Inquiry",
        "message": "Do the cushions come off?"
    })
}

#[tokio::test]
async fn health_reports_running() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "NOVA API is running");
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["version"], "1.0.0");
}

#[tokio::test]
async fn features_are_wrapped_in_data() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/features")).await;
    assert_eq!(status, StatusCode::OK);
    let features = body["data"].as_array().unwrap();
    assert_eq!(features.len(), 6);
    assert_eq!(features[0]["title"], "Hi-Res Audio");
    assert!(features.iter().all(|f| f["icon"].is_string() && f["description"].is_string()));
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn specs_list_categories_with_items() {
    let app = test_app();
    let (status, body) = send(&app, get("/api/specs")).await;
    assert_eq!(status, StatusCode::OK);
    let specs = body["data"].as_array().unwrap();
    assert_eq!(specs[1]["category"], "Battery");
    assert_eq!(specs[1]["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn contact_round_trips_into_the_listing() {
    let app = test_app();
    let (status, body) = send(&app, post_json("/api/contact", &full_form())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Thank you for contacting us! We'll get back to you soon."
    );
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, get("/api/contacts")).await;
    assert_eq!(status, StatusCode::OK);
    let contacts = body["data"].as_array().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["id"].as_i64(), Some(id));
    assert_eq!(contacts[0]["email"], "john@example.com");
    assert!(contacts[0]["created_at"].is_string());
}

#[tokio::test]
async fn contact_with_blank_field_is_rejected() {
    let app = test_app();
    let mut form = full_form();
    form["message"] = json!("");
    let (status, body) = send(&app, post_json("/api/contact", &form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "message": "All fields are required"}));

    let (_, listing) = send(&app, get("/api/contacts")).await;
    assert!(listing["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn contact_with_missing_key_counts_as_blank() {
    let app = test_app();
    let form = json!({"name": "Jo", "email": "jo@example.com", "subject": "Hi"});
    let (status, body) = send(&app, post_json("/api/contact", &form)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn malformed_contact_body_is_rejected() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "message": "Invalid request body"}));
}

#[tokio::test]
async fn wrong_method_is_not_allowed() {
    let app = test_app();
    let (status, _) = send(&app, get("/api/contact")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app, post_json("/api/features", &json!({}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn preflight_allows_any_origin_by_default() {
    let app = test_app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
