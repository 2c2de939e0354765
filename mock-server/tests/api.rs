use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, app_with_api_key, Envelope, Todolist};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder().method(method).uri(uri).body(String::new()).unwrap()
}

async fn create(app: &Router, title: &str) -> Todolist {
    let body = serde_json::json!({ "title": title }).to_string();
    let resp = app.clone().oneshot(json_request("POST", "/todo-lists", &body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.result_code, 0);
    serde_json::from_value(envelope.data["item"].clone()).unwrap()
}

async fn list(app: &Router) -> Vec<Todolist> {
    let resp = app.clone().oneshot(empty_request("GET", "/todo-lists")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

// --- list ---

#[tokio::test]
async fn list_todolists_empty() {
    let todolists = list(&app()).await;
    assert!(todolists.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todolist_returns_item_in_envelope() {
    let app = app();
    let todolist = create(&app, "Groceries").await;
    assert_eq!(todolist.title, "Groceries");
    assert!(!todolist.id.is_empty());
    assert!(!todolist.added_date.is_empty());
}

#[tokio::test]
async fn newest_todolist_comes_first() {
    let app = app();
    let first = create(&app, "first").await;
    let second = create(&app, "second").await;

    let todolists = list(&app).await;
    let ids: Vec<_> = todolists.iter().map(|t| t.id.clone()).collect();
    assert_eq!(ids, [second.id, first.id]);
    assert!(todolists[0].order < todolists[1].order);
}

#[tokio::test]
async fn create_blank_title_is_rejected_in_envelope() {
    let resp = app()
        .oneshot(json_request("POST", "/todo-lists", r#"{"title":"   "}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.result_code, 1);
    assert_eq!(envelope.messages, vec!["Title is required".to_string()]);
}

#[tokio::test]
async fn create_long_title_is_rejected() {
    let body = serde_json::json!({ "title": "x".repeat(101) }).to_string();
    let resp = app().oneshot(json_request("POST", "/todo-lists", &body)).await.unwrap();
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.result_code, 1);
}

#[tokio::test]
async fn create_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/todo-lists", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- update ---

#[tokio::test]
async fn update_todolist_changes_title() {
    let app = app();
    let created = create(&app, "Old").await;

    let resp = app
        .clone()
        .oneshot(json_request("PUT", &format!("/todo-lists/{}", created.id), r#"{"title":"New"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: Envelope = body_json(resp).await;
    assert_eq!(envelope.result_code, 0);

    let todolists = list(&app).await;
    assert_eq!(todolists[0].title, "New");
    assert_eq!(todolists[0].order, created.order);
}

#[tokio::test]
async fn update_todolist_not_found() {
    let resp = app()
        .oneshot(json_request("PUT", "/todo-lists/ghost", r#"{"title":"New"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "Todolist not found");
}

// --- delete ---

#[tokio::test]
async fn delete_todolist_removes_it() {
    let app = app();
    let keep = create(&app, "keep").await;
    let gone = create(&app, "gone").await;

    let resp = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/todo-lists/{}", gone.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let todolists = list(&app).await;
    assert_eq!(todolists.len(), 1);
    assert_eq!(todolists[0].id, keep.id);
}

#[tokio::test]
async fn delete_todolist_not_found() {
    let resp = app().oneshot(empty_request("DELETE", "/todo-lists/ghost")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let bytes = body_bytes(resp).await;
    assert!(!bytes.is_empty());
}

// --- api key ---

#[tokio::test]
async fn missing_api_key_is_unauthorized() {
    let resp = app_with_api_key("secret")
        .oneshot(empty_request("GET", "/todo-lists"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = body_json(resp).await;
    assert_eq!(body["message"], "API-KEY is missing or invalid");
}

#[tokio::test]
async fn matching_api_key_is_accepted() {
    let req = Request::builder()
        .uri("/todo-lists")
        .header("API-KEY", "secret")
        .body(String::new())
        .unwrap();
    let resp = app_with_api_key("secret").oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}
