use std::sync::Arc;

use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

pub const MAX_TITLE_LEN: usize = 100;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todolist {
    pub id: String,
    pub title: String,
    pub added_date: String,
    pub order: i64,
}

#[derive(Deserialize)]
pub struct TitleInput {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub result_code: i32,
    pub messages: Vec<String>,
    pub fields_errors: Vec<Value>,
    pub data: Value,
}

impl Envelope {
    fn ok(data: Value) -> Self {
        Self {
            result_code: 0,
            messages: Vec::new(),
            fields_errors: Vec::new(),
            data,
        }
    }

    fn rejected(message: &str) -> Self {
        Self {
            result_code: 1,
            messages: vec![message.to_string()],
            fields_errors: Vec::new(),
            data: json!({}),
        }
    }
}

/// Todolists in display order: newest first.
pub type Db = Arc<RwLock<Vec<Todolist>>>;

pub fn app() -> Router {
    routes(Arc::new(RwLock::new(Vec::new())))
}

/// Same routes, but every request must carry `API-KEY: <api_key>`.
pub fn app_with_api_key(api_key: &str) -> Router {
    let expected: Arc<str> = Arc::from(api_key);
    app().layer(middleware::from_fn(move |req: Request, next: Next| {
        let expected = Arc::clone(&expected);
        async move {
            let provided = req.headers().get("API-KEY").and_then(|v| v.to_str().ok());
            if provided != Some(&*expected) {
                return not_ok(StatusCode::UNAUTHORIZED, "API-KEY is missing or invalid");
            }
            next.run(req).await
        }
    }))
}

fn routes(db: Db) -> Router {
    Router::new()
        .route("/todo-lists", get(list_todolists).post(create_todolist))
        .route("/todo-lists/{id}", put(update_todolist).delete(delete_todolist))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_api_key(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_api_key(api_key)).await
}

fn not_ok(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn validate_title(title: &str) -> Option<&'static str> {
    if title.trim().is_empty() {
        Some("Title is required")
    } else if title.chars().count() > MAX_TITLE_LEN {
        Some("Title should be at most 100 characters")
    } else {
        None
    }
}

async fn list_todolists(State(db): State<Db>) -> Json<Vec<Todolist>> {
    Json(db.read().await.clone())
}

async fn create_todolist(State(db): State<Db>, Json(input): Json<TitleInput>) -> Json<Envelope> {
    if let Some(message) = validate_title(&input.title) {
        return Json(Envelope::rejected(message));
    }
    let mut todolists = db.write().await;
    let order = todolists.iter().map(|t| t.order).min().map_or(0, |min| min - 1);
    let todolist = Todolist {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        added_date: chrono::Utc::now().to_rfc3339(),
        order,
    };
    debug!(id = %todolist.id, "create_todolist");
    todolists.insert(0, todolist.clone());
    Json(Envelope::ok(json!({ "item": todolist })))
}

async fn update_todolist(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<TitleInput>,
) -> Response {
    if let Some(message) = validate_title(&input.title) {
        return Json(Envelope::rejected(message)).into_response();
    }
    let mut todolists = db.write().await;
    match todolists.iter_mut().find(|t| t.id == id) {
        Some(todolist) => {
            todolist.title = input.title;
            Json(Envelope::ok(json!({}))).into_response()
        }
        None => not_ok(StatusCode::NOT_FOUND, "Todolist not found"),
    }
}

async fn delete_todolist(State(db): State<Db>, Path(id): Path<String>) -> Response {
    let mut todolists = db.write().await;
    match todolists.iter().position(|t| t.id == id) {
        Some(index) => {
            debug!(%id, "delete_todolist");
            todolists.remove(index);
            Json(Envelope::ok(json!({}))).into_response()
        }
        None => not_ok(StatusCode::NOT_FOUND, "Todolist not found"),
    }
}
