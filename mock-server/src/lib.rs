use std::{collections::HashSet, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub priority: String,
}

/// Announcement as a student sees it on the dashboard.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StudentAnnouncement {
    #[serde(flatten)]
    pub announcement: Announcement,
    pub is_read: bool,
}

#[derive(Deserialize)]
pub struct CreateAnnouncement {
    pub title: String,
    pub content: String,
    #[serde(default = "default_priority")]
    pub priority: String,
}

#[derive(Deserialize)]
pub struct UpdateAnnouncement {
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<String>,
}

fn default_priority() -> String {
    "NORMAL".to_string()
}

#[derive(Default)]
pub struct Store {
    announcements: Vec<Announcement>,
    read: HashSet<Uuid>,
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, Json<serde_json::Value>)>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route(
            "/mentor/announcements/",
            get(list_announcements).post(create_announcement),
        )
        .route(
            "/mentor/announcements/{id}/",
            put(update_announcement).delete(delete_announcement),
        )
        .route("/dashboard/announcements/", get(list_student_announcements))
        .route("/dashboard/announcements/{id}/mark-read/", post(mark_read))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn rejection(status: StatusCode, detail: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(json!({ "detail": detail })))
}

fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    rejection(StatusCode::NOT_FOUND, "Not found.")
}

/// Mentor routes need `Authorization: Bearer <token>`; the token itself is not checked.
fn require_bearer(headers: &HeaderMap) -> ApiResult<()> {
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| !token.trim().is_empty());
    if authorized {
        Ok(())
    } else {
        Err(rejection(
            StatusCode::UNAUTHORIZED,
            "Authentication credentials were not provided.",
        ))
    }
}

async fn list_announcements(
    State(db): State<Db>,
    headers: HeaderMap,
) -> ApiResult<Json<Vec<Announcement>>> {
    require_bearer(&headers)?;
    let store = db.read().await;
    Ok(Json(store.announcements.clone()))
}

async fn create_announcement(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(input): Json<CreateAnnouncement>,
) -> ApiResult<(StatusCode, Json<Announcement>)> {
    require_bearer(&headers)?;
    let announcement = Announcement {
        id: Uuid::new_v4(),
        title: input.title,
        content: input.content,
        priority: input.priority,
    };
    db.write().await.announcements.push(announcement.clone());
    tracing::info!(id = %announcement.id, "announcement created");
    Ok((StatusCode::CREATED, Json(announcement)))
}

async fn update_announcement(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(input): Json<UpdateAnnouncement>,
) -> ApiResult<Json<Announcement>> {
    require_bearer(&headers)?;
    let mut store = db.write().await;
    let announcement = store
        .announcements
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(not_found)?;
    if let Some(title) = input.title {
        announcement.title = title;
    }
    if let Some(content) = input.content {
        announcement.content = content;
    }
    if let Some(priority) = input.priority {
        announcement.priority = priority;
    }
    Ok(Json(announcement.clone()))
}

async fn delete_announcement(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    require_bearer(&headers)?;
    let mut store = db.write().await;
    let index = store
        .announcements
        .iter()
        .position(|a| a.id == id)
        .ok_or_else(not_found)?;
    store.announcements.remove(index);
    store.read.remove(&id);
    tracing::info!(%id, "announcement deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn list_student_announcements(State(db): State<Db>) -> Json<Vec<StudentAnnouncement>> {
    let store = db.read().await;
    Json(
        store
            .announcements
            .iter()
            .map(|a| StudentAnnouncement {
                announcement: a.clone(),
                is_read: store.read.contains(&a.id),
            })
            .collect(),
    )
}

/// Marking twice is not an error; the second call reports the same state.
async fn mark_read(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    let mut store = db.write().await;
    if !store.announcements.iter().any(|a| a.id == id) {
        return Err(not_found());
    }
    store.read.insert(id);
    Ok(Json(json!({ "id": id, "is_read": true })))
}
