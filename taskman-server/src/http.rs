//! HTTP layer: the axum router, the five task routes, and status-code
//! mapping.
//!
//! Each handler runs the full chain synchronously: extract, call the
//! [`TaskService`], translate the outcome. Absence of a task maps to
//! `404 Not Found` with an empty body; malformed bodies, ids, and query
//! parameters are rejected by the extractors with a 4xx before any
//! handler code runs.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use serde::Deserialize;
use taskman_model::{Task, TaskDraft, TaskId, TaskStatus};
use tower_http::cors::CorsLayer;

use crate::service::TaskService;
use crate::store::TaskStore;

/// Query parameters for the PATCH status route.
///
/// Deserializing `status` through [`TaskStatus`] means an unrecognized
/// value (`?status=LATER`) is rejected with `400 Bad Request` by the
/// `Query` extractor rather than reaching the service.
#[derive(Debug, Deserialize)]
struct StatusQuery {
    status: TaskStatus,
}

/// Builds the application router for a service backed by any store.
///
/// Routes (all under `/api/tasks`):
///
/// | Method | Path | Success | Not-found |
/// |---|---|---|---|
/// | GET | `/api/tasks` | 200 + array | -- |
/// | GET | `/api/tasks/{id}` | 200 + object | 404 |
/// | POST | `/api/tasks` | 201 + created object | -- |
/// | PUT | `/api/tasks/{id}` | 200 + updated object | 404 |
/// | PATCH | `/api/tasks/{id}?status=X` | 200 + updated object | 404 |
/// | DELETE | `/api/tasks/{id}` | 204, empty body | 404 |
///
/// The router carries a permissive CORS layer so browser frontends on
/// other origins can talk to the API.
pub fn router<S: TaskStore + 'static>(service: Arc<TaskService<S>>) -> Router {
    Router::new()
        .route("/api/tasks", get(list_tasks::<S>).post(create_task::<S>))
        .route(
            "/api/tasks/{id}",
            get(get_task::<S>)
                .put(update_task::<S>)
                .patch(update_task_status::<S>)
                .delete(delete_task::<S>),
        )
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// `GET /api/tasks` -- all tasks, 200.
async fn list_tasks<S: TaskStore>(
    State(service): State<Arc<TaskService<S>>>,
) -> Json<Vec<Task>> {
    let tasks = service.list_tasks();
    tracing::debug!(count = tasks.len(), "listing tasks");
    Json(tasks)
}

/// `GET /api/tasks/{id}` -- one task, 200 or 404.
async fn get_task<S: TaskStore>(
    State(service): State<Arc<TaskService<S>>>,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, StatusCode> {
    service.get_task(id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// `POST /api/tasks` -- create, 201 with the stored record.
async fn create_task<S: TaskStore>(
    State(service): State<Arc<TaskService<S>>>,
    Json(draft): Json<TaskDraft>,
) -> (StatusCode, Json<Task>) {
    let task = service.create_task(draft);
    tracing::info!(id = %task.id, title = %task.title, "task created");
    (StatusCode::CREATED, Json(task))
}

/// `PUT /api/tasks/{id}` -- full replacement, 200 or 404.
async fn update_task<S: TaskStore>(
    State(service): State<Arc<TaskService<S>>>,
    Path(id): Path<TaskId>,
    Json(draft): Json<TaskDraft>,
) -> Result<Json<Task>, StatusCode> {
    match service.update_task(id, draft) {
        Some(task) => {
            tracing::info!(id = %id, "task updated");
            Ok(Json(task))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// `PATCH /api/tasks/{id}?status=X` -- status-only update, 200 or 404.
async fn update_task_status<S: TaskStore>(
    State(service): State<Arc<TaskService<S>>>,
    Path(id): Path<TaskId>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Task>, StatusCode> {
    match service.update_task_status(id, query.status) {
        Some(task) => {
            tracing::info!(id = %id, status = %task.status, "task status updated");
            Ok(Json(task))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// `DELETE /api/tasks/{id}` -- 204 on deletion, 404 when absent.
async fn delete_task<S: TaskStore>(
    State(service): State<Arc<TaskService<S>>>,
    Path(id): Path<TaskId>,
) -> StatusCode {
    if service.delete_task(id) {
        tracing::info!(id = %id, "task deleted");
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Starts the HTTP server on the given address and returns the bound
/// address and a join handle.
///
/// This is the primary entry point used by both `main.rs` and test code;
/// binding to port 0 yields an OS-assigned port in the returned address.
///
/// # Errors
///
/// Returns an error if the TCP listener cannot bind to the given address.
pub async fn start_server<S: TaskStore + 'static>(
    addr: &str,
    service: Arc<TaskService<S>>,
) -> Result<
    (std::net::SocketAddr, tokio::task::JoinHandle<()>),
    Box<dyn std::error::Error + Send + Sync>,
> {
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!(error = %e, "http server error");
        }
    });

    Ok((bound_addr, handle))
}
