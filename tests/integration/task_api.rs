//! End-to-end tests for the task REST API.
//!
//! Each test starts a real server on an OS-assigned port and drives it
//! over HTTP with `reqwest`, covering the full create / read / update /
//! delete lifecycle and the status-code contract.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::Arc;

use serde_json::{Value, json};
use taskman_model::{Task, TaskStatus};
use taskman_server::http::start_server;
use taskman_server::service::TaskService;
use taskman_server::store::MemoryStore;

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Starts a server with a fresh in-memory store and returns its base URL.
async fn spawn_server() -> (String, tokio::task::JoinHandle<()>) {
    let service = Arc::new(TaskService::new(MemoryStore::new()));
    let (addr, handle) = start_server("127.0.0.1:0", service)
        .await
        .expect("failed to start test server");
    (format!("http://{addr}/api/tasks"), handle)
}

/// Creates a task via POST and returns the decoded response body.
async fn post_task(client: &reqwest::Client, base: &str, body: &Value) -> Task {
    let resp = client.post(base).json(body).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 201);
    resp.json().await.unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn full_task_lifecycle() {
    let (base, _handle) = spawn_server().await;
    let client = reqwest::Client::new();

    // POST a task with no status: 201, status defaults to PENDING.
    let created = post_task(
        &client,
        &base,
        &json!({ "title": "Buy milk", "dueDate": "2024-01-15" }),
    )
    .await;
    assert_eq!(created.status, TaskStatus::Pending);
    assert_eq!(created.title, "Buy milk");
    assert!(created.id.get() > 0);

    // GET that id: 200, identical body.
    let resp = client
        .get(format!("{base}/{}", created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let fetched: Task = resp.json().await.unwrap();
    assert_eq!(fetched, created);

    // PATCH ?status=DONE: 200, status changed, title untouched.
    let resp = client
        .patch(format!("{base}/{}?status=DONE", created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let patched: Task = resp.json().await.unwrap();
    assert_eq!(patched.status, TaskStatus::Done);
    assert_eq!(patched.title, "Buy milk");

    // DELETE: 204 with empty body.
    let resp = client
        .delete(format!("{base}/{}", created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 204);
    assert!(resp.text().await.unwrap().is_empty());

    // GET again: 404.
    let resp = client
        .get(format!("{base}/{}", created.id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn list_returns_all_created_tasks_in_order() {
    let (base, _handle) = spawn_server().await;
    let client = reqwest::Client::new();

    for title in ["one", "two", "three"] {
        post_task(&client, &base, &json!({ "title": title, "dueDate": "2024-01-15" })).await;
    }

    let resp = client.get(&base).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let tasks: Vec<Task> = resp.json().await.unwrap();
    let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn list_on_empty_store_returns_empty_array() {
    let (base, _handle) = spawn_server().await;
    let resp = reqwest::get(&base).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.text().await.unwrap(), "[]");
}

#[tokio::test]
async fn post_with_explicit_done_status_is_preserved() {
    let (base, _handle) = spawn_server().await;
    let client = reqwest::Client::new();

    let created = post_task(
        &client,
        &base,
        &json!({ "title": "done already", "status": "DONE", "dueDate": "2024-01-15" }),
    )
    .await;
    assert_eq!(created.status, TaskStatus::Done);
}

#[tokio::test]
async fn post_ignores_client_supplied_id() {
    let (base, _handle) = spawn_server().await;
    let client = reqwest::Client::new();

    let created = post_task(
        &client,
        &base,
        &json!({ "id": 999, "title": "a", "dueDate": "2024-01-15" }),
    )
    .await;
    assert_ne!(created.id.get(), 999);
}

#[tokio::test]
async fn put_replaces_all_fields() {
    let (base, _handle) = spawn_server().await;
    let client = reqwest::Client::new();

    let created = post_task(
        &client,
        &base,
        &json!({
            "title": "old",
            "description": "old desc",
            "status": "DONE",
            "dueDate": "2024-01-15",
        }),
    )
    .await;

    let resp = client
        .put(format!("{base}/{}", created.id))
        .json(&json!({ "title": "new", "status": "PENDING", "dueDate": "2025-02-20" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let updated: Task = resp.json().await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "new");
    assert_eq!(updated.description, None); // omitted field still overwrites
    assert_eq!(updated.status, TaskStatus::Pending);
    assert_eq!(updated.due_date, "2025-02-20".parse().unwrap());
}

#[tokio::test]
async fn put_on_unknown_id_does_not_create_a_record() {
    let (base, _handle) = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/55"))
        .json(&json!({ "title": "ghost", "dueDate": "2024-01-15" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    let tasks: Vec<Task> = reqwest::get(&base).await.unwrap().json().await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn wire_shape_uses_camel_case_and_iso_dates() {
    let (base, _handle) = spawn_server().await;
    let client = reqwest::Client::new();

    post_task(
        &client,
        &base,
        &json!({ "title": "shape", "dueDate": "2024-01-15" }),
    )
    .await;

    let body: Value = reqwest::get(&base).await.unwrap().json().await.unwrap();
    assert_eq!(
        body,
        json!([{
            "id": 1,
            "title": "shape",
            "description": null,
            "status": "PENDING",
            "dueDate": "2024-01-15",
        }])
    );
}

#[tokio::test]
async fn deleted_ids_are_never_reassigned() {
    let (base, _handle) = spawn_server().await;
    let client = reqwest::Client::new();

    let first = post_task(&client, &base, &json!({ "title": "a", "dueDate": "2024-01-15" })).await;
    client
        .delete(format!("{base}/{}", first.id))
        .send()
        .await
        .unwrap();

    let second = post_task(&client, &base, &json!({ "title": "b", "dueDate": "2024-01-15" })).await;
    assert!(second.id.get() > first.id.get());
}
