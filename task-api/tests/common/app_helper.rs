// tests/common/app_helper.rs
use axum::{body::Body, http::Request, Router};
use std::sync::Arc;

use task_api::api::handlers::task_handler::task_router;
use task_api::service::task_service::TaskService;

use super::db::TestDatabase;

/// Build the full router against a containerized PostgreSQL instance.
/// The TestDatabase must stay alive for as long as the router is used.
pub async fn setup_app() -> (Router, TestDatabase) {
    let db = TestDatabase::new().await;
    let task_service = Arc::new(TaskService::new(db.connection.clone()));
    (task_router(task_service), db)
}

pub fn json_request(method: &str, uri: &str, body: Option<String>) -> Request<Body> {
    let builder = Request::builder()
        .uri(uri)
        .method(method)
        .header("Content-Type", "application/json");

    match body {
        Some(body) => builder.body(Body::from(body)).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
