// tests/task_crud_tests.rs

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

mod common;

use common::{app_helper, test_data};

async fn body_json(res: axum::response::Response) -> Value {
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_task(app: &Router, payload: &Value) -> (StatusCode, Value) {
    let req = app_helper::json_request("POST", "/api/create", Some(payload.to_string()));
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    (status, body_json(res).await)
}

#[tokio::test]
async fn test_create_task_echoes_all_fields() {
    let (app, _db) = app_helper::setup_app().await;

    let payload = test_data::create_test_task();
    let (status, task) = create_task(&app, &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert!(task["id"].is_i64());
    assert_eq!(task["description"], "Buy milk");
    assert_eq!(task["is_reminder_set"], true);
    assert_eq!(task["is_task_open"], true);
    assert_eq!(task["created_on"], "2026-01-01T00:00:00Z");
    assert_eq!(task["priority"], "low");
}

#[tokio::test]
async fn test_create_duplicate_description_is_bad_request() {
    let (app, _db) = app_helper::setup_app().await;

    let payload = test_data::create_test_task();
    let (first_status, _) = create_task(&app, &payload).await;
    assert_eq!(first_status, StatusCode::OK);

    let (second_status, error) = create_task(&app, &payload).await;
    assert_eq!(second_status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error_type"], "bad_request");
    assert_eq!(
        error["message"],
        "There is already a task with description: Buy milk"
    );

    // Storage reflects only the first create
    let res = app
        .clone()
        .oneshot(app_helper::json_request("GET", "/api/all-tasks", None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let tasks = body_json(res).await;
    assert_eq!(tasks.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_partial_update_preserves_unset_fields() {
    let (app, _db) = app_helper::setup_app().await;

    let (_, created) = create_task(&app, &test_data::create_test_task()).await;
    let id = created["id"].as_i64().unwrap();

    let req = app_helper::json_request(
        "PATCH",
        &format!("/api/update/{}", id),
        Some(r#"{"priority": "high"}"#.to_string()),
    );
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let updated = body_json(res).await;
    assert_eq!(updated["priority"], "high");
    assert_eq!(updated["description"], "Buy milk");
    assert_eq!(updated["is_reminder_set"], true);
    assert_eq!(updated["is_task_open"], true);
    assert_eq!(updated["created_on"], created["created_on"]);
}

#[tokio::test]
async fn test_update_to_existing_description_is_bad_request() {
    let (app, _db) = app_helper::setup_app().await;

    let (_, first) = create_task(&app, &test_data::create_test_task_with("Buy milk", true)).await;
    let (_, second) = create_task(&app, &test_data::create_test_task_with("Buy bread", true)).await;
    let second_id = second["id"].as_i64().unwrap();

    // Renaming the second task onto the first one's description collides
    let req = app_helper::json_request(
        "PATCH",
        &format!("/api/update/{}", second_id),
        Some(r#"{"description": "Buy milk"}"#.to_string()),
    );
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error = body_json(res).await;
    assert_eq!(error["error_type"], "bad_request");
    assert_eq!(
        error["message"],
        "There is already a task with description: Buy milk"
    );

    // The stored row is untouched
    let res = app
        .clone()
        .oneshot(app_helper::json_request(
            "GET",
            &format!("/api/task/{}", second_id),
            None,
        ))
        .await
        .unwrap();
    let task = body_json(res).await;
    assert_eq!(task["description"], "Buy bread");

    // Re-asserting a task's own description is not a collision
    let first_id = first["id"].as_i64().unwrap();
    let req = app_helper::json_request(
        "PATCH",
        &format!("/api/update/{}", first_id),
        Some(r#"{"description": "Buy milk"}"#.to_string()),
    );
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_update_delete_nonexistent_id_is_not_found() {
    let (app, _db) = app_helper::setup_app().await;

    let cases = [
        app_helper::json_request("GET", "/api/task/999", None),
        app_helper::json_request("PATCH", "/api/update/999", Some("{}".to_string())),
        app_helper::json_request("DELETE", "/api/delete/999", None),
    ];

    for req in cases {
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let error = body_json(res).await;
        assert_eq!(error["error_type"], "not_found");
        assert_eq!(error["message"], "Task with ID: 999 does not exist!");
    }
}

#[tokio::test]
async fn test_delete_removes_task() {
    let (app, _db) = app_helper::setup_app().await;

    let (_, created) = create_task(&app, &test_data::create_test_task()).await;
    let id = created["id"].as_i64().unwrap();

    let res = app
        .clone()
        .oneshot(app_helper::json_request(
            "DELETE",
            &format!("/api/delete/{}", id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let confirmation = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(confirmation, format!("Task with ID: {} has been deleted.", id));

    // Subsequent get fails as NotFound
    let res = app
        .clone()
        .oneshot(app_helper::json_request(
            "GET",
            &format!("/api/task/{}", id),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // And the id is absent from the full listing
    let res = app
        .clone()
        .oneshot(app_helper::json_request("GET", "/api/all-tasks", None))
        .await
        .unwrap();
    let tasks = body_json(res).await;
    assert!(tasks
        .as_array()
        .unwrap()
        .iter()
        .all(|t| t["id"].as_i64() != Some(id)));
}

#[tokio::test]
async fn test_non_numeric_path_id_is_validation_error() {
    let (app, _db) = app_helper::setup_app().await;

    let res = app
        .clone()
        .oneshot(app_helper::json_request("GET", "/api/task/not-a-number", None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let error = body_json(res).await;
    assert_eq!(error["error_type"], "validation_error");
}

#[tokio::test]
async fn test_create_with_empty_description_is_validation_error() {
    let (app, _db) = app_helper::setup_app().await;

    let payload = test_data::create_test_task_with("", true);
    let (status, error) = create_task(&app, &payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error_type"], "validation_error");
    assert!(error["validation_errors"]["description"].is_array());
}

#[tokio::test]
async fn test_create_with_invalid_priority_is_rejected() {
    let (app, _db) = app_helper::setup_app().await;

    let payload = serde_json::json!({
        "description": "Buy milk",
        "is_reminder_set": true,
        "is_task_open": true,
        "created_on": "2026-01-01T00:00:00Z",
        "priority": "urgent"
    });
    let req = app_helper::json_request("POST", "/api/create", Some(payload.to_string()));
    let res = app.clone().oneshot(req).await.unwrap();

    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn test_task_lifecycle_end_to_end() {
    let (app, _db) = app_helper::setup_app().await;

    // Create
    let (status, created) = create_task(&app, &test_data::create_test_task()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 1);
    assert_eq!(created["description"], "Buy milk");
    assert_eq!(created["priority"], "low");

    // Close the task, everything else untouched
    let req = app_helper::json_request(
        "PATCH",
        "/api/update/1",
        Some(r#"{"is_task_open": false}"#.to_string()),
    );
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated = body_json(res).await;
    assert_eq!(updated["description"], "Buy milk");
    assert_eq!(updated["is_task_open"], false);

    // Delete
    let res = app
        .clone()
        .oneshot(app_helper::json_request("DELETE", "/api/delete/1", None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8(bytes.to_vec()).unwrap().contains('1'));

    // Gone
    let res = app
        .clone()
        .oneshot(app_helper::json_request("GET", "/api/task/1", None))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_is_client_error() {
    let (app, _db) = app_helper::setup_app().await;

    let req = Request::builder()
        .uri("/api/create")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let res = app.clone().oneshot(req).await.unwrap();

    assert!(res.status().is_client_error());
}
