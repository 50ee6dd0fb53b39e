// tests/common/test_data.rs
use serde_json::{json, Value};

pub fn create_test_task() -> Value {
    json!({
        "description": "Buy milk",
        "is_reminder_set": true,
        "is_task_open": true,
        "created_on": "2026-01-01T00:00:00Z",
        "priority": "low"
    })
}

pub fn create_test_task_with(description: &str, is_task_open: bool) -> Value {
    json!({
        "description": description,
        "is_reminder_set": false,
        "is_task_open": is_task_open,
        "created_on": "2026-01-01T00:00:00Z",
        "priority": "medium"
    })
}
