// src/api/dto/task_dto.rs
use crate::domain::task_model;
use crate::domain::task_priority::TaskPriority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct CreateTaskDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Task description must be between 1 and 255 characters"
    ))]
    pub description: String,

    pub is_reminder_set: bool,
    pub is_task_open: bool,
    pub created_on: DateTime<Utc>,
    pub priority: TaskPriority,
}

/// Partial update: a field left out of the body means "do not change it".
/// `created_on` is deliberately not representable here.
#[derive(Deserialize, Serialize, Debug, Default, Validate)]
pub struct UpdateTaskDto {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Task description must be between 1 and 255 characters"
    ))]
    pub description: Option<String>,

    pub is_reminder_set: Option<bool>,
    pub is_task_open: Option<bool>,
    pub priority: Option<TaskPriority>,
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug)]
pub struct TaskDto {
    pub id: i64,
    pub description: String,
    pub is_reminder_set: bool,
    pub is_task_open: bool,
    pub created_on: DateTime<Utc>,
    pub priority: String,
}

// Conversion from the SeaORM model; a fresh snapshot per call, the DTO
// shares nothing with the entity afterwards
impl From<task_model::Model> for TaskDto {
    fn from(model: task_model::Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            is_reminder_set: model.is_reminder_set,
            is_task_open: model.is_task_open,
            created_on: model.created_on,
            priority: model.priority,
        }
    }
}
