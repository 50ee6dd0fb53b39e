// src/service/task_service.rs
use crate::api::dto::task_dto::{CreateTaskDto, TaskDto, UpdateTaskDto};
use crate::domain::task_model::ActiveModel as TaskActiveModel;
use crate::error::{AppError, AppResult};
use crate::repository::task_repository::TaskRepository;
use sea_orm::{DbConn, Set, SqlErr};

/// One updatable field of the task entity: its name (for logging) and an
/// applier that copies the request value onto the active model when set.
///
/// The partial-update merge iterates this table instead of an if-chain, so
/// a field added to `UpdateTaskDto` only needs one entry here to be picked
/// up. `created_on` has no entry and can never be overwritten.
struct UpdatableField {
    name: &'static str,
    apply: fn(&UpdateTaskDto, &mut TaskActiveModel) -> bool,
}

const UPDATABLE_FIELDS: &[UpdatableField] = &[
    UpdatableField {
        name: "description",
        apply: |payload, task| match &payload.description {
            Some(value) => {
                task.description = Set(value.clone());
                true
            }
            None => false,
        },
    },
    UpdatableField {
        name: "is_reminder_set",
        apply: |payload, task| match payload.is_reminder_set {
            Some(value) => {
                task.is_reminder_set = Set(value);
                true
            }
            None => false,
        },
    },
    UpdatableField {
        name: "is_task_open",
        apply: |payload, task| match payload.is_task_open {
            Some(value) => {
                task.is_task_open = Set(value);
                true
            }
            None => false,
        },
    },
    UpdatableField {
        name: "priority",
        apply: |payload, task| match payload.priority {
            Some(value) => {
                task.priority = Set(value.to_string());
                true
            }
            None => false,
        },
    },
];

/// Copy every set field of the request onto the active model. Returns the
/// names of the fields that were applied; an empty result means the request
/// asked for no change at all.
fn apply_update_fields(payload: &UpdateTaskDto, task: &mut TaskActiveModel) -> Vec<&'static str> {
    UPDATABLE_FIELDS
        .iter()
        .filter(|field| (field.apply)(payload, task))
        .map(|field| field.name)
        .collect()
}

fn task_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Task with ID: {} does not exist!", id))
}

fn duplicate_description(description: &str) -> AppError {
    AppError::BadRequest(format!(
        "There is already a task with description: {}",
        description
    ))
}

pub struct TaskService {
    repo: TaskRepository,
}

impl TaskService {
    pub fn new(db: DbConn) -> Self {
        Self {
            repo: TaskRepository::new(db),
        }
    }

    async fn check_task_id(&self, id: i64) -> AppResult<()> {
        if !self.repo.exists_by_id(id).await? {
            return Err(task_not_found(id));
        }
        Ok(())
    }

    pub async fn list_tasks(&self) -> AppResult<Vec<TaskDto>> {
        let tasks = self.repo.find_all().await?;
        Ok(tasks.into_iter().map(TaskDto::from).collect())
    }

    pub async fn list_open_tasks(&self) -> AppResult<Vec<TaskDto>> {
        let tasks = self.repo.find_open().await?;
        Ok(tasks.into_iter().map(TaskDto::from).collect())
    }

    pub async fn list_closed_tasks(&self) -> AppResult<Vec<TaskDto>> {
        let tasks = self.repo.find_closed().await?;
        Ok(tasks.into_iter().map(TaskDto::from).collect())
    }

    pub async fn get_task(&self, id: i64) -> AppResult<TaskDto> {
        self.check_task_id(id).await?;
        let task = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| task_not_found(id))?;
        Ok(task.into())
    }

    pub async fn create_task(&self, payload: CreateTaskDto) -> AppResult<TaskDto> {
        // Pre-flight check so the common case reports the offending
        // description; the unique constraint in storage settles the race
        // between two concurrent creates that both pass this check.
        if self.repo.description_exists(&payload.description).await? {
            return Err(duplicate_description(&payload.description));
        }

        let description = payload.description.clone();
        match self.repo.create(payload).await {
            Ok(task) => Ok(task.into()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(duplicate_description(&description))
                }
                _ => Err(e.into()),
            },
        }
    }

    pub async fn update_task(&self, id: i64, payload: UpdateTaskDto) -> AppResult<TaskDto> {
        self.check_task_id(id).await?;
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| task_not_found(id))?;

        let mut active_model: TaskActiveModel = existing.clone().into();
        let applied = apply_update_fields(&payload, &mut active_model);

        // Nothing to change, return the stored row without a write
        if applied.is_empty() {
            return Ok(existing.into());
        }

        tracing::debug!(task_id = id, fields = ?applied, "Applying partial update");
        match self.repo.update(active_model).await {
            Ok(updated) => Ok(updated.into()),
            // A description change can collide with another task's
            // description; the unique constraint reports it, remapped to the
            // same outcome a duplicate create gets.
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(duplicate_description(&payload.description.unwrap_or_default()))
                }
                _ => Err(e.into()),
            },
        }
    }

    pub async fn delete_task(&self, id: i64) -> AppResult<String> {
        self.check_task_id(id).await?;
        self.repo.delete_by_id(id).await?;
        Ok(format!("Task with ID: {} has been deleted.", id))
    }
}
