// src/repository/task_repository.rs
use crate::api::dto::task_dto::CreateTaskDto;
use crate::domain::task_model::{self, ActiveModel as TaskActiveModel, Entity as TaskEntity};
use sea_orm::{entity::*, query::*, DbConn, DbErr, DeleteResult, Set};
use sea_orm::{PaginatorTrait, QueryFilter};

pub struct TaskRepository {
    db: DbConn,
}

impl TaskRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<task_model::Model>, DbErr> {
        TaskEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr> {
        let count = TaskEntity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    pub async fn description_exists(&self, description: &str) -> Result<bool, DbErr> {
        let count = TaskEntity::find()
            .filter(task_model::Column::Description.eq(description))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    // Storage order, no explicit ORDER BY
    pub async fn find_all(&self) -> Result<Vec<task_model::Model>, DbErr> {
        TaskEntity::find().all(&self.db).await
    }

    pub async fn find_open(&self) -> Result<Vec<task_model::Model>, DbErr> {
        TaskEntity::find()
            .filter(task_model::Column::IsTaskOpen.eq(true))
            .all(&self.db)
            .await
    }

    pub async fn find_closed(&self) -> Result<Vec<task_model::Model>, DbErr> {
        TaskEntity::find()
            .filter(task_model::Column::IsTaskOpen.eq(false))
            .all(&self.db)
            .await
    }

    pub async fn create(&self, payload: CreateTaskDto) -> Result<task_model::Model, DbErr> {
        let new_task = TaskActiveModel {
            description: Set(payload.description),
            is_reminder_set: Set(payload.is_reminder_set),
            is_task_open: Set(payload.is_task_open),
            created_on: Set(payload.created_on),
            priority: Set(payload.priority.to_string()),
            ..Default::default() // id assigned by storage
        };
        new_task.insert(&self.db).await
    }

    pub async fn update(&self, task: TaskActiveModel) -> Result<task_model::Model, DbErr> {
        task.update(&self.db).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<DeleteResult, DbErr> {
        TaskEntity::delete_by_id(id).exec(&self.db).await
    }
}
