// src/api/dto/mod.rs
pub mod task_dto;
