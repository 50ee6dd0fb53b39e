// src/api/handlers/mod.rs
pub mod task_handler;
