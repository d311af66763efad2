//! Adapters for the task module.
//!
//! - [`memory::InMemoryTaskRepository`]: thread-safe in-memory storage
//! - [`postgres::PostgresTaskRepository`]: `PostgreSQL` persistence using
//!   Diesel ORM
//! - [`http::task_router`]: axum routes exposing the task service

pub mod http;
pub mod memory;
pub mod postgres;
