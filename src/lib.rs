//! Tarefas: task tracking service.
//!
//! This crate manages tasks with a small lifecycle: tasks are included with
//! a title and a planned completion date, edited while open, and finalized
//! once, after which they are read-only.
//!
//! # Architecture
//!
//! Tarefas follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task domain, store contract, service, and adapters
//! - [`config`]: Server configuration from flags and environment
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod task;
pub mod telemetry;
