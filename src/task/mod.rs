//! Task management for Tarefas.
//!
//! Tasks are created with a validated title and a planned completion date,
//! edited while open, and finalized exactly once. A finalized task is
//! read-only and cannot be deleted. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
