//! Server configuration read from command-line flags and environment.

use clap::Parser;
use std::net::SocketAddr;

/// Runtime configuration for the task server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "tarefas-server", version, about = "Task tracking HTTP service")]
pub struct ServerConfig {
    /// `PostgreSQL` connection URL; tasks are kept in memory when unset.
    #[arg(long, env = "TAREFAS_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Socket address the HTTP listener binds to.
    #[arg(long, env = "TAREFAS_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Maximum number of pooled database connections.
    #[arg(
        long,
        env = "TAREFAS_POOL_SIZE",
        default_value_t = 8,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub pool_size: u32,

    /// Default tracing filter directives; `RUST_LOG` takes precedence.
    #[arg(long, env = "TAREFAS_LOG", default_value = "info")]
    pub log_filter: String,

    /// Skip creating the `tasks` table on startup.
    #[arg(long, env = "TAREFAS_SKIP_MIGRATIONS")]
    pub skip_migrations: bool,
}

/// Task store selected by the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend<'a> {
    /// Process-local store; contents are lost on shutdown.
    InMemory,
    /// `PostgreSQL` store reachable at the given URL.
    Postgres {
        /// Connection URL.
        url: &'a str,
    },
}

impl ServerConfig {
    /// Returns the configured task store.
    #[must_use]
    pub fn storage(&self) -> StorageBackend<'_> {
        self.database_url
            .as_deref()
            .map_or(StorageBackend::InMemory, |url| StorageBackend::Postgres { url })
    }
}
