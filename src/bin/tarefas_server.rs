//! Serves the task API over HTTP.
//!
//! Usage:
//!
//! ```text
//! tarefas_server [--database-url <url>] [--bind <addr>] [--pool-size <n>]
//!                [--log-filter <directives>] [--skip-migrations]
//! ```
//!
//! Every flag can also be supplied through its `TAREFAS_*` environment
//! variable. Without a database URL the server keeps tasks in memory.

use clap::Parser;
use eyre::WrapErr;
use mockable::DefaultClock;
use std::sync::Arc;
use tarefas::config::{ServerConfig, StorageBackend};
use tarefas::task::{
    adapters::{
        http::task_router,
        memory::InMemoryTaskRepository,
        postgres::{PostgresTaskRepository, build_pool},
    },
    ports::TaskRepository,
    services::TaskLifecycleService,
};
use tarefas::telemetry::init_tracing;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::parse();
    init_tracing(&config.log_filter)?;

    let router = match config.storage() {
        StorageBackend::InMemory => {
            warn!("no database configured, tasks are kept in memory");
            build_router(InMemoryTaskRepository::new())
        }
        StorageBackend::Postgres { url } => {
            let owned_url = url.to_owned();
            let pool_size = config.pool_size;
            let pool = tokio::task::spawn_blocking(move || build_pool(&owned_url, pool_size))
                .await?
                .wrap_err("connect to PostgreSQL")?;
            let repository = PostgresTaskRepository::new(pool);
            if !config.skip_migrations {
                repository
                    .apply_migrations()
                    .await
                    .wrap_err("apply task schema")?;
            }
            build_router(repository)
        }
    };

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .wrap_err_with(|| format!("bind {}", config.bind))?;
    info!(address = %config.bind, "task API listening");

    axum::serve(listener, router.layer(TraceLayer::new_for_http()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("serve task API")?;
    info!("task API stopped");
    Ok(())
}

fn build_router<R>(repository: R) -> axum::Router
where
    R: TaskRepository + 'static,
{
    let service = TaskLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock));
    task_router(service)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "shutdown signal listener failed");
    }
}
