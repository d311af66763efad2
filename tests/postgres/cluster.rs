//! Cluster lifecycle helpers for `PostgreSQL` integration tests.

use postgresql_embedded::{PostgreSQL, Settings};
use std::sync::OnceLock;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Boxed error used by the harness.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

static SHARED_CLUSTER: OnceLock<Result<ManagedCluster, String>> = OnceLock::new();

/// Embedded `PostgreSQL` server shared by every test in the binary.
pub struct ManagedCluster {
    runtime: Runtime,
    postgres: PostgreSQL,
}

impl ManagedCluster {
    fn start() -> Result<Self, BoxError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let mut postgres = PostgreSQL::new(Settings::default());
        runtime.block_on(async {
            postgres.setup().await?;
            postgres.start().await?;
            Ok::<(), postgresql_embedded::Error>(())
        })?;
        Ok(Self { runtime, postgres })
    }

    /// Returns the connection URL for `database`.
    #[must_use]
    pub fn database_url(&self, database: &str) -> String {
        self.postgres.settings().url(database)
    }

    /// Creates a uniquely named empty database and returns its name.
    ///
    /// # Errors
    ///
    /// Returns an error when the server rejects the statement.
    pub fn create_temporary_database(&self) -> Result<String, BoxError> {
        let name = format!("tarefas_{}", Uuid::new_v4().simple());
        self.runtime
            .block_on(self.postgres.create_database(&name))?;
        Ok(name)
    }
}

/// Returns the shared cluster, starting it on first use.
///
/// # Errors
///
/// Returns the start-up failure message when no cluster could be started;
/// later calls report the same failure without retrying.
pub fn shared_cluster() -> Result<&'static ManagedCluster, String> {
    SHARED_CLUSTER
        .get_or_init(|| ManagedCluster::start().map_err(|err| err.to_string()))
        .as_ref()
        .map_err(Clone::clone)
}
