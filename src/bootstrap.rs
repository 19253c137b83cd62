//! Service wiring: storage selection, table bootstrap and router assembly.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::adapters::http::{build_router, SessionAppState};
use crate::adapters::memory::InMemorySessionRepository;
use crate::adapters::postgres::{connect, run_migrations, PostgresSessionRepository};
use crate::config::{AppConfig, ServerConfig, StorageBackend};
use crate::ports::SessionRepository;

/// Errors raised while bringing the service up.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Everything the running service owns.
pub struct ServiceHandle {
    repository: Arc<dyn SessionRepository>,
    server: ServerConfig,
}

impl ServiceHandle {
    /// Wraps an existing repository, skipping storage setup.
    pub fn with_repository(repository: Arc<dyn SessionRepository>, server: ServerConfig) -> Self {
        Self { repository, server }
    }

    pub fn repository(&self) -> Arc<dyn SessionRepository> {
        self.repository.clone()
    }

    pub fn app_state(&self) -> SessionAppState {
        SessionAppState::new(self.repository.clone())
    }

    /// Builds the HTTP router with the configured middleware stack.
    pub fn router(&self) -> Router {
        build_router(self.app_state(), &self.server)
    }
}

/// Opens storage and prepares the schema. Called once at startup.
pub async fn initialize(config: &AppConfig) -> Result<ServiceHandle, BootstrapError> {
    let repository: Arc<dyn SessionRepository> = match config.database.backend {
        StorageBackend::Postgres => {
            let pool = connect(&config.database)
                .await
                .map_err(BootstrapError::Connect)?;
            if config.database.run_migrations {
                run_migrations(&pool).await?;
            }
            tracing::info!("Using PostgreSQL session storage");
            Arc::new(PostgresSessionRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory session storage; records are lost on exit");
            Arc::new(InMemorySessionRepository::new())
        }
    };

    Ok(ServiceHandle::with_repository(
        repository,
        config.server.clone(),
    ))
}
