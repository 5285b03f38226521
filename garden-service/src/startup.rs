//! Application startup and lifecycle management.

use crate::config::GardenConfig;
use crate::services::{DocumentStore, MongoDb};
use crate::{build_router, AppState};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Connect the document store when the configuration names one.
///
/// An unreachable server is only logged: the process still serves the static routes
/// and `/test` reports the failure.
pub async fn connect_store(
    config: &GardenConfig,
) -> Result<Option<Arc<dyn DocumentStore>>, AppError> {
    let Some((uri, database)) = config.database.connection() else {
        tracing::warn!("DATABASE_URL or DATABASE_NAME not set; running without a database");
        return Ok(None);
    };

    let db = MongoDb::connect(uri, database).await?;

    if let Err(e) = db.health_check().await {
        tracing::warn!(error = %e, "MongoDB is not reachable yet");
    } else {
        tracing::info!(database = %database, "MongoDB reachable");
    }

    Ok(Some(Arc::new(db)))
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    pub async fn build(config: GardenConfig) -> Result<Self, AppError> {
        let store = connect_store(&config).await?;
        Self::build_with_store(config, store).await
    }

    /// Build with an explicit store, bypassing the configured connection.
    pub async fn build_with_store(
        config: GardenConfig,
        store: Option<Arc<dyn DocumentStore>>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port for tests
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, store),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
