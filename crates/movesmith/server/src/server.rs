//! Server setup and lifecycle management

use movesmith_assistant::SharedAssistant;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::create_router;
use crate::state::AppState;

/// movesmith HTTP server
pub struct Server {
    config: ServerConfig,
    assistant: SharedAssistant,
}

impl Server {
    /// Create a server over a fresh assistant
    pub fn new(config: ServerConfig) -> Self {
        Self::with_assistant(config, SharedAssistant::default())
    }

    /// Create a server over an existing assistant handle
    pub fn with_assistant(config: ServerConfig, assistant: SharedAssistant) -> Self {
        Self { config, assistant }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run until Ctrl+C or SIGTERM
    pub async fn run(self) -> ServerResult<()> {
        let addr = self.config.listen_addr;
        let app = create_router(AppState::new(self.assistant), self.config.enable_cors);

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, cors = self.config.enable_cors, "movesmith server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::Server(e.to_string()))?;

        info!("movesmith server shut down");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
