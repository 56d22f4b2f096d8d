// ABOUTME: Startup for the textlog server: open the store, bind the listener, serve until shutdown.
// ABOUTME: Failures here are fatal and surface as StartupError to the binary.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use textlog_store::{LogStore, StoreError};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::app_state::AppState;
use crate::config::TextlogConfig;
use crate::routes::create_router;

/// Errors that stop the server from starting or keep it from running.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to initialize log store: {0}")]
    Store(#[from] StoreError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Open the store described by `config`, bind its address, and serve until
/// Ctrl-C or SIGTERM.
pub async fn serve(config: TextlogConfig) -> Result<(), StartupError> {
    let store = LogStore::open(&config.storage_dir)?;

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.bind,
            source,
        })?;

    run(listener, store, shutdown_signal()).await
}

/// Serve the log API on an already-bound listener until `shutdown` resolves.
/// In-flight requests are allowed to finish.
pub async fn run<F>(listener: TcpListener, store: LogStore, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().map_err(StartupError::Serve)?;
    tracing::info!(
        "listening on {}, storing records in {}",
        addr,
        store.dir().display()
    );

    let app = create_router(Arc::new(AppState::new(store)));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
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

    tracing::info!("shutdown signal received");
}
