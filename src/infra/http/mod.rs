mod middleware;
mod public;

pub use public::{HttpState, build_router};

use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::infra::error::InfraError;

/// Serve `router` on `listener` until ctrl-c or SIGTERM, then give in-flight
/// requests up to `grace` to finish.
pub async fn serve(
    listener: TcpListener,
    router: axum::Router,
    grace: Duration,
) -> Result<(), InfraError> {
    let addr = listener.local_addr()?;
    info!(target = "folio::http", addr = %addr, "preview server listening");

    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal());
    let mut server = std::pin::pin!(server.into_future());

    tokio::select! {
        result = &mut server => result?,
        () = async {
            shutdown_signal().await;
            tokio::time::sleep(grace).await;
        } => {
            warn!(
                target = "folio::http",
                grace_seconds = grace.as_secs(),
                "graceful shutdown timed out; dropping open connections"
            );
        }
    }

    info!(target = "folio::http", "preview server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(target = "folio::http", error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(target = "folio::http", error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
