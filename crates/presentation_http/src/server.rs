//! Server lifecycle
//!
//! Runs the axum server until a shutdown future resolves, then drains
//! in-flight connections for a bounded interval before aborting the
//! remainder.

use std::{
    future::{Future, IntoFuture},
    sync::Arc,
    time::Duration,
};

use axum::Router;
use tokio::{net::TcpListener, sync::Notify};
use tracing::{info, warn};

/// Serve `app` on `listener` until `shutdown` resolves.
///
/// Once `shutdown` fires, in-flight requests get at most `drain_timeout`
/// to complete; connections still open after the deadline are aborted.
pub async fn serve_with_shutdown(
    listener: TcpListener,
    app: Router,
    drain_timeout: Duration,
    shutdown: impl Future<Output = ()>,
) -> std::io::Result<()> {
    let drain = Arc::new(Notify::new());
    let drain_trigger = Arc::clone(&drain);
    let mut server = tokio::spawn(
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { drain_trigger.notified().await })
            .into_future(),
    );

    tokio::select! {
        result = &mut server => {
            // Server stopped on its own (fatal accept error)
            return result.map_err(std::io::Error::other)?;
        }
        () = shutdown => {
            drain.notify_one();
        }
    }

    info!("Waiting up to {:?} for connections to close...", drain_timeout);
    match tokio::time::timeout(drain_timeout, &mut server).await {
        Ok(result) => result.map_err(std::io::Error::other)?,
        Err(_) => {
            warn!(
                timeout = ?drain_timeout,
                "Graceful shutdown deadline elapsed, aborting remaining connections"
            );
            server.abort();
            Ok(())
        },
    }
}
