//! HTTP server setup: router assembly, binding, and shutdown

use std::time::Duration;

use axum::{
    http::{header, Method},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{routes, state::AppState, types::Environment};

/// Request timeout applied to every route
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the application router with middleware layers applied
#[must_use]
pub fn router(state: AppState) -> Router {
    routes::handler()
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}

/// Starts the server with the given environment and state
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(environment: &Environment, state: AppState) -> anyhow::Result<()> {
    let app = router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], environment.port()));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Image host backend started on http://{addr}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

/// Resolves when the process receives Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        _ = terminate => {}
    }
}
