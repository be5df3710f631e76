//! Server startup.

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::{
    config::ServerConfig,
    domain::RequestLogRepository,
    error::ServerError,
    infrastructure::repository::InMemoryRequestLogRepository,
    ui::{router::create_router, signal::shutdown_signal, state::AppState},
};

/// Bind the listener and serve until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let repository: Arc<dyn RequestLogRepository> =
        Arc::new(InMemoryRequestLogRepository::default());
    let state = Arc::new(AppState::new(repository));
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("Server running on port {}", addr.port());
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("lantern-server version: {}", env!("CARGO_PKG_VERSION"));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}
