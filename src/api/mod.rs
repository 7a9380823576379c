//! HTTP API
//!
//! Exposes the report service over REST:
//!
//! | Method | Path            | Success                         |
//! |--------|-----------------|---------------------------------|
//! | POST   | `/reports`      | `201 {id, status, provider}`    |
//! | PUT    | `/reports/{id}` | `200 {id, status, message}`     |
//! | GET    | `/reports/{id}` | `200` report with `provider_id` |
//!
//! Sending `x-force-error: true` on create makes the highest-priority
//! provider fail, which exercises the fallback path.
//!
//! # Example
//!
//! ```rust,no_run
//! use sitelog::api;
//! use sitelog::core::mapping::MappingTable;
//! use sitelog::core::report::ReportService;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = Arc::new(ReportService::new(Vec::new(), Arc::new(MappingTable::new())));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//!
//! api::serve(listener, api::router(service), shutdown_rx).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod request;
pub mod routes;

pub use error::ApiError;
pub use request::{FieldError, ReportRequest};

use crate::core::report::ReportService;
use crate::domain::{Result, SitelogError};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReportService>,
}

/// Build the API router
pub fn router(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/reports", post(routes::create_report))
        .route(
            "/reports/{id}",
            get(routes::get_report).put(routes::update_report),
        )
        .fallback(routes::not_found)
        .with_state(AppState { service })
}

/// Serve `router` on `listener` until `shutdown` turns true
///
/// In-flight requests are allowed to finish before this returns. Dropping
/// the sender also stops the server.
///
/// # Errors
///
/// Returns `SitelogError::Io` if the server fails while accepting connections.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let _ = shutdown.wait_for(|stop| *stop).await;
            tracing::info!("Shutting down HTTP server");
        })
        .await
        .map_err(|e| SitelogError::Io(format!("HTTP server error: {e}")))
}
