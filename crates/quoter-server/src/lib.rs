//! # Quoter Server
//!
//! Axum front end for [`quoter_core::QuoteService`].
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /quote?code={symbol}` | [`handlers::get_quote`] |

pub mod error;
pub mod handlers;
pub mod telemetry;

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use quoter_core::QuoteService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub quotes: Arc<QuoteService>,
}

impl AppState {
    pub fn new(quotes: QuoteService) -> Self {
        Self {
            quotes: Arc::new(quotes),
        }
    }
}

/// Build the router. Requests running past `request_timeout` are dropped,
/// which cancels any upstream call still in flight.
pub fn app_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/quote", get(handlers::get_quote))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
