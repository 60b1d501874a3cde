//! cgp-pm library - Carson-branded plan matcher
//!
//! Serves a single themed form page. On submission it shows a fixed
//! sequence of result blocks with the three form fields echoed back.

pub mod api;
pub mod error;
pub mod form;
pub mod matcher;
pub mod page;
pub mod result;
pub mod theme;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tower_http::trace::TraceLayer;

use crate::matcher::PlanMatcher;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Submission handler (carries the processing delay)
    pub matcher: PlanMatcher,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(processing_delay: Duration) -> Self {
        Self {
            matcher: PlanMatcher::new(processing_delay),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::ui_routes())
        .merge(api::match_routes())
        .merge(api::health_routes())
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
