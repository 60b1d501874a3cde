//! HTTP API handlers for cgp-pm

pub mod buildinfo;
pub mod health;
pub mod matcher;
pub mod ui;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use matcher::{get_match, match_routes, post_match};
pub use ui::{serve_form, serve_theme_css, submit_form, ui_routes};

use crate::error::ApiError;
use axum::http::Uri;

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
