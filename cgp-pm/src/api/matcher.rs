//! JSON plan match endpoints
//!
//! Same interaction as the HTML form, as structured request/response.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};

use crate::error::{ApiError, ApiResult};
use crate::form::{FormInput, MatchRequest};
use crate::matcher::MatchResponse;
use crate::AppState;

/// GET /api/match
///
/// Nothing submitted: default field values and no result blocks
pub async fn get_match(State(state): State<AppState>) -> Json<MatchResponse> {
    let request = MatchRequest::initial();
    let outcome = state.matcher.handle(&request).await;
    Json(MatchResponse::new(request.input, outcome))
}

/// POST /api/match
///
/// Body: `{"artist": "...", "vibe": "...", "quote": "..."}`; absent fields
/// are empty. Responds after the processing delay with the five blocks.
pub async fn post_match(
    State(state): State<AppState>,
    payload: Result<Json<FormInput>, JsonRejection>,
) -> ApiResult<Json<MatchResponse>> {
    let Json(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let request = MatchRequest::submit(input);
    let outcome = state.matcher.handle(&request).await;
    Ok(Json(MatchResponse::new(request.input, outcome)))
}

/// Build plan match API routes
pub fn match_routes() -> Router<AppState> {
    Router::new()
        .route("/api/match", get(get_match).post(post_match))
        .route("/api/buildinfo", get(super::get_build_info))
}
