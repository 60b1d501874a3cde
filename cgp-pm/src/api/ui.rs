//! UI serving routes
//!
//! Serves the themed form page. A POST of the form is a submission; a GET is
//! a plain render with default field values.

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};

use crate::error::{ApiError, ApiResult};
use crate::form::{FormInput, MatchRequest};
use crate::page::render_page;
use crate::theme;
use crate::AppState;

/// GET /
///
/// Form with default values, nothing below it
pub async fn serve_form(State(state): State<AppState>) -> Html<String> {
    let request = MatchRequest::initial();
    let outcome = state.matcher.handle(&request).await;
    Html(render_page(&request.input, &outcome))
}

/// POST /
///
/// Form submission: re-renders the form with the submitted values followed
/// by the result sections. Bodies that are not a form, or that repeat a
/// field, are rejected with 400.
pub async fn submit_form(
    State(state): State<AppState>,
    payload: Result<Form<FormInput>, FormRejection>,
) -> ApiResult<Html<String>> {
    let Form(input) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let request = MatchRequest::submit(input);
    let outcome = state.matcher.handle(&request).await;
    Ok(Html(render_page(&request.input, &outcome)))
}

/// GET /static/carson-theme.css
///
/// Serves the theme stylesheet
pub async fn serve_theme_css() -> Response {
    (
        StatusCode::OK,
        [("content-type", "text/css")],
        theme::stylesheet(),
    )
        .into_response()
}

/// Build UI routes
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(serve_form).post(submit_form))
        .route("/static/carson-theme.css", get(serve_theme_css))
}
