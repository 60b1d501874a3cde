//! Carson theme stylesheet
//!
//! Embedded at compile time and applied to every rendered page. Carries no
//! runtime state.

/// Carson High theme: navy background, gold accents, Segoe UI text
const CARSON_THEME_CSS: &str = include_str!("../static/carson-theme.css");

/// The fixed theme stylesheet
pub fn stylesheet() -> &'static str {
    CARSON_THEME_CSS
}
