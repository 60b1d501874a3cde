//! HTTP Server & Routing Integration Tests
//!
//! Drives the full router with `oneshot` requests:
//! - `/` form page (GET renders, POST submits)
//! - theme stylesheet, health, build info, unknown paths

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use cgp_pm::page::escape_html;
use cgp_pm::result::{FOOTER_CAPTION, INFERRED_TRAITS, PLAN_NAME};
use cgp_pm::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

fn test_app() -> Router {
    build_router(AppState::new(Duration::ZERO))
}

/// Percent-encode one form value (application/x-www-form-urlencoded)
fn form_encode(value: &str) -> String {
    let mut out = String::new();
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn form_body(artist: &str, vibe: &str, quote: &str) -> String {
    format!(
        "artist={}&vibe={}&quote={}",
        form_encode(artist),
        form_encode(vibe),
        form_encode(quote)
    )
}

async fn post_root(app: Router, content_type: &str, body: String) -> (StatusCode, Option<String>, String) {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let response_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, response_type, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn submit(app: Router, body: String) -> (StatusCode, String) {
    let (status, _, html) = post_root(app, "application/x-www-form-urlencoded", body).await;
    (status, html)
}

async fn get_text(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_root_serves_form_without_results() {
    let (status, content_type, html) = get_text(test_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().contains("text/html"));
    assert!(html.contains("🎓 CGP: Carson-Branded Plan Matcher"));
    assert!(html.contains("name=\"artist\" value=\"Ab-Soul\""));
    assert!(html.contains("name=\"vibe\" value=\"Low bureaucracy, high value\""));
    assert!(html.contains("🔎 Match My Plan"));
    assert!(!html.contains("id=\"results\""));
    assert!(!html.contains(FOOTER_CAPTION));
}

#[tokio::test]
async fn test_submission_scenario() {
    let artist = "Ab-Soul";
    let vibe = "Low bureaucracy, high value";
    let quote = "I found this plan that'll cure the loneliness for you.";

    let (status, html) = submit(test_app(), form_body(artist, vibe, quote)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<b>Artist:</b> Ab-Soul"));
    assert!(html.contains("<b>Vibe:</b> Low bureaucracy, high value"));
    assert!(html.contains("<b>Quote:</b> I found this plan that&#39;ll cure the loneliness for you."));
    for item in INFERRED_TRAITS {
        assert!(html.contains(&format!("- {}", escape_html(item))));
    }
    assert!(html.contains(&format!("Plan Match: {}", PLAN_NAME)));
    assert!(html.contains("<progress value=\"87\" max=\"100\">"));
    assert!(html.contains("Potential misread"));
    assert!(html.contains("Confidence Score: 8.7/10"));
}

#[tokio::test]
async fn test_submission_sections_in_order() {
    let (_, html) = submit(test_app(), form_body("a", "b", "c")).await;

    let order = [
        "data-kind=\"echo\"",
        "data-kind=\"traits\"",
        "data-kind=\"plan_match\"",
        "data-kind=\"bias_check\"",
        "data-kind=\"recommendation\"",
        FOOTER_CAPTION,
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {}", marker)))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_empty_fields_still_render_all_sections() {
    let (status, html) = submit(test_app(), form_body("", "", "")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("class=\"result-block\"").count(), 5);
    assert!(html.contains("<b>Artist:</b> <br>"));
    assert!(html.contains(FOOTER_CAPTION));
}

#[tokio::test]
async fn test_missing_form_fields_are_empty() {
    let (status, html) = submit(test_app(), "artist=Solo".to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<b>Artist:</b> Solo<br>"));
    assert!(html.contains("<b>Vibe:</b> <br>"));
    assert_eq!(html.matches("class=\"result-block\"").count(), 5);
}

#[tokio::test]
async fn test_submitted_values_fill_the_form() {
    let (_, html) = submit(test_app(), form_body("Kendrick", "quiet", "line one\nline two")).await;

    assert!(html.contains("name=\"artist\" value=\"Kendrick\""));
    assert!(html.contains("name=\"vibe\" value=\"quiet\""));
    assert!(html.contains(">\nline one\nline two</textarea>"));
}

#[tokio::test]
async fn test_leading_newline_in_quote_survives_refill() {
    let (_, html) = submit(test_app(), form_body("a", "b", "\nleading")).await;

    // The parser drops the first newline after <textarea>, so two are emitted
    assert!(html.contains("rows=\"4\">\n\nleading</textarea>"));
}

#[tokio::test]
async fn test_form_post_with_json_content_type_is_json_400() {
    let (status, content_type, body) =
        post_root(test_app(), "application/json", "{}".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(content_type.unwrap().contains("application/json"));
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert!(json["error"]["message"].is_string());
}

#[tokio::test]
async fn test_form_post_with_duplicate_field_is_json_400() {
    let (status, content_type, body) = post_root(
        test_app(),
        "application/x-www-form-urlencoded",
        "artist=a&artist=b".to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(content_type.unwrap().contains("application/json"));
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert!(json["error"]["message"].as_str().unwrap().contains("duplicate field"));
}

#[tokio::test]
async fn test_markup_is_echoed_as_text() {
    let (_, html) = submit(test_app(), form_body("<i>x</i>", "a & b", "<script>alert(1)</script>")).await;

    assert!(html.contains("<b>Artist:</b> &lt;i&gt;x&lt;/i&gt;"));
    assert!(html.contains("<b>Vibe:</b> a &amp; b"));
    assert!(!html.contains("<script>alert(1)</script>"));
}

#[tokio::test]
async fn test_different_inputs_share_static_content() {
    let (_, first) = submit(test_app(), form_body("one", "two", "three")).await;
    let (_, second) = submit(test_app(), form_body("four", "five", "six")).await;

    let tail = |html: &str| html[html.find("data-kind=\"traits\"").unwrap()..].to_string();
    assert_eq!(tail(&first), tail(&second));
}

#[tokio::test]
async fn test_resubmission_is_identical() {
    let body = form_body("same", "same", "same");
    let (_, first) = submit(test_app(), body.clone()).await;
    let (_, second) = submit(test_app(), body).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_theme_stylesheet_route() {
    let (status, content_type, css) = get_text(test_app(), "/static/carson-theme.css").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/css"));
    assert!(css.contains("#001E62"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, _, body) = get_text(test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["module"], "cgp-pm");
    assert!(json["version"].is_string());
    assert!(json["uptime_seconds"].is_number());
}

#[tokio::test]
async fn test_buildinfo_endpoint() {
    let (status, _, body) = get_text(test_app(), "/api/buildinfo").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["git_hash"].is_string());
    assert!(json["build_timestamp"].is_string());
    assert!(json["build_profile"].is_string());
}

#[tokio::test]
async fn test_unknown_path_is_json_404() {
    let (status, _, body) = get_text(test_app(), "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "/nope");
}
