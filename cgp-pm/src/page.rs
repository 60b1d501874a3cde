//! HTML page rendering
//!
//! Renders the single plan matcher page: title, caption, themed form and,
//! after a submission, the result sections followed by the footer caption.

use crate::form::{FormInput, ARTIST_LABEL, QUOTE_LABEL, SUBMIT_LABEL, VIBE_LABEL};
use crate::matcher::MatchOutcome;
use crate::result::{ContentBlock, ResultView, PROCESSING_MESSAGE};
use crate::theme;

pub const PAGE_TITLE: &str = "🎓 CGP: Carson-Branded Plan Matcher";
pub const PAGE_CAPTION: &str =
    "📍 Built with the pride of Carson High — Purpose-driven, soul-matched care";

/// Escape text for inclusion in HTML element content or attribute values
///
/// The browser then displays exactly the characters the user typed.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the complete page for one interaction
pub fn render_page(form: &FormInput, outcome: &MatchOutcome) -> String {
    let results = match outcome {
        MatchOutcome::Idle => String::new(),
        MatchOutcome::ResultShown(view) => render_results(view),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>CGP: Carson-Branded Plan Matcher</title>
    <style>
{css}
    </style>
</head>
<body>
<div class="main">
    <h1>{title}</h1>
    <p class="caption">{caption}</p>
{form}
    <div id="processing" class="processing">⏳ {processing}</div>
{results}
</div>
<script>
    document.getElementById('match-form').addEventListener('submit', function () {{
        document.getElementById('processing').classList.add('active');
    }});
</script>
</body>
</html>
"#,
        css = theme::stylesheet(),
        title = PAGE_TITLE,
        caption = PAGE_CAPTION,
        form = render_form(form),
        processing = PROCESSING_MESSAGE,
        results = results,
    )
}

fn render_form(form: &FormInput) -> String {
    format!(
        r#"    <form id="match-form" method="post" action="/">
        <div class="form-group stTextInput">
            <label for="artist">{artist_label}</label>
            <div><input type="text" id="artist" name="artist" value="{artist}"></div>
        </div>
        <div class="form-group stTextInput">
            <label for="vibe">{vibe_label}</label>
            <div><input type="text" id="vibe" name="vibe" value="{vibe}"></div>
        </div>
        <div class="form-group stTextArea">
            <label for="quote">{quote_label}</label>
            <div><textarea id="quote" name="quote" rows="4">
{quote}</textarea></div>
        </div>
        <div class="stButton"><button type="submit">{submit_label}</button></div>
    </form>"#,
        artist_label = ARTIST_LABEL,
        vibe_label = VIBE_LABEL,
        quote_label = QUOTE_LABEL,
        submit_label = SUBMIT_LABEL,
        artist = escape_html(&form.artist),
        vibe = escape_html(&form.vibe),
        quote = escape_html(&form.quote),
    )
}

/// Result sections in display order, then the footer caption
fn render_results(view: &ResultView) -> String {
    let mut html = String::from("    <div id=\"results\">\n");
    for block in &view.blocks {
        html.push_str(&render_block(block));
    }
    html.push_str(&format!(
        "    <p class=\"caption footer\">{}</p>\n    </div>\n",
        escape_html(view.footer)
    ));
    html
}

fn render_block(block: &ContentBlock) -> String {
    let heading = escape_html(&block.heading());
    let body = match block {
        ContentBlock::Echo {
            artist,
            vibe,
            quote,
        } => format!(
            "<div class='emotion-box'>🎤 <b>Artist:</b> {}<br>🎯 <b>Vibe:</b> {}<br>🗣️ <b>Quote:</b> {}</div>",
            escape_html(artist),
            escape_html(vibe),
            escape_html(quote)
        ),
        ContentBlock::Traits { items } => {
            let lines: Vec<String> = items
                .iter()
                .map(|item| format!("- {}", escape_html(item)))
                .collect();
            format!("<div class='emotion-box'>{}</div>", lines.join("<br>"))
        }
        ContentBlock::PlanMatch {
            progress,
            progress_max,
            benefits,
            ..
        } => {
            let lines: Vec<String> = benefits
                .iter()
                .map(|benefit| format!("✅ {}", escape_html(benefit)))
                .collect();
            format!(
                "<progress value=\"{}\" max=\"{}\">{}%</progress>\n<div class='emotion-box'>{}</div>",
                progress,
                progress_max,
                progress,
                lines.join("<br>")
            )
        }
        ContentBlock::BiasCheck { warning, reframe } => format!(
            "<div class='notice notice-warning'>{}</div>\n<div class='emotion-box'>{}</div>",
            escape_html(warning),
            escape_html(reframe)
        ),
        ContentBlock::Recommendation { message, .. } => format!(
            "<div class='notice notice-success'>{}</div>",
            escape_html(message)
        ),
    };

    format!(
        "    <section class=\"result-block\" data-kind=\"{}\">\n<h2>{}</h2>\n{}\n    </section>\n",
        block.kind(),
        heading,
        body
    )
}
