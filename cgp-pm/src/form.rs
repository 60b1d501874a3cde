//! Plan matcher input form
//!
//! Three free-text fields plus a submit control. Nothing is validated:
//! any string, including the empty string, is accepted as-is.

use serde::{Deserialize, Serialize};

pub const ARTIST_LABEL: &str = "🎧 Your Artist";
pub const VIBE_LABEL: &str = "🌱 Desired Plan Vibe";
pub const QUOTE_LABEL: &str = "🗣️ Describe Your Ideal Experience";
pub const SUBMIT_LABEL: &str = "🔎 Match My Plan";

pub const DEFAULT_ARTIST: &str = "Ab-Soul";
pub const DEFAULT_VIBE: &str = "Low bureaucracy, high value";
pub const DEFAULT_QUOTE: &str = "I found this plan that'll cure the loneliness for you. \
It'll help connect you with people in the community.";

/// Current contents of the three form fields
///
/// Fields missing from a request body deserialize as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub vibe: String,
    #[serde(default)]
    pub quote: String,
}

impl FormInput {
    pub fn new(artist: impl Into<String>, vibe: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            vibe: vibe.into(),
            quote: quote.into(),
        }
    }
}

impl Default for FormInput {
    /// Placeholder values shown on first render
    fn default() -> Self {
        Self::new(DEFAULT_ARTIST, DEFAULT_VIBE, DEFAULT_QUOTE)
    }
}

/// One interaction with the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRequest {
    pub input: FormInput,
    /// True only when the submit control triggered this interaction
    pub submitted: bool,
}

impl MatchRequest {
    /// Plain page load: defaults in the fields, nothing submitted
    pub fn initial() -> Self {
        Self {
            input: FormInput::default(),
            submitted: false,
        }
    }

    /// Submit control pressed with the given field contents
    pub fn submit(input: FormInput) -> Self {
        Self {
            input,
            submitted: true,
        }
    }
}
