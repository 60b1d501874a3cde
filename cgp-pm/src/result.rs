//! Result blocks shown after a submission
//!
//! Every block except the echo is compile-time constant text. The echo block
//! repeats the three form fields verbatim.

use serde::Serialize;

use crate::form::FormInput;

pub const ECHO_HEADING: &str = "🎧 Your Emotional Fingerprint";
pub const TRAITS_HEADING: &str = "🧠 Inferred Traits";
pub const BIAS_CHECK_HEADING: &str = "🧪 Bias & Validation Check";
pub const RECOMMENDATION_HEADING: &str = "✅ Final Recommendation";

pub const INFERRED_TRAITS: [&str; 5] = [
    "Deeply introspective",
    "Distrusts red tape",
    "Craves self-guided autonomy",
    "Seeks connection only when it feels real",
    "Needs systems that don’t talk down to them",
];

pub const PLAN_NAME: &str = "UnityCare Connect Lite+";
/// Match strength out of [`PLAN_PROGRESS_MAX`]
pub const PLAN_PROGRESS: u8 = 87;
pub const PLAN_PROGRESS_MAX: u8 = 100;
pub const PLAN_BENEFITS: [&str; 5] = [
    "Minimal forms",
    "Auto-assigned local concierge",
    "Built-in community events & transportation",
    "No pre-auth needed for specialists",
    "Emotional support via app or in-person",
];

pub const BIAS_WARNING: &str = "⚠️ Potential misread: Plan assumes you want community engagement when you may need autonomy.";
pub const BIAS_REFRAME: &str =
    "🔁 Reframe it: \"Freedom-first coverage — support if you want it, solitude if you need it.\"";

pub const RECOMMENDATION: &str = "This plan helps you stay in control without paperwork hell. \
It quietly keeps the door open to connection—but only if you want it. \
No pressure. No fluff. Just care that listens.";
pub const CONFIDENCE_SCORE: &str = "8.7/10";

pub const FOOTER_CAPTION: &str =
    "Confidence Score: 8.7/10 | Branded by Carson Engine | Powered by CGP";

/// Shown while the simulated processing delay runs
pub const PROCESSING_MESSAGE: &str = "Tuning into your emotional frequency...";

/// One self-contained section of the result sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    Echo {
        artist: String,
        vibe: String,
        quote: String,
    },
    Traits {
        items: &'static [&'static str],
    },
    PlanMatch {
        plan: &'static str,
        progress: u8,
        progress_max: u8,
        benefits: &'static [&'static str],
    },
    BiasCheck {
        warning: &'static str,
        reframe: &'static str,
    },
    Recommendation {
        message: &'static str,
        confidence: &'static str,
    },
}

impl ContentBlock {
    /// Section heading displayed above the block
    pub fn heading(&self) -> String {
        match self {
            ContentBlock::Echo { .. } => ECHO_HEADING.to_string(),
            ContentBlock::Traits { .. } => TRAITS_HEADING.to_string(),
            ContentBlock::PlanMatch { plan, .. } => format!("🩺 Plan Match: {}", plan),
            ContentBlock::BiasCheck { .. } => BIAS_CHECK_HEADING.to_string(),
            ContentBlock::Recommendation { .. } => RECOMMENDATION_HEADING.to_string(),
        }
    }

    /// Serialized `kind` tag
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Echo { .. } => "echo",
            ContentBlock::Traits { .. } => "traits",
            ContentBlock::PlanMatch { .. } => "plan_match",
            ContentBlock::BiasCheck { .. } => "bias_check",
            ContentBlock::Recommendation { .. } => "recommendation",
        }
    }
}

/// The ordered result sequence for one submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub blocks: Vec<ContentBlock>,
    pub footer: &'static str,
}

impl ResultView {
    /// Build the five blocks in fixed order: echo, traits, plan match,
    /// bias check, recommendation
    pub fn render(input: &FormInput) -> Self {
        let blocks = vec![
            ContentBlock::Echo {
                artist: input.artist.clone(),
                vibe: input.vibe.clone(),
                quote: input.quote.clone(),
            },
            ContentBlock::Traits {
                items: &INFERRED_TRAITS,
            },
            ContentBlock::PlanMatch {
                plan: PLAN_NAME,
                progress: PLAN_PROGRESS,
                progress_max: PLAN_PROGRESS_MAX,
                benefits: &PLAN_BENEFITS,
            },
            ContentBlock::BiasCheck {
                warning: BIAS_WARNING,
                reframe: BIAS_REFRAME,
            },
            ContentBlock::Recommendation {
                message: RECOMMENDATION,
                confidence: CONFIDENCE_SCORE,
            },
        ];

        Self {
            blocks,
            footer: FOOTER_CAPTION,
        }
    }
}
