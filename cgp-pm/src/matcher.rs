//! Submission handling
//!
//! Two states per interaction: [`MatchOutcome::Idle`] before the submit
//! control is pressed and [`MatchOutcome::ResultShown`] after. Each
//! submission starts from scratch; nothing carries over between requests.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::form::{FormInput, MatchRequest};
use crate::result::ResultView;

/// What one interaction displays below the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Form only
    Idle,
    /// Form followed by the result sequence
    ResultShown(ResultView),
}

/// Structured response for one interaction
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub submitted: bool,
    /// Field values the form should display
    pub form: FormInput,
    #[serde(flatten)]
    pub result: Option<ResultView>,
}

impl MatchResponse {
    pub fn new(form: FormInput, outcome: MatchOutcome) -> Self {
        match outcome {
            MatchOutcome::Idle => Self {
                submitted: false,
                form,
                result: None,
            },
            MatchOutcome::ResultShown(view) => Self {
                submitted: true,
                form,
                result: Some(view),
            },
        }
    }
}

/// Turns form interactions into outcomes
#[derive(Debug, Clone)]
pub struct PlanMatcher {
    processing_delay: Duration,
}

impl PlanMatcher {
    /// `processing_delay` is a cosmetic pause before results; zero disables it
    pub fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }

    /// Handle one interaction
    ///
    /// Not submitted: returns `Idle` immediately. Submitted: waits the
    /// processing delay, then returns the fixed result sequence with the
    /// fields echoed.
    pub async fn handle(&self, request: &MatchRequest) -> MatchOutcome {
        if !request.submitted {
            return MatchOutcome::Idle;
        }

        info!(
            artist_len = request.input.artist.len(),
            vibe_len = request.input.vibe.len(),
            quote_len = request.input.quote.len(),
            "Plan match submitted"
        );

        if !self.processing_delay.is_zero() {
            debug!("Simulating processing for {:?}", self.processing_delay);
            tokio::time::sleep(self.processing_delay).await;
        }

        MatchOutcome::ResultShown(ResultView::render(&request.input))
    }
}
