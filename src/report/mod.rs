pub mod json;
pub mod text;

use crate::error::IntyError;
use crate::listing::ListingSummary;
use crate::score::rank::RankedCompany;
use crate::types::scoring::{round_to_cents, Score};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringSummary {
    pub input: String,
    pub output: String,
    pub rows: usize,
    pub mean_score: Score,
    pub top: Vec<RankedCompany>,
}

impl ScoringSummary {
    pub fn new(
        input: String,
        output: String,
        scores: &[Score],
        top: Vec<RankedCompany>,
    ) -> Self {
        let mean_score = if scores.is_empty() {
            0.0
        } else {
            let sum: Score = scores.iter().sum();
            round_to_cents(sum / scores.len() as f64)
        };
        Self {
            input,
            output,
            rows: scores.len(),
            mean_score,
            top,
        }
    }
}

pub fn render_listing(summary: &ListingSummary, format: OutputFormat) -> Result<String, IntyError> {
    match format {
        OutputFormat::Text => Ok(text::listing_to_text(summary)),
        OutputFormat::Json => json::to_json(summary).map_err(IntyError::Json),
    }
}

pub fn render_scoring(summary: &ScoringSummary, format: OutputFormat) -> Result<String, IntyError> {
    match format {
        OutputFormat::Text => Ok(text::scoring_to_text(summary)),
        OutputFormat::Json => json::to_json(summary).map_err(IntyError::Json),
    }
}
