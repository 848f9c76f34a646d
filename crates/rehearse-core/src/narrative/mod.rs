//! Outcome narratives.
//!
//! Turns sub-scores into one of four canned stories about what happened to
//! the deal after the call.

mod narrator;
mod templates;

pub use narrator::{Outcome, OutcomeNarrator};
pub use templates::{COMPANY_PLACEHOLDER, NarrativeTemplates, PERSONA_PLACEHOLDER, render};

use crate::scoring::SubScores;

/// Narrates with the default templates.
pub fn narrate(sub_scores: &SubScores, persona_name: &str, company_name: &str) -> String {
    OutcomeNarrator::default().narrate(sub_scores, persona_name, company_name)
}
