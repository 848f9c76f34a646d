//! Outcome selection.

use super::templates::{NarrativeTemplates, render};
use crate::error::Result;
use crate::scoring::{Pillar, SubScores};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// The fictional fate of the deal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// Proposal accepted; becomes a long-term client.
    StrongWin,
    /// Second call scheduled.
    WarmFollowUp,
    /// Reviewing internally.
    LukewarmPending,
    /// No response; moved to a competitor.
    LostOpportunity,
}

impl Outcome {
    /// Every outcome, in decision-list priority order.
    pub const ALL: [Outcome; 4] = [
        Outcome::StrongWin,
        Outcome::WarmFollowUp,
        Outcome::LukewarmPending,
        Outcome::LostOpportunity,
    ];

    /// Evaluates the decision list; the first matching rule wins.
    pub fn select(sub_scores: &SubScores) -> Self {
        let total = sub_scores.total();
        let close = sub_scores.get(Pillar::Close);
        let rapport = sub_scores.get(Pillar::Rapport);
        let pain = sub_scores.get(Pillar::Pain);

        if total >= 75 && close >= 10.0 {
            Outcome::StrongWin
        } else if total >= 50 && close >= 5.0 {
            Outcome::WarmFollowUp
        } else if total >= 35 && rapport >= 10.0 && pain >= 5.0 {
            Outcome::LukewarmPending
        } else {
            Outcome::LostOpportunity
        }
    }
}

/// Picks and renders one of four canned outcome narratives.
#[derive(Debug, Clone, Default)]
pub struct OutcomeNarrator {
    templates: NarrativeTemplates,
}

impl OutcomeNarrator {
    /// Validates `templates` and builds a narrator from them.
    pub fn new(templates: NarrativeTemplates) -> Result<Self> {
        templates.validate()?;
        Ok(Self { templates })
    }

    /// Renders the narrative for the selected outcome.
    ///
    /// Pure: identical inputs always yield identical text.
    pub fn narrate(&self, sub_scores: &SubScores, persona_name: &str, company_name: &str) -> String {
        let outcome = Outcome::select(sub_scores);
        tracing::debug!(%outcome, total = sub_scores.total(), "Selected outcome narrative");
        render(self.templates.template(outcome), persona_name, company_name)
    }
}
