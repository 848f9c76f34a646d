//! Scoring tables: pillar keywords, coaching copy and objection topics.
//!
//! The tables are plain data so they can be loaded from TOML, swapped in
//! tests, or localized without touching the scorer.

use super::pillar::Pillar;
use crate::error::{RehearseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Keyword triggers and coaching copy for one pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarDefinition {
    pub pillar: Pillar,
    /// Trigger phrases; matched as lower-case substrings.
    pub keywords: Vec<String>,
    /// Shown when the pillar is fully covered.
    pub compliment: String,
    /// Shown otherwise.
    pub improvement_hint: String,
}

/// The complete set of scoring tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Objection topics in reporting order.
    #[serde(default = "default_objection_topics")]
    pub objection_topics: Vec<String>,
    #[serde(rename = "pillar", default = "default_pillars")]
    pub pillars: Vec<PillarDefinition>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            objection_topics: default_objection_topics(),
            pillars: default_pillars(),
        }
    }
}

impl ScoringConfig {
    /// Looks up the definition for a pillar.
    pub fn definition(&self, pillar: Pillar) -> Option<&PillarDefinition> {
        self.pillars.iter().find(|d| d.pillar == pillar)
    }

    /// Pillars with no definition; they always score zero.
    pub fn missing_pillars(&self) -> Vec<Pillar> {
        Pillar::ordered()
            .filter(|p| self.definition(*p).is_none())
            .collect()
    }

    /// Rejects duplicate pillars and blank keywords or topics.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for def in &self.pillars {
            if !seen.insert(def.pillar) {
                return Err(RehearseError::config(format!(
                    "pillar '{}' is defined more than once",
                    def.pillar
                )));
            }
            if def.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(RehearseError::config(format!(
                    "pillar '{}' has an empty keyword",
                    def.pillar
                )));
            }
        }

        if self.objection_topics.iter().any(|t| t.trim().is_empty()) {
            return Err(RehearseError::config("objection topics must not be empty"));
        }

        Ok(())
    }
}

/// Returns the default objection topics in their fixed reporting order.
pub fn default_objection_topics() -> Vec<String> {
    [
        "budget",
        "timing",
        "vendor switching",
        "implementation",
        "support",
        "internal approval",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

/// Returns the default pillar tables drawn from the B2B sales playbook.
pub fn default_pillars() -> Vec<PillarDefinition> {
    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    vec![
        PillarDefinition {
            pillar: Pillar::Rapport,
            keywords: words(&["i understand", "great question", "thank you for sharing"]),
            compliment: "You built genuine rapport: the prospect heard empathy and felt listened to throughout the call.".to_string(),
            improvement_hint: "Acknowledge what the prospect tells you before pivoting. Phrases like \"I understand\" or \"thank you for sharing\" keep them talking.".to_string(),
        },
        PillarDefinition {
            pillar: Pillar::Pain,
            keywords: words(&["challenge", "issue", "pain point", "concern"]),
            compliment: "Strong pain discovery: you kept digging until the real business problem was on the table.".to_string(),
            improvement_hint: "Ask directly about challenges and concerns with the current setup, then follow up on the impact of each one.".to_string(),
        },
        PillarDefinition {
            pillar: Pillar::Needs,
            keywords: words(&["what system", "how much time", "are you confident", "success look"]),
            compliment: "Thorough needs analysis: you mapped the current system, the time cost and what success looks like.".to_string(),
            improvement_hint: "Use the discovery questions: what system they use now, how much time payroll takes, whether they are confident in compliance, and what success looks like.".to_string(),
        },
        PillarDefinition {
            pillar: Pillar::Teach,
            keywords: words(&["did you know", "we've seen", "benchmark", "tailor"]),
            compliment: "Great teaching moments: you shared benchmarks and tailored insight the prospect had not considered.".to_string(),
            improvement_hint: "Bring an insight the prospect does not have yet: a benchmark, a result you've seen with similar clients, or a tailored recommendation.".to_string(),
        },
        PillarDefinition {
            pillar: Pillar::Close,
            keywords: words(&["demo", "free trial", "does this sound", "next step", "move forward"]),
            compliment: "Confident close: you proposed concrete next steps and asked for commitment.".to_string(),
            improvement_hint: "Always ask for a next step: offer a demo or free trial, or check \"does this sound like a fit?\" before the call ends.".to_string(),
        },
    ]
}
