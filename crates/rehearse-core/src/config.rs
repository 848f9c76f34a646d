//! Application configuration.
//!
//! Bundles the scoring tables and narrative templates so they can be loaded
//! from a single TOML file by the infrastructure layer.

use crate::error::Result;
use crate::narrative::{NarrativeTemplates, OutcomeNarrator};
use crate::scoring::{ScoringConfig, TranscriptScorer};
use serde::{Deserialize, Serialize};

/// Root configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RehearseConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub narrative: NarrativeTemplates,
}

impl RehearseConfig {
    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        self.narrative.validate()
    }

    pub fn build_scorer(&self) -> Result<TranscriptScorer> {
        TranscriptScorer::new(&self.scoring)
    }

    pub fn build_narrator(&self) -> Result<OutcomeNarrator> {
        OutcomeNarrator::new(self.narrative.clone())
    }
}

/// Loads and stores [`RehearseConfig`].
pub trait ConfigRepository: Send + Sync {
    /// Returns the stored config, or the defaults when nothing is stored.
    fn load(&self) -> Result<RehearseConfig>;

    fn save(&self, config: &RehearseConfig) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Pillar;

    #[test]
    fn test_default_round_trips_through_toml() {
        let config = RehearseConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("[[scoring.pillar]]"));

        let parsed: RehearseConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: RehearseConfig = toml::from_str(
            r#"
            [narrative]
            lost_opportunity = "{persona} at {company} went quiet."
            "#,
        )
        .unwrap();

        assert_eq!(parsed.scoring, ScoringConfig::default());
        assert_eq!(parsed.narrative.lost_opportunity, "{persona} at {company} went quiet.");
        assert_eq!(
            parsed.narrative.strong_win,
            NarrativeTemplates::default().strong_win
        );
    }

    #[test]
    fn test_custom_pillar_table_replaces_defaults() {
        let parsed: RehearseConfig = toml::from_str(
            r#"
            [scoring]
            objection_topics = ["price"]

            [[scoring.pillar]]
            pillar = "close"
            keywords = ["sign today"]
            compliment = "Closed."
            improvement_hint = "Ask for the deal."
            "#,
        )
        .unwrap();

        assert_eq!(parsed.scoring.pillars.len(), 1);
        assert_eq!(parsed.scoring.pillars[0].pillar, Pillar::Close);
        assert_eq!(parsed.scoring.missing_pillars().len(), 4);
        assert!(parsed.build_scorer().is_ok());
    }
}
