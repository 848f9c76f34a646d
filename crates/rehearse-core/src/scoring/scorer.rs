//! Keyword-based transcript scorer.

use super::config::{PillarDefinition, ScoringConfig};
use super::objection::ObjectionCoverage;
use super::pillar::Pillar;
use super::scoreboard::{
    PILLAR_MAX_POINTS, QUALIFYING_MESSAGE_CAP, ScoreBoard, SubScores, message_points,
    truncate_points,
};
use crate::error::Result;
use crate::session::{Message, MessageRole};
use tracing::{debug, warn};

/// Sub-score at or above which a pillar gets the pass marker.
pub const PASS_THRESHOLD: f64 = 10.0;

/// Sub-score at or above which the compliment replaces the improvement hint.
pub const COMPLIMENT_THRESHOLD: f64 = 15.0;

const PASS_MARKER: &str = "✅";
const WARN_MARKER: &str = "⚠️";

#[derive(Debug, Clone)]
struct CompiledPillar {
    pillar: Pillar,
    keywords: Vec<String>,
    compliment: String,
    improvement_hint: String,
}

impl CompiledPillar {
    fn from_definition(def: &PillarDefinition) -> Self {
        Self {
            pillar: def.pillar,
            keywords: def.keywords.iter().map(|k| k.to_lowercase()).collect(),
            compliment: def.compliment.clone(),
            improvement_hint: def.improvement_hint.clone(),
        }
    }

    /// A pillar with no keywords. Coaching copy falls back to the defaults.
    fn unconfigured(pillar: Pillar) -> Self {
        let defaults = ScoringConfig::default();
        match defaults.definition(pillar) {
            Some(def) => Self {
                keywords: Vec::new(),
                ..Self::from_definition(def)
            },
            None => Self {
                pillar,
                keywords: Vec::new(),
                compliment: String::new(),
                improvement_hint: String::new(),
            },
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Scores transcripts against a fixed set of scoring tables.
///
/// The scorer is immutable after construction, so a single instance can be
/// shared across threads and reused for every session.
#[derive(Debug, Clone)]
pub struct TranscriptScorer {
    pillars: Vec<CompiledPillar>,
    objection_topics: Vec<String>,
}

impl Default for TranscriptScorer {
    fn default() -> Self {
        Self::compile(&ScoringConfig::default())
    }
}

impl TranscriptScorer {
    /// Validates `config` and builds a scorer from it.
    pub fn new(config: &ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::compile(config))
    }

    fn compile(config: &ScoringConfig) -> Self {
        let missing = config.missing_pillars();
        if !missing.is_empty() {
            warn!(?missing, "Scoring config has no definition for some pillars; they will score 0");
        }

        let pillars = Pillar::ordered()
            .map(|pillar| match config.definition(pillar) {
                Some(def) => CompiledPillar::from_definition(def),
                None => CompiledPillar::unconfigured(pillar),
            })
            .collect();

        Self {
            pillars,
            objection_topics: config
                .objection_topics
                .iter()
                .map(|t| t.to_lowercase())
                .collect(),
        }
    }

    /// Scores a transcript.
    ///
    /// Only `user` messages are examined. Each message counts at most once per
    /// pillar, and at most three messages count toward any pillar.
    pub fn score(&self, transcript: &[Message]) -> ScoreBoard {
        let mut unknown_roles = 0usize;
        let user_texts: Vec<String> = transcript
            .iter()
            .filter_map(|m| match m.role {
                MessageRole::User => Some(m.content.to_lowercase()),
                MessageRole::Unknown => {
                    unknown_roles += 1;
                    None
                }
                MessageRole::System | MessageRole::Assistant => None,
            })
            .collect();

        if unknown_roles > 0 {
            warn!(count = unknown_roles, "Ignoring messages with unrecognised roles");
        }

        let mut sub_scores = SubScores::new();
        let mut capped_sum = 0usize;
        let mut feedback_lines = Vec::with_capacity(self.pillars.len());
        let mut details = Vec::with_capacity(self.pillars.len());

        for compiled in &self.pillars {
            let count = user_texts.iter().filter(|t| compiled.matches(t)).count();
            let capped = count.min(QUALIFYING_MESSAGE_CAP);
            let points = message_points(capped);
            debug!(pillar = %compiled.pillar, count, points, "Scored pillar");

            capped_sum += capped;
            feedback_lines.push(feedback_line(compiled.pillar, points));
            let coaching = if points >= COMPLIMENT_THRESHOLD {
                &compiled.compliment
            } else {
                &compiled.improvement_hint
            };
            details.push(format!("{}: {}", compiled.pillar.title(), coaching));
            sub_scores.insert(compiled.pillar, points);
        }

        // Exact integer form of trunc(sum of sub-scores).
        let total = (PILLAR_MAX_POINTS as usize * capped_sum / QUALIFYING_MESSAGE_CAP) as u32;

        let objections = ObjectionCoverage::detect(&self.objection_topics, &user_texts.join("\n"));
        let narrative_detail = format!("{}\n\n{}", details.join("\n\n"), objections.render());

        ScoreBoard {
            sub_scores,
            total,
            feedback_lines,
            narrative_detail,
            objections,
        }
    }
}

fn feedback_line(pillar: Pillar, points: f64) -> String {
    let marker = if points >= PASS_THRESHOLD {
        PASS_MARKER
    } else {
        WARN_MARKER
    };
    format!(
        "{} {} {}/{}",
        marker,
        pillar.title(),
        truncate_points(points),
        PILLAR_MAX_POINTS
    )
}
