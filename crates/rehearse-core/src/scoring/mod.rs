//! Transcript scoring.
//!
//! # Module Structure
//!
//! - `pillar`: The closed set of sales-skill dimensions (`Pillar`)
//! - `config`: Injectable keyword and coaching tables (`ScoringConfig`)
//! - `scorer`: Keyword counting and aggregation (`TranscriptScorer`)
//! - `scoreboard`: Scoring results (`ScoreBoard`, `SubScores`)
//! - `objection`: Objection coverage analysis (`ObjectionCoverage`)

mod config;
mod objection;
mod pillar;
mod scoreboard;
mod scorer;

pub use config::{PillarDefinition, ScoringConfig, default_objection_topics, default_pillars};
pub use objection::ObjectionCoverage;
pub use pillar::Pillar;
pub use scoreboard::{
    PILLAR_MAX_POINTS, QUALIFYING_MESSAGE_CAP, ScoreBoard, SubScores, message_points,
    truncate_points,
};
pub use scorer::{COMPLIMENT_THRESHOLD, PASS_THRESHOLD, TranscriptScorer};

use crate::session::Message;

/// Scores a transcript with the default tables.
pub fn score(transcript: &[Message]) -> ScoreBoard {
    TranscriptScorer::default().score(transcript)
}
