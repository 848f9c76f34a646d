//! Scoring and outcome-narrative engine for role-play sales training.
//!
//! A sales rep converses with an AI-simulated prospect. When the call ends,
//! [`scoring::TranscriptScorer`] turns the transcript into a [`scoring::ScoreBoard`]
//! and [`narrative::OutcomeNarrator`] picks the fictional fate of the deal.
//!
//! Everything around that core (the language model, speech, leaderboard
//! storage) is reached through traits so callers can plug in their own.

pub mod config;
pub mod error;
pub mod leaderboard;
pub mod narrative;
pub mod persona;
pub mod scoring;
pub mod session;

// Re-export common error type
pub use error::{RehearseError, Result};
