//! Leaderboard trait and ranking.
//!
//! Durable storage is left to the application; this module defines the
//! contract and how standings are ordered and rendered.

use crate::error::{RehearseError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// One saved score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub timestamp: DateTime<Utc>,
}

/// An append-only store of scores.
pub trait Leaderboard: Send + Sync {
    /// Appends a score. Blank names are rejected.
    fn insert(&self, name: &str, score: u32, timestamp: DateTime<Utc>) -> Result<()>;

    /// Best `n` entries: highest score first, earlier timestamp breaking ties.
    fn top_n(&self, n: usize) -> Result<Vec<LeaderboardEntry>>;
}

/// Leaderboard held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryLeaderboard {
    entries: Mutex<Vec<LeaderboardEntry>>,
}

impl InMemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Leaderboard for InMemoryLeaderboard {
    fn insert(&self, name: &str, score: u32, timestamp: DateTime<Utc>) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RehearseError::invalid_input("leaderboard name is empty"));
        }

        let mut entries = self
            .entries
            .lock()
            .map_err(|e| RehearseError::internal(format!("leaderboard lock poisoned: {}", e)))?;
        entries.push(LeaderboardEntry {
            name: name.to_string(),
            score,
            timestamp,
        });
        Ok(())
    }

    fn top_n(&self, n: usize) -> Result<Vec<LeaderboardEntry>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| RehearseError::internal(format!("leaderboard lock poisoned: {}", e)))?;
        let mut ranked = entries.clone();
        rank(&mut ranked);
        ranked.truncate(n);
        Ok(ranked)
    }
}

/// Sorts by score descending, then timestamp ascending.
pub fn rank(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.timestamp.cmp(&b.timestamp))
    });
}

/// Renders `"<rank>. <name> — <score>"` lines, starting at rank 1.
pub fn format_standings(entries: &[LeaderboardEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {} — {}", i + 1, e.name, e.score))
        .collect::<Vec<_>>()
        .join("\n")
}
