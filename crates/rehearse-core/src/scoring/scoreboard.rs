//! Score board types produced by the transcript scorer.

use super::objection::ObjectionCoverage;
use super::pillar::Pillar;
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Maximum points a single pillar contributes.
pub const PILLAR_MAX_POINTS: u32 = 20;

/// Qualifying messages beyond this count add nothing.
pub const QUALIFYING_MESSAGE_CAP: usize = 3;

/// Points earned by `messages` qualifying messages, without capping.
pub fn message_points(messages: usize) -> f64 {
    messages as f64 * (f64::from(PILLAR_MAX_POINTS) / QUALIFYING_MESSAGE_CAP as f64)
}

/// The message count behind `points`, if it is exactly what
/// [`message_points`] yields for that count.
fn whole_messages(points: f64) -> Option<usize> {
    let messages = (points / message_points(1)).round();
    if messages < 0.0 || !messages.is_finite() {
        return None;
    }
    let messages = messages as usize;
    (message_points(messages) == points).then_some(messages)
}

/// Truncates a point value toward zero. Negative values clamp to 0.
pub fn truncate_points(points: f64) -> u32 {
    if points <= 0.0 {
        return 0;
    }
    points.trunc() as u32
}

/// Pillar → sub-score mapping. Missing pillars read as zero.
///
/// Keys that are not pillars are kept: they add to [`SubScores::total`] but
/// never satisfy a per-pillar condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubScores {
    #[serde(flatten)]
    pillars: BTreeMap<Pillar, f64>,
    #[serde(flatten)]
    other: BTreeMap<String, f64>,
}

impl SubScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from string keys.
    pub fn from_named<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut scores = Self::new();
        for (name, points) in entries {
            let name = name.as_ref();
            match Pillar::from_str(name) {
                Ok(pillar) => scores.insert(pillar, points),
                Err(_) => {
                    tracing::debug!(name, "Sub-score is not a pillar; counting it toward the total only");
                    scores.other.insert(name.to_string(), points);
                }
            }
        }
        scores
    }

    pub fn insert(&mut self, pillar: Pillar, points: f64) {
        self.pillars.insert(pillar, points);
    }

    /// Sub-score for `pillar`, defaulting to 0.
    pub fn get(&self, pillar: Pillar) -> f64 {
        self.pillars.get(&pillar).copied().unwrap_or(0.0)
    }

    /// Sum of all sub-scores, truncated toward zero.
    ///
    /// Values that are whole multiples of a message's worth are summed as
    /// message counts, so 20/3 + 40/3 is exactly 20. Everything else is added
    /// as given.
    pub fn total(&self) -> u32 {
        let mut messages = 0usize;
        let mut rest = 0.0;
        for &points in self.pillars.values().chain(self.other.values()) {
            match whole_messages(points) {
                Some(n) => messages += n,
                None => rest += points,
            }
        }

        let earned = PILLAR_MAX_POINTS as usize * messages;
        let whole = earned / QUALIFYING_MESSAGE_CAP;
        let fraction = (earned % QUALIFYING_MESSAGE_CAP) as f64 / QUALIFYING_MESSAGE_CAP as f64;
        truncate_points(whole as f64 + fraction + rest)
    }

    /// Iterates pillar sub-scores in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Pillar, f64)> + '_ {
        self.pillars.iter().map(|(p, v)| (*p, *v))
    }

    /// Number of entries, including non-pillar keys.
    pub fn len(&self) -> usize {
        self.pillars.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pillars.is_empty() && self.other.is_empty()
    }
}

impl FromIterator<(Pillar, f64)> for SubScores {
    fn from_iter<T: IntoIterator<Item = (Pillar, f64)>>(iter: T) -> Self {
        Self {
            pillars: iter.into_iter().collect(),
            other: BTreeMap::new(),
        }
    }
}

/// Result of scoring one transcript.
///
/// Built once by [`super::TranscriptScorer::score`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBoard {
    pub(crate) sub_scores: SubScores,
    pub(crate) total: u32,
    pub(crate) feedback_lines: Vec<String>,
    pub(crate) narrative_detail: String,
    pub(crate) objections: ObjectionCoverage,
}

impl ScoreBoard {
    pub fn sub_scores(&self) -> &SubScores {
        &self.sub_scores
    }

    pub fn sub_score(&self, pillar: Pillar) -> f64 {
        self.sub_scores.get(pillar)
    }

    /// Integer total in `0..=100`.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// One pass/warn line per pillar, in declaration order.
    pub fn feedback_lines(&self) -> &[String] {
        &self.feedback_lines
    }

    /// Coaching text followed by the objection coverage lines.
    pub fn narrative_detail(&self) -> &str {
        &self.narrative_detail
    }

    pub fn objections(&self) -> &ObjectionCoverage {
        &self.objections
    }

    /// Headline plus feedback lines, as shown after "End & Score".
    pub fn summary(&self) -> String {
        format!(
            "🏆 **Score {}/100**\n\n{}",
            self.total,
            self.feedback_lines.join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THIRD: f64 = 20.0 / 3.0;

    #[test]
    fn test_missing_pillar_reads_zero() {
        let scores: SubScores = [(Pillar::Rapport, 20.0)].into_iter().collect();
        assert_eq!(scores.get(Pillar::Close), 0.0);
        assert_eq!(scores.total(), 20);
    }

    #[test]
    fn test_total_truncates_rather_than_rounds() {
        let scores: SubScores = Pillar::ordered().map(|p| (p, 2.0 * THIRD)).collect();
        // 5 x 13.33 = 66.67
        assert_eq!(scores.total(), 66);

        let scores: SubScores = [(Pillar::Pain, 6.9), (Pillar::Needs, 6.9)]
            .into_iter()
            .collect();
        assert_eq!(scores.total(), 13);
    }

    #[test]
    fn test_total_of_exact_thirds_is_not_shortchanged() {
        let scores: SubScores = [
            (Pillar::Rapport, THIRD),
            (Pillar::Pain, 2.0 * THIRD),
            (Pillar::Needs, 2.0 * THIRD),
            (Pillar::Teach, THIRD),
            (Pillar::Close, 3.0 * THIRD),
        ]
        .into_iter()
        .collect();
        assert_eq!(scores.total(), 60);
    }

    #[test]
    fn test_from_named_keeps_unknown_keys_in_total() {
        let scores = SubScores::from_named([
            ("rapport", 20.0),
            ("pain", 20.0),
            ("objection", 20.0),
            ("close", 20.0),
        ]);
        assert_eq!(scores.len(), 4);
        assert_eq!(scores.get(Pillar::Needs), 0.0);
        assert_eq!(scores.iter().count(), 3);
        assert_eq!(scores.total(), 80);
    }

    #[test]
    fn test_total_does_not_round_up_near_integers() {
        let scores = SubScores::from_named([
            ("rapport", 20.0),
            ("pain", 20.0),
            ("needs", 20.0),
            ("teach", 4.9999999995),
            ("close", 10.0),
        ]);
        assert_eq!(scores.total(), 74);
    }

    #[test]
    fn test_message_points_round_trip() {
        for n in 0..=QUALIFYING_MESSAGE_CAP {
            assert_eq!(whole_messages(message_points(n)), Some(n));
        }
        assert_eq!(whole_messages(6.9), None);
        assert_eq!(whole_messages(-THIRD), None);
    }

    #[test]
    fn test_truncate_points_clamps_negative() {
        assert_eq!(truncate_points(-3.5), 0);
        assert_eq!(truncate_points(13.99), 13);
        assert_eq!(truncate_points(2.0 * THIRD), 13);
        assert_eq!(truncate_points(19.9999999), 19);
    }
}
