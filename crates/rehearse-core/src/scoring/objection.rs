//! Objection coverage: which known buyer concerns came up during the call.

use serde::{Deserialize, Serialize};

/// Partition of the configured objection topics.
///
/// Both lists keep the configured topic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectionCoverage {
    /// Topics the rep brought to the surface.
    pub uncovered: Vec<String>,
    /// Topics that never came up.
    pub missed: Vec<String>,
}

impl ObjectionCoverage {
    /// Partitions `topics` by substring presence in `search_text`.
    ///
    /// `search_text` must already be lower-cased.
    pub fn detect<S: AsRef<str>>(topics: &[S], search_text: &str) -> Self {
        let (uncovered, missed): (Vec<String>, Vec<String>) = topics
            .iter()
            .map(|t| t.as_ref().to_string())
            .partition(|topic| search_text.contains(&topic.to_lowercase()));

        Self { uncovered, missed }
    }

    /// Renders the two report lines.
    pub fn render(&self) -> String {
        format!(
            "Objections uncovered: {}\nObjections missed: {}",
            join_or_none(&self.uncovered),
            join_or_none(&self.missed)
        )
    }
}

fn join_or_none(topics: &[String]) -> String {
    if topics.is_empty() {
        "None".to_string()
    } else {
        topics.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::config::default_objection_topics;

    #[test]
    fn test_budget_and_timing_uncovered() {
        let coverage = ObjectionCoverage::detect(
            &default_objection_topics(),
            "we're worried about budget and timing",
        );

        assert_eq!(coverage.uncovered, vec!["budget", "timing"]);
        assert_eq!(
            coverage.missed,
            vec!["vendor switching", "implementation", "support", "internal approval"]
        );
    }

    #[test]
    fn test_order_follows_topic_list_not_text() {
        let coverage = ObjectionCoverage::detect(
            &default_objection_topics(),
            "support matters, and so does the budget",
        );
        assert_eq!(coverage.uncovered, vec!["budget", "support"]);
    }

    #[test]
    fn test_render_uses_none_for_empty_side() {
        let coverage = ObjectionCoverage::detect(&default_objection_topics(), "");
        assert_eq!(
            coverage.render(),
            "Objections uncovered: None\nObjections missed: budget, timing, vendor switching, implementation, support, internal approval"
        );

        let all = ObjectionCoverage::detect(
            &default_objection_topics(),
            "budget timing vendor switching implementation support internal approval",
        );
        assert!(all.render().ends_with("Objections missed: None"));
    }
}
