//! Outcome narrative templates.

use super::narrator::Outcome;
use crate::error::{RehearseError, Result};
use serde::{Deserialize, Serialize};

pub const PERSONA_PLACEHOLDER: &str = "{persona}";
pub const COMPANY_PLACEHOLDER: &str = "{company}";

/// Prose for each outcome.
///
/// `{persona}` and `{company}` are replaced verbatim with the display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeTemplates {
    pub strong_win: String,
    pub warm_follow_up: String,
    pub lukewarm_pending: String,
    pub lost_opportunity: String,
}

impl Default for NarrativeTemplates {
    fn default() -> Self {
        Self {
            strong_win: "Two weeks after your call, {persona} signed the proposal. {company} rolled out payroll, benefits and onboarding on the platform, hit every milestone, and has since become a long-term client who refers peers your way.".to_string(),
            warm_follow_up: "{persona} emailed the next morning asking for a second call. A follow-up with the wider {company} team is on the calendar to walk through pricing and a live demo.".to_string(),
            lukewarm_pending: "{persona} thanked you for your time and said {company} is reviewing options internally. There is no decision yet; the deal sits in your pipeline pending their review.".to_string(),
            lost_opportunity: "Your follow-up emails to {persona} went unanswered. A month later you learned {company} had moved forward with a competitor.".to_string(),
        }
    }
}

impl NarrativeTemplates {
    pub fn template(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::StrongWin => &self.strong_win,
            Outcome::WarmFollowUp => &self.warm_follow_up,
            Outcome::LukewarmPending => &self.lukewarm_pending,
            Outcome::LostOpportunity => &self.lost_opportunity,
        }
    }

    /// Rejects blank templates.
    pub fn validate(&self) -> Result<()> {
        for outcome in Outcome::ALL {
            if self.template(outcome).trim().is_empty() {
                return Err(RehearseError::config(format!(
                    "narrative template for '{}' is empty",
                    outcome
                )));
            }
        }
        Ok(())
    }
}

/// Substitutes both placeholders in a single left-to-right pass.
///
/// Names are inserted verbatim; placeholder text inside a name is not expanded again.
pub fn render(template: &str, persona: &str, company: &str) -> String {
    let mut out = String::with_capacity(template.len() + persona.len() + company.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix(PERSONA_PLACEHOLDER) {
            out.push_str(persona);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(COMPANY_PLACEHOLDER) {
            out.push_str(company);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_every_placeholder() {
        assert_eq!(
            render("{persona} of {company}; ask {persona}", "Dana", "Acme"),
            "Dana of Acme; ask Dana"
        );
    }

    #[test]
    fn test_render_does_not_expand_names() {
        assert_eq!(render("{persona} @ {company}", "{company}", "Acme"), "{company} @ Acme");
    }

    #[test]
    fn test_render_keeps_other_braces() {
        assert_eq!(render("{x} {persona}{", "Dana", "Acme"), "{x} Dana{");
    }

    #[test]
    fn test_default_templates_mention_both_names() {
        let templates = NarrativeTemplates::default();
        assert!(templates.validate().is_ok());
        for outcome in Outcome::ALL {
            let text = templates.template(outcome);
            assert!(text.contains(PERSONA_PLACEHOLDER), "{outcome}");
            assert!(text.contains(COMPANY_PLACEHOLDER), "{outcome}");
        }
    }

    #[test]
    fn test_blank_template_rejected() {
        let templates = NarrativeTemplates {
            warm_follow_up: " ".to_string(),
            ..Default::default()
        };
        assert!(templates.validate().unwrap_err().is_config());
    }
}
