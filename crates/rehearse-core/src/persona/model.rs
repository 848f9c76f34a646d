//! Prospect persona domain model.
//!
//! A persona is the buyer the rep practises against. The conversation model
//! receives its briefing as the first (system) message of the transcript.

use crate::session::TimeWindow;
use serde::{Deserialize, Serialize};

/// A simulated prospect.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Display name of the prospect
    pub name: String,
    /// Job title, e.g. "Office Manager"
    pub role: String,
    /// Short backstory used to stay in character
    pub background: String,
    /// Company the prospect works for
    pub company: String,
    /// Difficulty label shown to the rep
    #[serde(default)]
    pub difficulty: String,
    /// How long the prospect will stay on the call
    #[serde(default)]
    pub time_window: TimeWindow,
}

impl Persona {
    /// Renders the in-character briefing for the conversation model.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are **{name}**, **{role}** at **{company}**.\n\
             {background}\n\
             \n\
             Stay strictly in character using realistic objections & tone.\n\
             \n\
             Green Payroll facts you know (share only when relevant):\n\
             - All-in-One Workforce Platform (payroll, benefits, time, onboarding)\n\
             - Dedicated Service Team (named account manager)\n\
             - Compliance Peace-of-Mind (proactive alerts)\n\
             - Seamless Integrations (QuickBooks, etc.)\n\
             - Typical client gains: save 4-6 h/wk, lower errors, scale without extra HR staff\n\
             \n\
             Common discovery questions you expect to hear:\n\
             \"What system are you using now?\" - \"What challenges do you face?\" - \
             \"How much time is payroll taking?\" - \"Are you confident in compliance?\" - \
             \"What does success look like?\"\n\
             \n\
             Preferred closing approaches:\n\
             - Offer demo - Offer free trial - \"Does this sound like a fit?\" - Next-step scheduling.\n\
             \n\
             You have {window} min for this call. End it if the rep wastes time.",
            name = self.name,
            role = self.role,
            company = self.company,
            background = self.background,
            window = self.time_window.label(),
        )
    }

    /// The line the prospect uses to leave when time runs out.
    pub fn hang_up_line(&self) -> String {
        format!("**{}**: Sorry, I need to hop to another meeting.", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dana() -> Persona {
        Persona {
            name: "Dana Ortiz".to_string(),
            role: "Office Manager".to_string(),
            background: "Runs payroll by hand for 40 staff.".to_string(),
            company: "Acme Dental".to_string(),
            difficulty: "Medium".to_string(),
            time_window: TimeWindow::UnderFive,
        }
    }

    #[test]
    fn test_system_prompt_embeds_persona() {
        let prompt = dana().system_prompt();
        assert!(prompt.starts_with("You are **Dana Ortiz**, **Office Manager** at **Acme Dental**."));
        assert!(prompt.contains("Runs payroll by hand"));
        assert!(prompt.contains("You have <5 min for this call."));
    }

    #[test]
    fn test_hang_up_line() {
        assert_eq!(
            dana().hang_up_line(),
            "**Dana Ortiz**: Sorry, I need to hop to another meeting."
        );
    }

    #[test]
    fn test_optional_fields_default() {
        let persona: Persona = serde_json::from_str(
            r#"{"name":"Lee","role":"CFO","background":"","company":"Beta"}"#,
        )
        .unwrap();
        assert_eq!(persona.time_window, TimeWindow::FiveToTen);
        assert!(persona.difficulty.is_empty());
    }
}
