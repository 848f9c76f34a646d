use anyhow::{Context, Result};
use colored::Colorize;
use rehearse_core::config::ConfigRepository;
use rehearse_core::narrative::Outcome;
use rehearse_core::persona::{Persona, get_default_presets};
use rehearse_core::session::{Debrief, Message};
use rehearse_infrastructure::TomlConfigRepository;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Accepted transcript layouts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TranscriptFile {
    Session {
        #[serde(default)]
        persona: Option<Persona>,
        messages: Vec<Message>,
    },
    Bare(Vec<Message>),
}

impl TranscriptFile {
    fn into_parts(self) -> (Option<Persona>, Vec<Message>) {
        match self {
            TranscriptFile::Session { persona, messages } => (persona, messages),
            TranscriptFile::Bare(messages) => (None, messages),
        }
    }
}

/// Display names for the narrative: flags win, then the file, then the first preset.
fn display_names(
    file_persona: Option<&Persona>,
    persona: Option<String>,
    company: Option<String>,
) -> (String, String) {
    let fallback = file_persona
        .cloned()
        .or_else(|| get_default_presets().into_iter().next());

    let persona_name = persona
        .or_else(|| fallback.as_ref().map(|p| p.name.clone()))
        .unwrap_or_default();
    let company_name = company
        .or_else(|| fallback.as_ref().map(|p| p.company.clone()))
        .unwrap_or_default();
    (persona_name, company_name)
}

fn parse_transcript(text: &str) -> Result<(Option<Persona>, Vec<Message>)> {
    let file: TranscriptFile =
        serde_json::from_str(text).context("Transcript is not a message array or session object")?;
    Ok(file.into_parts())
}

pub fn run(
    repo: &TomlConfigRepository,
    transcript_path: &Path,
    persona: Option<String>,
    company: Option<String>,
    json: bool,
) -> Result<()> {
    let config = repo
        .load()
        .with_context(|| format!("Failed to load config from {}", repo.path().display()))?;
    let scorer = config.build_scorer()?;
    let narrator = config.build_narrator()?;

    let text = fs::read_to_string(transcript_path)
        .with_context(|| format!("Failed to read {}", transcript_path.display()))?;
    let (file_persona, messages) = parse_transcript(&text)?;
    tracing::debug!(messages = messages.len(), "Loaded transcript");

    let (persona_name, company_name) = display_names(file_persona.as_ref(), persona, company);

    let score_board = scorer.score(&messages);
    let narrative = narrator.narrate(score_board.sub_scores(), &persona_name, &company_name);
    let debrief = Debrief {
        outcome: Outcome::select(score_board.sub_scores()),
        score_board,
        narrative,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&debrief)?);
    } else {
        print_report(&debrief);
    }
    Ok(())
}

fn print_report(debrief: &Debrief) {
    println!("{}", debrief.score_board.summary());
    println!();
    println!("{}", "Coaching".bold());
    println!("{}", debrief.score_board.narrative_detail());
    println!();
    println!("{} {}", "Outcome:".bold(), debrief.outcome.as_ref().cyan());
    println!("{}", debrief.narrative);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rehearse_core::session::MessageRole;

    #[test]
    fn test_parse_bare_array() {
        let (persona, messages) = parse_transcript(
            r#"[{"role":"system","content":"prompt"},{"role":"user","content":"Hi"}]"#,
        )
        .unwrap();
        assert!(persona.is_none());
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, MessageRole::User);
    }

    #[test]
    fn test_parse_session_object_with_persona() {
        let (persona, messages) = parse_transcript(
            r#"{
                "persona": {"name":"Lee","role":"CFO","background":"","company":"Beta","time_window":"<5"},
                "messages": [{"role":"user","content":"Any concern?"}]
            }"#,
        )
        .unwrap();
        assert_eq!(persona.unwrap().company, "Beta");
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_flags_override_file_persona() {
        let file_persona = get_default_presets().remove(1);
        let (name, company) =
            display_names(Some(&file_persona), Some("Sam".to_string()), None);
        assert_eq!(name, "Sam");
        assert_eq!(company, file_persona.company);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_transcript(r#"{"nope": true}"#).is_err());
    }
}
