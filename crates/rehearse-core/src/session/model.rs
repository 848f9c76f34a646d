//! Practice session domain model.

use super::message::{Message, MessageRole};
use crate::error::{RehearseError, Result};
use crate::persona::Persona;
use crate::scoring::ScoreBoard;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One role-play call.
///
/// A session contains:
/// - The persona being played
/// - The transcript, seeded with the persona's system prompt
/// - Whether the call is closed to further messages
/// - At most one score board
///
/// The transcript only grows through [`Session::push`], which refuses once
/// the session is closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: String,
    persona: Persona,
    transcript: Vec<Message>,
    closed: bool,
    started_at: DateTime<Utc>,
    score_board: Option<ScoreBoard>,
}

impl Session {
    pub fn new(persona: Persona, started_at: DateTime<Utc>) -> Self {
        let transcript = vec![
            Message::system(persona.system_prompt()).with_timestamp(started_at.to_rfc3339()),
        ];
        Self {
            id: Uuid::new_v4().to_string(),
            persona,
            transcript,
            closed: false,
            started_at,
            score_board: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Full transcript; element 0 is the system prompt.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Transcript without the leading system prompt, as shown to the rep.
    pub fn visible_messages(&self) -> &[Message] {
        self.transcript.get(1..).unwrap_or_default()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn score_board(&self) -> Option<&ScoreBoard> {
        self.score_board.as_ref()
    }

    /// Whether the persona's call window has elapsed.
    pub fn time_expired(&self, now: DateTime<Utc>) -> bool {
        self.persona.time_window.is_expired(self.started_at, now)
    }

    /// Appends a user or assistant message.
    ///
    /// System messages are rejected: only the opening prompt may carry that role.
    pub fn push(&mut self, role: MessageRole, content: impl Into<String>, at: DateTime<Utc>) -> Result<()> {
        if self.closed {
            return Err(RehearseError::SessionClosed {
                session_id: self.id.clone(),
            });
        }
        if !matches!(role, MessageRole::User | MessageRole::Assistant) {
            return Err(RehearseError::invalid_input(format!(
                "cannot append a {:?} message to a transcript",
                role
            )));
        }

        self.transcript
            .push(Message::new(role, content).with_timestamp(at.to_rfc3339()));
        Ok(())
    }

    pub fn close(&mut self) {
        if !self.closed {
            tracing::info!(session_id = %self.id, "Session closed");
        }
        self.closed = true;
    }

    /// Stores the score board. A session is scored at most once.
    pub fn record_score(&mut self, board: ScoreBoard) -> Result<&ScoreBoard> {
        if self.score_board.is_some() {
            return Err(RehearseError::AlreadyScored {
                session_id: self.id.clone(),
            });
        }
        let stored = self.score_board.insert(board);
        Ok(&*stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::get_default_presets;
    use crate::scoring::score;

    fn session() -> Session {
        Session::new(get_default_presets().remove(0), Utc::now())
    }

    #[test]
    fn test_new_session_seeds_system_prompt() {
        let session = session();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, MessageRole::System);
        assert!(session.visible_messages().is_empty());
        assert!(!session.is_closed());
        assert!(!session.id().is_empty());
    }

    #[test]
    fn test_prompt_is_stamped_with_start_time() {
        let start = Utc::now();
        let session = Session::new(get_default_presets().remove(0), start);
        assert_eq!(session.started_at(), start);
        assert_eq!(
            session.transcript()[0].timestamp.as_deref(),
            Some(start.to_rfc3339().as_str())
        );
    }

    #[test]
    fn test_push_rejected_after_close() {
        let mut session = session();
        session.push(MessageRole::User, "Hi Dana", Utc::now()).unwrap();
        session.close();

        let err = session
            .push(MessageRole::User, "One more thing", Utc::now())
            .unwrap_err();
        assert!(matches!(err, RehearseError::SessionClosed { .. }));
        assert_eq!(session.visible_messages().len(), 1);
    }

    #[test]
    fn test_push_rejects_system_role() {
        let mut session = session();
        let err = session
            .push(MessageRole::System, "new rules", Utc::now())
            .unwrap_err();
        assert!(matches!(err, RehearseError::InvalidInput(_)));
    }

    #[test]
    fn test_record_score_only_once() {
        let mut session = session();
        let board = score(session.transcript());
        session.record_score(board.clone()).unwrap();

        let err = session.record_score(board).unwrap_err();
        assert!(matches!(err, RehearseError::AlreadyScored { .. }));
        assert_eq!(session.score_board().map(|b| b.total()), Some(0));
    }
}
