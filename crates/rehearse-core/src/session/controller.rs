//! Session controller: drives turns and the "End & Score" action.

use super::conversation::ConversationModel;
use super::message::MessageRole;
use super::model::Session;
use crate::error::{RehearseError, Result};
use crate::leaderboard::Leaderboard;
use crate::narrative::{Outcome, OutcomeNarrator};
use crate::scoring::{ScoreBoard, TranscriptScorer};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// What happened after the rep sent a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The prospect answered.
    Replied(String),
    /// The call window ran out; the prospect left and the session closed.
    TimeExpired(String),
}

/// Everything shown to the rep once the call is scored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Debrief {
    pub score_board: ScoreBoard,
    pub outcome: Outcome,
    pub narrative: String,
}

/// Owns one [`Session`] and the collaborators that act on it.
pub struct SessionController {
    session: Session,
    model: Arc<dyn ConversationModel>,
    scorer: Arc<TranscriptScorer>,
    narrator: Arc<OutcomeNarrator>,
}

impl SessionController {
    pub fn new(
        session: Session,
        model: Arc<dyn ConversationModel>,
        scorer: Arc<TranscriptScorer>,
        narrator: Arc<OutcomeNarrator>,
    ) -> Self {
        info!(
            session_id = %session.id(),
            persona = %session.persona().name,
            started_at = %session.started_at(),
            "Session started"
        );
        Self {
            session,
            model,
            scorer,
            narrator,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sends a message from the rep using the current time.
    pub async fn send(&mut self, text: &str) -> Result<TurnOutcome> {
        self.send_at(text, Utc::now()).await
    }

    /// Sends a message from the rep as of `now`.
    ///
    /// The rep's message is always recorded. If the call window has elapsed the
    /// prospect hangs up instead of replying.
    pub async fn send_at(&mut self, text: &str, now: DateTime<Utc>) -> Result<TurnOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RehearseError::invalid_input("message is empty"));
        }

        self.session.push(MessageRole::User, text, now)?;

        if self.session.time_expired(now) {
            let line = self.session.persona().hang_up_line();
            self.session.push(MessageRole::Assistant, line.clone(), now)?;
            self.session.close();
            info!(session_id = %self.session.id(), "Call window elapsed; prospect left");
            return Ok(TurnOutcome::TimeExpired(line));
        }

        let reply = self.model.reply(self.session.transcript()).await?;
        let reply = reply.trim().to_string();
        self.session
            .push(MessageRole::Assistant, reply.clone(), now)?;
        Ok(TurnOutcome::Replied(reply))
    }

    /// Scores the transcript, closes the session and narrates the outcome.
    ///
    /// Works on a session that already closed because time ran out, but only
    /// once per session.
    pub fn end_and_score(&mut self) -> Result<Debrief> {
        if self.session.score_board().is_some() {
            return Err(RehearseError::AlreadyScored {
                session_id: self.session.id().to_string(),
            });
        }

        let board = self.scorer.score(self.session.transcript());
        self.session.close();
        let board = self.session.record_score(board)?.clone();

        let persona = self.session.persona();
        let narrative = self
            .narrator
            .narrate(board.sub_scores(), &persona.name, &persona.company);
        let outcome = Outcome::select(board.sub_scores());
        info!(session_id = %self.session.id(), total = board.total(), %outcome, "Session scored");

        Ok(Debrief {
            score_board: board,
            outcome,
            narrative,
        })
    }

    /// Records the session's score under `name`.
    pub fn save_to_leaderboard(
        &self,
        leaderboard: &dyn Leaderboard,
        name: &str,
        at: DateTime<Utc>,
    ) -> Result<()> {
        let board = self
            .session
            .score_board()
            .ok_or_else(|| RehearseError::invalid_input("session has not been scored yet"))?;
        leaderboard.insert(name, board.total(), at)
    }
}
