//! Conversation model trait.
//!
//! The language model that plays the prospect lives outside this crate.
//! Implementations wrap whatever chat-completion client the application uses.

use super::message::Message;
use crate::error::Result;
use async_trait::async_trait;

/// Produces the prospect's next utterance.
#[async_trait]
pub trait ConversationModel: Send + Sync {
    /// Returns the next assistant message for `transcript`.
    ///
    /// The transcript always starts with the persona's system prompt and
    /// ends with the rep's latest message.
    async fn reply(&self, transcript: &[Message]) -> Result<String>;
}
