//! Session domain module.
//!
//! # Module Structure
//!
//! - `message`: Transcript message types (`MessageRole`, `Message`)
//! - `model`: A single practice call (`Session`)
//! - `timer`: Call-length windows (`TimeWindow`)
//! - `conversation`: The external language model seam (`ConversationModel`)
//! - `controller`: Turn handling and "End & Score" (`SessionController`)

mod controller;
mod conversation;
mod message;
mod model;
mod timer;

// Re-export public API
pub use controller::{Debrief, SessionController, TurnOutcome};
pub use conversation::ConversationModel;
pub use message::{Message, MessageRole};
pub use model::Session;
pub use timer::TimeWindow;
