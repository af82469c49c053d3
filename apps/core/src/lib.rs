//! Support desk responder.
//!
//! Classifies a customer message into an intent/urgency pair with ordered
//! keyword rules, answers with a canned reply and keeps a flat transcript of
//! the conversation.

pub mod brain;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod memory;
pub mod models;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use brain::{ClassificationResult, Intent, IntentClassifier, ReplySelector, Urgency};
pub use coordinator::Coordinator;
pub use error::AppError;
pub use memory::ConversationMemory;
pub use models::{InteractionResult, Role, Turn};
