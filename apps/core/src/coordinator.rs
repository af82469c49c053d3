//! Coordinator - orchestrates one support interaction.
//!
//! Records the customer message, classifies it, picks a reply and records
//! that reply. One coordinator serves one conversation.

use tracing::info;
use uuid::Uuid;

use crate::brain::{IntentClassifier, ReplySelector};
use crate::memory::ConversationMemory;
use crate::models::{InteractionResult, Role};

/// Owns the memory, classifier and selector of a single conversation
#[derive(Debug)]
pub struct Coordinator {
    session_id: Uuid,
    classifier: IntentClassifier,
    selector: ReplySelector,
    memory: ConversationMemory,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    /// Create a coordinator with the default rules and an empty transcript
    pub fn new() -> Self {
        Self::with_classifier(IntentClassifier::new())
    }

    /// Create a coordinator around a custom classifier
    pub fn with_classifier(classifier: IntentClassifier) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            classifier,
            selector: ReplySelector::new(),
            memory: ConversationMemory::new(),
        }
    }

    /// Handle one customer message.
    ///
    /// Appends exactly two turns to the memory: the user message, then the
    /// agent reply. The transcript does not influence classification.
    pub fn ask(&mut self, message: &str) -> InteractionResult {
        self.memory.add(Role::User, message);

        let classification = self.classifier.classify(message);
        let reply = self
            .selector
            .create_reply(message, classification.intent, classification.urgency);

        self.memory.add(Role::Agent, reply);

        info!(
            session_id = %self.session_id,
            intent = %classification.intent,
            urgency = %classification.urgency,
            turns = self.memory.len(),
            "Interaction handled"
        );

        InteractionResult {
            intent: classification.intent,
            urgency: classification.urgency,
            reply: reply.to_string(),
        }
    }

    /// Read-only view of the conversation transcript
    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    /// Identifier attached to this conversation's log events
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::{Intent, Urgency};

    #[test]
    fn test_ask_records_both_turns() {
        let mut coordinator = Coordinator::new();
        let result = coordinator.ask("I need a refund please.");

        assert_eq!(result.intent, Intent::Refund);
        assert_eq!(result.urgency, Urgency::High);

        let turns = coordinator.memory().all();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role(), Role::User);
        assert_eq!(turns[0].content(), "I need a refund please.");
        assert_eq!(turns[1].role(), Role::Agent);
        assert_eq!(turns[1].content(), result.reply);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = Coordinator::new();
        let second = Coordinator::new();

        first.ask("hello");

        assert_ne!(first.session_id(), second.session_id());
        assert!(second.memory().is_empty());
    }
}
