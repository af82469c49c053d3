//! Conversation Memory
//!
//! Append-only transcript of a support conversation. Turns are kept in the
//! order they were added and are never edited or evicted.

use crate::models::{Role, Turn};

/// Ordered log of every turn exchanged in one conversation.
#[derive(Debug, Clone, Default)]
pub struct ConversationMemory {
    turns: Vec<Turn>,
}

impl ConversationMemory {
    /// Create an empty memory
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn stamped with the current time.
    pub fn add(&mut self, role: Role, content: impl Into<String>) {
        self.turns.push(Turn::new(role, content.into()));
    }

    /// Render the transcript as `"<role>: <content>\n"` lines in insertion order.
    ///
    /// Returns an empty string when nothing has been recorded.
    pub fn context(&self) -> String {
        self.turns.iter().fold(String::new(), |mut out, turn| {
            out.push_str(turn.role().label());
            out.push_str(": ");
            out.push_str(turn.content());
            out.push('\n');
            out
        })
    }

    /// Every recorded turn, oldest first.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    /// Most recent turn, if any
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Number of recorded turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
