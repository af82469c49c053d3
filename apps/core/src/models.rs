use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::brain::{Intent, Urgency};
use crate::error::AppError;

/// Who produced a turn in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The customer writing to the desk.
    User,
    /// The responder answering them.
    Agent,
}

impl Role {
    /// Returns the label used in transcripts and JSON.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Agent => "agent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "agent" => Ok(Role::Agent),
            other => Err(AppError::InvalidInput(format!("unknown role '{}'", other))),
        }
    }
}

/// A single recorded message in the conversation log.
///
/// Fields are private so a turn cannot be altered once the memory has stored it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: String,
    /// Moment the turn was recorded.
    time: DateTime<Utc>,
}

impl Turn {
    pub(crate) fn new(role: Role, content: String) -> Self {
        Self {
            role,
            content,
            time: Utc::now(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Public output of one `Coordinator::ask` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionResult {
    /// Detected intent.
    pub intent: Intent,
    /// Urgency attached to the intent.
    pub urgency: Urgency,
    /// Canned reply sent back to the user.
    pub reply: String,
}
