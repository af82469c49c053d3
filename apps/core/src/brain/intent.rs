//! Intent Classification using keyword rules.
//!
//! Maps a customer message to a coarse intent and urgency.
//! No ML model required - ordered substring matching on the lower-cased text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::AppError;

/// Detected intent type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Wants money returned (refund, money back)
    Refund,
    /// Wants to end a subscription (cancel, subscription)
    Cancellation,
    /// Question about a charge (invoice, bill, charged)
    Billing,
    /// Explicitly asks for assistance (help, support, issue)
    GeneralHelp,
    /// Nothing recognised
    General,
}

impl Intent {
    /// Returns the label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Refund => "refund",
            Intent::Cancellation => "cancellation",
            Intent::Billing => "billing",
            Intent::GeneralHelp => "general_help",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Intent {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "refund" => Ok(Intent::Refund),
            "cancellation" => Ok(Intent::Cancellation),
            "billing" => Ok(Intent::Billing),
            "general_help" => Ok(Intent::GeneralHelp),
            "general" => Ok(Intent::General),
            other => Err(AppError::InvalidInput(format!("unknown intent '{}'", other))),
        }
    }
}

/// Priority attached to an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Urgency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Urgency::High),
            "medium" => Ok(Urgency::Medium),
            "low" => Ok(Urgency::Low),
            other => Err(AppError::InvalidInput(format!("unknown urgency '{}'", other))),
        }
    }
}

/// Result of intent classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub intent: Intent,
    pub urgency: Urgency,
}

impl ClassificationResult {
    /// Result used when no rule matches
    pub const FALLBACK: ClassificationResult = ClassificationResult {
        intent: Intent::General,
        urgency: Urgency::Low,
    };
}

/// One entry of the ordered rule table.
///
/// Keywords are matched case-insensitively as plain substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRule {
    pub intent: Intent,
    pub urgency: Urgency,
    pub keywords: &'static [&'static str],
}

impl IntentRule {
    /// First keyword contained in the lower-cased `text`, if any.
    fn matched_keyword(&self, text: &str) -> Option<&'static str> {
        self.keywords
            .iter()
            .copied()
            .find(|kw| text.contains(kw.to_lowercase().as_str()))
    }
}

/// Rules in evaluation order. Earlier rules win, so a message mentioning both
/// a refund and a cancellation is a refund.
pub const DEFAULT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Refund,
        urgency: Urgency::High,
        keywords: &["refund", "money back"],
    },
    IntentRule {
        intent: Intent::Cancellation,
        urgency: Urgency::High,
        keywords: &["cancel", "subscription"],
    },
    IntentRule {
        intent: Intent::Billing,
        urgency: Urgency::Medium,
        keywords: &["invoice", "bill", "charged"],
    },
    IntentRule {
        intent: Intent::GeneralHelp,
        urgency: Urgency::Low,
        keywords: &["help", "support", "issue"],
    },
];

/// Intent classifier using an ordered keyword rule list
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Create a classifier with the default support-desk rules
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec())
    }

    /// Create a classifier from a custom ordered rule list.
    pub fn with_rules(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// Rules in the order they are evaluated
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Classify a message. Always returns a result; unmatched input
    /// (including the empty string) falls back to `general`/`low`.
    pub fn classify(&self, message: &str) -> ClassificationResult {
        let text = message.to_lowercase();

        for rule in &self.rules {
            if let Some(keyword) = rule.matched_keyword(&text) {
                debug!(intent = %rule.intent, urgency = %rule.urgency, keyword, "Intent rule matched");
                return ClassificationResult {
                    intent: rule.intent,
                    urgency: rule.urgency,
                };
            }
        }

        debug!("No intent rule matched, using fallback");
        ClassificationResult::FALLBACK
    }
}
