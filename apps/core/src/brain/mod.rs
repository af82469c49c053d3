//! # Brain Module
//!
//! Fast, rule-based analysis for the support desk.
//! Decides what the customer wants and which canned answer fits.
//!
//! ## Components
//! - `intent`: Intent/urgency classification from an ordered keyword table
//! - `reply`: Canned reply lookup keyed by intent

pub mod intent;
pub mod reply;

pub use intent::{ClassificationResult, Intent, IntentClassifier, IntentRule, Urgency, DEFAULT_RULES};
pub use reply::{ReplySelector, FALLBACK_REPLY};
