//! Reply selection.
//!
//! Canned answers keyed by intent.

use super::intent::{Intent, Urgency};

pub const REFUND_REPLY: &str =
    "I understand you want a refund. Please share your order ID so I can assist you further.";
pub const CANCELLATION_REPLY: &str =
    "I can help you cancel your subscription. Kindly provide your registered email.";
pub const BILLING_REPLY: &str =
    "It seems you have a billing concern. Please send your invoice number for verification.";
pub const GENERAL_REPLY: &str = "Thank you for your message. How can I assist you today?";

/// Reply for an intent label the selector does not know.
pub const FALLBACK_REPLY: &str = "Sorry, I could not understand. Please provide more details.";

/// Picks the canned reply for a classified message
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplySelector;

impl ReplySelector {
    pub fn new() -> Self {
        Self
    }

    /// Reply for `intent`. `message` and `urgency` are accepted for future
    /// tailoring but do not affect the text.
    pub fn create_reply(&self, _message: &str, intent: Intent, _urgency: Urgency) -> &'static str {
        match intent {
            Intent::Refund => REFUND_REPLY,
            Intent::Cancellation => CANCELLATION_REPLY,
            Intent::Billing => BILLING_REPLY,
            Intent::GeneralHelp | Intent::General => GENERAL_REPLY,
        }
    }

    /// Reply for a free-form intent label. Only the exact snake_case labels
    /// are recognised; anything else (other case, padding) gets
    /// [`FALLBACK_REPLY`].
    pub fn reply_for_label(&self, label: &str) -> &'static str {
        let intent = match label {
            "refund" => Intent::Refund,
            "cancellation" => Intent::Cancellation,
            "billing" => Intent::Billing,
            "general_help" => Intent::GeneralHelp,
            "general" => Intent::General,
            _ => return FALLBACK_REPLY,
        };
        self.create_reply("", intent, Urgency::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replies_per_intent() {
        let selector = ReplySelector::new();

        assert_eq!(selector.create_reply("", Intent::Refund, Urgency::High), REFUND_REPLY);
        assert_eq!(
            selector.create_reply("", Intent::Cancellation, Urgency::High),
            CANCELLATION_REPLY
        );
        assert_eq!(selector.create_reply("", Intent::Billing, Urgency::Medium), BILLING_REPLY);
        assert_eq!(selector.create_reply("", Intent::GeneralHelp, Urgency::Low), GENERAL_REPLY);
        assert_eq!(selector.create_reply("", Intent::General, Urgency::Low), GENERAL_REPLY);
    }

    #[test]
    fn test_unknown_label_falls_back() {
        let selector = ReplySelector::new();

        assert_eq!(selector.reply_for_label("billing"), BILLING_REPLY);
        assert_eq!(selector.reply_for_label("shipping"), FALLBACK_REPLY);
        assert_eq!(selector.reply_for_label(""), FALLBACK_REPLY);
    }

    #[test]
    fn test_label_lookup_is_exact() {
        let selector = ReplySelector::new();

        for label in ["REFUND", " billing ", "General_Help", "Cancellation", "general\n"] {
            assert_eq!(
                selector.reply_for_label(label),
                FALLBACK_REPLY,
                "Expected fallback for '{}'",
                label
            );
        }
    }
}
