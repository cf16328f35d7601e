//! Intent classification over an ordered keyword-rule table.
//!
//! Pure substring matching against the lower-cased input; the first rule
//! with a contained keyword wins. Total over all string inputs: anything
//! that matches no rule yields the fallback reply.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::responses::{FALLBACK_RESPONSE, RULES};

/// Detected intent type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Recent WhatsApp activity ("whatsapp", "messages").
    WhatsappSummary,
    /// Meeting/calendar scheduling ("schedule", "meeting", "calendar").
    Scheduling,
    /// Inbox overview ("email").
    EmailSummary,
    /// LinkedIn onboarding prompt ("linkedin").
    LinkedinSetup,
    /// Command listing ("help", "commands").
    Help,
    /// No rule matched.
    Fallback,
}

impl Intent {
    /// Returns a human-readable label for the intent.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::WhatsappSummary => "whatsapp_summary",
            Intent::Scheduling => "scheduling",
            Intent::EmailSummary => "email_summary",
            Intent::LinkedinSetup => "linkedin_setup",
            Intent::Help => "help",
            Intent::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result of a classification, including which keyword fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Detected intent.
    pub intent: Intent,
    /// The keyword that matched, absent for the fallback.
    pub matched_keyword: Option<&'static str>,
    /// The canned reply bound to the intent.
    pub response: &'static str,
}

/// Ordered first-match-wins intent matcher over the static rule table.
#[derive(Debug, Default)]
pub struct IntentMatcher;

impl IntentMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Classify an input and return the full match details.
    ///
    /// Deterministic and side-effect free. Empty and whitespace-only input
    /// fall through to the fallback like any other unmatched text.
    pub fn classify_detailed(&self, input: &str) -> MatchResult {
        let lowered = input.to_lowercase();

        for rule in RULES {
            if let Some(keyword) = rule
                .keywords
                .iter()
                .find(|keyword| lowered.contains(*keyword))
            {
                return MatchResult {
                    intent: rule.intent,
                    matched_keyword: Some(keyword),
                    response: rule.response,
                };
            }
        }

        MatchResult {
            intent: Intent::Fallback,
            matched_keyword: None,
            response: FALLBACK_RESPONSE,
        }
    }

    /// Classify an input and return the canned reply verbatim.
    pub fn classify(&self, input: &str) -> &'static str {
        self.classify_detailed(input).response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::responses::{
        EMAIL_RESPONSE, HELP_RESPONSE, LINKEDIN_RESPONSE, SCHEDULING_RESPONSE, WHATSAPP_RESPONSE,
    };

    #[test]
    fn test_whatsapp_detection() {
        let matcher = IntentMatcher::new();

        assert_eq!(matcher.classify("show whatsapp messages"), WHATSAPP_RESPONSE);
        assert_eq!(matcher.classify("any new messages?"), WHATSAPP_RESPONSE);
        assert_eq!(
            matcher.classify_detailed("open WhatsApp").intent,
            Intent::WhatsappSummary
        );
    }

    #[test]
    fn test_scheduling_detection() {
        let matcher = IntentMatcher::new();

        assert_eq!(matcher.classify("schedule a call"), SCHEDULING_RESPONSE);
        assert_eq!(matcher.classify("set up a meeting"), SCHEDULING_RESPONSE);
        assert_eq!(matcher.classify("check my calendar"), SCHEDULING_RESPONSE);
    }

    #[test]
    fn test_email_and_linkedin_detection() {
        let matcher = IntentMatcher::new();

        assert_eq!(matcher.classify("check my email"), EMAIL_RESPONSE);
        assert_eq!(matcher.classify("connect linkedin"), LINKEDIN_RESPONSE);
    }

    #[test]
    fn test_help_detection_is_case_insensitive() {
        let matcher = IntentMatcher::new();

        assert_eq!(matcher.classify("HELP"), matcher.classify("help"));
        assert_eq!(matcher.classify("HELP"), HELP_RESPONSE);
        assert_eq!(matcher.classify("list commands"), HELP_RESPONSE);
    }

    #[test]
    fn test_empty_input_yields_fallback() {
        let matcher = IntentMatcher::new();

        let result = matcher.classify_detailed("");
        assert_eq!(result.intent, Intent::Fallback);
        assert!(result.matched_keyword.is_none());

        assert_eq!(matcher.classify(""), matcher.classify("   "));
    }

    #[test]
    fn test_overlapping_keywords_resolve_by_rule_order() {
        let matcher = IntentMatcher::new();

        // "whatsapp" is in the first rule group, "schedule"/"meeting" in the
        // second: the first listed rule wins regardless of word position.
        let result = matcher.classify_detailed("schedule a whatsapp meeting");
        assert_eq!(result.intent, Intent::WhatsappSummary);
        assert_eq!(result.response, WHATSAPP_RESPONSE);
    }

    #[test]
    fn test_matched_keyword_is_reported() {
        let matcher = IntentMatcher::new();

        let result = matcher.classify_detailed("please schedule something");
        assert_eq!(result.matched_keyword, Some("schedule"));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let matcher = IntentMatcher::new();

        let input = "could you schedule a whatsapp call about email?";
        let first = matcher.classify(input);
        for _ in 0..10 {
            assert_eq!(matcher.classify(input), first);
        }
    }
}
