//! Static rule table and canned reply strings.
//!
//! One rule per assistant capability, each bound to the keyword group that
//! triggers it. Replies are returned verbatim; nothing here is computed.

use super::intent::Intent;

/// A keyword-containment rule mapped to one canned response.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    /// The intent this rule detects.
    pub intent: Intent,
    /// Keywords tested with substring containment against the lower-cased input.
    pub keywords: &'static [&'static str],
    /// The reply returned verbatim when any keyword matches.
    pub response: &'static str,
}

pub const WHATSAPP_RESPONSE: &str = "Here are your recent WhatsApp messages:\n\n\
1. Sarah Johnson: \"Hi! Just wanted to follow up...\"\n\
2. Mike Chen: \"Thanks for the documents\"\n\
3. Team Chat: \"Meeting moved to 4 PM\"\n\n\
Would you like me to show more details or help you reply to any of these?";

pub const SCHEDULING_RESPONSE: &str = "I can help you schedule a meeting! Please provide:\n\n\
\u{2022} Meeting title\n\
\u{2022} Date and time\n\
\u{2022} Attendees\n\
\u{2022} Duration\n\n\
For example: \"Schedule team sync for tomorrow 2 PM with John and Sarah for 1 hour\"";

pub const EMAIL_RESPONSE: &str = "Here are your recent emails:\n\n\
\u{1F4E7} New proposal from client (2 hours ago)\n\
\u{1F4E7} Weekly newsletter (4 hours ago)\n\
\u{1F4E7} Meeting confirmation (1 day ago)\n\n\
Would you like me to open any of these or help you compose a new email?";

pub const LINKEDIN_RESPONSE: &str = "Your LinkedIn integration is not yet connected. \
Would you like me to help you set it up? You can:\n\n\
\u{2022} Connect your LinkedIn account\n\
\u{2022} Sync your professional messages\n\
\u{2022} Manage connection requests\n\n\
Go to Integrations to get started!";

pub const HELP_RESPONSE: &str = "Here are some things I can help you with:\n\n\
\u{1F539} \"show whatsapp messages\" - View recent WhatsApp chats\n\
\u{1F539} \"schedule meeting\" - Create calendar events\n\
\u{1F539} \"check email\" - Review your inbox\n\
\u{1F539} \"connect linkedin\" - Set up LinkedIn integration\n\
\u{1F539} \"create note\" - Add to Google Keep\n\
\u{1F539} \"set reminder\" - Schedule notifications\n\n\
What would you like to do?";

pub const FALLBACK_RESPONSE: &str = "I understand you're looking for help with your \
communications. I can assist with WhatsApp messages, scheduling meetings, checking \
emails, and more. Try saying \"help\" to see all available commands, or be more \
specific about what you'd like to do!";

/// The ordered rule table. Order is load-bearing: for inputs containing
/// keywords from several groups ("schedule a whatsapp meeting"), the first
/// listed rule wins. This ordering is inherited behavior, not a ranking of
/// importance; tests pin it explicitly.
pub const RULES: &[ResponseRule] = &[
    ResponseRule {
        intent: Intent::WhatsappSummary,
        keywords: &["whatsapp", "messages"],
        response: WHATSAPP_RESPONSE,
    },
    ResponseRule {
        intent: Intent::Scheduling,
        keywords: &["schedule", "meeting", "calendar"],
        response: SCHEDULING_RESPONSE,
    },
    ResponseRule {
        intent: Intent::EmailSummary,
        keywords: &["email"],
        response: EMAIL_RESPONSE,
    },
    ResponseRule {
        intent: Intent::LinkedinSetup,
        keywords: &["linkedin"],
        response: LINKEDIN_RESPONSE,
    },
    ResponseRule {
        intent: Intent::Help,
        keywords: &["help", "commands"],
        response: HELP_RESPONSE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_is_nonempty_and_keyworded() {
        assert!(!RULES.is_empty());
        for rule in RULES {
            assert!(!rule.keywords.is_empty());
            assert!(!rule.response.is_empty());
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        // Matching lower-cases the input only, so the table must already be
        // lower-case or a rule could never fire.
        for rule in RULES {
            for keyword in rule.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_intents_are_unique() {
        for (i, a) in RULES.iter().enumerate() {
            for b in &RULES[i + 1..] {
                assert_ne!(a.intent, b.intent);
            }
        }
    }
}
