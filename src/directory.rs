//! Conversation directory for the sidebar.
//!
//! A caller-owned list of conversations with platform filtering and
//! case-insensitive name search.

use chrono::{Duration, Utc};
use url::Url;

use crate::models::{Conversation, Platform};

/// Caller-owned directory of the user's conversations.
#[derive(Debug)]
pub struct ConversationDirectory {
    conversations: Vec<Conversation>,
}

impl Default for ConversationDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationDirectory {
    /// Creates the directory with the stock conversation list.
    pub fn new() -> Self {
        let now = Utc::now();
        let conversations = vec![
            Conversation {
                id: "1".to_string(),
                name: "Sarah Johnson".to_string(),
                last_message: "Hi! Just wanted to follow up on our conversation yesterday..."
                    .to_string(),
                timestamp: now - Duration::minutes(2),
                unread: 2,
                platform: Platform::Whatsapp,
                avatar: Url::parse("https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop&crop=face").ok(),
                is_online: true,
            },
            Conversation {
                id: "2".to_string(),
                name: "Marketing Team".to_string(),
                last_message: "Meeting scheduled for 3 PM today".to_string(),
                timestamp: now - Duration::minutes(5),
                unread: 0,
                platform: Platform::Calendar,
                avatar: None,
                is_online: false,
            },
            Conversation {
                id: "3".to_string(),
                name: "john.doe@company.com".to_string(),
                last_message: "Please find the attached proposal document...".to_string(),
                timestamp: now - Duration::hours(1),
                unread: 1,
                platform: Platform::Email,
                avatar: Url::parse("https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop&crop=face").ok(),
                is_online: false,
            },
            Conversation {
                id: "4".to_string(),
                name: "Alex Chen".to_string(),
                last_message: "Thanks for connecting! Would love to discuss opportunities..."
                    .to_string(),
                timestamp: now - Duration::hours(2),
                unread: 0,
                platform: Platform::Linkedin,
                avatar: Url::parse("https://images.pexels.com/photos/1043474/pexels-photo-1043474.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop&crop=face").ok(),
                is_online: false,
            },
            Conversation {
                id: "5".to_string(),
                name: "Design Team".to_string(),
                last_message: "New design assets are ready for review".to_string(),
                timestamp: now - Duration::hours(3),
                unread: 3,
                platform: Platform::Whatsapp,
                avatar: None,
                is_online: false,
            },
            Conversation {
                id: "6".to_string(),
                name: "Weekly Newsletter".to_string(),
                last_message: "Your weekly digest is here!".to_string(),
                timestamp: now - Duration::days(1),
                unread: 0,
                platform: Platform::Email,
                avatar: None,
                is_online: false,
            },
        ];

        Self { conversations }
    }

    /// All conversations, most recent first as seeded.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Filters by platform (`None` = all) and a case-insensitive name query
    /// (empty query matches everything).
    pub fn filter(&self, platform: Option<Platform>, query: &str) -> Vec<&Conversation> {
        let query = query.to_lowercase();
        self.conversations
            .iter()
            .filter(|c| platform.map_or(true, |p| c.platform == p))
            .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&query))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    /// Total unread messages across all conversations.
    pub fn unread_total(&self) -> u32 {
        self.conversations.iter().map(|c| c.unread).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_directory() {
        let directory = ConversationDirectory::new();

        assert_eq!(directory.len(), 6);
        assert_eq!(directory.unread_total(), 2 + 1 + 3);
        assert!(directory.conversations()[0].is_online);
    }

    #[test]
    fn test_filter_by_platform() {
        let directory = ConversationDirectory::new();

        let whatsapp = directory.filter(Some(Platform::Whatsapp), "");
        assert_eq!(whatsapp.len(), 2);
        assert!(whatsapp.iter().all(|c| c.platform == Platform::Whatsapp));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let directory = ConversationDirectory::new();

        let hits = directory.filter(None, "SARAH");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Sarah Johnson");
    }

    #[test]
    fn test_filter_combines_platform_and_query() {
        let directory = ConversationDirectory::new();

        let hits = directory.filter(Some(Platform::Email), "newsletter");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "6");

        let misses = directory.filter(Some(Platform::Whatsapp), "newsletter");
        assert!(misses.is_empty());
    }
}
