//! Dashboard statistics.

use serde::Serialize;

use crate::directory::ConversationDirectory;
use crate::integrations::IntegrationRegistry;
use crate::models::Platform;

/// The numbers shown on the dashboard landing view.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Messages in the current session log.
    pub total_messages: usize,
    /// Connected integrations.
    pub connected_apps: usize,
    /// Integrations available in the catalog.
    pub available_integrations: usize,
    /// Conversations in the directory.
    pub active_conversations: usize,
    /// Unread counts per platform, catalog order, connected or not.
    pub unread_by_platform: Vec<(Platform, u32)>,
    /// Unread total across all conversations.
    pub unread_conversations: u32,
}

impl DashboardSummary {
    /// Collects the summary from the current registry, directory and the
    /// session message count.
    pub fn collect(
        registry: &IntegrationRegistry,
        directory: &ConversationDirectory,
        total_messages: usize,
    ) -> Self {
        Self {
            total_messages,
            connected_apps: registry.connected_count(),
            available_integrations: registry.total(),
            active_conversations: directory.len(),
            unread_by_platform: registry
                .integrations()
                .iter()
                .map(|i| (i.platform, i.unread))
                .collect(),
            unread_conversations: directory.unread_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_summary_over_stock_state() {
        let registry = IntegrationRegistry::with_latency(Duration::ZERO, Duration::ZERO);
        let directory = ConversationDirectory::new();

        let summary = DashboardSummary::collect(&registry, &directory, 23);

        assert_eq!(summary.total_messages, 23);
        assert_eq!(summary.connected_apps, 3);
        assert_eq!(summary.available_integrations, 4);
        assert_eq!(summary.active_conversations, 6);
        assert_eq!(summary.unread_by_platform.len(), 4);
        assert_eq!(summary.unread_conversations, 6);
    }

    #[tokio::test]
    async fn test_summary_tracks_connection_changes() {
        let mut registry = IntegrationRegistry::with_latency(Duration::ZERO, Duration::ZERO);
        let directory = ConversationDirectory::new();

        registry.connect(Platform::Linkedin).await.unwrap();
        let summary = DashboardSummary::collect(&registry, &directory, 0);

        assert_eq!(summary.connected_apps, 4);
    }
}
