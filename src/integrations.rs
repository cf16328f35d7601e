//! Integration catalog and connection state.
//!
//! Four platform integrations with connect/disconnect/sync operations.
//! The registry is an explicit, caller-owned state object; "connecting" and
//! "syncing" are simulated with a tokio timer delay, there is no real
//! platform traffic behind them.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use serde::Serialize;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, instrument};
use url::Url;

use crate::error::AppError;
use crate::models::Platform;

const CONNECT_LATENCY_MS: u64 = 2000;
const SYNC_LATENCY_MS: u64 = 1500;

/// One platform integration and its connection state.
#[derive(Debug, Clone, Serialize)]
pub struct Integration {
    pub platform: Platform,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Where the user manages the account on the platform side.
    pub connection_url: Option<Url>,
    pub connected: bool,
    pub last_sync: Option<DateTime<Utc>>,
    /// Unread items attributed to this platform on the dashboard.
    pub unread: u32,
}

/// Caller-owned registry of all integrations.
#[derive(Debug)]
pub struct IntegrationRegistry {
    integrations: Vec<Integration>,
    connect_latency: Duration,
    sync_latency: Duration,
}

impl Default for IntegrationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegrationRegistry {
    /// Creates the registry with the stock catalog: WhatsApp, email and
    /// calendar start connected with recent sync times, LinkedIn does not.
    pub fn new() -> Self {
        Self::with_latency(
            Duration::from_millis(CONNECT_LATENCY_MS),
            Duration::from_millis(SYNC_LATENCY_MS),
        )
    }

    /// Creates the registry with custom operation latencies. Tests pass zero.
    pub fn with_latency(connect_latency: Duration, sync_latency: Duration) -> Self {
        let now = Utc::now();
        let integrations = vec![
            Integration {
                platform: Platform::Whatsapp,
                name: "WhatsApp Business",
                description: "Connect your WhatsApp Business account to manage conversations",
                features: &[
                    "Send & receive messages",
                    "Group chat management",
                    "Media sharing",
                    "Status updates",
                ],
                connection_url: Url::parse("https://business.whatsapp.com").ok(),
                connected: true,
                last_sync: Some(now - ChronoDuration::minutes(2)),
                unread: 12,
            },
            Integration {
                platform: Platform::Email,
                name: "Email (Gmail/Outlook)",
                description: "Sync your email accounts for unified inbox management",
                features: &[
                    "Read & compose emails",
                    "Folder organization",
                    "Search & filters",
                    "Attachment handling",
                ],
                connection_url: Url::parse("https://gmail.com").ok(),
                connected: true,
                last_sync: Some(now - ChronoDuration::minutes(5)),
                unread: 8,
            },
            Integration {
                platform: Platform::Linkedin,
                name: "LinkedIn",
                description: "Manage professional networking and messages",
                features: &[
                    "Professional messaging",
                    "Connection requests",
                    "Network updates",
                    "Job notifications",
                ],
                connection_url: Url::parse("https://linkedin.com").ok(),
                connected: false,
                last_sync: None,
                unread: 0,
            },
            Integration {
                platform: Platform::Calendar,
                name: "Google Calendar",
                description: "Schedule meetings and manage events seamlessly",
                features: &[
                    "Create & edit events",
                    "Meeting scheduling",
                    "Reminders",
                    "Calendar sharing",
                ],
                connection_url: Url::parse("https://calendar.google.com").ok(),
                connected: true,
                last_sync: Some(now - ChronoDuration::minutes(1)),
                unread: 3,
            },
        ];

        Self {
            integrations,
            connect_latency,
            sync_latency,
        }
    }

    /// All integrations, in catalog order.
    pub fn integrations(&self) -> &[Integration] {
        &self.integrations
    }

    pub fn get(&self, platform: Platform) -> Option<&Integration> {
        self.integrations.iter().find(|i| i.platform == platform)
    }

    fn get_mut(&mut self, platform: Platform) -> Result<&mut Integration, AppError> {
        self.integrations
            .iter_mut()
            .find(|i| i.platform == platform)
            .ok_or_else(|| AppError::Internal(format!("Unknown integration: {}", platform)))
    }

    /// Connects an integration after the simulated handshake delay.
    /// Idempotent: an already connected integration just refreshes its sync.
    #[instrument(skip(self))]
    pub async fn connect(&mut self, platform: Platform) -> Result<(), AppError> {
        sleep(self.connect_latency).await;
        let integration = self.get_mut(platform)?;
        integration.connected = true;
        integration.last_sync = Some(Utc::now());
        info!(%platform, "integration connected");
        Ok(())
    }

    /// Disconnects an integration immediately and clears its sync time.
    #[instrument(skip(self))]
    pub fn disconnect(&mut self, platform: Platform) -> Result<(), AppError> {
        let integration = self.get_mut(platform)?;
        integration.connected = false;
        integration.last_sync = None;
        info!(%platform, "integration disconnected");
        Ok(())
    }

    /// Refreshes the sync time after the simulated sync delay.
    /// Syncing a disconnected integration is a validation error.
    #[instrument(skip(self))]
    pub async fn sync(&mut self, platform: Platform) -> Result<DateTime<Utc>, AppError> {
        if !self.get_mut(platform)?.connected {
            return Err(AppError::Validation(format!(
                "Integration {} is not connected",
                platform
            )));
        }
        sleep(self.sync_latency).await;
        let synced_at = Utc::now();
        self.get_mut(platform)?.last_sync = Some(synced_at);
        info!(%platform, "integration synced");
        Ok(synced_at)
    }

    pub fn connected_count(&self) -> usize {
        self.integrations.iter().filter(|i| i.connected).count()
    }

    pub fn total(&self) -> usize {
        self.integrations.len()
    }

    /// Unread items summed over connected integrations.
    pub fn unread_total(&self) -> u32 {
        self.integrations
            .iter()
            .filter(|i| i.connected)
            .map(|i| i.unread)
            .sum()
    }
}
