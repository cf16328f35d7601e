// UniConnect Hub Core Entry Point
// Headless driver for the unified communication hub.

mod actors;
mod auth;
mod chat;
mod config;
mod dashboard;
mod directory;
mod error;
mod fs_manager;
mod integrations;
mod matcher;
mod models;
mod rate_limiter;

#[cfg(test)]
mod tests;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use actors::{HubEvent, HubHandle};
use auth::ProfileStore;
use config::HubConfig;
use dashboard::DashboardSummary;
use directory::ConversationDirectory;
use fs_manager::PortablePathManager;
use integrations::IntegrationRegistry;
use models::{Platform, ProfileUpdate};

/// The conversation the interactive prompt writes into.
const DEFAULT_CONVERSATION: &str = "unified-inbox";

fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let formatting_layer = BunyanFormattingLayer::new("uniconnect".into(), std::io::stderr);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")
}

fn print_help() {
    println!("Commands:");
    println!("  /integrations              list integrations");
    println!("  /connect <platform>        connect an integration");
    println!("  /disconnect <platform>     disconnect an integration");
    println!("  /sync <platform>           refresh an integration");
    println!("  /conversations [platform] [query]");
    println!("  /dashboard                 show hub statistics");
    println!("  /login <email> <password>");
    println!("  /signup <username> <email> <password>");
    println!("  /logout");
    println!("  /profile [username <name> | theme <light|dark>]");
    println!("  /history                   print the session log");
    println!("  /quit");
    println!("Anything else is sent to the assistant.");
}

fn parse_platform(raw: Option<&str>) -> Option<Platform> {
    raw.and_then(Platform::from_id)
}

async fn handle_command(
    line: &str,
    hub: &HubHandle,
    registry: &mut IntegrationRegistry,
    directory: &ConversationDirectory,
    profiles: &mut ProfileStore,
) -> anyhow::Result<bool> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();

    match command {
        "/quit" => return Ok(true),
        "/help" => print_help(),
        "/integrations" => {
            for integration in registry.integrations() {
                let status = if integration.connected {
                    "connected"
                } else {
                    "not connected"
                };
                let sync = integration
                    .last_sync
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<10} {:<25} {:<15} last sync: {}",
                    integration.platform, integration.name, status, sync
                );
            }
        }
        "/connect" => match parse_platform(parts.next()) {
            Some(platform) => {
                registry.connect(platform).await?;
                println!("{} connected", platform);
            }
            None => println!("Usage: /connect <whatsapp|email|linkedin|calendar>"),
        },
        "/disconnect" => match parse_platform(parts.next()) {
            Some(platform) => {
                registry.disconnect(platform)?;
                println!("{} disconnected", platform);
            }
            None => println!("Usage: /disconnect <platform>"),
        },
        "/sync" => match parse_platform(parts.next()) {
            Some(platform) => match registry.sync(platform).await {
                Ok(at) => println!("{} synced at {}", platform, at.to_rfc3339()),
                Err(e) => println!("Sync failed: {}", e),
            },
            None => println!("Usage: /sync <platform>"),
        },
        "/conversations" => {
            let mut args = parts.peekable();
            let platform = args.peek().copied().and_then(Platform::from_id);
            if platform.is_some() {
                args.next();
            }
            let query = args.collect::<Vec<_>>().join(" ");
            for conversation in directory.filter(platform, &query) {
                println!(
                    "[{}] {:<25} ({} unread) {}",
                    conversation.platform,
                    conversation.name,
                    conversation.unread,
                    conversation.last_message
                );
            }
        }
        "/dashboard" => {
            let messages = hub.list_messages().await?;
            let summary = DashboardSummary::collect(registry, directory, messages.len());
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        "/login" => match (parts.next(), parts.next()) {
            (Some(email), Some(password)) => match profiles.login(email, password).await {
                Ok(profile) => println!("Signed in as {}", profile.username),
                Err(e) => println!("Login failed: {}", e),
            },
            _ => println!("Usage: /login <email> <password>"),
        },
        "/signup" => match (parts.next(), parts.next(), parts.next()) {
            (Some(username), Some(email), Some(password)) => {
                match profiles.signup(username, email, password).await {
                    Ok(profile) => println!("Welcome, {}!", profile.username),
                    Err(e) => println!("Signup failed: {}", e),
                }
            }
            _ => println!("Usage: /signup <username> <email> <password>"),
        },
        "/logout" => {
            profiles.logout()?;
            println!("Signed out");
        }
        "/profile" => match (parts.next(), parts.next()) {
            (None, _) => match profiles.current() {
                Some(profile) => println!("{}", serde_json::to_string_pretty(profile)?),
                None => println!("Not signed in"),
            },
            (Some("username"), Some(name)) => {
                let update = ProfileUpdate {
                    username: Some(name.to_string()),
                    ..Default::default()
                };
                match profiles.update(update) {
                    Ok(profile) => println!("Username is now {}", profile.username),
                    Err(e) => println!("Update failed: {}", e),
                }
            }
            (Some("theme"), Some(raw)) => {
                let theme = match raw {
                    "light" => Some(models::Theme::Light),
                    "dark" => Some(models::Theme::Dark),
                    _ => None,
                };
                match theme {
                    Some(theme) => {
                        let update = ProfileUpdate {
                            theme: Some(theme),
                            ..Default::default()
                        };
                        match profiles.update(update) {
                            Ok(_) => println!("Theme updated"),
                            Err(e) => println!("Update failed: {}", e),
                        }
                    }
                    None => println!("Usage: /profile theme <light|dark>"),
                }
            }
            _ => println!("Usage: /profile [username <name> | theme <light|dark>]"),
        },
        "/history" => {
            for message in hub.list_messages().await? {
                let name = message
                    .sender_name
                    .clone()
                    .unwrap_or_else(|| format!("{:?}", message.sender).to_lowercase());
                println!("[{}] {}: {}", message.timestamp.to_rfc3339(), name, message.content);
            }
        }
        _ => println!("Unknown command. Try /help."),
    }

    Ok(false)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_telemetry()?;

    let config = HubConfig::from_env()?;
    let paths = PortablePathManager::new(config.data_dir.clone());
    if let Err(e) = paths.init() {
        warn!("Failed to initialize portable file system: {}", e);
    }

    let mut profiles = ProfileStore::open(paths.profile_path())?;

    let (event_tx, mut event_rx) = mpsc::channel::<HubEvent>(64);
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if matches!(event, HubEvent::TypingStarted) {
                println!("UniConnect is typing...");
            }
        }
    });

    let hub = HubHandle::new(&config, event_tx);
    let mut registry = IntegrationRegistry::new();
    let directory = ConversationDirectory::new();

    info!("UniConnect hub ready");
    match profiles.current() {
        Some(profile) => println!("Welcome back, {}!", profile.username),
        None => println!("Welcome to UniConnect. /login to get started, /help for commands."),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('/') {
            let quit =
                handle_command(&line, &hub, &mut registry, &directory, &mut profiles).await?;
            if quit {
                break;
            }
            continue;
        }

        match hub
            .process_message(DEFAULT_CONVERSATION.to_string(), line)
            .await
        {
            Ok(reply) => println!("{}", reply.content),
            Err(e) => println!("Error: {}", e),
        }
    }

    info!("UniConnect hub exiting");
    Ok(())
}
