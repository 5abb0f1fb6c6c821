//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. Used to log
//! the bot identity and the configuration it is running with.

use serenity::all::{Context, Ready};

use crate::config::Config;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `config` - Application configuration to report
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(config: &Config, _ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
    tracing::info!("Monitoring voice channel {}", config.voice_channel_id);

    match config.notification_channel_id {
        Some(channel_id) => tracing::info!("Posting notifications to channel {}", channel_id),
        None => tracing::warn!("No notification channel configured, notifications are disabled"),
    }

    match config.staff_role_id {
        Some(role_id) => tracing::info!("Mentioning role {} on joins", role_id),
        None => tracing::warn!("No staff role configured, join alerts will not ping anyone"),
    }

    tracing::info!(
        "Scanning {} ticket categories",
        config.ticket_category_ids.len()
    );
}
