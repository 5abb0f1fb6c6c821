use chrono_tz::Tz;
use serenity::all::{ChannelId, RoleId};

use crate::error::{config::ConfigError, AppError};
use crate::util::parse::parse_id;

/// Ticket categories scanned when `TICKET_CATEGORY_IDS` is not set.
const DEFAULT_TICKET_CATEGORY_IDS: [u64; 5] = [
    1413669641062055976,
    1413669733957636156,
    1413669821375189032,
    1413892803162800178,
    1413893025620299837,
];

const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Berlin;

/// Process-wide configuration, read once at startup and never mutated.
pub struct Config {
    pub discord_token: String,

    /// Voice channel whose joins, leaves and moves are reported.
    pub voice_channel_id: ChannelId,
    /// Text channel notifications are posted to. `None` disables posting.
    pub notification_channel_id: Option<ChannelId>,
    /// Role mentioned on joins. `None` omits the mention.
    pub staff_role_id: Option<RoleId>,
    /// Categories scanned for ticket channels, in lookup order.
    pub ticket_category_ids: Vec<ChannelId>,

    /// Timezone notification timestamps are rendered in.
    pub timezone: Tz,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset. The token and the monitored voice
    /// channel are required; every other setting degrades with a warning.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value for a variable name, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration ready to hand to the bot
    /// - `Err(AppError::ConfigErr)` - Token or voice channel missing or invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let discord_token = var("DISCORD_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let voice_channel_id = var("VOICE_CHANNEL_ID")
            .ok_or_else(|| ConfigError::MissingEnvVar("VOICE_CHANNEL_ID".to_string()))?;
        let voice_channel_id = ChannelId::new(parse_id("VOICE_CHANNEL_ID", &voice_channel_id)?);

        let notification_channel_id =
            optional_id("NOTIFICATION_CHANNEL_ID", var("NOTIFICATION_CHANNEL_ID"))
                .map(ChannelId::new);
        let staff_role_id = optional_id("STAFF_ROLE_ID", var("STAFF_ROLE_ID")).map(RoleId::new);

        let ticket_category_ids = match var("TICKET_CATEGORY_IDS") {
            Some(raw) => parse_category_list(&raw),
            None => DEFAULT_TICKET_CATEGORY_IDS
                .iter()
                .copied()
                .map(ChannelId::new)
                .collect(),
        };

        let timezone = match var("NOTIFICATION_TIMEZONE") {
            Some(name) => name.trim().parse::<Tz>().unwrap_or_else(|e| {
                tracing::warn!(
                    "Invalid NOTIFICATION_TIMEZONE '{}', falling back to {}: {}",
                    name,
                    DEFAULT_TIMEZONE,
                    e
                );
                DEFAULT_TIMEZONE
            }),
            None => DEFAULT_TIMEZONE,
        };

        Ok(Self {
            discord_token,
            voice_channel_id,
            notification_channel_id,
            staff_role_id,
            ticket_category_ids,
            timezone,
        })
    }
}

fn optional_id(name: &str, value: Option<String>) -> Option<u64> {
    let Some(value) = value else {
        tracing::warn!("{} is not set, related feature disabled", name);
        return None;
    };

    match parse_id(name, &value) {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!("{}, related feature disabled", e);
            None
        }
    }
}

/// Parses a comma-separated category list, skipping invalid entries.
fn parse_category_list(raw: &str) -> Vec<ChannelId> {
    raw.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .filter_map(|entry| match parse_id("TICKET_CATEGORY_IDS", entry) {
            Ok(id) => Some(ChannelId::new(id)),
            Err(e) => {
                tracing::warn!("Skipping ticket category: {}", e);
                None
            }
        })
        .collect()
}
