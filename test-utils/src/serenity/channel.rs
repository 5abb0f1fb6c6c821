//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

const TEXT: u8 = 0;
const VOICE: u8 = 2;
const CATEGORY: u8 = 4;

fn create_guild_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    kind: u8,
    parent_id: Option<u64>,
    position: u16,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "parent_id": parent_id.map(|id| id.to_string()),
        "position": position,
        "permission_overwrites": [],
        "nsfw": false,
        "flags": 0,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}

/// Creates a test category channel.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `guild_id` - Guild the category belongs to
/// - `name` - Category name
/// - `position` - Sorting position among categories
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_category(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    position: u16,
) -> GuildChannel {
    create_guild_channel(channel_id, guild_id, name, CATEGORY, None, position)
}

/// Creates a test text channel, nested under `parent_id` when given.
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    guild_id: u64,
    name: &str,
    parent_id: Option<u64>,
    position: u16,
) -> GuildChannel {
    create_guild_channel(channel_id, guild_id, name, TEXT, parent_id, position)
}

/// Creates a test voice channel.
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_voice_channel(channel_id: u64, guild_id: u64, name: &str) -> GuildChannel {
    create_guild_channel(channel_id, guild_id, name, VOICE, None, 0)
}
