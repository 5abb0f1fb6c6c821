//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test guild member.
///
/// Discord resolves a member's display name as nickname, then global name,
/// then username, so leaving `global_name` and `nick` unset yields a member
/// displayed by username.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `guild_id` - Guild the member belongs to
/// - `username` - Account username
/// - `global_name` - Optional account-wide display name
/// - `nick` - Optional guild nickname
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::member::create_test_member;
///
/// let member = create_test_member(123456789, 10, "alice", None, Some("Ally"));
/// assert_eq!(member.display_name(), "Ally");
/// ```
pub fn create_test_member(
    user_id: u64,
    guild_id: u64,
    username: &str,
    global_name: Option<&str>,
    nick: Option<&str>,
) -> Member {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": global_name,
            "avatar": null,
            "bot": false,
            "system": false,
            "public_flags": 0,
        },
        "nick": nick,
        "avatar": null,
        "roles": [],
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
