//! Open-ticket lookup by channel naming convention.
//!
//! Ticket channels are recognised only by name: a channel nested under one of
//! the configured ticket categories whose name contains the member's username
//! or display name is reported as theirs. Renamed tickets are missed and
//! unrelated names that happen to contain the same text are reported; the
//! result is a hint for staff, not an authoritative ticket list.

use std::collections::HashMap;

use serenity::all::{ChannelId, ChannelType, GuildChannel, GuildId};

use crate::model::ticket::{TicketMatch, TicketOwner};

/// Finds every channel in the ticket categories that appears to belong to `owner`.
///
/// Categories are visited in the configured order. A category that is missing
/// from `channels` (deleted, never existed, not cached yet) or that is not a
/// category channel is skipped. Channels within a category are visited in
/// Discord position order. Name matching is case-insensitive.
///
/// # Arguments
/// - `owner` - Username and display name of the member
/// - `guild_id` - Guild the channels belong to, used for channel URLs
/// - `channels` - The guild's cached channels
/// - `ticket_category_ids` - Configured ticket categories
///
/// # Returns
/// - `Vec<TicketMatch>` - All matching channels, empty if there are none
pub fn find_open_tickets(
    owner: &TicketOwner,
    guild_id: GuildId,
    channels: &HashMap<ChannelId, GuildChannel>,
    ticket_category_ids: &[ChannelId],
) -> Vec<TicketMatch> {
    let needles: Vec<String> = [&owner.username, &owner.display_name]
        .into_iter()
        .map(|name| name.to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    if needles.is_empty() {
        return Vec::new();
    }

    let mut tickets = Vec::new();

    for category_id in ticket_category_ids {
        let Some(category) = channels
            .get(category_id)
            .filter(|channel| channel.kind == ChannelType::Category)
        else {
            tracing::debug!(
                "Ticket category {} not found in guild {}, skipping",
                category_id,
                guild_id
            );
            continue;
        };

        let mut children: Vec<&GuildChannel> = channels
            .values()
            .filter(|channel| channel.parent_id == Some(category.id))
            .collect();
        children.sort_by_key(|channel| (channel.position, channel.id));

        for channel in children {
            let name = channel.name.to_lowercase();
            if needles.iter().any(|needle| name.contains(needle.as_str())) {
                tickets.push(TicketMatch {
                    channel_name: channel.name.clone(),
                    category_name: category.name.clone(),
                    url: channel_url(guild_id, channel.id),
                });
            }
        }
    }

    tickets
}

/// Builds the deep link Discord clients open a channel from.
pub fn channel_url(guild_id: GuildId, channel_id: ChannelId) -> String {
    format!("https://discord.com/channels/{}/{}", guild_id, channel_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_category, create_test_channel};

    const GUILD: u64 = 10;

    fn owner(username: &str, display_name: &str) -> TicketOwner {
        TicketOwner {
            username: username.to_string(),
            display_name: display_name.to_string(),
        }
    }

    fn channel_map(channels: Vec<GuildChannel>) -> HashMap<ChannelId, GuildChannel> {
        channels
            .into_iter()
            .map(|channel| (channel.id, channel))
            .collect()
    }

    #[test]
    fn matches_only_the_members_channel() {
        let channels = channel_map(vec![
            create_test_category(1, GUILD, "Tickets", 0),
            create_test_channel(11, GUILD, "ticket-alice-01", Some(1), 0),
            create_test_channel(12, GUILD, "ticket-bob-02", Some(1), 1),
        ]);

        let tickets = find_open_tickets(
            &owner("alice", "alice"),
            GuildId::new(GUILD),
            &channels,
            &[ChannelId::new(1)],
        );

        assert_eq!(
            tickets,
            vec![TicketMatch {
                channel_name: "ticket-alice-01".to_string(),
                category_name: "Tickets".to_string(),
                url: "https://discord.com/channels/10/11".to_string(),
            }]
        );
    }

    #[test]
    fn matches_display_name_case_insensitively() {
        let channels = channel_map(vec![
            create_test_category(1, GUILD, "Support Tier 1", 0),
            create_test_channel(11, GUILD, "ally-support", Some(1), 0),
        ]);

        let tickets = find_open_tickets(
            &owner("Alice", "Ally"),
            GuildId::new(GUILD),
            &channels,
            &[ChannelId::new(1)],
        );

        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].channel_name, "ally-support");
        assert_eq!(tickets[0].category_name, "Support Tier 1");
    }

    #[test]
    fn returns_every_match_across_categories() {
        let channels = channel_map(vec![
            create_test_category(1, GUILD, "Legacy", 0),
            create_test_category(2, GUILD, "Active", 1),
            create_test_channel(11, GUILD, "alice-old", Some(1), 0),
            create_test_channel(21, GUILD, "ALICE-billing", Some(2), 1),
            create_test_channel(22, GUILD, "alice-refund", Some(2), 0),
        ]);

        let tickets = find_open_tickets(
            &owner("alice", "alice"),
            GuildId::new(GUILD),
            &channels,
            &[ChannelId::new(1), ChannelId::new(2)],
        );

        let names: Vec<&str> = tickets.iter().map(|t| t.channel_name.as_str()).collect();
        assert_eq!(names, vec!["alice-old", "alice-refund", "ALICE-billing"]);
        assert_eq!(tickets[1].category_name, "Active");
    }

    #[test]
    fn ignores_channels_outside_ticket_categories() {
        let channels = channel_map(vec![
            create_test_category(1, GUILD, "Tickets", 0),
            create_test_category(2, GUILD, "General", 1),
            create_test_channel(21, GUILD, "alice-chat", Some(2), 0),
            create_test_channel(31, GUILD, "alice-uncategorized", None, 0),
        ]);

        let tickets = find_open_tickets(
            &owner("alice", "alice"),
            GuildId::new(GUILD),
            &channels,
            &[ChannelId::new(1)],
        );

        assert!(tickets.is_empty());
    }

    #[test]
    fn unresolvable_categories_yield_no_tickets() {
        let channels = channel_map(vec![create_test_channel(
            11,
            GUILD,
            "ticket-alice-01",
            None,
            0,
        )]);

        let tickets = find_open_tickets(
            &owner("alice", "alice"),
            GuildId::new(GUILD),
            &channels,
            &[ChannelId::new(1), ChannelId::new(2)],
        );

        assert!(tickets.is_empty());
    }

    /// A configured ID pointing at a text channel is not treated as a category.
    #[test]
    fn non_category_ids_are_skipped() {
        let channels = channel_map(vec![
            create_test_channel(1, GUILD, "alice-lobby", None, 0),
            create_test_channel(11, GUILD, "alice-thread", Some(1), 0),
        ]);

        let tickets = find_open_tickets(
            &owner("alice", "alice"),
            GuildId::new(GUILD),
            &channels,
            &[ChannelId::new(1)],
        );

        assert!(tickets.is_empty());
    }

    #[test]
    fn empty_names_never_match() {
        let channels = channel_map(vec![
            create_test_category(1, GUILD, "Tickets", 0),
            create_test_channel(11, GUILD, "ticket-0001", Some(1), 0),
        ]);

        let tickets = find_open_tickets(
            &owner("", ""),
            GuildId::new(GUILD),
            &channels,
            &[ChannelId::new(1)],
        );

        assert!(tickets.is_empty());
    }
}
