//! Voice channel notification messages.
//!
//! A notification is rendered from a classified transition and, for joins, the
//! ticket lookup result. Rendering is pure: the caller supplies the timestamp
//! and performs the send, so message layout can be tested without Discord.

pub mod builder;

use chrono::{DateTime, TimeZone};
use serenity::all::RoleId;

use crate::model::{
    ticket::TicketMatch,
    voice::{VoiceTransition, VoiceTransitionKind},
};

use builder::NotificationBuilder;

/// Timestamp layout used in every notification, e.g. `19.10.2026, 14:03:05`.
const TIMESTAMP_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// Formats a point in time for display in a notification.
pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders the notification for a transition.
///
/// # Arguments
/// - `transition` - The classified transition with resolved names
/// - `tickets` - Ticket lookup result; only used for joins
/// - `staff_role_id` - Role mentioned below join alerts, if configured
/// - `timestamp` - Pre-formatted event time
///
/// # Returns
/// - `Some(String)` - Message content for joins, disconnects and moves
/// - `None` - Ignored transitions, or a transition missing the channel it needs
pub fn render(
    transition: &VoiceTransition,
    tickets: &[TicketMatch],
    staff_role_id: Option<RoleId>,
    timestamp: &str,
) -> Option<String> {
    match transition.kind {
        VoiceTransitionKind::Ignore => None,
        VoiceTransitionKind::Join => {
            let channel = transition.current.as_ref()?;
            Some(
                NotificationBuilder::join(timestamp, &transition.member_name, &channel.name)
                    .tickets(tickets)
                    .status()
                    .finish_with_mention(staff_role_id),
            )
        }
        VoiceTransitionKind::LeaveDisconnect => {
            let from = transition.previous.as_ref()?;
            Some(
                NotificationBuilder::disconnect(timestamp, &transition.member_name, &from.name)
                    .finish(),
            )
        }
        VoiceTransitionKind::LeaveMove => {
            let from = transition.previous.as_ref()?;
            let to = transition.current.as_ref()?;
            Some(
                NotificationBuilder::moved(timestamp, &transition.member_name, &from.name, &to.name)
                    .finish(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serenity::all::ChannelId;

    use super::*;
    use crate::model::voice::VoiceChannel;

    const TIMESTAMP: &str = "19.10.2026, 14:03:05";

    fn channel(id: u64, name: &str) -> Option<VoiceChannel> {
        Some(VoiceChannel {
            id: ChannelId::new(id),
            name: name.to_string(),
        })
    }

    fn transition(
        kind: VoiceTransitionKind,
        previous: Option<VoiceChannel>,
        current: Option<VoiceChannel>,
    ) -> VoiceTransition {
        VoiceTransition {
            kind,
            member_name: "Ally".to_string(),
            previous,
            current,
        }
    }

    #[test]
    fn formats_timestamp_in_configured_zone() {
        let time = Utc.with_ymd_and_hms(2026, 10, 19, 12, 3, 5).unwrap();
        let berlin = time.with_timezone(&chrono_tz::Europe::Berlin);

        assert_eq!(format_timestamp(&berlin), "19.10.2026, 14:03:05");
    }

    #[test]
    fn join_lists_tickets_and_mentions_staff() {
        let tickets = vec![TicketMatch {
            channel_name: "ally-support".to_string(),
            category_name: "Support Tier 1".to_string(),
            url: "https://discord.com/channels/10/11".to_string(),
        }];
        let join = transition(VoiceTransitionKind::Join, None, channel(1, "General Help"));

        let message = render(&join, &tickets, Some(RoleId::new(42)), TIMESTAMP).unwrap();

        assert!(message.contains("NEW USER JOINED"));
        assert!(message.contains(TIMESTAMP));
        assert!(message.contains("Ally"));
        assert!(message.contains("General Help"));
        assert!(message.contains("1 OPEN TICKET(S)"));
        assert!(message.contains("ally-support (Support Tier 1)"));
        assert!(message.ends_with("<@&42> 🚨 **Immediate attention required!**"));
    }

    #[test]
    fn join_without_tickets_says_so() {
        let join = transition(
            VoiceTransitionKind::Join,
            channel(2, "Lounge"),
            channel(1, "General Help"),
        );

        let message = render(&join, &[], Some(RoleId::new(42)), TIMESTAMP).unwrap();

        assert!(message.contains("NO OPEN TICKETS"));
        assert!(!message.contains("OPEN TICKET(S)"));
    }

    #[test]
    fn join_without_staff_role_has_no_mention() {
        let join = transition(VoiceTransitionKind::Join, None, channel(1, "General Help"));

        let message = render(&join, &[], None, TIMESTAMP).unwrap();

        assert!(!message.contains("<@&"));
        assert!(message.ends_with("```"));
    }

    #[test]
    fn disconnect_names_prior_channel_without_tickets() {
        let leave = transition(
            VoiceTransitionKind::LeaveDisconnect,
            channel(1, "General Help"),
            None,
        );

        let message = render(&leave, &[], Some(RoleId::new(42)), TIMESTAMP).unwrap();

        assert!(message.contains("USER DISCONNECTED"));
        assert!(message.contains("General Help"));
        assert!(message.contains("DISCONNECTED"));
        assert!(!message.contains("Tickets"));
        assert!(!message.contains("<@&42>"));
    }

    #[test]
    fn move_names_both_channels() {
        let moved = transition(
            VoiceTransitionKind::LeaveMove,
            channel(1, "General Help"),
            channel(2, "Lounge"),
        );

        let message = render(&moved, &[], None, TIMESTAMP).unwrap();

        assert!(message.contains("USER MOVED"));
        assert!(message.contains("General Help"));
        assert!(message.contains("Lounge"));
        assert!(!message.contains("Tickets"));
    }

    #[test]
    fn ignore_renders_nothing() {
        let ignored = transition(
            VoiceTransitionKind::Ignore,
            channel(2, "Lounge"),
            channel(3, "Gaming"),
        );

        assert_eq!(render(&ignored, &[], None, TIMESTAMP), None);
    }
}
