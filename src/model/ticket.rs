//! Domain models for the open-ticket lookup.

use serenity::all::Member;

/// The names a ticket channel may carry for a given member.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketOwner {
    /// Account username, shared across guilds.
    pub username: String,
    /// Guild display name: nickname, then global name, then username.
    pub display_name: String,
}

impl TicketOwner {
    pub fn from_member(member: &Member) -> Self {
        Self {
            username: member.user.name.clone(),
            display_name: member.display_name().to_string(),
        }
    }
}

/// A channel whose name suggests it is a ticket opened by the member.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketMatch {
    pub channel_name: String,
    /// Name of the ticket category the channel sits in.
    pub category_name: String,
    /// Deep link to the channel.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_member;

    #[test]
    fn display_name_prefers_nickname() {
        let member = create_test_member(1, 10, "alice", Some("Alice A."), Some("Ally"));

        let owner = TicketOwner::from_member(&member);

        assert_eq!(owner.username, "alice");
        assert_eq!(owner.display_name, "Ally");
    }

    #[test]
    fn display_name_falls_back_to_global_then_username() {
        let global = create_test_member(1, 10, "alice", Some("Alice A."), None);
        let plain = create_test_member(2, 10, "bob", None, None);

        assert_eq!(TicketOwner::from_member(&global).display_name, "Alice A.");
        assert_eq!(TicketOwner::from_member(&plain).display_name, "bob");
    }
}
