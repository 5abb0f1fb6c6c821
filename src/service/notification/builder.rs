//! Notification message builder.
//!
//! Messages are a bold title followed by an `ansi` code block, which Discord
//! renders with terminal colors. Each alert kind has its own accent color used
//! for the horizontal rules.

use serenity::all::RoleId;

use crate::model::ticket::TicketMatch;

const RESET: &str = "\u{1b}[0m";
const RED: &str = "\u{1b}[31m";
const GREEN: &str = "\u{1b}[32m";
const YELLOW: &str = "\u{1b}[33m";
const CYAN: &str = "\u{1b}[36m";
const WHITE: &str = "\u{1b}[37m";
const BOLD_RED: &str = "\u{1b}[1;31m";
const BOLD_YELLOW: &str = "\u{1b}[1;33m";
const BOLD_CYAN: &str = "\u{1b}[1;36m";

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Incrementally assembles one notification message.
pub struct NotificationBuilder {
    content: String,
    accent: &'static str,
}

impl NotificationBuilder {
    fn open(title: &str, accent: &'static str, heading_color: &str, heading: &str) -> Self {
        let mut builder = Self {
            content: String::new(),
            accent,
        };

        builder.line(title);
        builder.line("```ansi");
        builder.rule();
        builder.line(&format!("{}{}{}", heading_color, heading, RESET));
        builder.rule();

        builder
    }

    /// Starts a join alert with the time, member and channel lines.
    pub fn join(timestamp: &str, member: &str, channel: &str) -> Self {
        let mut builder = Self::open(
            "🟢 **VOICE CHANNEL ALERT** 🟢",
            GREEN,
            BOLD_CYAN,
            "🔊 NEW USER JOINED",
        );
        builder.field("⏰ Time:     ", WHITE, timestamp);
        builder.field("👤 User:     ", WHITE, member);
        builder.field("🏠 Channel:  ", WHITE, channel);
        builder
    }

    /// Builds a disconnect alert naming the channel the member left.
    pub fn disconnect(timestamp: &str, member: &str, from: &str) -> Self {
        let mut builder = Self::open(
            "🔴 **VOICE CHANNEL UPDATE** 🔴",
            RED,
            BOLD_RED,
            "🔌 USER DISCONNECTED",
        );
        builder.field("⏰ Time:     ", WHITE, timestamp);
        builder.field("👤 User:     ", WHITE, member);
        builder.field("📤 From:     ", WHITE, from);
        builder.field("❌ Action:   ", RED, "DISCONNECTED");
        builder
    }

    /// Builds a move alert naming both channels.
    pub fn moved(timestamp: &str, member: &str, from: &str, to: &str) -> Self {
        let mut builder = Self::open(
            "🟡 **VOICE CHANNEL UPDATE** 🟡",
            YELLOW,
            BOLD_YELLOW,
            "🔄 USER MOVED",
        );
        builder.field("⏰ Time:     ", WHITE, timestamp);
        builder.field("👤 User:     ", WHITE, member);
        builder.field("📤 From:     ", WHITE, from);
        builder.field("📥 To:       ", WHITE, to);
        builder.field("🔄 Action:   ", CYAN, "MOVED");
        builder
    }

    /// Appends the ticket summary, one indented line per ticket.
    pub fn tickets(mut self, tickets: &[TicketMatch]) -> Self {
        if tickets.is_empty() {
            self.field("🎫 Tickets:  ", GREEN, "NO OPEN TICKETS");
            return self;
        }

        self.field(
            "🎫 Tickets:  ",
            RED,
            &format!("{} OPEN TICKET(S)", tickets.len()),
        );
        for ticket in tickets {
            self.field(
                "         ↳ ",
                WHITE,
                &format!("{} ({})", ticket.channel_name, ticket.category_name),
            );
        }

        self
    }

    /// Appends the "waiting for team" status line.
    pub fn status(mut self) -> Self {
        self.field("📋 Status:   ", RED, "⚠️  WAITING FOR TEAM RESPONSE");
        self
    }

    /// Closes the code block and returns the message.
    pub fn finish(mut self) -> String {
        self.rule();
        self.content.push_str("```");
        self.content
    }

    /// Closes the code block and adds a staff role ping below it.
    ///
    /// The mention has to sit outside the code block for Discord to notify the role.
    pub fn finish_with_mention(self, staff_role_id: Option<RoleId>) -> String {
        let mut content = self.finish();

        if let Some(role_id) = staff_role_id {
            content.push_str(&format!(
                "\n<@&{}> 🚨 **Immediate attention required!**",
                role_id
            ));
        }

        content
    }

    fn field(&mut self, label: &str, value_color: &str, value: &str) {
        let line = format!("{}{}{}{}{}", YELLOW, label, value_color, value, RESET);
        self.line(&line);
    }

    fn rule(&mut self) {
        let line = format!("{}{}{}", self.accent, RULE, RESET);
        self.line(&line);
    }

    fn line(&mut self, line: &str) {
        self.content.push_str(line);
        self.content.push('\n');
    }
}
