//! Domain models for voice state transitions.

use serenity::all::ChannelId;

/// Outcome of classifying one voice state update against the monitored channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceTransitionKind {
    /// Nothing to report: the monitored channel was neither entered nor left.
    Ignore,
    /// The member entered the monitored channel.
    Join,
    /// The member left the monitored channel and is no longer in voice.
    LeaveDisconnect,
    /// The member left the monitored channel for another voice channel.
    LeaveMove,
}

/// One voice location change, with channel IDs resolved to display names.
///
/// Built per event from the gateway payload and the cache, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceTransition {
    pub kind: VoiceTransitionKind,
    /// Display name of the member who moved.
    pub member_name: String,
    /// Voice channel the member was in before the update.
    pub previous: Option<VoiceChannel>,
    /// Voice channel the member is in after the update.
    pub current: Option<VoiceChannel>,
}

/// A voice channel reference with its cached name.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceChannel {
    pub id: ChannelId,
    pub name: String,
}
