//! Classification of voice state updates against the monitored channel.

use serenity::all::ChannelId;

use crate::model::voice::VoiceTransitionKind;

/// Decides which notification, if any, a voice location change produces.
///
/// Entering the monitored channel is a join, including a member's first voice
/// activity (`previous` is `None`). Leaving it is a disconnect when the member
/// ends up in no channel and a move otherwise. Anything else, including
/// mute/deafen updates that keep the location unchanged, is ignored.
///
/// # Arguments
/// - `previous` - Voice channel before the update, `None` if not in voice
/// - `current` - Voice channel after the update, `None` if not in voice
/// - `monitored` - The configured voice channel
///
/// # Returns
/// - `VoiceTransitionKind` - Exactly one outcome; the cases are mutually exclusive
pub fn classify(
    previous: Option<ChannelId>,
    current: Option<ChannelId>,
    monitored: ChannelId,
) -> VoiceTransitionKind {
    let was_monitored = previous == Some(monitored);
    let is_monitored = current == Some(monitored);

    match (was_monitored, is_monitored) {
        (false, true) => VoiceTransitionKind::Join,
        (true, false) if current.is_none() => VoiceTransitionKind::LeaveDisconnect,
        (true, false) => VoiceTransitionKind::LeaveMove,
        _ => VoiceTransitionKind::Ignore,
    }
}
