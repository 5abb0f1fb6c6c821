//! Voice state event handler.
//!
//! Classifies each voice state update against the monitored channel and, for
//! joins, disconnects and moves, posts one notification to the configured text
//! channel. Joins are annotated with the member's apparent open tickets.
//!
//! Cache reads happen synchronously before the send so no cache guard is held
//! across an await point. Errors are logged here and never reach the gateway
//! dispatcher.

use std::collections::HashMap;

use chrono::Utc;
use serenity::all::{
    Cache, ChannelId, Context, CreateMessage, Guild, GuildChannel, GuildId, Member, VoiceState,
};

use crate::config::Config;
use crate::error::AppError;
use crate::model::{
    ticket::{TicketMatch, TicketOwner},
    voice::{VoiceChannel, VoiceTransition, VoiceTransitionKind},
};
use crate::service::{
    notification::{format_timestamp, render},
    ticket::find_open_tickets,
    voice_transition::classify,
};

/// Handles the voice_state_update event.
///
/// `old` is the cached previous state; when serenity has none (the member was
/// not in voice, or the cache was not yet populated) the previous location is
/// treated as "not in voice".
///
/// # Arguments
/// - `config` - Application configuration
/// - `ctx` - Discord context for cache access and sending
/// - `old` - Previous voice state if cached
/// - `new` - Voice state after the update
pub async fn handle_voice_state_update(
    config: &Config,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let previous = old.as_ref().and_then(|state| state.channel_id);
    let kind = classify(previous, new.channel_id, config.voice_channel_id);

    if kind == VoiceTransitionKind::Ignore {
        return;
    }

    if let Err(e) = notify(config, &ctx, kind, old.as_ref(), &new).await {
        tracing::error!(
            "Failed to handle voice state update for user {}: {:?}",
            new.user_id,
            e
        );
    }
}

async fn notify(
    config: &Config,
    ctx: &Context,
    kind: VoiceTransitionKind,
    old: Option<&VoiceState>,
    new: &VoiceState,
) -> Result<(), AppError> {
    let Some(notification_channel_id) = config.notification_channel_id else {
        tracing::error!(
            "No notification channel configured, dropping {:?} for user {}",
            kind,
            new.user_id
        );
        return Ok(());
    };

    if !notification_channel_cached(&ctx.cache, notification_channel_id) {
        tracing::error!(
            "Notification channel with ID {} not found",
            notification_channel_id
        );
        return Ok(());
    }

    let guild_id = new
        .guild_id
        .or_else(|| old.and_then(|state| state.guild_id))
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Voice state update for user {} has no guild",
                new.user_id
            ))
        })?;

    let (transition, tickets) = resolve_transition(config, &ctx.cache, kind, guild_id, old, new);

    let timestamp = format_timestamp(&Utc::now().with_timezone(&config.timezone));
    let Some(content) = render(&transition, &tickets, config.staff_role_id, &timestamp) else {
        return Ok(());
    };

    notification_channel_id
        .send_message(&ctx.http, CreateMessage::new().content(content))
        .await?;

    match transition.kind {
        VoiceTransitionKind::Join => tracing::info!(
            "Notification sent: {} joined {} ({} open tickets)",
            transition.member_name,
            channel_name(transition.current.as_ref()),
            tickets.len()
        ),
        VoiceTransitionKind::LeaveDisconnect => tracing::info!(
            "Leave notification sent: {} disconnected from {}",
            transition.member_name,
            channel_name(transition.previous.as_ref())
        ),
        VoiceTransitionKind::LeaveMove => tracing::info!(
            "Leave notification sent: {} moved from {} to {}",
            transition.member_name,
            channel_name(transition.previous.as_ref()),
            channel_name(transition.current.as_ref())
        ),
        VoiceTransitionKind::Ignore => {}
    }

    Ok(())
}

/// Whether the notification channel is present in any cached guild.
fn notification_channel_cached(cache: &Cache, channel_id: ChannelId) -> bool {
    cache.guilds().into_iter().any(|guild_id| {
        cache
            .guild(guild_id)
            .is_some_and(|guild| guild.channels.contains_key(&channel_id))
    })
}

/// Resolves names from the cache and runs the ticket lookup for joins.
///
/// A missing guild or member degrades to raw IDs and an empty ticket list
/// rather than dropping the notification.
fn resolve_transition(
    config: &Config,
    cache: &Cache,
    kind: VoiceTransitionKind,
    guild_id: GuildId,
    old: Option<&VoiceState>,
    new: &VoiceState,
) -> (VoiceTransition, Vec<TicketMatch>) {
    let guild_ref = cache.guild(guild_id);
    let guild = guild_ref.as_deref();

    let member = new
        .member
        .as_ref()
        .or_else(|| old.and_then(|state| state.member.as_ref()))
        .or_else(|| guild.and_then(|guild| guild.members.get(&new.user_id)));

    let member_name = member
        .map(|member| member.display_name().to_string())
        .unwrap_or_else(|| new.user_id.to_string());

    let channels = guild.map(|guild| &guild.channels);
    let previous = old
        .and_then(|state| state.channel_id)
        .map(|id| voice_channel(channels, id));
    let current = new.channel_id.map(|id| voice_channel(channels, id));

    let tickets = if kind == VoiceTransitionKind::Join {
        lookup_tickets(config, guild_id, guild, member).unwrap_or_else(|e| {
            tracing::error!("Failed to check for open tickets: {}", e);
            Vec::new()
        })
    } else {
        Vec::new()
    };

    let transition = VoiceTransition {
        kind,
        member_name,
        previous,
        current,
    };

    (transition, tickets)
}

fn lookup_tickets(
    config: &Config,
    guild_id: GuildId,
    guild: Option<&Guild>,
    member: Option<&Member>,
) -> Result<Vec<TicketMatch>, AppError> {
    let guild = guild
        .ok_or_else(|| AppError::NotFound(format!("Guild {} is not in the cache", guild_id)))?;
    let member = member.ok_or_else(|| {
        AppError::NotFound(format!("No member data for ticket lookup in guild {}", guild_id))
    })?;

    let owner = TicketOwner::from_member(member);

    let tickets = find_open_tickets(
        &owner,
        guild.id,
        &guild.channels,
        &config.ticket_category_ids,
    );
    for ticket in &tickets {
        tracing::debug!(
            "Possible open ticket for {}: {} ({})",
            owner.username,
            ticket.channel_name,
            ticket.url
        );
    }

    Ok(tickets)
}

/// Resolves a channel name from the cache, falling back to the raw ID.
fn voice_channel(
    channels: Option<&HashMap<ChannelId, GuildChannel>>,
    id: ChannelId,
) -> VoiceChannel {
    let name = channels
        .and_then(|channels| channels.get(&id))
        .map(|channel| channel.name.clone())
        .unwrap_or_else(|| id.to_string());

    VoiceChannel { id, name }
}

fn channel_name(channel: Option<&VoiceChannel>) -> String {
    channel
        .map(|channel| format!("{} ({})", channel.name, channel.id))
        .unwrap_or_else(|| "unknown channel".to_string())
}
