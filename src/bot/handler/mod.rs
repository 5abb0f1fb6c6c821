use std::sync::Arc;

use serenity::all::{Context, EventHandler, Ready, VoiceState};
use serenity::async_trait;

use crate::config::Config;

pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub config: Arc<Config>,
}

impl Handler {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.config, ctx, ready).await;
    }

    /// Called when a member joins, leaves or moves between voice channels, or
    /// changes mute/deafen state
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.config, ctx, old, new).await;
    }
}
