//! Discord bot integration.
//!
//! The bot connects to the gateway, listens for voice state updates and posts
//! notifications about the monitored voice channel. All decisions are made by
//! the services in `crate::service`; the handlers only read the cache and send.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel cache, used for channel names and ticket lookup
//! - `GUILD_VOICE_STATES` - Voice state updates, the only event acted upon
//! - `GUILD_MESSAGES` - Sending to the notification channel
//!
//! None of these are privileged.

pub mod handler;
pub mod start;
