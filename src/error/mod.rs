//! Error types for the relay.
//!
//! `AppError` is the top-level error returned from startup and from the inner
//! body of each event handler. Event handlers never let it escape: it is logged
//! at the handler boundary so one bad event cannot stop the gateway loop.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal, the process exits before connecting to Discord.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size. Fatal during startup, logged and skipped
    /// when raised while handling a single event.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// A guild, channel or member expected in the cache could not be found.
    ///
    /// # Fields
    /// - Message describing what was not found
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
