use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable holds something that is not a Discord snowflake.
    #[error("Invalid ID in {name} '{value}': {source}")]
    InvalidId {
        /// Name of the environment variable
        name: String,
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Snowflakes are never zero, and serenity's ID types reject it.
    #[error("Invalid ID in {0}: IDs must be non-zero")]
    ZeroId(String),
}
