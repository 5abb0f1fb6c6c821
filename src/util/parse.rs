use crate::error::config::ConfigError;

/// Parses a non-zero Discord snowflake from an environment variable value.
///
/// # Arguments
/// - `name` - Name of the environment variable, used in error messages
/// - `value` - The raw value to parse; surrounding whitespace is ignored
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed snowflake
/// - `Err(ConfigError::InvalidId)` - Value is not a valid `u64`
/// - `Err(ConfigError::ZeroId)` - Value parsed to zero
pub fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    let trimmed = value.trim();
    let id = trimmed
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidId {
            name: name.to_string(),
            value: trimmed.to_string(),
            source: e,
        })?;

    if id == 0 {
        return Err(ConfigError::ZeroId(name.to_string()));
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflake_with_whitespace() {
        let id = parse_id("VOICE_CHANNEL_ID", " 1413669641062055976 \n").unwrap();
        assert_eq!(id, 1413669641062055976);
    }

    #[test]
    fn rejects_non_numeric() {
        let result = parse_id("VOICE_CHANNEL_ID", "general");
        assert!(matches!(result, Err(ConfigError::InvalidId { .. })));
    }

    #[test]
    fn rejects_empty() {
        let result = parse_id("VOICE_CHANNEL_ID", "");
        assert!(matches!(result, Err(ConfigError::InvalidId { .. })));
    }

    #[test]
    fn rejects_zero() {
        let result = parse_id("VOICE_CHANNEL_ID", "0");
        assert!(matches!(result, Err(ConfigError::ZeroId(_))));
    }
}
