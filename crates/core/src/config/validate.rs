use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Ticket endpoint is an absolute http(s) URL
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let url = reqwest::Url::parse(&config.tickets.endpoint).map_err(|e| {
        ConfigError::ValidationError(format!(
            "tickets.endpoint is not a valid URL ({}): {}",
            config.tickets.endpoint, e
        ))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError(format!(
            "tickets.endpoint must use http or https, got {}",
            url.scheme()
        )));
    }

    Ok(())
}
