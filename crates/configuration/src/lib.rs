use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{ApiSettings, Settings};

/// Loads the application configuration.
///
/// Settings are layered: defaults first, then an optional `config.toml`, then
/// environment variables prefixed with `INSIGHTS` (nested keys separated by
/// `__`, e.g. `INSIGHTS_API__AUTH_TOKEN`). The auth token has no default and
/// must be supplied; a missing or blank token fails here, at startup, rather
/// than on the first request.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .set_default("api.base_url", "https://store.yasoon.com/api/analytics")?
        .set_default("api.timeout_secs", 10_i64)?
        .add_source(config::File::with_name("config.toml").required(false))
        .add_source(config::Environment::with_prefix("INSIGHTS").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    validate(&settings)?;

    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.api.auth_token.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "api.auth_token must not be empty (set INSIGHTS_API__AUTH_TOKEN)".to_string(),
        ));
    }
    if settings.api.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "api.timeout_secs must be at least 1".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(auth_token: &str, timeout_secs: u64) -> Settings {
        Settings {
            api: ApiSettings {
                base_url: "https://store.yasoon.com/api/analytics".to_string(),
                auth_token: auth_token.to_string(),
                timeout_secs,
            },
        }
    }

    #[test]
    fn accepts_a_populated_configuration() {
        assert!(validate(&settings("secret-token", 10)).is_ok());
    }

    #[test]
    fn rejects_a_blank_auth_token() {
        assert!(matches!(
            validate(&settings("   ", 10)),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_a_zero_timeout() {
        assert!(matches!(
            validate(&settings("secret-token", 0)),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
