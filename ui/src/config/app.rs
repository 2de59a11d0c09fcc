use super::{
    LoggingConfig, theme::ThemeSettings,
    validation::{ConfigValidationError, VALID_LOG_LEVELS},
};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    theme: ThemeSettings,
}

impl AppConfig {
    /// Validate the configuration against defined limits
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let level = self.logging.level().to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging.level().to_string(),
            });
        }

        if self.theme.max_concurrent_writes() < 1 {
            errors.push(ConfigValidationError::MaxConcurrentWrites {
                configured: self.theme.max_concurrent_writes(),
                min_limit: 1,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn theme(&self) -> &ThemeSettings {
        &self.theme
    }
}
