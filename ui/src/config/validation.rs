use super::app::AppConfig;

/// Log levels accepted by `logging.level`
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid logging.level: {configured}")]
    LogLevel { configured: String },
    #[error("Invalid theme.max_concurrent_writes: {configured} (min: {min_limit})")]
    MaxConcurrentWrites { configured: usize, min_limit: usize },
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown log level!\n\n\
                    Your configured value: {configured}\n\
                    Valid values: {}\n\n\
                    Please update [logging] level in config.toml.",
                    VALID_LOG_LEVELS.join(", ")
                )
            }
            ConfigValidationError::MaxConcurrentWrites {
                configured,
                min_limit,
            } => {
                format!(
                    "Preference write limit too low!\n\n\
                    Your configured value: {configured}\n\
                    Minimum: {min_limit}\n\n\
                    Please update [theme] max_concurrent_writes in config.toml."
                )
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}
