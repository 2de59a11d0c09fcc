use crate::error::{AppError, AppResult};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod defaults;
pub mod theme;
pub mod validation;

pub use app::AppConfig;
pub use theme::ThemeSettings;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable prefix, e.g. `PROMPTDECK_LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "PROMPTDECK";

/// Load configuration from the embedded defaults, the config file and the
/// environment, in increasing order of priority.
///
/// An explicitly given `path` must exist; the default `config.toml` is optional.
pub fn load_config(path: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();

    let file_source = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(CONFIG_FILE_NAME).required(false),
    };
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true);

    let config = match Config::builder()
        .add_source(File::from_str(defaults::DEFAULT_CONFIG, FileFormat::Toml))
        .add_source(file_source)
        .add_source(env_source) // environment entries override file values when present
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::DeserializeError(format!(
                    "Configuration validation failed:\n{}",
                    error_messages.join("\n\n")
                ));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

impl ConfigLoadResult {
    pub fn into_result(self) -> AppResult<AppConfig> {
        match self {
            ConfigLoadResult::Success(config) => Ok(*config),
            ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
                Err(AppError::Config(msg))
            }
        }
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Platform;
    use claims::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        let file = write_config(
            r#"
            [logging]
            level = "debug"

            [theme]
            platform = "android"
            storage_file = "prefs.json"
            max_concurrent_writes = 2
            "#,
        );

        let config = assert_ok!(load_config(Some(file.path())).into_result());
        assert_eq!(config.logging().level(), "debug");
        assert_eq!(config.theme().platform(), Platform::Android);
        assert_eq!(config.theme().max_concurrent_writes(), 2);
        assert_some_eq!(
            config.theme().storage_file(),
            std::path::PathBuf::from("prefs.json")
        );
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let file = write_config("[logging]\nfile = \"custom.log\"\n");

        let config = assert_ok!(load_config(Some(file.path())).into_result());
        assert_eq!(config.logging().level(), "info");
        assert_some_eq!(config.logging().file(), "custom.log");
        assert_eq!(config.theme().platform(), Platform::Desktop);
        assert_eq!(config.theme().max_concurrent_writes(), 1);
        assert_none!(config.theme().storage_file());
    }

    #[test]
    fn test_missing_explicit_file_is_load_error() {
        let result = load_config(Some(Path::new("/definitely/not/here/config.toml")));
        assert_matches!(result, ConfigLoadResult::LoadError(_));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let file = write_config(
            r#"
            [logging]
            level = "loud"

            [theme]
            max_concurrent_writes = 0
            "#,
        );

        let err = assert_err!(load_config(Some(file.path())).into_result());
        let AppError::Config(msg) = err else {
            panic!("expected a configuration error");
        };
        assert!(msg.contains("Unknown log level"));
        assert!(msg.contains("write limit too low"));
    }

    #[test]
    fn test_unknown_platform_is_deserialize_error() {
        let file = write_config("[theme]\nplatform = \"toaster\"\n");

        let result = load_config(Some(file.path()));
        assert_matches!(result, ConfigLoadResult::DeserializeError(_));
    }
}
