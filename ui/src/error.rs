use std::fmt::Display;

/// Application-wide error type for the Promptdeck shell.
///
/// Theme operations never hand these errors to UI consumers. They are
/// produced by the persistence and configuration layers and absorbed at the
/// component boundary, where they are logged.
///
/// # Error Categories
///
/// - [`Storage`] - Durable store read or write failures
/// - [`Config`] - Configuration loading and validation errors
/// - [`Theme`] - Invalid color scheme definitions
///
/// # Examples
///
/// ```no_run
/// use promptdeck::error::{AppError, AppResult};
///
/// fn log_app_error(result: AppResult<()>) {
///     match result {
///         Ok(()) => {}
///         Err(AppError::Storage(msg)) => log::warn!("Preference not persisted: {msg}"),
///         Err(other) => log::error!("{other}"),
///     }
/// }
/// ```
///
/// [`Storage`]: AppError::Storage
/// [`Config`]: AppError::Config
/// [`Theme`]: AppError::Theme
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Durable store failures.
    ///
    /// # Recovery
    /// - Reads fall back to defaults
    /// - Writes keep the in-memory state authoritative for the session
    Storage(String),

    /// Configuration loading and validation errors.
    ///
    /// # Recovery
    /// - Fix the configuration file or environment and restart
    Config(String),

    /// A color scheme failed validation.
    Theme(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Storage(msg) => write!(f, "Storage Error: {msg}"),
            AppError::Config(msg) => write!(f, "Configuration Error: {msg}"),
            AppError::Theme(msg) => write!(f, "Theme Error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<storage::StorageError> for AppError {
    fn from(err: storage::StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
