use thiserror::Error;

/// Errors raised by [`KeyValueStore`](crate::store::KeyValueStore) implementations.
///
/// Callers in the UI layer treat every variant as non-fatal: a failed read
/// falls back to defaults and a failed write only loses durability.
///
/// # Examples
///
/// ```no_run
/// use storage::{KeyValueStore, StorageError};
///
/// async fn read_or_default(store: &dyn KeyValueStore) -> String {
///     match store.get("app_theme_mode").await {
///         Ok(Some(value)) => value,
///         Ok(None) => "dark".to_string(),
///         Err(StorageError::Corrupt { path, reason }) => {
///             log::warn!("Ignoring corrupt store {path}: {reason}");
///             "dark".to_string()
///         }
///         Err(e) => {
///             log::warn!("Store read failed: {e}");
///             "dark".to_string()
///         }
///     }
/// }
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on '{path}': {reason}")]
    Io { path: String, reason: String },

    /// The backing file exists but does not hold a JSON object of strings.
    #[error("Corrupt store file '{path}': {reason}")]
    Corrupt { path: String, reason: String },

    /// Encoding the store contents failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The store refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        StorageError::Io {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}
