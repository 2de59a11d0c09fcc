use crate::theme::Platform;
use serde::Deserialize;
use std::path::PathBuf;

/// Default upper bound on concurrently running preference writes
pub const DEFAULT_MAX_CONCURRENT_WRITES: usize = 1;

/// Theme subsystem configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeSettings {
    /// Platform whose status bar follows the theme (default: desktop)
    platform: Option<Platform>,
    /// Preference file path (default: platform config directory)
    storage_file: Option<String>,
    max_concurrent_writes: Option<usize>,
}

impl ThemeSettings {
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_default()
    }

    pub fn storage_file(&self) -> Option<PathBuf> {
        self.storage_file.as_deref().map(PathBuf::from)
    }

    pub fn max_concurrent_writes(&self) -> usize {
        self.max_concurrent_writes
            .unwrap_or(DEFAULT_MAX_CONCURRENT_WRITES)
    }
}
