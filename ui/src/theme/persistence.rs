use super::types::ThemeMode;
use crate::error::AppResult;
use std::sync::Arc;
use storage::KeyValueStore;

/// Durable store key holding the last selected theme mode
pub const THEME_STORAGE_KEY: &str = "app_theme_mode";

/// Reads and writes the theme mode under [`THEME_STORAGE_KEY`].
#[derive(Clone)]
pub struct ThemePersistence {
    store: Arc<dyn KeyValueStore>,
}

impl ThemePersistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the stored mode, or `None` when nothing usable is stored.
    ///
    /// Values other than `"light"` and `"dark"` count as no preference.
    pub async fn load_mode(&self) -> AppResult<Option<ThemeMode>> {
        let Some(value) = self.store.get(THEME_STORAGE_KEY).await? else {
            return Ok(None);
        };

        match ThemeMode::from_stored(&value) {
            Some(mode) => Ok(Some(mode)),
            None => {
                log::warn!("Ignoring invalid stored theme mode '{value}'");
                Ok(None)
            }
        }
    }

    pub async fn save_mode(&self, mode: ThemeMode) -> AppResult<()> {
        self.store.set(THEME_STORAGE_KEY, mode.as_str()).await?;
        log::debug!("Persisted theme mode '{mode}'");
        Ok(())
    }
}
