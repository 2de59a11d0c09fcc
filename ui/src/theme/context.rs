use super::types::{ColorScheme, ThemeMode, ThemeSnapshot};
use tokio::sync::watch;

/// Read/write interface every theme consumer depends on.
///
/// Consumers must not keep a [`ColorScheme`] across a mode change; re-read
/// the snapshot, or watch [`subscribe`](ThemeContext::subscribe), instead.
pub trait ThemeContext: Send + Sync {
    fn snapshot(&self) -> ThemeSnapshot;

    fn set_theme(&self, mode: ThemeMode);

    fn toggle_theme(&self);

    /// Receiver notified on every snapshot change.
    fn subscribe(&self) -> watch::Receiver<ThemeSnapshot>;

    fn theme(&self) -> &'static ColorScheme {
        self.snapshot().theme()
    }

    fn theme_mode(&self) -> ThemeMode {
        self.snapshot().theme_mode()
    }

    fn is_dark(&self) -> bool {
        self.snapshot().is_dark()
    }

    fn is_loading(&self) -> bool {
        self.snapshot().is_loading()
    }
}
