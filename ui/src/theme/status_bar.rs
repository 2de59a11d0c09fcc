use super::types::ThemeSnapshot;
use serde::Deserialize;
use std::sync::Arc;

/// Status bar text and icon style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStyle {
    /// Light text and icons, for dark backgrounds
    LightContent,
    /// Dark text and icons, for light backgrounds
    DarkContent,
}

impl BarStyle {
    pub fn for_dark(is_dark: bool) -> BarStyle {
        if is_dark {
            BarStyle::LightContent
        } else {
            BarStyle::DarkContent
        }
    }
}

/// Host platform, which decides how much of the status bar we can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Web,
    #[default]
    Desktop,
}

impl Platform {
    pub fn has_status_bar(self) -> bool {
        matches!(self, Platform::Ios | Platform::Android)
    }

    pub fn supports_background_color(self) -> bool {
        self == Platform::Android
    }
}

/// Platform status bar primitives.
///
/// Implementations must not call back into the theme controller.
pub trait StatusBar: Send + Sync {
    fn set_bar_style(&self, style: BarStyle);

    /// Only called on platforms where [`Platform::supports_background_color`] holds.
    fn set_background_color(&self, color: &str);
}

/// Status bar that only logs what it is asked to do.
#[derive(Debug, Default)]
pub struct LoggingStatusBar;

impl StatusBar for LoggingStatusBar {
    fn set_bar_style(&self, style: BarStyle) {
        log::info!("Status bar style set to {style:?}");
    }

    fn set_background_color(&self, color: &str) {
        log::info!("Status bar background set to {color}");
    }
}

#[derive(Debug, Default)]
pub struct NoopStatusBar;

impl StatusBar for NoopStatusBar {
    fn set_bar_style(&self, _style: BarStyle) {}

    fn set_background_color(&self, _color: &str) {}
}

/// Keeps the platform status bar in step with theme snapshots, skipping
/// updates whose inputs (`is_dark`, background color) did not change.
pub(crate) struct StatusBarSync {
    platform: Platform,
    bar: Arc<dyn StatusBar>,
    last_applied: Option<(bool, &'static str)>,
}

impl StatusBarSync {
    pub(crate) fn new(platform: Platform, bar: Arc<dyn StatusBar>) -> Self {
        Self {
            platform,
            bar,
            last_applied: None,
        }
    }

    /// Returns whether the platform status bar was touched.
    pub(crate) fn apply(&mut self, snapshot: &ThemeSnapshot) -> bool {
        if !self.platform.has_status_bar() {
            return false;
        }

        let inputs = (snapshot.is_dark(), snapshot.theme().background);
        if self.last_applied == Some(inputs) {
            return false;
        }
        self.last_applied = Some(inputs);

        let style = BarStyle::for_dark(snapshot.is_dark());
        log::debug!("Syncing status bar: {style:?} on {:?}", self.platform);
        self.bar.set_bar_style(style);
        if self.platform.supports_background_color() {
            self.bar.set_background_color(snapshot.theme().background);
        }
        true
    }
}
