//! # Theme System Module
//!
//! Process-wide light/dark theming for the Promptdeck shell. The module owns
//! the current theme mode, restores it from the durable store at startup,
//! saves every change, and keeps the platform status bar in step with the
//! active color scheme.
//!
//! ## Architecture
//!
//! - **[`ThemeController`]** - Owns the mode and publishes [`ThemeSnapshot`]s
//! - **[`ThemeContext`]** - Narrow interface consumers depend on
//! - **[`ThemePersistence`]** - Binds the durable store to the theme key
//! - **[`StatusBar`]** - Platform status bar primitives driven on change
//! - **Color schemes** - [`LIGHT_THEME`] and [`DARK_THEME`], the only two
//!   [`ColorScheme`] instances
//!
//! ## Basic Usage
//!
//! ```no_run
//! use promptdeck::theme::{LoggingStatusBar, Platform, ThemeController, ThemeDeps, ThemeMode};
//! use std::sync::Arc;
//! use storage::FileStore;
//!
//! # async fn demo() {
//! let deps = ThemeDeps::new(
//!     Arc::new(FileStore::new(FileStore::default_location())),
//!     Arc::new(LoggingStatusBar),
//! )
//! .with_platform(Platform::Android);
//! let controller = ThemeController::new(deps);
//!
//! controller.wait_until_loaded().await;
//! controller.set_theme(ThemeMode::Light);
//! let background = controller.snapshot().theme().background;
//! # }
//! ```
//!
//! ## Error Handling and Fallbacks
//!
//! - **Missing or invalid saved mode** - Starts on the default dark theme
//! - **Unreadable store** - Logged, starts on the default dark theme
//! - **Unwritable store** - Logged, the in-memory mode stays authoritative
//!
//! No theme operation returns an error to its caller.

pub mod context;
pub mod controller;
pub mod palette;
pub mod persistence;
pub mod status_bar;
pub mod types;
pub mod validation;

pub use context::ThemeContext;
pub use controller::{ThemeController, ThemeDeps};
pub use palette::{DARK_THEME, LIGHT_THEME};
pub use persistence::{THEME_STORAGE_KEY, ThemePersistence};
pub use status_bar::{BarStyle, LoggingStatusBar, NoopStatusBar, Platform, StatusBar};
pub use types::{ColorScheme, Gradient2, Gradient3, ThemeMode, ThemeSnapshot};
pub use validation::{ColorSchemeValidator, ThemeValidationError};
