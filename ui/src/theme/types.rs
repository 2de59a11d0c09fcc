use super::validation::ThemeValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// The two-valued selector driving which color scheme is active.
///
/// This is the only piece of theme state that is persisted, as the literal
/// strings `"light"` and `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Parses a persisted value. Only the exact strings `"light"` and
    /// `"dark"` are recognised.
    pub fn from_stored(value: &str) -> Option<ThemeMode> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeMode::from_stored(s).ok_or_else(|| ThemeValidationError::UnknownMode {
            value: s.to_string(),
        })
    }
}

/// Three-stop gradient preset
pub type Gradient3 = [&'static str; 3];

/// Two-stop gradient preset
pub type Gradient2 = [&'static str; 2];

/// Complete, immutable set of named colors for one theme mode.
///
/// Only two instances exist, [`LIGHT_THEME`](super::LIGHT_THEME) and
/// [`DARK_THEME`](super::DARK_THEME); use [`ColorScheme::for_mode`] to pick one.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub name: &'static str,

    // === Brand Colors ===
    pub primary: &'static str,
    pub secondary: &'static str,

    // === Layout Colors ===
    pub background: &'static str,
    pub surface: &'static str,
    pub card: &'static str,
    pub border: &'static str,

    // === Text Colors ===
    pub text: &'static str,
    pub text_secondary: &'static str,

    // === Accent Colors ===
    pub accent1: &'static str,
    pub accent2: &'static str,
    pub accent3: &'static str,
    pub accent4: &'static str,
    pub accent5: &'static str,

    // === Semantic Colors ===
    pub error: &'static str,
    pub success: &'static str,
    pub warning: &'static str,

    // === Gradient Presets ===
    pub primary_gradient: Gradient3,
    pub background_gradient: Gradient3,
    pub accent_gradient: Gradient2,
}

impl ColorScheme {
    pub fn for_mode(mode: ThemeMode) -> &'static ColorScheme {
        match mode {
            ThemeMode::Light => &super::LIGHT_THEME,
            ThemeMode::Dark => &super::DARK_THEME,
        }
    }

    /// Every color of the scheme as `(field, value)`, gradient stops included.
    pub fn entries(&self) -> Vec<(String, &'static str)> {
        let mut entries: Vec<(String, &'static str)> = [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("background", self.background),
            ("surface", self.surface),
            ("card", self.card),
            ("border", self.border),
            ("text", self.text),
            ("text_secondary", self.text_secondary),
            ("accent1", self.accent1),
            ("accent2", self.accent2),
            ("accent3", self.accent3),
            ("accent4", self.accent4),
            ("accent5", self.accent5),
            ("error", self.error),
            ("success", self.success),
            ("warning", self.warning),
        ]
        .into_iter()
        .map(|(field, value)| (field.to_string(), value))
        .collect();

        let gradients: [(&str, &[&'static str]); 3] = [
            ("primary_gradient", &self.primary_gradient),
            ("background_gradient", &self.background_gradient),
            ("accent_gradient", &self.accent_gradient),
        ];
        for (field, stops) in gradients {
            for (i, stop) in stops.iter().enumerate() {
                entries.push((format!("{field}[{i}]"), *stop));
            }
        }

        entries
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into RGBA components. Alpha defaults to 255.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 4]> {
    let digits = hex.strip_prefix('#')?;
    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return None;
    }

    let component = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let alpha = if digits.len() == 8 { component(6)? } else { 255 };
    Some([component(0)?, component(2)?, component(4)?, alpha])
}

/// The value exposed to theme consumers.
///
/// `theme` and `is_dark` are derived from `theme_mode` on construction, so a
/// snapshot never pairs the dark flag with the light scheme or the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeSnapshot {
    theme: &'static ColorScheme,
    theme_mode: ThemeMode,
    is_dark: bool,
    is_loading: bool,
}

impl ThemeSnapshot {
    pub fn new(theme_mode: ThemeMode, is_loading: bool) -> Self {
        Self {
            theme: ColorScheme::for_mode(theme_mode),
            theme_mode,
            is_dark: theme_mode.is_dark(),
            is_loading,
        }
    }

    pub fn theme(&self) -> &'static ColorScheme {
        self.theme
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}
