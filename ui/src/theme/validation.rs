use super::types::{ColorScheme, parse_hex_color};
use crate::error::AppError;
use crate::validation::Validator;

/// Validation errors specific to theme values
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeValidationError {
    #[error("Invalid color '{value}' for '{field}' in the {scheme} scheme")]
    InvalidColor {
        scheme: String,
        field: String,
        value: String,
    },
    #[error("Unknown theme mode '{value}' (expected 'light' or 'dark')")]
    UnknownMode { value: String },
}

impl From<ThemeValidationError> for AppError {
    fn from(error: ThemeValidationError) -> Self {
        AppError::Theme(error.to_string())
    }
}

/// Checks that every color and gradient stop of a scheme is `#RRGGBB` or `#RRGGBBAA`.
pub struct ColorSchemeValidator;

impl Validator<ColorScheme> for ColorSchemeValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &ColorScheme) -> Result<(), Self::Error> {
        for (field, value) in input.entries() {
            if parse_hex_color(value).is_none() {
                return Err(ThemeValidationError::InvalidColor {
                    scheme: input.name.to_string(),
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{DARK_THEME, LIGHT_THEME};
    use claims::*;

    #[test]
    fn test_builtin_schemes_are_valid() {
        assert_ok!(ColorSchemeValidator.validate(&LIGHT_THEME));
        assert_ok!(ColorSchemeValidator.validate(&DARK_THEME));
    }

    #[test]
    fn test_builtin_schemes_differ_in_background() {
        assert_ne!(LIGHT_THEME.background, DARK_THEME.background);
    }

    #[test]
    fn test_invalid_gradient_stop_is_reported() {
        let broken = ColorScheme {
            name: "broken",
            accent_gradient: ["#60A5FA", "teal"],
            ..DARK_THEME
        };

        let err = assert_err!(ColorSchemeValidator.validate(&broken));
        assert_eq!(
            err,
            ThemeValidationError::InvalidColor {
                scheme: "broken".to_string(),
                field: "accent_gradient[1]".to_string(),
                value: "teal".to_string(),
            }
        );

        let app_error: AppError = err.into();
        assert!(app_error.to_string().contains("accent_gradient[1]"));
    }
}
