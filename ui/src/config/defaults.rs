/// Default configuration file embedded in the binary
pub const DEFAULT_CONFIG: &str = include_str!("../../../config.default.toml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_default_config_is_not_empty() {
        assert!(!DEFAULT_CONFIG.is_empty());
        assert!(DEFAULT_CONFIG.contains("[logging]"));
        assert!(DEFAULT_CONFIG.contains("[theme]"));
    }
}
