use serde::{Deserialize, Serialize};

/// Product name shown in the navigation shell when none is configured.
pub const DEFAULT_APP_NAME: &str = "Order Management";

/// Feature flags controlling optional behavior of the dashboard.
///
/// Loaded from `config.toml` at startup. Every field defaults to `false`
/// so that a missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Offer one-click demo sign-ins on the login page.
    #[serde(default)]
    pub demo_accounts: bool,
    /// Log at DEBUG instead of INFO.
    #[serde(default)]
    pub debug_logging: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default)]
    pub features: FeatureFlags,
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            features: FeatureFlags::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.demo_accounts);
        assert!(!flags.debug_logging);
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.app_name, "Order Management");
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            demo_accounts = true
            "#,
        )
        .unwrap();
        assert!(config.features.demo_accounts);
        assert!(!config.features.debug_logging);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            app_name = "Dispatch Desk"

            [features]
            demo_accounts = true
            debug_logging = true
            "#,
        )
        .unwrap();
        assert_eq!(config.app_name, "Dispatch Desk");
        assert!(config.features.demo_accounts);
        assert!(config.features.debug_logging);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
