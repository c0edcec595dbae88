use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<LoadedConfig> = OnceLock::new();

/// Name of the config file, relative to the crate root.
const CONFIG_PATH: &str = "config.toml";

/// Contents of `config.toml`, embedded at build time (the web client has no filesystem).
const EMBEDDED_CONFIG: &str = include_str!("../config.toml");

/// Parsed config plus the parse error that forced defaults, if any.
///
/// Parsing happens before the logger exists, so the outcome is carried here
/// and reported by [`log_outcome`] once logging is up.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub parse_error: Option<String>,
}

/// Parse config text, falling back to defaults when it is unparseable.
fn parse_config(contents: &str) -> LoadedConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => LoadedConfig {
            config,
            parse_error: None,
        },
        Err(e) => LoadedConfig {
            config: AppConfig::default(),
            parse_error: Some(format!("Failed to parse {CONFIG_PATH}: {e}")),
        },
    }
}

/// Parse the embedded `config.toml` and store it in the global `OnceLock`.
/// Safe to call multiple times; only the first call has effect.
pub fn load_config() -> &'static LoadedConfig {
    CONFIG.get_or_init(|| parse_config(EMBEDDED_CONFIG))
}

/// Log how loading went. Call after the logger is initialized.
pub fn log_outcome(loaded: &LoadedConfig) {
    if let Some(err) = &loaded.parse_error {
        tracing::warn!("[config] {err}; using defaults");
    }
    tracing::info!("[config] Feature flags: {:?}", loaded.config.features);
}

/// Get the loaded config. Returns defaults if `load_config()` hasn't run yet.
pub fn app_config() -> AppConfig {
    CONFIG
        .get()
        .map(|loaded| loaded.config.clone())
        .unwrap_or_default()
}
