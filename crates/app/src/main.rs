use dioxus::prelude::*;
use shared_types::AppConfig;

mod auth;
mod config;
mod routes;
use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    let loaded = config::load_config();
    let config = &loaded.config;

    let level = if config.features.debug_logging {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("[logger] Failed to initialize: {e}");
    }
    config::log_outcome(loaded);

    tracing::info!(app = %config.app_name, platform = client_platform(), "starting");
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_context_provider::<AppConfig>(config::app_config);
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
