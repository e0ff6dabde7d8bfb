use roster::config::Config;
use roster::ui::{make_config, App};
use roster::user_source::{HttpUserSource, SharedUserSource};
use roster::AppContext;
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();

    let user_source = match HttpUserSource::new(config.users_url.clone()) {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting roster, users endpoint: {}", config.users_url);

    let app_context = AppContext {
        config,
        user_source: SharedUserSource::new(user_source),
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(app_context)
        .launch(App);
}
