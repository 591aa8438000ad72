use marquee::config::Config;
use marquee::secure_config::SecureConfig;
use marquee::ui::{self, AppContext};
use tracing::info;

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    info!("Starting marquee");

    let secure_config = SecureConfig::new();
    let config = Config::load(&secure_config);
    let context = AppContext::new(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(ui::make_config())
        .with_context(context)
        .launch(ui::App);
}
