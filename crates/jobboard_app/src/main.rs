mod app;
mod config;
mod effects;
mod input;
mod logging;
mod render;
mod session;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let path = config::AppConfig::default_path();
    let config = config::AppConfig::load(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    let destination = if config.log_to_terminal {
        logging::LogDestination::Both
    } else {
        logging::LogDestination::File
    };
    logging::initialize(destination, jobboard_logging::level_from_name(&config.log_level));

    app::run_app(config)
}
