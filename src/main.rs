use anyhow::Result;
use serverless_routing::config::{LogFormat, LoggingSettings, Settings};
use serverless_routing::log_messages::application as log;
use serverless_routing::Application;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match logging.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

fn main() -> Result<()> {
    let settings = Settings::new()?;
    init_tracing(&settings.logging);

    info!("{}", log::STARTING);

    let app = Application::new(settings)?;
    app.run()?;

    Ok(())
}
