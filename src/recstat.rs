use std::io;

use anyhow::Result;
use recstat::probe::RecordingProbe;
use recstat::runner::Runner;
use recstat::widget::RecordingWidget;
use recstat::{ConfigManager, DEFAULT_LOG_LEVEL, VERSION};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize the logger. Logs go to stderr so stdout stays a clean
    // widget stream for the consuming bar.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RECSTAT_LOG")
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_writer(io::stderr)
        .init();

    // Load config
    let config_manager = ConfigManager::new()?;
    let config = config_manager.load()?;
    // save back the config to create the file if it doesn't exist
    config_manager.save(&config)?;

    let probe = RecordingProbe::new()?;
    let widget = RecordingWidget::new(probe, config.glyphs());

    let mut runner = Runner::new();
    runner.register(Box::new(widget), config.interval());

    info!(
        version = VERSION,
        config = %config_manager.config_path().display(),
        "recstat ready"
    );

    runner.run(&mut io::stdout().lock())
}
