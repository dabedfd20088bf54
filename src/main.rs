//! MinEE UI - Main Entry Point

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use minee_ui::app::application::run_app;
use minee_ui::domain::config::LoggingConfig;
use minee_ui::helpers::get_or_create_data_dir;
use minee_ui::services::ContentBackend;
use minee_ui::utils::config_store;

/// Install the subscriber; `RUST_LOG` overrides the configured level.
///
/// The returned guard flushes the log file and must live until exit.
fn init_tracing(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .context("invalid logging.level")?;

    let (file_layer, guard) = if config.file {
        let dir = get_or_create_data_dir()?;
        let appender = tracing_appender::rolling::daily(dir, "minee-ui.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (
            Some(fmt::layer().with_ansi(false).with_writer(writer)),
            Some(guard),
        )
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    Ok(guard)
}

fn main() -> anyhow::Result<()> {
    // MINEE_CONFIG points at an alternative file, e.g. demos/config.toml
    let config_path = match std::env::var_os("MINEE_CONFIG") {
        Some(path) => path.into(),
        None => config_store::config_path()?,
    };
    let config = config_store::load_or_init(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let _guard = init_tracing(&config.logging)?;
    tracing::info!("Starting MinEE UI with {}", config_path.display());

    let backend = ContentBackend::from_config(&config.server)?;
    run_app(config, backend);
    Ok(())
}
