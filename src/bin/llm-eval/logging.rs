use env_logger::Env;

use crate::config::LoggingConfig;

/// Initialises the global logger; `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig, debug: bool) -> anyhow::Result<()> {
    let level = if debug { "debug" } else { config.level.as_str() };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}
