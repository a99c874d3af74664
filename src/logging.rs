use std::sync::Once;

/// Logger configuration.
/// `RUST_LOG` (e.g. "info", "wlzvtx=debug") wins over `default_level` when set.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub default_level: log::LevelFilter,
}
impl LoggingConfig {
    /// Map a `-v` count to a default level.
    pub fn from_verbosity(verbose: u8) -> Self {
        let default_level = match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        LoggingConfig{default_level}
    }
}
impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig::from_verbosity(0)
    }
}

static INIT: Once = Once::new();

/// Initialize the global logger once; later calls are ignored.
/// Logs go to stderr so stdout stays clean for reports.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.default_level);
        }

        builder.target(env_logger::Target::Stderr);
        builder.init();

        log::debug!("logging initialized");
    });
}
