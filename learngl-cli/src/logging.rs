use log::LevelFilter;
use std::sync::Once;

/// How the `learngl` binary sets up `env_logger`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Directives from `--log-filter`, e.g. `learngl_runtime_gl=debug`. Wins over `RUST_LOG`.
    pub env_filter: Option<String>,
    /// Level used when no directives are given at all.
    pub fallback: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            env_filter: None,
            fallback: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Pick the directives to parse: the command line first, then `rust_log`.
    /// Blank directives count as absent.
    fn directives(&self, rust_log: Option<String>) -> Option<String> {
        self.env_filter
            .clone()
            .or(rust_log)
            .filter(|directives| !directives.trim().is_empty())
    }
}

static LOGGER: Once = Once::new();

/// Install the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.directives(std::env::var("RUST_LOG").ok()) {
            Some(directives) => builder.parse_filters(&directives),
            None => builder.filter_level(config.fallback),
        };
        builder
            .write_style(config.write_style)
            .format_timestamp_millis();

        if let Err(e) = builder.try_init() {
            eprintln!("learngl: logger already installed: {e}");
        }
    });
}
