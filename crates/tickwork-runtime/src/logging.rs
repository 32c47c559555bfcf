//! `env_logger` setup for hosts of the frame loop
//!
//! The crate itself only writes through the `log` facade. A host binary calls
//! [`init_logging`] once before its first tick to see clock and ticker output.

use std::sync::Once;

/// Level used when neither the config nor `RUST_LOG` names a filter
const FALLBACK_FILTER: &str = "info";

/// How the host wants log output filtered and styled
///
/// `filter` uses `env_logger` directive syntax, e.g. `"debug"` or
/// `"tickwork_runtime=trace"`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Filter directives in effect: the explicit filter, then `env`, then `info`
    fn resolve_filter(&self, env: Option<String>) -> String {
        self.filter
            .clone()
            .or(env)
            .unwrap_or_else(|| FALLBACK_FILTER.to_string())
    }
}

static INIT: Once = Once::new();

/// Install the global logger on first call; later calls do nothing.
///
/// A logger installed earlier by the embedding process is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());

        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .try_init()
            .is_ok();

        if installed {
            log::debug!("logger installed with filter '{filter}'");
        }
    });
}
