//! Structured logging for the Ridgeline demos.
//!
//! Console output via `tracing-subscriber` with uptime timestamps and module
//! paths, filterable through `RUST_LOG` or the config file's `log_level`.

use ridgeline_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter: info everywhere, with wgpu/naga noise turned down.
const DEFAULT_FILTER: &str = "info,wgpu=warn,naga=warn";

/// Initialize the tracing subscriber.
///
/// Filter precedence: `RUST_LOG` if set, then the config's non-empty
/// `debug.log_level`, then [`default_env_filter`]. Call once at startup;
/// a second call panics the way `tracing` double-initialization always does.
pub fn init_logging(config: Option<&Config>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_string(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// An `EnvFilter` with the built-in default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

/// The filter to use for a given config: its `log_level` when non-empty,
/// otherwise the built-in default.
fn filter_string(config: Option<&Config>) -> &str {
    config
        .map(|c| c.debug.log_level.as_str())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_keeps_info_and_quiets_wgpu() {
        let filter = format!("{}", default_env_filter());
        assert!(filter.contains("info"));
        assert!(filter.contains("wgpu=warn"));
    }

    #[test]
    fn config_level_overrides_the_default() {
        let mut config = Config::default();
        assert_eq!(filter_string(Some(&config)), DEFAULT_FILTER);
        config.debug.log_level = "debug".to_string();
        assert_eq!(filter_string(Some(&config)), "debug");
        assert_eq!(filter_string(None), DEFAULT_FILTER);
    }
}
