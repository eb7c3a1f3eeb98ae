//! Tracing setup for the articles CLI
//!
//! Usage:
//!   articles --debug serve ...             # Debug logging to console
//!   RUST_LOG=articles_server=debug articles serve  # Fine-grained log control
//!
//! `RUST_LOG` always wins over `--debug` when set.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Default to debug level instead of info
    pub debug: bool,
}

impl TracingConfig {
    fn default_directive(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info,tower_http=debug"
        }
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_selects_directive() {
        assert_eq!(TracingConfig { debug: true }.default_directive(), "debug");
        assert!(TracingConfig::default().default_directive().starts_with("info"));
    }
}
