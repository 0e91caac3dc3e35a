//! Logging init: human-readable lines on stderr.
//!
//! `-v` raises this crate and the CLI to debug; `RUST_LOG` wins over both.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";
const VERBOSE_FILTER: &str = "info,tikdl_core=debug,tikdl=debug";

/// Filter directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Install the global stderr subscriber. Errors if one is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!("verbose logging enabled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_crate_level() {
        assert_eq!(default_directive(false), "info");
        assert!(default_directive(true).contains("tikdl_core=debug"));
    }

    #[test]
    fn second_init_fails_instead_of_panicking() {
        let _ = init_logging(false);
        assert!(init_logging(true).is_err());
    }
}
