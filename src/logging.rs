//! Optional installation of a `tracing` subscriber.
//!
//! The library only emits events; it never installs a subscriber on its own.
//! Hosts that already run a subscriber get our events through it. Hosts that
//! don't (C programs, scripting runtimes) can call [`init`] or `by2_log_init`
//! once to get formatted output on stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::Result;

/// Environment variable consulted when no explicit filter is given.
pub const LOG_ENV: &str = "BY2_LOG";

/// Filter used when neither an explicit filter nor [`LOG_ENV`] is set.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Clone, Debug, Default)]
pub struct LogConfig {
    /// `EnvFilter` directives, e.g. `"by2=debug"`.
    pub filter: Option<String>,
    pub with_target: bool,
    pub ansi: bool,
}

impl LogConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Resolve the effective filter: explicit, then `BY2_LOG`, then `"info"`.
    ///
    /// An explicit filter that fails to parse is an error. A malformed
    /// `BY2_LOG` falls back to the default, the same way a missing one does.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        match &self.filter {
            Some(filter) => Ok(EnvFilter::try_new(filter)?),
            None => Ok(EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }
}

/// Install a global `fmt` subscriber writing to stderr.
///
/// Fails with `AlreadyInitialized` if any global subscriber is already set,
/// including one installed by a previous call.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = config.env_filter()?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(config.with_target)
                .with_ansi(config.ansi)
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}
