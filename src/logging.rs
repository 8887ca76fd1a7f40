// SPDX-License-Identifier: MIT
//
// Logging setup.
//
// Verbosity is decided once per invocation from the CLI flags and handed to
// `init` as a value. Nothing else in the program reads or changes it.

use eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// How much one invocation logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Default level when `RUST_LOG` is not set.
    pub level: LevelFilter,
}

impl LogConfig {
    /// `0` → info, `1` (`-v`) → debug, `2+` (`-vv`) → trace.
    pub const fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        Self { level }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.level.into())
            .from_env_lossy()
    }
}

/// Install the global subscriber. Progress goes to stderr so that
/// `--stdout` output stays clean.
pub fn init(config: LogConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to initialize logging: {e}"))
}

// ─── Tests ──────────────────────────────────────────────────────────────────
