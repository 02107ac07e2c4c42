//! Logging setup for the `svue` binary.
//!
//! Structured logging goes through `tracing`; the CLI verbosity flags pick
//! the level and `RUST_LOG` overrides everything when set.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Initialize the global tracing subscriber. Call once at startup.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Our crates at the requested level, external crates at warn.
        EnvFilter::new(format!(
            "warn,svue_cli={level},svue_decode={level},svue_diff={level},svue_model={level}",
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time().with_target(false))
        .init();
}
