// entsift/src/logger.rs
//! Logger bootstrap for the CLI.
//!
//! Wraps `env_logger` so that tests and the binary share one idempotent
//! initialization path. `RUST_LOG` is honored unless an explicit level is
//! passed (quiet/debug flags).
//! License: MIT OR APACHE 2.0

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once. Subsequent calls are no-ops.
///
/// With `Some(level)` the given filter overrides `RUST_LOG`; with `None`
/// the environment decides and the default is `warn`.
pub fn init_logger(level: Option<log::LevelFilter>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn"),
        );
        if let Some(level) = level {
            builder.filter_level(level);
        }
        builder.format_timestamp(None);
        // try_init: another harness may already have installed a logger.
        let _ = builder.try_init();
    });
}
