//! Logging initialisation for the command line driver.
//!
//! Built on `tracing-subscriber`; everything goes to stderr so the output
//! artifact is never mixed with log lines.

use std::io;

use tracing::Level;
use tracing_subscriber::{filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Installs the global subscriber; events more verbose than `level` are dropped.
pub fn init(level: Level) {
    let targets = Targets::new().with_default(level);

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_writer(io::stderr)
        .with_filter(targets);

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(stderr_layer)
        .try_init();
}
