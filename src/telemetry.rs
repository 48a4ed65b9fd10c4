//! Tracing initialization.
//!
//! `RUST_LOG` controls the filter; the default keeps this crate at info and
//! everything else at warn. Logs go to stderr so they don't fight the
//! terminal UI on stdout.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,reelquiz=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
