//! Diagnostics go to stderr through a `tracing-subscriber` fmt layer, so they
//! never mix with command output on stdout.
//!
//! The filter comes from `SHELF_LOG` (standard `EnvFilter` syntax). Without it,
//! shelf crates log at `warn`, or at `debug` with `--verbose`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SHELF_LOG";

fn build_filter(verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }
    let level = if verbose { "debug" } else { "warn" };
    EnvFilter::new(format!("warn,shelf={level},shelfapp={level}"))
}

pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(verbose)
        .without_time()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
