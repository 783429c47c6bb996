use anyhow::Result;
use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the built-in default.
pub fn init() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bike_listings=info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}
