use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Defaults to `info` unless
/// `RUST_LOG` says otherwise.
pub fn init_tracing_subscriber() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init()?;

    Ok(())
}
