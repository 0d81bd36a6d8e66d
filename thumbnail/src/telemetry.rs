use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan, prelude::*};

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE),
        )
        .try_init()?;

    Ok(())
}
