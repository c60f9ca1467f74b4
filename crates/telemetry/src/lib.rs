//! Tracing subscriber bootstrap.

use anyhow::{anyhow, Context};
use bookshelf_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter,
};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` directives take precedence over `telemetry.log_level`.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level(settings)?.into())
        .from_env_lossy();

    let fmt_layer = match settings.log_format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Pretty => fmt::layer().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    tracing::info!(
        target: "bookshelf-telemetry",
        level = %settings.log_level,
        format = ?settings.log_format,
        "telemetry initialized"
    );

    Ok(())
}

fn default_level(settings: &TelemetrySettings) -> anyhow::Result<LevelFilter> {
    settings
        .log_level
        .parse::<LevelFilter>()
        .with_context(|| format!("invalid telemetry.log_level '{}'", settings.log_level))
}
