//! Tracing subscriber setup.

use super::exporter::{self, SCOPE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Resolves the filter directive: `RUST_LOG`, then `trace_level`, then `"info"`.
#[must_use]
pub fn filter_directive(config: &Config, env: Option<String>) -> String {
    env.filter(|value| !value.trim().is_empty())
        .or_else(|| config.trace_level.clone())
        .unwrap_or_else(|| "info".to_string())
}

/// Installs the global tracing subscriber.
///
/// Always logs to stderr. When `trace_file` is set, spans are also exported as OTLP
/// JSON lines to that file, rotated at 10 MiB with three backups.
///
/// Idempotent: only the first call installs a subscriber; later calls return
/// `false`.
///
/// # Example
///
/// ```rust
/// use userdir::observability::init_tracing;
/// use userdir::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> bool {
    let directive = filter_directive(config, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let otel_layer = config.trace_file.clone().map(|path| {
        let resource = Resource::new(vec![
            KeyValue::new("service.name", SCOPE_NAME),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        ]);
        let provider = exporter::create_tracer_provider(path, resource);
        OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(otel_layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_config_level() {
        let config = Config {
            trace_level: Some("debug".to_string()),
            ..Config::default()
        };
        assert_eq!(filter_directive(&config, Some("warn".into())), "warn");
        assert_eq!(filter_directive(&config, Some("  ".into())), "debug");
        assert_eq!(filter_directive(&config, None), "debug");
        assert_eq!(filter_directive(&Config::default(), None), "info");
    }
}
