use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::RunMode;

const DEFAULT_FILTER: &str = "request_binder=info";

/// Installs the global subscriber. Lambda logs are JSON for CloudWatch,
/// local runs get compact human readable lines.
pub fn init_logger(run_mode: RunMode) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    match run_mode {
        RunMode::Lambda => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json().without_time())
            .init(),
        RunMode::Local => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.compact())
            .init(),
    }
}
