use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::presentation::config::LoggingSettings;

/// Initialize the tracing subscriber. `RUST_LOG` wins when set; otherwise
/// the configured level seeds the filter with debug output for this crate
/// and tower-http.
pub fn init_tracing(config: &LoggingSettings, port: u16) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},filesense=debug,tower_http=debug",
            config.level
        ))
    });

    if config.enable_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    }

    tracing::info!(
        port = port,
        level = %config.level,
        json_format = config.enable_json,
        "Server initialized"
    );
}
