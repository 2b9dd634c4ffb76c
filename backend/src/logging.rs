use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogFormat;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber; later calls are no-ops.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn init_tracing(format: LogFormat) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = fmt().with_env_filter(filter).with_target(true);
        let result = match format {
            LogFormat::Plain => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
        if let Err(e) = result {
            eprintln!("tracing subscriber already installed: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing(LogFormat::Plain);
        init_tracing(LogFormat::Json);
        tracing::info!("still logging after repeated init");
    }
}
