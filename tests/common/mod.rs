use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Routes `log` and `tracing` output to the test writer, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_test_writer());
        let _ = tracing::subscriber::set_global_default(subscriber);
        let _ = tracing_log::LogTracer::init();
    });
}
