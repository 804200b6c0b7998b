//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT_TRACING: Once = Once::new();

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set. Safe to call more than once;
/// only the first call installs anything, and an already-installed global
/// subscriber (e.g. from a test harness) is left in place.
pub fn init_tracing(default_filter: &str) {
    INIT_TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .is_ok();

        if installed {
            tracing::debug!(filter = default_filter, "tracing initialized");
        }
    });
}
