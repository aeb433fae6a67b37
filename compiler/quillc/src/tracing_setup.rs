use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=quill_eval=debug` or `RUST_LOG=quill_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let layer = HierarchicalLayer::new(2)
            .with_targets(true)
            .with_bracketed_fields(true);
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(layer)
            .try_init();
    });
}
