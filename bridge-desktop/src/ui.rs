//! Shell adapters for headless hosts

use bridge_traits::ui::Notifier;
use tracing::{info, warn};

/// Notifier that routes notifications to the tracing pipeline.
///
/// Useful for headless hosts and tests; GUI shells supply their own toast
/// implementation.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        warn!(notification = "error", "{}", message);
    }

    fn notify_info(&self, message: &str) {
        info!(notification = "info", "{}", message);
    }
}
