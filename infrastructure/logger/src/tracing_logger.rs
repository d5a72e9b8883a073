use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` adapter that forwards application messages to `tracing`,
/// tagging each event with the component that emitted it.
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "product_app", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "product_app", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "product_app", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "product_app", component = self.component, "{}", message);
    }
}
