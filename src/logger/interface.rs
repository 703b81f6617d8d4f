use std::sync::Arc;

/// A namespaced logger. Callers are expected to swallow its own I/O errors
/// at the call site (`let _ = logger.info(...)`) rather than propagate them.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn warn(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger>;
}
