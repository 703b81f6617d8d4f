use super::interface::Logger;
use chrono::Utc;
use std::sync::Arc;

/// A namespaced console logger that timestamps every line in a configured
/// local offset.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    namespace: Option<String>,
    timezone: chrono::FixedOffset,
}

impl ConsoleLogger {
    pub fn new(timezone: chrono::FixedOffset) -> Self {
        Self { namespace: None, timezone }
    }

    fn line(&self, level: &str, message: &str) -> String {
        let local_time = Utc::now().with_timezone(&self.timezone);
        let formatted = local_time.format("%Y-%m-%d %H:%M:%S%.3f");
        match &self.namespace {
            Some(namespace) => format!("[{formatted}] {level} {namespace}: {message}"),
            None => format!("[{formatted}] {level} {message}"),
        }
    }
}

impl Logger for ConsoleLogger {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        println!("{}", self.line("INFO", message));
        Ok(())
    }

    fn warn(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        eprintln!("{}", self.line("WARN", message));
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{current}:{namespace}"),
            None => namespace.to_string(),
        };
        Arc::new(ConsoleLogger { namespace: Some(new_namespace), timezone: self.timezone })
    }
}
