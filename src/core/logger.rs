//! Main logger implementation

use super::{
    error::Result, handler::Handler, level::Level, processor::Processor, record::LogRecord,
};
use parking_lot::Mutex;
use serde_json::Value;

/// A named logger owning an ordered chain of handlers and processors.
///
/// Loggers are built by the factory and shared behind an `Arc`; the handler
/// chain sits behind a mutex because sinks need `&mut` access to write.
/// Processors run on every record before any handler sees it.
pub struct Logger {
    name: String,
    handlers: Mutex<Vec<Box<dyn Handler>>>,
    processors: Vec<Box<dyn Processor>>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Logger {
    pub fn new(
        name: impl Into<String>,
        handlers: Vec<Box<dyn Handler>>,
        processors: Vec<Box<dyn Processor>>,
    ) -> Self {
        Self {
            name: name.into(),
            handlers: Mutex::new(handlers),
            processors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.lock().len()
    }

    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    pub fn log(&self, level: Level, message: &str) {
        self.log_with_context(level, message, Value::Object(serde_json::Map::new()));
    }

    pub fn log_with_context(&self, level: Level, message: &str, context: Value) {
        let mut record = LogRecord::new(&self.name, level, message).with_context(context);

        for processor in &self.processors {
            processor.process(&mut record);
        }

        let mut handlers = self.handlers.lock();
        for (idx, handler) in handlers.iter_mut().enumerate() {
            if !handler.is_handling(record.level) {
                continue;
            }
            if let Err(e) = handler.handle(&record) {
                eprintln!(
                    "[LOGGER ERROR] handler #{} ({}) failed: {}",
                    idx,
                    handler.name(),
                    e
                );
            }
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn notice(&self, message: &str) {
        self.log(Level::Notice, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    pub fn critical(&self, message: &str) {
        self.log(Level::Critical, message);
    }

    pub fn alert(&self, message: &str) {
        self.log(Level::Alert, message);
    }

    pub fn emergency(&self, message: &str) {
        self.log(Level::Emergency, message);
    }

    /// Flush every handler, returning the first error encountered.
    pub fn flush(&self) -> Result<()> {
        let mut handlers = self.handlers.lock();
        for handler in handlers.iter_mut() {
            handler.flush()?;
        }
        Ok(())
    }
}
