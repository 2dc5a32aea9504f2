//! Log record structure

use super::level::Level;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// One unit of log data flowing through the pipeline.
///
/// `context` carries caller-supplied fields for a single log call; `extra`
/// carries metadata injected by processors. Both are JSON objects in the
/// normal case, but `extra` tolerates non-object values and is coerced to an
/// empty object the first time a processor writes to it.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub channel: String,
    pub level: Level,
    pub message: String,
    pub context: Value,
    pub extra: Value,
}

impl LogRecord {
    pub fn new(channel: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            channel: channel.into(),
            level,
            message: message.into(),
            context: Value::Object(Map::new()),
            extra: Value::Object(Map::new()),
        }
    }

    pub fn with_context(mut self, context: Value) -> Self {
        self.context = context;
        self
    }

    /// Mutable access to `extra` as an object, coercing any non-object value
    /// to an empty map first.
    pub fn extra_object_mut(&mut self) -> &mut Map<String, Value> {
        if !self.extra.is_object() {
            self.extra = Value::Object(Map::new());
        }
        self.extra
            .as_object_mut()
            .expect("extra coerced to object in previous line")
    }
}
