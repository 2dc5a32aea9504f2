//! Logstash event formatter
//!
//! Renders records as logstash v1 events tagged with a configured `type`.
//! Context fields are prefixed with `ctxt_`, extra fields are merged in
//! directly.

use crate::core::{Formatter, LogRecord};
use serde_json::{Map, Value};

pub struct LogstashFormatter {
    event_type: String,
    host: String,
}

impl LogstashFormatter {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            host: std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string()),
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }
}

impl Formatter for LogstashFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let mut event = Map::new();
        event.insert(
            "@timestamp".to_string(),
            Value::String(record.timestamp.to_rfc3339()),
        );
        event.insert("@version".to_string(), Value::Number(1.into()));
        event.insert("host".to_string(), Value::String(self.host.clone()));
        event.insert(
            "message".to_string(),
            Value::String(record.message.clone()),
        );
        event.insert(
            "type".to_string(),
            Value::String(self.event_type.clone()),
        );
        event.insert(
            "channel".to_string(),
            Value::String(record.channel.clone()),
        );
        event.insert(
            "level".to_string(),
            Value::String(record.level.as_str().to_string()),
        );

        if let Some(context) = record.context.as_object() {
            for (key, value) in context {
                event.insert(format!("ctxt_{}", key), value.clone());
            }
        }
        if let Some(extra) = record.extra.as_object() {
            for (key, value) in extra {
                event.insert(key.clone(), value.clone());
            }
        }

        serde_json::to_string(&Value::Object(event)).unwrap_or_default()
    }
}
