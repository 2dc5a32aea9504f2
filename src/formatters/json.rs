//! JSON formatter for structured logging
//!
//! Serializes each record as one single-line JSON object, compatible with
//! log aggregation tools like ELK and Loki.

use crate::core::{Formatter, LogRecord};

#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> String {
        serde_json::to_string(record).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;
    use serde_json::json;

    #[test]
    fn test_serializes_record_fields() {
        let mut record = LogRecord::new("app", Level::Error, "boom")
            .with_context(json!({ "user_id": 123 }));
        record
            .extra_object_mut()
            .insert("request_id".to_string(), json!("abc"));

        let parsed: serde_json::Value =
            serde_json::from_str(&JsonFormatter::new().format(&record)).unwrap();

        assert_eq!(parsed["level"], "ERROR");
        assert_eq!(parsed["channel"], "app");
        assert_eq!(parsed["message"], "boom");
        assert_eq!(parsed["context"]["user_id"], 123);
        assert_eq!(parsed["extra"]["request_id"], "abc");
        assert!(parsed["timestamp"].is_string());
    }

    #[test]
    fn test_output_is_single_line() {
        let record = LogRecord::new("app", Level::Info, "hello");
        let formatted = JsonFormatter::new().format(&record);
        assert!(!formatted.contains('\n'));
    }
}
