//! Extra-fields processor
//!
//! Merges a fixed, configuration-supplied mapping into every record's
//! `extra`. Configured keys overwrite same-named existing keys.

use crate::core::{LogRecord, Processor};
use serde_json::{Map, Value};

pub struct ExtraFieldsProcessor {
    fields: Map<String, Value>,
}

impl ExtraFieldsProcessor {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl Processor for ExtraFieldsProcessor {
    fn process(&self, record: &mut LogRecord) {
        let extra = record.extra_object_mut();
        for (key, value) in &self.fields {
            extra.insert(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_merges_into_existing_extra() {
        let processor = ExtraFieldsProcessor::new(fields(json!({ "a": "b" })));
        let mut record = LogRecord::new("app", Level::Info, "hello");
        record.extra = json!({ "c": "d" });

        processor.process(&mut record);

        assert_eq!(record.extra, json!({ "c": "d", "a": "b" }));
    }

    #[test]
    fn test_configured_keys_overwrite() {
        let processor = ExtraFieldsProcessor::new(fields(json!({ "a": "new" })));
        let mut record = LogRecord::new("app", Level::Info, "hello");
        record.extra = json!({ "a": "old" });

        processor.process(&mut record);

        assert_eq!(record.extra, json!({ "a": "new" }));
    }

    #[test]
    fn test_non_object_extra_treated_as_empty() {
        let processor = ExtraFieldsProcessor::new(fields(json!({ "a": "b" })));
        let mut record = LogRecord::new("app", Level::Info, "hello");
        record.extra = json!("not a map");

        processor.process(&mut record);

        assert_eq!(record.extra, json!({ "a": "b" }));
    }

    #[test]
    fn test_empty_mapping_is_a_no_op() {
        let processor = ExtraFieldsProcessor::new(Map::new());
        let mut record = LogRecord::new("app", Level::Info, "hello");
        record.extra = json!({ "keep": true });

        processor.process(&mut record);

        assert_eq!(record.extra, json!({ "keep": true }));
    }
}
