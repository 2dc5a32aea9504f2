//! Request-id processor
//!
//! Ties related log lines together by stamping every record with the same
//! lazily generated UUIDv4 under `extra.request_id`.

use super::entropy::{self, RandomBytesProvider};
use crate::core::{LogRecord, Processor};
use serde_json::Value;
use std::sync::OnceLock;

pub struct RequestIdProcessor {
    providers: Vec<Box<dyn RandomBytesProvider>>,
    // None once initialized means the whole entropy cascade was unavailable;
    // the field is then omitted rather than failing the pipeline.
    request_id: OnceLock<Option<String>>,
}

impl RequestIdProcessor {
    pub fn new() -> Self {
        Self::with_providers(entropy::default_providers())
    }

    /// Build with an explicit provider cascade. Used by tests to force
    /// fallback order and the degraded all-unavailable mode.
    pub fn with_providers(providers: Vec<Box<dyn RandomBytesProvider>>) -> Self {
        Self {
            providers,
            request_id: OnceLock::new(),
        }
    }

    /// The memoized identifier. Generation runs at most once per instance,
    /// even under racing calls.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id
            .get_or_init(|| {
                entropy::generate(&self.providers, 16).map(|bytes| {
                    let mut raw = [0u8; 16];
                    raw.copy_from_slice(&bytes);
                    format_uuid_v4(raw)
                })
            })
            .as_deref()
    }
}

impl Default for RequestIdProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor for RequestIdProcessor {
    fn process(&self, record: &mut LogRecord) {
        if let Some(id) = self.request_id() {
            record
                .extra_object_mut()
                .insert("request_id".to_string(), Value::String(id.to_string()));
        }
    }
}

/// Force the UUIDv4 version and variant bits onto 16 raw bytes and render
/// the hyphenated 8-4-4-4-12 form.
pub fn format_uuid_v4(mut bytes: [u8; 16]) -> String {
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;

    struct ConstantProvider {
        available: bool,
        byte: u8,
    }

    impl RandomBytesProvider for ConstantProvider {
        fn available(&self) -> bool {
            self.available
        }

        fn fill(&self, buf: &mut [u8]) {
            buf.fill(self.byte);
        }
    }

    fn uuid_shape_ok(id: &str) -> bool {
        let groups: Vec<&str> = id.split('-').collect();
        groups.len() == 5
            && [8, 4, 4, 4, 12]
                .iter()
                .zip(&groups)
                .all(|(len, group)| group.len() == *len)
            && id
                .chars()
                .all(|c| c == '-' || c.is_ascii_hexdigit())
            && groups[2].starts_with('4')
            && matches!(groups[3].as_bytes()[0], b'8' | b'9' | b'a' | b'b')
    }

    #[test]
    fn test_injects_request_id() {
        let processor = RequestIdProcessor::new();
        let mut record = LogRecord::new("app", Level::Debug, "hello");

        processor.process(&mut record);

        let id = record.extra["request_id"].as_str().unwrap();
        assert!(uuid_shape_ok(id), "bad uuid shape: {}", id);
    }

    #[test]
    fn test_same_id_across_records() {
        let processor = RequestIdProcessor::new();
        let mut first = LogRecord::new("app", Level::Debug, "one");
        let mut second = LogRecord::new("app", Level::Info, "two");

        processor.process(&mut first);
        processor.process(&mut second);

        assert_eq!(first.extra["request_id"], second.extra["request_id"]);
    }

    #[test]
    fn test_distinct_instances_have_distinct_ids() {
        let a = RequestIdProcessor::new();
        let b = RequestIdProcessor::new();
        assert_ne!(a.request_id(), b.request_id());
    }

    #[test]
    fn test_skips_unavailable_providers() {
        let processor = RequestIdProcessor::with_providers(vec![
            Box::new(ConstantProvider {
                available: false,
                byte: 0x00,
            }),
            Box::new(ConstantProvider {
                available: true,
                byte: 0xab,
            }),
        ]);

        // 0xab everywhere except the forced version/variant nibbles
        assert_eq!(
            processor.request_id().unwrap(),
            "abababab-abab-4bab-abab-abababababab"
        );
    }

    #[test]
    fn test_degraded_mode_omits_field() {
        let processor = RequestIdProcessor::with_providers(vec![Box::new(ConstantProvider {
            available: false,
            byte: 0,
        })]);
        let mut record = LogRecord::new("app", Level::Debug, "hello");

        processor.process(&mut record);

        assert!(record.extra.as_object().unwrap().get("request_id").is_none());
        assert!(processor.request_id().is_none());
    }

    #[test]
    fn test_version_and_variant_forced_on_extreme_inputs() {
        assert!(uuid_shape_ok(&format_uuid_v4([0x00; 16])));
        assert!(uuid_shape_ok(&format_uuid_v4([0xff; 16])));
    }
}
