//! Web request processor
//!
//! Stamps records with request-derived metadata: the user agent and the
//! client IP as reported by an `X-Client-Ip`-style header. The ambient
//! request state lives outside this crate and is injected as a collaborator.

use crate::core::{LogRecord, Processor};
use serde_json::Value;
use std::sync::Arc;

/// Boundary trait for ambient HTTP request data.
pub trait RequestMeta: Send + Sync {
    fn user_agent(&self) -> Option<String>;
    fn client_ip(&self) -> Option<String>;
}

pub struct WebProcessor {
    meta: Option<Arc<dyn RequestMeta>>,
}

impl WebProcessor {
    /// Without a collaborator the processor injects nothing, matching a
    /// request context that carries neither header.
    pub fn new(meta: Option<Arc<dyn RequestMeta>>) -> Self {
        Self { meta }
    }
}

impl Processor for WebProcessor {
    fn process(&self, record: &mut LogRecord) {
        let Some(meta) = &self.meta else {
            return;
        };

        if let Some(user_agent) = meta.user_agent() {
            record
                .extra_object_mut()
                .insert("user_agent".to_string(), Value::String(user_agent));
        }
        if let Some(client_ip) = meta.client_ip() {
            record
                .extra_object_mut()
                .insert("client_ip".to_string(), Value::String(client_ip));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;
    use serde_json::json;

    struct FixedMeta;

    impl RequestMeta for FixedMeta {
        fn user_agent(&self) -> Option<String> {
            Some("curl/8.0".to_string())
        }

        fn client_ip(&self) -> Option<String> {
            Some("10.0.0.7".to_string())
        }
    }

    #[test]
    fn test_injects_request_fields() {
        let processor = WebProcessor::new(Some(Arc::new(FixedMeta)));
        let mut record = LogRecord::new("app", Level::Info, "hello");

        processor.process(&mut record);

        assert_eq!(
            record.extra,
            json!({ "user_agent": "curl/8.0", "client_ip": "10.0.0.7" })
        );
    }

    #[test]
    fn test_without_collaborator_injects_nothing() {
        let processor = WebProcessor::new(None);
        let mut record = LogRecord::new("app", Level::Info, "hello");

        processor.process(&mut record);

        assert_eq!(record.extra, json!({}));
    }

    #[test]
    fn test_missing_headers_are_skipped() {
        struct EmptyMeta;

        impl RequestMeta for EmptyMeta {
            fn user_agent(&self) -> Option<String> {
                None
            }

            fn client_ip(&self) -> Option<String> {
                Some("10.0.0.7".to_string())
            }
        }

        let processor = WebProcessor::new(Some(Arc::new(EmptyMeta)));
        let mut record = LogRecord::new("app", Level::Info, "hello");

        processor.process(&mut record);

        assert_eq!(record.extra, json!({ "client_ip": "10.0.0.7" }));
    }
}
