//! Redis list handler
//!
//! Pushes formatted records onto a Redis list. The actual wire client stays
//! outside this crate; callers inject anything implementing the single
//! list-push operation the handler needs.

use crate::core::{FactoryError, Formatter, Handler, Level, LogRecord, Result};
use crate::formatters::LineFormatter;
use std::sync::Arc;

/// Boundary trait for the remote key-value store collaborator.
pub trait RedisClient: Send + Sync {
    fn rpush(&self, key: &str, value: &str) -> std::result::Result<(), String>;
}

pub struct RedisHandler {
    client: Arc<dyn RedisClient>,
    key: String,
    level: Level,
    formatter: Box<dyn Formatter>,
}

impl RedisHandler {
    pub fn new(client: Arc<dyn RedisClient>, key: impl Into<String>, level: Level) -> Self {
        Self {
            client,
            key: key.into(),
            level,
            formatter: Box::new(LineFormatter::new()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Handler for RedisHandler {
    fn handle(&mut self, record: &LogRecord) -> Result<()> {
        let payload = self.formatter.format(record);
        self.client
            .rpush(&self.key, payload.trim_end_matches('\n'))
            .map_err(FactoryError::writer)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn level(&self) -> Level {
        self.level
    }

    fn set_formatter(&mut self, formatter: Box<dyn Formatter>) {
        self.formatter = formatter;
    }

    fn name(&self) -> &str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeRedis {
        pushed: Mutex<Vec<(String, String)>>,
    }

    impl RedisClient for FakeRedis {
        fn rpush(&self, key: &str, value: &str) -> std::result::Result<(), String> {
            self.pushed
                .lock()
                .unwrap()
                .push((key.to_string(), value.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_pushes_formatted_record_to_configured_key() {
        let client = Arc::new(FakeRedis::default());
        let mut handler = RedisHandler::new(Arc::clone(&client) as Arc<dyn RedisClient>, "logs", Level::Info);

        handler
            .handle(&LogRecord::new("app", Level::Info, "queued"))
            .unwrap();

        let pushed = client.pushed.lock().unwrap();
        assert_eq!(pushed.len(), 1);
        assert_eq!(pushed[0].0, "logs");
        assert!(pushed[0].1.contains("app.INFO: queued"));
    }

    #[test]
    fn test_push_failure_becomes_writer_error() {
        struct FailingRedis;

        impl RedisClient for FailingRedis {
            fn rpush(&self, _key: &str, _value: &str) -> std::result::Result<(), String> {
                Err("connection refused".to_string())
            }
        }

        let mut handler = RedisHandler::new(Arc::new(FailingRedis), "logs", Level::Info);
        let err = handler
            .handle(&LogRecord::new("app", Level::Info, "dropped"))
            .unwrap_err();

        assert!(matches!(err, FactoryError::Writer(_)));
    }
}
