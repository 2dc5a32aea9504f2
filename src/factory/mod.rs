//! Logger assembly from declarative configuration
//!
//! `LoggerFactory` resolves a per-name configuration record (falling back to
//! the `_default` entry), materializes the configured handler chain through
//! `HandlerFactory`, composes the processor chain, and caches the finished
//! logger by name.

pub mod formatter;
pub mod handler;

pub use formatter::FormatterFactory;
pub use handler::HandlerFactory;

use crate::core::{Config, FactoryError, Handler, Level, Logger, Processor, Result};
use crate::handlers::RedisClient;
use crate::processors::{ExtraFieldsProcessor, RequestIdProcessor, RequestMeta, WebProcessor};
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

pub struct LoggerFactory {
    config: Config,
    redis_client: Option<Arc<dyn RedisClient>>,
    request_meta: Option<Arc<dyn RequestMeta>>,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerFactory {
    pub fn new(config: Value) -> Self {
        Self {
            config: Config::new(config),
            redis_client: None,
            request_meta: None,
            loggers: Mutex::new(HashMap::new()),
        }
    }

    /// Inject the remote-store client used by `redis` handlers. Absence is
    /// only an error at the moment a `redis` handler is actually built.
    pub fn set_redis_client(&mut self, client: Arc<dyn RedisClient>) {
        self.redis_client = Some(client);
    }

    /// Inject the request-context collaborator feeding the `web` processor.
    pub fn set_request_meta(&mut self, meta: Arc<dyn RequestMeta>) {
        self.request_meta = Some(meta);
    }

    /// Resolve, assemble and cache the logger registered under `name`.
    ///
    /// Repeated calls with the same name return the identical cached
    /// instance; a failure while building any handler or processor aborts
    /// the whole call and caches nothing.
    pub fn create_logger(&self, name: &str) -> Result<Arc<Logger>> {
        if let Some(logger) = self.loggers.lock().get(name) {
            return Ok(Arc::clone(logger));
        }

        let logger_config = self.logger_config(name)?;
        let level = parse_level(&logger_config, name)?;
        let handlers = self.create_handlers(&logger_config, level)?;
        let processors = self.create_processors(&logger_config)?;
        let logger = Arc::new(Logger::new(name, handlers, processors));

        // If two callers raced for the same uncached name, the first writer
        // wins; the losing chain closes its sinks on drop.
        let mut cache = self.loggers.lock();
        Ok(Arc::clone(
            cache.entry(name.to_string()).or_insert(logger),
        ))
    }

    /// The named entry fully replaces `_default` when present; fields are
    /// never merged between the two.
    fn logger_config(&self, name: &str) -> Result<Map<String, Value>> {
        let section = self
            .config
            .section("logger")
            .ok_or_else(|| FactoryError::configuration("no logger configuration found"))?;

        if !section.contains_key("_default") {
            return Err(FactoryError::configuration(
                "no configuration found for logger: _default",
            ));
        }

        let entry = section
            .get(name)
            .or_else(|| section.get("_default"))
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        if !entry.contains_key("handler") {
            return Err(FactoryError::configuration(format!(
                "no handler configured for logger: {}",
                name
            )));
        }
        if !entry.contains_key("level") {
            return Err(FactoryError::configuration(format!(
                "no level configured for logger: {}",
                name
            )));
        }

        Ok(entry)
    }

    fn create_handlers(
        &self,
        logger_config: &Map<String, Value>,
        level: Level,
    ) -> Result<Vec<Box<dyn Handler>>> {
        let formatter_factory = FormatterFactory::new(self.config.clone());
        let handler_factory = HandlerFactory::new(
            self.config.clone(),
            formatter_factory,
            self.redis_client.clone(),
        );

        let entries = logger_config
            .get("handler")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let mut handlers = Vec::with_capacity(entries.len());
        for entry in &entries {
            let handler_type = entry.as_str().ok_or_else(|| {
                FactoryError::configuration("handler type must be a string")
            })?;
            handlers.push(handler_factory.create(handler_type, level)?);
        }

        Ok(handlers)
    }

    fn create_processors(
        &self,
        logger_config: &Map<String, Value>,
    ) -> Result<Vec<Box<dyn Processor>>> {
        let mut processors: Vec<Box<dyn Processor>> = Vec::new();

        let Some(names) = logger_config.get("processors").and_then(Value::as_array) else {
            return Ok(processors);
        };

        for name in names {
            match name.as_str() {
                Some("web") => {
                    processors.push(Box::new(WebProcessor::new(self.request_meta.clone())));
                }
                Some("requestId") => {
                    processors.push(Box::new(RequestIdProcessor::new()));
                }
                Some("extraFields") => {
                    let fields = logger_config
                        .get("extraFields")
                        .and_then(Value::as_object)
                        .cloned()
                        .unwrap_or_default();
                    processors.push(Box::new(ExtraFieldsProcessor::new(fields)));
                }
                other => {
                    let label = other
                        .map(str::to_string)
                        .unwrap_or_else(|| name.to_string());
                    return Err(FactoryError::configuration(format!(
                        "processor type: {} is not supported",
                        label
                    )));
                }
            }
        }

        Ok(processors)
    }
}

fn parse_level(logger_config: &Map<String, Value>, name: &str) -> Result<Level> {
    logger_config
        .get("level")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            FactoryError::configuration(format!("no level configured for logger: {}", name))
        })?
        .parse()
}
