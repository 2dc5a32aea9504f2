//! Handler factory

use super::formatter::FormatterFactory;
use crate::core::{Config, FactoryError, Handler, Level, Result};
use crate::handlers::{RedisClient, RedisHandler, StreamHandler, UdpHandler, UdpWriter};
use serde_json::{Map, Value};
use std::sync::Arc;

pub struct HandlerFactory {
    config: Config,
    formatter_factory: FormatterFactory,
    redis_client: Option<Arc<dyn RedisClient>>,
}

impl HandlerFactory {
    pub fn new(
        config: Config,
        formatter_factory: FormatterFactory,
        redis_client: Option<Arc<dyn RedisClient>>,
    ) -> Self {
        Self {
            config,
            formatter_factory,
            redis_client,
        }
    }

    /// Build the sink registered under `handler_type` with minimum severity
    /// `level`, attaching a formatter if the handler options name one.
    ///
    /// Constructing a `stream` or `udp` handler opens a live resource; the
    /// handler owns it and releases it on drop.
    pub fn create(&self, handler_type: &str, level: Level) -> Result<Box<dyn Handler>> {
        let section = self
            .config
            .section("handler")
            .ok_or_else(|| FactoryError::configuration("no handler configuration found"))?;

        let options = section
            .get(handler_type)
            .and_then(Value::as_object)
            .ok_or_else(|| {
                FactoryError::configuration(format!(
                    "no handler configuration found for handlerType: {}",
                    handler_type
                ))
            })?;

        let mut handler: Box<dyn Handler> = match handler_type {
            "stream" => Box::new(self.create_stream(options, level)?),
            "udp" => Box::new(self.create_udp(options, level)?),
            "redis" => Box::new(self.create_redis(options, level)?),
            _ => {
                return Err(FactoryError::configuration(format!(
                    "handler type: {} is not supported",
                    handler_type
                )))
            }
        };

        if let Some(formatter_name) = options.get("formatter").and_then(Value::as_str) {
            handler.set_formatter(self.formatter_factory.create(formatter_name)?);
        }

        Ok(handler)
    }

    fn create_stream(&self, options: &Map<String, Value>, level: Level) -> Result<StreamHandler> {
        let path = options.get("path").and_then(Value::as_str).ok_or_else(|| {
            FactoryError::configuration("path configuration for stream handler is missing")
        })?;

        StreamHandler::new(path, level)
    }

    fn create_udp(&self, options: &Map<String, Value>, level: Level) -> Result<UdpHandler> {
        let host = options.get("host").and_then(Value::as_str).ok_or_else(|| {
            FactoryError::configuration("host configuration for udp handler is missing")
        })?;
        let port = options.get("port").and_then(port_value).ok_or_else(|| {
            FactoryError::configuration("port configuration for udp handler is missing")
        })?;

        let writer = UdpWriter::connect(host, port)?;
        Ok(UdpHandler::new(writer, level))
    }

    fn create_redis(&self, options: &Map<String, Value>, level: Level) -> Result<RedisHandler> {
        let key = options.get("key").and_then(Value::as_str).ok_or_else(|| {
            FactoryError::configuration("key configuration for redis handler is missing")
        })?;
        let client = self
            .redis_client
            .clone()
            .ok_or_else(|| FactoryError::configuration("predis client object is not set"))?;

        Ok(RedisHandler::new(client, key, level))
    }
}

// Configuration may carry the port as a JSON number or a numeric string.
fn port_value(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|port| u16::try_from(port).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
