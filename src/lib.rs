//! # Rust Logger Factory
//!
//! Assembles structured logging pipelines from declarative configuration:
//! given a logical logger name, the factory resolves a configuration record
//! (with a `_default` fallback), materializes the configured chain of output
//! handlers (each with an optional formatter), composes the record
//! processors, and caches the finished logger by name.
//!
//! ## Features
//!
//! - **Declarative**: loggers, handlers and formatters come from one JSON
//!   configuration tree
//! - **Multiple Sinks**: file stream, UDP datagram, Redis list
//! - **Processors**: request-id correlation, static extra fields, web
//!   request metadata
//! - **Thread Safe**: cached loggers are shared across threads

pub mod core;
pub mod factory;
pub mod formatters;
pub mod handlers;
pub mod processors;

pub mod prelude {
    pub use crate::core::{
        Config, FactoryError, Formatter, Handler, Level, LogRecord, Logger, Processor, Result,
    };
    pub use crate::factory::{FormatterFactory, HandlerFactory, LoggerFactory};
    pub use crate::formatters::{JsonFormatter, LineFormatter, LogstashFormatter};
    pub use crate::handlers::{RedisClient, RedisHandler, StreamHandler, UdpHandler, UdpWriter};
    pub use crate::processors::{
        ExtraFieldsProcessor, RandomBytesProvider, RequestIdProcessor, RequestMeta, WebProcessor,
    };
}

pub use crate::core::{
    Config, FactoryError, Formatter, Handler, Level, LogRecord, Logger, Processor, Result,
};
pub use crate::factory::{FormatterFactory, HandlerFactory, LoggerFactory};
pub use crate::formatters::{JsonFormatter, LineFormatter, LogstashFormatter};
pub use crate::handlers::{RedisClient, RedisHandler, StreamHandler, UdpHandler, UdpWriter};
pub use crate::processors::{
    ExtraFieldsProcessor, RandomBytesProvider, RequestIdProcessor, RequestMeta, WebProcessor,
};
