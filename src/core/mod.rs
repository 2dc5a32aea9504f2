//! Core types and traits

pub mod config;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod level;
pub mod logger;
pub mod processor;
pub mod record;

pub use config::Config;
pub use error::{FactoryError, Result};
pub use formatter::Formatter;
pub use handler::Handler;
pub use level::Level;
pub use logger::Logger;
pub use processor::Processor;
pub use record::LogRecord;
