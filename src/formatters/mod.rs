//! Formatter implementations

pub mod json;
pub mod line;
pub mod logstash;

pub use json::JsonFormatter;
pub use line::LineFormatter;
pub use logstash::LogstashFormatter;
