//! Formatter factory

use crate::core::{Config, FactoryError, Formatter, Result};
use crate::formatters::{JsonFormatter, LineFormatter, LogstashFormatter};
use serde_json::{Map, Value};

pub struct FormatterFactory {
    config: Config,
}

impl FormatterFactory {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the formatter registered under `formatter_type` in the
    /// `formatter` configuration section.
    pub fn create(&self, formatter_type: &str) -> Result<Box<dyn Formatter>> {
        let section = self
            .config
            .section("formatter")
            .ok_or_else(|| FactoryError::configuration("no formatter configuration found"))?;

        let options = section
            .get(formatter_type)
            .and_then(Value::as_object)
            .ok_or_else(|| {
                FactoryError::configuration(format!(
                    "no formatter configuration found for formatterType: {}",
                    formatter_type
                ))
            })?;

        match formatter_type {
            "line" => Ok(Box::new(Self::create_line(options))),
            "json" => Ok(Box::new(JsonFormatter::new())),
            "logstash" => {
                let event_type =
                    options.get("type").and_then(Value::as_str).ok_or_else(|| {
                        FactoryError::configuration(
                            "type configuration for logstash formatter is missing",
                        )
                    })?;
                Ok(Box::new(LogstashFormatter::new(event_type)))
            }
            _ => Err(FactoryError::configuration(format!(
                "formatter type: {} is not supported",
                formatter_type
            ))),
        }
    }

    fn create_line(options: &Map<String, Value>) -> LineFormatter {
        let mut formatter = LineFormatter::new();

        if let Some(format) = options.get("format").and_then(Value::as_str) {
            formatter = formatter.with_format(format);
        }
        if let Some(date_format) = options.get("dateFormat").and_then(Value::as_str) {
            formatter = formatter.with_date_format(date_format);
        }
        if flag(options, "includeStacktraces") {
            formatter = formatter.with_stacktraces(true);
        }
        if flag(options, "allowInlineLineBreaks") {
            formatter = formatter.with_inline_line_breaks(true);
        }
        if flag(options, "ignoreEmptyContextAndExtra") {
            formatter = formatter.with_ignore_empty_context_and_extra(true);
        }

        formatter
    }
}

// Flags arrive as the literal string "true" in configuration; anything else
// leaves the default in place.
fn flag(options: &Map<String, Value>, key: &str) -> bool {
    options.get(key).and_then(Value::as_str) == Some("true")
}
