//! Single-line-per-record formatter
//!
//! Renders records through a `%token%` template. Recognized tokens:
//! `%datetime%`, `%channel%`, `%level_name%`, `%message%`, `%context%`,
//! `%extra%`.

use crate::core::{Formatter, LogRecord};
use serde_json::Value;

pub const DEFAULT_FORMAT: &str = "[%datetime%] %channel%.%level_name%: %message% %context% %extra%";
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct LineFormatter {
    format: String,
    date_format: String,
    allow_inline_line_breaks: bool,
    ignore_empty_context_and_extra: bool,
}

impl LineFormatter {
    pub fn new() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            allow_inline_line_breaks: false,
            ignore_empty_context_and_extra: false,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = format.to_string();
        self
    }

    /// Set a custom strftime-compatible date format for `%datetime%`
    #[must_use]
    pub fn with_date_format(mut self, date_format: &str) -> Self {
        self.date_format = date_format.to_string();
        self
    }

    /// Keep line breaks inside the message instead of folding them to spaces
    #[must_use]
    pub fn with_inline_line_breaks(mut self, allow: bool) -> Self {
        self.allow_inline_line_breaks = allow;
        self
    }

    /// Include stack traces in the rendered output. Multi-line traces only
    /// survive rendering with line breaks intact, so enabling this also
    /// allows inline line breaks.
    #[must_use]
    pub fn with_stacktraces(mut self, include: bool) -> Self {
        if include {
            self.allow_inline_line_breaks = true;
        }
        self
    }

    /// Drop the `%context%` / `%extra%` placeholders when those maps are empty
    #[must_use]
    pub fn with_ignore_empty_context_and_extra(mut self, ignore: bool) -> Self {
        self.ignore_empty_context_and_extra = ignore;
        self
    }

    fn render_slot(&self, line: String, token: &str, value: &Value) -> String {
        let is_empty = value.as_object().is_some_and(|map| map.is_empty());
        if self.ignore_empty_context_and_extra && is_empty {
            return line.replace(&format!(" {}", token), "").replace(token, "");
        }
        line.replace(token, &serde_json::to_string(value).unwrap_or_default())
    }
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for LineFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let message = if self.allow_inline_line_breaks {
            record.message.clone()
        } else {
            record.message.replace("\r\n", " ").replace(['\r', '\n'], " ")
        };

        let line = self
            .format
            .replace(
                "%datetime%",
                &record.timestamp.format(&self.date_format).to_string(),
            )
            .replace("%channel%", &record.channel)
            .replace("%level_name%", record.level.as_str())
            .replace("%message%", &message);

        let line = self.render_slot(line, "%context%", &record.context);
        self.render_slot(line, "%extra%", &record.extra)
    }
}
