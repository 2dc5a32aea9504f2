//! Formatter trait for record serialization

use super::record::LogRecord;

/// Stateless strategy converting a record into its serialized form.
pub trait Formatter: Send {
    fn format(&self, record: &LogRecord) -> String;
}

impl std::fmt::Debug for dyn Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Formatter")
    }
}
