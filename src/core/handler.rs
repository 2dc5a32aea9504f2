//! Handler trait for log output sinks

use super::{error::Result, formatter::Formatter, level::Level, record::LogRecord};

/// An output sink with a minimum severity and an attached formatter.
///
/// Handlers format records themselves rather than receiving pre-formatted
/// strings: the UDP sink needs the formatted payload intact so it can split
/// it into one datagram per line.
pub trait Handler: Send {
    fn handle(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;

    /// Minimum severity this handler accepts.
    fn level(&self) -> Level;

    fn is_handling(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Replace the formatter configured for this sink.
    fn set_formatter(&mut self, formatter: Box<dyn Formatter>);

    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Handler({})", self.name())
    }
}
