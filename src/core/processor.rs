//! Processor trait for record transforms

use super::record::LogRecord;

/// A transform applied to every record, in configured order, before the
/// record reaches the handlers.
///
/// Instances are shared across logging threads, so implementations carry
/// their own synchronization for any internal state.
pub trait Processor: Send + Sync {
    fn process(&self, record: &mut LogRecord);
}
