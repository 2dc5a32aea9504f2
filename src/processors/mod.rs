//! Processor implementations

pub mod entropy;
pub mod extra_fields;
pub mod request_id;
pub mod web;

pub use entropy::RandomBytesProvider;
pub use extra_fields::ExtraFieldsProcessor;
pub use request_id::RequestIdProcessor;
pub use web::{RequestMeta, WebProcessor};
