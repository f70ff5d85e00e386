//! Command implementations for the recordctl CLI

pub mod demo;
pub mod record;

pub use demo::{run_demo, DemoArgs};
pub use record::{run_record, RecordCommand};
