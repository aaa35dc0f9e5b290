pub mod record_writer;

pub use record_writer::{format_record, RecordWriter, PREAMBLE};
