pub mod timestamp_id_generator;

pub use timestamp_id_generator::TimestampIdGenerator;
