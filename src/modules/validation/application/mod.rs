pub mod consolidated_validator;

pub use consolidated_validator::{parse_candidate, validate, ValidationFailure};
