pub mod persistent_store;
pub mod ports;

pub use persistent_store::{PersistentStore, Shape};
