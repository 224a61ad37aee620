pub mod content_repository;
pub mod ports;

pub use content_repository::ContentRepository;
