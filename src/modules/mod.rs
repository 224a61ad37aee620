pub mod content;
pub mod editor;
pub mod schema;
pub mod storage;
pub mod validation;
