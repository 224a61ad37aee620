pub mod accent_variable;

pub use accent_variable::AccentVariable;
