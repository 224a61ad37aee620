pub mod theme_applier;

pub use theme_applier::ThemeApplier;
