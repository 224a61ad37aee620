/// Source of ids for records created without one.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Returns `"{prefix}-{suffix}"`; the suffix must differ between calls
    /// made in the same session.
    fn generate(&self, prefix: &str) -> String;
}
