/// Theming collaborator notified whenever the accent colour may have changed.
///
/// Implementations must tolerate being called with the value they already hold.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeApplier: Send + Sync {
    fn apply_accent(&self, hex_color: &str);
}
