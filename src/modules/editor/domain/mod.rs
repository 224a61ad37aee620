pub mod editor_tab;
pub mod form_view;
pub mod session_state;

pub use editor_tab::{EditorTab, SETTINGS_RECORD_ID};
pub use form_view::FormView;
pub use session_state::{PendingDelete, SessionState};
