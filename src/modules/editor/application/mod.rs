pub mod cms_context;
pub mod editor_error;
pub mod editor_session;
pub mod ports;

pub use cms_context::{CmsContext, SharedCms};
pub use editor_error::EditorError;
pub use editor_session::EditorSession;
