use std::sync::Arc;

use tokio::sync::Mutex;

use crate::modules::content::application::ContentRepository;
use crate::modules::editor::application::EditorSession;

/// The repository and the one editor session that drives it. Handlers lock
/// the whole pair so each action is a single state transition.
pub struct CmsContext {
    pub repository: ContentRepository,
    pub session: EditorSession,
}

pub type SharedCms = Arc<Mutex<CmsContext>>;

impl CmsContext {
    pub fn new(repository: ContentRepository, session: EditorSession) -> Self {
        Self {
            repository,
            session,
        }
    }

    pub fn shared(self) -> SharedCms {
        Arc::new(Mutex::new(self))
    }
}
