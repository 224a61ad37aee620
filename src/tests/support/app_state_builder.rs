use std::sync::Arc;

use actix_web::web;

use crate::modules::content::adapter::outgoing::AccentVariable;
use crate::modules::content::application::ContentRepository;
use crate::modules::editor::application::ports::outgoing::IdGenerator;
use crate::modules::editor::application::{CmsContext, EditorSession};
use crate::modules::storage::adapter::outgoing::InMemoryKeyValueStore;
use crate::modules::storage::application::ports::outgoing::KeyValueStore;
use crate::modules::storage::application::PersistentStore;
use crate::tests::support::stubs::SequentialIdGenerator;
use crate::AppState;

pub struct TestAppStateBuilder {
    backend: Arc<dyn KeyValueStore>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            backend: Arc::new(InMemoryKeyValueStore::new()),
            ids: Arc::new(SequentialIdGenerator::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_backend(mut self, backend: impl KeyValueStore + 'static) -> Self {
        self.backend = Arc::new(backend);
        self
    }

    /// Keeps a handle on the backend so the test can inspect what was written.
    pub fn with_shared_backend(mut self, backend: Arc<dyn KeyValueStore>) -> Self {
        self.backend = backend;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let accent = Arc::new(AccentVariable::new());
        let repository = ContentRepository::load(
            PersistentStore::new(Arc::clone(&self.backend)),
            accent.clone(),
        )
        .expect("test repository should load");
        let session = EditorSession::new(self.ids);

        web::Data::new(AppState {
            cms: CmsContext::new(repository, session).shared(),
            accent,
            store: self.backend,
        })
    }
}
