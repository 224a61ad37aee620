use crate::modules::editor::domain::EditorTab;
use crate::modules::storage::application::ports::outgoing::StorageError;
use crate::modules::validation::application::ValidationFailure;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("No {tab} record with id '{id}'")]
    RecordNotFound { tab: EditorTab, id: String },

    #[error("Draft rejected: {0}")]
    InvalidDraft(String),

    #[error("No record is open in the editor")]
    NoActiveRecord,

    #[error("The bulk JSON editor is not open")]
    NotInBulkJson,

    #[error("Global settings cannot be deleted")]
    SettingsNotDeletable,

    #[error("There is no delete waiting for confirmation")]
    NoPendingDelete,

    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    #[error("Validation failed at {0}")]
    Validation(#[from] ValidationFailure),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
