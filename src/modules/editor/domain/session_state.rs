use serde::Serialize;
use serde_json::Value;

use super::EditorTab;

/// Where the editor overlay currently is.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum SessionState {
    #[default]
    Idle,
    /// `record_id == None` means the draft will create a new record on submit.
    #[serde(rename_all = "camelCase")]
    Editing {
        record_id: Option<String>,
        draft: Value,
    },
    BulkJson {
        buffer: String,
    },
}

impl SessionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }

    pub fn bound_record(&self) -> Option<&str> {
        match self {
            SessionState::Editing {
                record_id: Some(id),
                ..
            } => Some(id),
            _ => None,
        }
    }
}

/// A delete the user asked for but has not confirmed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDelete {
    pub tab: EditorTab,
    pub record_id: String,
}
