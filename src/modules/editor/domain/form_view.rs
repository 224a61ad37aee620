use serde::Serialize;
use serde_json::Value;

use super::EditorTab;

/// Everything the external form renderer needs: a schema and the data to
/// pre-fill it with. Changes come back through the draft and submit calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub tab: EditorTab,
    pub record_id: Option<String>,
    pub schema: Value,
    pub data: Value,
}
