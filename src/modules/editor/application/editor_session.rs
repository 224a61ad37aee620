use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::modules::content::application::ContentRepository;
use crate::modules::content::domain::entities::id_from_value;
use crate::modules::content::domain::{
    GalleryItem, GalleryPatch, Project, ProjectPatch, SettingsPatch, TimelineEntry, TimelinePatch,
};
use crate::modules::editor::application::editor_error::EditorError;
use crate::modules::editor::application::ports::outgoing::IdGenerator;
use crate::modules::editor::domain::{
    EditorTab, FormView, PendingDelete, SessionState, SETTINGS_RECORD_ID,
};
use crate::modules::schema::application::schema_registry;
use crate::modules::validation::application::parse_candidate;

/// Controller behind the CMS overlay: which tab is active, which record is
/// bound, and the draft the form renderer is editing.
///
/// Every commit goes through the [`ContentRepository`]; the session itself
/// never touches storage.
pub struct EditorSession {
    tab: EditorTab,
    state: SessionState,
    pending_delete: Option<PendingDelete>,
    ids: Arc<dyn IdGenerator>,
}

impl EditorSession {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            tab: EditorTab::default(),
            state: SessionState::Idle,
            pending_delete: None,
            ids,
        }
    }

    pub fn tab(&self) -> EditorTab {
        self.tab
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    // ──────────────────────────────────────────────────────
    // Selection & drafts
    // ──────────────────────────────────────────────────────

    pub fn select_tab(&mut self, tab: EditorTab) {
        self.tab = tab;
        self.state = SessionState::Idle;
        self.pending_delete = None;
    }

    /// `None` opens an empty draft for a new record. In the settings tab any
    /// selection binds the singleton settings record.
    pub fn select_record(
        &mut self,
        repo: &ContentRepository,
        id: Option<&str>,
    ) -> Result<(), EditorError> {
        let target = if self.tab.is_collection() {
            id
        } else {
            Some(SETTINGS_RECORD_ID)
        };

        let (record_id, draft) = match target {
            None => (None, empty_draft()),
            Some(id) => match record_draft(repo, self.tab, id)? {
                Some(draft) => (Some(id.to_string()), draft),
                None => {
                    return Err(EditorError::RecordNotFound {
                        tab: self.tab,
                        id: id.to_string(),
                    })
                }
            },
        };

        self.pending_delete = None;
        self.state = SessionState::Editing { record_id, draft };
        Ok(())
    }

    /// Mirrors the renderer's change callback. Nothing is committed.
    pub fn update_draft(&mut self, data: Value) -> Result<(), EditorError> {
        match &mut self.state {
            SessionState::Editing { draft, .. } => {
                *draft = data;
                Ok(())
            }
            _ => Err(EditorError::NoActiveRecord),
        }
    }

    /// Commits the draft and returns the id the editor is now bound to.
    ///
    /// A bound record is patched in place. An unbound draft creates a record
    /// using the draft's own `id` when non-empty, otherwise a generated one.
    pub fn submit(&mut self, repo: &mut ContentRepository) -> Result<String, EditorError> {
        let SessionState::Editing { record_id, draft } = &self.state else {
            return Err(EditorError::NoActiveRecord);
        };

        let Value::Object(fields) = draft else {
            return Err(EditorError::InvalidDraft(
                "draft must be a JSON object".to_string(),
            ));
        };
        let mut fields = fields.clone();
        let draft_id = fields
            .remove("id")
            .as_ref()
            .and_then(id_from_value)
            .filter(|id| !id.is_empty());
        let fields = Value::Object(fields);
        let record_id = record_id.clone();

        let bound = match (self.tab, record_id) {
            (EditorTab::Settings, _) => {
                repo.update_settings(decode::<SettingsPatch>(fields)?)?;
                SETTINGS_RECORD_ID.to_string()
            }
            (tab, Some(id)) => {
                if record_draft(repo, tab, &id)?.is_none() {
                    return Err(EditorError::RecordNotFound { tab, id });
                }
                match tab {
                    EditorTab::Projects => repo.update_project(&id, decode(fields)?)?,
                    EditorTab::Timeline => repo.update_timeline_entry(&id, decode(fields)?)?,
                    EditorTab::Gallery => repo.update_gallery_item(&id, decode(fields)?)?,
                    EditorTab::Settings => {}
                }
                id
            }
            (tab, None) => {
                let id = draft_id.unwrap_or_else(|| self.generate_id(tab));
                create_record(repo, tab, &id, fields)?;
                info!(%tab, id = %id, "Record created");
                id
            }
        };

        let draft = record_draft(repo, self.tab, &bound)?.unwrap_or_else(empty_draft);
        self.state = SessionState::Editing {
            record_id: Some(bound.clone()),
            draft,
        };
        Ok(bound)
    }

    // ──────────────────────────────────────────────────────
    // Delete (two-step)
    // ──────────────────────────────────────────────────────

    pub fn request_delete(&mut self) -> Result<PendingDelete, EditorError> {
        if !self.tab.is_collection() {
            return Err(EditorError::SettingsNotDeletable);
        }
        let record_id = self
            .state
            .bound_record()
            .ok_or(EditorError::NoActiveRecord)?
            .to_string();

        let pending = PendingDelete {
            tab: self.tab,
            record_id,
        };
        self.pending_delete = Some(pending.clone());
        Ok(pending)
    }

    pub fn confirm_delete(&mut self, repo: &mut ContentRepository) -> Result<(), EditorError> {
        let pending = self
            .pending_delete
            .take()
            .ok_or(EditorError::NoPendingDelete)?;

        match pending.tab {
            EditorTab::Projects => repo.delete_project(&pending.record_id)?,
            EditorTab::Timeline => repo.delete_timeline_entry(&pending.record_id)?,
            EditorTab::Gallery => repo.delete_gallery_item(&pending.record_id)?,
            EditorTab::Settings => return Err(EditorError::SettingsNotDeletable),
        }

        info!(tab = %pending.tab, id = %pending.record_id, "Record deleted");
        self.state = SessionState::Idle;
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // ──────────────────────────────────────────────────────
    // Bulk JSON
    // ──────────────────────────────────────────────────────

    /// Opens the raw editor pre-filled with the whole current configuration.
    pub fn enter_bulk_json(&mut self, repo: &ContentRepository) -> Result<(), EditorError> {
        let buffer = serde_json::to_string_pretty(&repo.snapshot())
            .map_err(|e| EditorError::Serialization(e.to_string()))?;

        self.pending_delete = None;
        self.state = SessionState::BulkJson { buffer };
        Ok(())
    }

    pub fn edit_bulk_json(&mut self, text: String) -> Result<(), EditorError> {
        match &mut self.state {
            SessionState::BulkJson { buffer } => {
                *buffer = text;
                Ok(())
            }
            _ => Err(EditorError::NotInBulkJson),
        }
    }

    /// All-or-nothing: malformed text or the first validation failure leaves
    /// both content and buffer untouched.
    pub fn apply_bulk_json(&mut self, repo: &mut ContentRepository) -> Result<(), EditorError> {
        let SessionState::BulkJson { buffer } = &self.state else {
            return Err(EditorError::NotInBulkJson);
        };

        let candidate: Value = serde_json::from_str(buffer)
            .map_err(|e| EditorError::MalformedJson(e.to_string()))?;

        let snapshot = parse_candidate(&candidate).inspect_err(|failure| {
            warn!(
                path = %failure.dotted_path(),
                message = %failure.message,
                "Bulk JSON rejected"
            );
        })?;

        repo.replace_all(snapshot)?;
        self.state = SessionState::Idle;
        Ok(())
    }

    // ──────────────────────────────────────────────────────
    // Reset & rendering
    // ──────────────────────────────────────────────────────

    pub fn reset_all(&mut self, repo: &mut ContentRepository) -> Result<(), EditorError> {
        repo.reset_data()?;
        self.tab = EditorTab::default();
        self.state = SessionState::Idle;
        self.pending_delete = None;
        Ok(())
    }

    /// What the form renderer should show right now, if anything.
    pub fn form_view(&self, repo: &ContentRepository) -> Option<FormView> {
        match &self.state {
            SessionState::Editing { record_id, draft } => Some(FormView {
                tab: self.tab,
                record_id: record_id.clone(),
                schema: schema_registry::item_schema(self.tab),
                data: draft.clone(),
            }),
            SessionState::Idle if !self.tab.is_collection() => {
                let data = serde_json::to_value(repo.settings()).ok()?;
                Some(FormView {
                    tab: self.tab,
                    record_id: Some(SETTINGS_RECORD_ID.to_string()),
                    schema: schema_registry::item_schema(self.tab),
                    data,
                })
            }
            _ => None,
        }
    }

    fn generate_id(&self, tab: EditorTab) -> String {
        self.ids.generate(tab.id_prefix().unwrap_or("item"))
    }
}

//
// ──────────────────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────────────────
//

fn empty_draft() -> Value {
    Value::Object(Map::new())
}

fn decode<T: DeserializeOwned>(fields: Value) -> Result<T, EditorError> {
    serde_json::from_value(fields).map_err(|e| EditorError::InvalidDraft(e.to_string()))
}

/// Current stored form of a record, as the renderer sees it.
fn record_draft(
    repo: &ContentRepository,
    tab: EditorTab,
    id: &str,
) -> Result<Option<Value>, EditorError> {
    let value = match tab {
        EditorTab::Projects => repo.find_project(id).map(serde_json::to_value),
        EditorTab::Timeline => repo.find_timeline_entry(id).map(serde_json::to_value),
        EditorTab::Gallery => repo.find_gallery_item(id).map(serde_json::to_value),
        EditorTab::Settings => Some(serde_json::to_value(repo.settings())),
    };
    value
        .transpose()
        .map_err(|e| EditorError::Serialization(e.to_string()))
}

fn create_record(
    repo: &mut ContentRepository,
    tab: EditorTab,
    id: &str,
    fields: Value,
) -> Result<(), EditorError> {
    if record_draft(repo, tab, id)?.is_some() {
        warn!(%tab, id, "Creating a record whose id is already taken");
    }

    match tab {
        EditorTab::Projects => {
            let mut project = Project::blank(id);
            decode::<ProjectPatch>(fields)?.apply_to(&mut project);
            repo.add_project(project)?;
        }
        EditorTab::Timeline => {
            let mut entry = TimelineEntry::blank(id);
            decode::<TimelinePatch>(fields)?.apply_to(&mut entry);
            repo.add_timeline_entry(entry)?;
        }
        EditorTab::Gallery => {
            let mut item = GalleryItem::blank(id);
            decode::<GalleryPatch>(fields)?.apply_to(&mut item);
            repo.add_gallery_item(item)?;
        }
        EditorTab::Settings => {
            return Err(EditorError::InvalidDraft(
                "settings are a single record and cannot be created".to_string(),
            ))
        }
    }
    Ok(())
}
