use std::sync::Arc;

use tracing::{info, warn};

use crate::modules::content::application::ports::outgoing::ThemeApplier;
use crate::modules::content::domain::defaults::{
    default_gallery, default_projects, default_settings, default_timeline,
};
use crate::modules::content::domain::ordering::{move_where, Direction};
use crate::modules::content::domain::section_order::{
    default_section_order, migrate_section_order, SECTION_UNIVERSE,
};
use crate::modules::content::domain::{
    ContentSnapshot, GalleryItem, GalleryPatch, GlobalSettings, LegalModalState, Project,
    ProjectPatch, SettingsPatch, TimelineEntry, TimelinePatch,
};
use crate::modules::storage::application::ports::outgoing::StorageError;
use crate::modules::storage::application::{PersistentStore, Shape};

pub const PROJECTS_KEY: &str = "portfolio_projects";
pub const TIMELINE_KEY: &str = "portfolio_timeline";
pub const GALLERY_KEY: &str = "portfolio_gallery";
pub const SECTION_ORDER_KEY: &str = "portfolio_section_order";
pub const SETTINGS_KEY: &str = "portfolio_settings";

pub const ALL_KEYS: [&str; 5] = [
    PROJECTS_KEY,
    TIMELINE_KEY,
    GALLERY_KEY,
    SECTION_ORDER_KEY,
    SETTINGS_KEY,
];

// ============================================================================
// Content Repository
// ============================================================================

/// Single owner of all editable site content.
///
/// Every mutation is written through to the store under its own key before
/// the call returns. Operations addressing an id that does not exist are
/// no-ops; the only error surfaced is a failed write.
pub struct ContentRepository {
    store: PersistentStore,
    theme: Arc<dyn ThemeApplier>,
    projects: Vec<Project>,
    timeline: Vec<TimelineEntry>,
    gallery: Vec<GalleryItem>,
    section_order: Vec<String>,
    settings: GlobalSettings,
    legal_modal: LegalModalState,
}

impl ContentRepository {
    /// Hydrates from persisted overrides (or bundled defaults) and runs the
    /// section-order migration.
    pub fn load(store: PersistentStore, theme: Arc<dyn ThemeApplier>) -> Result<Self, StorageError> {
        let mut repository = Self {
            store,
            theme,
            projects: Vec::new(),
            timeline: Vec::new(),
            gallery: Vec::new(),
            section_order: Vec::new(),
            settings: GlobalSettings::default(),
            legal_modal: LegalModalState::default(),
        };
        repository.reload()?;
        Ok(repository)
    }

    /// Re-reads all five pieces from the store.
    pub fn reload(&mut self) -> Result<(), StorageError> {
        self.projects = self.store.read(PROJECTS_KEY, default_projects(), Shape::Array);
        self.timeline = self.store.read(TIMELINE_KEY, default_timeline(), Shape::Array);
        self.gallery = self.store.read(GALLERY_KEY, default_gallery(), Shape::Array);
        self.settings = self.store.read(SETTINGS_KEY, default_settings(), Shape::Object);

        let saved: Vec<String> =
            self.store
                .read(SECTION_ORDER_KEY, default_section_order(), Shape::Array);
        let migrated = migrate_section_order(&saved, &SECTION_UNIVERSE);
        if migrated != saved {
            info!(from = ?saved, to = ?migrated, "Section order migrated");
            self.store.write(SECTION_ORDER_KEY, &migrated)?;
        }
        self.section_order = migrated;

        self.theme.apply_accent(&self.settings.accent_color);
        Ok(())
    }

    // ──────────────────────────────────────────────────────
    // Reads
    // ──────────────────────────────────────────────────────

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    pub fn gallery(&self) -> &[GalleryItem] {
        &self.gallery
    }

    pub fn section_order(&self) -> &[String] {
        &self.section_order
    }

    pub fn settings(&self) -> &GlobalSettings {
        &self.settings
    }

    pub fn legal_modal(&self) -> &LegalModalState {
        &self.legal_modal
    }

    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn find_timeline_entry(&self, id: &str) -> Option<&TimelineEntry> {
        self.timeline.iter().find(|t| t.id == id)
    }

    pub fn find_gallery_item(&self, id: &str) -> Option<&GalleryItem> {
        self.gallery.iter().find(|g| g.id == id)
    }

    pub fn snapshot(&self) -> ContentSnapshot {
        ContentSnapshot {
            projects: self.projects.clone(),
            timeline: self.timeline.clone(),
            gallery: self.gallery.clone(),
            global_settings: self.settings.clone(),
            section_order: self.section_order.clone(),
        }
    }

    // ──────────────────────────────────────────────────────
    // Projects
    // ──────────────────────────────────────────────────────

    /// Most-recent-first: new projects go to the front. Ids are not checked.
    pub fn add_project(&mut self, project: Project) -> Result<(), StorageError> {
        self.projects.insert(0, project);
        self.store.write(PROJECTS_KEY, &self.projects)
    }

    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) -> Result<(), StorageError> {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return Ok(());
        };
        patch.apply_to(project);
        self.store.write(PROJECTS_KEY, &self.projects)
    }

    pub fn delete_project(&mut self, id: &str) -> Result<(), StorageError> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Ok(());
        }
        self.store.write(PROJECTS_KEY, &self.projects)
    }

    pub fn move_project(&mut self, id: &str, direction: Direction) -> Result<(), StorageError> {
        if !move_where(&mut self.projects, |p| p.id == id, direction) {
            return Ok(());
        }
        self.store.write(PROJECTS_KEY, &self.projects)
    }

    // ──────────────────────────────────────────────────────
    // Timeline
    // ──────────────────────────────────────────────────────

    pub fn add_timeline_entry(&mut self, entry: TimelineEntry) -> Result<(), StorageError> {
        self.timeline.insert(0, entry);
        self.store.write(TIMELINE_KEY, &self.timeline)
    }

    pub fn update_timeline_entry(
        &mut self,
        id: &str,
        patch: TimelinePatch,
    ) -> Result<(), StorageError> {
        let Some(entry) = self.timeline.iter_mut().find(|t| t.id == id) else {
            return Ok(());
        };
        patch.apply_to(entry);
        self.store.write(TIMELINE_KEY, &self.timeline)
    }

    pub fn delete_timeline_entry(&mut self, id: &str) -> Result<(), StorageError> {
        let before = self.timeline.len();
        self.timeline.retain(|t| t.id != id);
        if self.timeline.len() == before {
            return Ok(());
        }
        self.store.write(TIMELINE_KEY, &self.timeline)
    }

    pub fn move_timeline_entry(
        &mut self,
        id: &str,
        direction: Direction,
    ) -> Result<(), StorageError> {
        if !move_where(&mut self.timeline, |t| t.id == id, direction) {
            return Ok(());
        }
        self.store.write(TIMELINE_KEY, &self.timeline)
    }

    // ──────────────────────────────────────────────────────
    // Gallery
    // ──────────────────────────────────────────────────────

    pub fn add_gallery_item(&mut self, item: GalleryItem) -> Result<(), StorageError> {
        self.gallery.insert(0, item);
        self.store.write(GALLERY_KEY, &self.gallery)
    }

    pub fn update_gallery_item(
        &mut self,
        id: &str,
        patch: GalleryPatch,
    ) -> Result<(), StorageError> {
        let Some(item) = self.gallery.iter_mut().find(|g| g.id == id) else {
            return Ok(());
        };
        patch.apply_to(item);
        self.store.write(GALLERY_KEY, &self.gallery)
    }

    pub fn delete_gallery_item(&mut self, id: &str) -> Result<(), StorageError> {
        let before = self.gallery.len();
        self.gallery.retain(|g| g.id != id);
        if self.gallery.len() == before {
            return Ok(());
        }
        self.store.write(GALLERY_KEY, &self.gallery)
    }

    pub fn move_gallery_item(&mut self, id: &str, direction: Direction) -> Result<(), StorageError> {
        if !move_where(&mut self.gallery, |g| g.id == id, direction) {
            return Ok(());
        }
        self.store.write(GALLERY_KEY, &self.gallery)
    }

    // ──────────────────────────────────────────────────────
    // Sections & settings
    // ──────────────────────────────────────────────────────

    pub fn move_section(&mut self, id: &str, direction: Direction) -> Result<(), StorageError> {
        if !move_where(&mut self.section_order, |s| s == id, direction) {
            return Ok(());
        }
        self.store.write(SECTION_ORDER_KEY, &self.section_order)
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<(), StorageError> {
        patch.apply_to(&mut self.settings);
        self.store.write(SETTINGS_KEY, &self.settings)?;
        self.theme.apply_accent(&self.settings.accent_color);
        Ok(())
    }

    // ──────────────────────────────────────────────────────
    // Whole-state operations
    // ──────────────────────────────────────────────────────

    /// Restores the bundled defaults and removes every persisted override.
    /// Irreversible and idempotent.
    pub fn reset_data(&mut self) -> Result<(), StorageError> {
        self.projects = default_projects();
        self.timeline = default_timeline();
        self.gallery = default_gallery();
        self.section_order = default_section_order();
        self.settings = default_settings();

        for key in ALL_KEYS {
            self.store.clear(key)?;
        }

        warn!("Content reset to bundled defaults");
        self.theme.apply_accent(&self.settings.accent_color);
        Ok(())
    }

    /// Commits an already validated bulk import, then reloads every piece from
    /// the store so in-memory state is exactly what a fresh start would see.
    pub fn replace_all(&mut self, snapshot: ContentSnapshot) -> Result<(), StorageError> {
        self.store.write(PROJECTS_KEY, &snapshot.projects)?;
        self.store.write(TIMELINE_KEY, &snapshot.timeline)?;
        self.store.write(GALLERY_KEY, &snapshot.gallery)?;
        self.store.write(SETTINGS_KEY, &snapshot.global_settings)?;
        self.store.write(SECTION_ORDER_KEY, &snapshot.section_order)?;

        info!(
            projects = snapshot.projects.len(),
            timeline = snapshot.timeline.len(),
            gallery = snapshot.gallery.len(),
            "Bulk content import committed"
        );
        self.reload()
    }

    // ──────────────────────────────────────────────────────
    // Legal modal (never persisted)
    // ──────────────────────────────────────────────────────

    pub fn open_legal_modal(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.legal_modal.open(title, content);
    }

    pub fn close_legal_modal(&mut self) {
        self.legal_modal.close();
    }
}
