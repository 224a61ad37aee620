use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use tracing::error;

use super::entities::{ContentSnapshot, GalleryItem, GlobalSettings, Project, TimelineEntry};
use super::section_order::default_section_order;

const BUNDLED_PROJECTS: &str = include_str!("../../../../data/projects.json");
const BUNDLED_TIMELINE: &str = include_str!("../../../../data/timeline.json");
const BUNDLED_GALLERY: &str = include_str!("../../../../data/gallery.json");

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| parse_bundled("projects", BUNDLED_PROJECTS));
static TIMELINE: Lazy<Vec<TimelineEntry>> =
    Lazy::new(|| parse_bundled("timeline", BUNDLED_TIMELINE));
static GALLERY: Lazy<Vec<GalleryItem>> = Lazy::new(|| parse_bundled("gallery", BUNDLED_GALLERY));

fn parse_bundled<T>(name: &str, raw: &str) -> Vec<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(raw).unwrap_or_else(|e| {
        error!(document = name, error = %e, "Bundled default document is invalid");
        Vec::new()
    })
}

pub fn default_projects() -> Vec<Project> {
    PROJECTS.clone()
}

pub fn default_timeline() -> Vec<TimelineEntry> {
    TIMELINE.clone()
}

pub fn default_gallery() -> Vec<GalleryItem> {
    GALLERY.clone()
}

pub fn default_settings() -> GlobalSettings {
    GlobalSettings::default()
}

pub fn default_snapshot() -> ContentSnapshot {
    ContentSnapshot {
        projects: default_projects(),
        timeline: default_timeline(),
        gallery: default_gallery(),
        global_settings: default_settings(),
        section_order: default_section_order(),
    }
}
