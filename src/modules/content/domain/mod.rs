pub mod defaults;
pub mod entities;
pub mod ordering;
pub mod patch;
pub mod section_order;

pub use entities::{
    ContentSnapshot, GalleryItem, GlobalSettings, LegalModalState, Project, ProjectLinks,
    TimelineEntry,
};
pub use ordering::Direction;
pub use patch::{GalleryPatch, PatchField, ProjectPatch, SettingsPatch, TimelinePatch};
