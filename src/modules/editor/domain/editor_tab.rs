use std::fmt;

use serde::{Deserialize, Serialize};

/// Collection the editor overlay is currently working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorTab {
    #[default]
    Projects,
    Timeline,
    Gallery,
    Settings,
}

/// Id the settings tab binds to; settings are a singleton record.
pub const SETTINGS_RECORD_ID: &str = "global";

impl EditorTab {
    pub const ALL: [EditorTab; 4] = [
        EditorTab::Projects,
        EditorTab::Timeline,
        EditorTab::Gallery,
        EditorTab::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EditorTab::Projects => "projects",
            EditorTab::Timeline => "timeline",
            EditorTab::Gallery => "gallery",
            EditorTab::Settings => "settings",
        }
    }

    /// Prefix for generated record ids. Settings never creates records.
    pub fn id_prefix(&self) -> Option<&'static str> {
        match self {
            EditorTab::Projects => Some("proj"),
            EditorTab::Timeline => Some("time"),
            EditorTab::Gallery => Some("gal"),
            EditorTab::Settings => None,
        }
    }

    pub fn is_collection(&self) -> bool {
        !matches!(self, EditorTab::Settings)
    }
}

impl fmt::Display for EditorTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
