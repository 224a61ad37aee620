use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    /// Legacy records stored tags as one comma-separated string.
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub links: ProjectLinks,
}

impl Project {
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            category: String::new(),
            featured: false,
            tags: Vec::new(),
            description: String::new(),
            long_description: None,
            thumbnail: String::new(),
            links: ProjectLinks::default(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Timeline
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "year")]
    pub period: String,
    #[serde(default, alias = "role")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_current: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_tags",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,
}

impl TimelineEntry {
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            period: String::new(),
            title: String::new(),
            company: None,
            description: String::new(),
            is_current: false,
            tags: Vec::new(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Gallery
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Category used by the public gallery filter.
    #[serde(rename = "type", alias = "category", default)]
    pub kind: String,
    /// Presentation hint (utility class or colour token).
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub url: String,
}

impl GalleryItem {
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            kind: String::new(),
            color: String::new(),
            url: String::new(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Global settings
// ──────────────────────────────────────────────────────────
//

/// Fields missing from a persisted object take their default value. Cleared
/// contact fields are written as `null` so they stay cleared on the next read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    pub accent_color: String,
    pub font_heading: String,
    pub font_body: String,
    pub form_endpoint: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub resume_url: String,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            accent_color: "#14b8a6".to_string(),
            font_heading: "Inter".to_string(),
            font_body: "Inter".to_string(),
            form_endpoint: None,
            email: Some("hello@example.com".to_string()),
            github: Some("https://github.com/example".to_string()),
            linkedin: Some("https://www.linkedin.com/in/example".to_string()),
            resume_url: "/resume.pdf".to_string(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Ephemeral UI state
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LegalModalState {
    pub is_open: bool,
    pub title: String,
    pub content: String,
}

impl LegalModalState {
    pub fn open(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.is_open = true;
        self.title = title.into();
        self.content = content.into();
    }

    /// Title and content are kept so a closing animation can still render them.
    pub fn close(&mut self) {
        self.is_open = false;
    }
}

//
// ──────────────────────────────────────────────────────────
// Whole-site snapshot (bulk JSON document and public read model)
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContentSnapshot {
    pub projects: Vec<Project>,
    pub timeline: Vec<TimelineEntry>,
    pub gallery: Vec<GalleryItem>,
    pub global_settings: GlobalSettings,
    pub section_order: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Boundary normalization
// ──────────────────────────────────────────────────────────
//

/// Ids may arrive as JSON numbers from older exports; they are kept as strings.
pub(crate) fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Accepts a list of strings or one comma-separated string.
pub(crate) fn tags_from_value(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Null => Some(Vec::new()),
        Value::String(s) => Some(
            s.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => None,
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    id_from_value(&raw).ok_or_else(|| serde::de::Error::custom("id must be a string or a number"))
}

pub(crate) fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    tags_from_value(&raw)
        .ok_or_else(|| serde::de::Error::custom("tags must be a string or a list of strings"))
}
