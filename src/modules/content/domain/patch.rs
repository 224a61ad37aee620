use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::entities::{
    tags_from_value, GalleryItem, GlobalSettings, Project, ProjectLinks, TimelineEntry,
};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep current value
// - Null: explicitly null => clear the field (optional fields only)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    /// For required fields `Null` is ignored.
    fn apply(self, target: &mut T) {
        if let PatchField::Value(v) = self {
            *target = v;
        }
    }

    fn apply_nullable(self, target: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => *target = Some(v),
        }
    }
}

impl PatchField<String> {
    /// Blank strings clear optional text fields, matching what a cleared form input sends.
    fn apply_optional_text(self, target: &mut Option<String>) {
        match self {
            PatchField::Value(v) if v.trim().is_empty() => *target = None,
            other => other.apply_nullable(target),
        }
    }
}

fn patch_tags<'de, D>(deserializer: D) -> Result<PatchField<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(PatchField::Null);
    }
    tags_from_value(&raw)
        .map(PatchField::Value)
        .ok_or_else(|| serde::de::Error::custom("tags must be a string or a list of strings"))
}

//
// ──────────────────────────────────────────────────────────
// Per-entity patches
// ──────────────────────────────────────────────────────────
// Ids are never patchable. Unknown keys are rejected at decode time.
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectPatch {
    pub title: PatchField<String>,
    pub category: PatchField<String>,
    pub featured: PatchField<bool>,
    #[serde(deserialize_with = "patch_tags")]
    pub tags: PatchField<Vec<String>>,
    pub description: PatchField<String>,
    pub long_description: PatchField<String>,
    pub thumbnail: PatchField<String>,
    pub links: PatchField<ProjectLinks>,
}

impl ProjectPatch {
    pub fn apply_to(self, project: &mut Project) {
        self.title.apply(&mut project.title);
        self.category.apply(&mut project.category);
        self.featured.apply(&mut project.featured);
        match self.tags {
            PatchField::Null => project.tags.clear(),
            tags => tags.apply(&mut project.tags),
        }
        self.description.apply(&mut project.description);
        self.long_description
            .apply_optional_text(&mut project.long_description);
        self.thumbnail.apply(&mut project.thumbnail);
        match self.links {
            PatchField::Null => project.links = ProjectLinks::default(),
            links => links.apply(&mut project.links),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TimelinePatch {
    #[serde(alias = "year")]
    pub period: PatchField<String>,
    #[serde(alias = "role")]
    pub title: PatchField<String>,
    pub company: PatchField<String>,
    pub description: PatchField<String>,
    pub is_current: PatchField<bool>,
    #[serde(deserialize_with = "patch_tags")]
    pub tags: PatchField<Vec<String>>,
}

impl TimelinePatch {
    pub fn apply_to(self, entry: &mut TimelineEntry) {
        self.period.apply(&mut entry.period);
        self.title.apply(&mut entry.title);
        self.company.apply_optional_text(&mut entry.company);
        self.description.apply(&mut entry.description);
        self.is_current.apply(&mut entry.is_current);
        match self.tags {
            PatchField::Null => entry.tags.clear(),
            tags => tags.apply(&mut entry.tags),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryPatch {
    pub title: PatchField<String>,
    #[serde(rename = "type", alias = "category")]
    pub kind: PatchField<String>,
    pub color: PatchField<String>,
    pub url: PatchField<String>,
}

impl GalleryPatch {
    pub fn apply_to(self, item: &mut GalleryItem) {
        self.title.apply(&mut item.title);
        self.kind.apply(&mut item.kind);
        self.color.apply(&mut item.color);
        self.url.apply(&mut item.url);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct SettingsPatch {
    pub accent_color: PatchField<String>,
    pub font_heading: PatchField<String>,
    pub font_body: PatchField<String>,
    pub form_endpoint: PatchField<String>,
    pub email: PatchField<String>,
    pub github: PatchField<String>,
    pub linkedin: PatchField<String>,
    pub resume_url: PatchField<String>,
}

impl SettingsPatch {
    pub fn apply_to(self, settings: &mut GlobalSettings) {
        self.accent_color.apply(&mut settings.accent_color);
        self.font_heading.apply(&mut settings.font_heading);
        self.font_body.apply(&mut settings.font_body);
        self.form_endpoint
            .apply_optional_text(&mut settings.form_endpoint);
        self.email.apply_optional_text(&mut settings.email);
        self.github.apply_optional_text(&mut settings.github);
        self.linkedin.apply_optional_text(&mut settings.linkedin);
        self.resume_url.apply(&mut settings.resume_url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_project() -> Project {
        Project {
            id: "neural-vis".to_string(),
            title: "Neural Vis".to_string(),
            category: "AI".to_string(),
            featured: true,
            tags: vec!["Rust".to_string()],
            description: "Desc".to_string(),
            long_description: Some("Long".to_string()),
            thumbnail: "https://example.com/a.png".to_string(),
            links: ProjectLinks {
                repo: Some("https://github.com/x/y".to_string()),
                demo: None,
            },
        }
    }

    // =====================================================
    // Decoding
    // =====================================================

    #[test]
    fn test_omitted_fields_decode_as_unset() {
        let patch: ProjectPatch = serde_json::from_value(json!({ "title": "New" })).unwrap();

        assert_eq!(patch.title, PatchField::Value("New".to_string()));
        assert!(patch.description.is_unset());
        assert!(patch.links.is_unset());
    }

    #[test]
    fn test_null_decodes_as_null() {
        let patch: ProjectPatch =
            serde_json::from_value(json!({ "long_description": null })).unwrap();
        assert_eq!(patch.long_description, PatchField::Null);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result: Result<ProjectPatch, _> =
            serde_json::from_value(json!({ "title": "x", "owner": "mallory" }));
        assert!(result.is_err());

        let result: Result<ProjectPatch, _> = serde_json::from_value(json!({ "id": "other" }));
        assert!(result.is_err(), "ids must not be patchable");
    }

    #[test]
    fn test_tags_patch_normalizes_legacy_string() {
        let patch: ProjectPatch = serde_json::from_value(json!({ "tags": "a, b" })).unwrap();
        assert_eq!(
            patch.tags,
            PatchField::Value(vec!["a".to_string(), "b".to_string()])
        );
    }

    // =====================================================
    // Application
    // =====================================================

    #[test]
    fn test_apply_project_patch_is_shallow_merge() {
        let mut project = sample_project();
        let patch = ProjectPatch {
            title: PatchField::Value("Renamed".to_string()),
            featured: PatchField::Value(false),
            ..Default::default()
        };

        patch.apply_to(&mut project);

        assert_eq!(project.title, "Renamed");
        assert!(!project.featured);
        assert_eq!(project.category, "AI");
        assert_eq!(project.tags, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_null_on_required_field_is_ignored() {
        let mut project = sample_project();
        let patch = ProjectPatch {
            title: PatchField::Null,
            ..Default::default()
        };

        patch.apply_to(&mut project);

        assert_eq!(project.title, "Neural Vis");
    }

    #[test]
    fn test_blank_optional_text_clears_field() {
        let mut project = sample_project();
        let patch = ProjectPatch {
            long_description: PatchField::Value("   ".to_string()),
            ..Default::default()
        };

        patch.apply_to(&mut project);

        assert_eq!(project.long_description, None);
    }

    #[test]
    fn test_links_replace_whole_object() {
        let mut project = sample_project();
        let patch = ProjectPatch {
            links: PatchField::Value(ProjectLinks {
                repo: None,
                demo: Some("https://demo.example.com".to_string()),
            }),
            ..Default::default()
        };

        patch.apply_to(&mut project);

        assert_eq!(project.links.repo, None);
        assert_eq!(
            project.links.demo.as_deref(),
            Some("https://demo.example.com")
        );
    }

    #[test]
    fn test_timeline_patch_accepts_legacy_aliases() {
        let patch: TimelinePatch =
            serde_json::from_value(json!({ "year": "2020", "role": "Lead", "isCurrent": true }))
                .unwrap();
        let mut entry = TimelineEntry::blank("t1");

        patch.apply_to(&mut entry);

        assert_eq!(entry.period, "2020");
        assert_eq!(entry.title, "Lead");
        assert!(entry.is_current);
    }

    #[test]
    fn test_gallery_patch_uses_type_key() {
        let patch: GalleryPatch =
            serde_json::from_value(json!({ "type": "Render", "color": "bg-teal-500" })).unwrap();
        let mut item = GalleryItem::blank("g1");

        patch.apply_to(&mut item);

        assert_eq!(item.kind, "Render");
        assert_eq!(item.color, "bg-teal-500");
    }

    #[test]
    fn test_settings_patch_clears_blank_form_endpoint() {
        let mut settings = GlobalSettings {
            form_endpoint: Some("https://formspree.io/f/abc".to_string()),
            ..Default::default()
        };
        let patch: SettingsPatch =
            serde_json::from_value(json!({ "formEndpoint": "", "accentColor": "#fff" })).unwrap();

        patch.apply_to(&mut settings);

        assert_eq!(settings.form_endpoint, None);
        assert_eq!(settings.accent_color, "#fff");
    }
}
