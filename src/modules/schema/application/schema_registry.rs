use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::modules::editor::domain::EditorTab;

pub const SCHEMA_VERSION: &str = "1.2.0";
pub const SCHEMA_ID: &str = "https://portfolio.local/schemas/portfolio.schema.json";

static DOCUMENT: Lazy<Value> = Lazy::new(build_document);

fn build_document() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "$id": SCHEMA_ID,
        "version": SCHEMA_VERSION,
        "title": "Portfolio content",
        "type": "object",
        "definitions": {
            "project": {
                "title": "Project",
                "type": "object",
                "required": ["id", "title", "category"],
                "properties": {
                    "id": { "type": "string", "title": "ID" },
                    "title": { "type": "string", "title": "Title" },
                    "category": { "type": "string", "title": "Category" },
                    "featured": { "type": "boolean", "title": "Featured", "default": false },
                    "tags": {
                        "type": "array",
                        "title": "Tags",
                        "items": { "type": "string" }
                    },
                    "description": { "type": "string", "title": "Short description" },
                    "long_description": { "type": "string", "title": "Long description" },
                    "thumbnail": { "type": "string", "title": "Thumbnail URL", "format": "uri" },
                    "links": {
                        "type": "object",
                        "title": "Links",
                        "properties": {
                            "repo": { "type": "string", "title": "Repository", "format": "uri" },
                            "demo": { "type": "string", "title": "Live demo", "format": "uri" }
                        }
                    }
                }
            },
            "timelineEntry": {
                "title": "Timeline entry",
                "type": "object",
                "required": ["id", "period", "title"],
                "properties": {
                    "id": { "type": "string", "title": "ID" },
                    "period": { "type": "string", "title": "Period" },
                    "title": { "type": "string", "title": "Title" },
                    "company": { "type": "string", "title": "Company" },
                    "description": { "type": "string", "title": "Description" },
                    "isCurrent": { "type": "boolean", "title": "Current position", "default": false },
                    "tags": {
                        "type": "array",
                        "title": "Tags",
                        "items": { "type": "string" }
                    }
                }
            },
            "galleryItem": {
                "title": "Gallery item",
                "type": "object",
                "required": ["id", "title", "url"],
                "properties": {
                    "id": { "type": "string", "title": "ID" },
                    "title": { "type": "string", "title": "Title" },
                    "type": { "type": "string", "title": "Type" },
                    "color": { "type": "string", "title": "Colour hint" },
                    "url": { "type": "string", "title": "Image URL", "format": "uri" }
                }
            },
            "globalSettings": {
                "title": "Global settings",
                "type": "object",
                "required": ["accentColor", "fontHeading", "fontBody"],
                "properties": {
                    "accentColor": {
                        "type": "string",
                        "title": "Accent colour",
                        "pattern": "^#([0-9a-fA-F]{3}){1,2}$"
                    },
                    "fontHeading": { "type": "string", "title": "Heading font" },
                    "fontBody": { "type": "string", "title": "Body font" },
                    "formEndpoint": { "type": ["string", "null"], "title": "Contact form endpoint", "format": "uri" },
                    "email": { "type": ["string", "null"], "title": "E-mail", "format": "email" },
                    "github": { "type": ["string", "null"], "title": "GitHub", "format": "uri" },
                    "linkedin": { "type": ["string", "null"], "title": "LinkedIn", "format": "uri" },
                    "resumeUrl": { "type": "string", "title": "Resume URL" }
                }
            }
        },
        "properties": {
            "projects": {
                "type": "array",
                "items": { "$ref": "#/definitions/project" }
            },
            "timeline": {
                "type": "array",
                "items": { "$ref": "#/definitions/timelineEntry" }
            },
            "gallery": {
                "type": "array",
                "items": { "$ref": "#/definitions/galleryItem" }
            },
            "globalSettings": { "$ref": "#/definitions/globalSettings" },
            "sectionOrder": {
                "type": "array",
                "items": {
                    "type": "string",
                    "enum": ["hero", "about", "projects", "timeline", "gallery", "contact"]
                }
            }
        }
    })
}

fn definition_key(tab: EditorTab) -> &'static str {
    match tab {
        EditorTab::Projects => "project",
        EditorTab::Timeline => "timelineEntry",
        EditorTab::Gallery => "galleryItem",
        EditorTab::Settings => "globalSettings",
    }
}

fn property_key(tab: EditorTab) -> &'static str {
    match tab {
        EditorTab::Projects => "projects",
        EditorTab::Timeline => "timeline",
        EditorTab::Gallery => "gallery",
        EditorTab::Settings => "globalSettings",
    }
}

/// The whole versioned schema document.
pub fn document() -> &'static Value {
    &DOCUMENT
}

/// Schema for a single record of `tab`, with `$ref`s already resolved so a
/// form renderer can consume it standalone.
pub fn item_schema(tab: EditorTab) -> Value {
    DOCUMENT["definitions"][definition_key(tab)].clone()
}

/// Schema for the whole collection behind `tab`. Settings is not a
/// collection, so it yields the object schema.
pub fn list_schema(tab: EditorTab) -> Value {
    if !tab.is_collection() {
        return item_schema(tab);
    }

    let mut list = DOCUMENT["properties"][property_key(tab)].clone();
    list["items"] = item_schema(tab);
    list
}
