use email_address::EmailAddress;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::modules::content::domain::ContentSnapshot;

//
// ──────────────────────────────────────────────────────────
// Failure
// ──────────────────────────────────────────────────────────
//

/// First rule a candidate configuration broke, with the path to the
/// offending value (`["projects", "2", "thumbnail"]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{}: {message}", dotted(.path))]
pub struct ValidationFailure {
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationFailure {
    fn new(path: &[String], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    pub fn dotted_path(&self) -> String {
        dotted(&self.path)
    }
}

fn dotted(path: &[String]) -> String {
    if path.is_empty() {
        "(root)".to_string()
    } else {
        path.join(".")
    }
}

type Outcome = Result<(), ValidationFailure>;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#([0-9a-f]{3}){1,2}$").expect("valid hex colour regex"));

const REQUIRED: &str = "Required";
const EXPECTED_STRING: &str = "Expected string";
const EXPECTED_BOOLEAN: &str = "Expected boolean";
const EXPECTED_ARRAY: &str = "Expected array";
const EXPECTED_OBJECT: &str = "Expected object";
const INVALID_URL: &str = "Invalid url";

//
// ──────────────────────────────────────────────────────────
// Entry points
// ──────────────────────────────────────────────────────────
//

/// Checks a whole proposed configuration. Fail-fast: only the first broken
/// rule is reported, in document order (projects, timeline, gallery,
/// globalSettings, sectionOrder).
pub fn validate(candidate: &Value) -> Outcome {
    let root = candidate
        .as_object()
        .ok_or_else(|| ValidationFailure::new(&[], EXPECTED_OBJECT))?;

    each_record(root, "projects", check_project)?;
    each_record(root, "timeline", check_timeline_entry)?;
    each_record(root, "gallery", check_gallery_item)?;
    check_settings(root)?;
    check_section_order(root)
}

/// Validates, then decodes into the typed snapshot. Ids given as numbers and
/// tags given as comma-separated strings are normalized on the way in.
pub fn parse_candidate(candidate: &Value) -> Result<ContentSnapshot, ValidationFailure> {
    validate(candidate)?;

    let mut normalized = candidate.clone();
    fold_legacy_project_links(&mut normalized);

    serde_json::from_value(normalized).map_err(|e| ValidationFailure::new(&[], e.to_string()))
}

/// Older exports kept `repo` / `demo` on the project itself.
fn fold_legacy_project_links(candidate: &mut Value) {
    let Some(projects) = candidate.get_mut("projects").and_then(Value::as_array_mut) else {
        return;
    };

    for project in projects.iter_mut().filter_map(Value::as_object_mut) {
        for key in ["repo", "demo"] {
            let Some(legacy) = project.remove(key) else {
                continue;
            };
            if legacy.as_str().map_or(true, str::is_empty) {
                continue;
            }
            let links = project
                .entry("links")
                .or_insert_with(|| Value::Object(Map::new()));
            if let Some(links) = links.as_object_mut() {
                links.entry(key).or_insert(legacy);
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Sections
// ──────────────────────────────────────────────────────────
//

fn each_record(
    root: &Map<String, Value>,
    key: &str,
    check: fn(&Map<String, Value>, &[String]) -> Outcome,
) -> Outcome {
    let path = vec![key.to_string()];
    let items = match root.get(key) {
        None => return Err(ValidationFailure::new(&path, REQUIRED)),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationFailure::new(&path, EXPECTED_ARRAY)),
    };

    for (index, item) in items.iter().enumerate() {
        let item_path = child(&path, &index.to_string());
        let record = item
            .as_object()
            .ok_or_else(|| ValidationFailure::new(&item_path, EXPECTED_OBJECT))?;
        check(record, &item_path)?;
    }
    Ok(())
}

fn check_project(record: &Map<String, Value>, path: &[String]) -> Outcome {
    required_text(record, path, "id", "ID is required")?;
    required_text(record, path, "title", "Title is required")?;
    required_text(record, path, "category", "Category is required")?;
    required_bool(record, path, "featured")?;
    tags(record, path, true)?;
    required_string(record, path, "description")?;
    optional_string(record, path, "long_description")?;
    optional_url(record, path, "repo", INVALID_URL)?;
    optional_url(record, path, "demo", INVALID_URL)?;
    optional_url(record, path, "thumbnail", INVALID_URL)?;

    match record.get("links") {
        None => Ok(()),
        Some(Value::Object(links)) => {
            let links_path = child(path, "links");
            optional_url(links, &links_path, "repo", INVALID_URL)?;
            optional_url(links, &links_path, "demo", INVALID_URL)
        }
        Some(_) => Err(ValidationFailure::new(&child(path, "links"), EXPECTED_OBJECT)),
    }
}

fn check_timeline_entry(record: &Map<String, Value>, path: &[String]) -> Outcome {
    id(record, path)?;
    exclusive_alias(record, path, "period", "year")?;
    exclusive_alias(record, path, "title", "role")?;
    required_string_aliased(record, path, "period", "year")?;
    required_string_aliased(record, path, "title", "role")?;
    optional_string(record, path, "company")?;
    required_string(record, path, "description")?;
    optional_bool(record, path, "isCurrent")?;
    tags(record, path, false)
}

fn check_gallery_item(record: &Map<String, Value>, path: &[String]) -> Outcome {
    id(record, path)?;
    required_url(record, path, "url")?;
    required_string(record, path, "title")?;
    optional_string(record, path, "type")?;
    optional_string(record, path, "category")?;
    optional_string(record, path, "color")?;
    exclusive_alias(record, path, "type", "category")
}

fn check_settings(root: &Map<String, Value>) -> Outcome {
    let path = vec!["globalSettings".to_string()];
    let settings = match root.get("globalSettings") {
        None => return Err(ValidationFailure::new(&path, REQUIRED)),
        Some(Value::Object(settings)) => settings,
        Some(_) => return Err(ValidationFailure::new(&path, EXPECTED_OBJECT)),
    };

    let accent = required_string(settings, &path, "accentColor")?;
    if !is_hex_color(accent) {
        return Err(ValidationFailure::new(
            &child(&path, "accentColor"),
            "Invalid Hex Color",
        ));
    }
    required_string(settings, &path, "fontHeading")?;
    required_string(settings, &path, "fontBody")?;

    // Cleared contact fields are stored as null.
    let contact = without_nulls(settings);
    optional_url(&contact, &path, "formEndpoint", INVALID_URL)?;

    if let Some(email) = optional_string(&contact, &path, "email")? {
        if !email.is_empty() && !EmailAddress::is_valid(email) {
            return Err(ValidationFailure::new(
                &child(&path, "email"),
                "Invalid Email Address",
            ));
        }
    }

    optional_url(&contact, &path, "github", "Invalid GitHub URL")?;
    optional_url(&contact, &path, "linkedin", "Invalid LinkedIn URL")?;
    optional_string(settings, &path, "resumeUrl")?;
    Ok(())
}

fn without_nulls(record: &Map<String, Value>) -> Map<String, Value> {
    record
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn check_section_order(root: &Map<String, Value>) -> Outcome {
    let path = vec!["sectionOrder".to_string()];
    let items = match root.get("sectionOrder") {
        None => return Err(ValidationFailure::new(&path, REQUIRED)),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationFailure::new(&path, EXPECTED_ARRAY)),
    };

    match items.iter().position(|item| !item.is_string()) {
        Some(index) => Err(ValidationFailure::new(
            &child(&path, &index.to_string()),
            EXPECTED_STRING,
        )),
        None => Ok(()),
    }
}

//
// ──────────────────────────────────────────────────────────
// Field rules
// ──────────────────────────────────────────────────────────
//

fn child(path: &[String], segment: &str) -> Vec<String> {
    let mut next = path.to_vec();
    next.push(segment.to_string());
    next
}

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

fn required_string<'a>(
    record: &'a Map<String, Value>,
    path: &[String],
    key: &str,
) -> Result<&'a str, ValidationFailure> {
    match record.get(key) {
        None => Err(ValidationFailure::new(&child(path, key), REQUIRED)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ValidationFailure::new(&child(path, key), EXPECTED_STRING)),
    }
}

fn required_text(
    record: &Map<String, Value>,
    path: &[String],
    key: &str,
    empty_message: &str,
) -> Outcome {
    match required_string(record, path, key)? {
        "" => Err(ValidationFailure::new(&child(path, key), empty_message)),
        _ => Ok(()),
    }
}

/// The current key wins; the legacy key satisfies the rule when the current
/// one is absent.
fn required_string_aliased(
    record: &Map<String, Value>,
    path: &[String],
    key: &str,
    legacy: &str,
) -> Outcome {
    if record.contains_key(key) || !record.contains_key(legacy) {
        required_string(record, path, key).map(|_| ())
    } else {
        required_string(record, path, legacy).map(|_| ())
    }
}

/// A record may carry a field under its current name or its legacy name,
/// never both.
fn exclusive_alias(
    record: &Map<String, Value>,
    path: &[String],
    key: &str,
    legacy: &str,
) -> Outcome {
    if record.contains_key(key) && record.contains_key(legacy) {
        Err(ValidationFailure::new(
            &child(path, legacy),
            format!("Duplicate of `{key}`"),
        ))
    } else {
        Ok(())
    }
}

fn optional_string<'a>(
    record: &'a Map<String, Value>,
    path: &[String],
    key: &str,
) -> Result<Option<&'a str>, ValidationFailure> {
    match record.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(_) => Err(ValidationFailure::new(&child(path, key), EXPECTED_STRING)),
    }
}

fn required_bool(record: &Map<String, Value>, path: &[String], key: &str) -> Outcome {
    match record.get(key) {
        None => Err(ValidationFailure::new(&child(path, key), REQUIRED)),
        Some(Value::Bool(_)) => Ok(()),
        Some(_) => Err(ValidationFailure::new(&child(path, key), EXPECTED_BOOLEAN)),
    }
}

fn optional_bool(record: &Map<String, Value>, path: &[String], key: &str) -> Outcome {
    match record.get(key) {
        None | Some(Value::Bool(_)) => Ok(()),
        Some(_) => Err(ValidationFailure::new(&child(path, key), EXPECTED_BOOLEAN)),
    }
}

fn required_url(record: &Map<String, Value>, path: &[String], key: &str) -> Outcome {
    let value = required_string(record, path, key)?;
    if is_absolute_url(value) {
        Ok(())
    } else {
        Err(ValidationFailure::new(&child(path, key), INVALID_URL))
    }
}

/// Absent and empty are both accepted.
fn optional_url(
    record: &Map<String, Value>,
    path: &[String],
    key: &str,
    message: &str,
) -> Outcome {
    match optional_string(record, path, key)? {
        Some(value) if !value.is_empty() && !is_absolute_url(value) => {
            Err(ValidationFailure::new(&child(path, key), message))
        }
        _ => Ok(()),
    }
}

fn id(record: &Map<String, Value>, path: &[String]) -> Outcome {
    match record.get("id") {
        None => Err(ValidationFailure::new(&child(path, "id"), REQUIRED)),
        Some(Value::String(_)) | Some(Value::Number(_)) => Ok(()),
        Some(_) => Err(ValidationFailure::new(
            &child(path, "id"),
            "Expected string or number",
        )),
    }
}

/// Projects still accept the legacy comma-separated form; timeline tags must
/// be a list.
fn tags(record: &Map<String, Value>, path: &[String], required: bool) -> Outcome {
    let tags_path = child(path, "tags");
    match record.get("tags") {
        None if required => Err(ValidationFailure::new(&tags_path, REQUIRED)),
        None => Ok(()),
        Some(Value::String(_)) if required => Ok(()),
        Some(Value::Array(items)) => match items.iter().position(|t| !t.is_string()) {
            Some(index) => Err(ValidationFailure::new(
                &child(&tags_path, &index.to_string()),
                EXPECTED_STRING,
            )),
            None => Ok(()),
        },
        Some(_) => Err(ValidationFailure::new(&tags_path, EXPECTED_ARRAY)),
    }
}
