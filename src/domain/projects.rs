//! Project records as declared in site content.

use serde::Deserialize;
use serde_json::Value;

use super::content::Document;

/// Lifecycle key whose content is folded into the metrics step instead of
/// being shown as a step of its own.
pub const TRACKING_NOTE_KEY: &str = "tracking note";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub lifecycle_step: Option<String>,
    pub description: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub figma_link: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "lifecycleContent")]
    pub lifecycle: Lifecycle,
    #[serde(default, rename = "architectureContent")]
    pub architecture: Option<Document>,
    #[serde(default, rename = "frdContent")]
    pub frd: Option<Document>,
}

impl ProjectRecord {
    /// Architecture document, treating an empty document as absent.
    pub fn architecture(&self) -> Option<&Document> {
        self.architecture.as_ref().filter(|doc| !doc.is_empty())
    }

    /// Feature requirements document, treating an empty document as absent.
    pub fn frd(&self) -> Option<&Document> {
        self.frd.as_ref().filter(|doc| !doc.is_empty())
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == ProjectStatus::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "in progress")]
    InProgress,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in progress",
        }
    }
}

/// Ordered lifecycle content, keyed by step name.
///
/// Accepts either a JSON object (key order preserved) or an array of
/// `{ "key": ..., "content": ... }` entries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Value")]
pub struct Lifecycle(Vec<LifecycleEntry>);

#[derive(Debug, Clone)]
pub struct LifecycleEntry {
    pub key: String,
    pub content: Document,
}

impl Lifecycle {
    pub fn entries(&self) -> &[LifecycleEntry] {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Document> {
        self.0
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.content)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Value> for Lifecycle {
    fn from(value: Value) -> Self {
        let entries = match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(key, content)| LifecycleEntry {
                    key,
                    content: Document::from_value(&content),
                })
                .collect(),
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| {
                    let key = item.get("key")?.as_str()?.to_string();
                    let content = item
                        .get("content")
                        .map(Document::from_value)
                        .unwrap_or_default();
                    Some(LifecycleEntry { key, content })
                })
                .collect(),
            _ => Vec::new(),
        };
        Self(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lifecycle_object_preserves_declaration_order() {
        let lifecycle = Lifecycle::from(json!({
            "problem statement": "p",
            "mvp success metrics": [{ "main": "m" }],
            "tracking note": "t",
            "design notes": "d"
        }));

        let keys: Vec<&str> = lifecycle
            .entries()
            .iter()
            .map(|entry| entry.key.as_str())
            .collect();
        assert_eq!(
            keys,
            vec![
                "problem statement",
                "mvp success metrics",
                "tracking note",
                "design notes"
            ]
        );
    }

    #[test]
    fn lifecycle_array_form_skips_entries_without_key() {
        let lifecycle = Lifecycle::from(json!([
            { "key": "discovery", "content": "c" },
            { "content": "orphan" }
        ]));
        assert_eq!(lifecycle.entries().len(), 1);
        assert!(lifecycle.get("discovery").is_some());
    }

    #[test]
    fn project_record_deserialises_camel_case_fields() {
        let project: ProjectRecord = serde_json::from_value(json!({
            "id": "internshipnet",
            "title": "InternshipNet",
            "status": "in progress",
            "lifecycleStep": "development",
            "description": "tracks companies",
            "skills": ["User Research"],
            "architectureContent": [],
            "frdContent": [{ "type": "heading", "text": "scope" }]
        }))
        .expect("valid project");

        assert!(project.is_in_progress());
        assert_eq!(project.lifecycle_step.as_deref(), Some("development"));
        assert!(project.architecture.is_some());
        assert!(project.architecture().is_none());
        assert_eq!(project.frd().map(Document::len), Some(1));
        assert!(project.lifecycle.is_empty());
    }
}
