//! Project lifecycle steps as shown on a project page.

use crate::domain::content::Document;
use crate::domain::projects::{ProjectRecord, TRACKING_NOTE_KEY};

const METRICS_STEP: &str = "mvp success metrics";
const DEVELOPMENT_MARKER: &str = "development";

const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("mvp success metrics", "MVP success metrics"),
    ("design notes", "design"),
    ("development - systems architecture", "development"),
    ("functional improvements & iterations", "iterations & improvements"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleStep<'a> {
    /// 1-based position among displayed steps.
    pub number: usize,
    pub key: &'a str,
    pub name: &'a str,
    pub is_current: bool,
    pub content: &'a Document,
    /// Present only on the metrics step.
    pub tracking_note: Option<&'a Document>,
    pub links_architecture: bool,
}

/// Human-facing name for a lifecycle key; unmapped keys display as-is.
pub fn display_name(key: &str) -> &str {
    DISPLAY_NAMES
        .iter()
        .find(|(raw, _)| raw.eq_ignore_ascii_case(key))
        .map(|(_, name)| *name)
        .unwrap_or(key)
}

/// Whether `step_name` is the project's current step. Either name may
/// contain the other, ignoring case; an empty current step never matches.
pub fn is_current_step(project: &ProjectRecord, step_name: &str) -> bool {
    let Some(current) = project
        .lifecycle_step
        .as_deref()
        .map(str::trim)
        .filter(|step| !step.is_empty())
    else {
        return false;
    };

    let step = step_name.to_lowercase();
    let current = current.to_lowercase();
    project.is_in_progress() && (step.contains(&current) || current.contains(&step))
}

/// Displayed steps in declaration order, without the tracking note entry.
pub fn lifecycle_steps(project: &ProjectRecord) -> Vec<LifecycleStep<'_>> {
    let tracking_note = project
        .lifecycle
        .get(TRACKING_NOTE_KEY)
        .filter(|note| !note.is_empty());
    let has_architecture = project.architecture().is_some();

    project
        .lifecycle
        .entries()
        .iter()
        .filter(|entry| entry.key != TRACKING_NOTE_KEY)
        .enumerate()
        .map(|(index, entry)| {
            let name = display_name(&entry.key);
            let is_metrics = entry.key.eq_ignore_ascii_case(METRICS_STEP);
            LifecycleStep {
                number: index + 1,
                key: &entry.key,
                name,
                is_current: is_current_step(project, name),
                content: &entry.content,
                tracking_note: tracking_note.filter(|_| is_metrics),
                links_architecture: has_architecture
                    && entry.key.to_lowercase().contains(DEVELOPMENT_MARKER),
            }
        })
        .collect()
}
