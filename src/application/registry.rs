//! Read-only lookup of project records by identifier.

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::{error::DomainError, projects::ProjectRecord};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no project with id `{id}`")]
    LookupFailed { id: String },
}

/// Projects in declaration order, indexed by id. Never mutated after load.
#[derive(Debug, Clone, Default)]
pub struct ProjectRegistry {
    projects: Vec<ProjectRecord>,
    index: HashMap<String, usize>,
}

impl ProjectRegistry {
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, DomainError> {
        let mut index = HashMap::with_capacity(projects.len());
        for (position, project) in projects.iter().enumerate() {
            if project.id.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "project #{} has an empty id",
                    position + 1
                )));
            }
            if !is_url_segment(&project.id) {
                return Err(DomainError::validation(format!(
                    "project id `{}` must be a single url path segment of ASCII letters, digits, `-`, `_`, `.` or `~`",
                    project.id
                )));
            }
            if index.insert(project.id.clone(), position).is_some() {
                return Err(DomainError::validation(format!(
                    "duplicate project id `{}`",
                    project.id
                )));
            }
        }

        Ok(Self { projects, index })
    }

    pub fn find(&self, id: &str) -> Result<&ProjectRecord, RegistryError> {
        self.index
            .get(id)
            .map(|&position| &self.projects[position])
            .ok_or_else(|| RegistryError::LookupFailed { id: id.to_string() })
    }

    pub fn all(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Ids appear verbatim in `/project/{id}` and as an export directory name.
fn is_url_segment(id: &str) -> bool {
    id != "."
        && id != ".."
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~'))
}
