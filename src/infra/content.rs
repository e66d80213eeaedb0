//! Loading site content from disk or from the copy bundled with the binary.

use std::path::Path;

use tracing::{info, warn};

use crate::domain::site::SiteContent;
use crate::infra::error::InfraError;

const BUNDLED_CONTENT: &str = include_str!("../../content/site.json");
const BUNDLED_LABEL: &str = "<bundled>";

/// Load content from `path`, or the bundled site content when `None`.
pub async fn load(path: Option<&Path>) -> Result<SiteContent, InfraError> {
    let content = match path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .map_err(|err| InfraError::content(path, err.to_string()))?;
            let content = parse(&raw).map_err(|err| InfraError::content(path, err))?;
            info!(
                target = "folio::content",
                path = %path.display(),
                projects = content.projects.len(),
                "loaded site content"
            );
            content
        }
        None => bundled()?,
    };

    report_unknown_nodes(&content);
    Ok(content)
}

/// Content compiled into the binary.
pub fn bundled() -> Result<SiteContent, InfraError> {
    parse(BUNDLED_CONTENT).map_err(|err| InfraError::content(BUNDLED_LABEL, err))
}

pub fn parse(raw: &str) -> Result<SiteContent, String> {
    serde_json::from_str(raw).map_err(|err| err.to_string())
}

fn report_unknown_nodes(content: &SiteContent) {
    for project in &content.projects {
        let lifecycle: usize = project
            .lifecycle
            .entries()
            .iter()
            .map(|entry| entry.content.unknown_count())
            .sum();
        let documents: usize = [&project.architecture, &project.frd]
            .into_iter()
            .flatten()
            .map(|doc| doc.unknown_count())
            .sum();

        let unknown = lifecycle + documents;
        if unknown > 0 {
            warn!(
                target = "folio::content",
                project = %project.id,
                unknown_nodes = unknown,
                "project content contains nodes that will not render"
            );
        }
    }
}
