use serde::Deserialize;

use super::{profile::SiteProfile, projects::ProjectRecord};

/// Everything the site publishes, as loaded from the content file.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub profile: SiteProfile,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
}
