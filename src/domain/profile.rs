//! Presentational profile data for the home and résumé pages.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteProfile {
    pub name: String,
    /// Short line shown above the hero greeting.
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub portrait: Option<Snapshot>,
    pub about: About,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    pub contact: Contact,
    pub resume: Resume,
}

/// An image with an optional handwritten-style caption.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub src: String,
    pub alt: String,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub pillars: Vec<AboutPillar>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPillar {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image: Option<Snapshot>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub pitch: String,
    pub email: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    /// Link to the source of the site itself.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub copyright: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    /// Public path of the PDF, e.g. `/resume.pdf`.
    pub path: String,
    pub download_name: String,
}
