use crate::application::error::HttpError;
use crate::domain::profile::SiteProfile;
use askama::{Error as AskamaError, Template};
use axum::{http::StatusCode, response::Html};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

#[derive(Clone)]
pub struct NavigationView {
    pub entries: Vec<NavigationLinkView>,
}

#[derive(Clone)]
pub struct FooterView {
    pub copy: String,
    pub source: Option<String>,
}

#[derive(Clone)]
pub struct BrandView {
    pub title: String,
    pub href: String,
}

#[derive(Clone)]
pub struct NavigationLinkView {
    pub label: String,
    pub href: String,
}

impl NavigationLinkView {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct LayoutChrome {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub footer: FooterView,
    pub meta: PageMetaView,
}

impl LayoutChrome {
    /// Chrome shared by every page, derived from the site profile.
    pub fn from_profile(profile: &SiteProfile) -> Self {
        Self {
            brand: BrandView {
                title: profile.name.clone(),
                href: "/".to_string(),
            },
            navigation: NavigationView {
                entries: vec![
                    NavigationLinkView::new("about", "/#about"),
                    NavigationLinkView::new("projects", "/#projects"),
                    NavigationLinkView::new("experience", "/#experience"),
                    NavigationLinkView::new("skills", "/#skills"),
                    NavigationLinkView::new("contact", "/#contact"),
                    NavigationLinkView::new("résumé", "/resume"),
                ],
            },
            footer: FooterView {
                copy: profile.contact.copyright.clone(),
                source: profile.contact.source.clone(),
            },
            meta: PageMetaView {
                title: profile.name.clone(),
                description: profile.tagline.clone(),
                canonical: "/".to_string(),
            },
        }
    }

    pub fn with_canonical(self, canonical: String) -> Self {
        Self {
            meta: self.meta.with_canonical(canonical),
            ..self
        }
    }

    /// Prefix the page title, keeping the site name as suffix.
    pub fn with_title(self, title: &str) -> Self {
        let full = format!("{title} · {}", self.meta.title);
        Self {
            meta: PageMetaView {
                title: full,
                ..self.meta
            },
            ..self
        }
    }
}

#[derive(Clone)]
pub struct LayoutContext<T> {
    pub brand: BrandView,
    pub navigation: NavigationView,
    pub footer: FooterView,
    pub meta: PageMetaView,
    pub content: T,
}

impl<T> LayoutContext<T> {
    pub fn new(chrome: LayoutChrome, content: T) -> Self {
        Self {
            brand: chrome.brand,
            navigation: chrome.navigation,
            footer: chrome.footer,
            meta: chrome.meta,
            content,
        }
    }
}

#[derive(Clone)]
pub struct PageMetaView {
    pub title: String,
    pub description: String,
    pub canonical: String,
}

impl PageMetaView {
    pub fn with_canonical(self, canonical: String) -> Self {
        Self { canonical, ..self }
    }
}

/// Status pill shown on project cards and headers.
#[derive(Clone)]
pub struct StatusBadge {
    pub label: &'static str,
    pub is_in_progress: bool,
    pub current_step: Option<String>,
}

#[derive(Clone)]
pub struct ProjectCardView {
    pub href: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub status: StatusBadge,
    pub skills: Vec<String>,
}

pub struct HomeView {
    pub profile: SiteProfile,
    pub projects: Vec<ProjectCardView>,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub view: LayoutContext<HomeView>,
}

pub struct LifecycleStepView {
    pub number: usize,
    pub name: String,
    pub is_current: bool,
    pub body_html: String,
    pub tracking_note_html: Option<String>,
    pub architecture_href: Option<String>,
}

pub struct DocumentLinkView {
    pub href: String,
    pub label: &'static str,
    pub available: bool,
}

pub struct ProjectPageView {
    pub title: String,
    pub status: StatusBadge,
    pub description: String,
    pub impact: String,
    pub skills: Vec<String>,
    pub github_link: Option<String>,
    pub figma_link: Option<String>,
    pub image: Option<String>,
    pub documents: Vec<DocumentLinkView>,
    pub steps: Vec<LifecycleStepView>,
}

#[derive(Template)]
#[template(path = "project.html")]
pub struct ProjectTemplate {
    pub view: LayoutContext<ProjectPageView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntryView {
    pub anchor: String,
    pub label: String,
    pub depth: usize,
}

pub struct DocumentPageView {
    pub title: &'static str,
    pub project_title: String,
    pub project_href: String,
    pub toc: Vec<TocEntryView>,
    pub body_html: Option<String>,
    pub placeholder: &'static str,
}

#[derive(Template)]
#[template(path = "document.html")]
pub struct DocumentTemplate {
    pub view: LayoutContext<DocumentPageView>,
}

pub struct ResumeView {
    pub owner: String,
    pub pdf_path: String,
    pub download_name: String,
}

#[derive(Template)]
#[template(path = "resume.html")]
pub struct ResumeTemplate {
    pub view: LayoutContext<ResumeView>,
}

pub struct ErrorPageView {
    pub title: String,
    pub message: String,
    pub primary_action: Option<ErrorAction>,
}

impl ErrorPageView {
    pub fn not_found() -> Self {
        Self {
            title: "page not found".to_string(),
            message: "The page you requested does not exist. Try returning to the homepage to keep exploring.".to_string(),
            primary_action: Some(ErrorAction::home()),
        }
    }

    pub fn project_not_found() -> Self {
        Self {
            title: "project not found".to_string(),
            message: "the project you're looking for doesn't exist :(".to_string(),
            primary_action: Some(ErrorAction::projects()),
        }
    }
}

pub struct ErrorAction {
    pub href: String,
    pub label: String,
}

impl ErrorAction {
    pub fn home() -> Self {
        Self {
            href: "/".to_string(),
            label: "back to home".to_string(),
        }
    }

    pub fn projects() -> Self {
        Self {
            href: "/#projects".to_string(),
            label: "back to projects".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub view: LayoutContext<ErrorPageView>,
}
