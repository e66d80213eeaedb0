//! Page assembly: resolves routes against the registry and renders them
//! through the content renderer and the page shell.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::debug;
use url::Url;

use crate::application::error::{ErrorReport, HttpError};
use crate::application::lifecycle::{self, LifecycleStep};
use crate::application::registry::{ProjectRegistry, RegistryError};
use crate::application::render::{Block, RenderOptions, render_document};
use crate::application::routes::{DocumentKind, PageRoute};
use crate::domain::content::Document;
use crate::domain::error::DomainError;
use crate::domain::profile::SiteProfile;
use crate::domain::projects::ProjectRecord;
use crate::domain::site::SiteContent;
use crate::domain::slug::AnchorSlugger;
use crate::presentation::blocks::{render_blocks, table_of_contents};
use crate::presentation::views::{
    DocumentLinkView, DocumentPageView, DocumentTemplate, ErrorPageView, ErrorTemplate, HomeView,
    IndexTemplate, LayoutChrome, LayoutContext, LifecycleStepView, ProjectCardView,
    ProjectPageView, ProjectTemplate, ResumeTemplate, ResumeView, StatusBadge, render_template,
};

const SOURCE: &str = "application::site::SiteService";

/// A fully rendered HTML page and the status it should be served with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub status: StatusCode,
    pub html: String,
}

impl RenderedPage {
    fn new(status: StatusCode, html: Html<String>) -> Self {
        Self {
            status,
            html: html.0,
        }
    }
}

impl IntoResponse for RenderedPage {
    fn into_response(self) -> Response {
        let status = self.status;
        let mut response = (status, Html(self.html)).into_response();
        if status == StatusCode::NOT_FOUND {
            ErrorReport::from_message(SOURCE, status, "Page not found").attach(&mut response);
        }
        response
    }
}

/// Which part of a project to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectDocument {
    Lifecycle,
    Document(DocumentKind),
}

#[derive(Debug, Clone)]
pub struct SiteService {
    profile: SiteProfile,
    registry: ProjectRegistry,
    options: RenderOptions,
    base_url: Url,
}

impl SiteService {
    pub fn new(
        content: SiteContent,
        options: RenderOptions,
        base_url: Url,
    ) -> Result<Self, DomainError> {
        let SiteContent { profile, projects } = content;
        let registry = ProjectRegistry::new(projects)?;
        Ok(Self {
            profile,
            registry,
            options,
            base_url,
        })
    }

    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    /// Every page the site publishes.
    pub fn routes(&self) -> Vec<PageRoute> {
        PageRoute::all(&self.registry)
    }

    pub fn render_path(&self, path: &str) -> Result<RenderedPage, HttpError> {
        self.render(&PageRoute::parse(path))
    }

    pub fn render(&self, route: &PageRoute) -> Result<RenderedPage, HttpError> {
        debug!(target = "folio::site", route = %route.path(), "rendering page");

        match route {
            PageRoute::Home => self.home(),
            PageRoute::Project { id } => match self.registry.find(id) {
                Ok(project) => self.project(project),
                Err(err) => self.project_not_found(&err),
            },
            PageRoute::Document { id, kind } => match self.registry.find(id) {
                Ok(project) => self.document(project, *kind),
                Err(err) => self.project_not_found(&err),
            },
            PageRoute::Resume => self.resume(),
            PageRoute::NotFound => self.not_found(),
        }
    }

    pub fn not_found(&self) -> Result<RenderedPage, HttpError> {
        self.error_page(ErrorPageView::not_found(), "page not found")
    }

    /// Render blocks for one project document, without the page shell.
    pub fn project_blocks(
        &self,
        id: &str,
        document: ProjectDocument,
    ) -> Result<Vec<Block>, RegistryError> {
        let project = self.registry.find(id)?;
        let blocks = match document {
            ProjectDocument::Lifecycle => self.lifecycle_blocks(project),
            ProjectDocument::Document(kind) => match project_document(project, kind) {
                Some(content) => render_document(content, &self.options),
                None => vec![Block::Paragraph {
                    text: kind.placeholder().to_string(),
                }],
            },
        };
        Ok(blocks)
    }

    fn home(&self) -> Result<RenderedPage, HttpError> {
        let content = HomeView {
            profile: self.profile.clone(),
            projects: self.registry.all().iter().map(project_card).collect(),
        };
        let view = LayoutContext::new(self.chrome(&PageRoute::Home), content);
        self.page(StatusCode::OK, IndexTemplate { view })
    }

    fn project(&self, project: &ProjectRecord) -> Result<RenderedPage, HttpError> {
        let steps = lifecycle::lifecycle_steps(project)
            .into_iter()
            .map(|step| self.step_view(project, step))
            .collect::<Result<Vec<_>, _>>()?;

        let documents = DocumentKind::ALL
            .into_iter()
            .map(|kind| DocumentLinkView {
                href: PageRoute::Document {
                    id: project.id.clone(),
                    kind,
                }
                .path(),
                label: kind.title(),
                available: project_document(project, kind).is_some(),
            })
            .collect();

        let content = ProjectPageView {
            title: project.title.clone(),
            status: status_badge(project),
            description: project.description.clone(),
            impact: project.impact.clone(),
            skills: project.skills.clone(),
            github_link: project.github_link.clone(),
            figma_link: project.figma_link.clone(),
            image: project.image.clone(),
            documents,
            steps,
        };

        let route = PageRoute::Project {
            id: project.id.clone(),
        };
        let chrome = self.chrome(&route).with_title(&project.title);
        let view = LayoutContext::new(chrome, content);
        self.page(StatusCode::OK, ProjectTemplate { view })
    }

    fn step_view(
        &self,
        project: &ProjectRecord,
        step: LifecycleStep<'_>,
    ) -> Result<LifecycleStepView, HttpError> {
        let body_html = render_blocks(&render_document(step.content, &self.options))?;
        let tracking_note_html = step
            .tracking_note
            .map(|note| render_blocks(&render_document(note, &self.options)))
            .transpose()?;
        let architecture_href = step
            .links_architecture
            .then(|| PageRoute::architecture(project.id.clone()).path());

        Ok(LifecycleStepView {
            number: step.number,
            name: step.name.to_string(),
            is_current: step.is_current,
            body_html,
            tracking_note_html,
            architecture_href,
        })
    }

    fn document(
        &self,
        project: &ProjectRecord,
        kind: DocumentKind,
    ) -> Result<RenderedPage, HttpError> {
        let (toc, body_html) = match project_document(project, kind) {
            Some(content) => {
                let blocks = render_document(content, &self.options);
                (table_of_contents(&blocks), Some(render_blocks(&blocks)?))
            }
            None => (Vec::new(), None),
        };

        let content = DocumentPageView {
            title: kind.title(),
            project_title: project.title.clone(),
            project_href: PageRoute::Project {
                id: project.id.clone(),
            }
            .path(),
            toc,
            body_html,
            placeholder: kind.placeholder(),
        };

        let route = PageRoute::Document {
            id: project.id.clone(),
            kind,
        };
        let title = format!("{} · {}", kind.title(), project.title);
        let chrome = self.chrome(&route).with_title(&title);
        let view = LayoutContext::new(chrome, content);
        self.page(StatusCode::OK, DocumentTemplate { view })
    }

    fn resume(&self) -> Result<RenderedPage, HttpError> {
        let content = ResumeView {
            owner: self.profile.name.clone(),
            pdf_path: self.profile.resume.path.clone(),
            download_name: self.profile.resume.download_name.clone(),
        };
        let chrome = self.chrome(&PageRoute::Resume).with_title("résumé");
        let view = LayoutContext::new(chrome, content);
        self.page(StatusCode::OK, ResumeTemplate { view })
    }

    fn project_not_found(&self, err: &RegistryError) -> Result<RenderedPage, HttpError> {
        debug!(target = "folio::site", error = %err, "project lookup failed");
        self.error_page(ErrorPageView::project_not_found(), "project not found")
    }

    fn error_page(&self, content: ErrorPageView, title: &str) -> Result<RenderedPage, HttpError> {
        let chrome = self.chrome(&PageRoute::NotFound).with_title(title);
        let view = LayoutContext::new(chrome, content);
        self.page(StatusCode::NOT_FOUND, ErrorTemplate { view })
    }

    fn page<T: Template>(&self, status: StatusCode, template: T) -> Result<RenderedPage, HttpError> {
        render_template(template).map(|html| RenderedPage::new(status, html))
    }

    fn chrome(&self, route: &PageRoute) -> LayoutChrome {
        LayoutChrome::from_profile(&self.profile).with_canonical(self.canonical_url(route))
    }

    fn canonical_url(&self, route: &PageRoute) -> String {
        let path = route.path();
        self.base_url
            .join(path.trim_start_matches('/'))
            .map(String::from)
            .unwrap_or_else(|_| self.base_url.to_string())
    }

    fn lifecycle_blocks(&self, project: &ProjectRecord) -> Vec<Block> {
        let mut anchors = AnchorSlugger::new();
        lifecycle::lifecycle_steps(project)
            .into_iter()
            .map(|step| {
                let mut children = render_document(step.content, &self.options);
                if let Some(note) = step.tracking_note {
                    children.extend(render_document(note, &self.options));
                }
                Block::Section {
                    heading: step.name.to_string(),
                    anchor: anchors.anchor_for(step.name),
                    children,
                }
            })
            .collect()
    }
}

fn project_document(project: &ProjectRecord, kind: DocumentKind) -> Option<&Document> {
    match kind {
        DocumentKind::Architecture => project.architecture(),
        DocumentKind::Frd => project.frd(),
    }
}

fn status_badge(project: &ProjectRecord) -> StatusBadge {
    StatusBadge {
        label: project.status.as_str(),
        is_in_progress: project.is_in_progress(),
        current_step: project
            .lifecycle_step
            .clone()
            .filter(|step| project.is_in_progress() && !step.trim().is_empty()),
    }
}

fn project_card(project: &ProjectRecord) -> ProjectCardView {
    ProjectCardView {
        href: PageRoute::Project {
            id: project.id.clone(),
        }
        .path(),
        title: project.title.clone(),
        description: project.description.clone(),
        image: project.image.clone(),
        status: status_badge(project),
        skills: project.skills.clone(),
    }
}
