//! Site paths and their typed routes.

use crate::application::registry::ProjectRegistry;

/// Project documents that have a page of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Architecture,
    Frd,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Architecture, DocumentKind::Frd];

    /// Path segment under `/project/{id}/`.
    pub fn segment(&self) -> &'static str {
        match self {
            DocumentKind::Architecture => "architecture",
            DocumentKind::Frd => "frd",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::Architecture => "Systems Architecture",
            DocumentKind::Frd => "Feature Requirements Document",
        }
    }

    /// Text shown when the project has no such document.
    pub fn placeholder(&self) -> &'static str {
        match self {
            DocumentKind::Architecture => "Architecture documentation coming soon...",
            DocumentKind::Frd => "Feature Requirements Document coming soon...",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.segment() == segment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageRoute {
    Home,
    Project { id: String },
    Document { id: String, kind: DocumentKind },
    Resume,
    NotFound,
}

impl PageRoute {
    /// Resolve a request path. Query strings, fragments and trailing slashes
    /// are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => PageRoute::Home,
            ["resume"] => PageRoute::Resume,
            ["project", id] => PageRoute::Project { id: id.to_string() },
            ["project", id, segment] => match DocumentKind::from_segment(segment) {
                Some(kind) => PageRoute::Document {
                    id: id.to_string(),
                    kind,
                },
                None => PageRoute::NotFound,
            },
            _ => PageRoute::NotFound,
        }
    }

    pub fn architecture(id: impl Into<String>) -> Self {
        PageRoute::Document {
            id: id.into(),
            kind: DocumentKind::Architecture,
        }
    }

    pub fn frd(id: impl Into<String>) -> Self {
        PageRoute::Document {
            id: id.into(),
            kind: DocumentKind::Frd,
        }
    }

    /// Canonical path for the route. The not-found route maps to `/404`,
    /// which parses back to itself.
    pub fn path(&self) -> String {
        match self {
            PageRoute::Home => "/".to_string(),
            PageRoute::Project { id } => format!("/project/{id}"),
            PageRoute::Document { id, kind } => format!("/project/{id}/{}", kind.segment()),
            PageRoute::Resume => "/resume".to_string(),
            PageRoute::NotFound => "/404".to_string(),
        }
    }

    /// Every page the site serves, in navigation order.
    pub fn all(registry: &ProjectRegistry) -> Vec<PageRoute> {
        let mut routes = vec![PageRoute::Home, PageRoute::Resume];
        for project in registry.all() {
            routes.push(PageRoute::Project {
                id: project.id.clone(),
            });
            for kind in DocumentKind::ALL {
                routes.push(PageRoute::Document {
                    id: project.id.clone(),
                    kind,
                });
            }
        }
        routes
    }
}
