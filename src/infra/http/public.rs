use std::{io::ErrorKind, path::PathBuf, sync::Arc};

use axum::{
    Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use percent_encoding::percent_decode_str;
use tracing::error;

use crate::{
    application::{
        error::ErrorReport,
        routes::{DocumentKind, PageRoute},
        site::SiteService,
    },
    infra::assets::{self, Asset, sanitize_path},
};

use super::middleware::log_responses;

#[derive(Clone)]
pub struct HttpState {
    pub site: Arc<SiteService>,
    /// Directory of public files (images, résumé PDF) served as-is.
    pub public_dir: PathBuf,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/resume", get(resume))
        .route("/project/{id}", get(project))
        .route("/project/{id}/{document}", get(project_document))
        .route("/static/{*path}", get(assets::serve_static))
        .fallback(fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
}

async fn index(State(state): State<HttpState>) -> Response {
    render_route(&state, &PageRoute::Home)
}

async fn resume(State(state): State<HttpState>) -> Response {
    render_route(&state, &PageRoute::Resume)
}

async fn project(State(state): State<HttpState>, Path(id): Path<String>) -> Response {
    render_route(&state, &PageRoute::Project { id })
}

async fn project_document(
    State(state): State<HttpState>,
    Path((id, document)): Path<(String, String)>,
) -> Response {
    let route = match DocumentKind::from_segment(&document) {
        Some(kind) => PageRoute::Document { id, kind },
        None => PageRoute::NotFound,
    };
    render_route(&state, &route)
}

fn render_route(state: &HttpState, route: &PageRoute) -> Response {
    match state.site.render(route) {
        Ok(page) => page.into_response(),
        Err(err) => err.into_response(),
    }
}

/// Files from the public directory, or the not-found page.
async fn fallback(State(state): State<HttpState>, request: Request<Body>) -> Response {
    let Ok(decoded) = percent_decode_str(request.uri().path()).decode_utf8() else {
        return not_found(&state);
    };
    let Some(relative) = sanitize_path(Some(decoded.into_owned())) else {
        return not_found(&state);
    };

    match tokio::fs::read(state.public_dir.join(&relative)).await {
        Ok(contents) => Asset::owned(&relative, contents).into_response(),
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::IsADirectory) => {
            not_found(&state)
        }
        Err(err) => {
            error!(
                target = "folio::http::public",
                path = %relative,
                error = %err,
                "failed to read public file"
            );
            let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
            ErrorReport::from_error(
                "infra::http::public::fallback",
                StatusCode::INTERNAL_SERVER_ERROR,
                &err,
            )
            .attach(&mut response);
            response
        }
    }
}

fn not_found(state: &HttpState) -> Response {
    match state.site.not_found() {
        Ok(page) => page.into_response(),
        Err(err) => err.into_response(),
    }
}
