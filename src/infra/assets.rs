//! Embedded static asset serving utilities.

use std::borrow::Cow;

use axum::{
    body::Body,
    extract::Path,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use include_dir::{Dir, include_dir};
use mime_guess::{Mime, MimeGuess};

use crate::application::error::ErrorReport;

static STATIC_ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

/// URL prefix under which the embedded bundle is mounted.
pub const STATIC_PREFIX: &str = "/static";

/// Serve embedded static assets (stylesheet, icons).
pub async fn serve_static(path: Option<Path<String>>) -> Response {
    let captured = path.map(|Path(value)| value);
    match resolve_asset(&STATIC_ASSETS, captured) {
        Some(asset) => asset.into_response(),
        None => not_found_response("infra::assets::serve_static"),
    }
}

/// Every embedded file as `(relative path, contents)`, for static export.
pub fn bundled_files() -> Vec<(&'static std::path::Path, &'static [u8])> {
    let mut files = Vec::new();
    collect_files(&STATIC_ASSETS, &mut files);
    files
}

fn collect_files(
    dir: &'static Dir<'static>,
    out: &mut Vec<(&'static std::path::Path, &'static [u8])>,
) {
    for file in dir.files() {
        out.push((file.path(), file.contents()));
    }
    for child in dir.dirs() {
        collect_files(child, out);
    }
}

fn not_found_response(source: &'static str) -> Response {
    let mut response = StatusCode::NOT_FOUND.into_response();
    ErrorReport::from_message(source, StatusCode::NOT_FOUND, "Static asset not found")
        .attach(&mut response);
    response
}

pub(crate) struct Asset<'a> {
    contents: Cow<'a, [u8]>,
    mime: MimeGuess,
}

impl Asset<'static> {
    /// Wrap bytes read at request time, guessing the content type from `path`.
    pub(crate) fn owned(path: &str, contents: Vec<u8>) -> Self {
        Self {
            contents: Cow::Owned(contents),
            mime: mime_guess::from_path(path),
        }
    }
}

/// Normalise a request path into a bundle-relative candidate, rejecting
/// traversal and directory requests.
pub(crate) fn sanitize_path(path: Option<String>) -> Option<String> {
    let candidate = path.unwrap_or_default();
    let candidate = candidate.trim_start_matches('/');

    if candidate.is_empty()
        || candidate.ends_with('/')
        || candidate.split('/').any(|segment| segment == "..")
        || candidate.contains(['\\', '\0'])
    {
        return None;
    }

    Some(candidate.to_string())
}

fn resolve_asset(bundle: &'static Dir<'static>, path: Option<String>) -> Option<Asset<'static>> {
    let candidate = sanitize_path(path)?;
    let file = bundle.get_file(&candidate)?;

    Some(Asset {
        contents: Cow::Borrowed(file.contents()),
        mime: mime_guess::from_path(&candidate),
    })
}

impl IntoResponse for Asset<'static> {
    fn into_response(self) -> Response {
        let mime = self.mime.first_or_octet_stream();
        match self.contents {
            Cow::Borrowed(slice) => build_response(Bytes::from_static(slice), mime),
            Cow::Owned(bytes) => build_response(Bytes::from(bytes), mime),
        }
    }
}

fn build_response(bytes: Bytes, mime: Mime) -> Response {
    let len = bytes.len();
    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = StatusCode::OK;

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(mime.as_ref()) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    if let Ok(value) = HeaderValue::from_str(&len.to_string()) {
        headers.insert(header::CONTENT_LENGTH, value);
    }
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=3600"),
    );

    response
}
