//! Static export: every route to `<out>/<path>/index.html`, plus the bundled
//! stylesheet and the public directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::application::routes::PageRoute;
use crate::application::site::SiteService;
use crate::infra::assets::{STATIC_PREFIX, bundled_files};
use crate::infra::error::InfraError;

/// Files written by one export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub assets: usize,
    pub public_files: usize,
}

pub async fn export_site(
    site: &SiteService,
    out_dir: &Path,
    public_dir: &Path,
) -> Result<ExportSummary, InfraError> {
    tokio::fs::create_dir_all(out_dir).await?;
    let mut summary = ExportSummary::default();

    for route in site.routes() {
        let page = site
            .render(&route)
            .map_err(|err| InfraError::render(route.path(), err.to_string()))?;
        let target = page_file(out_dir, &route);
        write_file(&target, page.html.as_bytes()).await?;
        debug!(
            target = "folio::export",
            route = %route.path(),
            status = page.status.as_u16(),
            file = %target.display(),
            "wrote page"
        );
        summary.pages += 1;
    }

    let not_found = site
        .not_found()
        .map_err(|err| InfraError::render(PageRoute::NotFound.path(), err.to_string()))?;
    write_file(&out_dir.join("404.html"), not_found.html.as_bytes()).await?;
    summary.pages += 1;

    let static_dir = out_dir.join(STATIC_PREFIX.trim_start_matches('/'));
    for (path, contents) in bundled_files() {
        write_file(&static_dir.join(path), contents).await?;
        summary.assets += 1;
    }

    summary.public_files = copy_public_dir(public_dir, out_dir).await?;

    info!(
        target = "folio::export",
        out_dir = %out_dir.display(),
        pages = summary.pages,
        assets = summary.assets,
        public_files = summary.public_files,
        "static export complete"
    );
    Ok(summary)
}

/// Output file for a route: `/` → `index.html`, `/a/b` → `a/b/index.html`.
pub fn page_file(out_dir: &Path, route: &PageRoute) -> PathBuf {
    let path = route.path();
    let mut target = out_dir.to_path_buf();
    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        target.push(segment);
    }
    target.push("index.html");
    target
}

async fn copy_public_dir(public_dir: &Path, out_dir: &Path) -> Result<usize, InfraError> {
    if !tokio::fs::try_exists(public_dir).await? {
        warn!(
            target = "folio::export",
            public_dir = %public_dir.display(),
            "public directory missing; media files will not be exported"
        );
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(public_dir).follow_links(true) {
        let entry = entry.map_err(|err| InfraError::Io(err.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(public_dir)
            .map_err(|err| InfraError::configuration(err.to_string()))?;
        let target = out_dir.join(relative);
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::copy(entry.path(), &target).await?;
        copied += 1;
    }
    Ok(copied)
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<(), InfraError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_files_nest_by_route() {
        let out = Path::new("/out");
        assert_eq!(page_file(out, &PageRoute::Home), PathBuf::from("/out/index.html"));
        assert_eq!(
            page_file(out, &PageRoute::architecture("bounce")),
            PathBuf::from("/out/project/bounce/architecture/index.html")
        );
    }
}
