use folio::{
    application::{render::RenderOptions, routes::PageRoute, site::SiteService},
    infra::{content, export},
};
use url::Url;

fn site() -> SiteService {
    SiteService::new(
        content::bundled().expect("bundled content"),
        RenderOptions::default(),
        Url::parse("https://example.com/").expect("base url"),
    )
    .expect("site service")
}

#[tokio::test]
async fn writes_every_route_and_assets() {
    let site = site();
    let out = tempfile::tempdir().expect("out dir");
    let public = tempfile::tempdir().expect("public dir");
    std::fs::create_dir_all(public.path().join("bounce")).expect("mkdir");
    std::fs::write(public.path().join("bounce/map.png"), [0u8, 1, 2]).expect("write image");

    let summary = export::export_site(&site, out.path(), public.path())
        .await
        .expect("export succeeds");

    let routes = site.routes();
    assert_eq!(summary.pages, routes.len() + 1);
    assert_eq!(summary.public_files, 1);

    for route in &routes {
        let file = export::page_file(out.path(), route);
        assert!(file.is_file(), "missing {}", file.display());
        assert_eq!(&PageRoute::parse(&route.path()), route);
    }

    let not_found = std::fs::read_to_string(out.path().join("404.html")).expect("404 page");
    assert!(not_found.contains("page not found"));
    assert!(out.path().join("static/site.css").is_file());
    assert_eq!(
        std::fs::read(out.path().join("bounce/map.png")).expect("copied image"),
        vec![0u8, 1, 2]
    );
}

#[tokio::test]
async fn missing_public_dir_is_not_fatal() {
    let site = site();
    let out = tempfile::tempdir().expect("out dir");
    let missing = out.path().join("no-such-public-dir");

    let summary = export::export_site(&site, out.path(), &missing)
        .await
        .expect("export succeeds");
    assert_eq!(summary.public_files, 0);
    assert!(out.path().join("index.html").is_file());
}
