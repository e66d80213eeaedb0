use super::*;

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(4000);
    raw.logging.level = Some("info".to_string());

    let overrides = ServeOverrides {
        server_port: Some(4321),
        logging: LoggingOverrides {
            log_level: Some("debug".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.server.addr.port(), 4321);
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn defaults_resolve_without_any_source() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.server.addr.port(), DEFAULT_PORT);
    assert!(settings.content.path.is_none());
    assert_eq!(settings.content.public_dir, PathBuf::from("public"));
    assert_eq!(settings.render.image_alt_fallback, "diagram");
    assert_eq!(settings.render.wide_image_markers, vec!["User Journey"]);
    assert_eq!(settings.export.out_dir, PathBuf::from("dist"));
    assert_eq!(settings.site.base_url.as_str(), DEFAULT_BASE_URL);
}

#[test]
fn cli_json_logging_enforces_format() {
    let mut raw = RawSettings::default();
    let overrides = ServeOverrides {
        logging: LoggingOverrides {
            log_json: Some(true),
            ..Default::default()
        },
        ..Default::default()
    };

    raw.apply_serve_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn zero_port_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(0);

    let err = Settings::from_raw(raw).expect_err("zero port");
    assert!(matches!(err, LoadError::Invalid { key: "server.port", .. }));
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());

    let err = Settings::from_raw(raw).expect_err("bad level");
    assert!(matches!(err, LoadError::Invalid { key: "logging.level", .. }));
}

#[test]
fn relative_base_url_is_rejected() {
    let mut raw = RawSettings::default();
    raw.site.base_url = Some("portfolio/".to_string());

    let err = Settings::from_raw(raw).expect_err("relative url");
    assert!(matches!(err, LoadError::Invalid { key: "site.base_url", .. }));
}

#[test]
fn base_url_without_trailing_slash_keeps_its_last_segment() {
    let mut raw = RawSettings::default();
    raw.site.base_url = Some("https://user.github.io/portfolio".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(
        settings.site.base_url.as_str(),
        "https://user.github.io/portfolio/"
    );
    assert_eq!(
        settings.site.base_url.join("resume").expect("join").as_str(),
        "https://user.github.io/portfolio/resume"
    );
}

#[test]
fn blank_wide_markers_are_dropped() {
    let mut raw = RawSettings::default();
    raw.render.wide_image_markers = Some(vec![
        " ".to_string(),
        "Journey Map".to_string(),
    ]);

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert_eq!(settings.render.wide_image_markers, vec!["Journey Map"]);
}

#[test]
fn default_to_serve_command() {
    let args = CliArgs::parse_from(["folio"]);
    let command = args
        .command
        .unwrap_or(Command::Serve(Box::<ServeArgs>::default()));
    assert!(matches!(command, Command::Serve(_)));
}

#[test]
fn parse_serve_overrides() {
    let args = CliArgs::parse_from([
        "folio",
        "serve",
        "--server-host",
        "0.0.0.0",
        "--server-port",
        "8080",
        "--public-dir",
        "/srv/public",
    ]);

    match args.command.expect("serve command") {
        Command::Serve(serve) => {
            assert_eq!(serve.overrides.server_host.as_deref(), Some("0.0.0.0"));
            assert_eq!(serve.overrides.server_port, Some(8080));
            assert_eq!(
                serve.overrides.content.public_dir.as_deref(),
                Some(std::path::Path::new("/srv/public"))
            );
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn build_arguments_reach_settings() {
    let args = CliArgs::parse_from([
        "folio",
        "build",
        "--out-dir",
        "/tmp/site",
        "--content-path",
        "content/site.json",
        "--site-base-url",
        "https://example.com/",
    ]);

    let mut raw = RawSettings::default();
    raw.apply_command_overrides(args.command.as_ref());
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.export.out_dir, PathBuf::from("/tmp/site"));
    assert_eq!(
        settings.content.path,
        Some(PathBuf::from("content/site.json"))
    );
    assert_eq!(settings.site.base_url.as_str(), "https://example.com/");
}

#[test]
fn parse_inspect_arguments() {
    let args = CliArgs::parse_from([
        "folio",
        "inspect",
        "internshipnet",
        "--document",
        "architecture",
        "--format",
        "json",
    ]);

    match args.command.expect("inspect command") {
        Command::Inspect(inspect) => {
            assert_eq!(inspect.project_id, "internshipnet");
            assert_eq!(inspect.document, InspectDocument::Architecture);
            assert_eq!(inspect.format, InspectFormat::Json);
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn inspect_defaults_to_lifecycle_outline() {
    let args = CliArgs::parse_from(["folio", "inspect", "bounce"]);

    match args.command.expect("inspect command") {
        Command::Inspect(inspect) => {
            assert_eq!(inspect.document, InspectDocument::Lifecycle);
            assert_eq!(inspect.format, InspectFormat::Outline);
        }
        _ => panic!("wrong command parsed"),
    }
}
