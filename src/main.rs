use std::{process, sync::Arc};

use folio::{
    application::{
        error::AppError,
        render::{RenderOptions, outline},
        routes::DocumentKind,
        site::{ProjectDocument, SiteService},
    },
    config::{self, InspectArgs, InspectDocument, InspectFormat},
    infra::{
        content,
        error::InfraError,
        export,
        http::{self, HttpState},
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Build(_) => run_build(settings).await,
        config::Command::Inspect(args) => run_inspect(settings, args).await,
    }
}

async fn load_site(settings: &config::Settings) -> Result<SiteService, AppError> {
    let content = content::load(settings.content.path.as_deref()).await?;
    let site = SiteService::new(
        content,
        RenderOptions::from(&settings.render),
        settings.site.base_url.clone(),
    )?;
    Ok(site)
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let site = load_site(&settings).await?;
    let state = HttpState {
        site: Arc::new(site),
        public_dir: settings.content.public_dir.clone(),
    };
    let router = http::build_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    http::serve(listener, router, settings.server.graceful_shutdown).await?;
    Ok(())
}

async fn run_build(settings: config::Settings) -> Result<(), AppError> {
    let site = load_site(&settings).await?;
    let summary = export::export_site(
        &site,
        &settings.export.out_dir,
        &settings.content.public_dir,
    )
    .await?;

    info!(
        target = "folio::build",
        out_dir = %settings.export.out_dir.display(),
        pages = summary.pages,
        "site built"
    );
    Ok(())
}

async fn run_inspect(settings: config::Settings, args: InspectArgs) -> Result<(), AppError> {
    let site = load_site(&settings).await?;
    let document = match args.document {
        InspectDocument::Lifecycle => ProjectDocument::Lifecycle,
        InspectDocument::Architecture => ProjectDocument::Document(DocumentKind::Architecture),
        InspectDocument::Frd => ProjectDocument::Document(DocumentKind::Frd),
    };
    let blocks = site.project_blocks(&args.project_id, document)?;

    let rendered = match args.format {
        InspectFormat::Outline => outline(&blocks),
        InspectFormat::Json => serde_json::to_string_pretty(&blocks)
            .map_err(|err| AppError::unexpected(format!("failed to serialise blocks: {err}")))?,
    };
    println!("{rendered}");
    Ok(())
}
