use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint, builder::BoolishValueParser};

/// Command-line arguments for the folio binary.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Portfolio site publisher")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "FOLIO_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Preview the site over HTTP.
    Serve(Box<ServeArgs>),
    /// Write the whole site as static HTML.
    Build(BuildArgs),
    /// Print the rendered blocks of one project document.
    Inspect(InspectArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct ContentOverrides {
    /// Override the site content JSON file.
    #[arg(long = "content-path", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub content_path: Option<PathBuf>,

    /// Override the directory holding images and documents.
    #[arg(long = "public-dir", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub public_dir: Option<PathBuf>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct LoggingOverrides {
    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub overrides: ServeOverrides,
}

#[derive(Debug, Args, Default, Clone)]
pub struct ServeOverrides {
    #[command(flatten)]
    pub content: ContentOverrides,

    #[command(flatten)]
    pub logging: LoggingOverrides,

    /// Override the listener host.
    #[arg(long = "server-host", value_name = "HOST")]
    pub server_host: Option<String>,

    /// Override the listener port.
    #[arg(long = "server-port", value_name = "PORT")]
    pub server_port: Option<u16>,

    /// Override the graceful shutdown timeout.
    #[arg(long = "server-graceful-shutdown-seconds", value_name = "SECONDS")]
    pub server_graceful_shutdown_seconds: Option<u64>,
}

#[derive(Debug, Args, Default, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub content: ContentOverrides,

    #[command(flatten)]
    pub logging: LoggingOverrides,

    /// Override the output directory.
    #[arg(long = "out-dir", value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub out_dir: Option<PathBuf>,

    /// Override the absolute base URL used for canonical links.
    #[arg(long = "site-base-url", value_name = "URL")]
    pub site_base_url: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub content: ContentOverrides,

    /// Project identifier as declared in the content file.
    #[arg(value_name = "PROJECT")]
    pub project_id: String,

    /// Which project document to render.
    #[arg(long, value_enum, default_value_t = InspectDocument::Lifecycle)]
    pub document: InspectDocument,

    /// Output format.
    #[arg(long, value_enum, default_value_t = InspectFormat::Outline)]
    pub format: InspectFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectDocument {
    Lifecycle,
    Architecture,
    Frd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    Outline,
    Json,
}
