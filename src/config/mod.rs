//! Configuration layer: typed settings with layered precedence (file → env → CLI).

mod cli;
#[cfg(test)]
mod tests;

use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

pub use cli::{
    BuildArgs, CliArgs, Command, ContentOverrides, InspectArgs, InspectDocument, InspectFormat,
    LoggingOverrides, ServeArgs, ServeOverrides,
};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "folio";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_GRACEFUL_SHUTDOWN_SECS: u64 = 10;
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_OUT_DIR: &str = "dist";
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/";
pub(crate) const DEFAULT_IMAGE_ALT_FALLBACK: &str = "diagram";
pub(crate) const DEFAULT_WIDE_IMAGE_MARKER: &str = "User Journey";

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub content: ContentSettings,
    pub render: RenderSettings,
    pub export: ExportSettings,
    pub site: SiteSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub addr: SocketAddr,
    pub graceful_shutdown: Duration,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct ContentSettings {
    /// Site content file; `None` selects the bundled content.
    pub path: Option<PathBuf>,
    /// Directory whose files are served at the site root (images, résumé).
    pub public_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub image_alt_fallback: String,
    pub wide_image_markers: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub out_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub base_url: Url,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix("FOLIO")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("render.wide_image_markers")
            .try_parsing(true),
    );

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_command_overrides(cli.command.as_ref());

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    server: RawServerSettings,
    logging: RawLoggingSettings,
    content: RawContentSettings,
    render: RawRenderSettings,
    export: RawExportSettings,
    site: RawSiteSettings,
}

impl RawSettings {
    fn apply_command_overrides(&mut self, command: Option<&Command>) {
        match command {
            Some(Command::Serve(args)) => self.apply_serve_overrides(&args.overrides),
            Some(Command::Build(args)) => self.apply_build_overrides(args),
            Some(Command::Inspect(args)) => self.apply_content_overrides(&args.content),
            None => self.apply_serve_overrides(&ServeOverrides::default()),
        }
    }

    fn apply_serve_overrides(&mut self, overrides: &ServeOverrides) {
        if let Some(host) = overrides.server_host.as_ref() {
            self.server.host = Some(host.clone());
        }
        if let Some(port) = overrides.server_port {
            self.server.port = Some(port);
        }
        if let Some(seconds) = overrides.server_graceful_shutdown_seconds {
            self.server.graceful_shutdown_seconds = Some(seconds);
        }

        self.apply_logging_overrides(&overrides.logging);
        self.apply_content_overrides(&overrides.content);
    }

    fn apply_build_overrides(&mut self, args: &BuildArgs) {
        if let Some(dir) = args.out_dir.as_ref() {
            self.export.out_dir = Some(dir.clone());
        }
        if let Some(url) = args.site_base_url.as_ref() {
            self.site.base_url = Some(url.clone());
        }

        self.apply_logging_overrides(&args.logging);
        self.apply_content_overrides(&args.content);
    }

    fn apply_logging_overrides(&mut self, overrides: &LoggingOverrides) {
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }

    fn apply_content_overrides(&mut self, overrides: &ContentOverrides) {
        if let Some(path) = overrides.content_path.as_ref() {
            self.content.path = Some(path.clone());
        }
        if let Some(dir) = overrides.public_dir.as_ref() {
            self.content.public_dir = Some(dir.clone());
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            server,
            logging,
            content,
            render,
            export,
            site,
        } = raw;

        Ok(Self {
            server: build_server_settings(server)?,
            logging: build_logging_settings(logging)?,
            content: build_content_settings(content)?,
            render: build_render_settings(render)?,
            export: build_export_settings(export)?,
            site: build_site_settings(site)?,
        })
    }
}

fn build_server_settings(server: RawServerSettings) -> Result<ServerSettings, LoadError> {
    let host = server.host.unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = server.port.unwrap_or(DEFAULT_PORT);
    if port == 0 {
        return Err(LoadError::invalid(
            "server.port",
            "port must be greater than zero",
        ));
    }

    let addr = parse_socket_addr(&host, port)
        .map_err(|reason| LoadError::invalid("server.addr", reason))?;

    let graceful_secs = server
        .graceful_shutdown_seconds
        .unwrap_or(DEFAULT_GRACEFUL_SHUTDOWN_SECS);
    if graceful_secs == 0 {
        return Err(LoadError::invalid(
            "server.graceful_shutdown_seconds",
            "must be greater than zero",
        ));
    }

    Ok(ServerSettings {
        addr,
        graceful_shutdown: Duration::from_secs(graceful_secs),
    })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn build_content_settings(content: RawContentSettings) -> Result<ContentSettings, LoadError> {
    let path = content.path.filter(|path| !path.as_os_str().is_empty());

    let public_dir = content
        .public_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR));
    if public_dir.as_os_str().is_empty() {
        return Err(LoadError::invalid(
            "content.public_dir",
            "path must not be empty",
        ));
    }

    Ok(ContentSettings { path, public_dir })
}

fn build_render_settings(render: RawRenderSettings) -> Result<RenderSettings, LoadError> {
    let image_alt_fallback = render
        .image_alt_fallback
        .unwrap_or_else(|| DEFAULT_IMAGE_ALT_FALLBACK.to_string());
    if image_alt_fallback.trim().is_empty() {
        return Err(LoadError::invalid(
            "render.image_alt_fallback",
            "label must not be empty",
        ));
    }

    let wide_image_markers = render
        .wide_image_markers
        .unwrap_or_else(|| vec![DEFAULT_WIDE_IMAGE_MARKER.to_string()])
        .into_iter()
        .map(|marker| marker.trim().to_string())
        .filter(|marker| !marker.is_empty())
        .collect();

    Ok(RenderSettings {
        image_alt_fallback,
        wide_image_markers,
    })
}

fn build_export_settings(export: RawExportSettings) -> Result<ExportSettings, LoadError> {
    let out_dir = export
        .out_dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
    if out_dir.as_os_str().is_empty() {
        return Err(LoadError::invalid("export.out_dir", "path must not be empty"));
    }

    Ok(ExportSettings { out_dir })
}

fn build_site_settings(site: RawSiteSettings) -> Result<SiteSettings, LoadError> {
    let raw = site
        .base_url
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let mut base_url = Url::parse(raw.trim())
        .map_err(|err| LoadError::invalid("site.base_url", format!("invalid url: {err}")))?;
    if base_url.cannot_be_a_base() {
        return Err(LoadError::invalid(
            "site.base_url",
            "url must be absolute and hierarchical",
        ));
    }
    // Pages are joined onto the base, so it must name a directory.
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }

    Ok(SiteSettings { base_url })
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawServerSettings {
    host: Option<String>,
    port: Option<u16>,
    graceful_shutdown_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawContentSettings {
    path: Option<PathBuf>,
    public_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawRenderSettings {
    image_alt_fallback: Option<String>,
    wide_image_markers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawExportSettings {
    out_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSiteSettings {
    base_url: Option<String>,
}

fn parse_socket_addr(host: &str, port: u16) -> Result<SocketAddr, String> {
    let candidate = format!("{host}:{port}");
    candidate
        .parse()
        .map_err(|err| format!("invalid address `{candidate}`: {err}"))
}

/// Resolve configuration using the supplied CLI arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}
