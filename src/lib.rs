//! folio: a single-page design portfolio.
//!
//! The page (hero, about, filterable gallery, case-study tabs, detail
//! overlay, contact form) is modelled once in [`site`] over the immutable
//! [`model::Catalog`], and delivered two ways: an interactive terminal page
//! ([`ui`]) and a static HTML export ([`html_export`]).

pub mod config;
pub mod ftui_harness;
pub mod html_export;
pub mod model;
pub mod site;
pub mod ui;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, SiteConfig};
use crate::html_export::{ExportError, ExportOptions, HtmlExporter};
use crate::model::{Catalog, CatalogError, Category};
use crate::site::{
    ContactForm, FormField, Router, Section, SimulatedSubmitter, SubmitStatus, Submitter,
    load_overlay,
};
use crate::ui::{InlineTuiConfig, TuiOptions};

/// Inline-mode height when `--height` is not given.
pub const DEFAULT_INLINE_HEIGHT: u16 = 24;

// =========================================================================
// CLI surface
// =========================================================================

#[derive(Parser, Debug, Clone)]
#[command(
    name = "folio",
    version,
    about = "Design portfolio: interactive terminal page and static HTML export"
)]
pub struct Cli {
    /// Catalog file (TOML or JSON); built-in content when unset
    #[arg(long, global = true, env = "FOLIO_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Config file (defaults to $XDG_CONFIG_HOME/folio/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Machine-readable output (and JSON error payloads)
    #[arg(long, global = true)]
    pub json: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of the default location
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive terminal page (default)
    Tui {
        /// Keep terminal scrollback; draw the page below the prompt
        #[arg(long)]
        inline: bool,

        /// Inline UI height in rows
        #[arg(long, default_value_t = DEFAULT_INLINE_HEIGHT)]
        height: u16,

        #[arg(long, hide = true, value_parser = parse_section)]
        inject_fault: Option<Section>,
    },

    /// Write the static site (index.html, 404.html, extra routes)
    Export {
        /// Output directory (created if missing)
        #[arg(long)]
        out_dir: PathBuf,

        /// Initially selected gallery filter
        #[arg(long, default_value = "all", value_parser = parse_category)]
        category: Category,

        /// Initially selected case study
        #[arg(long)]
        tab: Option<String>,

        /// Static page without filter, tab, modal or form scripts
        #[arg(long)]
        no_scripts: bool,

        /// Document title for the home page
        #[arg(long)]
        title: Option<String>,

        #[arg(long, hide = true, value_parser = parse_section)]
        inject_fault: Option<Section>,
    },

    /// Resolve a path through the route table and print the page HTML
    Render {
        /// Request path; unknown paths render the home page
        #[arg(default_value = "/")]
        path: String,

        #[arg(long, default_value = "all", value_parser = parse_category)]
        category: Category,

        #[arg(long)]
        tab: Option<String>,

        #[arg(long)]
        no_scripts: bool,

        #[arg(long, hide = true, value_parser = parse_section)]
        inject_fault: Option<Section>,
    },

    /// List gallery projects
    Catalog {
        #[arg(long, default_value = "all", value_parser = parse_category)]
        category: Category,
    },

    /// Show a case study (first tab by default)
    CaseStudy { key: Option<String> },

    /// Send the contact form (simulated)
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        /// Override the simulated delay
        #[arg(long, hide = true)]
        delay_ms: Option<u64>,
    },

    /// Print the resolved configuration
    Config,
}

fn parse_category(raw: &str) -> Result<Category, String> {
    Category::from_id(raw).ok_or_else(|| {
        let ids: Vec<&str> = Category::ALL.iter().map(|c| c.id()).collect();
        format!("unknown category '{raw}' (expected one of: {})", ids.join(", "))
    })
}

fn parse_section(raw: &str) -> Result<Section, String> {
    Section::from_id(raw).ok_or_else(|| {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        format!("unknown section '{raw}' (expected one of: {})", ids.join(", "))
    })
}

#[derive(Debug, Clone)]
pub struct ParsedCli {
    pub cli: Cli,
}

// =========================================================================
// Errors
// =========================================================================

/// Error surfaced by the binary: exit code plus a JSON-friendly payload.
#[derive(Error, Debug, Clone, Serialize)]
#[error("{message}")]
pub struct CliError {
    pub code: i32,
    pub kind: &'static str,
    pub message: String,
    pub hint: Option<String>,
    pub retryable: bool,
}

impl CliError {
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const IO: i32 = 4;
    pub const INTERNAL: i32 = 1;

    fn new(code: i32, kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            kind,
            message: message.into(),
            hint: None,
            retryable: false,
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(Self::USAGE, "usage", message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(Self::CONFIG, "config", message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self {
            retryable: true,
            ..Self::new(Self::IO, "io", message)
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(Self::INTERNAL, "internal", message)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::config(err.to_string()).with_hint("check the file passed to --config")
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        CliError::config(format!("Catalog error: {err}"))
            .with_hint("check the file passed to --catalog (or FOLIO_CATALOG)")
    }
}

impl From<ExportError> for CliError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::UnknownTab(_) => CliError::usage(err.to_string()),
            ExportError::InvalidRoutePath(_) => CliError::config(err.to_string()),
            ExportError::Io { .. } => CliError::io(err.to_string()),
        }
    }
}

/// Parse raw process arguments. `--help`/`--version` come back as an error
/// with code 0 carrying the rendered text.
pub fn parse_cli(raw_args: Vec<String>) -> Result<ParsedCli, CliError> {
    match Cli::try_parse_from(raw_args) {
        Ok(cli) => Ok(ParsedCli { cli }),
        Err(err) => {
            use clap::error::ErrorKind;
            match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    Err(CliError::new(0, "help", err.render().to_string()))
                }
                _ => Err(CliError::usage(err.render().to_string().trim_end())
                    .with_hint("run `folio --help` for usage")),
            }
        }
    }
}

// =========================================================================
// Logging
// =========================================================================

/// Keeps the non-blocking log writer alive for the TUI session.
pub type LogGuard = Option<tracing_appender::non_blocking::WorkerGuard>;

fn env_filter(verbose: u8) -> EnvFilter {
    let default = match verbose {
        0 => "folio=info",
        1 => "folio=debug",
        _ => "folio=trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// CLI commands log to stderr; the terminal page logs to a file because it
/// owns the terminal.
fn init_logging(cli: &Cli, config: &SiteConfig, to_file: bool) -> Result<LogGuard, CliError> {
    let filter = env_filter(cli.verbose);

    if !to_file && cli.log_file.is_none() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        return Ok(None);
    }

    let appender = match &cli.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| CliError::usage(format!("--log-file {} has no file name", path.display())))?;
            std::fs::create_dir_all(dir)
                .map_err(|e| CliError::io(format!("Failed to create {}: {e}", dir.display())))?;
            tracing_appender::rolling::never(dir, file_name)
        }
        None => {
            let dir = config.resolved_log_dir();
            std::fs::create_dir_all(&dir)
                .map_err(|e| CliError::io(format!("Failed to create {}: {e}", dir.display())))?;
            tracing_appender::rolling::daily(dir, "folio.log")
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    Ok(Some(guard))
}

// =========================================================================
// Dispatch
// =========================================================================

fn load_config(path: Option<&Path>) -> Result<SiteConfig, CliError> {
    let config = match path {
        Some(path) if !path.exists() => {
            return Err(CliError::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Some(path) => SiteConfig::load_from(path)?,
        None => SiteConfig::load()?,
    };
    Ok(config.apply_env())
}

/// `--catalog` (or `FOLIO_CATALOG`), then the config file, then built-in.
fn load_catalog(cli: &Cli, config: &SiteConfig) -> Result<Catalog, CliError> {
    let path = cli.catalog.clone().or_else(|| config.catalog_path());
    match path {
        Some(path) => {
            let catalog = Catalog::load_from(&path)?;
            debug!(
                component = "cli",
                path = %path.display(),
                items = catalog.items.len(),
                "Catalog loaded"
            );
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

fn router_for(config: &SiteConfig) -> Router {
    let overlay_path = config.overlay_routes_path();
    Router::new(load_overlay(config.route_overlay, overlay_path.as_deref()))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::internal(format!("Failed to encode JSON: {e}")))?;
    println!("{out}");
    Ok(())
}

pub fn run_with_parsed(parsed: ParsedCli) -> Result<(), CliError> {
    let cli = parsed.cli;
    let command = cli.command.clone().unwrap_or(Commands::Tui {
        inline: false,
        height: DEFAULT_INLINE_HEIGHT,
        inject_fault: None,
    });

    let config = load_config(cli.config.as_deref())?;
    let _guard = init_logging(&cli, &config, matches!(command, Commands::Tui { .. }))?;

    match command {
        Commands::Tui {
            inline,
            height,
            inject_fault,
        } => {
            let options = TuiOptions {
                inline: inline.then_some(InlineTuiConfig {
                    ui_height: height.max(8),
                    anchor: crate::ui::ftui_adapter::UiAnchor::Bottom,
                }),
                inject_fault,
            };
            let catalog = load_catalog(&cli, &config)?;
            crate::ui::run_tui(Arc::new(catalog), options)
                .map_err(|e| CliError::internal(e.to_string()))
        }
        Commands::Export {
            out_dir,
            category,
            tab,
            no_scripts,
            title,
            inject_fault,
        } => {
            let options = ExportOptions {
                title: title.or_else(|| config.export.title.clone()),
                include_scripts: config.export.include_scripts && !no_scripts,
                category,
                tab,
                inject_fault,
                ..ExportOptions::default()
            };
            let catalog = load_catalog(&cli, &config)?;
            run_export(&cli, &config, &catalog, options, &out_dir)
        }
        Commands::Render {
            path,
            category,
            tab,
            no_scripts,
            inject_fault,
        } => {
            let options = ExportOptions {
                title: config.export.title.clone(),
                include_scripts: config.export.include_scripts && !no_scripts,
                category,
                tab,
                inject_fault,
                ..ExportOptions::default()
            };
            let catalog = load_catalog(&cli, &config)?;
            let html = HtmlExporter::with_options(options).render_path(
                &catalog,
                &router_for(&config),
                &path,
            )?;
            print!("{html}");
            Ok(())
        }
        Commands::Catalog { category } => {
            let catalog = load_catalog(&cli, &config)?;
            run_catalog(&cli, &catalog, category)
        }
        Commands::CaseStudy { key } => {
            let catalog = load_catalog(&cli, &config)?;
            run_case_study(&cli, &catalog, key.as_deref())
        }
        Commands::Contact {
            name,
            email,
            message,
            delay_ms,
        } => {
            let submitter = SimulatedSubmitter {
                delay: delay_ms
                    .map(Duration::from_millis)
                    .unwrap_or(crate::site::SUBMIT_DELAY),
            };
            run_contact(&cli, &submitter, [name, email, message])
        }
        Commands::Config => run_config(&cli, &config),
    }
}

fn run_export(
    cli: &Cli,
    config: &SiteConfig,
    catalog: &Catalog,
    options: ExportOptions,
    out_dir: &Path,
) -> Result<(), CliError> {
    let exporter = HtmlExporter::with_options(options);
    let summary = exporter.export_site(catalog, &router_for(config), out_dir)?;
    if cli.json {
        return print_json(&summary);
    }
    println!(
        "{} Exported {} files ({} bytes) to {}",
        style("✓").green(),
        summary.files.len(),
        summary.bytes,
        style(summary.out_dir.display()).bold()
    );
    for file in &summary.files {
        println!("  {}", file.display());
    }
    Ok(())
}

fn run_catalog(cli: &Cli, catalog: &Catalog, category: Category) -> Result<(), CliError> {
    let items = catalog.filter(category);
    if cli.json {
        return print_json(&serde_json::json!({
            "category": category.id(),
            "count": items.len(),
            "items": items,
        }));
    }
    println!(
        "{} ({} projects)",
        style(category.label()).bold().yellow(),
        items.len()
    );
    if items.is_empty() {
        println!("  {}", style("No projects in this category").dim());
    }
    for item in items {
        println!(
            "  {:>3}  {}  {}",
            item.id,
            item.title,
            style(item.category.label()).dim()
        );
    }
    Ok(())
}

fn run_case_study(cli: &Cli, catalog: &Catalog, key: Option<&str>) -> Result<(), CliError> {
    let key = key.unwrap_or_else(|| catalog.default_case_study_key());
    let study = catalog.case_study(key).ok_or_else(|| {
        let keys: Vec<&str> = catalog.case_study_keys().collect();
        CliError::usage(format!("Unknown case study '{key}'"))
            .with_hint(format!("available: {}", keys.join(", ")))
    })?;
    if cli.json {
        return print_json(study);
    }
    println!("{}", style(&study.title).bold().yellow());
    println!("{}", style(&study.client).dim());
    for (label, body) in [
        ("Overview", &study.description),
        ("Challenge", &study.challenge),
        ("Solution", &study.solution),
        ("Results", &study.results),
    ] {
        println!();
        println!("{}", style(label).bold());
        println!("{body}");
    }
    println!();
    println!("{} {}", style("Tools:").bold(), study.tools.join(", "));
    if let Some(before) = &study.images.before {
        println!("{} {before}", style("Before:").bold());
    }
    if let Some(after) = &study.images.after {
        println!("{} {after}", style("After:").bold());
    }
    for src in &study.images.showcase {
        println!("{} {src}", style("Showcase:").bold());
    }
    Ok(())
}

fn run_contact(
    cli: &Cli,
    submitter: &dyn Submitter,
    [name, email, message]: [String; 3],
) -> Result<(), CliError> {
    let mut form = ContactForm::new(1);
    form.set_field(FormField::Name, name);
    form.set_field(FormField::Email, email);
    form.set_field(FormField::Message, message);

    let (ticket, payload) = form
        .begin_submit()
        .map_err(|e| CliError::usage(e.to_string()))?;

    let progress = if cli.json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    progress.set_style(
        ProgressStyle::with_template("{spinner:.yellow} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.set_message(form.button_label());
    progress.enable_steady_tick(Duration::from_millis(100));

    let outcome = submitter.submit(&payload);
    form.complete(ticket, outcome);
    progress.finish_and_clear();
    info!(component = "cli", operation = "contact", "Contact form submitted");

    let (status, text) = match form.status() {
        SubmitStatus::Success(text) => ("success", text.clone()),
        SubmitStatus::Error(text) => ("error", text.clone()),
        SubmitStatus::None => ("none", String::new()),
    };
    if cli.json {
        return print_json(&serde_json::json!({
            "status": status,
            "message": text,
            "form": {
                "name": form.value(FormField::Name),
                "email": form.value(FormField::Email),
                "message": form.value(FormField::Message),
            },
        }));
    }
    match form.status() {
        SubmitStatus::Error(_) => println!("{} {text}", style("✗").red()),
        _ => println!("{} {text}", style("✓").green()),
    }
    for field in FormField::ALL {
        println!(
            "  {:<8} {}",
            style(field.label()).dim(),
            form.value(field)
        );
    }
    Ok(())
}

fn run_config(cli: &Cli, config: &SiteConfig) -> Result<(), CliError> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => SiteConfig::config_path()?,
    };
    if cli.json {
        return print_json(&serde_json::json!({
            "path": path,
            "exists": path.exists(),
            "log_dir": config.resolved_log_dir(),
            "config": config,
        }));
    }
    let body = toml::to_string_pretty(config)
        .map_err(|e| CliError::internal(format!("Failed to encode config: {e}")))?;
    println!(
        "{} {}{}",
        style("#").dim(),
        path.display(),
        if path.exists() { "" } else { " (not found, defaults)" }
    );
    print!("{body}");
    println!("{} log_dir = {}", style("#").dim(), config.resolved_log_dir().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ParsedCli, CliError> {
        parse_cli(args.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn bare_invocation_has_no_subcommand() {
        let parsed = parse(&["folio"]).unwrap();
        assert!(parsed.cli.command.is_none());
    }

    #[test]
    fn export_flags_parse() {
        let parsed = parse(&[
            "folio",
            "export",
            "--out-dir",
            "site",
            "--category",
            "logo",
            "--tab",
            "be-masculine",
            "--no-scripts",
            "--json",
        ])
        .unwrap();
        assert!(parsed.cli.json);
        match parsed.cli.command {
            Some(Commands::Export {
                category,
                tab,
                no_scripts,
                ..
            }) => {
                assert_eq!(category, Category::Logo);
                assert_eq!(tab.as_deref(), Some("be-masculine"));
                assert!(no_scripts);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_category_is_usage_error() {
        let err = parse(&["folio", "catalog", "--category", "sculpture"]).unwrap_err();
        assert_eq!(err.code, CliError::USAGE);
        assert_eq!(err.kind, "usage");
        assert!(err.message.contains("sculpture"));
    }

    #[test]
    fn help_is_not_an_error_code() {
        let err = parse(&["folio", "--help"]).unwrap_err();
        assert_eq!(err.code, 0);
        assert!(err.message.contains("export"));
    }

    #[test]
    fn hidden_fault_flag_parses_section_ids() {
        let parsed = parse(&["folio", "render", "/", "--inject-fault", "case-studies"]).unwrap();
        assert!(matches!(
            parsed.cli.command,
            Some(Commands::Render {
                inject_fault: Some(Section::CaseStudies),
                ..
            })
        ));
    }

    #[test]
    fn export_errors_map_to_exit_codes() {
        assert_eq!(
            CliError::from(ExportError::UnknownTab("x".into())).code,
            CliError::USAGE
        );
        assert_eq!(
            CliError::from(ExportError::InvalidRoutePath("/..".into())).code,
            CliError::CONFIG
        );
        let io = CliError::from(ExportError::Io {
            path: PathBuf::from("/nope"),
            source: std::io::Error::other("denied"),
        });
        assert_eq!(io.code, CliError::IO);
        assert!(io.retryable);
    }

    #[test]
    fn contact_runs_with_zero_delay() {
        let cli = parse(&["folio", "--json", "config"]).unwrap().cli;
        let submitter = SimulatedSubmitter {
            delay: Duration::ZERO,
        };
        run_contact(
            &cli,
            &submitter,
            ["Jane".into(), "jane@x.com".into(), "Hello".into()],
        )
        .unwrap();

        let err = run_contact(&cli, &submitter, ["".into(), "a@b.c".into(), "m".into()]).unwrap_err();
        assert_eq!(err.code, CliError::USAGE);
        assert!(err.message.contains("Name"));
    }
}
