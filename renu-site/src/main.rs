//! # renu-site
//!
//! Render the Renu Energia homepage to a single static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Render with .renu/site.toml (or the built-in homepage)
//! renu-site render --out dist/index.html
//!
//! # Explicit config and wasm client
//! renu-site render --config site.json --wasm-glue /pkg/renu_sections_wasm.js
//!
//! # Start a config from the built-in homepage
//! renu-site defaults --format toml > .renu/site.toml
//!
//! # Check what the contact form would produce
//! renu-site mailto --first-name Ana --email ana@example.com --message Olá
//! ```

mod config;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use renu_sections::contact::{
    ContactSubmission, DEFAULT_RECIPIENT, DEFAULT_SUBJECT, MailtoTemplate,
};
use renu_sections::render_page;

use config::SiteConfig;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "renu-site")]
#[command(about = "Render the Renu Energia homepage from a page configuration")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page to an HTML file
    Render {
        /// Site root holding `.renu/site.toml`
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Explicit `.toml` or `.json` config (strict, overrides --root)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output file
        #[arg(long, short, default_value = "index.html")]
        out: PathBuf,
        /// URL of the wasm client JS glue (overrides the config)
        #[arg(long)]
        wasm_glue: Option<String>,
    },
    /// Print the built-in homepage configuration
    Defaults {
        #[arg(long, value_enum, default_value_t = Format::Toml)]
        format: Format,
    },
    /// Build the contact form mailto link from field values
    Mailto {
        #[arg(long, default_value = DEFAULT_RECIPIENT)]
        recipient: String,
        #[arg(long, default_value = DEFAULT_SUBJECT)]
        subject: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Toml,
    Json,
}

// ============================================================================
// Commands
// ============================================================================

fn render(root: &Path, config: Option<&Path>, out: &Path, wasm_glue: Option<&str>) -> Result<()> {
    let site = match config {
        Some(path) => SiteConfig::load_from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SiteConfig::load(root),
    };
    let page = site.resolved_page();
    let assets = site.client_assets(wasm_glue);
    debug!(sections = page.sections.len(), rich_text = ?site.rich_text, "config resolved");

    let html = render_page(&page, &assets);

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(out, &html).with_context(|| format!("writing {}", out.display()))?;

    info!(
        out = %out.display(),
        bytes = html.len(),
        sections = page.sections.len(),
        client = assets.wasm_glue_path.is_some(),
        "page rendered"
    );
    Ok(())
}

fn defaults(format: Format) -> Result<String> {
    let site = SiteConfig::default();
    match format {
        Format::Toml => toml::to_string_pretty(&site).context("serializing defaults as TOML"),
        Format::Json => {
            serde_json::to_string_pretty(&site).context("serializing defaults as JSON")
        }
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Render {
            root,
            config,
            out,
            wasm_glue,
        } => render(&root, config.as_deref(), &out, wasm_glue.as_deref()),
        Command::Defaults { format } => {
            println!("{}", defaults(format)?);
            Ok(())
        }
        Command::Mailto {
            recipient,
            subject,
            first_name,
            last_name,
            phone,
            email,
            message,
        } => {
            let template = MailtoTemplate { recipient, subject };
            let submission =
                ContactSubmission::from_fields(&[first_name, last_name, phone, email, message]);
            println!("{}", template.build(&submission));
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr; stdout carries command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[renu-site] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn render_writes_default_homepage() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist").join("index.html");

        render(temp.path(), None, &out, Some("/pkg/renu_sections_wasm.js")).expect("render");

        let html = std::fs::read_to_string(&out).expect("read output");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("PORQUE BIOMETANO ?"));
        assert!(html.contains("/pkg/renu_sections_wasm.js"));
    }

    #[test]
    fn render_fails_on_bad_explicit_config() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("site.toml");
        std::fs::write(&config, "[page\n").expect("write config");

        let err = render(
            temp.path(),
            Some(&config),
            &temp.path().join("index.html"),
            None,
        )
        .expect_err("invalid config");
        assert!(format!("{:#}", err).contains("invalid TOML"));
    }

    #[test]
    fn defaults_round_trip_through_config_loader() {
        let temp = TempDir::new().expect("temp dir");
        for (format, name) in [(Format::Toml, "site.toml"), (Format::Json, "site.json")] {
            let path = temp.path().join(name);
            std::fs::write(&path, defaults(format).expect("serialize")).expect("write");
            let loaded = SiteConfig::load_from_path(&path).expect("load");
            assert_eq!(loaded.page, SiteConfig::default().page);
        }
    }

    #[test]
    fn mailto_args_parse() {
        let args = Args::parse_from(["renu-site", "mailto", "--first-name", "Ana"]);
        match args.command {
            Command::Mailto {
                first_name,
                recipient,
                ..
            } => {
                assert_eq!(first_name, "Ana");
                assert_eq!(recipient, DEFAULT_RECIPIENT);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
