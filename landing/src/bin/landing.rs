//! # landing
//!
//! Render the landing page to a static HTML file.
//!
//! ```bash
//! # Default content, stdout
//! landing render
//!
//! # Custom content and theme, written to a file
//! landing render --config page.toml --theme dark --out public/index.html
//!
//! # Dump the built-in content as a starting point for page.toml
//! landing defaults --format toml > page.toml
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use landing_page::config::load_page_config;
use landing_page::{EnvTheme, PageConfig, Theme, ThemeSource, render_page, render_page_for_year};

#[derive(Parser, Debug)]
#[command(name = "landing")]
#[command(about = "Render the static landing page to HTML")]
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
    /// Render the page as a complete HTML document
    Render(RenderArgs),
    /// Print the built-in page content as a config file
    Defaults {
        /// Output format
        #[arg(long, value_enum, default_value_t = DumpFormat::Toml)]
        format: DumpFormat,
    },
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Page config file (.toml or .json)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Brand name, overrides the config file
    #[arg(long)]
    brand: Option<String>,

    /// Theme (light, dark, system); defaults to $LANDING_THEME, then system
    #[arg(long)]
    theme: Option<Theme>,

    /// Footer year; defaults to the current year
    #[arg(long)]
    year: Option<i32>,

    /// Output file; stdout when omitted
    #[arg(long, short)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DumpFormat {
    Toml,
    Json,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn run_render(args: RenderArgs) -> Result<()> {
    let file_config = match &args.config {
        Some(path) => load_page_config(path)
            .with_context(|| format!("loading page config {}", path.display()))?,
        None => PageConfig::default(),
    };
    let config = file_config.merge(PageConfig {
        brand_name: args.brand,
        ..Default::default()
    });

    let theme: &dyn ThemeSource = match &args.theme {
        Some(theme) => theme,
        None => &EnvTheme,
    };

    let html = match args.year {
        Some(year) => render_page_for_year(Some(&config), theme, year),
        None => render_page(Some(&config), theme),
    };
    debug!(bytes = html.len(), "page rendered");

    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(&path, &html).with_context(|| format!("writing {}", path.display()))?;
            info!("Page written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes()).context("writing to stdout")?;
            stdout.flush().context("flushing stdout")?;
        }
    }
    Ok(())
}

fn run_defaults(format: DumpFormat) -> Result<()> {
    let defaults = PageConfig::defaults();
    let text = match format {
        DumpFormat::Toml => toml::to_string_pretty(&defaults).context("serializing defaults as TOML")?,
        DumpFormat::Json => {
            serde_json::to_string_pretty(&defaults).context("serializing defaults as JSON")?
        }
    };
    println!("{}", text.trim_end());
    Ok(())
}

fn run(args: Args) -> Result<()> {
    init_tracing(&args.log_level);

    match args.command {
        Command::Render(render) => run_render(render),
        Command::Defaults { format } => run_defaults(format),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[landing] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
