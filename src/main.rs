//! Binary entrypoint for the start page generator.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use startpage::catalog::Catalog;
use startpage::page::{self, PageContext};
use startpage::sampler;
use startpage::search::SearchRegistry;

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "startpage", about = "Static start page generator")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Override the output file path
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("startpage={}", level).parse()?)
        .add_directive("ureq=warn".parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = startpage::config::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    cfg.validate().context("validating configuration")?;

    let catalog = Catalog::from_json_file(&cfg.sites_path)
        .with_context(|| format!("loading sites from {}", cfg.sites_path.display()))?;
    let registry = SearchRegistry::from_json_file(&cfg.search_engines_path).with_context(|| {
        format!(
            "loading search engines from {}",
            cfg.search_engines_path.display()
        )
    })?;
    info!(
        categories = catalog.categories.len(),
        engines = registry.engines.len(),
        "loaded start page data"
    );

    let icons = catalog.icon_locators();
    let colors = sampler::sample_all(&icons, cfg.max_concurrent_samples).await;
    info!(icons = icons.len(), sampled = colors.len(), "sampled icon colors");

    let html = page::render(&PageContext {
        title: &cfg.page_title,
        footer: cfg.footer_text.as_deref(),
        catalog: &catalog,
        registry: &registry,
        colors: &colors,
    });

    let output = cli.output.unwrap_or_else(|| cfg.output_path.clone());
    std::fs::write(&output, html)
        .with_context(|| format!("writing {}", output.display()))?;
    info!(path = %output.display(), "start page written");
    Ok(())
}
