//! # entropy-export
//!
//! Render the Entropy landing page to a static directory.
//!
//! ```bash
//! # Defaults: ./dist, dark theme, no assets
//! entropy-export
//!
//! # Light theme with hero images copied from ./landing/public
//! entropy-export --theme light --assets landing/public --out public_html
//!
//! # Settings from a file, flags still win
//! entropy-export --config entropy.toml --log-level debug
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use entropy_export::{ExportConfig, LoadedConfig, Overrides, export_site};
use entropy_site::{Theme, ThemeParseError};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "entropy-export")]
#[command(about = "Render the Entropy landing page to static HTML")]
#[command(version)]
struct Args {
    /// TOML config file with an [export] table
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (default: dist)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Theme to render: light or dark (default: dark)
    #[arg(long, value_parser = parse_theme)]
    theme: Option<Theme>,

    /// Directory of static assets to copy into the output
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_theme(value: &str) -> Result<Theme, ThemeParseError> {
    value.parse()
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean for the file list
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("Starting entropy-export v{}", env!("CARGO_PKG_VERSION"));

    let file = args
        .config
        .as_deref()
        .map(LoadedConfig::load)
        .transpose()
        .context("Failed to load config")?;

    let overrides = Overrides {
        out_dir: args.out,
        theme: args.theme,
        assets_dir: args.assets,
    };
    let config = ExportConfig::resolve(overrides, file.as_ref()).context("Invalid configuration")?;

    let summary = export_site(&config)
        .with_context(|| format!("Failed to export site to {}", config.out_dir.display()))?;

    for path in &summary.files {
        println!("{}", path.display());
    }
    Ok(())
}
