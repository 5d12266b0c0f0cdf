// File: crates/cartesian-samples/src/main.rs
// Summary: CLI that loads every sample page, clicks through its controls, runs animations and writes PNG/CSV output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cartesian_samples::pages::load_all;
use cartesian_samples::{HarnessConfig, Session};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render the cartesian chart samples headlessly
#[derive(Parser, Debug)]
#[command(name = "cartesian-samples")]
#[command(about = "Render the category/number axis and line/bar series samples to PNG")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory (overrides the config file)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Seed for random data
    #[arg(long)]
    seed: Option<u64>,

    /// Skip PNG snapshots and save controls
    #[arg(long)]
    no_export: bool,

    /// Dump final datasets as CSV
    #[arg(long)]
    dump_csv: bool,

    /// Theme preset (light, dark)
    #[arg(long)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Load every page, exercise every control and export the results (default)
    Run,
    /// Print the document outline of every page
    Outline,
}

fn config_from(args: &Args) -> Result<HarnessConfig> {
    let mut cfg = match &args.config {
        Some(path) => HarnessConfig::load(path)?,
        None => HarnessConfig::default(),
    };
    if let Some(dir) = &args.out_dir {
        cfg.output_dir = dir.clone();
    }
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if args.no_export {
        cfg.export = false;
    }
    if args.dump_csv {
        cfg.dump_csv = true;
    }
    if let Some(theme) = &args.theme {
        cfg.theme = theme.clone();
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let cfg = config_from(&args)?;
    let mut session = Session::new(cfg);
    let mut pages = load_all(|name| session.page_settings(name)).context("loading sample pages")?;

    match args.command.unwrap_or(Command::Run) {
        Command::Outline => {
            for page in &pages {
                println!("== {} ==", page.name());
                print!("{}", page.document().outline());
            }
        }
        Command::Run => {
            for page in pages.iter_mut() {
                session.run_page(page.as_mut())?;
            }
            for path in session.written() {
                println!("Wrote {}", path.display());
            }
            info!(files = session.written().len(), "done");
        }
    }
    Ok(())
}
