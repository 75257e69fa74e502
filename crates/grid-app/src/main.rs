// ABOUTME: Main application entry point.
// ABOUTME: Parses the command line, loads config, and lays demo designs out on a slide.

mod demos;
mod shape_log;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use grid_core::{Config, WeightPolicy};
use grid_layout::SlideFrame;
use tracing_subscriber::EnvFilter;

use demos::Demo;
use shape_log::ShapeLog;

#[derive(Debug, Parser)]
#[command(name = "grid-deck", version, about = "Lay out slide designs on a 12-unit grid")]
struct Cli {
    /// Config file to use instead of ~/.config/grid-deck/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Lay out a built-in design and print the shapes it produces
    Demo {
        #[arg(value_enum)]
        name: Demo,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Reject designs whose sibling weights don't add up to 12
        #[arg(long)]
        strict: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Write the default config file
    Init {
        /// Where to write it (defaults to the standard config path)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config as TOML
    Show,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load_or_default()),
    }
}

fn run_demo(config: &Config, demo: Demo, format: Format) -> Result<()> {
    let frame = SlideFrame::from_config(config);
    let mut design = demo.design(config);
    let mut log = ShapeLog::titled(demo.title());

    frame
        .build(&mut design, &mut log)
        .with_context(|| format!("Failed to build the {:?} design", demo))?;
    tracing::info!("Placed {} shapes for {:?}", log.shapes.len(), demo);

    match format {
        Format::Text => print!("{}", log.to_listing()),
        Format::Json => println!("{}", log.to_json()?),
    }
    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let config = Config::default();
    let path = match path {
        Some(path) => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            config
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path
        }
        None => {
            if let Some(existing) = Config::default_path().filter(|p| p.exists()) {
                if !force {
                    bail!("{} already exists (use --force to overwrite)", existing.display());
                }
            }
            config.save_to_default()?
        }
    };
    tracing::info!("Wrote default config to {}", path.display());
    println!("{}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo {
            name,
            format,
            strict,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if strict {
                config.weight_policy = WeightPolicy::Strict;
            }
            tracing::info!(
                "Slide {}x{} in, weight policy {:?}",
                config.slide_dimensions().0,
                config.slide_dimensions().1,
                config.weight_policy
            );
            run_demo(&config, name, format)
        }
        Command::Config { action } => match action {
            ConfigAction::Init { path, force } => init_config(path, force),
            ConfigAction::Show => {
                let config = load_config(cli.config.as_deref())?;
                print!("{}", config.to_toml()?);
                Ok(())
            }
        },
    }
}
