//! Aether - terminal preview of the AI desktop shell
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use aether_app::config::{default_config_path, init_config_file, load_settings, Settings};
use clap::Parser;

/// Aether - terminal preview of the AI desktop shell
#[derive(Parser, Debug)]
#[command(name = "aether")]
#[command(about = "A terminal preview of the Aether AI desktop shell", long_about = None)]
struct Args {
    /// Config file (defaults to ~/.aetheros/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the rendered view as JSON instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Section to show after startup
    #[arg(long, value_name = "KEY")]
    section: Option<String>,

    /// Write the default config file if it does not exist, then exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = args.config.or_else(default_config_path);

    if args.init_config {
        let Some(path) = config_path else {
            eprintln!("Could not determine the home directory; pass --config PATH");
            std::process::exit(1);
        };
        if init_config_file(&path)? {
            eprintln!("Wrote default config to {}", path.display());
        } else {
            eprintln!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    aether_core::logging::init()?;

    let settings = match config_path {
        Some(path) => load_settings(&path),
        None => Settings::default(),
    };

    if args.headless {
        aether_shell::headless::run(settings, args.section.as_deref())?;
    } else {
        aether_shell::run(settings, args.section).await?;
    }

    Ok(())
}
