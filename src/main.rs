//! docsite - resolve, check and emit a documentation site's configuration.

mod cli;
mod config;
mod content;
mod core;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose());

    if let Commands::Init { name, dry } = &cli.command {
        let cwd = std::env::current_dir()?;
        let root = name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name));
        return cli::init::new_site(&root, *dry);
    }

    let config = SiteConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Check { args } => cli::check::check_site(&config, args).map(|_| ()),
        Commands::Build { args, output } => {
            cli::build::build_site(&config, args, output.as_deref()).map(|_| ())
        }
        Commands::Show => {
            println!("{}", config.to_json()?);
            Ok(())
        }
        Commands::Init { .. } => Ok(()),
    }
}
