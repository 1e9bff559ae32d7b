//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Resolve, check and emit a documentation site's configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new site from template
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Check navbar, sidebar and document links
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Check links, then write the resolved configuration for the build tool
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: CheckArgs,

        /// Output directory (default: `build` under the site root)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,
    },

    /// Print the resolved configuration as JSON
    Show,
}

/// Link check arguments, shared by Check and Build.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Treat broken links as warnings even where the policy is `throw`
    #[arg(long, short = 'w')]
    pub warn_only: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    /// Verbose flag of whichever command carries one.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Commands::Check { args } | Commands::Build { args, .. } => args.verbose,
            Commands::Init { .. } | Commands::Show => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from(["docsite", "-C", "site/site.toml", "build", "-o", "out", "-w"]);
        assert_eq!(cli.config, PathBuf::from("site/site.toml"));
        let Commands::Build { args, output } = cli.command else {
            panic!("expected build");
        };
        assert!(args.warn_only);
        assert_eq!(output, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_parse_check_verbose() {
        let cli = Cli::parse_from(["docsite", "check", "-V"]);
        assert!(cli.verbose());
        assert_eq!(cli.config, PathBuf::from("site.toml"));
    }

    #[test]
    fn test_parse_init_dry() {
        let cli = Cli::parse_from(["docsite", "init", "--dry"]);
        assert!(matches!(cli.command, Commands::Init { name: None, dry: true }));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
