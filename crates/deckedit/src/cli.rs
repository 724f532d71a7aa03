use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deckedit")]
#[command(author, version, about)]
#[command(long_about = "An interactive slide viewer and editor.\n\n\
    Present a deck, edit it in place, and move it around as a JSON document.\n\n\
    Examples:\n  \
    deckedit                      Open the built-in deck (fullscreen)\n  \
    deckedit deck.json --windowed Open a deck in a window\n  \
    deckedit export -o out        Write the built-in deck to out/presentation.json\n  \
    deckedit links deck.json      List the links found in a deck")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Presentation document (JSON) to open
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Start with auto-play enabled
    #[arg(long, global = false)]
    pub autoplay: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Write a deck as presentation.json
    Export {
        /// Presentation document to export (defaults to the built-in deck)
        file: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// List the links found in a deck with their default labels
    Links {
        /// Presentation document to scan (defaults to the built-in deck)
        file: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.export_dir, defaults.start_slide)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    /// Log filter implied by `-v`/`-q`. `RUST_LOG` still wins when set.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        let quiet = self.quiet;
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Export { file, output_dir }) => {
                crate::commands::export::run(file.as_deref(), &output_dir, quiet)
            }
            Some(Commands::Links { file }) => crate::commands::links::run(file.as_deref()),
            Some(Commands::Version) => {
                println!("deckedit {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => {
                if let Some(file) = &self.file {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                }
                crate::app::run(self.file, self.windowed, self.slide, self.autoplay)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_open_flags() {
        let cli = Cli::try_parse_from(["deckedit", "deck.json", "--windowed", "--slide", "3"])
            .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("deck.json")));
        assert!(cli.windowed);
        assert_eq!(cli.slide, Some(3));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::try_parse_from(["deckedit", "export", "-o", "out"]).unwrap();
        match cli.command {
            Some(Commands::Export { file, output_dir }) => {
                assert_eq!(file, None);
                assert_eq!(output_dir, PathBuf::from("out"));
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_log_level_from_flags() {
        let cli = Cli::try_parse_from(["deckedit", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), log::LevelFilter::Trace);
        let cli = Cli::try_parse_from(["deckedit", "-q", "-v"]).unwrap();
        assert_eq!(cli.log_level(), log::LevelFilter::Error);
        let cli = Cli::try_parse_from(["deckedit"]).unwrap();
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }
}
