mod calc;
mod catalog;
mod config_cmd;
mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{Config, OutputFormat};

pub use calc::CalcCommand;
pub use report::{load_packages, ReportCommand};

#[derive(Parser)]
#[command(name = "fitness-tracker")]
#[command(about = "Terminal-based workout summary calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(long, global = true, env = "FITNESS_TRACKER_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print workout summaries for a list of sensor packages (default)
    Report(ReportCommand),

    /// Print the summary for a single workout
    Calc(CalcCommand),

    /// Print the built-in sample packages as JSON
    Samples,

    /// List supported workout codes and their readings
    Types,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Settings resolved from the config file and global flags
pub struct Settings {
    pub config: Config,
    pub format: OutputFormat,
}

impl Cli {
    fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    fn settings(&self) -> Result<Settings> {
        let config = Config::load(self.config_path())?;
        let format = self.format.unwrap_or(config.output.format);
        Ok(Settings { config, format })
    }

    /// Settings for a bare invocation: an unusable config falls back to defaults
    fn settings_or_default(&self) -> Settings {
        self.settings().unwrap_or_else(|e| {
            tracing::warn!("Ignoring config: {:#}", e);
            Settings {
                config: Config::default(),
                format: self.format.unwrap_or_default(),
            }
        })
    }

    pub fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        match &self.command {
            None => ReportCommand::default().execute(&self.settings_or_default()),
            Some(Commands::Report(cmd)) => cmd.execute(&self.settings()?),
            Some(Commands::Calc(cmd)) => cmd.execute(&self.settings()?),
            Some(Commands::Samples) => catalog::print_samples(),
            Some(Commands::Types) => catalog::print_types(),
            Some(Commands::Config(subcmd)) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(self.config_path()),
                ConfigSubcommands::Path => config_cmd::show_path(self.config_path()),
                ConfigSubcommands::Init { force } => {
                    config_cmd::init_config(self.config_path(), *force)
                }
            },
            Some(Commands::Completions { shell }) => {
                generate_completions(*shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_report() {
        let cli = Cli::try_parse_from(["fitness-tracker"]).unwrap();

        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_calc_accepts_negative_readings() {
        let cli = Cli::try_parse_from(["fitness-tracker", "calc", "RUN", "-100", "1", "75"]).unwrap();

        assert!(matches!(cli.command, Some(Commands::Calc(_))));
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::try_parse_from(["fitness-tracker", "--format", "json", "report"]).unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
    }
}
