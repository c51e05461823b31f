use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

/// A fast CLI for browsing an available-applications descriptor database
#[derive(Parser)]
#[command(name = "appdex")]
#[command(version, propagate_version = true)]
#[command(about = "A fast CLI for browsing an available-applications descriptor database")]
pub struct Cli {
    /// Output format for command results
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Storage root directory (defaults to ~/.appdex)
    #[arg(long, env = "APPDEX_HOME", global = true)]
    pub root: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Print shell completions to stdout
    pub fn print_completions(shell: Shell) {
        let mut cmd = Self::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable output
    #[default]
    Pretty,
    /// JSON output for scripting
    Json,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List available applications
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show details of a single application
    Show(ShowArgs),

    /// Re-download the application database and rebuild the local copy
    Update,

    /// Inspect or remove the local application database
    Db(DbArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// Only list applications in this category (1-16); all when omitted
    #[arg(short, long)]
    pub category: Option<u32>,
}

/// Arguments for the show command
#[derive(Args)]
pub struct ShowArgs {
    /// Application name as it appears in the descriptor
    pub name: String,
}

/// Arguments for the db command
#[derive(Args)]
pub struct DbArgs {
    #[command(subcommand)]
    pub command: DbCommands,
}

/// Database subcommands
#[derive(Subcommand)]
pub enum DbCommands {
    /// Show database location and statistics
    Status,
    /// Delete the downloaded bundle and every descriptor file
    Clear,
}

/// Arguments for the config command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., database.url)
        key: String,
        /// Value to set
        value: String,
    },
    /// Show configuration file path
    Path,
}

/// Arguments for the completions command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
