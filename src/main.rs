use clap::Parser;
use colored::{control::set_override, Colorize};
use is_terminal::IsTerminal;

use appdex::catalog::AppCatalog;
use appdex::cli::args::{Cli, Commands, CompletionsArgs};
use appdex::cli::commands;
use appdex::config::{Config, Paths};
use appdex::error::AppdexError;

fn main() {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    // Also disable colors when stdout is not a terminal (for piping)
    if std::env::var("NO_COLOR").is_ok() || !std::io::stdout().is_terminal() {
        set_override(false);
    }

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppdexError> {
    let cli = Cli::parse();
    let format = cli.output;

    // Handle completions command early (no config or catalog needed)
    if let Commands::Completions(CompletionsArgs { shell }) = &cli.command {
        Cli::print_completions(*shell);
        return Ok(());
    }

    let paths = match &cli.root {
        Some(root) => Paths::under(root.as_str()),
        None => Paths::new()?,
    };
    let mut config = Config::load_from(&paths)?;

    let output = match &cli.command {
        Commands::Completions(_) => unreachable!(), // Handled above
        Commands::Config(args) => commands::config(&mut config, &paths, args, format)?,

        // All other commands operate on the catalog
        _ => {
            let mut catalog = AppCatalog::new(&paths, &config)?;

            match &cli.command {
                Commands::List(args) => commands::list(&mut catalog, &paths, args, format)?,
                Commands::Show(args) => commands::show(&mut catalog, &paths, args, format)?,
                Commands::Update => commands::update(&mut catalog, format)?,
                Commands::Db(args) => commands::db(&mut catalog, &paths, args, format)?,
                Commands::Config(_) | Commands::Completions(_) => unreachable!(),
            }
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
