use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use paychat::cli::args::{Cli, Commands};
use paychat::cli::commands;
use paychat::config::{Config, Paths};
use paychat::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::default();

    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());
    let config = Config::load_from_path(&config_path).context("loading configuration")?;

    config.general.color.apply();
    logging::init(config.logging.level.raised(cli.verbose));

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match &cli.command {
        Commands::Parse(args) => commands::parse(args, format)?,
        Commands::Ask(args) => commands::ask(args, &config, &paths, format)?,
        Commands::Completions { shell, install } => commands::completions(shell, *install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
