mod cli;
mod config;
mod display;
mod error;
mod models;
mod store;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "biostats")]
#[command(about = "Keep a CSV file of biographical records", long_about = None)]
#[command(after_help = "Commands:
  init                                      Create an empty data file
  create <name> <sex> <age> <height> <weight>   Add a record
  read <name>                               Show a record
  update <name> <sex> <age> <height> <weight>   Replace a record
  delete <name>                             Remove a record

Options must come before the command.")]
struct Cli {
    /// Path to config file (defaults to biostats.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the CSV data file, overriding the config
    #[arg(long)]
    file: Option<PathBuf>,

    /// Command to run
    #[arg(allow_hyphen_values = true)]
    command: Option<String>,

    /// Positional arguments for the command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = config::resolve(cli.config, cli.file).and_then(|config| {
        let command = cli.command.unwrap_or_default();
        cli::dispatch(&command, &cli.args, &config.data_file)
    });

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            println!("{}", e);
            std::process::exit(1);
        }
    }
}
