mod commands;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tf", about = "Validate forms described in touchform.toml files")]
struct Cli {
    /// Log every state transition
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply values, submit, and report the first invalid field
    Check {
        /// Form definition (TOML); defaults to ./touchform.toml
        #[arg(short, long)]
        form: Option<PathBuf>,
        /// JSON object of field id to value
        #[arg(long)]
        values: Option<PathBuf>,
    },
    /// Apply a JSON array of form events and print visible errors after each
    Replay {
        /// Form definition (TOML); defaults to ./touchform.toml
        #[arg(short, long)]
        form: Option<PathBuf>,
        /// JSON array of events
        events: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check { form, values } => {
            commands::check::run(form.as_deref(), values.as_deref())
        }
        Commands::Replay { form, events } => commands::replay::run(form.as_deref(), &events),
    };

    match result {
        Ok(outcome) if outcome.is_accepted() => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}
