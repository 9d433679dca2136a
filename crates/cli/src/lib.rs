pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "airtime",
    about = "Airtime operator CLI",
    long_about = "Inspect configuration, run readiness checks, and simulate skill requests.",
    after_help = "Examples:\n  airtime doctor --json\n  airtime config\n  airtime simulate --event launch\n  airtime simulate --event intent --intent TellCreditsIntent"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
    #[command(about = "Validate config and skill readiness checks")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Run one request through the intent dispatcher and print the response")]
    Simulate(commands::simulate::SimulateArgs),
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
        Command::Simulate(args) => commands::simulate::run(args),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
