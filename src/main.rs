mod cli;
mod handlers;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use handlers::{info, run, shell, tour, welcome};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = handlers::load(&cli)?;

    match cli.command {
        None => shell::handle_shell(&config, false),
        Some(Commands::Shell { no_tour }) => shell::handle_shell(&config, no_tour),
        Some(Commands::Run { path, format, command }) => {
            run::handle_run(&config, &path, format, &command)
        }
        Some(Commands::Welcome) => welcome::handle_welcome(&config),
        Some(Commands::Tour { reset }) => tour::handle_tour(&config, reset),
        Some(Commands::Info) => info::handle_info(&config),
    }
}
