//! Terminal front end for the minimax tic-tac-toe engine.

#![warn(missing_docs)]

mod app;
mod cli;
mod commands;
mod config;
mod input;
mod logging;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Play {
        computer_first: false,
    });

    let computer_first = matches!(
        command,
        Command::Play {
            computer_first: true
        }
    );
    let cli_level = cli.log_level.clone();
    let config = TuiConfig::load(cli.config.as_deref())?.with_overrides(
        cli.log_file,
        cli.log_level,
        computer_first,
    );

    let env_level = logging::env_filter_var()?;
    let filter = logging::filter(
        cli_level.as_deref(),
        env_level.as_deref(),
        config.log_level(),
    )?;

    match command {
        Command::Play { .. } => {
            logging::init_file(filter, config.log_file())?;
            info!(config = ?config, "Starting tictactoe");
            tui::run(config.settings())
        }
        Command::Solve { board, to_move } => {
            logging::init_stderr(filter);
            print!("{}", commands::solve(&board, to_move.map(Into::into))?);
            Ok(())
        }
        Command::Selfplay => {
            logging::init_stderr(filter);
            print!("{}", commands::selfplay()?);
            Ok(())
        }
    }
}
