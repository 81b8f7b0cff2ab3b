use clap::Parser;
use owo_colors::{OwoColorize, Style};
use sweeplog_core::error::CoreError;
use sweeplog_core::repository::{CsvLogStore, FlatFileRepository};
use sweeplog_core::schedule::CsvScheduleSource;

mod cli;
mod commands;
mod config;
mod parser;
mod views;

#[tokio::main]
async fn main() {
    let config = config::Config::new().unwrap_or_else(|_| config::Config::default());

    let repository = FlatFileRepository::new(
        CsvScheduleSource::new(&config.schedule_path),
        CsvLogStore::new(&config.log_dir),
    );

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Tasks(command) => {
            commands::tasks::show_tasks(&repository, command).await
        }
        cli::Commands::Submit(command) => {
            commands::submit::submit_tasks(&repository, command, &config).await
        }
        cli::Commands::Schedule(command) => {
            commands::schedule::schedule_command(&config, command).await
        }
        cli::Commands::Users => commands::users::list_users(&config).await,
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::ScheduleNotFound(path) => {
                eprintln!(
                    "{} Schedule file not found: {}",
                    "Error:".style(error_style),
                    path.display()
                );
            }
            CoreError::UsersNotFound(path) => {
                eprintln!(
                    "{} User file not found: {}",
                    "Error:".style(error_style),
                    path.display()
                );
            }
            CoreError::UnknownUser(user_id) => {
                eprintln!(
                    "{} Unknown user: {}",
                    "Error:".style(error_style),
                    user_id.yellow()
                );
            }
            CoreError::InvalidPassword => {
                eprintln!("{} Invalid password.", "Error:".style(error_style));
            }
            CoreError::ParseDate(e) => {
                eprintln!("{} Invalid date: {}", "Error:".style(error_style), e);
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
}
