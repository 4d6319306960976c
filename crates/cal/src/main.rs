use cal_core::{Calendar, CalendarConfig, CalendarError};
use cal_db::DbStore;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::Cli;
use commands::Session;
use output::Printer;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&err, json);
            ExitCode::from(exit_status(&err))
        }
    }
}

fn run(cli: Cli) -> Result<(), CalendarError> {
    let mut config = CalendarConfig::from_env()?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if let Some(minutes) = cli.window_minutes {
        config.conflict_window = cal_core::ConflictWindow::from_minutes(minutes);
    }
    init_tracing(&config.log_filter);

    if let Some(parent) = Path::new(&config.db_path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(CalendarError::internal)?;
    }
    let conn = cal_db::schema::open_and_migrate(&config.db_path).map_err(CalendarError::internal)?;
    let calendar = Calendar::new(DbStore::new(conn), config.conflict_window);

    let correlation_id = ulid::Ulid::new().to_string();
    tracing::debug!(
        db = %config.db_path,
        window_minutes = config.conflict_window.minutes(),
        correlation_id = %correlation_id,
        "calendar opened"
    );

    let session = Session {
        calendar: &calendar,
        email: cli.email,
        password: cli.password,
        correlation_id,
        out: Printer::new(cli.json),
    };
    commands::dispatch(cli.command, &session)
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_status(err: &CalendarError) -> u8 {
    match err.code() {
        "not_found" => 2,
        "invalid_input" => 3,
        "conflict" => 4,
        "forbidden" => 5,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cal_core::error::{EventError, LinkError, SubjectError};

    #[test]
    fn exit_status_follows_error_code() {
        assert_eq!(
            exit_status(&CalendarError::Subject(SubjectError::NotFound)),
            2
        );
        assert_eq!(
            exit_status(&CalendarError::Event(EventError::InvalidTime {
                value: "noon".to_string()
            })),
            3
        );
        assert_eq!(
            exit_status(&CalendarError::Link(LinkError::AlreadyLinked {
                professor: "Alan Turing".to_string(),
                subject: "Logic".to_string(),
            })),
            4
        );
        assert_eq!(exit_status(&CalendarError::Event(EventError::NotAuthor)), 5);
        assert_eq!(exit_status(&CalendarError::internal("disk full")), 1);
    }
}
