use cal_core::types::{EntityKind, EventId, ProfessorId, StudentId, SubjectId};
use cal_core::validation::parse_event_time;
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cal", version, about = "Tutoring calendar for professors and students")]
pub struct Cli {
    /// SQLite database file (overrides CALENDAR_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Conflict window in minutes (overrides CALENDAR_CONFLICT_WINDOW_MINUTES)
    #[arg(long, global = true)]
    pub window_minutes: Option<u32>,

    /// Email of the acting user
    #[arg(long, global = true, env = "CALENDAR_EMAIL")]
    pub email: Option<String>,

    /// Password of the acting user
    #[arg(long, global = true, env = "CALENDAR_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    User {
        #[command(subcommand)]
        command: UserCommand,
    },
    Professor {
        #[command(subcommand)]
        command: ProfessorCommand,
    },
    Student {
        #[command(subcommand)]
        command: StudentCommand,
    },
    Subject {
        #[command(subcommand)]
        command: SubjectCommand,
    },
    Link {
        #[command(subcommand)]
        command: LinkCommand,
    },
    Event {
        #[command(subcommand)]
        command: EventCommand,
    },
    /// Scan every event and print the conflicting pairs
    Conflicts,
    /// Show the change log, newest first
    History(HistoryArgs),
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Register a user; uses the global --email and --password
    Register {
        #[arg(long)]
        username: String,
    },
}

#[derive(Args)]
pub struct PersonArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub contact_email: String,
    #[arg(long)]
    pub phone: String,
}

#[derive(Args)]
pub struct PersonEditArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub contact_email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Subcommand)]
pub enum ProfessorCommand {
    Add {
        #[command(flatten)]
        person: PersonArgs,
        /// Subject to link right away; repeatable
        #[arg(long = "subject")]
        subjects: Vec<SubjectId>,
    },
    Edit {
        id: ProfessorId,
        #[command(flatten)]
        changes: PersonEditArgs,
    },
    Delete {
        id: ProfessorId,
    },
    List,
    /// Show a professor with their subjects and events
    Show {
        id: ProfessorId,
    },
}

#[derive(Subcommand)]
pub enum StudentCommand {
    Add {
        #[command(flatten)]
        person: PersonArgs,
    },
    Edit {
        id: StudentId,
        #[command(flatten)]
        changes: PersonEditArgs,
    },
    Delete {
        id: StudentId,
    },
    List,
    /// Show a student with their events
    Show {
        id: StudentId,
    },
}

#[derive(Subcommand)]
pub enum SubjectCommand {
    Add {
        name: String,
    },
    Edit {
        id: SubjectId,
        #[arg(long)]
        name: String,
    },
    Delete {
        id: SubjectId,
    },
    List,
    /// Show a subject with its professors and events
    Show {
        id: SubjectId,
    },
}

#[derive(Subcommand)]
pub enum LinkCommand {
    Add {
        #[arg(long)]
        professor: ProfessorId,
        #[arg(long = "subject", required = true)]
        subjects: Vec<SubjectId>,
    },
    Remove {
        #[arg(long)]
        professor: ProfessorId,
        #[arg(long)]
        subject: SubjectId,
    },
    List {
        #[arg(long)]
        professor: Option<ProfessorId>,
        #[arg(long)]
        subject: Option<SubjectId>,
    },
}

#[derive(Subcommand)]
pub enum EventCommand {
    Create {
        #[arg(long)]
        professor: ProfessorId,
        #[arg(long)]
        student: StudentId,
        #[arg(long)]
        subject: SubjectId,
        /// Start time, e.g. 2024-03-04T10:00
        #[arg(long, value_parser = parse_event_time)]
        time: NaiveDateTime,
    },
    Edit {
        id: EventId,
        #[arg(long)]
        professor: Option<ProfessorId>,
        #[arg(long)]
        student: Option<StudentId>,
        #[arg(long)]
        subject: Option<SubjectId>,
        #[arg(long, value_parser = parse_event_time)]
        time: Option<NaiveDateTime>,
    },
    Delete {
        id: EventId,
    },
    List {
        #[arg(long)]
        professor: Option<ProfessorId>,
        #[arg(long)]
        student: Option<StudentId>,
        #[arg(long)]
        subject: Option<SubjectId>,
    },
    Show {
        id: EventId,
    },
}

#[derive(Args)]
pub struct HistoryArgs {
    /// Show at most this many entries; all of them when omitted
    #[arg(long)]
    pub limit: Option<u32>,
    /// professor, student, subject, link or event
    #[arg(long)]
    pub kind: Option<EntityKind>,
    #[arg(long)]
    pub entity_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_event_create() {
        let cli = Cli::try_parse_from([
            "cal",
            "event",
            "create",
            "--professor",
            "1",
            "--student",
            "2",
            "--subject",
            "3",
            "--time",
            "2024-03-04T10:00",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Event {
                command: EventCommand::Create { professor, time, .. },
            } => {
                assert_eq!(professor.get(), 1);
                assert_eq!(time.format("%H:%M").to_string(), "10:00");
            }
            _ => panic!("expected event create"),
        }
    }

    #[test]
    fn rejects_bad_ids_and_times() {
        assert!(Cli::try_parse_from(["cal", "professor", "show", "0"]).is_err());
        assert!(Cli::try_parse_from([
            "cal", "event", "create", "--professor", "1", "--student", "1", "--subject", "1",
            "--time", "tomorrow",
        ])
        .is_err());
    }

    #[test]
    fn history_lists_everything_by_default() {
        let cli = Cli::try_parse_from(["cal", "history"]).unwrap();
        match cli.command {
            Command::History(args) => {
                assert_eq!(args.limit, None);
                assert_eq!(args.kind, None);
            }
            _ => panic!("expected history"),
        }
    }

    #[test]
    fn history_kind_accepts_link_alias() {
        let cli = Cli::try_parse_from(["cal", "history", "--kind", "link", "--limit", "5"]).unwrap();
        match cli.command {
            Command::History(args) => {
                assert_eq!(args.kind, Some(EntityKind::ProfessorSubject));
                assert_eq!(args.limit, Some(5));
            }
            _ => panic!("expected history"),
        }
    }
}
