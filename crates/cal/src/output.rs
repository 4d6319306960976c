use cal_core::CalendarError;
use cal_core::types::{
    Conflict, Event, EventDetails, HistoryAction, HistoryEntry, Professor, ProfessorSubject,
    ScheduleReport, ScheduledEvent, SharedParty, Student, Subject, User,
};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

/// Writes command results to stdout as JSON or as colored text.
pub struct Printer {
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn emit<T, F>(&self, value: &T, text: F) -> Result<(), CalendarError>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        if self.json {
            let rendered = serde_json::to_string_pretty(value).map_err(CalendarError::internal)?;
            println!("{rendered}");
        } else {
            let rendered = text(value);
            if !rendered.is_empty() {
                println!("{rendered}");
            }
        }
        Ok(())
    }

    pub fn done(&self, message: &str) -> Result<(), CalendarError> {
        self.emit(&serde_json::json!({ "ok": true, "message": message }), |_| {
            message
                .if_supports_color(Stream::Stdout, |text| text.green())
                .to_string()
        })
    }
}

pub fn error(err: &CalendarError, json: bool) {
    if json {
        let body = serde_json::json!({
            "error": { "code": err.code(), "message": err.to_string() }
        });
        eprintln!("{body}");
    } else {
        let label = format!("error[{}]", err.code());
        eprintln!(
            "{}: {err}",
            label.if_supports_color(Stream::Stderr, |text| text.red())
        );
    }
}

fn heading(text: &str) -> String {
    text.if_supports_color(Stream::Stdout, |text| text.bold())
        .to_string()
}

fn id_tag(id: impl std::fmt::Display) -> String {
    format!("#{id}")
        .if_supports_color(Stream::Stdout, |text| text.dimmed())
        .to_string()
}

fn lines<T>(items: &[T], empty: &str, line: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty
            .if_supports_color(Stream::Stdout, |text| text.dimmed())
            .to_string();
    }
    items.iter().map(line).collect::<Vec<_>>().join("\n")
}

pub fn user(user: &User) -> String {
    format!("{} {} <{}>", id_tag(user.id), user.username, user.email)
}

pub fn professor(professor: &Professor) -> String {
    format!(
        "{} {}  {}  {}",
        id_tag(professor.id),
        professor.full_name(),
        professor.email,
        professor.phone
    )
}

pub fn professors(items: &[Professor]) -> String {
    lines(items, "no professors", professor)
}

pub fn student(student: &Student) -> String {
    format!(
        "{} {}  {}  {}",
        id_tag(student.id),
        student.full_name(),
        student.email,
        student.phone
    )
}

pub fn students(items: &[Student]) -> String {
    lines(items, "no students", student)
}

pub fn subject(subject: &Subject) -> String {
    format!("{} {}", id_tag(subject.id), subject.name)
}

pub fn subjects(items: &[Subject]) -> String {
    lines(items, "no subjects", subject)
}

pub fn link(link: &ProfessorSubject) -> String {
    format!(
        "{} professor {} teaches subject {}",
        id_tag(link.id),
        link.professor_id,
        link.subject_id
    )
}

pub fn links(items: &[ProfessorSubject]) -> String {
    lines(items, "no links", link)
}

pub fn event(event: &Event) -> String {
    format!(
        "{} {}  professor {}  student {}  subject {}",
        id_tag(event.id),
        event.time.format("%Y-%m-%d %H:%M"),
        event.professor_id,
        event.student_id,
        event.subject_id
    )
}

pub fn events(items: &[Event]) -> String {
    lines(items, "no events", event)
}

pub fn details(details: &EventDetails) -> String {
    format!(
        "{} {}\nbooked by {}",
        id_tag(details.event.id),
        details.summary(),
        details.author
    )
}

fn shared(party: SharedParty) -> &'static str {
    match party {
        SharedParty::Professor => "same professor",
        SharedParty::Student => "same student",
        SharedParty::Both => "same professor and student",
    }
}

pub fn conflict(conflict: &Conflict) -> String {
    format!(
        "conflict: events {} and {} ({}, {} min apart)",
        conflict.first,
        conflict.second,
        shared(conflict.shared),
        conflict.gap_minutes
    )
    .if_supports_color(Stream::Stdout, |text| text.red())
    .to_string()
}

pub fn scheduled(scheduled: &ScheduledEvent) -> String {
    let mut out = event(&scheduled.event);
    for item in &scheduled.conflicts {
        out.push('\n');
        out.push_str(&conflict(item));
    }
    out
}

pub fn report(report: &ScheduleReport) -> String {
    let dates = if report.dates.is_empty() {
        "none".to_string()
    } else {
        report
            .dates
            .iter()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let mut out = format!("{} {dates}\n", heading("dates:"));
    out.push_str(&lines(&report.conflicts, "no conflicts", conflict));
    out
}

pub fn history(entries: &[HistoryEntry]) -> String {
    lines(entries, "no history", |entry| {
        let action = entry.action.as_str();
        let action = match entry.action {
            HistoryAction::Add => action
                .if_supports_color(Stream::Stdout, |text| text.green())
                .to_string(),
            HistoryAction::Edit => action
                .if_supports_color(Stream::Stdout, |text| text.yellow())
                .to_string(),
            HistoryAction::Delete => action
                .if_supports_color(Stream::Stdout, |text| text.red())
                .to_string(),
        };
        let actor = entry
            .actor
            .map_or_else(|| "-".to_string(), |actor| format!("user {actor}"));
        format!(
            "{} {}  {action}  {} {}  {}  {actor}",
            id_tag(entry.id),
            entry.at.format("%Y-%m-%d %H:%M:%S"),
            entry.kind(),
            entry.snapshot.entity_id(),
            entry.snapshot.label()
        )
    })
}

/// Text block for `show` commands: the entity line followed by labelled
/// sections.
pub fn sections(head: String, parts: &[(&str, String)]) -> String {
    let mut out = head;
    for (title, body) in parts {
        out.push('\n');
        out.push_str(&heading(title));
        out.push('\n');
        out.push_str(body);
    }
    out
}
