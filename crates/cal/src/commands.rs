use crate::cli::{
    Command, EventCommand, HistoryArgs, LinkCommand, PersonArgs, PersonEditArgs,
    ProfessorCommand, StudentCommand, SubjectCommand, UserCommand,
};
use crate::output::{self, Printer};
use cal_core::error::{EventError, ProfessorError, StudentError, SubjectError, UserError};
use cal_core::types::{
    CreateEventInput, CreateProfessorInput, EventFilter, HistoryFilter, LinkSubjectsInput,
    PersonInput, RegisterUserInput, RequestSource, UpdateEventInput, UpdatePersonInput,
};
use cal_core::{Calendar, CalendarError, RequestContext};
use cal_db::DbStore;
use serde_json::json;

/// One CLI invocation: the calendar, the caller's credentials and the output
/// mode.
pub struct Session<'a> {
    pub calendar: &'a Calendar<DbStore>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub correlation_id: String,
    pub out: Printer,
}

impl Session<'_> {
    /// Builds the request context, verifying credentials when both were
    /// given. Read-only commands never call this.
    fn context(&self) -> Result<RequestContext, CalendarError> {
        let ctx = RequestContext::new(RequestSource::Cli, Some(self.correlation_id.clone()));
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => {
                let user = self.calendar.users().authenticate(email, password)?;
                Ok(ctx.with_actor(user.id))
            }
            _ => Ok(ctx),
        }
    }
}

pub fn dispatch(command: Command, session: &Session<'_>) -> Result<(), CalendarError> {
    match command {
        Command::User {
            command: UserCommand::Register { username },
        } => register(username, session),
        Command::Professor { command } => professor(command, session),
        Command::Student { command } => student(command, session),
        Command::Subject { command } => subject(command, session),
        Command::Link { command } => link(command, session),
        Command::Event { command } => event(command, session),
        Command::Conflicts => conflicts(session),
        Command::History(args) => history(&args, session),
    }
}

fn register(username: String, session: &Session<'_>) -> Result<(), CalendarError> {
    let (Some(email), Some(password)) = (&session.email, &session.password) else {
        return Err(CalendarError::User(UserError::InvalidInput {
            message: "--email and --password are required to register".to_string(),
        }));
    };
    let user = session.calendar.users().register(RegisterUserInput {
        username,
        email: email.clone(),
        password: password.clone(),
    })?;
    session.out.emit(&user, output::user)
}

fn person_input(args: PersonArgs) -> PersonInput {
    PersonInput {
        name: args.name,
        last_name: args.last_name,
        email: args.contact_email,
        phone: args.phone,
    }
}

fn person_update(args: PersonEditArgs) -> UpdatePersonInput {
    UpdatePersonInput {
        name: args.name,
        last_name: args.last_name,
        email: args.contact_email,
        phone: args.phone,
    }
}

fn professor(command: ProfessorCommand, session: &Session<'_>) -> Result<(), CalendarError> {
    let api = session.calendar.professors();
    let out = &session.out;
    match command {
        ProfessorCommand::Add { person, subjects } => {
            let professor = api.create(
                &session.context()?,
                CreateProfessorInput {
                    person: person_input(person),
                    subject_ids: subjects,
                },
            )?;
            out.emit(&professor, output::professor)
        }
        ProfessorCommand::Edit { id, changes } => {
            let professor = api.update(&session.context()?, id, person_update(changes))?;
            out.emit(&professor, output::professor)
        }
        ProfessorCommand::Delete { id } => {
            api.delete(&session.context()?, id)?;
            out.done(&format!("deleted professor {id}"))
        }
        ProfessorCommand::List => {
            let professors = api.list()?;
            out.emit(&professors, |items| output::professors(items))
        }
        ProfessorCommand::Show { id } => {
            let Some(professor) = api.get(id)? else {
                return Err(CalendarError::Professor(ProfessorError::NotFound));
            };
            let subjects = api.subjects(id)?;
            let events = api.events(id)?;
            out.emit(
                &json!({ "professor": professor, "subjects": subjects, "events": events }),
                |_| {
                    output::sections(
                        output::professor(&professor),
                        &[
                            ("subjects", output::subjects(&subjects)),
                            ("events", output::events(&events)),
                        ],
                    )
                },
            )
        }
    }
}

fn student(command: StudentCommand, session: &Session<'_>) -> Result<(), CalendarError> {
    let api = session.calendar.students();
    let out = &session.out;
    match command {
        StudentCommand::Add { person } => {
            let student = api.create(&session.context()?, person_input(person))?;
            out.emit(&student, output::student)
        }
        StudentCommand::Edit { id, changes } => {
            let student = api.update(&session.context()?, id, person_update(changes))?;
            out.emit(&student, output::student)
        }
        StudentCommand::Delete { id } => {
            api.delete(&session.context()?, id)?;
            out.done(&format!("deleted student {id}"))
        }
        StudentCommand::List => {
            let students = api.list()?;
            out.emit(&students, |items| output::students(items))
        }
        StudentCommand::Show { id } => {
            let Some(student) = api.get(id)? else {
                return Err(CalendarError::Student(StudentError::NotFound));
            };
            let events = api.events(id)?;
            out.emit(&json!({ "student": student, "events": events }), |_| {
                output::sections(
                    output::student(&student),
                    &[("events", output::events(&events))],
                )
            })
        }
    }
}

fn subject(command: SubjectCommand, session: &Session<'_>) -> Result<(), CalendarError> {
    let api = session.calendar.subjects();
    let out = &session.out;
    match command {
        SubjectCommand::Add { name } => {
            let subject = api.create(&session.context()?, &name)?;
            out.emit(&subject, output::subject)
        }
        SubjectCommand::Edit { id, name } => {
            let subject = api.rename(&session.context()?, id, &name)?;
            out.emit(&subject, output::subject)
        }
        SubjectCommand::Delete { id } => {
            api.delete(&session.context()?, id)?;
            out.done(&format!("deleted subject {id}"))
        }
        SubjectCommand::List => {
            let subjects = api.list()?;
            out.emit(&subjects, |items| output::subjects(items))
        }
        SubjectCommand::Show { id } => {
            let Some(subject) = api.get(id)? else {
                return Err(CalendarError::Subject(SubjectError::NotFound));
            };
            let professors = api.professors(id)?;
            let events = api.events(id)?;
            out.emit(
                &json!({ "subject": subject, "professors": professors, "events": events }),
                |_| {
                    output::sections(
                        output::subject(&subject),
                        &[
                            ("professors", output::professors(&professors)),
                            ("events", output::events(&events)),
                        ],
                    )
                },
            )
        }
    }
}

fn link(command: LinkCommand, session: &Session<'_>) -> Result<(), CalendarError> {
    let api = session.calendar.links();
    let out = &session.out;
    match command {
        LinkCommand::Add {
            professor,
            subjects,
        } => {
            let outcome = api.link(
                &session.context()?,
                LinkSubjectsInput {
                    professor_id: professor,
                    subject_ids: subjects,
                },
            )?;
            out.emit(&outcome, |outcome| {
                let mut lines = vec![output::links(&outcome.linked)];
                lines.extend(
                    outcome
                        .already_linked
                        .iter()
                        .map(|subject| format!("subject {subject} was already linked")),
                );
                lines.join("\n")
            })
        }
        LinkCommand::Remove { professor, subject } => {
            api.unlink(&session.context()?, professor, subject)?;
            out.done(&format!("unlinked subject {subject} from professor {professor}"))
        }
        LinkCommand::List { professor, subject } => {
            let links = api.list(professor, subject)?;
            out.emit(&links, |items| output::links(items))
        }
    }
}

fn event(command: EventCommand, session: &Session<'_>) -> Result<(), CalendarError> {
    let api = session.calendar.events();
    let out = &session.out;
    match command {
        EventCommand::Create {
            professor,
            student,
            subject,
            time,
        } => {
            let scheduled = api.create(
                &session.context()?,
                CreateEventInput {
                    professor_id: professor,
                    student_id: student,
                    subject_id: subject,
                    time,
                },
            )?;
            out.emit(&scheduled, output::scheduled)
        }
        EventCommand::Edit {
            id,
            professor,
            student,
            subject,
            time,
        } => {
            let scheduled = api.update(
                &session.context()?,
                id,
                UpdateEventInput {
                    professor_id: professor,
                    student_id: student,
                    subject_id: subject,
                    time,
                },
            )?;
            out.emit(&scheduled, output::scheduled)
        }
        EventCommand::Delete { id } => {
            api.delete(&session.context()?, id)?;
            out.done(&format!("deleted event {id}"))
        }
        EventCommand::List {
            professor,
            student,
            subject,
        } => {
            let events = api.list(&EventFilter {
                professor_id: professor,
                student_id: student,
                subject_id: subject,
            })?;
            out.emit(&events, |items| output::events(items))
        }
        EventCommand::Show { id } => {
            let details = api
                .details(id)?
                .ok_or(CalendarError::Event(EventError::NotFound))?;
            out.emit(&details, output::details)
        }
    }
}

fn conflicts(session: &Session<'_>) -> Result<(), CalendarError> {
    let report = session.calendar.schedule().report()?;
    session.out.emit(&report, output::report)
}

fn history(args: &HistoryArgs, session: &Session<'_>) -> Result<(), CalendarError> {
    let entries = session.calendar.history().list(&HistoryFilter {
        kind: args.kind,
        entity_id: args.entity_id,
        limit: args.limit,
    })?;
    session.out.emit(&entries, |items| output::history(items))
}
