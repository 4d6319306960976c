use crate::conflicts::{self, ConflictWindow};
use crate::error::{
    CalendarError, EventError, HistoryError, LinkError, ProfessorError, StudentError,
    SubjectError, UserError,
};
use crate::events::EventRepository;
use crate::history::HistoryRepository;
use crate::password::{hash_password, verify_password};
use crate::professors::ProfessorRepository;
use crate::store::Store;
use crate::students::StudentRepository;
use crate::subjects::{LinkRepository, SubjectRepository};
use crate::types::{
    CreateEventInput, CreateProfessorInput, EntitySnapshot, Event, EventDetails, EventFilter,
    EventId, HistoryAction, HistoryEntry, HistoryFilter, LinkSubjectsInput, NewHistoryEntry,
    PersonInput, Professor, ProfessorId, ProfessorSubject, RegisterUserInput, RequestSource,
    ScheduleReport, ScheduledEvent, Student, StudentId, Subject, SubjectId, UpdateEventInput,
    UpdatePersonInput, User, UserId,
};
use crate::users::UserRepository;
use crate::validation::{
    truncate_to_minute, validate_person, validate_registration, validate_subject_name,
};
use serde::{Deserialize, Serialize};

/// Per-request information threaded through every operation.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub actor: Option<UserId>,
    pub source: RequestSource,
    pub correlation_id: Option<String>,
}

impl RequestContext {
    pub fn new(source: RequestSource, correlation_id: Option<String>) -> Self {
        Self {
            actor: None,
            source,
            correlation_id,
        }
    }

    #[must_use]
    pub fn with_actor(mut self, actor: UserId) -> Self {
        self.actor = Some(actor);
        self
    }

    pub fn require_actor(&self) -> Result<UserId, CalendarError> {
        self.actor
            .ok_or(CalendarError::User(UserError::Unauthenticated))
    }
}

/// A mutation to be written to the history log alongside the entity write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub action: HistoryAction,
    pub snapshot: EntitySnapshot,
}

impl Change {
    pub fn added(snapshot: EntitySnapshot) -> Self {
        Self {
            action: HistoryAction::Add,
            snapshot,
        }
    }

    pub fn edited(snapshot: EntitySnapshot) -> Self {
        Self {
            action: HistoryAction::Edit,
            snapshot,
        }
    }

    pub fn deleted(snapshot: EntitySnapshot) -> Self {
        Self {
            action: HistoryAction::Delete,
            snapshot,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkOutcome {
    pub linked: Vec<ProfessorSubject>,
    pub already_linked: Vec<SubjectId>,
}

pub struct Calendar<S: Store> {
    store: S,
    window: ConflictWindow,
}

impl<S: Store> Calendar<S> {
    pub fn new(store: S, window: ConflictWindow) -> Self {
        Self { store, window }
    }

    pub fn users(&self) -> UsersApi<'_, S> {
        UsersApi { core: self }
    }

    pub fn professors(&self) -> ProfessorsApi<'_, S> {
        ProfessorsApi { core: self }
    }

    pub fn students(&self) -> StudentsApi<'_, S> {
        StudentsApi { core: self }
    }

    pub fn subjects(&self) -> SubjectsApi<'_, S> {
        SubjectsApi { core: self }
    }

    pub fn links(&self) -> LinksApi<'_, S> {
        LinksApi { core: self }
    }

    pub fn events(&self) -> EventsApi<'_, S> {
        EventsApi { core: self }
    }

    pub fn history(&self) -> HistoryApi<'_, S> {
        HistoryApi { core: self }
    }

    pub fn schedule(&self) -> ScheduleApi<'_, S> {
        ScheduleApi { core: self }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn window(&self) -> ConflictWindow {
        self.window
    }

    /// Runs `f` and appends one history entry per returned [`Change`], all in
    /// a single transaction. A failed append rolls back the mutation.
    fn with_history<T, F>(&self, ctx: &RequestContext, f: F) -> Result<T, CalendarError>
    where
        F: FnOnce(&S) -> Result<(T, Vec<Change>), CalendarError>,
    {
        let (value, entries) = self.store.with_tx(|store| {
            let (value, changes) = f(store)?;
            let mut entries = Vec::with_capacity(changes.len());
            for change in changes {
                let entry = store
                    .history()
                    .append(NewHistoryEntry {
                        action: change.action,
                        snapshot: change.snapshot,
                        actor: ctx.actor,
                        correlation_id: ctx.correlation_id.clone(),
                    })
                    .map_err(|err| {
                        CalendarError::History(HistoryError::WriteFailed {
                            message: err.to_string(),
                        })
                    })?;
                entries.push(entry);
            }
            Ok((value, entries))
        })?;
        for entry in &entries {
            tracing::info!(
                history_id = %entry.id,
                action = %entry.action,
                kind = %entry.kind(),
                entity_id = entry.snapshot.entity_id(),
                source = ?ctx.source,
                correlation_id = ctx.correlation_id.as_deref().unwrap_or("-"),
                "change recorded"
            );
        }
        Ok(value)
    }
}

pub struct UsersApi<'a, S: Store> {
    core: &'a Calendar<S>,
}

impl<S: Store> UsersApi<'_, S> {
    pub fn register(&self, input: RegisterUserInput) -> Result<User, CalendarError> {
        validate_registration(&input)?;
        let password_hash = hash_password(&input.password)?;
        let user = self.core.store.with_tx(|store| {
            let users = store.users();
            if users.find_by_email(input.email.trim())?.is_some()
                || users.find_by_username(input.username.trim())?.is_some()
            {
                return Err(CalendarError::User(UserError::AlreadyExists));
            }
            users.create(input.username.trim(), input.email.trim(), &password_hash)
        })?;
        tracing::info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, CalendarError> {
        let user = self.core.store.users().find_by_email(email.trim())?;
        match user {
            Some(user) if verify_password(password, &user.password_hash) => Ok(user),
            _ => {
                tracing::warn!(email, "authentication failed");
                Err(CalendarError::User(UserError::InvalidCredentials))
            }
        }
    }

    pub fn get(&self, id: UserId) -> Result<Option<User>, CalendarError> {
        self.core.store.users().get(id)
    }
}

pub struct ProfessorsApi<'a, S: Store> {
    core: &'a Calendar<S>,
}

impl<S: Store> ProfessorsApi<'_, S> {
    pub fn create(
        &self,
        ctx: &RequestContext,
        input: CreateProfessorInput,
    ) -> Result<Professor, CalendarError> {
        validate_person(&input.person)
            .map_err(|message| ProfessorError::InvalidInput { message })?;
        self.core.with_history(ctx, |store| {
            let professor = store.professors().create(&trimmed(&input.person))?;
            let mut changes = vec![Change::added(EntitySnapshot::Professor(professor.clone()))];
            let mut seen = Vec::new();
            for subject_id in input.subject_ids {
                if seen.contains(&subject_id) {
                    continue;
                }
                seen.push(subject_id);
                if store.subjects().get(subject_id)?.is_none() {
                    return Err(CalendarError::Subject(SubjectError::NotFound));
                }
                let link = store.links().create(professor.id, subject_id)?;
                changes.push(Change::added(EntitySnapshot::ProfessorSubject(link)));
            }
            Ok((professor, changes))
        })
    }

    pub fn get(&self, id: ProfessorId) -> Result<Option<Professor>, CalendarError> {
        self.core.store.professors().get(id)
    }

    pub fn list(&self) -> Result<Vec<Professor>, CalendarError> {
        self.core.store.professors().list()
    }

    pub fn update(
        &self,
        ctx: &RequestContext,
        id: ProfessorId,
        input: UpdatePersonInput,
    ) -> Result<Professor, CalendarError> {
        if input.is_empty() {
            return Err(CalendarError::Professor(ProfessorError::InvalidInput {
                message: "nothing to update".to_string(),
            }));
        }
        self.core.with_history(ctx, |store| {
            let Some(current) = store.professors().get(id)? else {
                return Err(CalendarError::Professor(ProfessorError::NotFound));
            };
            let person = apply_person_update(
                PersonInput {
                    name: current.name,
                    last_name: current.last_name,
                    email: current.email,
                    phone: current.phone,
                },
                input,
            );
            validate_person(&person)
                .map_err(|message| ProfessorError::InvalidInput { message })?;
            let professor = store.professors().update(&Professor {
                id,
                name: person.name,
                last_name: person.last_name,
                email: person.email,
                phone: person.phone,
            })?;
            Ok((
                professor.clone(),
                vec![Change::edited(EntitySnapshot::Professor(professor))],
            ))
        })
    }

    /// Deletes a professor and their subject links. Fails while any event
    /// still references them.
    pub fn delete(&self, ctx: &RequestContext, id: ProfessorId) -> Result<(), CalendarError> {
        self.core.with_history(ctx, |store| {
            let Some(professor) = store.professors().get(id)? else {
                return Err(CalendarError::Professor(ProfessorError::NotFound));
            };
            if !store.events().list(&EventFilter::professor(id))?.is_empty() {
                return Err(CalendarError::Professor(ProfessorError::InUse));
            }
            let mut changes = Vec::new();
            for link in store.links().list(Some(id), None)? {
                store.links().delete(link.id)?;
                changes.push(Change::deleted(EntitySnapshot::ProfessorSubject(link)));
            }
            store.professors().delete(id)?;
            changes.push(Change::deleted(EntitySnapshot::Professor(professor)));
            Ok(((), changes))
        })
    }

    pub fn subjects(&self, id: ProfessorId) -> Result<Vec<Subject>, CalendarError> {
        let store = &self.core.store;
        let mut subjects = Vec::new();
        for link in store.links().list(Some(id), None)? {
            if let Some(subject) = store.subjects().get(link.subject_id)? {
                subjects.push(subject);
            }
        }
        Ok(subjects)
    }

    pub fn events(&self, id: ProfessorId) -> Result<Vec<Event>, CalendarError> {
        self.core.store.events().list(&EventFilter::professor(id))
    }
}

pub struct StudentsApi<'a, S: Store> {
    core: &'a Calendar<S>,
}

impl<S: Store> StudentsApi<'_, S> {
    pub fn create(&self, ctx: &RequestContext, input: PersonInput) -> Result<Student, CalendarError> {
        validate_person(&input).map_err(|message| StudentError::InvalidInput { message })?;
        self.core.with_history(ctx, |store| {
            let student = store.students().create(&trimmed(&input))?;
            Ok((
                student.clone(),
                vec![Change::added(EntitySnapshot::Student(student))],
            ))
        })
    }

    pub fn get(&self, id: StudentId) -> Result<Option<Student>, CalendarError> {
        self.core.store.students().get(id)
    }

    pub fn list(&self) -> Result<Vec<Student>, CalendarError> {
        self.core.store.students().list()
    }

    pub fn update(
        &self,
        ctx: &RequestContext,
        id: StudentId,
        input: UpdatePersonInput,
    ) -> Result<Student, CalendarError> {
        if input.is_empty() {
            return Err(CalendarError::Student(StudentError::InvalidInput {
                message: "nothing to update".to_string(),
            }));
        }
        self.core.with_history(ctx, |store| {
            let Some(current) = store.students().get(id)? else {
                return Err(CalendarError::Student(StudentError::NotFound));
            };
            let person = apply_person_update(
                PersonInput {
                    name: current.name,
                    last_name: current.last_name,
                    email: current.email,
                    phone: current.phone,
                },
                input,
            );
            validate_person(&person).map_err(|message| StudentError::InvalidInput { message })?;
            let student = store.students().update(&Student {
                id,
                name: person.name,
                last_name: person.last_name,
                email: person.email,
                phone: person.phone,
            })?;
            Ok((
                student.clone(),
                vec![Change::edited(EntitySnapshot::Student(student))],
            ))
        })
    }

    pub fn delete(&self, ctx: &RequestContext, id: StudentId) -> Result<(), CalendarError> {
        self.core.with_history(ctx, |store| {
            let Some(student) = store.students().get(id)? else {
                return Err(CalendarError::Student(StudentError::NotFound));
            };
            if !store.events().list(&EventFilter::student(id))?.is_empty() {
                return Err(CalendarError::Student(StudentError::InUse));
            }
            store.students().delete(id)?;
            Ok(((), vec![Change::deleted(EntitySnapshot::Student(student))]))
        })
    }

    pub fn events(&self, id: StudentId) -> Result<Vec<Event>, CalendarError> {
        self.core.store.events().list(&EventFilter::student(id))
    }
}

pub struct SubjectsApi<'a, S: Store> {
    core: &'a Calendar<S>,
}

impl<S: Store> SubjectsApi<'_, S> {
    pub fn create(&self, ctx: &RequestContext, name: &str) -> Result<Subject, CalendarError> {
        validate_subject_name(name).map_err(|message| SubjectError::InvalidInput { message })?;
        self.core.with_history(ctx, |store| {
            let subject = store.subjects().create(name.trim())?;
            Ok((
                subject.clone(),
                vec![Change::added(EntitySnapshot::Subject(subject))],
            ))
        })
    }

    pub fn get(&self, id: SubjectId) -> Result<Option<Subject>, CalendarError> {
        self.core.store.subjects().get(id)
    }

    pub fn list(&self) -> Result<Vec<Subject>, CalendarError> {
        self.core.store.subjects().list()
    }

    pub fn rename(
        &self,
        ctx: &RequestContext,
        id: SubjectId,
        name: &str,
    ) -> Result<Subject, CalendarError> {
        validate_subject_name(name).map_err(|message| SubjectError::InvalidInput { message })?;
        self.core.with_history(ctx, |store| {
            if store.subjects().get(id)?.is_none() {
                return Err(CalendarError::Subject(SubjectError::NotFound));
            }
            let subject = store.subjects().update(&Subject {
                id,
                name: name.trim().to_string(),
            })?;
            Ok((
                subject.clone(),
                vec![Change::edited(EntitySnapshot::Subject(subject))],
            ))
        })
    }

    /// Deletes a subject and its professor links. Fails while any event
    /// still references it.
    pub fn delete(&self, ctx: &RequestContext, id: SubjectId) -> Result<(), CalendarError> {
        self.core.with_history(ctx, |store| {
            let Some(subject) = store.subjects().get(id)? else {
                return Err(CalendarError::Subject(SubjectError::NotFound));
            };
            if !store.events().list(&EventFilter::subject(id))?.is_empty() {
                return Err(CalendarError::Subject(SubjectError::InUse));
            }
            let mut changes = Vec::new();
            for link in store.links().list(None, Some(id))? {
                store.links().delete(link.id)?;
                changes.push(Change::deleted(EntitySnapshot::ProfessorSubject(link)));
            }
            store.subjects().delete(id)?;
            changes.push(Change::deleted(EntitySnapshot::Subject(subject)));
            Ok(((), changes))
        })
    }

    pub fn professors(&self, id: SubjectId) -> Result<Vec<Professor>, CalendarError> {
        let store = &self.core.store;
        let mut professors = Vec::new();
        for link in store.links().list(None, Some(id))? {
            if let Some(professor) = store.professors().get(link.professor_id)? {
                professors.push(professor);
            }
        }
        Ok(professors)
    }

    pub fn events(&self, id: SubjectId) -> Result<Vec<Event>, CalendarError> {
        self.core.store.events().list(&EventFilter::subject(id))
    }
}

pub struct LinksApi<'a, S: Store> {
    core: &'a Calendar<S>,
}

impl<S: Store> LinksApi<'_, S> {
    /// Links every subject in `input` to the professor. Subjects that are
    /// already linked are reported back instead of failing the batch.
    pub fn link(
        &self,
        ctx: &RequestContext,
        input: LinkSubjectsInput,
    ) -> Result<LinkOutcome, CalendarError> {
        if input.subject_ids.is_empty() {
            return Err(CalendarError::Link(LinkError::InvalidInput {
                message: "at least one subject is required".to_string(),
            }));
        }
        let outcome = self.core.with_history(ctx, |store| {
            let Some(professor) = store.professors().get(input.professor_id)? else {
                return Err(CalendarError::Professor(ProfessorError::NotFound));
            };
            let mut outcome = LinkOutcome::default();
            let mut changes = Vec::new();
            for subject_id in input.subject_ids {
                let Some(subject) = store.subjects().get(subject_id)? else {
                    return Err(CalendarError::Subject(SubjectError::NotFound));
                };
                if store.links().find(professor.id, subject_id)?.is_some() {
                    tracing::warn!(
                        professor = %professor.full_name(),
                        subject = %subject.name,
                        "already linked"
                    );
                    outcome.already_linked.push(subject_id);
                    continue;
                }
                let link = store.links().create(professor.id, subject_id)?;
                changes.push(Change::added(EntitySnapshot::ProfessorSubject(link.clone())));
                outcome.linked.push(link);
            }
            Ok((outcome, changes))
        })?;
        Ok(outcome)
    }

    /// Links a single subject, failing if the pair already exists.
    pub fn link_one(
        &self,
        ctx: &RequestContext,
        professor_id: ProfessorId,
        subject_id: SubjectId,
    ) -> Result<ProfessorSubject, CalendarError> {
        let outcome = self.link(
            ctx,
            LinkSubjectsInput {
                professor_id,
                subject_ids: vec![subject_id],
            },
        )?;
        if let Some(link) = outcome.linked.into_iter().next() {
            return Ok(link);
        }
        let professor = self
            .core
            .store
            .professors()
            .get(professor_id)?
            .map_or_else(|| professor_id.to_string(), |p| p.full_name());
        let subject = self
            .core
            .store
            .subjects()
            .get(subject_id)?
            .map_or_else(|| subject_id.to_string(), |s| s.name);
        Err(CalendarError::Link(LinkError::AlreadyLinked { professor, subject }))
    }

    pub fn unlink(
        &self,
        ctx: &RequestContext,
        professor_id: ProfessorId,
        subject_id: SubjectId,
    ) -> Result<(), CalendarError> {
        self.core.with_history(ctx, |store| {
            let Some(link) = store.links().find(professor_id, subject_id)? else {
                return Err(CalendarError::Link(LinkError::NotFound));
            };
            store.links().delete(link.id)?;
            Ok(((), vec![Change::deleted(EntitySnapshot::ProfessorSubject(link))]))
        })
    }

    pub fn list(
        &self,
        professor_id: Option<ProfessorId>,
        subject_id: Option<SubjectId>,
    ) -> Result<Vec<ProfessorSubject>, CalendarError> {
        self.core.store.links().list(professor_id, subject_id)
    }
}

pub struct EventsApi<'a, S: Store> {
    core: &'a Calendar<S>,
}

impl<S: Store> EventsApi<'_, S> {
    /// Schedules an event authored by the acting user. Conflicts with other
    /// events are returned as warnings; they never block the write.
    pub fn create(
        &self,
        ctx: &RequestContext,
        input: CreateEventInput,
    ) -> Result<ScheduledEvent, CalendarError> {
        let author_id = ctx.require_actor()?;
        let input = CreateEventInput {
            time: truncate_to_minute(input.time),
            ..input
        };
        let event = self.core.with_history(ctx, |store| {
            if store.users().get(author_id)?.is_none() {
                return Err(CalendarError::User(UserError::NotFound));
            }
            ensure_participants(store, input.professor_id, input.student_id, input.subject_id)?;
            let event = store.events().create(author_id, &input)?;
            Ok((
                event.clone(),
                vec![Change::added(EntitySnapshot::Event(event))],
            ))
        })?;
        self.scheduled(event)
    }

    pub fn get(&self, id: EventId) -> Result<Option<Event>, CalendarError> {
        self.core.store.events().get(id)
    }

    pub fn details(&self, id: EventId) -> Result<Option<EventDetails>, CalendarError> {
        let store = &self.core.store;
        let Some(event) = store.events().get(id)? else {
            return Ok(None);
        };
        let professor = store
            .professors()
            .get(event.professor_id)?
            .ok_or(CalendarError::Professor(ProfessorError::NotFound))?;
        let student = store
            .students()
            .get(event.student_id)?
            .ok_or(CalendarError::Student(StudentError::NotFound))?;
        let subject = store
            .subjects()
            .get(event.subject_id)?
            .ok_or(CalendarError::Subject(SubjectError::NotFound))?;
        let author = store
            .users()
            .get(event.author_id)?
            .ok_or(CalendarError::User(UserError::NotFound))?;
        Ok(Some(EventDetails {
            event,
            professor,
            student,
            subject,
            author: author.username,
        }))
    }

    pub fn list(&self, filter: &EventFilter) -> Result<Vec<Event>, CalendarError> {
        self.core.store.events().list(filter)
    }

    pub fn update(
        &self,
        ctx: &RequestContext,
        id: EventId,
        input: UpdateEventInput,
    ) -> Result<ScheduledEvent, CalendarError> {
        let actor = ctx.require_actor()?;
        if input.is_empty() {
            return Err(CalendarError::Event(EventError::InvalidInput {
                message: "nothing to update".to_string(),
            }));
        }
        let event = self.core.with_history(ctx, |store| {
            let Some(current) = store.events().get(id)? else {
                return Err(CalendarError::Event(EventError::NotFound));
            };
            if current.author_id != actor {
                return Err(CalendarError::Event(EventError::NotAuthor));
            }
            let next = Event {
                professor_id: input.professor_id.unwrap_or(current.professor_id),
                student_id: input.student_id.unwrap_or(current.student_id),
                subject_id: input.subject_id.unwrap_or(current.subject_id),
                time: truncate_to_minute(input.time.unwrap_or(current.time)),
                ..current
            };
            ensure_participants(store, next.professor_id, next.student_id, next.subject_id)?;
            let event = store.events().update(&next)?;
            Ok((
                event.clone(),
                vec![Change::edited(EntitySnapshot::Event(event))],
            ))
        })?;
        self.scheduled(event)
    }

    pub fn delete(&self, ctx: &RequestContext, id: EventId) -> Result<(), CalendarError> {
        let actor = ctx.require_actor()?;
        self.core.with_history(ctx, |store| {
            let Some(event) = store.events().get(id)? else {
                return Err(CalendarError::Event(EventError::NotFound));
            };
            if event.author_id != actor {
                return Err(CalendarError::Event(EventError::NotAuthor));
            }
            store.events().delete(id)?;
            Ok(((), vec![Change::deleted(EntitySnapshot::Event(event))]))
        })
    }

    fn scheduled(&self, event: Event) -> Result<ScheduledEvent, CalendarError> {
        let all = self.core.store.events().list_chronological()?;
        let conflicts = conflicts::conflicts_with(&event, &all, self.core.window);
        for conflict in &conflicts {
            tracing::warn!(
                first = %conflict.first,
                second = %conflict.second,
                shared = ?conflict.shared,
                gap_minutes = conflict.gap_minutes,
                "scheduling conflict"
            );
        }
        Ok(ScheduledEvent { event, conflicts })
    }
}

pub struct HistoryApi<'a, S: Store> {
    core: &'a Calendar<S>,
}

impl<S: Store> HistoryApi<'_, S> {
    pub fn list(&self, filter: &HistoryFilter) -> Result<Vec<HistoryEntry>, CalendarError> {
        self.core.store.history().list(filter)
    }
}

pub struct ScheduleApi<'a, S: Store> {
    core: &'a Calendar<S>,
}

impl<S: Store> ScheduleApi<'_, S> {
    /// Scans all events with the configured window.
    pub fn report(&self) -> Result<ScheduleReport, CalendarError> {
        self.report_with(self.core.window)
    }

    pub fn report_with(&self, window: ConflictWindow) -> Result<ScheduleReport, CalendarError> {
        let events = self.core.store.events().list_chronological()?;
        let report = conflicts::scan(&events, window);
        tracing::debug!(
            events = events.len(),
            conflicts = report.conflicts.len(),
            window_minutes = window.minutes(),
            "schedule scanned"
        );
        Ok(report)
    }
}

fn ensure_participants<S: Store>(
    store: &S,
    professor_id: ProfessorId,
    student_id: StudentId,
    subject_id: SubjectId,
) -> Result<(), CalendarError> {
    if store.professors().get(professor_id)?.is_none() {
        return Err(CalendarError::Professor(ProfessorError::NotFound));
    }
    if store.students().get(student_id)?.is_none() {
        return Err(CalendarError::Student(StudentError::NotFound));
    }
    if store.subjects().get(subject_id)?.is_none() {
        return Err(CalendarError::Subject(SubjectError::NotFound));
    }
    Ok(())
}

fn apply_person_update(current: PersonInput, input: UpdatePersonInput) -> PersonInput {
    trimmed(&PersonInput {
        name: input.name.unwrap_or(current.name),
        last_name: input.last_name.unwrap_or(current.last_name),
        email: input.email.unwrap_or(current.email),
        phone: input.phone.unwrap_or(current.phone),
    })
}

fn trimmed(input: &PersonInput) -> PersonInput {
    PersonInput {
        name: input.name.trim().to_string(),
        last_name: input.last_name.trim().to_string(),
        email: input.email.trim().to_string(),
        phone: input.phone.trim().to_string(),
    }
}
