use cal_core::error::{
    CalendarError, EventError, HistoryError, LinkError, ProfessorError, StudentError,
    SubjectError, UserError,
};
use cal_core::types::{
    CreateEventInput, CreateProfessorInput, EntityKind, EntitySnapshot, EventFilter,
    HistoryAction, HistoryFilter, LinkSubjectsInput, PersonInput, ProfessorId, RegisterUserInput,
    RequestSource, SharedParty, StudentId, SubjectId, UpdateEventInput, UpdatePersonInput, User,
};
use cal_core::validation::parse_event_time;
use cal_core::{Calendar, ConflictWindow, RequestContext};
use cal_db::schema::with_test_db;
use cal_db::DbStore;
use chrono::NaiveDate;

struct Office {
    calendar: Calendar<DbStore>,
    clerk: User,
}

impl Office {
    fn ctx(&self) -> RequestContext {
        RequestContext::new(RequestSource::Test, Some("test-req".to_string()))
            .with_actor(self.clerk.id)
    }
}

fn office() -> Office {
    let calendar = Calendar::new(
        DbStore::new(with_test_db().unwrap()),
        ConflictWindow::default(),
    );
    let clerk = calendar
        .users()
        .register(RegisterUserInput {
            username: "clerk".to_string(),
            email: "clerk@uni.edu".to_string(),
            password: "front-desk-2024".to_string(),
        })
        .unwrap();
    Office { calendar, clerk }
}

fn person(name: &str, last_name: &str) -> PersonInput {
    PersonInput {
        name: name.to_string(),
        last_name: last_name.to_string(),
        email: format!("{}@uni.edu", name.to_lowercase()),
        phone: "555-0100".to_string(),
    }
}

fn professor(office: &Office, name: &str, last_name: &str) -> ProfessorId {
    office
        .calendar
        .professors()
        .create(
            &office.ctx(),
            CreateProfessorInput {
                person: person(name, last_name),
                subject_ids: Vec::new(),
            },
        )
        .unwrap()
        .id
}

fn student(office: &Office, name: &str, last_name: &str) -> StudentId {
    office
        .calendar
        .students()
        .create(&office.ctx(), person(name, last_name))
        .unwrap()
        .id
}

fn subject(office: &Office, name: &str) -> SubjectId {
    office
        .calendar
        .subjects()
        .create(&office.ctx(), name)
        .unwrap()
        .id
}

fn event_input(
    professor_id: ProfessorId,
    student_id: StudentId,
    subject_id: SubjectId,
    time: &str,
) -> CreateEventInput {
    CreateEventInput {
        professor_id,
        student_id,
        subject_id,
        time: parse_event_time(time).unwrap(),
    }
}

fn history_actions(office: &Office, kind: EntityKind) -> Vec<HistoryAction> {
    office
        .calendar
        .history()
        .list(&HistoryFilter {
            kind: Some(kind),
            ..HistoryFilter::default()
        })
        .unwrap()
        .into_iter()
        .map(|entry| entry.action)
        .collect()
}

#[test]
fn shared_professor_within_three_hours_is_reported_on_create() {
    let office = office();
    let p1 = professor(&office, "Alan", "Turing");
    let s1 = student(&office, "Ada", "Lovelace");
    let s2 = student(&office, "Edsger", "Dijkstra");
    let logic = subject(&office, "Logic");
    let events = office.calendar.events();

    let first = events
        .create(&office.ctx(), event_input(p1, s1, logic, "2024-03-04T10:00"))
        .unwrap();
    assert!(first.conflicts.is_empty());

    let second = events
        .create(&office.ctx(), event_input(p1, s2, logic, "2024-03-04T11:00"))
        .unwrap();
    assert_eq!(second.conflicts.len(), 1);
    let conflict = second.conflicts[0];
    assert_eq!((conflict.first, conflict.second), (first.event.id, second.event.id));
    assert_eq!(conflict.shared, SharedParty::Professor);
    assert_eq!(conflict.gap_minutes, 60);

    let report = office.calendar.schedule().report().unwrap();
    assert_eq!(report.conflicts, second.conflicts);
    assert_eq!(report.dates.len(), 1);
}

#[test]
fn unrelated_events_do_not_conflict() {
    let office = office();
    let p1 = professor(&office, "Alan", "Turing");
    let p2 = professor(&office, "Grace", "Hopper");
    let s1 = student(&office, "Ada", "Lovelace");
    let s2 = student(&office, "Edsger", "Dijkstra");
    let logic = subject(&office, "Logic");
    let events = office.calendar.events();

    events
        .create(&office.ctx(), event_input(p1, s1, logic, "2024-03-04T08:00"))
        .unwrap();
    let second = events
        .create(&office.ctx(), event_input(p2, s2, logic, "2024-03-04T08:30"))
        .unwrap();
    assert!(second.conflicts.is_empty());
    assert!(!office.calendar.schedule().report().unwrap().has_conflicts());
}

#[test]
fn report_with_custom_window() {
    let office = office();
    let p1 = professor(&office, "Alan", "Turing");
    let s1 = student(&office, "Ada", "Lovelace");
    let logic = subject(&office, "Logic");
    let events = office.calendar.events();
    events
        .create(&office.ctx(), event_input(p1, s1, logic, "2024-03-04T08:00"))
        .unwrap();
    events
        .create(&office.ctx(), event_input(p1, s1, logic, "2024-03-04T12:00"))
        .unwrap();

    let schedule = office.calendar.schedule();
    assert!(schedule.report().unwrap().conflicts.is_empty());
    let wide = schedule
        .report_with(ConflictWindow::from_minutes(5 * 60))
        .unwrap();
    assert_eq!(wide.conflicts.len(), 1);
    assert_eq!(wide.conflicts[0].shared, SharedParty::Both);
    assert_eq!(schedule.report().unwrap(), schedule.report().unwrap());
}

#[test]
fn every_mutation_records_one_history_entry() {
    let office = office();
    let ctx = office.ctx();
    let cal = &office.calendar;

    let p1 = professor(&office, "Alan", "Turing");
    cal.professors()
        .update(
            &ctx,
            p1,
            UpdatePersonInput {
                name: None,
                last_name: None,
                email: None,
                phone: Some("555-0111".to_string()),
            },
        )
        .unwrap();

    let s1 = student(&office, "Ada", "Lovelace");
    cal.students()
        .update(
            &ctx,
            s1,
            UpdatePersonInput {
                name: Some("Augusta".to_string()),
                last_name: None,
                email: None,
                phone: None,
            },
        )
        .unwrap();

    let logic = subject(&office, "Logic");
    cal.subjects().rename(&ctx, logic, "Mathematical Logic").unwrap();

    let scheduled = cal
        .events()
        .create(&ctx, event_input(p1, s1, logic, "2024-03-04T09:00"))
        .unwrap();
    cal.events()
        .update(
            &ctx,
            scheduled.event.id,
            UpdateEventInput {
                professor_id: None,
                student_id: None,
                subject_id: None,
                time: Some(parse_event_time("2024-03-04T10:00").unwrap()),
            },
        )
        .unwrap();
    cal.events().delete(&ctx, scheduled.event.id).unwrap();
    cal.students().delete(&ctx, s1).unwrap();

    use HistoryAction::{Add, Delete, Edit};
    assert_eq!(history_actions(&office, EntityKind::Professor), vec![Edit, Add]);
    assert_eq!(history_actions(&office, EntityKind::Student), vec![Delete, Edit, Add]);
    assert_eq!(history_actions(&office, EntityKind::Subject), vec![Edit, Add]);
    assert_eq!(history_actions(&office, EntityKind::Event), vec![Delete, Edit, Add]);

    let all = cal.history().list(&HistoryFilter::default()).unwrap();
    assert_eq!(all.len(), 10);
    assert!(all.windows(2).all(|pair| pair[0].id > pair[1].id));
    assert!(all.iter().all(|entry| entry.actor == Some(office.clerk.id)));
    assert!(all
        .iter()
        .all(|entry| entry.correlation_id.as_deref() == Some("test-req")));

    match &all[0].snapshot {
        EntitySnapshot::Student(snapshot) => assert_eq!(snapshot.name, "Augusta"),
        other => panic!("unexpected snapshot {other:?}"),
    }
}

#[test]
fn professor_created_with_subjects_records_links() {
    let office = office();
    let logic = subject(&office, "Logic");
    let crypto = subject(&office, "Cryptography");
    let professor = office
        .calendar
        .professors()
        .create(
            &office.ctx(),
            CreateProfessorInput {
                person: person("Alan", "Turing"),
                subject_ids: vec![logic, crypto, logic],
            },
        )
        .unwrap();

    let subjects = office.calendar.professors().subjects(professor.id).unwrap();
    assert_eq!(subjects.len(), 2);
    assert_eq!(
        history_actions(&office, EntityKind::ProfessorSubject),
        vec![HistoryAction::Add, HistoryAction::Add]
    );
}

#[test]
fn duplicate_links_are_reported_not_inserted() {
    let office = office();
    let p1 = professor(&office, "Alan", "Turing");
    let logic = subject(&office, "Logic");
    let crypto = subject(&office, "Cryptography");
    let links = office.calendar.links();

    links.link_one(&office.ctx(), p1, logic).unwrap();
    let outcome = links
        .link(
            &office.ctx(),
            LinkSubjectsInput {
                professor_id: p1,
                subject_ids: vec![logic, crypto],
            },
        )
        .unwrap();
    assert_eq!(outcome.already_linked, vec![logic]);
    assert_eq!(outcome.linked.len(), 1);

    let err = links.link_one(&office.ctx(), p1, crypto).unwrap_err();
    match err {
        CalendarError::Link(LinkError::AlreadyLinked { professor, subject }) => {
            assert_eq!(professor, "Alan Turing");
            assert_eq!(subject, "Cryptography");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(links.list(Some(p1), None).unwrap().len(), 2);
    assert_eq!(
        office.calendar.subjects().professors(logic).unwrap()[0].id,
        p1
    );
}

#[test]
fn deleting_professor_removes_links_but_not_when_scheduled() {
    let office = office();
    let ctx = office.ctx();
    let p1 = professor(&office, "Alan", "Turing");
    let p2 = professor(&office, "Grace", "Hopper");
    let s1 = student(&office, "Ada", "Lovelace");
    let logic = subject(&office, "Logic");
    office.calendar.links().link_one(&ctx, p1, logic).unwrap();
    office.calendar.links().link_one(&ctx, p2, logic).unwrap();
    office
        .calendar
        .events()
        .create(&ctx, event_input(p2, s1, logic, "2024-03-04T09:00"))
        .unwrap();

    office.calendar.professors().delete(&ctx, p1).unwrap();
    assert!(office.calendar.professors().get(p1).unwrap().is_none());
    assert_eq!(office.calendar.links().list(None, Some(logic)).unwrap().len(), 1);
    assert_eq!(
        history_actions(&office, EntityKind::ProfessorSubject),
        vec![HistoryAction::Delete, HistoryAction::Add, HistoryAction::Add]
    );

    assert!(matches!(
        office.calendar.professors().delete(&ctx, p2),
        Err(CalendarError::Professor(ProfessorError::InUse))
    ));
    assert!(matches!(
        office.calendar.subjects().delete(&ctx, logic),
        Err(CalendarError::Subject(SubjectError::InUse))
    ));
}

#[test]
fn event_references_must_exist() {
    let office = office();
    let p1 = professor(&office, "Alan", "Turing");
    let s1 = student(&office, "Ada", "Lovelace");
    let missing_subject = SubjectId::new(99).unwrap();

    let result = office
        .calendar
        .events()
        .create(&office.ctx(), event_input(p1, s1, missing_subject, "2024-03-04T09:00"));
    assert!(matches!(
        result,
        Err(CalendarError::Subject(SubjectError::NotFound))
    ));
    assert!(history_actions(&office, EntityKind::Event).is_empty());
    assert!(office
        .calendar
        .events()
        .list(&EventFilter::default())
        .unwrap()
        .is_empty());
}

#[test]
fn only_the_author_may_change_an_event() {
    let office = office();
    let p1 = professor(&office, "Alan", "Turing");
    let s1 = student(&office, "Ada", "Lovelace");
    let logic = subject(&office, "Logic");
    let scheduled = office
        .calendar
        .events()
        .create(&office.ctx(), event_input(p1, s1, logic, "2024-03-04T09:00"))
        .unwrap();

    let other = office
        .calendar
        .users()
        .register(RegisterUserInput {
            username: "tutor".to_string(),
            email: "tutor@uni.edu".to_string(),
            password: "another-secret".to_string(),
        })
        .unwrap();
    let other_ctx = RequestContext::new(RequestSource::Test, None).with_actor(other.id);
    assert!(matches!(
        office.calendar.events().delete(&other_ctx, scheduled.event.id),
        Err(CalendarError::Event(EventError::NotAuthor))
    ));

    let anonymous = RequestContext::new(RequestSource::Test, None);
    assert!(matches!(
        office.calendar.events().delete(&anonymous, scheduled.event.id),
        Err(CalendarError::User(UserError::Unauthenticated))
    ));

    assert!(office
        .calendar
        .events()
        .get(scheduled.event.id)
        .unwrap()
        .is_some());
    assert_eq!(history_actions(&office, EntityKind::Event), vec![HistoryAction::Add]);
}

#[test]
fn details_join_participants() {
    let office = office();
    let p1 = professor(&office, "Alan", "Turing");
    let s1 = student(&office, "Ada", "Lovelace");
    let logic = subject(&office, "Logic");
    let scheduled = office
        .calendar
        .events()
        .create(&office.ctx(), event_input(p1, s1, logic, "2024-03-04T09:00"))
        .unwrap();

    let details = office
        .calendar
        .events()
        .details(scheduled.event.id)
        .unwrap()
        .unwrap();
    assert_eq!(details.author, "clerk");
    assert_eq!(
        details.summary(),
        "Alan Turing with Ada Lovelace of Logic at 2024-03-04 09:00"
    );
    assert_eq!(office.calendar.students().events(s1).unwrap().len(), 1);
    assert_eq!(office.calendar.subjects().events(logic).unwrap().len(), 1);
}

#[test]
fn failed_history_write_rolls_back_the_mutation() {
    let office = office();
    office
        .calendar
        .store()
        .connection()
        .execute_batch("DROP TABLE history")
        .unwrap();

    let result = office
        .calendar
        .subjects()
        .create(&office.ctx(), "Topology");
    assert!(matches!(
        result,
        Err(CalendarError::History(HistoryError::WriteFailed { .. }))
    ));
    assert!(office.calendar.subjects().list().unwrap().is_empty());
}

#[test]
fn authentication_checks_password() {
    let office = office();
    let users = office.calendar.users();
    let user = users.authenticate("CLERK@uni.edu", "front-desk-2024").unwrap();
    assert_eq!(user.id, office.clerk.id);
    assert!(matches!(
        users.authenticate("clerk@uni.edu", "wrong-password"),
        Err(CalendarError::User(UserError::InvalidCredentials))
    ));
    assert!(matches!(
        users.register(RegisterUserInput {
            username: "clerk".to_string(),
            email: "someone@uni.edu".to_string(),
            password: "long-enough".to_string(),
        }),
        Err(CalendarError::User(UserError::AlreadyExists))
    ));
}

#[test]
fn event_time_is_kept_to_the_minute_everywhere() {
    let office = office();
    let p1 = professor(&office, "Alan", "Turing");
    let s1 = student(&office, "Ada", "Lovelace");
    let logic = subject(&office, "Logic");
    let day = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    let entered = day.and_hms_nano_opt(10, 0, 30, 500_000_000).unwrap();
    let expected = day.and_hms_opt(10, 0, 0).unwrap();

    let events = office.calendar.events();
    let scheduled = events
        .create(
            &office.ctx(),
            CreateEventInput {
                professor_id: p1,
                student_id: s1,
                subject_id: logic,
                time: entered,
            },
        )
        .unwrap();
    assert_eq!(scheduled.event.time, expected);
    assert_eq!(events.get(scheduled.event.id).unwrap().unwrap().time, expected);

    let edited = events
        .update(
            &office.ctx(),
            scheduled.event.id,
            UpdateEventInput {
                professor_id: None,
                student_id: None,
                subject_id: None,
                time: Some(day.and_hms_nano_opt(11, 15, 59, 999_000_000).unwrap()),
            },
        )
        .unwrap();
    let stored = events.get(scheduled.event.id).unwrap().unwrap();
    assert_eq!(edited.event, stored);
    assert_eq!(stored.time, day.and_hms_opt(11, 15, 0).unwrap());

    let snapshots: Vec<_> = office
        .calendar
        .history()
        .list(&HistoryFilter {
            kind: Some(EntityKind::Event),
            ..HistoryFilter::default()
        })
        .unwrap()
        .into_iter()
        .map(|entry| entry.snapshot)
        .collect();
    assert_eq!(
        snapshots,
        vec![
            EntitySnapshot::Event(stored),
            EntitySnapshot::Event(scheduled.event)
        ]
    );
}

#[test]
fn deleting_professor_and_subject_records_one_entry_each() {
    let office = office();
    let ctx = office.ctx();
    let p1 = professor(&office, "Alan", "Turing");
    let p2 = professor(&office, "Grace", "Hopper");
    let logic = subject(&office, "Logic");
    office.calendar.links().link_one(&ctx, p1, logic).unwrap();
    office.calendar.links().link_one(&ctx, p2, logic).unwrap();

    office.calendar.subjects().delete(&ctx, logic).unwrap();
    assert!(office.calendar.subjects().get(logic).unwrap().is_none());
    assert!(office.calendar.links().list(None, None).unwrap().is_empty());
    assert_eq!(
        history_actions(&office, EntityKind::Subject),
        vec![HistoryAction::Delete, HistoryAction::Add]
    );
    assert_eq!(
        history_actions(&office, EntityKind::ProfessorSubject),
        vec![
            HistoryAction::Delete,
            HistoryAction::Delete,
            HistoryAction::Add,
            HistoryAction::Add
        ]
    );

    office.calendar.professors().delete(&ctx, p1).unwrap();
    let professor_history = office
        .calendar
        .history()
        .list(&HistoryFilter {
            kind: Some(EntityKind::Professor),
            entity_id: Some(p1.get()),
            limit: None,
        })
        .unwrap();
    let actions: Vec<_> = professor_history.iter().map(|entry| entry.action).collect();
    assert_eq!(actions, vec![HistoryAction::Delete, HistoryAction::Add]);
    assert_eq!(professor_history[0].snapshot.label(), "Alan Turing");
    assert!(office.calendar.professors().get(p2).unwrap().is_some());
}

#[test]
fn empty_person_update_is_rejected_without_history() {
    let office = office();
    let p1 = professor(&office, "Alan", "Turing");
    let s1 = student(&office, "Ada", "Lovelace");
    let nothing = UpdatePersonInput {
        name: None,
        last_name: None,
        email: None,
        phone: None,
    };

    assert!(matches!(
        office.calendar.professors().update(&office.ctx(), p1, nothing.clone()),
        Err(CalendarError::Professor(ProfessorError::InvalidInput { .. }))
    ));
    assert!(matches!(
        office.calendar.students().update(&office.ctx(), s1, nothing),
        Err(CalendarError::Student(StudentError::InvalidInput { .. }))
    ));
    assert_eq!(
        history_actions(&office, EntityKind::Professor),
        vec![HistoryAction::Add]
    );
    assert_eq!(
        history_actions(&office, EntityKind::Student),
        vec![HistoryAction::Add]
    );
}
