pub mod enums;
pub mod event;
pub mod history;
pub mod ids;
pub mod io;
pub mod people;
pub mod schedule;
pub mod subject;
pub mod user;

pub use enums::{EntityKind, HistoryAction, RequestSource, SharedParty};
pub use event::{Event, EventDetails};
pub use history::{EntitySnapshot, HistoryEntry, NewHistoryEntry};
pub use ids::{EventId, HistoryId, IdError, LinkId, ProfessorId, StudentId, SubjectId, UserId};
pub use io::{
    CreateEventInput, CreateProfessorInput, EventFilter, HistoryFilter, LinkSubjectsInput,
    PersonInput, RegisterUserInput, ScheduledEvent, UpdateEventInput, UpdatePersonInput,
};
pub use people::{Professor, Student};
pub use schedule::{Conflict, ScheduleReport};
pub use subject::{ProfessorSubject, Subject};
pub use user::User;
