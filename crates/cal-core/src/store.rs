use crate::error::CalendarError;
use crate::events::EventRepository;
use crate::history::HistoryRepository;
use crate::professors::ProfessorRepository;
use crate::students::StudentRepository;
use crate::subjects::{LinkRepository, SubjectRepository};
use crate::users::UserRepository;

pub trait Store {
    type Users<'a>: UserRepository
    where
        Self: 'a;
    type Professors<'a>: ProfessorRepository
    where
        Self: 'a;
    type Students<'a>: StudentRepository
    where
        Self: 'a;
    type Subjects<'a>: SubjectRepository
    where
        Self: 'a;
    type Links<'a>: LinkRepository
    where
        Self: 'a;
    type Events<'a>: EventRepository
    where
        Self: 'a;
    type History<'a>: HistoryRepository
    where
        Self: 'a;

    fn users(&self) -> Self::Users<'_>;
    fn professors(&self) -> Self::Professors<'_>;
    fn students(&self) -> Self::Students<'_>;
    fn subjects(&self) -> Self::Subjects<'_>;
    fn links(&self) -> Self::Links<'_>;
    fn events(&self) -> Self::Events<'_>;
    fn history(&self) -> Self::History<'_>;

    /// Runs `f` as one unit of work: every write inside commits together or
    /// not at all.
    fn with_tx<F, T>(&self, f: F) -> Result<T, CalendarError>
    where
        F: FnOnce(&Self) -> Result<T, CalendarError>;
}
