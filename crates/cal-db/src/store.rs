use cal_core::error::CalendarError;
use cal_core::store::Store;
use rusqlite::Connection;

use crate::event_repo::EventRepo;
use crate::history_repo::HistoryRepo;
use crate::link_repo::LinkRepo;
use crate::professor_repo::ProfessorRepo;
use crate::student_repo::StudentRepo;
use crate::subject_repo::SubjectRepo;
use crate::user_repo::UserRepo;
use crate::util::internal;

pub struct DbStore {
    conn: Connection,
}

impl DbStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl Store for DbStore {
    type Users<'a>
        = UserRepo<'a>
    where
        Self: 'a;
    type Professors<'a>
        = ProfessorRepo<'a>
    where
        Self: 'a;
    type Students<'a>
        = StudentRepo<'a>
    where
        Self: 'a;
    type Subjects<'a>
        = SubjectRepo<'a>
    where
        Self: 'a;
    type Links<'a>
        = LinkRepo<'a>
    where
        Self: 'a;
    type Events<'a>
        = EventRepo<'a>
    where
        Self: 'a;
    type History<'a>
        = HistoryRepo<'a>
    where
        Self: 'a;

    fn users(&self) -> Self::Users<'_> {
        UserRepo::new(&self.conn)
    }

    fn professors(&self) -> Self::Professors<'_> {
        ProfessorRepo::new(&self.conn)
    }

    fn students(&self) -> Self::Students<'_> {
        StudentRepo::new(&self.conn)
    }

    fn subjects(&self) -> Self::Subjects<'_> {
        SubjectRepo::new(&self.conn)
    }

    fn links(&self) -> Self::Links<'_> {
        LinkRepo::new(&self.conn)
    }

    fn events(&self) -> Self::Events<'_> {
        EventRepo::new(&self.conn)
    }

    fn history(&self) -> Self::History<'_> {
        HistoryRepo::new(&self.conn)
    }

    fn with_tx<F, T>(&self, f: F) -> Result<T, CalendarError>
    where
        F: FnOnce(&Self) -> Result<T, CalendarError>,
    {
        self.conn.execute_batch("BEGIN IMMEDIATE").map_err(internal)?;
        let result = f(self);
        match result {
            Ok(value) => {
                self.conn.execute_batch("COMMIT").map_err(internal)?;
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(error = %err, "rolling back transaction");
                self.conn.execute_batch("ROLLBACK").map_err(internal)?;
                Err(err)
            }
        }
    }
}
