use crate::util::{id_column, internal, naive_column, to_naive};
use cal_core::error::{CalendarError, EventError};
use cal_core::events::EventRepository;
use cal_core::types::{
    CreateEventInput, Event, EventFilter, EventId, ProfessorId, StudentId, SubjectId, UserId,
};
use rusqlite::{Connection, OptionalExtension};

const COLUMNS: &str = "id, professor_id, student_id, subject_id, author_id, time";

pub struct EventRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> EventRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl EventRepository for EventRepo<'_> {
    fn create(&self, author_id: UserId, input: &CreateEventInput) -> Result<Event, CalendarError> {
        let sql = "INSERT INTO events (professor_id, student_id, subject_id, author_id, time) VALUES (?1, ?2, ?3, ?4, ?5)";
        self.conn
            .execute(
                sql,
                (
                    input.professor_id.get(),
                    input.student_id.get(),
                    input.subject_id.get(),
                    author_id.get(),
                    to_naive(&input.time),
                ),
            )
            .map_err(internal)?;
        Ok(Event {
            id: EventId::new(self.conn.last_insert_rowid()).map_err(internal)?,
            professor_id: input.professor_id,
            student_id: input.student_id,
            subject_id: input.subject_id,
            author_id,
            time: input.time,
        })
    }

    fn get(&self, id: EventId) -> Result<Option<Event>, CalendarError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM events WHERE id = ?1"),
                [id.get()],
                map_event_row,
            )
            .optional()
            .map_err(internal)
    }

    fn list(&self, filter: &EventFilter) -> Result<Vec<Event>, CalendarError> {
        let mut sql = format!("SELECT {COLUMNS} FROM events");
        let mut clauses = Vec::new();
        let mut params: Vec<i64> = Vec::new();
        if let Some(id) = filter.professor_id {
            params.push(id.get());
            clauses.push(format!("professor_id = ?{}", params.len()));
        }
        if let Some(id) = filter.student_id {
            params.push(id.get());
            clauses.push(format!("student_id = ?{}", params.len()));
        }
        if let Some(id) = filter.subject_id {
            params.push(id.get());
            clauses.push(format!("subject_id = ?{}", params.len()));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id DESC");

        let mut stmt = self.conn.prepare(&sql).map_err(internal)?;
        let rows = stmt
            .query_map(rusqlite::params_from_iter(params), map_event_row)
            .map_err(internal)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(internal)
    }

    fn list_chronological(&self) -> Result<Vec<Event>, CalendarError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {COLUMNS} FROM events ORDER BY time ASC, id ASC"))
            .map_err(internal)?;
        let rows = stmt.query_map([], map_event_row).map_err(internal)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(internal)
    }

    fn update(&self, event: &Event) -> Result<Event, CalendarError> {
        let sql = "UPDATE events SET professor_id = ?1, student_id = ?2, subject_id = ?3, time = ?4 WHERE id = ?5";
        let changed = self
            .conn
            .execute(
                sql,
                (
                    event.professor_id.get(),
                    event.student_id.get(),
                    event.subject_id.get(),
                    to_naive(&event.time),
                    event.id.get(),
                ),
            )
            .map_err(internal)?;
        if changed == 0 {
            return Err(CalendarError::Event(EventError::NotFound));
        }
        Ok(event.clone())
    }

    fn delete(&self, id: EventId) -> Result<(), CalendarError> {
        let changed = self
            .conn
            .execute("DELETE FROM events WHERE id = ?1", [id.get()])
            .map_err(internal)?;
        if changed == 0 {
            return Err(CalendarError::Event(EventError::NotFound));
        }
        Ok(())
    }
}

fn map_event_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        id: id_column(row, 0, EventId::new)?,
        professor_id: id_column(row, 1, ProfessorId::new)?,
        student_id: id_column(row, 2, StudentId::new)?,
        subject_id: id_column(row, 3, SubjectId::new)?,
        author_id: id_column(row, 4, UserId::new)?,
        time: naive_column(row, 5)?,
    })
}
