use crate::util::{id_column, internal};
use cal_core::error::{CalendarError, SubjectError};
use cal_core::subjects::SubjectRepository;
use cal_core::types::{Subject, SubjectId};
use rusqlite::{Connection, OptionalExtension};

pub struct SubjectRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> SubjectRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl SubjectRepository for SubjectRepo<'_> {
    fn create(&self, name: &str) -> Result<Subject, CalendarError> {
        self.conn
            .execute("INSERT INTO subjects (name) VALUES (?1)", [name])
            .map_err(internal)?;
        Ok(Subject {
            id: SubjectId::new(self.conn.last_insert_rowid()).map_err(internal)?,
            name: name.to_string(),
        })
    }

    fn get(&self, id: SubjectId) -> Result<Option<Subject>, CalendarError> {
        self.conn
            .query_row(
                "SELECT id, name FROM subjects WHERE id = ?1",
                [id.get()],
                map_subject_row,
            )
            .optional()
            .map_err(internal)
    }

    fn list(&self) -> Result<Vec<Subject>, CalendarError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM subjects ORDER BY name, id")
            .map_err(internal)?;
        let rows = stmt.query_map([], map_subject_row).map_err(internal)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(internal)
    }

    fn update(&self, subject: &Subject) -> Result<Subject, CalendarError> {
        let changed = self
            .conn
            .execute(
                "UPDATE subjects SET name = ?1 WHERE id = ?2",
                (&subject.name, subject.id.get()),
            )
            .map_err(internal)?;
        if changed == 0 {
            return Err(CalendarError::Subject(SubjectError::NotFound));
        }
        Ok(subject.clone())
    }

    fn delete(&self, id: SubjectId) -> Result<(), CalendarError> {
        let changed = self
            .conn
            .execute("DELETE FROM subjects WHERE id = ?1", [id.get()])
            .map_err(internal)?;
        if changed == 0 {
            return Err(CalendarError::Subject(SubjectError::NotFound));
        }
        Ok(())
    }
}

fn map_subject_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Subject> {
    Ok(Subject {
        id: id_column(row, 0, SubjectId::new)?,
        name: row.get(1)?,
    })
}
