use crate::util::{id_column, internal};
use cal_core::error::{CalendarError, ProfessorError};
use cal_core::professors::ProfessorRepository;
use cal_core::types::{PersonInput, Professor, ProfessorId};
use rusqlite::{Connection, OptionalExtension};

const COLUMNS: &str = "id, name, last_name, email, phone";

pub struct ProfessorRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> ProfessorRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl ProfessorRepository for ProfessorRepo<'_> {
    fn create(&self, input: &PersonInput) -> Result<Professor, CalendarError> {
        self.conn
            .execute(
                "INSERT INTO professors (name, last_name, email, phone) VALUES (?1, ?2, ?3, ?4)",
                (&input.name, &input.last_name, &input.email, &input.phone),
            )
            .map_err(internal)?;
        let id = ProfessorId::new(self.conn.last_insert_rowid()).map_err(internal)?;
        Ok(Professor {
            id,
            name: input.name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
        })
    }

    fn get(&self, id: ProfessorId) -> Result<Option<Professor>, CalendarError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM professors WHERE id = ?1"),
                [id.get()],
                map_professor_row,
            )
            .optional()
            .map_err(internal)
    }

    fn list(&self) -> Result<Vec<Professor>, CalendarError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {COLUMNS} FROM professors ORDER BY last_name, name, id"
            ))
            .map_err(internal)?;
        let rows = stmt.query_map([], map_professor_row).map_err(internal)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(internal)
    }

    fn update(&self, professor: &Professor) -> Result<Professor, CalendarError> {
        let changed = self
            .conn
            .execute(
                "UPDATE professors SET name = ?1, last_name = ?2, email = ?3, phone = ?4 WHERE id = ?5",
                (
                    &professor.name,
                    &professor.last_name,
                    &professor.email,
                    &professor.phone,
                    professor.id.get(),
                ),
            )
            .map_err(internal)?;
        if changed == 0 {
            return Err(CalendarError::Professor(ProfessorError::NotFound));
        }
        Ok(professor.clone())
    }

    fn delete(&self, id: ProfessorId) -> Result<(), CalendarError> {
        let changed = self
            .conn
            .execute("DELETE FROM professors WHERE id = ?1", [id.get()])
            .map_err(internal)?;
        if changed == 0 {
            return Err(CalendarError::Professor(ProfessorError::NotFound));
        }
        Ok(())
    }
}

fn map_professor_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Professor> {
    Ok(Professor {
        id: id_column(row, 0, ProfessorId::new)?,
        name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
    })
}
