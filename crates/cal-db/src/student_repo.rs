use crate::util::{id_column, internal};
use cal_core::error::{CalendarError, StudentError};
use cal_core::students::StudentRepository;
use cal_core::types::{PersonInput, Student, StudentId};
use rusqlite::{Connection, OptionalExtension};

const COLUMNS: &str = "id, name, last_name, email, phone";

pub struct StudentRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> StudentRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl StudentRepository for StudentRepo<'_> {
    fn create(&self, input: &PersonInput) -> Result<Student, CalendarError> {
        self.conn
            .execute(
                "INSERT INTO students (name, last_name, email, phone) VALUES (?1, ?2, ?3, ?4)",
                (&input.name, &input.last_name, &input.email, &input.phone),
            )
            .map_err(internal)?;
        let id = StudentId::new(self.conn.last_insert_rowid()).map_err(internal)?;
        Ok(Student {
            id,
            name: input.name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
        })
    }

    fn get(&self, id: StudentId) -> Result<Option<Student>, CalendarError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM students WHERE id = ?1"),
                [id.get()],
                map_student_row,
            )
            .optional()
            .map_err(internal)
    }

    fn list(&self) -> Result<Vec<Student>, CalendarError> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {COLUMNS} FROM students ORDER BY last_name, name, id"
            ))
            .map_err(internal)?;
        let rows = stmt.query_map([], map_student_row).map_err(internal)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(internal)
    }

    fn update(&self, student: &Student) -> Result<Student, CalendarError> {
        let changed = self
            .conn
            .execute(
                "UPDATE students SET name = ?1, last_name = ?2, email = ?3, phone = ?4 WHERE id = ?5",
                (
                    &student.name,
                    &student.last_name,
                    &student.email,
                    &student.phone,
                    student.id.get(),
                ),
            )
            .map_err(internal)?;
        if changed == 0 {
            return Err(CalendarError::Student(StudentError::NotFound));
        }
        Ok(student.clone())
    }

    fn delete(&self, id: StudentId) -> Result<(), CalendarError> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1", [id.get()])
            .map_err(internal)?;
        if changed == 0 {
            return Err(CalendarError::Student(StudentError::NotFound));
        }
        Ok(())
    }
}

fn map_student_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: id_column(row, 0, StudentId::new)?,
        name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
    })
}
