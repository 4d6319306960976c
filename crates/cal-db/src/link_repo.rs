use crate::util::{id_column, internal, is_unique_violation};
use cal_core::error::{CalendarError, LinkError};
use cal_core::subjects::LinkRepository;
use cal_core::types::{LinkId, ProfessorId, ProfessorSubject, SubjectId};
use rusqlite::{Connection, OptionalExtension};

const COLUMNS: &str = "id, professor_id, subject_id";

pub struct LinkRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> LinkRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl LinkRepository for LinkRepo<'_> {
    fn create(
        &self,
        professor_id: ProfessorId,
        subject_id: SubjectId,
    ) -> Result<ProfessorSubject, CalendarError> {
        self.conn
            .execute(
                "INSERT INTO professor_subjects (professor_id, subject_id) VALUES (?1, ?2)",
                (professor_id.get(), subject_id.get()),
            )
            .map_err(|err| {
                if is_unique_violation(&err) {
                    CalendarError::Link(LinkError::AlreadyLinked {
                        professor: professor_id.to_string(),
                        subject: subject_id.to_string(),
                    })
                } else {
                    internal(err)
                }
            })?;
        Ok(ProfessorSubject {
            id: LinkId::new(self.conn.last_insert_rowid()).map_err(internal)?,
            professor_id,
            subject_id,
        })
    }

    fn find(
        &self,
        professor_id: ProfessorId,
        subject_id: SubjectId,
    ) -> Result<Option<ProfessorSubject>, CalendarError> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {COLUMNS} FROM professor_subjects WHERE professor_id = ?1 AND subject_id = ?2"
                ),
                (professor_id.get(), subject_id.get()),
                map_link_row,
            )
            .optional()
            .map_err(internal)
    }

    fn list(
        &self,
        professor_id: Option<ProfessorId>,
        subject_id: Option<SubjectId>,
    ) -> Result<Vec<ProfessorSubject>, CalendarError> {
        let mut sql = format!("SELECT {COLUMNS} FROM professor_subjects");
        let mut clauses = Vec::new();
        let mut params: Vec<i64> = Vec::new();
        if let Some(professor_id) = professor_id {
            params.push(professor_id.get());
            clauses.push(format!("professor_id = ?{}", params.len()));
        }
        if let Some(subject_id) = subject_id {
            params.push(subject_id.get());
            clauses.push(format!("subject_id = ?{}", params.len()));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id ASC");

        let mut stmt = self.conn.prepare(&sql).map_err(internal)?;
        let rows = stmt
            .query_map(rusqlite::params_from_iter(params), map_link_row)
            .map_err(internal)?;
        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(internal)
    }

    fn delete(&self, id: LinkId) -> Result<(), CalendarError> {
        let changed = self
            .conn
            .execute("DELETE FROM professor_subjects WHERE id = ?1", [id.get()])
            .map_err(internal)?;
        if changed == 0 {
            return Err(CalendarError::Link(LinkError::NotFound));
        }
        Ok(())
    }
}

fn map_link_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProfessorSubject> {
    Ok(ProfessorSubject {
        id: id_column(row, 0, LinkId::new)?,
        professor_id: id_column(row, 1, ProfessorId::new)?,
        subject_id: id_column(row, 2, SubjectId::new)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::with_test_db;

    fn seed(conn: &Connection) -> (ProfessorId, SubjectId, SubjectId) {
        conn.execute_batch(
            "INSERT INTO professors (name, last_name, email, phone) VALUES ('Alan', 'Turing', 'alan@uni.edu', '555');
             INSERT INTO subjects (name) VALUES ('Logic');
             INSERT INTO subjects (name) VALUES ('Cryptography');",
        )
        .unwrap();
        (
            ProfessorId::new(1).unwrap(),
            SubjectId::new(1).unwrap(),
            SubjectId::new(2).unwrap(),
        )
    }

    #[test]
    fn duplicate_pair_is_rejected() {
        let conn = with_test_db().unwrap();
        let (professor, logic, _) = seed(&conn);
        let repo = LinkRepo::new(&conn);
        repo.create(professor, logic).unwrap();
        assert!(matches!(
            repo.create(professor, logic),
            Err(CalendarError::Link(LinkError::AlreadyLinked { .. }))
        ));
    }

    #[test]
    fn list_filters_by_either_side() {
        let conn = with_test_db().unwrap();
        let (professor, logic, crypto) = seed(&conn);
        let repo = LinkRepo::new(&conn);
        let first = repo.create(professor, logic).unwrap();
        let second = repo.create(professor, crypto).unwrap();

        assert_eq!(
            repo.list(Some(professor), None).unwrap(),
            vec![first.clone(), second.clone()]
        );
        assert_eq!(repo.list(None, Some(crypto)).unwrap(), vec![second.clone()]);
        assert_eq!(
            repo.list(Some(professor), Some(logic)).unwrap(),
            vec![first.clone()]
        );
        assert_eq!(repo.find(professor, crypto).unwrap(), Some(second));
        assert_eq!(repo.find(professor, logic).unwrap(), Some(first));
    }
}
