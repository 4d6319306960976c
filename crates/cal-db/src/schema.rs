use rusqlite::{Connection, Result};

pub fn open(path: &str) -> Result<Connection> {
    let conn = Connection::open(path)?;
    configure(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "busy_timeout", 5000)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(())
}

pub fn migrate(conn: &Connection) -> Result<()> {
    let sql = include_str!("../migrations/0001_init.sql");
    conn.execute_batch(sql)?;
    Ok(())
}

pub fn open_and_migrate(path: &str) -> Result<Connection> {
    let conn = open(path)?;
    migrate(&conn)?;
    Ok(conn)
}

pub fn with_test_db() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    migrate(&conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrate_is_repeatable() {
        let conn = with_test_db().unwrap();
        migrate(&conn).unwrap();
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN \
                 ('users', 'professors', 'students', 'subjects', 'professor_subjects', 'events', 'history')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 7);
    }

    #[test]
    fn opens_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calendar.db");
        let path = path.to_str().unwrap();
        {
            let conn = open_and_migrate(path).unwrap();
            conn.execute("INSERT INTO subjects (name) VALUES ('Algebra')", [])
                .unwrap();
        }
        let conn = open_and_migrate(path).unwrap();
        let name: String = conn
            .query_row("SELECT name FROM subjects WHERE id = 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(name, "Algebra");
    }

    #[test]
    fn foreign_keys_are_enforced() {
        let conn = with_test_db().unwrap();
        let result = conn.execute(
            "INSERT INTO professor_subjects (professor_id, subject_id) VALUES (99, 99)",
            [],
        );
        assert!(result.is_err());
    }
}
