use crate::util::{id_column, internal, is_unique_violation, to_rfc3339, utc_column};
use cal_core::error::{CalendarError, UserError};
use cal_core::types::{User, UserId};
use cal_core::users::UserRepository;
use rusqlite::{Connection, OptionalExtension};

const COLUMNS: &str = "id, username, email, password_hash, created_at";

pub struct UserRepo<'a> {
    pub conn: &'a Connection,
}

impl<'a> UserRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn find_by(&self, column: &str, value: &str) -> Result<Option<User>, CalendarError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM users WHERE {column} = ?1 COLLATE NOCASE"),
                [value],
                map_user_row,
            )
            .optional()
            .map_err(internal)
    }
}

impl UserRepository for UserRepo<'_> {
    fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, CalendarError> {
        let created_at = chrono::Utc::now();
        self.conn
            .execute(
                "INSERT INTO users (username, email, password_hash, created_at) VALUES (?1, ?2, ?3, ?4)",
                (username, email, password_hash, to_rfc3339(&created_at)),
            )
            .map_err(|err| {
                if is_unique_violation(&err) {
                    CalendarError::User(UserError::AlreadyExists)
                } else {
                    internal(err)
                }
            })?;
        Ok(User {
            id: UserId::new(self.conn.last_insert_rowid()).map_err(internal)?,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at,
        })
    }

    fn get(&self, id: UserId) -> Result<Option<User>, CalendarError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM users WHERE id = ?1"),
                [id.get()],
                map_user_row,
            )
            .optional()
            .map_err(internal)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, CalendarError> {
        self.find_by("email", email)
    }

    fn find_by_username(&self, username: &str) -> Result<Option<User>, CalendarError> {
        self.find_by("username", username)
    }
}

fn map_user_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: id_column(row, 0, UserId::new)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        created_at: utc_column(row, 4)?,
    })
}
