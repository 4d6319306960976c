use crate::error::CalendarError;
use crate::types::{User, UserId};

pub trait UserRepository {
    fn create(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, CalendarError>;
    fn get(&self, id: UserId) -> Result<Option<User>, CalendarError>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>, CalendarError>;
    fn find_by_username(&self, username: &str) -> Result<Option<User>, CalendarError>;
}
