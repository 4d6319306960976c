use crate::error::CalendarError;
use crate::types::{PersonInput, Student, StudentId};

pub trait StudentRepository {
    fn create(&self, input: &PersonInput) -> Result<Student, CalendarError>;
    fn get(&self, id: StudentId) -> Result<Option<Student>, CalendarError>;
    fn list(&self) -> Result<Vec<Student>, CalendarError>;
    fn update(&self, student: &Student) -> Result<Student, CalendarError>;
    fn delete(&self, id: StudentId) -> Result<(), CalendarError>;
}
