use crate::error::CalendarError;
use crate::types::{PersonInput, Professor, ProfessorId};

pub trait ProfessorRepository {
    fn create(&self, input: &PersonInput) -> Result<Professor, CalendarError>;
    fn get(&self, id: ProfessorId) -> Result<Option<Professor>, CalendarError>;
    fn list(&self) -> Result<Vec<Professor>, CalendarError>;
    fn update(&self, professor: &Professor) -> Result<Professor, CalendarError>;
    fn delete(&self, id: ProfessorId) -> Result<(), CalendarError>;
}
