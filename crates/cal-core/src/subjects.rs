use crate::error::CalendarError;
use crate::types::{LinkId, ProfessorId, ProfessorSubject, Subject, SubjectId};

pub trait SubjectRepository {
    fn create(&self, name: &str) -> Result<Subject, CalendarError>;
    fn get(&self, id: SubjectId) -> Result<Option<Subject>, CalendarError>;
    fn list(&self) -> Result<Vec<Subject>, CalendarError>;
    fn update(&self, subject: &Subject) -> Result<Subject, CalendarError>;
    fn delete(&self, id: SubjectId) -> Result<(), CalendarError>;
}

pub trait LinkRepository {
    fn create(
        &self,
        professor_id: ProfessorId,
        subject_id: SubjectId,
    ) -> Result<ProfessorSubject, CalendarError>;
    fn find(
        &self,
        professor_id: ProfessorId,
        subject_id: SubjectId,
    ) -> Result<Option<ProfessorSubject>, CalendarError>;
    fn list(
        &self,
        professor_id: Option<ProfessorId>,
        subject_id: Option<SubjectId>,
    ) -> Result<Vec<ProfessorSubject>, CalendarError>;
    fn delete(&self, id: LinkId) -> Result<(), CalendarError>;
}
