use crate::types::ids::{EventId, ProfessorId, StudentId, SubjectId, UserId};
use crate::types::people::{Professor, Student};
use crate::types::subject::Subject;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A scheduled appointment between one professor and one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub professor_id: ProfessorId,
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    pub author_id: UserId,
    pub time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub event: Event,
    pub professor: Professor,
    pub student: Student,
    pub subject: Subject,
    pub author: String,
}

impl EventDetails {
    pub fn summary(&self) -> String {
        format!(
            "{} with {} of {} at {}",
            self.professor.full_name(),
            self.student.full_name(),
            self.subject.name,
            self.event.time.format("%Y-%m-%d %H:%M")
        )
    }
}
