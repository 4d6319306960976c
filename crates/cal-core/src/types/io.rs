use crate::types::enums::EntityKind;
use crate::types::event::Event;
use crate::types::ids::{ProfessorId, StudentId, SubjectId};
use crate::types::schedule::Conflict;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInput {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProfessorInput {
    pub person: PersonInput,
    /// Subjects to link right after the professor is stored.
    pub subject_ids: Vec<SubjectId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePersonInput {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSubjectsInput {
    pub professor_id: ProfessorId,
    pub subject_ids: Vec<SubjectId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventInput {
    pub professor_id: ProfessorId,
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    pub time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEventInput {
    pub professor_id: Option<ProfessorId>,
    pub student_id: Option<StudentId>,
    pub subject_id: Option<SubjectId>,
    pub time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    pub professor_id: Option<ProfessorId>,
    pub student_id: Option<StudentId>,
    pub subject_id: Option<SubjectId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryFilter {
    pub kind: Option<EntityKind>,
    pub entity_id: Option<i64>,
    pub limit: Option<u32>,
}

/// Result of a create or edit: the stored event plus the conflicts it takes
/// part in. Conflicts are warnings only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub event: Event,
    pub conflicts: Vec<Conflict>,
}

impl EventFilter {
    pub fn professor(id: ProfessorId) -> Self {
        Self {
            professor_id: Some(id),
            ..Self::default()
        }
    }

    pub fn student(id: StudentId) -> Self {
        Self {
            student_id: Some(id),
            ..Self::default()
        }
    }

    pub fn subject(id: SubjectId) -> Self {
        Self {
            subject_id: Some(id),
            ..Self::default()
        }
    }
}

impl UpdatePersonInput {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

impl UpdateEventInput {
    pub fn is_empty(&self) -> bool {
        self.professor_id.is_none()
            && self.student_id.is_none()
            && self.subject_id.is_none()
            && self.time.is_none()
    }
}
