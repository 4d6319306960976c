use crate::types::ids::{LinkId, ProfessorId, SubjectId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
}

/// Association between a professor and a subject they teach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessorSubject {
    pub id: LinkId,
    pub professor_id: ProfessorId,
    pub subject_id: SubjectId,
}
