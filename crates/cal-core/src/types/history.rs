use crate::types::enums::{EntityKind, HistoryAction};
use crate::types::event::Event;
use crate::types::ids::{HistoryId, UserId};
use crate::types::people::{Professor, Student};
use crate::types::subject::{ProfessorSubject, Subject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the entity a history entry refers to, taken when the action
/// was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "entity", rename_all = "snake_case")]
pub enum EntitySnapshot {
    Professor(Professor),
    Student(Student),
    Subject(Subject),
    ProfessorSubject(ProfessorSubject),
    Event(Event),
}

impl EntitySnapshot {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Professor(_) => EntityKind::Professor,
            Self::Student(_) => EntityKind::Student,
            Self::Subject(_) => EntityKind::Subject,
            Self::ProfessorSubject(_) => EntityKind::ProfessorSubject,
            Self::Event(_) => EntityKind::Event,
        }
    }

    pub fn entity_id(&self) -> i64 {
        match self {
            Self::Professor(value) => value.id.get(),
            Self::Student(value) => value.id.get(),
            Self::Subject(value) => value.id.get(),
            Self::ProfessorSubject(value) => value.id.get(),
            Self::Event(value) => value.id.get(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Professor(value) => value.full_name(),
            Self::Student(value) => value.full_name(),
            Self::Subject(value) => value.name.clone(),
            Self::ProfessorSubject(value) => format!(
                "professor {} / subject {}",
                value.professor_id, value.subject_id
            ),
            Self::Event(value) => format!("event at {}", value.time.format("%Y-%m-%d %H:%M")),
        }
    }
}

/// Entry waiting to be appended; id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub action: HistoryAction,
    pub snapshot: EntitySnapshot,
    pub actor: Option<UserId>,
    pub correlation_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: HistoryId,
    pub at: DateTime<Utc>,
    pub action: HistoryAction,
    pub snapshot: EntitySnapshot,
    pub actor: Option<UserId>,
    pub correlation_id: Option<String>,
}

impl HistoryEntry {
    pub fn kind(&self) -> EntityKind {
        self.snapshot.kind()
    }
}
