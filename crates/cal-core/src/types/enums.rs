use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryAction {
    Add,
    Edit,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Professor,
    Student,
    Subject,
    ProfessorSubject,
    Event,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RequestSource {
    Cli,
    Test,
}

/// Which participants two conflicting events have in common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharedParty {
    Professor,
    Student,
    Both,
}

impl HistoryAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professor => "professor",
            Self::Student => "student",
            Self::Subject => "subject",
            Self::ProfessorSubject => "professor_subject",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professor" => Ok(Self::Professor),
            "student" => Ok(Self::Student),
            "subject" => Ok(Self::Subject),
            "professor_subject" | "link" => Ok(Self::ProfessorSubject),
            "event" => Ok(Self::Event),
            other => Err(format!("unknown entity kind: {other}")),
        }
    }
}
