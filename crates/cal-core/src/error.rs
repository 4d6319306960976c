use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfessorError {
    #[error("professor not found")]
    NotFound,
    #[error("professor still has scheduled events")]
    InUse,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Error)]
pub enum StudentError {
    #[error("student not found")]
    NotFound,
    #[error("student still has scheduled events")]
    InUse,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Error)]
pub enum SubjectError {
    #[error("subject not found")]
    NotFound,
    #[error("subject still has scheduled events")]
    InUse,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("{professor} already linked to {subject}")]
    AlreadyLinked { professor: String, subject: String },
    #[error("link not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("event not found")]
    NotFound,
    #[error("only the author may change this event")]
    NotAuthor,
    #[error("invalid time: {value}")]
    InvalidTime { value: String },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Error)]
pub enum UserError {
    #[error("user not found")]
    NotFound,
    #[error("username or email already registered")]
    AlreadyExists,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("an authenticated user is required")]
    Unauthenticated,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history write failed: {message}")]
    WriteFailed { message: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error(transparent)]
    Professor(#[from] ProfessorError),
    #[error(transparent)]
    Student(#[from] StudentError),
    #[error(transparent)]
    Subject(#[from] SubjectError),
    #[error(transparent)]
    Link(#[from] LinkError),
    #[error(transparent)]
    Event(#[from] EventError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl CalendarError {
    pub fn internal(err: impl ToString) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }

    /// Stable machine-readable code for the error family.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Professor(ProfessorError::NotFound)
            | Self::Student(StudentError::NotFound)
            | Self::Subject(SubjectError::NotFound)
            | Self::Link(LinkError::NotFound)
            | Self::Event(EventError::NotFound)
            | Self::User(UserError::NotFound) => "not_found",
            Self::Professor(ProfessorError::InUse)
            | Self::Student(StudentError::InUse)
            | Self::Subject(SubjectError::InUse)
            | Self::Link(LinkError::AlreadyLinked { .. })
            | Self::User(UserError::AlreadyExists) => "conflict",
            Self::Event(EventError::NotAuthor)
            | Self::User(UserError::InvalidCredentials | UserError::Unauthenticated) => {
                "forbidden"
            }
            Self::Professor(ProfessorError::InvalidInput { .. })
            | Self::Student(StudentError::InvalidInput { .. })
            | Self::Subject(SubjectError::InvalidInput { .. })
            | Self::Link(LinkError::InvalidInput { .. })
            | Self::Event(EventError::InvalidInput { .. } | EventError::InvalidTime { .. })
            | Self::User(UserError::InvalidInput { .. })
            | Self::Config(_) => "invalid_input",
            Self::History(HistoryError::WriteFailed { .. }) | Self::Internal { .. } => {
                "internal_error"
            }
        }
    }
}
