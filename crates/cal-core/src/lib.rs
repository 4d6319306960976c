pub mod calendar;
pub mod config;
pub mod conflicts;
pub mod error;
pub mod events;
pub mod history;
pub mod password;
pub mod professors;
pub mod store;
pub mod students;
pub mod subjects;
pub mod users;
pub mod validation;

pub mod types;

pub use crate::calendar::{Calendar, Change, LinkOutcome, RequestContext};
pub use crate::config::CalendarConfig;
pub use crate::conflicts::ConflictWindow;
pub use crate::error::CalendarError;
pub use crate::store::Store;
