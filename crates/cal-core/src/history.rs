use crate::error::CalendarError;
use crate::types::{HistoryEntry, HistoryFilter, NewHistoryEntry};

/// Append-only audit log. Entries are never updated or removed.
pub trait HistoryRepository {
    fn append(&self, entry: NewHistoryEntry) -> Result<HistoryEntry, CalendarError>;
    /// Most recent entry first.
    fn list(&self, filter: &HistoryFilter) -> Result<Vec<HistoryEntry>, CalendarError>;
}
