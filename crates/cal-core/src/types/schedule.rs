use crate::types::enums::SharedParty;
use crate::types::ids::EventId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Two events that are too close in time for a shared participant.
///
/// `first` precedes `second` in the order the events were scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Conflict {
    pub first: EventId,
    pub second: EventId,
    pub shared: SharedParty,
    pub gap_minutes: i64,
}

impl Conflict {
    pub fn involves(&self, id: EventId) -> bool {
        self.first == id || self.second == id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub conflicts: Vec<Conflict>,
    /// Distinct calendar days covered by the scanned events, earliest first.
    pub dates: Vec<NaiveDate>,
}

impl ScheduleReport {
    pub fn involving(&self, id: EventId) -> Vec<Conflict> {
        self.conflicts
            .iter()
            .filter(|conflict| conflict.involves(id))
            .copied()
            .collect()
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}
