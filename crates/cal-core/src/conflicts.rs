//! Pairwise overlap detection between scheduled events.
//!
//! Two events conflict when they share a professor or a student and start
//! less than one [`ConflictWindow`] apart. Detection only reports; it never
//! blocks or reschedules anything.

use crate::error::ConfigError;
use crate::types::{Conflict, Event, ScheduleReport, SharedParty};
use chrono::TimeDelta;
use std::collections::BTreeSet;

pub const DEFAULT_WINDOW_MINUTES: u32 = 180;

/// Time span within which two events for the same person are too close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConflictWindow(TimeDelta);

impl Default for ConflictWindow {
    fn default() -> Self {
        Self::from_minutes(DEFAULT_WINDOW_MINUTES)
    }
}

impl ConflictWindow {
    pub fn new(span: TimeDelta) -> Result<Self, ConfigError> {
        if span < TimeDelta::zero() {
            return Err(ConfigError::InvalidValue {
                key: "conflict_window",
                value: span.to_string(),
            });
        }
        Ok(Self(span))
    }

    pub fn from_minutes(minutes: u32) -> Self {
        Self(TimeDelta::minutes(i64::from(minutes)))
    }

    pub fn span(self) -> TimeDelta {
        self.0
    }

    pub fn minutes(self) -> i64 {
        self.0.num_minutes()
    }

    /// Strict: a gap of exactly the window length is not inside it.
    pub fn contains(self, gap: TimeDelta) -> bool {
        gap.abs() < self.0
    }
}

pub fn shared_party(a: &Event, b: &Event) -> Option<SharedParty> {
    match (a.professor_id == b.professor_id, a.student_id == b.student_id) {
        (true, true) => Some(SharedParty::Both),
        (true, false) => Some(SharedParty::Professor),
        (false, true) => Some(SharedParty::Student),
        (false, false) => None,
    }
}

fn check_pair(first: &Event, second: &Event, window: ConflictWindow) -> Option<Conflict> {
    if first.id == second.id {
        return None;
    }
    let shared = shared_party(first, second)?;
    let gap = second.time - first.time;
    if !window.contains(gap) {
        return None;
    }
    Some(Conflict {
        first: first.id,
        second: second.id,
        shared,
        gap_minutes: gap.num_minutes().abs(),
    })
}

/// Scans every unordered pair of `events` once.
///
/// `events` is expected in chronological order; each conflict names the
/// earlier element of the pair as `first`. The report also lists the distinct
/// days the events fall on.
pub fn scan(events: &[Event], window: ConflictWindow) -> ScheduleReport {
    let mut conflicts = Vec::new();
    for (index, first) in events.iter().enumerate() {
        for second in events.iter().skip(index + 1) {
            if let Some(conflict) = check_pair(first, second, window) {
                conflicts.push(conflict);
            }
        }
    }

    let dates: BTreeSet<_> = events.iter().map(|event| event.time.date()).collect();

    ScheduleReport {
        conflicts,
        dates: dates.into_iter().collect(),
    }
}

/// Conflicts between `candidate` and any other event in `events`.
///
/// Pairs are oriented the same way [`scan`] orients them over a list sorted
/// by time then id, so results from both functions compare equal.
pub fn conflicts_with(
    candidate: &Event,
    events: &[Event],
    window: ConflictWindow,
) -> Vec<Conflict> {
    events
        .iter()
        .filter(|other| other.id != candidate.id)
        .filter_map(|other| {
            if (candidate.time, candidate.id) <= (other.time, other.id) {
                check_pair(candidate, other, window)
            } else {
                check_pair(other, candidate, window)
            }
        })
        .collect()
}
