use crate::error::CalendarError;
use crate::types::{CreateEventInput, Event, EventFilter, EventId, UserId};

pub trait EventRepository {
    fn create(&self, author_id: UserId, input: &CreateEventInput) -> Result<Event, CalendarError>;
    fn get(&self, id: EventId) -> Result<Option<Event>, CalendarError>;
    /// Most recently created first.
    fn list(&self, filter: &EventFilter) -> Result<Vec<Event>, CalendarError>;
    /// Ordered by time, ties broken by id.
    fn list_chronological(&self) -> Result<Vec<Event>, CalendarError>;
    fn update(&self, event: &Event) -> Result<Event, CalendarError>;
    fn delete(&self, id: EventId) -> Result<(), CalendarError>;
}
