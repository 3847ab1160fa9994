//! User events and their per-date index.

use std::collections::HashMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// A named event with a single-pass sequence of local occurrence times.
///
/// The sequence must be finite. It is consumed once, by [`EventIndex::build`].
pub struct Event<'a> {
    pub id: String,
    pub name: String,
    occurrences: Box<dyn Iterator<Item = NaiveDateTime> + 'a>,
}

impl<'a> Event<'a> {
    pub fn new<I>(id: impl Into<String>, name: impl Into<String>, occurrences: I) -> Self
    where
        I: IntoIterator<Item = NaiveDateTime>,
        I::IntoIter: 'a,
    {
        Event {
            id: id.into(),
            name: name.into(),
            occurrences: Box::new(occurrences.into_iter()),
        }
    }
}

impl fmt::Debug for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// An event as it appears in one day's bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEntry {
    pub id: String,
    pub name: String,
}

/// Occurrences bucketed by calendar date.
///
/// Within a date, entries keep input-event order, then occurrence order.
#[derive(Debug, Clone, Default)]
pub struct EventIndex {
    by_date: HashMap<NaiveDate, Vec<EventEntry>>,
}

impl EventIndex {
    /// Drain every event's occurrences into date buckets.
    pub fn build<'a>(events: impl IntoIterator<Item = Event<'a>>) -> Self {
        let mut by_date: HashMap<NaiveDate, Vec<EventEntry>> = HashMap::new();

        for event in events {
            let Event {
                id,
                name,
                occurrences,
            } = event;
            for occurrence in occurrences {
                by_date
                    .entry(occurrence.date())
                    .or_default()
                    .push(EventEntry {
                        id: id.clone(),
                        name: name.clone(),
                    });
            }
        }

        EventIndex { by_date }
    }

    /// Entries for `date`; empty when nothing occurs that day.
    pub fn on(&self, date: NaiveDate) -> &[EventEntry] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of dates carrying at least one entry.
    pub fn date_count(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
