//! JSON event lists for the `luach` CLI.
//!
//! ```json
//! [
//!   {"id": "test", "name": "Example", "rrule": "FREQ=WEEKLY;BYDAY=SU,MO",
//!    "dtstart": "2024-06-02T12:00:00", "count": 5},
//!   {"id": "trip", "name": "Trip", "dates": ["2024-06-20T08:00:00"]}
//! ]
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDateTime;
use luach::{CalendarConfig, Event, Recurrence};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventSpec {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rrule: Option<String>,
    #[serde(default)]
    pub dtstart: Option<NaiveDateTime>,
    #[serde(default)]
    pub until: Option<NaiveDateTime>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub exdates: Vec<NaiveDateTime>,
    /// Occurrences taken literally, before any expanded ones.
    #[serde(default)]
    pub dates: Vec<NaiveDateTime>,
}

impl EventSpec {
    /// The event's recurrence, if it has an `rrule`.
    pub fn recurrence(&self) -> Result<Option<Recurrence>> {
        let Some(rule) = &self.rrule else {
            return Ok(None);
        };
        let Some(dtstart) = self.dtstart else {
            bail!("event '{}' has an rrule but no dtstart", self.id);
        };
        Ok(Some(Recurrence {
            rule: rule.clone(),
            dtstart,
            until: self.until,
            count: self.count,
            exdates: self.exdates.clone(),
        }))
    }

    /// Expand into an event whose times are local to the configured timezone.
    pub fn into_event(self, config: &CalendarConfig) -> Result<Event<'static>> {
        let mut occurrences = self.dates.clone();

        if let Some(recurrence) = self.recurrence()? {
            let expanded = recurrence
                .expand(config.timezone)
                .with_context(|| format!("Failed to expand rrule of event '{}'", self.id))?;
            occurrences.extend(expanded);
        }

        Ok(Event::new(self.id, self.name, occurrences))
    }
}

pub fn parse(json: &str, config: &CalendarConfig) -> Result<Vec<Event<'static>>> {
    let specs: Vec<EventSpec> = serde_json::from_str(json)?;
    specs
        .into_iter()
        .map(|spec| spec.into_event(config))
        .collect()
}

pub fn load(path: &Path, config: &CalendarConfig) -> Result<Vec<Event<'static>>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file: {}", path.display()))?;
    parse(&json, config).with_context(|| format!("Invalid events file: {}", path.display()))
}
