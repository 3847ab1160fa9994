//! Recurring events: an RRULE anchored at a local start time, expanded into
//! the wall-clock occurrence times the grid buckets by.
//!
//! The rule body is parsed by the `rrule` crate; the start, end bound and
//! exclusions are passed to it as zoned date-times rather than spliced into
//! iCalendar text.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use rrule::{RRule, RRuleSet, Unvalidated};
use tracing::debug;

use crate::error::{LuachError, Result};
use crate::events::Event;

/// Expansion cap for rules bounded by neither COUNT nor UNTIL.
const DEFAULT_MAX_INSTANCES: u16 = 500;

/// A recurrence rule with its local anchor and bounds.
///
/// ```
/// use chrono::NaiveDate;
/// use luach::recurrence::Recurrence;
///
/// let noon = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let sundays_and_mondays = Recurrence::new("FREQ=WEEKLY;BYDAY=SU,MO", noon).with_count(5);
/// let times = sundays_and_mondays.expand(chrono_tz::Asia::Jerusalem).unwrap();
/// assert_eq!(times.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Recurrence {
    /// RRULE body, e.g. `FREQ=WEEKLY;BYDAY=SU,MO`.
    pub rule: String,
    pub dtstart: NaiveDateTime,
    pub until: Option<NaiveDateTime>,
    /// Replaces any COUNT in `rule`.
    pub count: Option<u32>,
    pub exdates: Vec<NaiveDateTime>,
}

impl Recurrence {
    pub fn new(rule: impl Into<String>, dtstart: NaiveDateTime) -> Self {
        Recurrence {
            rule: rule.into(),
            dtstart,
            until: None,
            count: None,
            exdates: Vec::new(),
        }
    }

    pub fn with_until(mut self, until: NaiveDateTime) -> Self {
        self.until = Some(until);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_exdates(mut self, exdates: impl IntoIterator<Item = NaiveDateTime>) -> Self {
        self.exdates.extend(exdates);
        self
    }

    /// Occurrence times in `timezone`, in order, with exclusions removed.
    ///
    /// COUNT is applied before exclusions, as RFC 5545 counts them.
    ///
    /// # Errors
    /// Returns `LuachError::InvalidRule` if the rule is empty, unparseable or
    /// rejected by validation, and `LuachError::InvalidArgument` if a local
    /// time falls in a DST gap of `timezone`.
    pub fn expand(&self, timezone: Tz) -> Result<Vec<NaiveDateTime>> {
        let body = self.rule.trim();
        if body.is_empty() {
            return Err(LuachError::InvalidRule("empty RRULE string".to_string()));
        }
        if self.count == Some(0) {
            return Ok(Vec::new());
        }

        let mut rule: RRule<Unvalidated> = body
            .parse()
            .map_err(|e| LuachError::InvalidRule(format!("{}", e)))?;
        if let Some(count) = self.count {
            rule = rule.count(count);
        }
        if let Some(until) = self.until {
            // A zoned DTSTART takes its UNTIL in UTC.
            let until = zoned(timezone, until)?.with_timezone(&rrule::Tz::Tz(chrono_tz::UTC));
            rule = rule.until(until);
        }

        let mut set: RRuleSet = rule
            .build(zoned(timezone, self.dtstart)?)
            .map_err(|e| LuachError::InvalidRule(format!("{}", e)))?;
        for exdate in &self.exdates {
            set = set.exdate(zoned(timezone, *exdate)?);
        }

        let limit = self.count.map_or(DEFAULT_MAX_INSTANCES, |c| {
            u16::try_from(c).unwrap_or(u16::MAX).max(DEFAULT_MAX_INSTANCES)
        });
        let expanded = set.all(limit);
        if expanded.limited {
            debug!(rule = body, limit, "recurrence expansion hit its limit");
        }

        Ok(expanded
            .dates
            .into_iter()
            .map(|occurrence| occurrence.naive_local())
            .collect())
    }
}

/// Attach `timezone` to a wall-clock time, taking the earlier instant when
/// the time repeats at a DST fall-back.
fn zoned(timezone: Tz, local: NaiveDateTime) -> Result<DateTime<rrule::Tz>> {
    let zone = rrule::Tz::Tz(timezone);
    zone.from_local_datetime(&local).earliest().ok_or_else(|| {
        LuachError::InvalidArgument(format!(
            "{} does not exist in {} (DST gap)",
            local,
            timezone.name()
        ))
    })
}

/// Expand an RRULE into local occurrence times in `timezone`.
///
/// `count`, when given, replaces any COUNT in the rule. See
/// [`Recurrence::expand`] for errors.
pub fn expand_rrule(
    rrule: &str,
    dtstart: NaiveDateTime,
    timezone: Tz,
    until: Option<NaiveDateTime>,
    count: Option<u32>,
) -> Result<Vec<NaiveDateTime>> {
    expand_rrule_with_exdates(rrule, dtstart, timezone, until, count, &[])
}

/// [`expand_rrule`], minus the occurrences listed in `exdates`.
pub fn expand_rrule_with_exdates(
    rrule: &str,
    dtstart: NaiveDateTime,
    timezone: Tz,
    until: Option<NaiveDateTime>,
    count: Option<u32>,
    exdates: &[NaiveDateTime],
) -> Result<Vec<NaiveDateTime>> {
    Recurrence {
        rule: rrule.to_string(),
        dtstart,
        until,
        count,
        exdates: exdates.to_vec(),
    }
    .expand(timezone)
}

impl Event<'static> {
    /// An event whose occurrences come from expanding `recurrence` in `timezone`.
    pub fn from_rrule(
        id: impl Into<String>,
        name: impl Into<String>,
        recurrence: &Recurrence,
        timezone: Tz,
    ) -> Result<Self> {
        let occurrences = recurrence.expand(timezone)?;
        Ok(Event::new(id, name, occurrences))
    }
}
