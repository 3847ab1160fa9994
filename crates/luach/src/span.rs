//! The Hebrew caption: which Hebrew month(s) and year(s) a Gregorian month covers.

use crate::error::{LuachError, Result};
use crate::markup::{month_label, year_label, StyledText};

/// A (Hebrew month name, Hebrew year label) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpanEntry {
    pub month: String,
    pub year: String,
}

impl SpanEntry {
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        SpanEntry {
            month: month.into(),
            year: year.into(),
        }
    }
}

/// Distinct span entries in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthSpan {
    entries: Vec<SpanEntry>,
}

impl MonthSpan {
    pub fn new() -> Self {
        MonthSpan::default()
    }

    /// Record an entry; repeats of an already-seen entry are ignored.
    pub fn insert(&mut self, entry: SpanEntry) {
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    pub fn entries(&self) -> &[SpanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format the caption. See [`format_span`].
    pub fn caption(&self) -> Result<StyledText> {
        format_span(&self.entries)
    }
}

impl FromIterator<SpanEntry> for MonthSpan {
    fn from_iter<I: IntoIterator<Item = SpanEntry>>(iter: I) -> Self {
        let mut span = MonthSpan::new();
        for entry in iter {
            span.insert(entry);
        }
        span
    }
}

/// Format span entries as a caption.
///
/// - one entry: `"{month} {year}"`
/// - two or more, same year: `"{month1} - {month2} {year}"`
/// - two or more, different years: `"{month1} {year1} - {month2} {year2}"`
///
/// Only the first two entries take part in a range.
///
/// # Errors
/// Returns `LuachError::InvariantViolation` for an empty span; every month
/// has at least one day, so a render never produces one.
pub fn format_span(entries: &[SpanEntry]) -> Result<StyledText> {
    match entries {
        [] => Err(LuachError::InvariantViolation(
            "month span has no entries".to_string(),
        )),
        [only] => Ok(month_label(&only.month)
            .then_plain(" ")
            .then(year_label(&only.year))),
        [first, second, ..] if first.year == second.year => Ok(month_label(&first.month)
            .then_plain(" - ")
            .then(month_label(&second.month))
            .then_plain(" ")
            .then(year_label(&first.year))),
        [first, second, ..] => Ok(month_label(&first.month)
            .then_plain(" ")
            .then(year_label(&first.year))
            .then_plain(" - ")
            .then(month_label(&second.month))
            .then_plain(" ")
            .then(year_label(&second.year))),
    }
}
