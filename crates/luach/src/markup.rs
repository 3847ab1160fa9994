//! Styling hooks and typed styled text.
//!
//! Every class name and data attribute the fragment exposes to the page
//! template is defined here, so the rest of the crate composes [`Hook`]s
//! and [`StyledText`] values instead of writing markup by hand.

use std::borrow::Cow;

/// A styling hook: a class name or attribute the page template targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    Month,
    Year,
    Gregorian,
    Hebrew,
    Events,
    CandleLighting,
    Havdalah,
}

impl Hook {
    pub fn class_name(self) -> &'static str {
        match self {
            Hook::Month => "month",
            Hook::Year => "year",
            Hook::Gregorian => "gregorian",
            Hook::Hebrew => "hebrew",
            Hook::Events => "events",
            Hook::CandleLighting => "candle-lighting",
            Hook::Havdalah => "havdalah",
        }
    }
}

/// Attribute marking the cell for the reference date.
pub const TODAY_ATTR: &str = "data-today";
/// Attribute carrying an event's id.
pub const EVENT_ID_ATTR: &str = "data-id";

/// Class name for weekday column `index` (1..=7).
pub fn column_class(index: usize) -> String {
    format!("day-{}", index)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Plain(String),
    Hooked(Hook, String),
}

/// Inline text made of plain and hooked runs.
///
/// Renders either as plain text (for comparisons and logs) or as markup
/// with each hooked run wrapped in a classed `<span>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    segments: Vec<Segment>,
}

impl StyledText {
    pub fn plain(text: impl Into<String>) -> Self {
        StyledText {
            segments: vec![Segment::Plain(text.into())],
        }
    }

    pub fn hooked(hook: Hook, text: impl Into<String>) -> Self {
        StyledText {
            segments: vec![Segment::Hooked(hook, text.into())],
        }
    }

    /// Append another run of styled text.
    pub fn then(mut self, other: StyledText) -> Self {
        self.segments.extend(other.segments);
        self
    }

    pub fn then_plain(self, text: impl Into<String>) -> Self {
        self.then(StyledText::plain(text))
    }

    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(|s| match s {
            Segment::Plain(t) | Segment::Hooked(_, t) => t.is_empty(),
        })
    }

    /// The text with all styling dropped.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Plain(t) | Segment::Hooked(_, t) => t.as_str(),
            })
            .collect()
    }

    /// The text as escaped markup.
    pub fn to_markup(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Plain(t) => escape(t).into_owned(),
                Segment::Hooked(hook, t) => {
                    format!("<span class='{}'>{}</span>", hook.class_name(), escape(t))
                }
            })
            .collect()
    }
}

/// Month label, e.g. the Gregorian or Hebrew month name.
pub fn month_label(text: impl Into<String>) -> StyledText {
    StyledText::hooked(Hook::Month, text)
}

/// Year label.
pub fn year_label(text: impl Into<String>) -> StyledText {
    StyledText::hooked(Hook::Year, text)
}

/// `<div class='..'>` around already-rendered markup.
pub fn block(hook: Hook, inner_markup: &str) -> String {
    format!("<div class='{}'>{}</div>", hook.class_name(), inner_markup)
}

/// Escape text for use in element content and single-quoted attributes.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '\'', '"']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
