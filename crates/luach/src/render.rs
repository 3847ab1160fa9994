//! Month rendering: grid → annotated grid → markup fragment.
//!
//! Rendering runs in two phases. [`CalendarRenderer::annotate`] builds the
//! grid, resolves every in-month cell (Hebrew date, holiday, events, Sabbath
//! time) and collects the [`MonthSpan`]; [`AnnotatedMonth::to_markup`] then
//! emits the fragment with both captions already known.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, warn};

use crate::config::CalendarConfig;
use crate::error::{LuachError, Result};
use crate::events::{Event, EventEntry, EventIndex};
use crate::grid::{self, GridCell, DAYS_PER_WEEK};
use crate::hebrew::{Calendrical, HebrewCalendar, HebrewDate};
use crate::markup::{self, block, escape, month_label, year_label, Hook, StyledText};
use crate::solar::{NoaaSolar, SabbathTime, SolarPosition, SolarTimeCalculator};
use crate::span::{MonthSpan, SpanEntry};

/// An in-month day with all of its annotations resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub hebrew: HebrewDate,
    /// Localized Hebrew day-of-month label.
    pub hebrew_day: String,
    pub is_today: bool,
    pub holiday: Option<&'static str>,
    pub events: Vec<EventEntry>,
    /// `None` on Sunday through Thursday, or when sunset could not be computed.
    pub sabbath: Option<SabbathTime>,
}

impl DayCell {
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    fn to_markup(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(6 + self.events.len());

        if self.is_today {
            lines.push(format!("<td {}>", markup::TODAY_ATTR));
        } else {
            lines.push("<td>".to_string());
        }

        lines.push(format!(
            "<div>{}{}</div>",
            block(Hook::Gregorian, &self.date.day().to_string()),
            block(Hook::Hebrew, &escape(&self.hebrew_day)),
        ));

        lines.push(format!("<div class='{}'>", Hook::Events.class_name()));
        if let Some(holiday) = self.holiday {
            lines.push(format!("<div>{}</div>", escape(holiday)));
        }
        for event in &self.events {
            lines.push(format!(
                "<div {}='{}'>{}</div>",
                markup::EVENT_ID_ATTR,
                escape(&event.id),
                escape(&event.name)
            ));
        }
        lines.push("</div>".to_string());

        if let Some(sabbath) = &self.sabbath {
            lines.push(block(sabbath.marker.hook(), &sabbath.hhmm()));
        }

        lines.push("</td>".to_string());
        lines
    }
}

/// One grid position after annotation.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotatedCell {
    /// A padding date from an adjacent month. Rendered empty.
    Blank(NaiveDate),
    Day(DayCell),
}

impl AnnotatedCell {
    pub fn date(&self) -> NaiveDate {
        match self {
            AnnotatedCell::Blank(date) => *date,
            AnnotatedCell::Day(cell) => cell.date,
        }
    }

    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            AnnotatedCell::Blank(_) => None,
            AnnotatedCell::Day(cell) => Some(cell),
        }
    }
}

/// A fully annotated month, ready to be emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedMonth {
    pub year: i32,
    pub month: u32,
    pub gregorian_caption: StyledText,
    pub hebrew_caption: StyledText,
    pub span: MonthSpan,
    pub weekday_names: [&'static str; DAYS_PER_WEEK],
    pub weeks: Vec<[AnnotatedCell; DAYS_PER_WEEK]>,
}

impl AnnotatedMonth {
    /// In-month cells, left to right, top to bottom.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten().filter_map(AnnotatedCell::as_day)
    }

    /// Emit the fragment, one element per line.
    pub fn to_markup(&self) -> String {
        let mut html: Vec<String> = Vec::new();

        html.push("<table>".to_string());

        html.push("<caption>".to_string());
        html.push(block(Hook::Gregorian, &self.gregorian_caption.to_markup()));
        html.push(block(Hook::Hebrew, &self.hebrew_caption.to_markup()));
        html.push("</caption>".to_string());

        html.push("<colgroup>".to_string());
        html.extend(
            (1..=DAYS_PER_WEEK).map(|i| format!("<col class='{}' />", markup::column_class(i))),
        );
        html.push("</colgroup>".to_string());

        html.push("<thead>".to_string());
        html.push("<tr>".to_string());
        html.extend(
            self.weekday_names
                .iter()
                .map(|day| format!("<th scope='col'>{}</th>", escape(day))),
        );
        html.push("</tr>".to_string());
        html.push("</thead>".to_string());

        html.push("<tbody>".to_string());
        for week in &self.weeks {
            html.push("<tr>".to_string());
            for cell in week {
                match cell {
                    AnnotatedCell::Blank(_) => html.push("<td></td>".to_string()),
                    AnnotatedCell::Day(day) => html.extend(day.to_markup()),
                }
            }
            html.push("</tr>".to_string());
        }
        html.push("</tbody>".to_string());

        html.push("</table>".to_string());

        html.join("\n")
    }
}

/// Renders months for one configuration.
///
/// Generic over the calendrical and solar services so either can be
/// replaced; [`CalendarRenderer::new`] wires in the built-in ones.
#[derive(Debug, Clone)]
pub struct CalendarRenderer<C = HebrewCalendar, S = NoaaSolar> {
    config: CalendarConfig,
    calendar: C,
    solar: S,
}

impl CalendarRenderer {
    pub fn new(config: CalendarConfig) -> Self {
        let calendar = HebrewCalendar::new(config.israel);
        CalendarRenderer {
            config,
            calendar,
            solar: NoaaSolar,
        }
    }
}

impl<C: Calendrical, S: SolarPosition> CalendarRenderer<C, S> {
    pub fn with_services(config: CalendarConfig, calendar: C, solar: S) -> Self {
        CalendarRenderer {
            config,
            calendar,
            solar,
        }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Build and annotate the grid for `(year, month)`.
    ///
    /// `today` marks the matching cell, if it falls within the month.
    /// Each event's occurrences are drained exactly once.
    ///
    /// # Errors
    /// Returns `LuachError::InvalidArgument` for an invalid month, year or
    /// location, and `LuachError::InvariantViolation` if the grid or span
    /// comes out malformed. A failed sunset only drops that cell's marker.
    pub fn annotate<'a>(
        &self,
        year: i32,
        month: u32,
        today: NaiveDate,
        events: impl IntoIterator<Item = Event<'a>>,
    ) -> Result<AnnotatedMonth> {
        self.config.validate()?;
        let locale = self.config.locale;

        let weeks = grid::month_weeks(year, month)?;
        let index = EventIndex::build(events);
        let solar = SolarTimeCalculator::new(&self.config, &self.solar);

        debug!(
            year,
            month,
            weeks = weeks.len(),
            event_dates = index.date_count(),
            "annotating month"
        );

        let mut span = MonthSpan::new();
        let mut annotated = Vec::with_capacity(weeks.len());

        for week in &weeks {
            let cells = grid::map_week(week, month, &self.calendar);
            annotated.push(cells.map(|cell| {
                if !cell.in_month {
                    return AnnotatedCell::Blank(cell.date);
                }
                span.insert(SpanEntry::new(
                    locale.hebrew_month_name(cell.hebrew.month()),
                    locale.hebrew_year(&cell.hebrew),
                ));
                AnnotatedCell::Day(self.annotate_day(&cell, today, &index, &solar))
            }));
        }

        let hebrew_caption = span.caption()?;
        if span.len() > 1 {
            debug!(caption = %hebrew_caption.text(), "Hebrew month boundary inside grid");
        }

        let month_name = locale.gregorian_month_name(month).ok_or_else(|| {
            LuachError::InvalidArgument(format!("month {} is outside 1..=12", month))
        })?;
        let gregorian_caption = month_label(month_name)
            .then_plain(" ")
            .then(year_label(year.to_string()));

        Ok(AnnotatedMonth {
            year,
            month,
            gregorian_caption,
            hebrew_caption,
            span,
            weekday_names: locale.weekday_names(),
            weeks: annotated,
        })
    }

    /// Annotate and emit the fragment for `(year, month)`.
    pub fn render<'a>(
        &self,
        year: i32,
        month: u32,
        today: NaiveDate,
        events: impl IntoIterator<Item = Event<'a>>,
    ) -> Result<String> {
        Ok(self.annotate(year, month, today, events)?.to_markup())
    }

    fn annotate_day(
        &self,
        cell: &GridCell,
        today: NaiveDate,
        index: &EventIndex,
        solar: &SolarTimeCalculator<'_, S>,
    ) -> DayCell {
        let locale = self.config.locale;

        let sabbath = match solar.sabbath_time(cell.date) {
            Ok(time) => time,
            Err(e) => {
                warn!(date = %cell.date, error = %e, "omitting Sabbath time");
                None
            }
        };

        DayCell {
            date: cell.date,
            hebrew: cell.hebrew,
            hebrew_day: locale.hebrew_day(&cell.hebrew),
            is_today: cell.date == today,
            holiday: self.calendar.holiday(&cell.hebrew).map(|h| h.name(locale)),
            events: index.on(cell.date).to_vec(),
            sabbath,
        }
    }
}

/// Render `(year, month)` with the built-in services.
pub fn render_month<'a>(
    config: &CalendarConfig,
    year: i32,
    month: u32,
    today: NaiveDate,
    events: impl IntoIterator<Item = Event<'a>>,
) -> Result<String> {
    CalendarRenderer::new(config.clone()).render(year, month, today, events)
}
