//! # luach
//!
//! Dual-calendar (Gregorian + Hebrew) month grids rendered as an HTML fragment.
//!
//! A Gregorian month is laid out over complete Sunday-first weeks. Each
//! in-month day carries its Hebrew date, any festival or fast, the user's
//! events for that date, and on Fridays and Saturdays the candle-lighting or
//! havdalah time derived from sunset at the configured location.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use luach::{render_month, CalendarConfig, Event, Locale};
//!
//! let config = CalendarConfig::default().with_locale(Locale::English);
//! let today = NaiveDate::from_ymd_opt(2024, 10, 3).unwrap();
//! let events = vec![Event::new(
//!     "standup",
//!     "Standup",
//!     [today.and_hms_opt(9, 0, 0).unwrap()],
//! )];
//!
//! let html = render_month(&config, 2024, 10, today, events).unwrap();
//! assert!(html.contains("Elul"));
//! assert!(html.contains("data-id='standup'"));
//! ```
//!
//! ## Modules
//!
//! - [`grid`]: (year, month) → complete Sunday-first weeks
//! - [`hebrew`]: Hebrew dates, Gregorian → Hebrew conversion, [`Calendrical`] service
//! - [`holidays`]: festival and fast-day lookup
//! - [`events`]: user events and the per-date [`EventIndex`]
//! - [`recurrence`]: RRULE expansion into occurrence times
//! - [`solar`]: sunset, candle-lighting and havdalah
//! - [`span`]: the Hebrew month/year caption
//! - [`markup`]: styling hooks and styled text
//! - [`render`]: the two-phase month renderer
//! - [`locale`], [`numerals`]: localized labels
//! - [`config`]: location, timezone and offsets
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod hebrew;
pub mod holidays;
pub mod locale;
pub mod markup;
pub mod numerals;
pub mod recurrence;
pub mod render;
pub mod solar;
pub mod span;

pub use config::{CalendarConfig, Location};
pub use error::LuachError;
pub use events::{Event, EventEntry, EventIndex};
pub use grid::{month_weeks, GridCell};
pub use hebrew::{Calendrical, HebrewCalendar, HebrewDate, HebrewMonth};
pub use holidays::Holiday;
pub use locale::Locale;
pub use recurrence::{expand_rrule, expand_rrule_with_exdates, Recurrence};
pub use render::{render_month, AnnotatedCell, AnnotatedMonth, CalendarRenderer, DayCell};
pub use solar::{NoaaSolar, SabbathMarker, SabbathTime, SolarPosition, SolarTimeCalculator};
pub use span::{format_span, MonthSpan, SpanEntry};
