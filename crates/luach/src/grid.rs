//! Month grids: a Gregorian month laid out over complete Sunday-first weeks.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{LuachError, Result};
use crate::hebrew::{Calendrical, HebrewDate};

pub const DAYS_PER_WEEK: usize = 7;

/// One week of dates, Sunday first.
pub type Week = [NaiveDate; DAYS_PER_WEEK];

/// One position in the grid: both calendars plus whether the date belongs
/// to the month being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: NaiveDate,
    pub hebrew: HebrewDate,
    pub in_month: bool,
}

/// Expand `(year, month)` into complete Sunday-first weeks.
///
/// Leading and trailing positions are filled with dates from the adjacent
/// months, so the result always holds between 4 and 6 weeks.
///
/// The padding must stay inside chrono's date range as well, so the months
/// at its very ends are rejected when their grid would spill past it. The
/// latest month with a complete grid is November 262142: December 262142
/// ends on a Monday and would need padding beyond the last representable day.
///
/// # Errors
/// Returns `LuachError::InvalidArgument` if `month` is outside 1..=12 or the
/// month or its padding is not representable. Returns
/// `LuachError::InvariantViolation` if the padded range does not divide into
/// whole weeks.
pub fn month_weeks(year: i32, month: u32) -> Result<Vec<Week>> {
    let (first, last) = month_bounds(year, month)?;

    let lead = u64::from(first.weekday().num_days_from_sunday());
    let trail = 6 - u64::from(last.weekday().num_days_from_sunday());

    let start = first
        .checked_sub_days(Days::new(lead))
        .ok_or_else(|| padding_out_of_range(year, month))?;
    let end = last
        .checked_add_days(Days::new(trail))
        .ok_or_else(|| padding_out_of_range(year, month))?;

    let span = (end - start).num_days() + 1;
    let dates: Vec<NaiveDate> = start.iter_days().take(span as usize).collect();

    if dates.len() % DAYS_PER_WEEK != 0 {
        return Err(LuachError::InvariantViolation(format!(
            "{} grid days for {:04}-{:02} do not form whole weeks",
            dates.len(),
            year,
            month
        )));
    }

    dates
        .chunks_exact(DAYS_PER_WEEK)
        .map(|chunk| {
            Week::try_from(chunk).map_err(|_| {
                LuachError::InvariantViolation("grid week is not 7 days wide".to_string())
            })
        })
        .collect()
}

/// Pair every date of a week with its Hebrew date.
pub fn map_week<C: Calendrical>(week: &Week, month: u32, calendar: &C) -> [GridCell; DAYS_PER_WEEK] {
    week.map(|date| GridCell {
        date,
        hebrew: calendar.to_hebrew(date),
        in_month: date.month() == month,
    })
}

/// First and last day of a Gregorian month.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    if !(1..=12).contains(&month) {
        return Err(LuachError::InvalidArgument(format!(
            "month {} is outside 1..=12",
            month
        )));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| out_of_range(year, month))?;
    let last = if month == 12 {
        NaiveDate::from_ymd_opt(year, 12, 31)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).and_then(|d| d.pred_opt())
    }
    .ok_or_else(|| out_of_range(year, month))?;

    Ok((first, last))
}

fn out_of_range(year: i32, month: u32) -> LuachError {
    LuachError::InvalidArgument(format!(
        "{:04}-{:02} is outside the supported date range",
        year, month
    ))
}

fn padding_out_of_range(year: i32, month: u32) -> LuachError {
    LuachError::InvalidArgument(format!(
        "the week grid for {:04}-{:02} extends past the supported date range",
        year, month
    ))
}
