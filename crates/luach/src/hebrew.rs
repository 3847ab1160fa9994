//! Hebrew calendar dates and Gregorian → Hebrew conversion.
//!
//! Both calendars are mapped onto a shared fixed day count where day 1 is
//! 0001-01-01 (proleptic Gregorian), the same count chrono exposes through
//! [`Datelike::num_days_from_ce`]. Hebrew years are laid out with the
//! classical arithmetic rules: the 19-year leap cycle, the molad of Tishrei
//! in parts (1/1080 hour), and the four postponements folded into
//! `elapsed_days` and `year_length_correction`.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{LuachError, Result};
use crate::holidays::{self, Holiday};

/// Fixed day number of 1 Tishrei AM 1.
const HEBREW_EPOCH: i64 = -1_373_427;

const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// A Hebrew month. `Adar` exists only in common years; `AdarI` and `AdarII`
/// only in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HebrewMonth {
    Nisan,
    Iyyar,
    Sivan,
    Tamuz,
    Av,
    Elul,
    Tishrei,
    Cheshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    AdarI,
    AdarII,
}

impl HebrewMonth {
    /// Month number counted from Nisan (Nisan = 1, Tishrei = 7, Adar II = 13).
    pub fn number(self) -> u8 {
        match self {
            HebrewMonth::Nisan => 1,
            HebrewMonth::Iyyar => 2,
            HebrewMonth::Sivan => 3,
            HebrewMonth::Tamuz => 4,
            HebrewMonth::Av => 5,
            HebrewMonth::Elul => 6,
            HebrewMonth::Tishrei => 7,
            HebrewMonth::Cheshvan => 8,
            HebrewMonth::Kislev => 9,
            HebrewMonth::Tevet => 10,
            HebrewMonth::Shevat => 11,
            HebrewMonth::Adar | HebrewMonth::AdarI => 12,
            HebrewMonth::AdarII => 13,
        }
    }

    /// Inverse of [`HebrewMonth::number`] for a given year.
    pub fn from_number(year: i32, number: u8) -> Option<Self> {
        let leap = is_leap_year(year);
        let month = match number {
            1 => HebrewMonth::Nisan,
            2 => HebrewMonth::Iyyar,
            3 => HebrewMonth::Sivan,
            4 => HebrewMonth::Tamuz,
            5 => HebrewMonth::Av,
            6 => HebrewMonth::Elul,
            7 => HebrewMonth::Tishrei,
            8 => HebrewMonth::Cheshvan,
            9 => HebrewMonth::Kislev,
            10 => HebrewMonth::Tevet,
            11 => HebrewMonth::Shevat,
            12 if leap => HebrewMonth::AdarI,
            12 => HebrewMonth::Adar,
            13 if leap => HebrewMonth::AdarII,
            _ => return None,
        };
        Some(month)
    }

    /// Whether this month can occur in `year`.
    pub fn exists_in(self, year: i32) -> bool {
        match self {
            HebrewMonth::Adar => !is_leap_year(year),
            HebrewMonth::AdarI | HebrewMonth::AdarII => is_leap_year(year),
            _ => true,
        }
    }
}

/// A date in the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: u8,
}

impl HebrewDate {
    /// Build a Hebrew date, checking that the month exists in `year` and the
    /// day fits the month's length.
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> Result<Self> {
        if year < 1 {
            return Err(LuachError::InvalidArgument(format!(
                "Hebrew year {} is before AM 1",
                year
            )));
        }
        if !month.exists_in(year) {
            return Err(LuachError::InvalidArgument(format!(
                "{:?} does not occur in Hebrew year {}",
                month, year
            )));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(LuachError::InvalidArgument(format!(
                "day {} is outside 1..={} for {:?} {}",
                day, last, month, year
            )));
        }
        Ok(HebrewDate { year, month, day })
    }

    /// Convert a Gregorian date. Total and deterministic.
    pub fn from_gregorian(date: NaiveDate) -> Self {
        from_fixed(i64::from(date.num_days_from_ce()))
    }

    /// Convert back to Gregorian; `None` if outside chrono's date range.
    pub fn to_gregorian(&self) -> Option<NaiveDate> {
        let fixed = i32::try_from(self.to_fixed()).ok()?;
        NaiveDate::from_num_days_from_ce_opt(fixed)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> HebrewMonth {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        weekday_of_fixed(self.to_fixed())
    }

    pub(crate) fn to_fixed(&self) -> i64 {
        fixed_from_parts(self.year, self.month.number(), self.day)
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {}", self.day, self.month, self.year)
    }
}

/// The calendrical service consumed by the renderer.
pub trait Calendrical {
    /// Map a Gregorian date to its Hebrew equivalent.
    fn to_hebrew(&self, date: NaiveDate) -> HebrewDate;

    /// The holiday falling on `date`, if any.
    fn holiday(&self, date: &HebrewDate) -> Option<Holiday>;
}

/// Arithmetic Hebrew calendar with the festival and fast-day table.
///
/// `israel` selects the Land of Israel schedule (one-day Pesach/Shavuot
/// endings, no separate Simchat Torah) instead of the diaspora one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HebrewCalendar {
    pub israel: bool,
}

impl HebrewCalendar {
    pub fn new(israel: bool) -> Self {
        HebrewCalendar { israel }
    }
}

impl Calendrical for HebrewCalendar {
    fn to_hebrew(&self, date: NaiveDate) -> HebrewDate {
        HebrewDate::from_gregorian(date)
    }

    fn holiday(&self, date: &HebrewDate) -> Option<Holiday> {
        holidays::holiday_on(date, self.israel)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// Number of days in a Hebrew year: 353–355 in common years, 383–385 in leap years.
pub fn days_in_year(year: i32) -> i64 {
    new_year(year + 1) - new_year(year)
}

pub fn days_in_month(year: i32, month: HebrewMonth) -> u8 {
    last_day_of_month(year, month.number())
}

/// Days from the epoch to the molad of Tishrei, with the "molad zaken" and
/// weekday postponements applied.
fn elapsed_days(year: i64) -> i64 {
    let months = (235 * year - 234).div_euclid(19);
    let parts = 12_084 + 13_753 * months;
    let days = 29 * months + parts.div_euclid(25_920);
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Extra delay keeping year lengths within the permitted set.
fn year_length_correction(year: i64) -> i64 {
    let previous = elapsed_days(year - 1);
    let current = elapsed_days(year);
    let next = elapsed_days(year + 1);
    if next - current == 356 {
        2
    } else if current - previous == 382 {
        1
    } else {
        0
    }
}

/// Fixed day of 1 Tishrei of `year`.
fn new_year(year: i32) -> i64 {
    let year = i64::from(year);
    HEBREW_EPOCH + elapsed_days(year) + year_length_correction(year)
}

fn last_month_number(year: i32) -> u8 {
    if is_leap_year(year) {
        13
    } else {
        12
    }
}

fn last_day_of_month(year: i32, month: u8) -> u8 {
    let length = days_in_year(year);
    let long_cheshvan = length % 10 == 5;
    let short_kislev = length % 10 == 3;
    let short = matches!(month, 2 | 4 | 6 | 10 | 13)
        || (month == 12 && !is_leap_year(year))
        || (month == 8 && !long_cheshvan)
        || (month == 9 && short_kislev);
    if short {
        29
    } else {
        30
    }
}

fn fixed_from_parts(year: i32, month: u8, day: u8) -> i64 {
    let months_before: i64 = if month < 7 {
        (7..=last_month_number(year))
            .chain(1..month)
            .map(|m| i64::from(last_day_of_month(year, m)))
            .sum()
    } else {
        (7..month)
            .map(|m| i64::from(last_day_of_month(year, m)))
            .sum()
    };
    new_year(year) + months_before + i64::from(day) - 1
}

fn from_fixed(fixed: i64) -> HebrewDate {
    let approx = (98_496 * (fixed - HEBREW_EPOCH)).div_euclid(35_975_351) + 1;
    // The approximation is never more than one year ahead.
    let mut year = (approx - 1) as i32;
    while new_year(year + 1) <= fixed {
        year += 1;
    }

    let mut month = if fixed < fixed_from_parts(year, 1, 1) { 7 } else { 1 };
    while fixed > fixed_from_parts(year, month, last_day_of_month(year, month)) {
        month += 1;
    }

    let day = (fixed - fixed_from_parts(year, month, 1) + 1) as u8;
    let month = HebrewMonth::from_number(year, month).unwrap_or(HebrewMonth::Elul);
    HebrewDate { year, month, day }
}

fn weekday_of_fixed(fixed: i64) -> Weekday {
    WEEKDAYS_FROM_SUNDAY[fixed.rem_euclid(7) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years_follow_the_metonic_cycle() {
        assert!(is_leap_year(5784));
        assert!(!is_leap_year(5785));
        assert!(is_leap_year(5787));
    }

    #[test]
    fn year_lengths_are_in_the_permitted_set() {
        for year in 5700..5900 {
            let length = days_in_year(year);
            assert!(
                matches!(length, 353 | 354 | 355 | 383 | 384 | 385),
                "year {} has {} days",
                year,
                length
            );
        }
    }

    #[test]
    fn rosh_hashana_never_falls_on_sunday_wednesday_or_friday() {
        for year in 5700..5900 {
            let weekday = weekday_of_fixed(new_year(year));
            assert!(
                !matches!(weekday, Weekday::Sun | Weekday::Wed | Weekday::Fri),
                "1 Tishrei {} on {:?}",
                year,
                weekday
            );
        }
    }
}
