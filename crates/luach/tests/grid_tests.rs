//! Tests for month grid construction.

use chrono::{Datelike, NaiveDate, Weekday};
use luach::grid::{map_week, month_bounds, month_weeks};
use luach::{HebrewCalendar, HebrewMonth, LuachError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn june_2024_pads_to_six_weeks() {
    // June 1 2024 is a Saturday and June 30 a Sunday.
    let weeks = month_weeks(2024, 6).expect("valid month");

    assert_eq!(weeks.len(), 6);
    assert_eq!(weeks[0][0], date(2024, 5, 26));
    assert_eq!(weeks[0][6], date(2024, 6, 1));
    assert_eq!(weeks[5][0], date(2024, 6, 30));
    assert_eq!(weeks[5][6], date(2024, 7, 6));
}

#[test]
fn february_2015_fits_exactly_four_weeks() {
    let weeks = month_weeks(2015, 2).expect("valid month");

    assert_eq!(weeks.len(), 4);
    assert_eq!(weeks[0][0], date(2015, 2, 1));
    assert_eq!(weeks[3][6], date(2015, 2, 28));
}

#[test]
fn december_rolls_into_next_year() {
    let weeks = month_weeks(2024, 12).expect("valid month");

    assert_eq!(weeks.len(), 5);
    assert_eq!(weeks[0][0], date(2024, 12, 1));
    assert_eq!(weeks[4][6], date(2025, 1, 4));
}

#[test]
fn every_week_starts_on_sunday() {
    for month in 1..=12 {
        for week in month_weeks(2025, month).unwrap() {
            assert_eq!(week[0].weekday(), Weekday::Sun);
            assert_eq!(week[6].weekday(), Weekday::Sat);
        }
    }
}

#[test]
fn month_outside_range_is_invalid_argument() {
    assert!(matches!(
        month_weeks(2024, 0),
        Err(LuachError::InvalidArgument(_))
    ));
    assert!(matches!(
        month_weeks(2024, 13),
        Err(LuachError::InvalidArgument(_))
    ));
}

#[test]
fn year_outside_chrono_range_is_invalid_argument() {
    assert!(matches!(
        month_weeks(i32::MAX, 1),
        Err(LuachError::InvalidArgument(_))
    ));
}

#[test]
fn last_supported_month_is_november_262142() {
    let weeks = month_weeks(262142, 11).expect("padding fits before the end of the range");
    let last_week = weeks.last().unwrap();
    assert_eq!(last_week[6], date(262142, 12, 1));

    // December itself is representable, but its trailing padding is not.
    assert!(month_bounds(262142, 12).is_ok());
    match month_weeks(262142, 12) {
        Err(LuachError::InvalidArgument(msg)) => assert!(msg.contains("week grid"), "{}", msg),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn month_bounds_handles_leap_february() {
    assert_eq!(
        month_bounds(2024, 2).unwrap(),
        (date(2024, 2, 1), date(2024, 2, 29))
    );
    assert_eq!(
        month_bounds(2023, 2).unwrap(),
        (date(2023, 2, 1), date(2023, 2, 28))
    );
}

#[test]
fn mapped_week_flags_padding_cells() {
    let weeks = month_weeks(2024, 6).unwrap();
    let cells = map_week(&weeks[0], 6, &HebrewCalendar::default());

    // May 26..31 are padding, June 1 is in the month.
    assert!(cells[..6].iter().all(|c| !c.in_month));
    assert!(cells[6].in_month);

    // June 1 2024 = 24 Iyyar 5784.
    assert_eq!(cells[6].hebrew.year(), 5784);
    assert_eq!(cells[6].hebrew.month(), HebrewMonth::Iyyar);
    assert_eq!(cells[6].hebrew.day(), 24);
}
