//! Tests for festival and fast-day resolution.

use chrono::NaiveDate;
use luach::holidays::holiday_on;
use luach::{Calendrical, HebrewCalendar, HebrewDate, HebrewMonth, Holiday, Locale};

fn on(y: i32, m: u32, d: u32, israel: bool) -> Option<Holiday> {
    let date = HebrewDate::from_gregorian(NaiveDate::from_ymd_opt(y, m, d).unwrap());
    holiday_on(&date, israel)
}

fn diaspora(y: i32, m: u32, d: u32) -> Option<Holiday> {
    on(y, m, d, false)
}

// ---------------------------------------------------------------------------
// Tishrei 5785 (October 2024)
// ---------------------------------------------------------------------------

#[test]
fn rosh_hashana_is_two_days() {
    assert_eq!(diaspora(2024, 10, 3), Some(Holiday::RoshHashana));
    assert_eq!(diaspora(2024, 10, 4), Some(Holiday::RoshHashana));
}

#[test]
fn tzom_gedaliah_postponed_from_shabbat() {
    // 3 Tishrei 5785 is a Saturday, so the fast moves to Sunday.
    assert_eq!(diaspora(2024, 10, 5), None);
    assert_eq!(diaspora(2024, 10, 6), Some(Holiday::TzomGedaliah));
}

#[test]
fn yom_kippur() {
    assert_eq!(diaspora(2024, 10, 12), Some(Holiday::YomKippur));
}

#[test]
fn sukkot_through_simchat_torah_in_diaspora() {
    for day in 17..=23 {
        assert_eq!(diaspora(2024, 10, day), Some(Holiday::Sukkot), "Oct {}", day);
    }
    assert_eq!(diaspora(2024, 10, 24), Some(Holiday::ShminiAtzeret));
    assert_eq!(diaspora(2024, 10, 25), Some(Holiday::SimchatTorah));
    assert_eq!(diaspora(2024, 10, 26), None);
}

#[test]
fn no_separate_simchat_torah_in_israel() {
    assert_eq!(on(2024, 10, 24, true), Some(Holiday::ShminiAtzeret));
    assert_eq!(on(2024, 10, 25, true), None);
}

// ---------------------------------------------------------------------------
// Winter
// ---------------------------------------------------------------------------

#[test]
fn chanukah_spans_kislev_into_tevet() {
    assert_eq!(diaspora(2024, 12, 25), None);
    for day in 26..=31 {
        assert_eq!(diaspora(2024, 12, day), Some(Holiday::Chanukah), "Dec {}", day);
    }
    assert_eq!(diaspora(2025, 1, 1), Some(Holiday::Chanukah));
    assert_eq!(diaspora(2025, 1, 2), Some(Holiday::Chanukah));
    assert_eq!(diaspora(2025, 1, 3), None);
}

#[test]
fn asara_betevet() {
    assert_eq!(diaspora(2025, 1, 10), Some(Holiday::AsaraBeTevet));
}

// ---------------------------------------------------------------------------
// Adar in leap and common years
// ---------------------------------------------------------------------------

#[test]
fn purim_in_leap_year_is_in_adar_ii() {
    assert_eq!(diaspora(2024, 3, 21), Some(Holiday::TaanitEsther));
    assert_eq!(diaspora(2024, 3, 24), Some(Holiday::Purim));
    assert_eq!(diaspora(2024, 3, 25), Some(Holiday::ShushanPurim));
}

#[test]
fn purim_katan_on_14_adar_i() {
    // 14 Adar I 5784 is Friday Feb 23 2024.
    let date = HebrewDate::from_gregorian(NaiveDate::from_ymd_opt(2024, 2, 23).unwrap());
    assert_eq!(date.month(), HebrewMonth::AdarI);
    assert_eq!(date.day(), 14);

    assert_eq!(diaspora(2024, 2, 23), Some(Holiday::PurimKatan));
    assert_eq!(on(2024, 2, 23, true), Some(Holiday::PurimKatan));
    assert_eq!(diaspora(2024, 2, 24), None);
    assert_eq!(Holiday::PurimKatan.name(Locale::Hebrew), "פורים קטן");
    assert_eq!(Holiday::PurimKatan.name(Locale::English), "Purim Katan");
}

#[test]
fn no_purim_katan_in_common_year() {
    // 14 Shevat 5785 and 14 Adar 5785 fall a month apart; neither is Purim Katan.
    assert_eq!(diaspora(2025, 2, 12), None);
    assert_ne!(diaspora(2025, 3, 14), Some(Holiday::PurimKatan));
}

#[test]
fn purim_in_common_year() {
    assert_eq!(diaspora(2025, 3, 13), Some(Holiday::TaanitEsther));
    assert_eq!(diaspora(2025, 3, 14), Some(Holiday::Purim));
    assert_eq!(diaspora(2025, 3, 15), Some(Holiday::ShushanPurim));
}

// ---------------------------------------------------------------------------
// Spring and summer 5784
// ---------------------------------------------------------------------------

#[test]
fn pesach_length_depends_on_schedule() {
    // 15 Nisan 5784 = April 23 2024.
    assert_eq!(diaspora(2024, 4, 22), None);
    assert_eq!(diaspora(2024, 4, 23), Some(Holiday::Pesach));
    assert_eq!(diaspora(2024, 4, 30), Some(Holiday::Pesach));
    assert_eq!(on(2024, 4, 30, true), None);
    assert_eq!(on(2024, 4, 29, true), Some(Holiday::Pesach));
}

#[test]
fn iyyar_minor_days() {
    assert_eq!(diaspora(2024, 5, 22), Some(Holiday::PesachSheni));
    assert_eq!(diaspora(2024, 5, 26), Some(Holiday::LagBaOmer));
}

#[test]
fn shavuot_length_depends_on_schedule() {
    assert_eq!(diaspora(2024, 6, 12), Some(Holiday::Shavuot));
    assert_eq!(diaspora(2024, 6, 13), Some(Holiday::Shavuot));
    assert_eq!(on(2024, 6, 13, true), None);
}

#[test]
fn summer_fasts() {
    // 17 Tamuz 5784 = July 23 2024 (Tuesday), 9 Av = August 13 2024 (Tuesday).
    assert_eq!(diaspora(2024, 7, 23), Some(Holiday::TzomTammuz));
    assert_eq!(diaspora(2024, 8, 13), Some(Holiday::TishaBeAv));
    assert_eq!(diaspora(2024, 8, 19), Some(Holiday::TuBeAv));
}

#[test]
fn ordinary_day_has_no_holiday() {
    assert_eq!(diaspora(2024, 6, 20), None);
}

// ---------------------------------------------------------------------------
// Names and the service seam
// ---------------------------------------------------------------------------

#[test]
fn names_are_localized() {
    assert_eq!(Holiday::RoshHashana.name(Locale::English), "Rosh Hashana");
    assert_eq!(Holiday::RoshHashana.name(Locale::Hebrew), "ראש השנה");
    assert_eq!(Holiday::LagBaOmer.name(Locale::Hebrew), "ל״ג בעומר");
}

#[test]
fn calendar_service_delegates_to_table() {
    let calendar = HebrewCalendar::new(false);
    let yom_kippur = HebrewDate::new(5785, HebrewMonth::Tishrei, 10).unwrap();
    assert_eq!(calendar.holiday(&yom_kippur), Some(Holiday::YomKippur));
}
