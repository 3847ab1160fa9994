//! Festival and fast-day lookup for Hebrew dates.
//!
//! Fasts that would fall on Shabbat are postponed to Sunday, except
//! Ta'anit Esther, which is moved back to the preceding Thursday.

use chrono::Weekday;

use crate::hebrew::{is_leap_year, HebrewDate, HebrewMonth};
use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holiday {
    RoshHashana,
    TzomGedaliah,
    YomKippur,
    Sukkot,
    ShminiAtzeret,
    SimchatTorah,
    Chanukah,
    AsaraBeTevet,
    TuBiShvat,
    PurimKatan,
    TaanitEsther,
    Purim,
    ShushanPurim,
    Pesach,
    PesachSheni,
    LagBaOmer,
    Shavuot,
    TzomTammuz,
    TishaBeAv,
    TuBeAv,
}

impl Holiday {
    /// Display name in the given locale.
    pub fn name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::Hebrew => self.hebrew_name(),
            Locale::English => self.english_name(),
        }
    }

    fn hebrew_name(self) -> &'static str {
        match self {
            Holiday::RoshHashana => "ראש השנה",
            Holiday::TzomGedaliah => "צום גדליה",
            Holiday::YomKippur => "יום כיפור",
            Holiday::Sukkot => "סוכות",
            Holiday::ShminiAtzeret => "שמיני עצרת",
            Holiday::SimchatTorah => "שמחת תורה",
            Holiday::Chanukah => "חנוכה",
            Holiday::AsaraBeTevet => "עשרה בטבת",
            Holiday::TuBiShvat => "ט״ו בשבט",
            Holiday::PurimKatan => "פורים קטן",
            Holiday::TaanitEsther => "תענית אסתר",
            Holiday::Purim => "פורים",
            Holiday::ShushanPurim => "שושן פורים",
            Holiday::Pesach => "פסח",
            Holiday::PesachSheni => "פסח שני",
            Holiday::LagBaOmer => "ל״ג בעומר",
            Holiday::Shavuot => "שבועות",
            Holiday::TzomTammuz => "י״ז בתמוז",
            Holiday::TishaBeAv => "תשעה באב",
            Holiday::TuBeAv => "ט״ו באב",
        }
    }

    fn english_name(self) -> &'static str {
        match self {
            Holiday::RoshHashana => "Rosh Hashana",
            Holiday::TzomGedaliah => "Tzom Gedaliah",
            Holiday::YomKippur => "Yom Kippur",
            Holiday::Sukkot => "Sukkot",
            Holiday::ShminiAtzeret => "Shmini Atzeret",
            Holiday::SimchatTorah => "Simchat Torah",
            Holiday::Chanukah => "Chanukah",
            Holiday::AsaraBeTevet => "Asara BeTevet",
            Holiday::TuBiShvat => "Tu BiShvat",
            Holiday::PurimKatan => "Purim Katan",
            Holiday::TaanitEsther => "Ta'anit Esther",
            Holiday::Purim => "Purim",
            Holiday::ShushanPurim => "Shushan Purim",
            Holiday::Pesach => "Pesach",
            Holiday::PesachSheni => "Pesach Sheni",
            Holiday::LagBaOmer => "Lag BaOmer",
            Holiday::Shavuot => "Shavuot",
            Holiday::TzomTammuz => "Tzom Tammuz",
            Holiday::TishaBeAv => "Tisha BeAv",
            Holiday::TuBeAv => "Tu BeAv",
        }
    }
}

/// Resolve the holiday on `date`. Total: returns `None` on ordinary days.
pub fn holiday_on(date: &HebrewDate, israel: bool) -> Option<Holiday> {
    festival(date, israel).or_else(|| fast_day(date))
}

fn festival(date: &HebrewDate, israel: bool) -> Option<Holiday> {
    use HebrewMonth::*;

    let day = date.day();
    let holiday = match date.month() {
        Tishrei => match day {
            1 | 2 => Holiday::RoshHashana,
            10 => Holiday::YomKippur,
            15..=21 => Holiday::Sukkot,
            22 => Holiday::ShminiAtzeret,
            23 if !israel => Holiday::SimchatTorah,
            _ => return None,
        },
        Kislev | Tevet => return chanukah(date),
        Shevat if day == 15 => Holiday::TuBiShvat,
        AdarI if day == 14 => Holiday::PurimKatan,
        month if is_purim_month(date.year(), month) => match day {
            14 => Holiday::Purim,
            15 => Holiday::ShushanPurim,
            _ => return None,
        },
        Nisan => match day {
            15..=21 => Holiday::Pesach,
            22 if !israel => Holiday::Pesach,
            _ => return None,
        },
        Iyyar => match day {
            14 => Holiday::PesachSheni,
            18 => Holiday::LagBaOmer,
            _ => return None,
        },
        Sivan => match day {
            6 => Holiday::Shavuot,
            7 if !israel => Holiday::Shavuot,
            _ => return None,
        },
        Av if day == 15 => Holiday::TuBeAv,
        _ => return None,
    };
    Some(holiday)
}

/// Eight days from 25 Kislev, spilling into Tevet.
fn chanukah(date: &HebrewDate) -> Option<Holiday> {
    let first = HebrewDate::new(date.year(), HebrewMonth::Kislev, 25).ok()?;
    let offset = date.to_fixed() - first.to_fixed();
    (0..8).contains(&offset).then_some(Holiday::Chanukah)
}

fn fast_day(date: &HebrewDate) -> Option<Holiday> {
    use HebrewMonth::*;

    let shabbat = date.weekday() == Weekday::Sat;
    let sunday = date.weekday() == Weekday::Sun;
    let thursday = date.weekday() == Weekday::Thu;

    let holiday = match (date.month(), date.day()) {
        (Tishrei, 3) if !shabbat => Holiday::TzomGedaliah,
        (Tishrei, 4) if sunday => Holiday::TzomGedaliah,
        (Tevet, 10) => Holiday::AsaraBeTevet,
        (month, 13) if is_purim_month(date.year(), month) && !shabbat => Holiday::TaanitEsther,
        (month, 11) if is_purim_month(date.year(), month) && thursday => Holiday::TaanitEsther,
        (Tamuz, 17) if !shabbat => Holiday::TzomTammuz,
        (Tamuz, 18) if sunday => Holiday::TzomTammuz,
        (Av, 9) if !shabbat => Holiday::TishaBeAv,
        (Av, 10) if sunday => Holiday::TishaBeAv,
        _ => return None,
    };
    Some(holiday)
}

/// Adar in a common year, Adar II in a leap year.
fn is_purim_month(year: i32, month: HebrewMonth) -> bool {
    if is_leap_year(year) {
        month == HebrewMonth::AdarII
    } else {
        month == HebrewMonth::Adar
    }
}
