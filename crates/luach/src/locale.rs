//! Localized labels: weekday names, month names and numerals.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LuachError;
use crate::hebrew::{HebrewDate, HebrewMonth};
use crate::numerals::hebrew_numeral;

/// Language used for every label in the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[serde(alias = "he")]
    Hebrew,
    #[serde(alias = "en")]
    English,
}

const HEBREW_WEEKDAYS: [&str; 7] = ["ראשון", "שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת"];
const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const HEBREW_GREGORIAN_MONTHS: [&str; 12] = [
    "ינואר",
    "פברואר",
    "מרץ",
    "אפריל",
    "מאי",
    "יוני",
    "יולי",
    "אוגוסט",
    "ספטמבר",
    "אוקטובר",
    "נובמבר",
    "דצמבר",
];
const ENGLISH_GREGORIAN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Locale {
    /// Weekday names, Sunday first.
    pub fn weekday_names(self) -> [&'static str; 7] {
        match self {
            Locale::Hebrew => HEBREW_WEEKDAYS,
            Locale::English => ENGLISH_WEEKDAYS,
        }
    }

    /// Name of Gregorian month `month` (1..=12).
    pub fn gregorian_month_name(self, month: u32) -> Option<&'static str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        match self {
            Locale::Hebrew => HEBREW_GREGORIAN_MONTHS.get(index).copied(),
            Locale::English => ENGLISH_GREGORIAN_MONTHS.get(index).copied(),
        }
    }

    pub fn hebrew_month_name(self, month: HebrewMonth) -> &'static str {
        match self {
            Locale::Hebrew => match month {
                HebrewMonth::Nisan => "ניסן",
                HebrewMonth::Iyyar => "אייר",
                HebrewMonth::Sivan => "סיון",
                HebrewMonth::Tamuz => "תמוז",
                HebrewMonth::Av => "אב",
                HebrewMonth::Elul => "אלול",
                HebrewMonth::Tishrei => "תשרי",
                HebrewMonth::Cheshvan => "חשון",
                HebrewMonth::Kislev => "כסלו",
                HebrewMonth::Tevet => "טבת",
                HebrewMonth::Shevat => "שבט",
                HebrewMonth::Adar => "אדר",
                HebrewMonth::AdarI => "אדר א׳",
                HebrewMonth::AdarII => "אדר ב׳",
            },
            Locale::English => match month {
                HebrewMonth::Nisan => "Nisan",
                HebrewMonth::Iyyar => "Iyyar",
                HebrewMonth::Sivan => "Sivan",
                HebrewMonth::Tamuz => "Tamuz",
                HebrewMonth::Av => "Av",
                HebrewMonth::Elul => "Elul",
                HebrewMonth::Tishrei => "Tishrei",
                HebrewMonth::Cheshvan => "Cheshvan",
                HebrewMonth::Kislev => "Kislev",
                HebrewMonth::Tevet => "Tevet",
                HebrewMonth::Shevat => "Sh'vat",
                HebrewMonth::Adar => "Adar",
                HebrewMonth::AdarI => "Adar I",
                HebrewMonth::AdarII => "Adar II",
            },
        }
    }

    /// Day-of-month label for a Hebrew date (ט״ו or 15).
    pub fn hebrew_day(self, date: &HebrewDate) -> String {
        match self {
            Locale::Hebrew => hebrew_numeral(u32::from(date.day())),
            Locale::English => date.day().to_string(),
        }
    }

    /// Year label for a Hebrew date (תשפ״ד or 5784).
    pub fn hebrew_year(self, date: &HebrewDate) -> String {
        match self {
            Locale::Hebrew => hebrew_numeral(date.year().unsigned_abs()),
            Locale::English => date.year().to_string(),
        }
    }
}

impl FromStr for Locale {
    type Err = LuachError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "he" | "hebrew" => Ok(Locale::Hebrew),
            "en" | "english" => Ok(Locale::English),
            other => Err(LuachError::InvalidArgument(format!(
                "unknown locale '{}', expected 'he' or 'en'",
                other
            ))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Hebrew => f.write_str("he"),
            Locale::English => f.write_str("en"),
        }
    }
}
