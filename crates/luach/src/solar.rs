//! Sunset and the Sabbath times derived from it.
//!
//! [`NoaaSolar`] implements the sunrise equation: the Julian date of solar
//! transit at the observer's longitude, corrected by the equation of center
//! and the equation of time, and the hour angle at which the sun's upper
//! limb touches the horizon (-0.833°, refraction included).

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use crate::config::{CalendarConfig, Location};
use crate::error::{LuachError, Result};
use crate::markup::Hook;

/// Julian date of the J2000.0 epoch.
const J2000: f64 = 2_451_545.0;
/// Julian date of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// Julian date at 0h UTC of fixed day 0 (0000-12-31).
const FIXED_DAY_ZERO_JD: f64 = 1_721_424.5;
const SECONDS_PER_DAY: f64 = 86_400.0;
const OBLIQUITY_DEG: f64 = 23.4397;
const SUNSET_ALTITUDE_DEG: f64 = -0.833;

/// The solar-position service consumed by the renderer.
pub trait SolarPosition {
    /// Local sunset on `date` at `location`.
    ///
    /// # Errors
    /// Returns `LuachError::ComputationFailure` when the sun does not set
    /// that day or the instant cannot be represented.
    fn sunset(&self, location: &Location, date: NaiveDate, timezone: Tz) -> Result<DateTime<Tz>>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoaaSolar;

impl SolarPosition for NoaaSolar {
    fn sunset(&self, location: &Location, date: NaiveDate, timezone: Tz) -> Result<DateTime<Tz>> {
        let jd_midnight = f64::from(date.num_days_from_ce()) + FIXED_DAY_ZERO_JD;
        let n = (jd_midnight - J2000 + 0.0008).ceil();

        // Mean solar noon at this longitude.
        let j_star = n - location.longitude / 360.0;

        let mean_anomaly = (357.5291 + 0.985_600_28 * j_star).rem_euclid(360.0);
        let m = mean_anomaly.to_radians();
        let center = 1.9148 * m.sin() + 0.0200 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin();
        let ecliptic_longitude = (mean_anomaly + center + 180.0 + 102.9372).rem_euclid(360.0);
        let lambda = ecliptic_longitude.to_radians();

        let transit = J2000 + j_star + 0.0053 * m.sin() - 0.0069 * (2.0 * lambda).sin();

        let sin_declination = lambda.sin() * OBLIQUITY_DEG.to_radians().sin();
        let cos_declination = sin_declination.asin().cos();
        let phi = location.latitude.to_radians();

        let cos_hour_angle = (SUNSET_ALTITUDE_DEG.to_radians().sin() - phi.sin() * sin_declination)
            / (phi.cos() * cos_declination);
        if !cos_hour_angle.is_finite() || !(-1.0..=1.0).contains(&cos_hour_angle) {
            return Err(LuachError::ComputationFailure(format!(
                "the sun does not set at {} on {}",
                location.name, date
            )));
        }

        let hour_angle = cos_hour_angle.acos().to_degrees();
        let jd_sunset = transit + hour_angle / 360.0;
        let unix_seconds = ((jd_sunset - UNIX_EPOCH_JD) * SECONDS_PER_DAY).round() as i64;

        let utc = Utc.timestamp_opt(unix_seconds, 0).single().ok_or_else(|| {
            LuachError::ComputationFailure(format!(
                "sunset on {} is not a representable instant",
                date
            ))
        })?;
        Ok(utc.with_timezone(&timezone))
    }
}

/// Which Sabbath boundary a day carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SabbathMarker {
    /// Friday: before sunset.
    CandleLighting,
    /// Saturday: after sunset.
    Havdalah,
}

impl SabbathMarker {
    /// Only Fridays and Saturdays carry a marker.
    pub fn for_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Fri => Some(SabbathMarker::CandleLighting),
            Weekday::Sat => Some(SabbathMarker::Havdalah),
            _ => None,
        }
    }

    pub fn hook(self) -> Hook {
        match self {
            SabbathMarker::CandleLighting => Hook::CandleLighting,
            SabbathMarker::Havdalah => Hook::Havdalah,
        }
    }
}

/// A computed Sabbath time for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SabbathTime {
    pub marker: SabbathMarker,
    pub at: DateTime<Tz>,
}

impl SabbathTime {
    /// Zero-padded 24-hour local time, e.g. "19:18".
    pub fn hhmm(&self) -> String {
        self.at.format("%H:%M").to_string()
    }
}

/// Applies the configured offsets to sunsets from a [`SolarPosition`] service.
#[derive(Debug, Clone)]
pub struct SolarTimeCalculator<'c, S> {
    config: &'c CalendarConfig,
    solar: &'c S,
}

impl<'c, S: SolarPosition> SolarTimeCalculator<'c, S> {
    pub fn new(config: &'c CalendarConfig, solar: &'c S) -> Self {
        SolarTimeCalculator { config, solar }
    }

    /// The Sabbath time for `date`, or `Ok(None)` on Sunday through Thursday.
    ///
    /// # Errors
    /// Propagates `LuachError::ComputationFailure` from the solar service.
    pub fn sabbath_time(&self, date: NaiveDate) -> Result<Option<SabbathTime>> {
        let Some(marker) = SabbathMarker::for_weekday(date.weekday()) else {
            return Ok(None);
        };

        let sunset = self
            .solar
            .sunset(&self.config.location, date, self.config.timezone)?;
        let at = match marker {
            SabbathMarker::CandleLighting => sunset - self.config.candle_lighting_offset,
            SabbathMarker::Havdalah => sunset + self.config.havdalah_offset,
        };

        Ok(Some(SabbathTime { marker, at }))
    }
}
