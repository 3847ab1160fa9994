//! Immutable rendering configuration: location, timezone, offsets, locale.

use chrono::Duration;
use chrono_tz::Tz;

use crate::error::{LuachError, Result};
use crate::locale::Locale;

/// Default candle-lighting offset before sunset, in minutes.
pub const DEFAULT_CANDLE_LIGHTING_MINUTES: i64 = 30;
/// Default havdalah offset after sunset, in minutes.
pub const DEFAULT_HAVDALAH_MINUTES: i64 = 40;

/// A named point on the globe. Latitude north-positive, longitude east-positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Location {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Tel Aviv.
    pub fn tel_aviv() -> Self {
        Location::new("Tel Aviv", 32.109333, 34.855499)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(LuachError::InvalidArgument(format!(
                "latitude {} is outside -90..=90",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(LuachError::InvalidArgument(format!(
                "longitude {} is outside -180..=180",
                self.longitude
            )));
        }
        Ok(())
    }
}

/// Everything a render needs besides the month and the events.
///
/// Passed into the renderer explicitly so renders for different places can
/// run side by side in one process.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    pub location: Location,
    pub timezone: Tz,
    /// Subtracted from Friday's sunset.
    pub candle_lighting_offset: Duration,
    /// Added to Saturday's sunset.
    pub havdalah_offset: Duration,
    pub locale: Locale,
    /// Use the Land of Israel holiday schedule instead of the diaspora one.
    pub israel: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            location: Location::tel_aviv(),
            timezone: chrono_tz::Asia::Jerusalem,
            candle_lighting_offset: Duration::minutes(DEFAULT_CANDLE_LIGHTING_MINUTES),
            havdalah_offset: Duration::minutes(DEFAULT_HAVDALAH_MINUTES),
            locale: Locale::default(),
            israel: false,
        }
    }
}

impl CalendarConfig {
    pub fn new(location: Location, timezone: Tz) -> Self {
        CalendarConfig {
            location,
            timezone,
            ..CalendarConfig::default()
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_israel(mut self, israel: bool) -> Self {
        self.israel = israel;
        self
    }

    pub fn with_offsets(mut self, candle_lighting: Duration, havdalah: Duration) -> Self {
        self.candle_lighting_offset = candle_lighting;
        self.havdalah_offset = havdalah;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.location.validate()
    }
}

/// Parse an IANA timezone identifier.
pub fn parse_timezone(timezone: &str) -> Result<Tz> {
    timezone
        .parse()
        .map_err(|_| LuachError::InvalidTimezone(timezone.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_tel_aviv_in_hebrew() {
        let config = CalendarConfig::default();
        assert_eq!(config.location.name, "Tel Aviv");
        assert_eq!(config.timezone, chrono_tz::Asia::Jerusalem);
        assert_eq!(config.candle_lighting_offset, Duration::minutes(30));
        assert_eq!(config.havdalah_offset, Duration::minutes(40));
        assert_eq!(config.locale, Locale::Hebrew);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let config = CalendarConfig::new(Location::new("Nowhere", 91.0, 0.0), chrono_tz::UTC);
        assert!(matches!(
            config.validate(),
            Err(LuachError::InvalidArgument(_))
        ));

        let config = CalendarConfig::new(Location::new("Nowhere", 0.0, f64::NAN), chrono_tz::UTC);
        assert!(matches!(
            config.validate(),
            Err(LuachError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        assert_eq!(
            parse_timezone("Mars/Olympus_Mons"),
            Err(LuachError::InvalidTimezone("Mars/Olympus_Mons".to_string()))
        );
        assert_eq!(parse_timezone("Asia/Jerusalem"), Ok(chrono_tz::Asia::Jerusalem));
    }
}
