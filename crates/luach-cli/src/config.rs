//! TOML configuration file for the `luach` CLI.
//!
//! ```toml
//! locale = "en"
//! israel = false
//! timezone = "Asia/Jerusalem"
//!
//! [location]
//! name = "Jerusalem"
//! latitude = 31.7683
//! longitude = 35.2137
//!
//! [offsets]
//! candle_lighting_minutes = 40
//! havdalah_minutes = 40
//! ```
//!
//! Every field is optional; missing ones fall back to the Tel Aviv defaults.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Duration;
use luach::config::parse_timezone;
use luach::{CalendarConfig, Locale, Location};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default)]
    pub israel: Option<bool>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub location: Option<LocationToml>,
    #[serde(default)]
    pub offsets: OffsetsToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    #[serde(default = "default_location_name")]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OffsetsToml {
    pub candle_lighting_minutes: Option<i64>,
    pub havdalah_minutes: Option<i64>,
}

fn default_location_name() -> String {
    "Custom location".to_string()
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Overlay the file's values on the default configuration.
    pub fn into_config(self) -> Result<CalendarConfig> {
        let mut config = CalendarConfig::default();

        if let Some(location) = self.location {
            config.location = Location::new(location.name, location.latitude, location.longitude);
        }
        if let Some(timezone) = self.timezone {
            config.timezone = parse_timezone(&timezone)?;
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(israel) = self.israel {
            config.israel = israel;
        }
        if let Some(minutes) = self.offsets.candle_lighting_minutes {
            config.candle_lighting_offset = Duration::minutes(minutes);
        }
        if let Some(minutes) = self.offsets.havdalah_minutes {
            config.havdalah_offset = Duration::minutes(minutes);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = ConfigFile::parse("").unwrap().into_config().unwrap();
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn full_file_overrides_everything() {
        let config = ConfigFile::parse(
            r#"
            locale = "en"
            israel = true
            timezone = "Europe/London"

            [location]
            name = "London"
            latitude = 51.5074
            longitude = -0.1278

            [offsets]
            candle_lighting_minutes = 18
            havdalah_minutes = 50
            "#,
        )
        .unwrap()
        .into_config()
        .unwrap();

        assert_eq!(config.locale, Locale::English);
        assert!(config.israel);
        assert_eq!(config.timezone, chrono_tz::Europe::London);
        assert_eq!(config.location.name, "London");
        assert_eq!(config.candle_lighting_offset, Duration::minutes(18));
        assert_eq!(config.havdalah_offset, Duration::minutes(50));
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(ConfigFile::parse("colour = \"blue\"").is_err());
    }

    #[test]
    fn bad_timezone_is_rejected() {
        let file = ConfigFile::parse("timezone = \"Mars/Olympus_Mons\"").unwrap();
        let err = file.into_config().unwrap_err();
        assert!(err.to_string().contains("Invalid timezone"));
    }

    #[test]
    fn bad_latitude_is_rejected() {
        let file = ConfigFile::parse("[location]\nlatitude = 100.0\nlongitude = 0.0").unwrap();
        assert!(file.into_config().is_err());
    }
}
