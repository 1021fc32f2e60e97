//! Temperature and speed units, and time formatting for epoch timestamps.
//!
//! Conversions are pure: converting a unit to itself returns the input
//! untouched, every other conversion is rounded to two decimal places.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

use crate::error::WeatherError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "°C",
            TempUnit::Fahrenheit => "°F",
            TempUnit::Kelvin => "K",
        }
    }

    pub const fn all() -> &'static [TempUnit] {
        &[TempUnit::Celsius, TempUnit::Fahrenheit, TempUnit::Kelvin]
    }

    /// Convert `value`, expressed in `self`, into `target`.
    pub fn convert(self, value: f64, target: TempUnit) -> f64 {
        use TempUnit::*;

        let converted = match (self, target) {
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => return value,
            (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
            (Celsius, Kelvin) => value + 273.15,
            (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
            (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
            (Kelvin, Celsius) => value - 273.15,
            (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
        };

        round2(converted)
    }
}

impl fmt::Display for TempUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<&str> for TempUnit {
    type Error = WeatherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "celsius" | "c" | "°c" => Ok(TempUnit::Celsius),
            "fahrenheit" | "f" | "°f" => Ok(TempUnit::Fahrenheit),
            "kelvin" | "k" => Ok(TempUnit::Kelvin),
            _ => Err(WeatherError::InvalidUnit(format!(
                "unknown temperature unit '{value}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnit {
    /// Meters per second.
    Mps,
    /// Kilometers per hour.
    Kph,
    /// Miles per hour.
    Mph,
}

impl SpeedUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            SpeedUnit::Mps => "m/s",
            SpeedUnit::Kph => "km/h",
            SpeedUnit::Mph => "mph",
        }
    }

    pub const fn all() -> &'static [SpeedUnit] {
        &[SpeedUnit::Mps, SpeedUnit::Kph, SpeedUnit::Mph]
    }

    /// Convert `value`, expressed in `self`, into `target`.
    pub fn convert(self, value: f64, target: SpeedUnit) -> f64 {
        use SpeedUnit::*;

        let converted = match (self, target) {
            (Mps, Mps) | (Kph, Kph) | (Mph, Mph) => return value,
            (Mps, Kph) => value * 3.6,
            (Mps, Mph) => value * 2.23694,
            (Kph, Mps) => value / 3.6,
            (Kph, Mph) => value / 1.60934,
            (Mph, Mps) => value / 2.23694,
            (Mph, Kph) => value * 1.60934,
        };

        round2(converted)
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<&str> for SpeedUnit {
    type Error = WeatherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "mps" | "m/s" => Ok(SpeedUnit::Mps),
            "kph" | "kmh" | "km/h" => Ok(SpeedUnit::Kph),
            "mph" => Ok(SpeedUnit::Mph),
            _ => Err(WeatherError::InvalidUnit(format!("unknown speed unit '{value}'"))),
        }
    }
}

/// Patterns for rendering Unix timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeFormat {
    #[default]
    HhMmSs,
}

impl TimeFormat {
    pub fn pattern(&self) -> &'static str {
        match self {
            TimeFormat::HhMmSs => "HH:mm:ss",
        }
    }

    fn strftime(&self) -> &'static str {
        match self {
            TimeFormat::HhMmSs => "%H:%M:%S",
        }
    }

    /// Render epoch seconds in the local time zone of this process, not the
    /// time zone of the place the timestamp belongs to.
    ///
    /// Returns `None` when the timestamp is outside chrono's range.
    pub fn format_epoch(&self, secs: i64) -> Option<String> {
        let millis = secs.checked_mul(1000)?;
        let local = Local.timestamp_millis_opt(millis).single()?;

        Some(local.format(self.strftime()).to_string())
    }
}

/// Round half away from zero to two decimal places.
///
/// The shift is done on the shortest decimal representation of `value`, so a
/// computed `1.005` becomes `1.01` even though its binary value sits just
/// below the tie.
fn round2(value: f64) -> f64 {
    let shifted: f64 = format!("{value}e2").parse().unwrap_or(value * 100.0);
    shifted.round() / 100.0
}
