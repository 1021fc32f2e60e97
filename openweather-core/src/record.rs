use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

use crate::{
    error::WeatherError,
    units::{SpeedUnit, TempUnit, TimeFormat},
};

/// Current weather for one location, as reported by OpenWeatherMap.
///
/// Temperatures are stored in Kelvin and wind speed in meters per second;
/// accessors convert on read and never touch the stored values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherRecord {
    longitude: f64,
    latitude: f64,
    city: String,
    country: String,
    condition: String,
    description: String,
    temperature: f64,
    feels_like: f64,
    pressure: i64,
    humidity: i64,
    wind_speed: f64,
    cloudiness: f64,
    sunrise: i64,
    sunset: i64,
}

impl WeatherRecord {
    /// Build a record from already known values, e.g. for offline use.
    ///
    /// `temperature` and `feels_like` are in Kelvin, `wind_speed` in m/s.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        longitude: f64,
        latitude: f64,
        city: impl Into<String>,
        country: impl Into<String>,
        condition: impl Into<String>,
        description: impl Into<String>,
        temperature: f64,
        feels_like: f64,
        pressure: i64,
        humidity: i64,
        wind_speed: f64,
        cloudiness: f64,
        sunrise: i64,
        sunset: i64,
    ) -> Self {
        Self {
            longitude,
            latitude,
            city: city.into(),
            country: country.into(),
            condition: condition.into(),
            description: description.into(),
            temperature,
            feels_like,
            pressure,
            humidity,
            wind_speed,
            cloudiness,
            sunrise,
            sunset,
        }
    }

    /// Parse a "current weather" response body.
    pub fn from_json(body: &str) -> Result<Self, WeatherError> {
        let parsed: OwCurrentResponse = serde_json::from_str(body)?;
        Self::try_from(parsed)
    }

    /// Same as [`WeatherRecord::from_json`] for an already decoded document.
    pub fn from_value(value: serde_json::Value) -> Result<Self, WeatherError> {
        let parsed: OwCurrentResponse = serde_json::from_value(value)?;
        Self::try_from(parsed)
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// ISO 3166 country code.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Short weather category, e.g. "Clear" or "Rain".
    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn temperature(&self, unit: TempUnit) -> f64 {
        TempUnit::Kelvin.convert(self.temperature, unit)
    }

    pub fn feels_like(&self, unit: TempUnit) -> f64 {
        TempUnit::Kelvin.convert(self.feels_like, unit)
    }

    /// Atmospheric pressure in hPa.
    pub fn pressure(&self) -> i64 {
        self.pressure
    }

    /// Relative humidity in percent.
    pub fn humidity(&self) -> i64 {
        self.humidity
    }

    pub fn wind_speed(&self, unit: SpeedUnit) -> f64 {
        SpeedUnit::Mps.convert(self.wind_speed, unit)
    }

    /// Cloud cover in percent.
    pub fn cloudiness(&self) -> f64 {
        self.cloudiness
    }

    /// Sunrise as Unix seconds.
    pub fn sunrise(&self) -> i64 {
        self.sunrise
    }

    /// Sunset as Unix seconds.
    pub fn sunset(&self) -> i64 {
        self.sunset
    }

    /// Sunrise rendered in the local time zone of this process.
    pub fn sunrise_formatted(&self, format: TimeFormat) -> Option<String> {
        format.format_epoch(self.sunrise)
    }

    /// Sunset rendered in the local time zone of this process.
    pub fn sunset_formatted(&self, format: TimeFormat) -> Option<String> {
        format.format_epoch(self.sunset)
    }
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lon: f64,
    lat: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    pressure: i64,
    humidity: i64,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwClouds {
    all: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    coord: OwCoord,
    sys: OwSys,
    weather: Vec<OwWeather>,
    main: OwMain,
    wind: OwWind,
    clouds: OwClouds,
    name: String,
}

impl TryFrom<OwCurrentResponse> for WeatherRecord {
    type Error = WeatherError;

    fn try_from(parsed: OwCurrentResponse) -> Result<Self, Self::Error> {
        let weather = parsed.weather.into_iter().next().ok_or_else(|| {
            WeatherError::MalformedResponse("`weather` list is empty".to_string())
        })?;

        Ok(WeatherRecord {
            longitude: parsed.coord.lon,
            latitude: parsed.coord.lat,
            city: parsed.name,
            country: parsed.sys.country,
            condition: weather.main,
            description: weather.description,
            temperature: parsed.main.temp,
            feels_like: parsed.main.feels_like,
            pressure: parsed.main.pressure,
            humidity: parsed.main.humidity,
            wind_speed: parsed.wind.speed,
            cloudiness: parsed.clouds.all,
            sunrise: parsed.sys.sunrise,
            sunset: parsed.sys.sunset,
        })
    }
}
