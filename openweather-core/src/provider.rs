use crate::{WeatherError, WeatherRecord};
use async_trait::async_trait;
use std::fmt::{self, Debug};

pub mod openweather;

/// Where to look up the current weather.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// Free-text place name, e.g. "Berlin" or "New York".
    City(String),
    /// Geographic coordinates in degrees. Not range checked.
    Coordinates { latitude: f64, longitude: f64 },
}

impl Location {
    pub fn city(name: impl Into<String>) -> Self {
        Location::City(name.into())
    }

    pub fn coordinates(latitude: f64, longitude: f64) -> Self {
        Location::Coordinates { latitude, longitude }
    }

    /// Reject locations that cannot produce a meaningful request.
    pub fn validate(&self) -> Result<(), WeatherError> {
        match self {
            Location::City(name) if name.is_empty() => Err(WeatherError::InvalidArgument(
                "City name cannot be empty".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Query parameters identifying this location, without the API key.
    ///
    /// Spaces in a city name become `+`; nothing else is escaped.
    pub fn query(&self) -> String {
        match self {
            Location::City(name) => format!("q={}", name.replace(' ', "+")),
            Location::Coordinates { latitude, longitude } => {
                format!("lat={latitude}&lon={longitude}")
            }
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::City(name) => f.write_str(name),
            Location::Coordinates { latitude, longitude } => write!(f, "{latitude},{longitude}"),
        }
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, location: &Location) -> Result<WeatherRecord, WeatherError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_query_replaces_spaces_only() {
        assert_eq!(Location::city("Berlin").query(), "q=Berlin");
        assert_eq!(Location::city("New York").query(), "q=New+York");
        assert_eq!(Location::city("São Paulo, BR").query(), "q=São+Paulo,+BR");
    }

    #[test]
    fn coordinates_query() {
        let loc = Location::coordinates(52.5244, 13.4105);
        assert_eq!(loc.query(), "lat=52.5244&lon=13.4105");
    }

    #[test]
    fn out_of_range_coordinates_pass_validation() {
        assert!(Location::coordinates(123.0, -500.0).validate().is_ok());
    }

    #[test]
    fn empty_city_is_invalid_argument() {
        let err = Location::city("").validate().unwrap_err();
        assert!(matches!(err, WeatherError::InvalidArgument(_)));
        assert!(err.to_string().contains("City name cannot be empty"));
    }

    #[test]
    fn display() {
        assert_eq!(Location::city("Berlin").to_string(), "Berlin");
        assert_eq!(Location::coordinates(1.5, -2.0).to_string(), "1.5,-2");
    }
}
