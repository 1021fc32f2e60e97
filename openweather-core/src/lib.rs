//! Client library for the OpenWeatherMap current weather API.
//!
//! This crate defines:
//! - An async client querying current weather by city name or coordinates
//! - An immutable weather record with unit-converting accessors
//! - Temperature and speed units, and sunrise/sunset time formatting
//!
//! ```no_run
//! use openweather_core::{OpenWeatherClient, TempUnit};
//!
//! # async fn run() -> Result<(), openweather_core::WeatherError> {
//! let client = OpenWeatherClient::new("YOUR_API_KEY");
//! let weather = client.query_city("Berlin").await?;
//! println!("{} {}", weather.temperature(TempUnit::Celsius), TempUnit::Celsius);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod record;
pub mod units;

pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use error::WeatherError;
pub use provider::{
    Location, WeatherProvider,
    openweather::{OpenWeatherClient, query_city, query_coordinates},
};
pub use record::WeatherRecord;
pub use units::{SpeedUnit, TempUnit, TimeFormat};
