//! Data type for a parsed atmospheric sounding.

use crate::units::{Celsius, HectoPascal, Knots, Meters};
use chrono::NaiveDateTime;
use optional::Optioned;

/// An atmospheric sounding: parallel profiles of the observed variables.
///
/// The profiles are stored in parallel vectors with one entry per level, from
/// the bottom of the sounding up. A variable missing at a single level is a
/// missing value; a variable missing entirely is an empty vector. The pressure
/// profile is the vertical coordinate and determines the number of levels.
#[derive(Clone, Debug, Default)]
pub struct Sounding {
    // Description of the source of the sounding.
    source: Option<String>,

    // Station metadata.
    station_id: Option<String>,
    valid_time: Option<NaiveDateTime>,

    // Profiles.
    pressure: Vec<Optioned<HectoPascal>>,
    height: Vec<Optioned<Meters>>,
    temperature: Vec<Optioned<Celsius>>,
    dew_point: Vec<Optioned<Celsius>>,
    wind_direction: Vec<Optioned<f64>>,
    wind_speed: Vec<Optioned<Knots>>,
}

/// A copy of one level of the sounding data.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataRow {
    /// Pressure in hPa.
    pub pressure: Optioned<HectoPascal>,
    /// Height in meters.
    pub height: Optioned<Meters>,
    /// Temperature in &deg;C.
    pub temperature: Optioned<Celsius>,
    /// Dew point in &deg;C.
    pub dew_point: Optioned<Celsius>,
    /// Wind direction in degrees.
    pub wind_direction: Optioned<f64>,
    /// Wind speed in knots.
    pub wind_speed: Optioned<Knots>,
}

impl Sounding {
    /// Create a new sounding with no data. This is a proxy for default with a
    /// clearer name.
    #[inline]
    pub fn new() -> Self {
        Sounding::default()
    }

    /// Builder method for a source description.
    #[inline]
    pub fn with_source_description<S>(mut self, desc: S) -> Self
    where
        Option<String>: From<S>,
    {
        self.source = Option::from(desc);
        self
    }

    /// Retrieve the source description.
    #[inline]
    pub fn source_description(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.as_ref())
    }

    /// Builder method for the station identifier.
    #[inline]
    pub fn with_station_id<S>(mut self, station_id: S) -> Self
    where
        Option<String>: From<S>,
    {
        self.station_id = Option::from(station_id);
        self
    }

    /// Get the station identifier.
    #[inline]
    pub fn station_id(&self) -> Option<&str> {
        self.station_id.as_ref().map(|s| s.as_ref())
    }

    /// Builder method for the valid time.
    #[inline]
    pub fn with_valid_time<T>(mut self, valid_time: T) -> Self
    where
        Option<NaiveDateTime>: From<T>,
    {
        self.valid_time = Option::from(valid_time);
        self
    }

    /// Get the valid time.
    #[inline]
    pub fn valid_time(&self) -> Option<NaiveDateTime> {
        self.valid_time
    }

    /// Builder method for the pressure profile.
    #[inline]
    pub fn with_pressure_profile(self, profile: Vec<Optioned<HectoPascal>>) -> Self {
        Self {
            pressure: profile,
            ..self
        }
    }

    /// Get the pressure profile.
    #[inline]
    pub fn pressure_profile(&self) -> &[Optioned<HectoPascal>] {
        &self.pressure
    }

    /// Builder method for the height profile.
    #[inline]
    pub fn with_height_profile(self, profile: Vec<Optioned<Meters>>) -> Self {
        Self {
            height: profile,
            ..self
        }
    }

    /// Get the height profile.
    #[inline]
    pub fn height_profile(&self) -> &[Optioned<Meters>] {
        &self.height
    }

    /// Builder method for the temperature profile.
    #[inline]
    pub fn with_temperature_profile(self, profile: Vec<Optioned<Celsius>>) -> Self {
        Self {
            temperature: profile,
            ..self
        }
    }

    /// Get the temperature profile.
    #[inline]
    pub fn temperature_profile(&self) -> &[Optioned<Celsius>] {
        &self.temperature
    }

    /// Builder method for the dew point profile.
    #[inline]
    pub fn with_dew_point_profile(self, profile: Vec<Optioned<Celsius>>) -> Self {
        Self {
            dew_point: profile,
            ..self
        }
    }

    /// Get the dew point profile.
    #[inline]
    pub fn dew_point_profile(&self) -> &[Optioned<Celsius>] {
        &self.dew_point
    }

    /// Builder method for the wind direction profile, in degrees.
    #[inline]
    pub fn with_wind_direction_profile(self, profile: Vec<Optioned<f64>>) -> Self {
        Self {
            wind_direction: profile,
            ..self
        }
    }

    /// Get the wind direction profile, in degrees.
    #[inline]
    pub fn wind_direction_profile(&self) -> &[Optioned<f64>] {
        &self.wind_direction
    }

    /// Builder method for the wind speed profile.
    #[inline]
    pub fn with_wind_speed_profile(self, profile: Vec<Optioned<Knots>>) -> Self {
        Self {
            wind_speed: profile,
            ..self
        }
    }

    /// Get the wind speed profile.
    #[inline]
    pub fn wind_speed_profile(&self) -> &[Optioned<Knots>] {
        &self.wind_speed
    }

    /// Number of levels in the sounding.
    #[inline]
    pub fn len(&self) -> usize {
        self.pressure.len()
    }

    /// Whether the sounding holds any levels at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pressure.is_empty()
    }

    /// Get a copy of one level, or `None` when the index is out of bounds.
    pub fn data_row(&self, idx: usize) -> Option<DataRow> {
        if idx >= self.pressure.len() {
            return None;
        }

        fn get<T: optional::Noned + Copy>(profile: &[Optioned<T>], idx: usize) -> Optioned<T> {
            profile.get(idx).copied().unwrap_or_else(optional::none)
        }

        Some(DataRow {
            pressure: get(&self.pressure, idx),
            height: get(&self.height, idx),
            temperature: get(&self.temperature, idx),
            dew_point: get(&self.dew_point, idx),
            wind_direction: get(&self.wind_direction, idx),
            wind_speed: get(&self.wind_speed, idx),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use optional::{none, some};

    #[test]
    fn data_row_fills_short_profiles_with_missing_values() {
        let snd = Sounding::new()
            .with_pressure_profile(vec![some(HectoPascal(1000.0)), some(HectoPascal(850.0))])
            .with_temperature_profile(vec![some(Celsius(20.0)), none()]);

        assert_eq!(snd.len(), 2);

        let row = snd.data_row(0).unwrap();
        assert!(row.pressure.is_some());
        assert!(row.temperature.is_some());
        // The height profile is entirely absent.
        assert!(row.height.is_none());

        let row = snd.data_row(1).unwrap();
        assert!(row.temperature.is_none());

        assert!(snd.data_row(2).is_none());
    }

    #[test]
    fn metadata_builders_round_trip() {
        let snd = Sounding::new()
            .with_station_id("LCH".to_owned())
            .with_source_description("test sounding".to_owned());

        assert_eq!(snd.station_id(), Some("LCH"));
        assert_eq!(snd.source_description(), Some("test sounding"));
        assert!(snd.valid_time().is_none());
    }
}
