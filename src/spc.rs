//! Parser for SPC-format sounding text files.
//!
//! The format, as served by the Storm Prediction Center sounding archive, is a
//! `%TITLE%` marker followed by a `<station> <yymmdd/hhmm>` header line, a
//! column description, and comma delimited data rows between `%RAW%` and
//! `%END%`:
//!
//! ```text
//! %TITLE%
//!  LCH   181025/1200
//!
//!    LEVEL       HGHT       TEMP       DWPT       WDIR       WSPD
//! -------------------------------------------------------------------
//! %RAW%
//!  1000.00,    100.00,    25.00,    21.00,    150.00,    10.00
//! %END%
//! ```
//!
//! The fields are pressure (hPa), height (m), temperature (&deg;C), dew point
//! (&deg;C), wind direction (deg) and wind speed (kt), with `-9999` marking a
//! missing value.

use crate::{
    error::{Result, ThermoError},
    sounding::Sounding,
    units::{Celsius, HectoPascal, Knots, Meters},
};
use chrono::NaiveDateTime;
use optional::Optioned;

/// Sentinel used by the file format for missing data.
const MISSING_SENTINEL: f64 = -9999.0;

const NUM_FIELDS: usize = 6;

/// Parse an SPC-format sounding text file.
///
/// Rows with a missing pressure are dropped, since pressure is the vertical
/// coordinate; any other missing field is carried through as a missing value.
/// A malformed data row, or a file with no data rows at all, is a
/// [`ThermoError::ParseError`] carrying the offending line number.
pub fn parse_spc(text: &str) -> Result<Sounding> {
    let mut station_id: Option<String> = None;
    let mut valid_time: Option<NaiveDateTime> = None;

    let mut pressure: Vec<Optioned<HectoPascal>> = vec![];
    let mut height: Vec<Optioned<Meters>> = vec![];
    let mut temperature: Vec<Optioned<Celsius>> = vec![];
    let mut dew_point: Vec<Optioned<Celsius>> = vec![];
    let mut wind_direction: Vec<Optioned<f64>> = vec![];
    let mut wind_speed: Vec<Optioned<Knots>> = vec![];

    let mut in_raw = false;
    let mut next_is_title = false;
    let mut last_line = 0;

    for (line_no, line) in text.lines().enumerate() {
        let line_no = line_no + 1;
        last_line = line_no;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match trimmed {
            "%TITLE%" => {
                next_is_title = true;
                continue;
            }
            "%RAW%" => {
                in_raw = true;
                continue;
            }
            "%END%" => {
                in_raw = false;
                continue;
            }
            _ => {}
        }

        if next_is_title {
            next_is_title = false;

            let mut parts = trimmed.split_whitespace();
            station_id = parts.next().map(str::to_owned);
            valid_time = parts
                .next()
                .and_then(|s| NaiveDateTime::parse_from_str(s, "%y%m%d/%H%M").ok());
            continue;
        }

        if !in_raw {
            // Column headers and other preamble.
            continue;
        }

        let fields = parse_row(trimmed, line_no)?;

        // No pressure, no level.
        if fields[0].is_none() {
            continue;
        }

        pressure.push(Optioned::from(fields[0].map(HectoPascal)));
        height.push(Optioned::from(fields[1].map(Meters)));
        temperature.push(Optioned::from(fields[2].map(Celsius)));
        dew_point.push(Optioned::from(fields[3].map(Celsius)));
        wind_direction.push(Optioned::from(fields[4]));
        wind_speed.push(Optioned::from(fields[5].map(Knots)));
    }

    if pressure.is_empty() {
        return Err(ThermoError::ParseError { line: last_line });
    }

    Ok(Sounding::new()
        .with_station_id(station_id)
        .with_valid_time(valid_time)
        .with_pressure_profile(pressure)
        .with_height_profile(height)
        .with_temperature_profile(temperature)
        .with_dew_point_profile(dew_point)
        .with_wind_direction_profile(wind_direction)
        .with_wind_speed_profile(wind_speed))
}

fn parse_row(line: &str, line_no: usize) -> Result<[Option<f64>; NUM_FIELDS]> {
    let mut fields = [None; NUM_FIELDS];
    let mut raw_fields = line.split(',');

    for slot in fields.iter_mut() {
        let raw = raw_fields
            .next()
            .ok_or(ThermoError::ParseError { line: line_no })?
            .trim();
        let val: f64 = raw
            .parse()
            .map_err(|_| ThermoError::ParseError { line: line_no })?;

        *slot = if val <= MISSING_SENTINEL + 0.5 {
            None
        } else {
            Some(val)
        };
    }

    if raw_fields.next().is_some() {
        return Err(ThermoError::ParseError { line: line_no });
    }

    Ok(fields)
}
