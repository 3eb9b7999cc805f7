//! Element-wise evaluation of the formulas over arrays of levels and over two
//! dimensional temperature-pressure meshes.
//!
//! The scalar functions in [`crate::formulas`] have no cross-element
//! dependencies, so array evaluation is a plain element-wise map. Parallel
//! slices must have equal lengths; a mismatch is a
//! [`ThermoError::ShapeError`]. A `DomainError` at any element aborts the
//! evaluation with no partial result, the same propagation policy as the
//! scalar functions.

use crate::{
    error::{Result, ThermoError},
    formulas,
    units::{Celsius, HectoPascal, Kelvin},
};
use itertools::izip;

#[inline]
fn check_shape(expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(ThermoError::ShapeError { expected, found })
    }
}

/// Saturation mixing ratio at each level, in kg/kg.
pub fn sat_mixing_ratio_profile(
    pressure: &[HectoPascal],
    temperature: &[Celsius],
) -> Result<Vec<f64>> {
    check_shape(pressure.len(), temperature.len())?;

    izip!(pressure, temperature)
        .map(|(&p, &t)| formulas::sat_mixing_ratio(p, t))
        .collect()
}

/// Relative humidity in percent at each level.
pub fn relative_humidity_profile(
    temperature: &[Celsius],
    pressure: &[HectoPascal],
    mixing_ratio: &[f64],
) -> Result<Vec<f64>> {
    check_shape(temperature.len(), pressure.len())?;
    check_shape(temperature.len(), mixing_ratio.len())?;

    izip!(temperature, pressure, mixing_ratio)
        .map(|(&t, &p, &w)| formulas::relative_humidity(t, p, w))
        .collect()
}

/// Temperature along the dry adiabat `theta` at each pressure, in Kelvin.
pub fn dry_adiabat(
    theta: Kelvin,
    pressure: &[HectoPascal],
    p0: HectoPascal,
) -> Result<Vec<Kelvin>> {
    pressure
        .iter()
        .map(|&p| formulas::dry_potential_temperature(theta, p, p0))
        .collect()
}

/// Temperature along the isopleth of constant saturation mixing ratio `w_s` at
/// each pressure, in &deg;C.
pub fn mixing_ratio_isopleth(pressure: &[HectoPascal], w_s: f64) -> Result<Vec<Celsius>> {
    pressure
        .iter()
        .map(|&p| formulas::mixing_ratio_line(p, w_s))
        .collect()
}

/// A scalar field evaluated on the outer product of a temperature axis and a
/// pressure axis.
///
/// Values are stored row-major with one row per pressure level, matching the
/// layout a contouring routine expects for a 2D mesh.
#[derive(Clone, Debug)]
pub struct TPField {
    t_axis: Vec<Celsius>,
    p_axis: Vec<HectoPascal>,
    values: Vec<Kelvin>,
}

impl TPField {
    fn build<F>(t_axis: Vec<Celsius>, p_axis: Vec<HectoPascal>, f: F) -> Result<Self>
    where
        F: Fn(Celsius, HectoPascal) -> Result<Kelvin>,
    {
        let mut values = Vec::with_capacity(t_axis.len() * p_axis.len());
        for &p in &p_axis {
            for &t in &t_axis {
                values.push(f(t, p)?);
            }
        }

        Ok(TPField {
            t_axis,
            p_axis,
            values,
        })
    }

    /// The temperature axis (columns).
    #[inline]
    pub fn temperature_axis(&self) -> &[Celsius] {
        &self.t_axis
    }

    /// The pressure axis (rows).
    #[inline]
    pub fn pressure_axis(&self) -> &[HectoPascal] {
        &self.p_axis
    }

    /// Number of pressure rows and temperature columns.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.p_axis.len(), self.t_axis.len())
    }

    /// Value at pressure row `i` and temperature column `j`.
    #[inline]
    pub fn value(&self, i: usize, j: usize) -> Kelvin {
        self.values[i * self.t_axis.len() + j]
    }

    /// All values in row-major order, one row per pressure level.
    #[inline]
    pub fn values(&self) -> &[Kelvin] {
        &self.values
    }
}

/// Pseudoequivalent potential temperature of saturated parcels over the mesh
/// spanned by a temperature axis and a pressure axis.
///
/// This is the field contoured as the moist adiabats of a skew-T diagram.
pub fn pseudoequivalent_potential_temperature_field(
    temperature: &[Celsius],
    pressure: &[HectoPascal],
    p0: HectoPascal,
) -> Result<TPField> {
    TPField::build(temperature.to_vec(), pressure.to_vec(), |t, p| {
        formulas::pseudoequivalent_potential_temperature_saturated(t, p, p0)
    })
}

/// Equivalent potential temperature over the mesh spanned by a temperature
/// axis and a pressure axis.
pub fn equivalent_potential_temperature_field(
    temperature: &[Celsius],
    pressure: &[HectoPascal],
    p0: HectoPascal,
) -> Result<TPField> {
    TPField::build(temperature.to_vec(), pressure.to_vec(), |t, p| {
        formulas::equivalent_potential_temperature(t, p, p0)
    })
}
