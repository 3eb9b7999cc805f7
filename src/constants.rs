//! Physical constants used by the formulas.
//!
//! These are immutable, process-wide values with no initialization or teardown
//! lifecycle. Names follow the conventional meteorological symbols.
#![allow(non_upper_case_globals)]

use crate::units::HectoPascal;

/// Additive offset between the Celsius and Kelvin scales.
pub const C_to_K: f64 = 273.15;

/// Ratio of the molecular weight of water vapor to that of dry air.
pub const epsilon: f64 = 0.6220;

/// Poisson exponent for dry air, R_d / c_p.
pub const kappa_dry: f64 = 0.2854;

/// Specific heat of dry air at constant pressure, J / (kg K).
pub const cp_dry: f64 = 1005.7;

/// Specific heat of liquid water, J / (kg K).
pub const cl: f64 = 4181.3;

/// Specific gas constant for dry air, J / (kg K).
pub const Rd: f64 = 287.04;

/// Latent heat of vaporization of water near 0 &deg;C, J / kg.
pub const Lv: f64 = 2.501e6;

/// Reference pressure for potential temperature calculations.
pub const P0: HectoPascal = HectoPascal(1000.0);
