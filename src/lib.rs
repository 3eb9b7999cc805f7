#![warn(missing_docs)]
//! Thermodynamic formulas and plotting support for skew-T/log-P diagrams.
//!
//! The core of the crate is [`formulas`]: pure implementations of the Bolton
//! (1980) empirical formulas for moist air thermodynamics, with the unit of
//! every argument and return value encoded as a newtype from [`units`]. The
//! fits are only valid in specific units, and a silent Celsius/Kelvin or
//! hPa/Pa mix-up is the classic failure mode of this kind of code, so the
//! types carry the contract.
//!
//! Built on the core are [`field`] for element-wise evaluation over arrays and
//! temperature-pressure meshes, [`coords`] for the skew-T/log-P projection and
//! the background isopleths of a sounding chart, and [`sounding`], [`spc`] and
//! [`profile`] for loading sounding text files and deriving overlay profiles
//! from them.

//
// API
//
pub use crate::{
    coords::{DiagramBounds, Isopleth, XYCoords},
    error::{Result, ThermoError},
    field::TPField,
    sounding::{DataRow, Sounding},
    units::{Celsius, HectoPascal, Kelvin, Knots, Meters, Quantity},
};

pub mod constants;
pub mod coords;
pub mod field;
pub mod formulas;
pub mod profile;
pub mod sounding;
pub mod spc;
pub mod units;

//
// Internal use only
//

// Modules
mod error;
