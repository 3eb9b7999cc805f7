//! The skew-T/log-P projection and generation of the background isopleths
//! drawn on a sounding chart.
//!
//! The projection skews the isotherms to the right with increasing height and
//! uses a logarithmic pressure axis increasing upward:
//! `x = T - SKEW_SLOPE * ln(P)` and `y = -ln(P)`, with the temperature in
//! Kelvin and the pressure in hPa. Everything here is geometry; the
//! thermodynamics comes from [`crate::formulas`] through [`crate::field`].

use crate::{
    constants::P0,
    error::Result,
    field::{self, TPField},
    units::{Celsius, HectoPascal, Kelvin, Quantity},
};
use itertools::izip;
use std::fmt;
use strum_macros::EnumIter;

/// Slope of the skewed isotherms, in x units per unit of log pressure.
pub const SKEW_SLOPE: f64 = 40.0;

/// A position on the diagram.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XYCoords {
    /// Horizontal coordinate, increasing with temperature.
    pub x: f64,
    /// Vertical coordinate, increasing upward (decreasing pressure).
    pub y: f64,
}

/// Convert a temperature in Kelvin and a pressure to the skewed x coordinate.
#[inline]
pub fn x_from_temperature_pressure(t: Kelvin, p: HectoPascal) -> f64 {
    t.unpack() - SKEW_SLOPE * p.unpack().ln()
}

/// Convert a pressure to the log-pressure y coordinate.
#[inline]
pub fn y_from_pressure(p: HectoPascal) -> f64 {
    -p.unpack().ln()
}

/// Recover the temperature in Kelvin from an x coordinate at a given pressure.
#[inline]
pub fn temperature_from_x_pressure(x: f64, p: HectoPascal) -> Kelvin {
    Kelvin(x + SKEW_SLOPE * p.unpack().ln())
}

/// Recover the pressure from a y coordinate.
#[inline]
pub fn pressure_from_y(y: f64) -> HectoPascal {
    HectoPascal((-y).exp())
}

/// Transform a temperature in &deg;C and a pressure into diagram coordinates.
#[inline]
pub fn xy_from_thermo(t: Celsius, p: HectoPascal) -> XYCoords {
    XYCoords {
        x: x_from_temperature_pressure(Kelvin::from(t), p),
        y: y_from_pressure(p),
    }
}

/// Transform diagram coordinates back into a temperature in &deg;C and a
/// pressure.
#[inline]
pub fn thermo_from_xy(coords: XYCoords) -> (Celsius, HectoPascal) {
    let p = pressure_from_y(coords.y);
    let t = Celsius::from(temperature_from_x_pressure(coords.x, p));

    (t, p)
}

/// The edges of the plotted area.
#[derive(Clone, Copy, Debug)]
pub struct DiagramBounds {
    /// Pressure at the bottom edge.
    pub pressure_bottom: HectoPascal,
    /// Pressure at the top edge.
    pub pressure_top: HectoPascal,
    /// Temperature at the lower left corner.
    pub min_temperature: Celsius,
    /// Temperature at the lower right corner.
    pub max_temperature: Celsius,
}

impl Default for DiagramBounds {
    fn default() -> Self {
        DiagramBounds {
            pressure_bottom: HectoPascal(1050.0),
            pressure_top: HectoPascal(150.0),
            min_temperature: Celsius(-40.0),
            max_temperature: Celsius(50.0),
        }
    }
}

impl DiagramBounds {
    /// x coordinate of the lower left corner.
    #[inline]
    pub fn x_min(&self) -> f64 {
        xy_from_thermo(self.min_temperature, self.pressure_bottom).x
    }

    /// x coordinate of the lower right corner.
    #[inline]
    pub fn x_max(&self) -> f64 {
        xy_from_thermo(self.max_temperature, self.pressure_bottom).x
    }

    /// y coordinate of the bottom edge.
    #[inline]
    pub fn y_min(&self) -> f64 {
        y_from_pressure(self.pressure_bottom)
    }

    /// y coordinate of the top edge.
    #[inline]
    pub fn y_max(&self) -> f64 {
        y_from_pressure(self.pressure_top)
    }

    /// Pressures sampled every hPa from the bottom edge up to the top edge,
    /// for drawing smooth curves.
    pub fn pressure_levels(&self) -> Vec<HectoPascal> {
        let mut levels = vec![];

        let mut p = self.pressure_bottom.unpack();
        while p >= self.pressure_top.unpack() {
            levels.push(HectoPascal(p));
            p -= 1.0;
        }

        levels
    }
}

/// Isobars labeled on a standard chart, 1000 hPa down to 150 hPa by 50.
pub fn standard_isobars() -> Vec<HectoPascal> {
    let mut levels = vec![];

    let mut p = 1000.0;
    while p >= 150.0 {
        levels.push(HectoPascal(p));
        p -= 50.0;
    }

    levels
}

/// Isotherms labeled on a standard chart, -80 to +40 &deg;C by 10.
pub fn standard_isotherms() -> Vec<Celsius> {
    let mut levels = vec![];

    let mut t = -80.0;
    while t <= 40.0 {
        levels.push(Celsius(t));
        t += 10.0;
    }

    levels
}

/// Dry adiabats labeled on a standard chart: potential temperatures from
/// -40 to +110 &deg;C by 10, expressed in Kelvin.
pub fn standard_dry_adiabats() -> Vec<Kelvin> {
    let mut levels = vec![];

    let mut theta = -40.0;
    while theta <= 110.0 {
        levels.push(Kelvin::from(Celsius(theta)));
        theta += 10.0;
    }

    levels
}

/// Mixing ratio isopleths drawn on a standard chart, in kg/kg.
pub fn standard_mixing_ratios() -> Vec<f64> {
    [0.4, 1.0, 2.0, 3.0, 4.0, 8.0, 12.0, 16.0, 20.0]
        .iter()
        .map(|w| w / 1000.0)
        .collect()
}

/// Pressure above which the mixing ratio isopleths are not drawn.
const MIXING_RATIO_CUTOFF: HectoPascal = HectoPascal(600.0);

/// The families of background lines drawn on a skew-T diagram, in
/// back-to-front drawing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Isopleth {
    /// Horizontal lines of constant pressure.
    Isobars,
    /// Skewed lines of constant temperature.
    Isotherms,
    /// Curves of constant potential temperature.
    DryAdiabats,
    /// Curves of constant saturation mixing ratio, drawn below 600 hPa only.
    MixingRatioLines,
}

impl fmt::Display for Isopleth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Isopleth::Isobars => "isobars",
            Isopleth::Isotherms => "isotherms",
            Isopleth::DryAdiabats => "dry adiabats",
            Isopleth::MixingRatioLines => "mixing ratio lines",
        };

        write!(f, "{}", name)
    }
}

/// Generate the polylines for one family of background lines, in diagram
/// coordinates. A plotting layer draws each family with its own style.
pub fn background_lines(
    family: Isopleth,
    bounds: &DiagramBounds,
) -> Result<Vec<Vec<XYCoords>>> {
    match family {
        Isopleth::Isobars => Ok(isobar_lines(bounds)),
        Isopleth::Isotherms => Ok(isotherm_lines(bounds)),
        Isopleth::DryAdiabats => dry_adiabat_lines(bounds),
        Isopleth::MixingRatioLines => mixing_ratio_lines(bounds),
    }
}

fn isobar_lines(bounds: &DiagramBounds) -> Vec<Vec<XYCoords>> {
    standard_isobars()
        .into_iter()
        .map(|p| {
            let y = y_from_pressure(p);
            vec![
                XYCoords {
                    x: bounds.x_min(),
                    y,
                },
                XYCoords {
                    x: bounds.x_max(),
                    y,
                },
            ]
        })
        .collect()
}

fn isotherm_lines(bounds: &DiagramBounds) -> Vec<Vec<XYCoords>> {
    let pressures = bounds.pressure_levels();

    standard_isotherms()
        .into_iter()
        .map(|t| pressures.iter().map(|&p| xy_from_thermo(t, p)).collect())
        .collect()
}

fn dry_adiabat_lines(bounds: &DiagramBounds) -> Result<Vec<Vec<XYCoords>>> {
    let pressures = bounds.pressure_levels();

    standard_dry_adiabats()
        .into_iter()
        .map(|theta| {
            let temperatures = field::dry_adiabat(theta, &pressures, P0)?;

            Ok(izip!(&pressures, temperatures)
                .map(|(&p, t)| XYCoords {
                    x: x_from_temperature_pressure(t, p),
                    y: y_from_pressure(p),
                })
                .collect())
        })
        .collect()
}

fn mixing_ratio_lines(bounds: &DiagramBounds) -> Result<Vec<Vec<XYCoords>>> {
    let pressures: Vec<HectoPascal> = bounds
        .pressure_levels()
        .into_iter()
        .filter(|&p| p >= MIXING_RATIO_CUTOFF)
        .collect();

    standard_mixing_ratios()
        .into_iter()
        .map(|w_s| {
            let temperatures = field::mixing_ratio_isopleth(&pressures, w_s)?;

            Ok(izip!(&pressures, temperatures)
                .map(|(&p, t)| xy_from_thermo(t, p))
                .collect())
        })
        .collect()
}

/// Temperature step of the moist adiabat contour meshes.
const FIELD_T_STEP: f64 = 0.5;

fn field_temperature_axis(bounds: &DiagramBounds) -> Vec<Celsius> {
    let mut axis = vec![];

    let mut t = -60.0;
    while t <= bounds.max_temperature.unpack() {
        axis.push(Celsius(t));
        t += FIELD_T_STEP;
    }

    axis
}

/// 2D pseudoequivalent potential temperature field over the plotted area, for
/// contouring the moist adiabats.
pub fn pseudoequivalent_field(bounds: &DiagramBounds) -> Result<TPField> {
    field::pseudoequivalent_potential_temperature_field(
        &field_temperature_axis(bounds),
        &bounds.pressure_levels(),
        P0,
    )
}

/// 2D equivalent potential temperature field over the plotted area.
pub fn equivalent_field(bounds: &DiagramBounds) -> Result<TPField> {
    field::equivalent_potential_temperature_field(
        &field_temperature_axis(bounds),
        &bounds.pressure_levels(),
        P0,
    )
}
