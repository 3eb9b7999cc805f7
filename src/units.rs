//! Newtype wrappers encoding the unit of every physical quantity in the crate.
//!
//! The empirical fits in [`crate::formulas`] are only valid in specific units, so
//! function boundaries trade in these wrappers instead of bare `f64`s. Conversions
//! are explicit: a caller holding a `Kelvin` converts with `Celsius::from` before
//! invoking a function that wants `Celsius`, and the compiler rejects the mix-up
//! that would otherwise silently corrupt the result.

use crate::constants;
use optional::Noned;
use std::fmt;

/// Common interface for the quantity newtypes.
pub trait Quantity: Copy + fmt::Debug + fmt::Display + Sized {
    /// Wrap a bare value, which must already be in this quantity's unit.
    fn pack(val: f64) -> Self;

    /// Unwrap to a bare value in this quantity's unit.
    fn unpack(self) -> f64;
}

macro_rules! quantity {
    ($(#[$attr:meta])* => $t:ident, $unit:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
        pub struct $t(pub f64);

        impl Quantity for $t {
            #[inline]
            fn pack(val: f64) -> Self {
                $t(val)
            }

            #[inline]
            fn unpack(self) -> f64 {
                self.0
            }
        }

        impl Noned for $t {
            #[inline]
            fn is_none(&self) -> bool {
                self.0.is_nan()
            }

            #[inline]
            fn get_none() -> Self {
                $t(std::f64::NAN)
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{} {}", self.0, $unit)
            }
        }
    };
}

quantity!(
    /// Pressure in hectopascals (equivalently, millibars).
    => HectoPascal, "hPa"
);

quantity!(
    /// Temperature in degrees Celsius.
    => Celsius, "\u{00b0}C"
);

quantity!(
    /// Absolute temperature in Kelvin.
    => Kelvin, "K"
);

quantity!(
    /// Height in meters.
    => Meters, "m"
);

quantity!(
    /// Wind speed in knots.
    => Knots, "kt"
);

impl From<Celsius> for Kelvin {
    #[inline]
    fn from(t: Celsius) -> Self {
        Kelvin(t.0 + constants::C_to_K)
    }
}

impl From<Kelvin> for Celsius {
    #[inline]
    fn from(t: Kelvin) -> Self {
        Celsius(t.0 - constants::C_to_K)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use optional::{none, some, Optioned};

    #[test]
    fn temperature_scale_conversions_round_trip() {
        let Celsius(t) = Celsius::from(Kelvin::from(Celsius(20.0)));
        assert!((t - 20.0).abs() < 1.0e-12);

        let Kelvin(t_k) = Kelvin::from(Celsius(0.0));
        assert!((t_k - 273.15).abs() < 1.0e-12);
    }

    #[test]
    fn quantities_work_as_missing_values() {
        let p: Optioned<HectoPascal> = some(HectoPascal(1000.0));
        assert!(p.is_some());
        assert_eq!(p.unpack().unpack(), 1000.0);

        let missing: Optioned<Celsius> = none();
        assert!(missing.is_none());
    }

    #[test]
    fn display_includes_the_unit() {
        assert_eq!(format!("{}", HectoPascal(850.0)), "850 hPa");
        assert_eq!(format!("{}", Kelvin(300.0)), "300 K");
    }
}
