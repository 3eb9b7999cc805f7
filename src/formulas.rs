//! Empirical formulas for moist air thermodynamics from Bolton (1980).
//!
//! Every function documents the unit of each argument and of the return value,
//! and the newtypes from [`crate::units`] hold the contract at the call site.
//! The fits are only valid in those units; callers convert first. All functions
//! are pure: no state is held between calls and identical inputs always produce
//! identical outputs, so they may be called concurrently without coordination.
//!
//! Functions whose mathematical domain can be violated return a `Result` and
//! fail with [`ThermoError::DomainError`] at the point of violation instead of
//! letting a NaN or an infinity propagate into downstream calculations.

use crate::{
    constants::{cl, cp_dry, epsilon, kappa_dry, Lv, Rd},
    error::{Result, ThermoError},
    units::{Celsius, HectoPascal, Kelvin},
};

/// Saturation vapor pressure over liquid water.
///
/// Bolton (1980) eqn 10, accurate to 0.3% from -35 to +35 &deg;C.
///
/// * `t` - temperature in &deg;C.
///
/// Returns the saturation vapor pressure in hPa. No bounds are enforced here,
/// the caller guarantees a physically sane temperature.
#[inline]
pub fn sat_vapor_pressure(t: Celsius) -> HectoPascal {
    let Celsius(t) = t;
    debug_assert!(t.is_finite());

    HectoPascal(6.112 * (17.67 * t / (t + 243.5)).exp())
}

/// Temperature at which the given vapor pressure saturates the air.
///
/// Closed-form inverse of [`sat_vapor_pressure`], with the inversion constants
/// carried at full precision so the round trip reproduces the input temperature
/// to well below a microdegree.
///
/// * `e_s` - vapor pressure in hPa.
///
/// Returns the temperature in &deg;C. Fails with a `DomainError` when `e_s` is
/// not positive (the logarithm is undefined) or sits at the singular point of
/// the inversion.
#[inline]
pub fn sat_vapor_temperature(e_s: HectoPascal) -> Result<Celsius> {
    let HectoPascal(e_s) = e_s;

    if e_s <= 0.0 {
        return Err(ThermoError::DomainError("vapor pressure must be positive"));
    }

    let ln_ratio = (e_s / 6.112).ln();
    let denom = 17.67 - ln_ratio;
    if denom == 0.0 {
        return Err(ThermoError::DomainError(
            "vapor pressure at the singular point of the inversion",
        ));
    }

    Ok(Celsius(243.5 * ln_ratio / denom))
}

/// Saturation mixing ratio of water vapor in dry air.
///
/// * `p` - total pressure in hPa.
/// * `t` - temperature in &deg;C.
///
/// Returns the mixing ratio in kg/kg. Fails with a `DomainError` when the
/// pressure does not exceed the saturation vapor pressure: that configuration
/// is a physical singularity (a saturated or supersaturated column), not a
/// value to pass along as an infinity.
#[inline]
pub fn sat_mixing_ratio(p: HectoPascal, t: Celsius) -> Result<f64> {
    let HectoPascal(e_s) = sat_vapor_pressure(t);
    let HectoPascal(p) = p;

    if p <= e_s {
        return Err(ThermoError::DomainError(
            "pressure at or below the saturation vapor pressure",
        ));
    }

    Ok(epsilon * e_s / (p - e_s))
}

/// Temperature along a line of constant saturation mixing ratio.
///
/// Inverts the mixing ratio relation to a vapor pressure,
/// `e = w_s * P / (w_s + epsilon)`, then applies [`sat_vapor_temperature`].
/// Used to draw the constant mixing ratio isopleths of a skew-T diagram.
///
/// * `p` - total pressure in hPa.
/// * `w_s` - saturation mixing ratio in kg/kg, must be non-negative.
///
/// Returns the temperature in &deg;C.
#[inline]
pub fn mixing_ratio_line(p: HectoPascal, w_s: f64) -> Result<Celsius> {
    if w_s < 0.0 {
        return Err(ThermoError::DomainError("mixing ratio must be non-negative"));
    }

    let HectoPascal(p) = p;
    let e_s = HectoPascal(w_s * p / (w_s + epsilon));

    sat_vapor_temperature(e_s)
}

/// Relative humidity.
///
/// * `t` - temperature in &deg;C.
/// * `p` - total pressure in hPa.
/// * `w` - mixing ratio in kg/kg.
///
/// Returns the relative humidity in percent. The value is not clamped to
/// [0, 100]; supersaturation legitimately yields more than 100%, which is a
/// physical signal and not an error.
#[inline]
pub fn relative_humidity(t: Celsius, p: HectoPascal, w: f64) -> Result<f64> {
    let w_s = sat_mixing_ratio(p, t)?;

    Ok(100.0 * w / w_s)
}

/// Temperature of a lifted parcel at its lifting condensation level.
///
/// Bolton (1980) eqn 22.
///
/// * `t` - parcel temperature in &deg;C.
/// * `rh` - relative humidity in percent.
///
/// Returns the LCL temperature in Kelvin. The Kelvin return against a Celsius
/// argument is the documented contract of the empirical fit, not an
/// inconsistency. Fails with a `DomainError` when the relative humidity is not
/// positive (the logarithm is undefined) or the fit is singular.
#[inline]
pub fn lifting_condensation_temperature(t: Celsius, rh: f64) -> Result<Kelvin> {
    if rh <= 0.0 {
        return Err(ThermoError::DomainError("relative humidity must be positive"));
    }

    let Kelvin(t_k) = Kelvin::from(t);
    if t_k <= 55.0 {
        return Err(ThermoError::DomainError(
            "temperature below the valid range of the LCL fit",
        ));
    }

    let a = 1.0 / (t_k - 55.0);
    let b = (rh / 100.0).ln() / 2840.0;
    if a == b {
        return Err(ThermoError::DomainError(
            "relative humidity at the singular point of the LCL fit",
        ));
    }

    Ok(Kelvin(1.0 / (a - b) + 55.0))
}

/// Temperature along a dry adiabat, from Poisson's equation.
///
/// * `theta` - potential temperature of the adiabat in Kelvin.
/// * `p` - pressure in hPa at which to evaluate the adiabat.
/// * `p0` - reference pressure in hPa, conventionally [`crate::constants::P0`].
///
/// Returns the temperature in Kelvin of a parcel with potential temperature
/// `theta` brought adiabatically to pressure `p`. When `p == p0` this is the
/// identity.
#[inline]
pub fn dry_potential_temperature(
    theta: Kelvin,
    p: HectoPascal,
    p0: HectoPascal,
) -> Result<Kelvin> {
    let HectoPascal(p) = p;
    let HectoPascal(p0) = p0;

    if p <= 0.0 {
        return Err(ThermoError::DomainError("pressure must be positive"));
    }
    if p0 <= 0.0 {
        return Err(ThermoError::DomainError("reference pressure must be positive"));
    }

    Ok(Kelvin(theta.0 * (p0 / p).powf(-kappa_dry)))
}

/// Pseudoequivalent potential temperature of a parcel.
///
/// Bolton (1980) eqn 43. The humidity, LCL and exponential correction steps are
/// applied in exactly this order; algebraically equivalent rearrangements of
/// eqn 43 diverge from the reference values at the ~0.1 K level.
///
/// * `t` - parcel temperature in &deg;C.
/// * `p` - pressure in hPa.
/// * `w` - mixing ratio in kg/kg.
/// * `p0` - reference pressure in hPa, conventionally [`crate::constants::P0`].
///
/// Returns the pseudoequivalent potential temperature in Kelvin. A
/// `DomainError` anywhere in the humidity to LCL chain is propagated unchanged.
#[inline]
pub fn pseudoequivalent_potential_temperature(
    t: Celsius,
    p: HectoPascal,
    w: f64,
    p0: HectoPascal,
) -> Result<Kelvin> {
    let rh = relative_humidity(t, p, w)?;
    let Kelvin(t_lcl) = lifting_condensation_temperature(t, rh)?;

    let a = (3.376 / t_lcl - 0.00254) * (w * 1000.0) * (1.0 + 0.81 * w);

    let Kelvin(t_k) = Kelvin::from(t);
    let HectoPascal(p) = p;
    let HectoPascal(p0) = p0;

    Ok(Kelvin(
        a.exp() * t_k * (p0 / p).powf(kappa_dry * (1.0 - 0.28 * w)),
    ))
}

/// Pseudoequivalent potential temperature of a saturated parcel.
///
/// Derives the mixing ratio from saturation at `(p, t)` and applies
/// [`pseudoequivalent_potential_temperature`]. This is the quantity contoured
/// as the moist adiabat field of a skew-T diagram, where no independent
/// moisture observation exists for each grid point.
///
/// * `t` - temperature in &deg;C.
/// * `p` - pressure in hPa.
/// * `p0` - reference pressure in hPa.
///
/// Returns the pseudoequivalent potential temperature in Kelvin.
#[inline]
pub fn pseudoequivalent_potential_temperature_saturated(
    t: Celsius,
    p: HectoPascal,
    p0: HectoPascal,
) -> Result<Kelvin> {
    let w = sat_mixing_ratio(p, t)?;

    pseudoequivalent_potential_temperature(t, p, w, p0)
}

/// Equivalent potential temperature of a saturated parcel.
///
/// Non-pseudoadiabatic formulation: condensed water is retained by the parcel,
/// so the effective heat capacity is that of dry air plus the liquid water
/// carried along, `c_wd = cp_dry + w_s * cl`. The vapor pressure depression of
/// the dry air partial pressure is taken as zero, i.e. the Poisson exponent
/// uses the total pressure; together with the mixing ratio at saturation this
/// makes the result the saturated equivalent potential temperature.
///
/// * `t` - temperature in &deg;C.
/// * `p` - pressure in hPa.
/// * `p0` - reference pressure in hPa.
///
/// Returns the equivalent potential temperature in Kelvin.
#[inline]
pub fn equivalent_potential_temperature(
    t: Celsius,
    p: HectoPascal,
    p0: HectoPascal,
) -> Result<Kelvin> {
    let w_s = sat_mixing_ratio(p, t)?;
    let c_wd = cp_dry + w_s * cl;

    let Kelvin(t_k) = Kelvin::from(t);
    let HectoPascal(p) = p;
    let HectoPascal(p0) = p0;

    Ok(Kelvin(
        t_k * (p0 / p).powf(Rd / c_wd) * (Lv * w_s / (c_wd * t_k)).exp(),
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{constants::P0, test_tools::approx_equal};

    #[test]
    fn sat_vapor_pressure_matches_reference_value() {
        let HectoPascal(e_s) = sat_vapor_pressure(Celsius(20.0));
        assert!(approx_equal(e_s, 23.37, 0.01));
    }

    #[test]
    fn sat_vapor_pressure_is_strictly_increasing() {
        let mut prev = sat_vapor_pressure(Celsius(-90.0)).0;

        let mut t = -89.5;
        while t <= 60.0 {
            let e_s = sat_vapor_pressure(Celsius(t)).0;
            assert!(e_s > prev);
            prev = e_s;
            t += 0.5;
        }
    }

    #[test]
    fn sat_vapor_temperature_is_the_inverse_of_sat_vapor_pressure() {
        let mut t = -60.0;
        while t <= 50.0 {
            let e_s = sat_vapor_pressure(Celsius(t));
            let Celsius(t_back) = sat_vapor_temperature(e_s).unwrap();
            assert!(approx_equal(t_back, t, 1.0e-6));
            t += 0.25;
        }
    }

    #[test]
    fn sat_vapor_temperature_fails_for_non_positive_vapor_pressure() {
        assert!(sat_vapor_temperature(HectoPascal(0.0)).is_err());
        assert!(sat_vapor_temperature(HectoPascal(-12.0)).is_err());
    }

    #[test]
    fn sat_mixing_ratio_matches_reference_value() {
        let w_s = sat_mixing_ratio(HectoPascal(1000.0), Celsius(20.0)).unwrap();
        assert!(approx_equal(w_s, 0.014884, 1.0e-4));
    }

    #[test]
    fn sat_mixing_ratio_fails_when_pressure_is_below_saturation() {
        // The saturation vapor pressure at 20 C is about 23.4 hPa, well above
        // 10 hPa, so this column is supersaturated.
        assert!(matches!(
            sat_mixing_ratio(HectoPascal(10.0), Celsius(20.0)),
            Err(ThermoError::DomainError(_))
        ));
    }

    #[test]
    fn mixing_ratio_line_recovers_the_isopleth_temperature() {
        for &p in &[HectoPascal(1000.0), HectoPascal(850.0), HectoPascal(700.0)] {
            for &t in &[-20.0, 0.0, 20.0] {
                let w_s = sat_mixing_ratio(p, Celsius(t)).unwrap();
                let Celsius(t_back) = mixing_ratio_line(p, w_s).unwrap();
                assert!(approx_equal(t_back, t, 1.0e-6));
            }
        }
    }

    #[test]
    fn mixing_ratio_line_fails_for_negative_mixing_ratio() {
        assert!(mixing_ratio_line(HectoPascal(1000.0), -0.001).is_err());
    }

    #[test]
    fn relative_humidity_matches_reference_value() {
        let rh = relative_humidity(Celsius(20.0), HectoPascal(1000.0), 0.01).unwrap();
        assert!(approx_equal(rh, 67.19, 0.05));
    }

    #[test]
    fn relative_humidity_exceeds_100_percent_when_supersaturated() {
        let w_s = sat_mixing_ratio(HectoPascal(1000.0), Celsius(20.0)).unwrap();
        let rh = relative_humidity(Celsius(20.0), HectoPascal(1000.0), 1.5 * w_s).unwrap();
        assert!(rh > 100.0);
    }

    #[test]
    fn lcl_temperature_of_a_saturated_parcel_is_the_parcel_temperature() {
        let Kelvin(t_lcl) = lifting_condensation_temperature(Celsius(20.0), 100.0).unwrap();
        assert!(approx_equal(t_lcl, 293.15, 1.0e-9));
    }

    #[test]
    fn lcl_temperature_is_a_few_kelvin_below_the_parcel_temperature() {
        let Kelvin(t_lcl) = lifting_condensation_temperature(Celsius(20.0), 67.19).unwrap();
        assert!(t_lcl < 293.15);
        assert!(approx_equal(t_lcl, 285.47, 0.05));
    }

    #[test]
    fn lcl_fails_for_non_positive_humidity() {
        assert!(lifting_condensation_temperature(Celsius(20.0), 0.0).is_err());
        assert!(lifting_condensation_temperature(Celsius(20.0), -10.0).is_err());
    }

    #[test]
    fn dry_adiabat_is_the_identity_at_the_reference_pressure() {
        for &theta in &[250.0, 300.0, 350.0] {
            let Kelvin(t) = dry_potential_temperature(Kelvin(theta), P0, P0).unwrap();
            assert!(approx_equal(t, theta, 1.0e-12));
        }
    }

    #[test]
    fn dry_adiabat_cools_with_height() {
        let Kelvin(t) =
            dry_potential_temperature(Kelvin(300.0), HectoPascal(850.0), P0).unwrap();
        assert!(approx_equal(t, 286.40, 0.01));
    }

    #[test]
    fn dry_adiabat_fails_for_non_positive_pressure() {
        assert!(dry_potential_temperature(Kelvin(300.0), HectoPascal(0.0), P0).is_err());
        assert!(dry_potential_temperature(Kelvin(300.0), HectoPascal(-100.0), P0).is_err());
    }

    #[test]
    fn pseudoequivalent_potential_temperature_matches_reference_value() {
        let Kelvin(theta_ep) = pseudoequivalent_potential_temperature(
            Celsius(20.0),
            HectoPascal(1000.0),
            0.01,
            P0,
        )
        .unwrap();
        assert!(approx_equal(theta_ep, 321.92, 0.05));
    }

    #[test]
    fn pseudoequivalent_potential_temperature_increases_with_moisture() {
        let Kelvin(dry) = pseudoequivalent_potential_temperature(
            Celsius(20.0),
            HectoPascal(1000.0),
            0.005,
            P0,
        )
        .unwrap();
        let Kelvin(moist) = pseudoequivalent_potential_temperature(
            Celsius(20.0),
            HectoPascal(1000.0),
            0.012,
            P0,
        )
        .unwrap();
        assert!(moist > dry);
    }

    #[test]
    fn saturated_variant_uses_the_saturation_mixing_ratio() {
        let mut t = -40.0;
        while t <= 40.0 {
            for &p in &[HectoPascal(1000.0), HectoPascal(850.0), HectoPascal(500.0)] {
                let w_s = sat_mixing_ratio(p, Celsius(t)).unwrap();
                let Kelvin(direct) =
                    pseudoequivalent_potential_temperature(Celsius(t), p, w_s, P0).unwrap();
                let Kelvin(derived) =
                    pseudoequivalent_potential_temperature_saturated(Celsius(t), p, P0)
                        .unwrap();
                assert!(approx_equal(direct, derived, 1.0e-12));
            }
            t += 10.0;
        }
    }

    #[test]
    fn pseudoequivalent_propagates_domain_errors_from_its_chain() {
        // Supersaturated column, the pressure is below the vapor pressure.
        assert!(matches!(
            pseudoequivalent_potential_temperature_saturated(
                Celsius(20.0),
                HectoPascal(10.0),
                P0
            ),
            Err(ThermoError::DomainError(_))
        ));

        // Perfectly dry parcel, the relative humidity is zero and the LCL is
        // undefined.
        assert!(matches!(
            pseudoequivalent_potential_temperature(Celsius(20.0), HectoPascal(1000.0), 0.0, P0),
            Err(ThermoError::DomainError(_))
        ));
    }

    #[test]
    fn equivalent_potential_temperature_matches_reference_value() {
        let Kelvin(theta_e) =
            equivalent_potential_temperature(Celsius(20.0), HectoPascal(1000.0), P0).unwrap();
        assert!(approx_equal(theta_e, 330.16, 0.05));
    }

    #[test]
    fn equivalent_potential_temperature_fails_when_supersaturated() {
        assert!(matches!(
            equivalent_potential_temperature(Celsius(20.0), HectoPascal(10.0), P0),
            Err(ThermoError::DomainError(_))
        ));
    }
}
