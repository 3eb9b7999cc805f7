//! Profiles derived level-by-level from a sounding.
//!
//! The output is at the same levels as the sounding, suitable for overlaying
//! on a chart next to the observed temperature and dew point traces. If one of
//! the profiles required for a calculation is missing from the sounding, the
//! result cannot be calculated and an empty vector is returned. Levels where
//! the calculation fails its mathematical domain, for example a supersaturated
//! level, are carried through as missing values; the strict error path belongs
//! to [`crate::formulas`] and [`crate::field`].

use crate::{constants::P0, formulas, sounding::Sounding, units::Kelvin};
use itertools::izip;
use optional::Optioned;

/// Given a sounding, calculate a profile of the mixing ratio in kg/kg.
///
/// The mixing ratio at each level is the saturation mixing ratio evaluated at
/// the dew point.
pub fn mixing_ratio(snd: &Sounding) -> Vec<Optioned<f64>> {
    let p_profile = snd.pressure_profile();
    let dp_profile = snd.dew_point_profile();

    if p_profile.len().min(dp_profile.len()) == 0 {
        return vec![];
    }

    izip!(p_profile, dp_profile)
        .map(|(p_opt, dp_opt)| {
            p_opt
                .into_option()
                .and_then(|p| {
                    dp_opt.into_option().and_then(|dp| {
                        formulas::sat_mixing_ratio(p, dp)
                            // Ignore errors, if not possible to calculate just use missing value.
                            .ok()
                    })
                })
                .into()
        })
        .collect()
}

/// Given a sounding, calculate a profile of relative humidity in percent.
pub fn relative_humidity(snd: &Sounding) -> Vec<Optioned<f64>> {
    let p_profile = snd.pressure_profile();
    let t_profile = snd.temperature_profile();
    let dp_profile = snd.dew_point_profile();

    if p_profile.len().min(t_profile.len()).min(dp_profile.len()) == 0 {
        return vec![];
    }

    izip!(p_profile, t_profile, dp_profile)
        .map(|(p_opt, t_opt, dp_opt)| {
            p_opt
                .into_option()
                .and_then(|p| {
                    t_opt.into_option().and_then(|t| {
                        dp_opt.into_option().and_then(|dp| {
                            formulas::sat_mixing_ratio(p, dp)
                                .and_then(|w| formulas::relative_humidity(t, p, w))
                                // Ignore errors, if not possible to calculate just use missing value.
                                .ok()
                        })
                    })
                })
                .into()
        })
        .collect()
}

/// Given a sounding, calculate a profile of the pseudoequivalent potential
/// temperature in Kelvin.
pub fn pseudoequivalent_potential_temperature(snd: &Sounding) -> Vec<Optioned<Kelvin>> {
    let p_profile = snd.pressure_profile();
    let t_profile = snd.temperature_profile();
    let dp_profile = snd.dew_point_profile();

    if p_profile.len().min(t_profile.len()).min(dp_profile.len()) == 0 {
        return vec![];
    }

    izip!(p_profile, t_profile, dp_profile)
        .map(|(p_opt, t_opt, dp_opt)| {
            p_opt
                .into_option()
                .and_then(|p| {
                    t_opt.into_option().and_then(|t| {
                        dp_opt.into_option().and_then(|dp| {
                            formulas::sat_mixing_ratio(p, dp)
                                .and_then(|w| {
                                    formulas::pseudoequivalent_potential_temperature(t, p, w, P0)
                                })
                                // Ignore errors, if not possible to calculate just use missing value.
                                .ok()
                        })
                    })
                })
                .into()
        })
        .collect()
}
