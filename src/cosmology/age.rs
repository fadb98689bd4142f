use std::fmt;

use thiserror::Error;

use super::constants::{
    METERS_PER_KM, MPC_IN_METERS, SECONDS_PER_GYR, WMAP5_REFERENCE_AGE_GYR,
    WMAP5_REFERENCE_AGE_SIGMA_GYR,
};
use super::params::CosmologicalParameters;

#[derive(Error, Debug, PartialEq)]
pub enum AgeError {
    #[error("{name} must be positive and finite, got {value}")]
    Domain { name: &'static str, value: f64 },
}

fn require_positive(name: &'static str, value: f64) -> Result<f64, AgeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AgeError::Domain { name, value })
    }
}

// ---------------------------------------------------------------------------
// Unit conversion
// ---------------------------------------------------------------------------

/// km/s/Mpc → s⁻¹.
pub fn hubble_to_per_second(h0_km_s_mpc: f64) -> f64 {
    h0_km_s_mpc * METERS_PER_KM / MPC_IN_METERS
}

/// Hubble time 1/H0 in Gyr.
pub fn hubble_time_gyr(h0_km_s_mpc: f64) -> Result<f64, AgeError> {
    let h0 = require_positive("H0", h0_km_s_mpc)?;
    require_positive("Hubble time", 1.0 / hubble_to_per_second(h0) / SECONDS_PER_GYR)
}

// ---------------------------------------------------------------------------
// Flat ΛCDM age
// ---------------------------------------------------------------------------

/// Age of a flat ΛCDM universe in Gyr:
///
/// ```text
/// t0 = 2 / (3 H0 √ΩΛ) · asinh(√(ΩΛ/Ωm))
/// ```
///
/// Only valid for Ωm > 0 and ΩΛ > 0. Flatness is assumed, not checked.
pub fn estimate_age(h0_km_s_mpc: f64, omega_m: f64, omega_lambda: f64) -> Result<f64, AgeError> {
    let h0 = require_positive("H0", h0_km_s_mpc)?;
    let om = require_positive("Omega_m", omega_m)?;
    let ol = require_positive("Omega_Lambda", omega_lambda)?;

    let h0_s = hubble_to_per_second(h0);
    let age_seconds = (2.0 / (3.0 * h0_s * ol.sqrt())) * (ol / om).sqrt().asinh();
    // subnormal inputs can still overflow the ratio or the prefactor
    require_positive("age", age_seconds / SECONDS_PER_GYR)
}

// ---------------------------------------------------------------------------
// AgeResult – estimate vs. WMAP 5-year reference
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeResult {
    pub age_gyr: f64,
    pub reference_gyr: f64,
    pub reference_sigma_gyr: f64,
}

impl AgeResult {
    /// Compare an age against the WMAP 5-year best fit.
    pub fn against_wmap5(age_gyr: f64) -> Self {
        AgeResult {
            age_gyr,
            reference_gyr: WMAP5_REFERENCE_AGE_GYR,
            reference_sigma_gyr: WMAP5_REFERENCE_AGE_SIGMA_GYR,
        }
    }

    pub fn from_parameters(params: &CosmologicalParameters) -> Result<Self, AgeError> {
        estimate_age(params.h0, params.omega_m, params.omega_lambda).map(Self::against_wmap5)
    }

    /// `age − reference`, in Gyr.
    pub fn difference(&self) -> f64 {
        self.age_gyr - self.reference_gyr
    }

    /// Whether the estimate falls inside the reference 1σ band.
    pub fn within_reference_sigma(&self) -> bool {
        self.difference().abs() <= self.reference_sigma_gyr
    }
}

impl fmt::Display for AgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} Gyr (reference {:.2} ± {:.2}, diff {:+.2})",
            self.age_gyr,
            self.reference_gyr,
            self.reference_sigma_gyr,
            self.difference()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn wmap5_regression() {
        let p = CosmologicalParameters::WMAP5;
        let age = estimate_age(p.h0, p.omega_m, p.omega_lambda).unwrap();
        assert_abs_diff_eq!(age, 13.761, epsilon = 0.005);
    }

    #[test]
    fn h0_conversion() {
        assert_relative_eq!(hubble_to_per_second(70.4), 2.2813e-18, max_relative = 1e-4);
    }

    #[test]
    fn julian_year_seconds() {
        assert_eq!(SECONDS_PER_GYR, 31_557_600.0 * 1e9);
    }

    #[test]
    fn flat_triples_give_finite_positive_age() {
        let mut previous = f64::INFINITY;
        for i in 1..20 {
            let om = i as f64 * 0.05;
            let age = estimate_age(70.0, om, 1.0 - om).unwrap();
            assert!(age.is_finite() && age > 0.0, "om={om} age={age}");
            // more matter, younger universe
            assert!(age < previous);
            previous = age;
        }
    }

    #[test]
    fn vanishing_lambda_tends_to_einstein_de_sitter() {
        let age = estimate_age(70.4, 1.0, 1e-12).unwrap();
        let eds = 2.0 / 3.0 * hubble_time_gyr(70.4).unwrap();
        assert_relative_eq!(age, eds, max_relative = 1e-6);
    }

    #[test]
    fn zero_lambda_is_domain_error() {
        let err = estimate_age(70.4, 1.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            AgeError::Domain {
                name: "Omega_Lambda",
                value: 0.0
            }
        );
    }

    #[test]
    fn zero_matter_is_domain_error() {
        assert!(matches!(
            estimate_age(70.4, 0.0, 1.0),
            Err(AgeError::Domain { name: "Omega_m", .. })
        ));
    }

    #[test]
    fn negative_or_nan_inputs_are_domain_errors() {
        assert!(estimate_age(-70.0, 0.3, 0.7).is_err());
        assert!(estimate_age(70.0, -0.3, 1.3).is_err());
        assert!(estimate_age(70.0, f64::NAN, 0.7).is_err());
        assert!(estimate_age(f64::INFINITY, 0.3, 0.7).is_err());
    }

    #[test]
    fn subnormal_matter_fraction_overflows_to_domain_error() {
        let om = 1e-310;
        let err = estimate_age(70.4, om, 1.0 - om).unwrap_err();
        assert!(matches!(err, AgeError::Domain { name: "age", value } if value.is_infinite()));
    }

    #[test]
    fn subnormal_hubble_constant_overflows_to_domain_error() {
        assert!(matches!(
            estimate_age(1e-300, 0.272, 0.728),
            Err(AgeError::Domain { name: "age", .. })
        ));
        assert!(hubble_time_gyr(1e-300).is_err());
    }

    #[test]
    fn result_difference_against_reference() {
        let result = AgeResult::from_parameters(&CosmologicalParameters::WMAP5).unwrap();
        assert_eq!(result.reference_gyr, 13.73);
        assert_abs_diff_eq!(result.difference(), 0.031, epsilon = 0.005);
        assert!(result.within_reference_sigma());
        assert!(result.to_string().starts_with("13.76 Gyr"));
    }
}
