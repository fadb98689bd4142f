use serde::Deserialize;

// ---------------------------------------------------------------------------
// CosmologicalParameters
// ---------------------------------------------------------------------------

/// Inputs to the flat-ΛCDM age integral.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CosmologicalParameters {
    /// Hubble constant in km/s/Mpc.
    pub h0: f64,
    /// Matter density fraction Ωm.
    pub omega_m: f64,
    /// Dark-energy density fraction ΩΛ.
    pub omega_lambda: f64,
}

impl CosmologicalParameters {
    /// WMAP 5-year best-fit flat ΛCDM.
    pub const WMAP5: CosmologicalParameters = CosmologicalParameters {
        h0: 70.4,
        omega_m: 0.272,
        omega_lambda: 0.728,
    };

    /// Ωk = 1 − Ωm − ΩΛ.
    pub fn curvature(&self) -> f64 {
        1.0 - self.omega_m - self.omega_lambda
    }

    /// Opt-in flatness check. The age estimator never calls this; values that
    /// don't sum to one still give a finite (inconsistent) age.
    pub fn check_flatness(&self, tolerance: f64) -> Result<(), f64> {
        let omega_k = self.curvature();
        if omega_k.abs() <= tolerance {
            Ok(())
        } else {
            Err(omega_k)
        }
    }
}

impl Default for CosmologicalParameters {
    fn default() -> Self {
        Self::WMAP5
    }
}
