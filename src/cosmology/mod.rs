/// Cosmology layer: constants, parameter set, and the flat-ΛCDM age estimate.
pub mod age;
pub mod constants;
pub mod params;
