//! Fixed physical constants and the literature reference used by the age estimate.

/// One megaparsec in metres (1 pc = 3.0857×10¹⁶ m).
pub const MPC_IN_METERS: f64 = 3.086e22;

/// Metres per kilometre, for km/s/Mpc → s⁻¹.
pub const METERS_PER_KM: f64 = 1_000.0;

/// Length of a Julian year in days.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Seconds in one Julian year (365.25 × 24 × 3600).
pub const SECONDS_PER_JULIAN_YEAR: f64 = DAYS_PER_JULIAN_YEAR * 24.0 * 3600.0;

/// Seconds in one gigayear of Julian years.
pub const SECONDS_PER_GYR: f64 = SECONDS_PER_JULIAN_YEAR * 1e9;

/// WMAP 5-year best-fit age of the universe, Gyr.
pub const WMAP5_REFERENCE_AGE_GYR: f64 = 13.73;

/// 1σ uncertainty on [`WMAP5_REFERENCE_AGE_GYR`].
pub const WMAP5_REFERENCE_AGE_SIGMA_GYR: f64 = 0.12;
