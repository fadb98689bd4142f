use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::cosmology::params::CosmologicalParameters;
use crate::render::plot::PlotStyle;

/// Looked up in the working directory; defaults apply when absent.
pub const CONFIG_FILE_NAME: &str = "cmb-age.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Run configuration
// ---------------------------------------------------------------------------

/// Paths, parameters and plot style for one run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Input spectrum table.
    pub spectrum_path: PathBuf,
    /// PNG plot destination.
    pub plot_path: PathBuf,
    /// Text report destination.
    pub report_path: PathBuf,
    /// Optional `ell,cl,dl` CSV next to the plot.
    pub band_power_path: Option<PathBuf>,
    pub parameters: CosmologicalParameters,
    /// Warn when |1 − Ωm − ΩΛ| exceeds this.
    pub flatness_tolerance: f64,
    pub plot: PlotStyle,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            spectrum_path: PathBuf::from("data/wmap_5yr_tt_spectrum.txt"),
            plot_path: PathBuf::from("output/power_spectrum.png"),
            report_path: PathBuf::from("output/result.txt"),
            band_power_path: None,
            parameters: CosmologicalParameters::WMAP5,
            flatness_tolerance: 1e-6,
            plot: PlotStyle::default(),
        }
    }
}

impl RunConfig {
    /// Parse a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Use `cmb-age.json` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            info!("Using configuration {}", candidate.display());
            Self::from_file(&candidate)
        } else {
            debug!("No {CONFIG_FILE_NAME} in {}, using defaults", dir.display());
            Ok(Self::default())
        }
    }
}
