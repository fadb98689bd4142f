use log::{info, warn};
use thiserror::Error;

use crate::config::{ConfigError, RunConfig};
use crate::cosmology::age::{hubble_time_gyr, AgeError, AgeResult};
use crate::data::{export, loader};
use crate::data::loader::LoadError;
use crate::render::{plot, report};

/// A failed run, tagged with the stage that failed.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("loading spectrum: {0}")]
    Load(#[from] LoadError),
    #[error("plotting spectrum: {0:#}")]
    Plot(anyhow::Error),
    #[error("exporting band powers: {0:#}")]
    Export(anyhow::Error),
    #[error("estimating age: {0}")]
    Estimate(#[from] AgeError),
    #[error("writing report: {0:#}")]
    Report(anyhow::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub records: usize,
    pub age: AgeResult,
}

// ---------------------------------------------------------------------------
// load → plot (→ export) → estimate → report
// ---------------------------------------------------------------------------

pub fn run(config: &RunConfig) -> Result<RunSummary, PipelineError> {
    let table = loader::load_spectrum(&config.spectrum_path)?;
    let (l_min, l_max) = table.multipole_range();
    info!("Spectrum covers multipoles {l_min}..={l_max}");

    plot::save_power_spectrum(&table, &config.plot, &config.plot_path)
        .map_err(PipelineError::Plot)?;
    info!("Power spectrum plot saved to {}", config.plot_path.display());

    if let Some(csv_path) = &config.band_power_path {
        export::write_band_powers(&table, csv_path).map_err(PipelineError::Export)?;
        info!("Band powers exported to {}", csv_path.display());
    }

    let params = &config.parameters;
    if let Err(omega_k) = params.check_flatness(config.flatness_tolerance) {
        warn!("Parameters are not flat (Omega_k = {omega_k:.4}); the flat-LCDM age is inconsistent");
    }
    info!("Hubble time 1/H0 = {:.2} Gyr", hubble_time_gyr(params.h0)?);
    let age = AgeResult::from_parameters(params)?;
    info!("Age estimate: {age}");
    if !age.within_reference_sigma() {
        warn!("Estimate lies outside the WMAP 5-year 1-sigma band");
    }

    report::write_report(&age, &config.report_path).map_err(PipelineError::Report)?;
    info!("Report written to {}", config.report_path.display());

    Ok(RunSummary {
        records: table.len(),
        age,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmology::params::CosmologicalParameters;
    use approx::assert_abs_diff_eq;
    use std::path::Path;

    fn config_in(dir: &Path) -> RunConfig {
        RunConfig {
            spectrum_path: dir.join("tt.txt"),
            plot_path: dir.join("out").join("power_spectrum.png"),
            report_path: dir.join("out").join("result.txt"),
            band_power_path: Some(dir.join("out").join("dl.csv")),
            ..RunConfig::default()
        }
    }

    #[test]
    fn end_to_end_three_point_spectrum() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());
        std::fs::write(
            &cfg.spectrum_path,
            "# l Cl\n2 1000.0\n10 2500.0\n50 1800.0\n",
        )
        .unwrap();

        let summary = run(&cfg).unwrap();

        assert_eq!(summary.records, 3);
        assert_abs_diff_eq!(summary.age.age_gyr, 13.761, epsilon = 0.005);
        assert_abs_diff_eq!(summary.age.difference(), 0.031, epsilon = 0.005);
        assert!(cfg.plot_path.is_file());
        assert!(cfg.band_power_path.as_ref().unwrap().is_file());

        let text = std::fs::read_to_string(&cfg.report_path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("Estimated age of the universe: 13.76 Gyr"));
    }

    #[test]
    fn load_failure_skips_plot_and_report() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config_in(dir.path());

        let err = run(&cfg).unwrap_err();

        assert!(matches!(err, PipelineError::Load(LoadError::FileNotFound { .. })));
        assert!(err.to_string().starts_with("loading spectrum"));
        assert!(!cfg.plot_path.exists());
        assert!(!cfg.report_path.exists());
    }

    #[test]
    fn estimate_failure_writes_no_report() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = RunConfig {
            parameters: CosmologicalParameters {
                omega_m: 1.0,
                omega_lambda: 0.0,
                ..CosmologicalParameters::WMAP5
            },
            ..config_in(dir.path())
        };
        std::fs::write(&cfg.spectrum_path, "2 1000.0\n").unwrap();

        let err = run(&cfg).unwrap_err();

        assert!(matches!(err, PipelineError::Estimate(AgeError::Domain { .. })));
        assert!(cfg.plot_path.is_file());
        assert!(!cfg.report_path.exists());
    }
}
