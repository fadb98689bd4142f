use std::path::Path;

use anyhow::{Context, Result};

use crate::cosmology::age::AgeResult;

/// Three-line text report: estimate, reference, signed difference.
pub fn format_report(result: &AgeResult) -> String {
    format!(
        "Estimated age of the universe: {:.2} Gyr\n\
         WMAP 5-year best-fit age: {:.2} ± {:.2} Gyr\n\
         Difference: {:.2} Gyr\n",
        result.age_gyr,
        result.reference_gyr,
        result.reference_sigma_gyr,
        result.difference()
    )
}

pub fn write_report(result: &AgeResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, format_report(result))
        .with_context(|| format!("writing report {}", path.display()))
}
