use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::model::SpectrumTable;

// ---------------------------------------------------------------------------
// Band-power CSV: the series that ends up on the plot
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct BandPowerRow {
    ell: f64,
    cl: f64,
    dl: f64,
}

/// Write `ell,cl,dl` rows (header included) in table order.
pub fn write_band_powers(table: &SpectrumTable, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating CSV {}", path.display()))?;

    for rec in table.records() {
        writer
            .serialize(BandPowerRow {
                ell: rec.multipole,
                cl: rec.power,
                dl: rec.band_power(),
            })
            .context("writing band-power row")?;
    }
    writer.flush().context("flushing band-power CSV")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SpectrumRecord;
    use approx::assert_relative_eq;

    #[test]
    fn csv_has_header_and_one_row_per_record() {
        let table = SpectrumTable::from_records(vec![
            SpectrumRecord::new(2.0, 1000.0),
            SpectrumRecord::new(10.0, 2500.0),
        ])
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dl.csv");

        write_band_powers(&table, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, ["ell", "cl", "dl"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0].parse::<f64>().unwrap(), 10.0);
        let dl: f64 = rows[1][2].parse().unwrap();
        assert_relative_eq!(dl, table.records()[1].band_power(), epsilon = 1e-9);
    }
}
