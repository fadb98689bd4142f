use std::f64::consts::PI;

// ---------------------------------------------------------------------------
// SpectrumRecord – one row of the input table
// ---------------------------------------------------------------------------

/// A single (ℓ, C_ℓ) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumRecord {
    /// Multipole moment ℓ.
    pub multipole: f64,
    /// Angular power C_ℓ in μK².
    pub power: f64,
}

impl SpectrumRecord {
    pub fn new(multipole: f64, power: f64) -> Self {
        Self { multipole, power }
    }

    /// The plotted quantity D_ℓ = ℓ(ℓ+1)C_ℓ / (2π), in μK².
    pub fn band_power(&self) -> f64 {
        let l = self.multipole;
        l * (l + 1.0) * self.power / (2.0 * PI)
    }
}

// ---------------------------------------------------------------------------
// SpectrumTable – the complete loaded spectrum
// ---------------------------------------------------------------------------

/// The parsed angular power spectrum, in source order.
///
/// Always holds at least one record; the only way to build one is
/// [`SpectrumTable::from_records`], which refuses an empty vector.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumTable {
    records: Vec<SpectrumRecord>,
}

impl SpectrumTable {
    /// Wrap loaded records. Returns `None` for an empty input.
    pub fn from_records(records: Vec<SpectrumRecord>) -> Option<Self> {
        if records.is_empty() {
            None
        } else {
            Some(SpectrumTable { records })
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[SpectrumRecord] {
        &self.records
    }

    /// `(ℓ, D_ℓ)` pairs in table order.
    pub fn band_powers(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .map(|r| (r.multipole, r.band_power()))
            .collect()
    }

    /// Smallest and largest multipole in the table.
    pub fn multipole_range(&self) -> (f64, f64) {
        self.records.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), r| (lo.min(r.multipole), hi.max(r.multipole)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_records_are_rejected() {
        assert!(SpectrumTable::from_records(Vec::new()).is_none());
    }

    #[test]
    fn band_power_matches_definition() {
        let rec = SpectrumRecord::new(10.0, 2500.0);
        assert_relative_eq!(rec.band_power(), 110.0 * 2500.0 / (2.0 * PI), epsilon = 1e-9);
    }

    #[test]
    fn band_powers_keep_table_order() {
        let table = SpectrumTable::from_records(vec![
            SpectrumRecord::new(50.0, 1800.0),
            SpectrumRecord::new(2.0, 1000.0),
        ])
        .unwrap();

        let dl = table.band_powers();
        assert_eq!(dl.len(), 2);
        assert_eq!(dl[0].0, 50.0);
        assert_eq!(dl[1].0, 2.0);
        assert_relative_eq!(dl[1].1, 6000.0 / (2.0 * PI), epsilon = 1e-9);
    }

    #[test]
    fn multipole_range_spans_table() {
        let table = SpectrumTable::from_records(vec![
            SpectrumRecord::new(10.0, 1.0),
            SpectrumRecord::new(2.0, 1.0),
            SpectrumRecord::new(50.0, 1.0),
        ])
        .unwrap();
        assert_eq!(table.multipole_range(), (2.0, 50.0));
    }
}
