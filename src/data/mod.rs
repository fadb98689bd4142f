/// Data layer: spectrum types, loading, and band-power export.
///
/// Architecture:
/// ```text
///  wmap_5yr_tt_spectrum.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  strip comments, parse ℓ / C_ℓ → SpectrumTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ SpectrumTable │  Vec<SpectrumRecord>, never empty
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  ℓ, C_ℓ, D_ℓ → CSV
///   └──────────┘
/// ```

pub mod export;
pub mod loader;
pub mod model;
