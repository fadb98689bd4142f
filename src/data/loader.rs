use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use super::model::{SpectrumRecord, SpectrumTable};

/// Everything after this marker on a line is ignored.
pub const COMMENT_MARKER: char = '#';

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("spectrum file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a whitespace-delimited `ℓ  C_ℓ  [...]` table.
///
/// Column 0 is the multipole, column 1 the power in μK²; further columns
/// (error bars, beam factors) are ignored. `#` starts a comment.
pub fn load_spectrum(path: &Path) -> Result<SpectrumTable, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let table = parse_spectrum(&text)?;
    info!(
        "Loaded {} spectrum records from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

/// Parse table text already in memory.
pub fn parse_spectrum(text: &str) -> Result<SpectrumTable, LoadError> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    let mut last_line = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        last_line = idx + 1;
        let content = strip_comment(raw).trim();
        if content.is_empty() {
            skipped += 1;
            continue;
        }
        records.push(parse_line(content, idx + 1)?);
    }

    debug!("Skipped {skipped} comment/blank lines");
    SpectrumTable::from_records(records).ok_or_else(|| LoadError::Parse {
        line: last_line,
        reason: "table has no data rows".to_string(),
    })
}

// ---------------------------------------------------------------------------
// Line helpers
// ---------------------------------------------------------------------------

fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_line(content: &str, line: usize) -> Result<SpectrumRecord, LoadError> {
    let mut tokens = content.split_whitespace();
    let (Some(l_tok), Some(cl_tok)) = (tokens.next(), tokens.next()) else {
        return Err(LoadError::Parse {
            line,
            reason: format!("expected at least 2 columns, got '{content}'"),
        });
    };

    Ok(SpectrumRecord::new(
        parse_field(l_tok, line, "multipole")?,
        parse_field(cl_tok, line, "power")?,
    ))
}

fn parse_field(tok: &str, line: usize, col: &str) -> Result<f64, LoadError> {
    tok.parse::<f64>().map_err(|_| LoadError::Parse {
        line,
        reason: format!("{col} '{tok}' is not a number"),
    })
}
