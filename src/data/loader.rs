use std::path::Path;

use anyhow::{Context, Result, bail};
use log::{debug, info};

use super::model::RowStore;
use crate::error::QueryError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a comma-separated table with a header row. The extension is not
/// consulted.
///
/// The file is fully read and closed before this returns.
pub fn load_file(path: &Path) -> Result<RowStore> {
    if !path.exists() {
        bail!(QueryError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let store = load_csv(path)?;

    if store.headers.is_empty() {
        bail!(QueryError::EmptyData {
            path: path.to_path_buf(),
        });
    }

    info!(
        "loaded {} rows x {} columns from {}",
        store.len(),
        store.headers.len(),
        path.display()
    );
    if store.is_empty() {
        info!("{} has a header but no data rows", path.display());
    }
    Ok(store)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, then one record per line.
/// Blank lines are skipped. Short records leave their trailing columns
/// absent; extra fields are dropped.
fn load_csv(path: &Path) -> Result<RowStore> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .context("opening CSV")?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Ok(RowStore::default());
    }

    let mut rows = Vec::new();
    // Records are numbered from 1, the header excluded.
    for (idx, result) in reader.records().enumerate() {
        let record_no = idx + 1;
        let record = result.with_context(|| format!("reading CSV record {record_no}"))?;
        if record.len() != headers.len() {
            debug!(
                "CSV record {record_no} (line {}): {} fields, header has {}",
                record.position().map_or(0, |p| p.line()),
                record.len(),
                headers.len()
            );
        }
        rows.push(RowStore::row_from_cells(&headers, record.iter()));
    }

    Ok(RowStore::new(headers, rows))
}
