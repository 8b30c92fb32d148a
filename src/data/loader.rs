use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use super::error::LoadError;
use super::model::{Dataset, Record};

/// Number of numeric columns in a row: `nu,uInf,x,reX,delta99`.
const FIELD_COUNT: usize = 5;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read and parse the dataset at `path`.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&text)?;
    log::info!("Read {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Load `path` on a background thread. The receiver yields exactly one result.
pub fn spawn_load(path: PathBuf) -> Receiver<Result<Dataset, LoadError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = load_file(&path);
        // The UI may already be gone; nothing left to report to.
        let _ = tx.send(result);
    });
    rx
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse the table text into a [`Dataset`].
///
/// Layout:
/// ```text
/// nu,uInf,x,reX,delta99          <- header, always discarded
/// 1e-05,10,0.5,500000,0.00347
/// ...
/// ```
///
/// Every non-blank line after the header yields one record. Lines are split
/// on commas only; quotes carry no meaning. An empty cell reads as `0`. Cells
/// that are missing or not a number become `NaN` and the line is noted in
/// [`Dataset::anomalous_rows`]; the row itself is kept.
pub fn parse_dataset(text: &str) -> Result<Dataset, LoadError> {
    let body = text.split_once('\n').map(|(_, rest)| rest).unwrap_or("");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    let mut anomalous_rows = Vec::new();

    for result in reader.records() {
        let row = result?;
        if row.len() == 1 && row[0].trim().is_empty() {
            continue;
        }

        let mut fields = [f64::NAN; FIELD_COUNT];
        let mut anomaly = false;
        for (i, slot) in fields.iter_mut().enumerate() {
            match parse_field(row.get(i)) {
                Some(v) => *slot = v,
                None => anomaly = true,
            }
        }

        if anomaly {
            // csv counts lines of `body`; +1 for the header line.
            let line = row.position().map(|p| p.line() as usize + 1).unwrap_or(0);
            anomalous_rows.push(line);
        }

        let [nu, u_inf, x, re_x, delta99] = fields;
        records.push(Record {
            nu,
            u_inf,
            x,
            re_x,
            delta99,
        });
    }

    if let Some(first) = anomalous_rows.first() {
        log::warn!(
            "{} row(s) contain non-numeric fields (first at line {first}); kept as NaN",
            anomalous_rows.len()
        );
    }

    Ok(Dataset {
        records,
        anomalous_rows,
    })
}

/// `None` for a missing or non-numeric cell.
fn parse_field(cell: Option<&str>) -> Option<f64> {
    let cell = cell?.trim();
    if cell.is_empty() {
        return Some(0.0);
    }
    cell.parse::<f64>().ok()
}
