use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::model::Record;
use crate::metrics::Reynolds;
use crate::plot::mapper::PlotDomain;
use crate::plot::svg::render_svg;
use crate::state::{CurveView, Snapshot};

// ---------------------------------------------------------------------------
// Export formats for the active curve
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Svg => "SVG figure",
            ExportFormat::Csv => "CSV table",
            ExportFormat::Json => "JSON",
        }
    }
}

/// JSON layout of an exported curve.
#[derive(Debug, Serialize)]
struct CurveDocument<'a> {
    nu: f64,
    u_inf: f64,
    reynolds: Reynolds,
    points: &'a [Record],
}

/// Write the current curve to `path` in `format`.
pub fn export_curve(
    path: &Path,
    format: ExportFormat,
    snapshot: &Snapshot,
    view: &CurveView,
    domain: &PlotDomain,
) -> Result<()> {
    match format {
        ExportFormat::Svg => {
            let svg = render_svg(domain, &view.mapped);
            std::fs::write(path, svg).context("writing SVG file")?;
        }
        ExportFormat::Csv => write_csv(path, &view.curve)?,
        ExportFormat::Json => {
            let doc = CurveDocument {
                nu: snapshot.selection.nu,
                u_inf: snapshot.selection.u_inf,
                reynolds: view.reynolds,
                points: &view.curve,
            };
            let file = std::fs::File::create(path).context("creating JSON file")?;
            serde_json::to_writer_pretty(file, &doc).context("writing JSON")?;
        }
    }
    log::info!(
        "Exported {} points as {} to {}",
        view.curve.len(),
        format.extension(),
        path.display()
    );
    Ok(())
}

/// Same column layout as the input table.
fn write_csv(path: &Path, curve: &[Record]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("opening CSV for writing")?;
    for record in curve {
        writer.serialize(record).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}
