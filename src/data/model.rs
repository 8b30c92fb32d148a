use serde::Serialize;

// ---------------------------------------------------------------------------
// Record – one row of the boundary-layer table
// ---------------------------------------------------------------------------

/// A single station of one boundary-layer solution.
///
/// Any field may be `NaN` when the source cell could not be parsed; see
/// [`Dataset::anomalous_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Record {
    /// Kinematic viscosity ν [m²/s].
    pub nu: f64,
    /// Free-stream velocity U∞ [m/s].
    #[serde(rename = "uInf")]
    pub u_inf: f64,
    /// Streamwise position from the leading edge [m].
    pub x: f64,
    /// Local Reynolds number as stored in the table.
    #[serde(rename = "reX")]
    pub re_x: f64,
    /// 99 % boundary-layer thickness δ [m].
    pub delta99: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All records in source row order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// 1-based source line numbers of rows holding a non-numeric cell.
    pub anomalous_rows: Vec<usize>,
}

impl Dataset {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
