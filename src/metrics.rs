use std::fmt;

use serde::Serialize;

use crate::data::filter::Selection;
use crate::data::model::Record;

/// Local Reynolds number at the downstream end of the visible curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reynolds {
    Value(f64),
    /// No curve, no selection yet, or a non-finite result.
    Undefined,
}

impl Reynolds {
    /// `U∞ · x_last / ν`, recomputed from the last (largest-x) point.
    pub fn compute(curve: &[Record], selection: Option<&Selection>) -> Self {
        let (Some(sel), Some(last)) = (selection, curve.last()) else {
            return Reynolds::Undefined;
        };
        let re = sel.u_inf * last.x / sel.nu;
        if re.is_finite() {
            Reynolds::Value(re)
        } else {
            Reynolds::Undefined
        }
    }
}

impl fmt::Display for Reynolds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reynolds::Value(v) => write!(f, "{}", format_scientific(*v, 2)),
            Reynolds::Undefined => write!(f, "N/A"),
        }
    }
}

/// Scientific notation with a signed exponent, e.g. `1.00e+6`, `2.5000e-5`.
pub fn format_scientific(value: f64, decimals: usize) -> String {
    let s = format!("{value:.decimals$e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}
