use std::collections::BTreeSet;

use super::error::EmptyDatasetError;
use super::filter::Selection;
use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// ParameterAxis – the discrete values a slider steps through
// ---------------------------------------------------------------------------

/// Strictly increasing, finite, duplicate-free parameter values.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterAxis {
    values: Vec<f64>,
}

impl ParameterAxis {
    /// Collect the distinct finite values of `field` over all records.
    ///
    /// Distinctness is exact float equality: values that differ only in the
    /// last bit are separate axis points.
    fn collect(records: &[Record], field: impl Fn(&Record) -> f64) -> Self {
        // Total-order key; `+ 0.0` folds -0.0 into 0.0 so they dedupe.
        let keys: BTreeSet<OrdF64> = records
            .iter()
            .map(|r| field(r) + 0.0)
            .filter(|v| v.is_finite())
            .map(OrdF64)
            .collect();
        Self {
            values: keys.into_iter().map(|k| k.0).collect(),
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at slider index `index`.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Slider index holding exactly `value`.
    pub fn position(&self, value: f64) -> Option<usize> {
        self.values
            .binary_search_by(|probe| probe.total_cmp(&(value + 0.0)))
            .ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct OrdF64(f64);

impl Eq for OrdF64 {}

impl PartialOrd for OrdF64 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdF64 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

// ---------------------------------------------------------------------------
// ParameterIndex – both axes plus the default selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterIndex {
    pub nu: ParameterAxis,
    pub u_inf: ParameterAxis,
}

impl ParameterIndex {
    /// Derive the ν and U∞ axes from the dataset.
    pub fn build(dataset: &Dataset) -> Result<Self, EmptyDatasetError> {
        if dataset.is_empty() {
            return Err(EmptyDatasetError);
        }
        let nu = ParameterAxis::collect(&dataset.records, |r| r.nu);
        let u_inf = ParameterAxis::collect(&dataset.records, |r| r.u_inf);
        if nu.is_empty() || u_inf.is_empty() {
            return Err(EmptyDatasetError);
        }
        Ok(Self { nu, u_inf })
    }

    /// Selection at the lowest ν and lowest U∞.
    pub fn initial_selection(&self) -> Selection {
        // `build` rejects empty axes.
        Selection {
            nu: self.nu.values[0],
            u_inf: self.u_inf.values[0],
        }
    }

    /// Selection for a pair of slider indices.
    pub fn selection_at(&self, nu_index: usize, u_inf_index: usize) -> Option<Selection> {
        Some(Selection {
            nu: self.nu.get(nu_index)?,
            u_inf: self.u_inf.get(u_inf_index)?,
        })
    }
}
