use super::model::{Dataset, Record};

/// Tolerance for matching a record's parameters against the selection.
pub const PARAM_EPSILON: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Selection – the active (ν, U∞) pair
// ---------------------------------------------------------------------------

/// Active parameter pair, always taken from the [`ParameterIndex`] axes.
///
/// [`ParameterIndex`]: super::axes::ParameterIndex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub nu: f64,
    pub u_inf: f64,
}

impl Selection {
    /// Whether `record` belongs to the curve of this selection.
    pub fn matches(&self, record: &Record) -> bool {
        (record.nu - self.nu).abs() < PARAM_EPSILON
            && (record.u_inf - self.u_inf).abs() < PARAM_EPSILON
    }
}

/// Records of the selected curve, ascending in `x`.
pub type VisibleCurve = Vec<Record>;

/// Return the records matching `selection`, sorted by streamwise position.
///
/// The sort is stable, so rows sharing an `x` keep their source order.
/// An empty result means the pair has no curve; that is not an error.
pub fn select_curve(dataset: &Dataset, selection: &Selection) -> VisibleCurve {
    let mut curve: VisibleCurve = dataset
        .records
        .iter()
        .filter(|r| selection.matches(r))
        .copied()
        .collect();
    curve.sort_by(|a, b| a.x.total_cmp(&b.x));
    curve
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::axes::ParameterIndex;
    use crate::data::loader::parse_dataset;

    const SCENARIO: &str = "h\n1e-5,10,1.0,,0.02\n2e-5,10,0.5,,0.015\n1e-5,10,0.5,,0.01";

    #[test]
    fn filters_and_orders_by_x() {
        let ds = parse_dataset(SCENARIO).unwrap();
        let sel = Selection {
            nu: 1e-5,
            u_inf: 10.0,
        };
        let curve = select_curve(&ds, &sel);
        let xs: Vec<f64> = curve.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![0.5, 1.0]);
        assert!(curve.iter().all(|r| sel.matches(r)));
    }

    #[test]
    fn every_indexed_selection_yields_matching_sorted_rows() {
        let ds = parse_dataset(
            "h\n1e-5,10,3,,0\n1e-5,20,1,,0\n2e-5,10,2,,0\n1e-5,10,1,,0\n2e-5,20,0.7,,0\n1e-5,10,2,,0",
        )
        .unwrap();
        let idx = ParameterIndex::build(&ds).unwrap();
        for i in 0..idx.nu.len() {
            for j in 0..idx.u_inf.len() {
                let sel = idx.selection_at(i, j).unwrap();
                let curve = select_curve(&ds, &sel);
                assert!(!curve.is_empty());
                assert!(curve.iter().all(|r| sel.matches(r)));
                assert!(curve.windows(2).all(|w| w[0].x <= w[1].x));
            }
        }
    }

    #[test]
    fn tolerance_absorbs_round_trip_noise() {
        let ds = parse_dataset("h\n0.00001,10,1,,0.1").unwrap();
        let sel = Selection {
            nu: 1e-5 + 1e-12,
            u_inf: 10.0 - 1e-12,
        };
        assert_eq!(select_curve(&ds, &sel).len(), 1);
    }

    #[test]
    fn ties_keep_source_order() {
        let ds = parse_dataset("h\n1,1,2,,0.3\n1,1,1,,0.1\n1,1,2,,0.2").unwrap();
        let curve = select_curve(&ds, &Selection { nu: 1.0, u_inf: 1.0 });
        let deltas: Vec<f64> = curve.iter().map(|r| r.delta99).collect();
        assert_eq!(deltas, vec![0.1, 0.3, 0.2]);
    }

    #[test]
    fn unmatched_selection_is_empty() {
        let ds = parse_dataset(SCENARIO).unwrap();
        let sel = Selection {
            nu: 2e-5,
            u_inf: 99.0,
        };
        assert!(select_curve(&ds, &sel).is_empty());
    }

    #[test]
    fn nan_positions_sort_last() {
        let ds = parse_dataset("h\n1,1,x,,0\n1,1,2,,0\n1,1,1,,0").unwrap();
        let curve = select_curve(&ds, &Selection { nu: 1.0, u_inf: 1.0 });
        assert_eq!(curve[0].x, 1.0);
        assert_eq!(curve[1].x, 2.0);
        assert!(curve[2].x.is_nan());
    }
}
