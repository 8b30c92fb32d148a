use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::Arc;

use crate::data::axes::ParameterIndex;
use crate::data::error::{EmptyDatasetError, LoadError};
use crate::data::filter::{select_curve, Selection, VisibleCurve};
use crate::data::model::Dataset;
use crate::metrics::Reynolds;
use crate::plot::mapper::{map_curve, MappedCurve, PlotDomain};

// ---------------------------------------------------------------------------
// Snapshot – immutable session data
// ---------------------------------------------------------------------------

/// Loaded data plus the committed selection. Never edited in place; a new
/// selection produces a new snapshot sharing the same dataset and axes.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub dataset: Arc<Dataset>,
    pub index: Arc<ParameterIndex>,
    pub selection: Selection,
}

impl Snapshot {
    /// Build the initial snapshot at the first axis values.
    pub fn new(dataset: Dataset) -> Result<Self, EmptyDatasetError> {
        let index = ParameterIndex::build(&dataset)?;
        let selection = index.initial_selection();
        Ok(Self {
            dataset: Arc::new(dataset),
            index: Arc::new(index),
            selection,
        })
    }

    /// Same data, different slider indices. `None` if an index is out of range.
    pub fn with_indices(&self, nu_index: usize, u_inf_index: usize) -> Option<Self> {
        let selection = self.index.selection_at(nu_index, u_inf_index)?;
        Some(Self {
            dataset: Arc::clone(&self.dataset),
            index: Arc::clone(&self.index),
            selection,
        })
    }

    /// Current slider positions.
    pub fn indices(&self) -> (usize, usize) {
        (
            self.index.nu.position(self.selection.nu).unwrap_or(0),
            self.index.u_inf.position(self.selection.u_inf).unwrap_or(0),
        )
    }

    /// Run selection → mapping → metrics for this snapshot.
    pub fn derive(&self, domain: &PlotDomain) -> CurveView {
        let curve = select_curve(&self.dataset, &self.selection);
        if curve.is_empty() {
            log::warn!(
                "No rows for nu={:e}, u_inf={}",
                self.selection.nu,
                self.selection.u_inf
            );
        }
        let mapped = map_curve(&curve, domain);
        let reynolds = Reynolds::compute(&curve, Some(&self.selection));
        log::debug!(
            "Recomputed curve: {} points, {} subpaths, Re={reynolds}",
            curve.len(),
            mapped.subpaths().len()
        );
        CurveView {
            curve,
            mapped,
            reynolds,
        }
    }
}

/// Everything derived from a snapshot for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveView {
    pub curve: VisibleCurve,
    pub mapped: MappedCurve,
    pub reynolds: Reynolds,
}

// ---------------------------------------------------------------------------
// Load lifecycle
// ---------------------------------------------------------------------------

pub enum LoadState {
    /// Background load still running.
    Loading(Receiver<Result<Dataset, LoadError>>),
    /// Resource could not be read. Terminal.
    Failed(String),
    /// Resource read fine but holds no usable rows. Terminal.
    Empty,
    Ready { snapshot: Snapshot, view: CurveView },
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub load: LoadState,

    /// Fixed canvas geometry.
    pub domain: PlotDomain,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Start in the loading state, waiting on `rx`.
    pub fn loading(rx: Receiver<Result<Dataset, LoadError>>, domain: PlotDomain) -> Self {
        Self {
            load: LoadState::Loading(rx),
            domain,
            status_message: None,
        }
    }

    /// Check for a finished background load. Returns `true` if the state changed.
    pub fn poll_load(&mut self) -> bool {
        let LoadState::Loading(rx) = &self.load else {
            return false;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => Err(LoadError::Disconnected),
        };
        self.finish_load(result);
        true
    }

    /// Move out of the loading state with the loader's result.
    pub fn finish_load(&mut self, result: Result<Dataset, LoadError>) {
        self.load = match result {
            Ok(dataset) => self.ingest(dataset),
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                LoadState::Failed(e.to_string())
            }
        };
    }

    fn ingest(&mut self, dataset: Dataset) -> LoadState {
        let anomalies = dataset.anomalous_rows.len();
        let records = dataset.len();
        match Snapshot::new(dataset) {
            Ok(snapshot) => {
                log::info!(
                    "Loaded {records} records: {} nu values (first {:?}), {} u_inf values (first {:?})",
                    snapshot.index.nu.len(),
                    &snapshot.index.nu.values()[..snapshot.index.nu.len().min(5)],
                    snapshot.index.u_inf.len(),
                    &snapshot.index.u_inf.values()[..snapshot.index.u_inf.len().min(5)],
                );
                if anomalies > 0 {
                    self.status_message =
                        Some(format!("{anomalies} row(s) had non-numeric fields"));
                }
                let view = snapshot.derive(&self.domain);
                LoadState::Ready { snapshot, view }
            }
            Err(e) => {
                log::error!("{e} ({records} records read)");
                LoadState::Empty
            }
        }
    }

    /// Commit new slider positions and recompute the view.
    pub fn select(&mut self, nu_index: usize, u_inf_index: usize) {
        let LoadState::Ready { snapshot, view } = &mut self.load else {
            return;
        };
        if snapshot.indices() == (nu_index, u_inf_index) {
            return;
        }
        if let Some(next) = snapshot.with_indices(nu_index, u_inf_index) {
            *view = next.derive(&self.domain);
            *snapshot = next;
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match &self.load {
            LoadState::Ready { snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }

    pub fn view(&self) -> Option<&CurveView> {
        match &self.load {
            LoadState::Ready { view, .. } => Some(view),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_dataset;
    use std::sync::mpsc;

    const SCENARIO: &str = "h\n1e-5,10,0.5,,0.01\n1e-5,10,1.0,,0.02\n2e-5,10,0.5,,0.015";

    fn ready_state(text: &str) -> AppState {
        let (tx, rx) = mpsc::channel();
        let mut state = AppState::loading(rx, PlotDomain::default());
        tx.send(Ok(parse_dataset(text).unwrap())).unwrap();
        assert!(state.poll_load());
        state
    }

    #[test]
    fn stays_loading_until_result_arrives() {
        let (tx, rx) = mpsc::channel();
        let mut state = AppState::loading(rx, PlotDomain::default());
        assert!(!state.poll_load());
        assert!(matches!(state.load, LoadState::Loading(_)));
        tx.send(Ok(parse_dataset(SCENARIO).unwrap())).unwrap();
        assert!(state.poll_load());
        assert!(state.snapshot().is_some());
        assert!(!state.poll_load());
    }

    #[test]
    fn scenario_initial_view() {
        let state = ready_state(SCENARIO);
        let snap = state.snapshot().unwrap();
        assert_eq!(snap.index.nu.values(), &[1e-5, 2e-5]);
        assert_eq!(
            snap.selection,
            Selection {
                nu: 1e-5,
                u_inf: 10.0
            }
        );
        let view = state.view().unwrap();
        let xs: Vec<f64> = view.curve.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![0.5, 1.0]);
        assert_eq!(view.reynolds, Reynolds::Value(10.0 * 1.0 / 1e-5));
        assert!(matches!(view.mapped, MappedCurve::Path(_)));
    }

    #[test]
    fn selection_replaces_snapshot_and_view() {
        let mut state = ready_state(SCENARIO);
        let before = state.snapshot().unwrap().clone();
        state.select(1, 0);
        let after = state.snapshot().unwrap();
        assert_eq!(after.selection.nu, 2e-5);
        assert!(Arc::ptr_eq(&before.dataset, &after.dataset));
        assert_eq!(before.selection.nu, 1e-5);
        assert_eq!(state.view().unwrap().curve.len(), 1);
        assert_eq!(after.indices(), (1, 0));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut state = ready_state(SCENARIO);
        state.select(7, 0);
        assert_eq!(state.snapshot().unwrap().indices(), (0, 0));
    }

    #[test]
    fn unmatched_pair_has_no_curve_and_undefined_reynolds() {
        // (2e-5, 20) exists on both axes but no row carries that pair.
        let mut state = ready_state("h\n1e-5,10,1,,0.1\n2e-5,10,1,,0.1\n1e-5,20,1,,0.1");
        state.select(1, 1);
        let view = state.view().unwrap();
        assert!(view.curve.is_empty());
        assert_eq!(view.mapped, MappedCurve::NoRenderableData);
        assert_eq!(view.reynolds, Reynolds::Undefined);
    }

    #[test]
    fn fully_clipped_curve_still_has_reynolds() {
        let state = ready_state("h\n1e-5,10,0.1,,0.001\n1e-5,10,0.2,,0.002");
        let view = state.view().unwrap();
        assert_eq!(view.curve.len(), 2);
        assert_eq!(view.mapped, MappedCurve::NoRenderableData);
        assert!(matches!(view.reynolds, Reynolds::Value(_)));
    }

    fn record_bits(view: &CurveView) -> Vec<[u64; 5]> {
        view.curve
            .iter()
            .map(|r| {
                [r.nu, r.u_inf, r.x, r.re_x, r.delta99].map(f64::to_bits)
            })
            .collect()
    }

    #[test]
    fn derive_is_idempotent() {
        // A non-numeric reX cell keeps NaN in the curve rows.
        let text = "h\n1e-5,10,1.0,n/a,0.02\n1e-5,10,0.3,,0.005\n1e-5,10,0.5,,0.01";
        for text in [SCENARIO, text] {
            let state = ready_state(text);
            let snap = state.snapshot().unwrap();
            let domain = PlotDomain::default();
            let (first, second) = (snap.derive(&domain), snap.derive(&domain));
            assert_eq!(record_bits(&first), record_bits(&second));
            assert_eq!(first.mapped, second.mapped);
            assert_eq!(first.reynolds, second.reynolds);
        }
    }

    #[test]
    fn empty_dataset_is_terminal() {
        let state = ready_state("nu,uInf,x,reX,delta99\n\n");
        assert!(matches!(state.load, LoadState::Empty));
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn empty_cells_leave_status_clear() {
        let state = ready_state(SCENARIO);
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn load_error_is_terminal() {
        let (tx, rx) = mpsc::channel();
        let mut state = AppState::loading(rx, PlotDomain::default());
        drop(tx);
        assert!(state.poll_load());
        assert!(matches!(state.load, LoadState::Failed(_)));
        assert!(!state.poll_load());
    }

    #[test]
    fn anomalies_are_reported_in_status() {
        let state = ready_state("h\n1e-5,10,0.5,,0.01\n1e-5,10,1.0,five,0.02");
        assert_eq!(
            state.status_message.as_deref(),
            Some("1 row(s) had non-numeric fields")
        );
    }
}
