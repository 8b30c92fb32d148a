//! Startup configuration.

use std::path::PathBuf;

use crate::plot::mapper::PlotDomain;

/// Dataset looked up in the working directory when nothing else is given.
pub const DEFAULT_DATASET: &str = "blasius_40000_boundary_layers.csv";

/// Environment variable overriding the dataset path.
pub const DATASET_ENV: &str = "BLAYER_DATASET";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub domain: PlotDomain,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            domain: PlotDomain::default(),
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
        }
    }
}

impl AppConfig {
    /// Resolve from process arguments and environment.
    pub fn from_env() -> Self {
        Self::resolve(std::env::args().nth(1), std::env::var(DATASET_ENV).ok())
    }

    /// The first CLI argument wins over the environment variable.
    fn resolve(arg: Option<String>, env: Option<String>) -> Self {
        let dataset_path = arg
            .or(env)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));
        Self {
            dataset_path,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_beats_environment() {
        let cfg = AppConfig::resolve(Some("a.csv".into()), Some("b.csv".into()));
        assert_eq!(cfg.dataset_path, PathBuf::from("a.csv"));
    }

    #[test]
    fn environment_beats_default() {
        let cfg = AppConfig::resolve(None, Some("b.csv".into()));
        assert_eq!(cfg.dataset_path, PathBuf::from("b.csv"));
    }

    #[test]
    fn falls_back_to_default_dataset() {
        let cfg = AppConfig::resolve(None, Some("  ".into()));
        assert_eq!(cfg.dataset_path, PathBuf::from(DEFAULT_DATASET));
        assert_eq!(cfg.domain, PlotDomain::default());
    }
}
