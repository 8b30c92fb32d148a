/// Data layer: records, loading, parameter axes and curve selection.
///
/// Architecture:
/// ```text
///  blasius_*.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse text → Dataset (NaN for bad cells)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   axes   │  distinct ν / U∞ → slider domains, initial Selection
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  Selection → VisibleCurve sorted by x
///   └──────────┘
/// ```

pub mod axes;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
