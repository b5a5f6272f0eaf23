//! resfinder - E-series resistor matching library
//!
//! This library finds the standard resistor, or pair of resistors in series
//! or parallel, whose tolerance range best covers an arbitrary target
//! resistance.
//!
//! # Quick Start
//!
//! ```
//! use resfinder::{ResFinderCore, SearchOptions};
//!
//! let options = SearchOptions::default();
//! let report = ResFinderCore::search(1580.0, &options).unwrap();
//!
//! for m in &report.results {
//!     println!("{} {:?}: {} Ω (score {:.3e})", m.config, m.resistors, m.nominal, m.score);
//! }
//! ```
//!
//! # Pipeline
//!
//! - **E-series decades**: IEC 60063 lists for E6/E12/E24, rounded
//!   `10^(k/n)` for E48/E96/E192
//! - **Tolerance tables**: `(lo, nominal, hi)` per preferred value
//! - **Pair tables**: every series and parallel pair, indexed back into the
//!   base table
//! - **Scoring**: per-category top-n, then a merged top-n
//!
//! The individual stages are public for callers that want to build and keep
//! their own tables.

pub mod core;
pub mod eseries;
pub mod scoring;
pub mod table;
pub mod units;

// Re-export main types
pub use crate::core::{
    ConfigFilter, ResFinderCore, ResFinderError, SearchOptions, SearchReport, TableCache,
    TableKey, TableSet,
};
pub use eseries::{generate_decade, ESeries};
pub use scoring::{find_best, Configuration, MatchResult};
pub use table::{
    build_parallel_table, build_series_table, build_table, Composition, PairRecord, ValueRecord,
};
pub use units::{format_resistance, parse_resistance};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        build_parallel_table, build_series_table, build_table, find_best, generate_decade,
        ConfigFilter, Configuration, ESeries, MatchResult, ResFinderCore, ResFinderError,
        SearchOptions, SearchReport, TableCache, TableSet,
    };
}
