//! Core search logic shared by the library API and the CLI.
//! No terminal or formatting dependencies.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::eseries::ESeries;
use crate::scoring::{find_best, validate_target, Configuration, MatchResult};
use crate::table::{build_parallel_table, build_series_table, build_table, PairRecord, ValueRecord};

#[derive(Debug, thiserror::Error)]
pub enum ResFinderError {
    #[error("Unsupported E-series density {0} (expected 6, 12, 24, 48, 96 or 192)")]
    InvalidSeries(u32),
    #[error("Tolerance must be a fraction between 0 and 1, got {0}")]
    InvalidTolerance(f64),
    #[error("Target resistance must be a positive number of ohms, got {0}")]
    InvalidTarget(f64),
    #[error("Decade index and decade count must be at least 1, got {0}")]
    InvalidDecade(u32),
    #[error("Precision must be at least 1 significant figure, got {0}")]
    InvalidPrecision(u32),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Restricts a search to one network shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFilter {
    #[default]
    Any,
    Single,
    Series,
    Parallel,
}

impl ConfigFilter {
    pub fn matches(self, config: Configuration) -> bool {
        match self {
            ConfigFilter::Any => true,
            ConfigFilter::Single => config == Configuration::Single,
            ConfigFilter::Series => config == Configuration::Series,
            ConfigFilter::Parallel => config == Configuration::Parallel,
        }
    }
}

/// Options for search runs (CLI or library).
#[derive(Clone, Debug)]
pub struct SearchOptions {
    pub series: ESeries,
    /// Significant figures for formula-derived series.
    pub precision: u32,
    /// Number of decades starting at 1 Ω.
    pub decades: u32,
    /// Part tolerance as a fraction (0.01 = 1%).
    pub tolerance: f64,
    pub max_results: usize,
    pub filter: ConfigFilter,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            series: ESeries::E96,
            precision: 3,
            decades: 6,
            tolerance: 0.01,
            max_results: 5,
            filter: ConfigFilter::Any,
        }
    }
}

impl SearchOptions {
    pub fn table_key(&self) -> TableKey {
        TableKey {
            series: self.series,
            precision: self.precision,
            decades: self.decades,
            tolerance_bits: self.tolerance.to_bits(),
        }
    }
}

/// Everything the value and pair tables depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableKey {
    pub series: ESeries,
    pub precision: u32,
    pub decades: u32,
    tolerance_bits: u64,
}

impl TableKey {
    pub fn tolerance(&self) -> f64 {
        f64::from_bits(self.tolerance_bits)
    }
}

/// Base, series and parallel tables for one configuration.
#[derive(Debug, Clone)]
pub struct TableSet {
    pub key: TableKey,
    pub base: Vec<ValueRecord>,
    pub series: Vec<PairRecord>,
    pub parallel: Vec<PairRecord>,
}

impl TableSet {
    pub fn build(options: &SearchOptions) -> Result<Self, ResFinderError> {
        let base = build_table(
            options.series,
            options.precision,
            options.decades,
            options.tolerance,
        )?;
        let series = build_series_table(&base);
        let parallel = build_parallel_table(&base);
        Ok(Self {
            key: options.table_key(),
            base,
            series,
            parallel,
        })
    }

    pub fn find_best(&self, target: f64, n: usize) -> Result<Vec<MatchResult>, ResFinderError> {
        find_best(target, &self.base, &self.series, &self.parallel, n)
    }

    /// Total number of candidates across all three tables.
    pub fn candidate_count(&self) -> usize {
        self.base.len() + self.series.len() + self.parallel.len()
    }
}

/// Memoizes table sets by configuration.
///
/// Entries are never evicted; call [`TableCache::clear`] to drop them.
/// Tables are built without holding the lock, so lookups for other keys do
/// not wait on a build. Two callers racing on the same new key may both
/// build, and the first one to insert wins.
#[derive(Debug, Default)]
pub struct TableCache {
    tables: Mutex<HashMap<TableKey, Arc<TableSet>>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached tables for `options`, building them on first use.
    pub fn get_or_build(&self, options: &SearchOptions) -> Result<Arc<TableSet>, ResFinderError> {
        let key = options.table_key();
        if let Some(set) = self.lookup(&key) {
            tracing::trace!("Table cache hit for {} x{} decades", key.series, key.decades);
            return Ok(set);
        }

        let built = Arc::new(TableSet::build(options)?);
        let mut tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        Ok(Arc::clone(tables.entry(key).or_insert(built)))
    }

    fn lookup(&self, key: &TableKey) -> Option<Arc<TableSet>> {
        let tables = self.tables.lock().unwrap_or_else(|e| e.into_inner());
        tables.get(key).map(Arc::clone)
    }

    pub fn len(&self) -> usize {
        self.tables.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.tables.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

/// Ranked matches for one target.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub target: f64,
    pub series: ESeries,
    pub tolerance: f64,
    pub filter: ConfigFilter,
    pub results: Vec<MatchResult>,
}

impl SearchReport {
    pub fn best(&self) -> Option<&MatchResult> {
        self.results.first()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }
}

/// Core search API used by the CLI.
pub struct ResFinderCore;

impl ResFinderCore {
    /// Build tables for `options` and rank networks for `target`.
    pub fn search(target: f64, options: &SearchOptions) -> Result<SearchReport, ResFinderError> {
        validate_target(target)?;
        let tables = TableSet::build(options)?;
        Self::search_tables(target, &tables, options)
    }

    /// Same as [`ResFinderCore::search`], reusing tables held in `cache`.
    pub fn search_with_cache(
        target: f64,
        options: &SearchOptions,
        cache: &TableCache,
    ) -> Result<SearchReport, ResFinderError> {
        validate_target(target)?;
        let tables = cache.get_or_build(options)?;
        Self::search_tables(target, &tables, options)
    }

    fn search_tables(
        target: f64,
        tables: &TableSet,
        options: &SearchOptions,
    ) -> Result<SearchReport, ResFinderError> {
        // Filtering happens after ranking, so over-fetch when a filter is active.
        let requested = match options.filter {
            ConfigFilter::Any => options.max_results,
            _ => options.max_results.saturating_mul(3),
        };

        let mut results = tables.find_best(target, requested)?;
        results.retain(|r| options.filter.matches(r.config));
        results.truncate(options.max_results);

        tracing::info!(
            "Found {} matches for {} Ω in {} ({} candidates)",
            results.len(),
            target,
            options.series,
            tables.candidate_count()
        );

        Ok(SearchReport {
            target,
            series: options.series,
            tolerance: options.tolerance,
            filter: options.filter,
            results,
        })
    }
}
