//! Tolerance Tables
//!
//! The base table is a flat list of `(lo, nominal, hi)` intervals, one per
//! preferred value, in ascending decade order. Pair tables refer back into it
//! by position, so its order is fixed once built.

pub mod pairs;

use serde::Serialize;

use crate::core::ResFinderError;
use crate::eseries::{generate_decade, ESeries};

pub use pairs::{build_parallel_table, build_series_table, Composition, PairRecord};

/// Tolerance interval around one preferred value, in ohms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRecord {
    pub lo: f64,
    pub nominal: f64,
    pub hi: f64,
}

impl ValueRecord {
    pub fn with_tolerance(nominal: f64, tolerance: f64) -> Self {
        Self {
            lo: nominal * (1.0 - tolerance),
            nominal,
            hi: nominal * (1.0 + tolerance),
        }
    }
}

/// Check that a tolerance is a fraction strictly between 0 and 1.
pub fn validate_tolerance(tolerance: f64) -> Result<(), ResFinderError> {
    if tolerance > 0.0 && tolerance < 1.0 {
        Ok(())
    } else {
        Err(ResFinderError::InvalidTolerance(tolerance))
    }
}

/// Build the base table for decades `1..=decade_count` of a series.
pub fn build_table(
    series: ESeries,
    precision: u32,
    decade_count: u32,
    tolerance: f64,
) -> Result<Vec<ValueRecord>, ResFinderError> {
    validate_tolerance(tolerance)?;
    if decade_count < 1 {
        return Err(ResFinderError::InvalidDecade(decade_count));
    }

    let mut table = Vec::new();
    for decade in 1..=decade_count {
        let nominals = generate_decade(series, precision, decade)?;
        table.extend(
            nominals
                .into_iter()
                .map(|nominal| ValueRecord::with_tolerance(nominal, tolerance)),
        );
    }

    // Rows ascend, so the last one bounds every series sum.
    if table.last().is_some_and(|row| !(row.hi * 2.0).is_finite()) {
        return Err(ResFinderError::InvalidDecade(decade_count));
    }

    tracing::debug!(
        "Built {} base table: {} values over {} decades at ±{}%",
        series,
        table.len(),
        decade_count,
        tolerance * 100.0
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_length() {
        let table = build_table(ESeries::E96, 3, 6, 0.01).unwrap();
        assert_eq!(table.len(), 576);
        let table = build_table(ESeries::E6, 3, 2, 0.2).unwrap();
        assert_eq!(table.len(), 12);
    }

    #[test]
    fn test_rows_are_ordered_intervals() {
        let table = build_table(ESeries::E24, 3, 3, 0.05).unwrap();
        for row in &table {
            assert!(row.lo > 0.0);
            assert!(row.lo < row.nominal && row.nominal < row.hi);
        }
        assert!(table.windows(2).all(|w| w[0].nominal < w[1].nominal));
    }

    #[test]
    fn test_range_coverage() {
        let table = build_table(ESeries::E96, 3, 6, 0.01).unwrap();
        assert_eq!(table.first().unwrap().nominal, 1.0);
        assert!(table.last().unwrap().nominal > 900_000.0);
    }

    #[test]
    fn test_with_tolerance() {
        let row = ValueRecord::with_tolerance(100.0, 0.05);
        assert_eq!(row.nominal, 100.0);
        assert!((row.lo - 95.0).abs() < 1e-12);
        assert!((row.hi - 105.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_tolerance() {
        for tolerance in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(
                build_table(ESeries::E96, 3, 1, tolerance),
                Err(ResFinderError::InvalidTolerance(_))
            ));
        }
    }

    #[test]
    fn test_invalid_decade_count() {
        assert!(matches!(
            build_table(ESeries::E12, 3, 0, 0.01),
            Err(ResFinderError::InvalidDecade(0))
        ));
    }

    #[test]
    fn test_decade_count_beyond_f64_range() {
        assert!(matches!(
            build_table(ESeries::E6, 3, 320, 0.01),
            Err(ResFinderError::InvalidDecade(309))
        ));
        // Values fit, but 6.8e307 * 1.5 doubled for a series pair does not.
        assert!(matches!(
            build_table(ESeries::E6, 3, 308, 0.5),
            Err(ResFinderError::InvalidDecade(308))
        ));
    }
}
