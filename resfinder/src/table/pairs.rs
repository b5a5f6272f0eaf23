//! Two-resistor combinations.
//!
//! Every unordered pair `(i, j)` with `i <= j` is enumerated once, including
//! `i == j` (two equal parts). Swapped orderings describe the same physical
//! network and are never emitted.

use serde::Serialize;

use super::ValueRecord;

/// How two resistors are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    Series,
    Parallel,
}

impl Composition {
    /// Resistance of `a` and `b` joined this way.
    #[inline]
    pub fn combine(self, a: f64, b: f64) -> f64 {
        match self {
            Composition::Series => a + b,
            Composition::Parallel => (a * b) / (a + b),
        }
    }
}

/// Tolerance interval of a two-resistor network.
///
/// `first <= second` index the base table the record was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairRecord {
    pub lo: f64,
    pub nominal: f64,
    pub hi: f64,
    pub first: usize,
    pub second: usize,
}

impl PairRecord {
    /// Nominal values of both parts, smaller first.
    pub fn resistors(&self, base: &[ValueRecord]) -> [f64; 2] {
        let a = base[self.first].nominal;
        let b = base[self.second].nominal;
        if a <= b {
            [a, b]
        } else {
            [b, a]
        }
    }
}

/// Combine every pair of base values.
///
/// Both composition laws are monotonic increasing in each argument, so the
/// low and high bounds come from combining the low pair and the high pair.
pub fn build_pair_table(base: &[ValueRecord], composition: Composition) -> Vec<PairRecord> {
    let n = base.len();
    let mut rows = Vec::with_capacity(n * (n + 1) / 2);
    for (i, a) in base.iter().enumerate() {
        for (j, b) in base.iter().enumerate().skip(i) {
            rows.push(PairRecord {
                lo: composition.combine(a.lo, b.lo),
                nominal: composition.combine(a.nominal, b.nominal),
                hi: composition.combine(a.hi, b.hi),
                first: i,
                second: j,
            });
        }
    }
    tracing::debug!("Built {:?} table with {} pairs", composition, rows.len());
    rows
}

pub fn build_series_table(base: &[ValueRecord]) -> Vec<PairRecord> {
    build_pair_table(base, Composition::Series)
}

pub fn build_parallel_table(base: &[ValueRecord]) -> Vec<PairRecord> {
    build_pair_table(base, Composition::Parallel)
}
