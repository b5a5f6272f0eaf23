//! Caller-visible match records.

use std::fmt;

use serde::Serialize;

use crate::table::Composition;

/// Network shape of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Configuration {
    Single,
    Series,
    Parallel,
}

impl Configuration {
    pub fn as_str(self) -> &'static str {
        match self {
            Configuration::Single => "single",
            Configuration::Series => "series",
            Configuration::Parallel => "parallel",
        }
    }

    /// Number of resistors the network uses.
    pub fn part_count(self) -> usize {
        match self {
            Configuration::Single => 1,
            Configuration::Series | Configuration::Parallel => 2,
        }
    }
}

impl From<Composition> for Configuration {
    fn from(composition: Composition) -> Self {
        match composition {
            Composition::Series => Configuration::Series,
            Composition::Parallel => Configuration::Parallel,
        }
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ranked resistor network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub config: Configuration,
    /// Nominal values used, ascending for two-part networks.
    pub resistors: Vec<f64>,
    pub nominal: f64,
    pub lo: f64,
    pub hi: f64,
    /// Lower is better; 0 means the target lies inside `[lo, hi]`.
    pub score: f64,
    pub lower_tolerance_percent: f64,
    pub upper_tolerance_percent: f64,
}

impl MatchResult {
    pub fn new(
        config: Configuration,
        resistors: Vec<f64>,
        lo: f64,
        nominal: f64,
        hi: f64,
        score: f64,
    ) -> Self {
        Self {
            config,
            resistors,
            nominal,
            lo,
            hi,
            score,
            lower_tolerance_percent: (nominal - lo) / nominal * 100.0,
            upper_tolerance_percent: (hi - nominal) / nominal * 100.0,
        }
    }

    /// Signed deviation of the nominal value from `target`, in percent.
    pub fn error_percent(&self, target: f64) -> f64 {
        (self.nominal - target) / target * 100.0
    }
}
