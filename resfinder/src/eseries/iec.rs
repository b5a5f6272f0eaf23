//! IEC 60063 Preferred Number Lists
//!
//! The published E6, E12 and E24 mantissas do not follow the geometric
//! `10^(k/n)` progression (E24 has 2.7, 3.0, 3.3 where the formula gives
//! 2.61, 2.87, 3.16). They are stored verbatim and never recomputed.

use super::ESeries;

/// E6 mantissas, first decade.
pub const E6_MANTISSAS: &[f64] = &[1.0, 1.5, 2.2, 3.3, 4.7, 6.8];

/// E12 mantissas, first decade.
pub const E12_MANTISSAS: &[f64] = &[
    1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2,
];

/// E24 mantissas, first decade.
pub const E24_MANTISSAS: &[f64] = &[
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
];

/// Published mantissa list for a series, if the standard mandates one.
pub fn mantissas(series: ESeries) -> Option<&'static [f64]> {
    match series {
        ESeries::E6 => Some(E6_MANTISSAS),
        ESeries::E12 => Some(E12_MANTISSAS),
        ESeries::E24 => Some(E24_MANTISSAS),
        ESeries::E48 | ESeries::E96 | ESeries::E192 => None,
    }
}
