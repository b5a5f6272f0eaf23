//! E-Series Decade Generation
//!
//! Produces one decade of preferred resistor values for an IEC 60063 series.
//!
//! Two regimes are used:
//!
//! - **E6, E12, E24**: the published mantissa lists in [`iec`], scaled to the
//!   requested decade. These are exact and never rounded.
//! - **E48, E96, E192**: the geometric progression `10^(k/n)`, rounded to the
//!   requested number of significant figures.
//!
//! # Usage
//!
//! ```
//! use resfinder::eseries::{generate_decade, ESeries};
//!
//! let e12 = generate_decade(ESeries::E12, 3, 2).unwrap();
//! assert_eq!(e12[0], 10.0);
//! assert_eq!(e12.len(), 12);
//! ```

pub mod iec;

use std::fmt;

use serde::Serialize;

use crate::core::ResFinderError;

/// IEC 60063 series, named by values per decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ESeries {
    E6,
    E12,
    E24,
    E48,
    E96,
    E192,
}

impl ESeries {
    pub const ALL: [ESeries; 6] = [
        ESeries::E6,
        ESeries::E12,
        ESeries::E24,
        ESeries::E48,
        ESeries::E96,
        ESeries::E192,
    ];

    /// Look up a series by its density (values per decade).
    pub fn from_density(density: u32) -> Result<Self, ResFinderError> {
        match density {
            6 => Ok(ESeries::E6),
            12 => Ok(ESeries::E12),
            24 => Ok(ESeries::E24),
            48 => Ok(ESeries::E48),
            96 => Ok(ESeries::E96),
            192 => Ok(ESeries::E192),
            other => Err(ResFinderError::InvalidSeries(other)),
        }
    }

    pub fn density(self) -> u32 {
        match self {
            ESeries::E6 => 6,
            ESeries::E12 => 12,
            ESeries::E24 => 24,
            ESeries::E48 => 48,
            ESeries::E96 => 96,
            ESeries::E192 => 192,
        }
    }
}

impl fmt::Display for ESeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.density())
    }
}

impl TryFrom<u32> for ESeries {
    type Error = ResFinderError;

    fn try_from(density: u32) -> Result<Self, Self::Error> {
        ESeries::from_density(density)
    }
}

/// Generate decade `decade_index` (1 = 1..10 Ω, 2 = 10..100 Ω, ...) of a series.
///
/// `precision` is the number of significant figures kept by the formula
/// regime; it is validated for every series but only affects E48 and above.
/// Decades whose values do not fit in an `f64` are rejected with
/// [`ResFinderError::InvalidDecade`].
pub fn generate_decade(
    series: ESeries,
    precision: u32,
    decade_index: u32,
) -> Result<Vec<f64>, ResFinderError> {
    if decade_index < 1 {
        return Err(ResFinderError::InvalidDecade(decade_index));
    }
    if precision < 1 {
        return Err(ResFinderError::InvalidPrecision(precision));
    }

    let scale = decade_scale(decade_index)?;

    let values: Vec<f64> = match iec::mantissas(series) {
        Some(mantissas) => mantissas.iter().map(|m| m * scale).collect(),
        None => {
            let density = series.density();
            (0..density)
                .map(|k| {
                    let raw = 10f64.powf(f64::from(k) / f64::from(density)) * scale;
                    round_to_significant(raw, precision)
                })
                .collect::<Result<Vec<f64>, ResFinderError>>()?
        }
    };

    if values.iter().all(|v| v.is_finite() && *v > 0.0) {
        Ok(values)
    } else {
        Err(ResFinderError::InvalidDecade(decade_index))
    }
}

/// Round `value` to `precision` significant figures, ties to even.
///
/// Fails with [`ResFinderError::InvalidPrecision`] when the rounding step
/// does not fit in an `f64`.
pub fn round_to_significant(value: f64, precision: u32) -> Result<f64, ResFinderError> {
    if value == 0.0 || !value.is_finite() {
        return Ok(value);
    }
    let order = i64::from(value.abs().log10().floor() as i32);
    let shift = i32::try_from(i64::from(precision) - 1 - order)
        .map_err(|_| ResFinderError::InvalidPrecision(precision))?;

    let rounded = if shift >= 0 {
        let factor = 10f64.powi(shift);
        (value * factor).round_ties_even() / factor
    } else {
        // Divide by an exact power of ten so whole-ohm results stay exact.
        let step = 10f64.powi(-shift);
        (value / step).round_ties_even() * step
    };

    if rounded.is_finite() {
        Ok(rounded)
    } else {
        Err(ResFinderError::InvalidPrecision(precision))
    }
}

fn decade_scale(decade_index: u32) -> Result<f64, ResFinderError> {
    let exponent =
        i32::try_from(decade_index - 1).map_err(|_| ResFinderError::InvalidDecade(decade_index))?;
    let scale = 10f64.powi(exponent);
    if scale.is_finite() {
        Ok(scale)
    } else {
        Err(ResFinderError::InvalidDecade(decade_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_density() {
        for series in ESeries::ALL {
            assert_eq!(ESeries::from_density(series.density()).unwrap(), series);
        }
        assert!(matches!(
            ESeries::from_density(10),
            Err(ResFinderError::InvalidSeries(10))
        ));
        assert!(ESeries::try_from(0).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ESeries::E96.to_string(), "E96");
        assert_eq!(ESeries::E6.to_string(), "E6");
    }

    #[test]
    fn test_e24_matches_iec_exactly() {
        let values = generate_decade(ESeries::E24, 3, 1).unwrap();
        assert_eq!(values, iec::E24_MANTISSAS);
    }

    #[test]
    fn test_override_ignores_precision() {
        let p1 = generate_decade(ESeries::E12, 1, 1).unwrap();
        let p5 = generate_decade(ESeries::E12, 5, 1).unwrap();
        assert_eq!(p1, p5);
    }

    #[test]
    fn test_e96_first_decade() {
        let values = generate_decade(ESeries::E96, 3, 1).unwrap();
        assert_eq!(values.len(), 96);
        assert_eq!(values[0], 1.0);
        assert_eq!(values[1], 1.02);
        assert_eq!(values[95], 9.76);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_e192_is_strictly_increasing() {
        let values = generate_decade(ESeries::E192, 3, 1).unwrap();
        assert_eq!(values.len(), 192);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_rounding_keeps_whole_ohms_exact() {
        let values = generate_decade(ESeries::E96, 3, 4).unwrap();
        assert!(values.contains(&1580.0));
        assert!(values.iter().all(|v| v.fract() == 0.0));
    }

    #[test]
    fn test_round_to_significant() {
        assert_eq!(round_to_significant(1.2345, 3).unwrap(), 1.23);
        assert_eq!(round_to_significant(12345.0, 2).unwrap(), 12000.0);
        assert_eq!(round_to_significant(0.012345, 2).unwrap(), 0.012);
        assert_eq!(round_to_significant(0.0, 3).unwrap(), 0.0);
        assert_eq!(round_to_significant(2.5, 1).unwrap(), 2.0);
    }

    #[test]
    fn test_round_to_significant_overflowing_step() {
        assert!(matches!(
            round_to_significant(1.5, 400),
            Err(ResFinderError::InvalidPrecision(400))
        ));
        assert!(matches!(
            round_to_significant(1.5, u32::MAX),
            Err(ResFinderError::InvalidPrecision(u32::MAX))
        ));
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            generate_decade(ESeries::E96, 3, 0),
            Err(ResFinderError::InvalidDecade(0))
        ));
        assert!(matches!(
            generate_decade(ESeries::E96, 0, 1),
            Err(ResFinderError::InvalidPrecision(0))
        ));
    }

    #[test]
    fn test_decade_out_of_range() {
        for decade in [400, 3_000_000_000, u32::MAX] {
            assert!(
                matches!(
                    generate_decade(ESeries::E6, 3, decade),
                    Err(ResFinderError::InvalidDecade(d)) if d == decade
                ),
                "decade {} should be rejected",
                decade
            );
        }
        // 6.8e308 overflows even though the decade scale 1e308 fits.
        assert!(matches!(
            generate_decade(ESeries::E6, 3, 309),
            Err(ResFinderError::InvalidDecade(309))
        ));
    }

    #[test]
    fn test_precision_out_of_range() {
        assert!(matches!(
            generate_decade(ESeries::E96, 400, 1),
            Err(ResFinderError::InvalidPrecision(400))
        ));
    }

    #[test]
    fn test_high_decade_stays_finite() {
        let values = generate_decade(ESeries::E96, 3, 300).unwrap();
        assert_eq!(values.len(), 96);
        assert!(values.iter().all(|v| v.is_finite() && *v > 0.0));
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }
}
