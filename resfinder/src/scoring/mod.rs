//! Scoring Engine
//!
//! Ranks singles, series pairs and parallel pairs against a target value.
//!
//! A candidate whose tolerance interval contains the target scores 0, plus a
//! tiny nominal-error term that orders equally good candidates by how close
//! their nominal is. Otherwise the score is the distance from the target to
//! the nearer interval edge, relative to the nominal.
//!
//! Selection is two-phase: the `n` best rows of each category are picked
//! first, then the (at most `3n`) survivors are merged and cut to `n`. A
//! category can therefore never be starved before it is compared.

pub mod result;

use std::cmp::Ordering;

use crate::core::ResFinderError;
use crate::table::{Composition, PairRecord, ValueRecord};

pub use result::{Configuration, MatchResult};

/// Weight of the nominal-error tie-break term.
pub const TIE_BREAK_WEIGHT: f64 = 1e-10;

/// Score one tolerance interval against `target`.
#[inline]
pub fn score(target: f64, lo: f64, nominal: f64, hi: f64) -> f64 {
    let distance = if lo <= target && target <= hi {
        0.0
    } else {
        (target - lo).abs().min((target - hi).abs()) / nominal
    };
    distance + TIE_BREAK_WEIGHT * ((target - nominal).abs() / nominal)
}

/// Reject targets that are not strictly positive finite resistances.
pub fn validate_target(target: f64) -> Result<(), ResFinderError> {
    if target.is_finite() && target > 0.0 {
        Ok(())
    } else {
        Err(ResFinderError::InvalidTarget(target))
    }
}

#[derive(Debug, Clone, Copy)]
struct Scored {
    score: f64,
    row: usize,
}

// Total order: score, then table position.
fn by_score_then_row(a: &Scored, b: &Scored) -> Ordering {
    a.score.total_cmp(&b.score).then(a.row.cmp(&b.row))
}

/// Keep the `n` lowest-scoring rows, sorted best first.
fn select_lowest(mut scored: Vec<Scored>, n: usize) -> Vec<Scored> {
    if n == 0 {
        return Vec::new();
    }
    if scored.len() > n {
        scored.select_nth_unstable_by(n - 1, by_score_then_row);
        scored.truncate(n);
    }
    scored.sort_unstable_by(by_score_then_row);
    scored
}

fn best_singles(target: f64, base: &[ValueRecord], n: usize) -> Vec<MatchResult> {
    let scored = base
        .iter()
        .enumerate()
        .map(|(row, r)| Scored {
            score: score(target, r.lo, r.nominal, r.hi),
            row,
        })
        .collect();

    select_lowest(scored, n)
        .into_iter()
        .map(|s| {
            let r = &base[s.row];
            MatchResult::new(
                Configuration::Single,
                vec![r.nominal],
                r.lo,
                r.nominal,
                r.hi,
                s.score,
            )
        })
        .collect()
}

fn best_pairs(
    target: f64,
    base: &[ValueRecord],
    pairs: &[PairRecord],
    composition: Composition,
    n: usize,
) -> Vec<MatchResult> {
    let scored = pairs
        .iter()
        .enumerate()
        .map(|(row, p)| Scored {
            score: score(target, p.lo, p.nominal, p.hi),
            row,
        })
        .collect();

    select_lowest(scored, n)
        .into_iter()
        .map(|s| {
            let p = &pairs[s.row];
            MatchResult::new(
                composition.into(),
                p.resistors(base).to_vec(),
                p.lo,
                p.nominal,
                p.hi,
                s.score,
            )
        })
        .collect()
}

/// Find the `n` best networks for `target` across all three tables.
///
/// `series` and `parallel` must have been built from `base`. Results are
/// ordered by ascending score; equal scores keep single, series, parallel
/// order. `n == 0` yields an empty list.
pub fn find_best(
    target: f64,
    base: &[ValueRecord],
    series: &[PairRecord],
    parallel: &[PairRecord],
    n: usize,
) -> Result<Vec<MatchResult>, ResFinderError> {
    validate_target(target)?;
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut candidates = best_singles(target, base, n);
    candidates.extend(best_pairs(target, base, series, Composition::Series, n));
    candidates.extend(best_pairs(target, base, parallel, Composition::Parallel, n));

    tracing::debug!(
        "Scored {} singles, {} series, {} parallel for {} Ω; {} candidates kept",
        base.len(),
        series.len(),
        parallel.len(),
        target,
        candidates.len()
    );

    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
    candidates.truncate(n);
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eseries::ESeries;
    use crate::table::{build_parallel_table, build_series_table, build_table};

    #[test]
    fn test_score_inside_interval() {
        let s = score(100.0, 99.0, 100.0, 101.0);
        assert_eq!(s, 0.0);
        let s = score(100.5, 99.0, 100.0, 101.0);
        assert!(s > 0.0 && s < 1e-12);
    }

    #[test]
    fn test_score_outside_interval() {
        let s = score(110.0, 99.0, 100.0, 101.0);
        assert!((s - 0.09).abs() < 1e-9);
        let below = score(90.0, 99.0, 100.0, 101.0);
        assert!((below - 0.09).abs() < 1e-9);
    }

    #[test]
    fn test_tie_break_never_flips_distance() {
        // Same distance to the edge, different nominal error.
        let near = score(102.0, 99.0, 100.0, 101.0);
        let far = score(103.0, 99.0, 100.0, 101.0);
        assert!(near < far);
    }

    #[test]
    fn test_tie_break_prefers_closer_nominal() {
        let centred = score(100.0, 95.0, 100.0, 105.0);
        let offset = score(100.0, 96.9, 102.0, 107.1);
        assert!(centred < offset);
    }

    #[test]
    fn test_select_lowest_is_deterministic() {
        let scored = vec![
            Scored { score: 0.5, row: 3 },
            Scored { score: 0.1, row: 7 },
            Scored { score: 0.1, row: 2 },
            Scored { score: 0.9, row: 0 },
        ];
        let picked = select_lowest(scored, 2);
        assert_eq!(picked.iter().map(|s| s.row).collect::<Vec<_>>(), vec![2, 7]);
    }

    #[test]
    fn test_select_lowest_short_input() {
        let scored = vec![Scored { score: 0.3, row: 1 }, Scored { score: 0.2, row: 0 }];
        let picked = select_lowest(scored, 10);
        assert_eq!(picked.len(), 2);
        assert_eq!(picked[0].row, 0);
    }

    #[test]
    fn test_find_best_small_table() {
        let base = build_table(ESeries::E12, 3, 2, 0.05).unwrap();
        let series = build_series_table(&base);
        let parallel = build_parallel_table(&base);

        let results = find_best(33.0, &base, &series, &parallel, 3).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].config, Configuration::Single);
        assert_eq!(results[0].nominal, 33.0);
        assert!(results.windows(2).all(|w| w[0].score <= w[1].score));
    }

    #[test]
    fn test_pair_resistors_ascending() {
        let base = build_table(ESeries::E24, 3, 3, 0.01).unwrap();
        let series = build_series_table(&base);
        let parallel = build_parallel_table(&base);
        let results = find_best(137.0, &base, &series, &parallel, 10).unwrap();
        for r in results.iter().filter(|r| r.config != Configuration::Single) {
            assert_eq!(r.resistors.len(), 2);
            assert!(r.resistors[0] <= r.resistors[1]);
        }
    }

    #[test]
    fn test_invalid_target() {
        let base = build_table(ESeries::E6, 3, 1, 0.2).unwrap();
        for target in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                find_best(target, &base, &[], &[], 3),
                Err(ResFinderError::InvalidTarget(_))
            ));
        }
    }

    #[test]
    fn test_zero_results_requested() {
        let base = build_table(ESeries::E6, 3, 1, 0.2).unwrap();
        let results = find_best(4.7, &base, &[], &[], 0).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_pair_tables() {
        let base = build_table(ESeries::E6, 3, 1, 0.2).unwrap();
        let results = find_best(4.7, &base, &[], &[], 4).unwrap();
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.config == Configuration::Single));
    }
}
