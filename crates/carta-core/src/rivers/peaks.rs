//! Local-maxima search over the height field.

use crate::grid::ScalarField;

/// `(row, col)` anchor whose height equals the maximum of the window
/// anchored at it.
pub type Peak = (usize, usize);

/// Candidates closer than this (Chebyshev box, strict) to an already
/// accepted peak are suppressed.
const SUPPRESSION: i64 = 5;

/// Find candidate river sources: coarse local maxima of the height field.
/// `window` must be smaller than both field dimensions (checked by
/// `trace_rivers`).
///
/// Every valid top-left anchor of a `window`-sized block is tested; the
/// anchor is a raw candidate iff its own height equals the block maximum.
/// Near-duplicates are suppressed in scan order — a later candidate within
/// the suppression box of any accepted peak is dropped, so earlier-scanned
/// peaks win ties.
pub fn find_peaks(field: &ScalarField, window: usize) -> Vec<Peak> {
    let mut accepted: Vec<Peak> = Vec::new();
    for row in 0..field.height - window {
        for col in 0..field.width - window {
            let own = field.get(row, col);
            let mut max = f32::NEG_INFINITY;
            for r in row..row + window {
                for c in col..col + window {
                    max = max.max(field.get(r, c));
                }
            }
            if own < max {
                continue;
            }
            let near_accepted = accepted.iter().any(|&(pr, pc)| {
                (pr as i64 - row as i64).abs() < SUPPRESSION
                    && (pc as i64 - col as i64).abs() < SUPPRESSION
            });
            if !near_accepted {
                accepted.push((row, col));
            }
        }
    }
    accepted
}
