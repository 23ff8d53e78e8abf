//! Cover selection for Boolean function minimization
//!
//! Given the prime implicants of a function, this module picks a small subset of
//! them that still covers every minterm. Essential prime implicants are taken
//! first; when none is left, the implicant covering the most still-uncovered
//! minterms is taken. The result is a heuristic, not a guaranteed minimum.

mod chart;

pub use chart::CoverageChart;

use crate::term::Term;
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet};

/// How an implicant was picked by [`select_cover`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    /// Only remaining implicant covering some uncovered minterm
    Essential,
    /// Largest number of uncovered minterms (smallest term on ties)
    Greedy,
}

/// Select a set of prime implicants covering every minterm
///
/// Every loop iteration first looks for an essential implicant, scanning the
/// uncovered minterms in ascending order; if none exists, the remaining
/// implicant with the largest number of uncovered minterms is taken, ties going
/// to the smallest [`Term`]. The selected implicant's minterms are then removed
/// from the uncovered set and the implicant from further consideration.
///
/// # Panics
///
/// Panics if a prime implicant does not have `num_vars` positions or if some
/// minterm is not covered by any prime implicant.
///
/// # Examples
///
/// ```
/// use boolgen::{prime_implicants, select_cover};
///
/// // f(A, B, C) = B | C
/// let minterms = [1, 2, 3, 5, 6, 7];
/// let primes = prime_implicants(3, &minterms);
/// let cover = select_cover(&primes, &minterms, 3);
///
/// assert_eq!(cover, primes);
/// ```
pub fn select_cover(
    primes: &BTreeSet<Term>,
    minterms: &[usize],
    num_vars: usize,
) -> BTreeSet<Term> {
    assert!(
        primes.iter().all(|p| p.len() == num_vars),
        "prime implicant width does not match {} variables",
        num_vars
    );

    let chart = CoverageChart::new(primes, minterms);
    debug!(
        "coverage chart: {} prime implicants over {} minterms, {} covered only once",
        chart.num_implicants(),
        minterms.len(),
        chart.essential_minterms().count()
    );
    let mut remaining: BTreeMap<Term, BTreeSet<usize>> = chart
        .implicants()
        .map(|(term, covered)| (term.clone(), covered.clone()))
        .collect();
    let mut uncovered: BTreeSet<usize> = minterms.iter().copied().collect();
    let mut selected = BTreeSet::new();

    while !uncovered.is_empty() {
        let (pick, kind) = match find_essential(&chart, &remaining, &uncovered) {
            Some(term) => (term, Pick::Essential),
            None => (find_greedy(&remaining, &uncovered), Pick::Greedy),
        };

        let covered = remaining
            .remove(&pick)
            .expect("picked implicant must still be available");
        trace!(
            "{:?} pick {} covers {} of {} uncovered minterms",
            kind,
            pick,
            covered.intersection(&uncovered).count(),
            uncovered.len()
        );
        uncovered.retain(|m| !covered.contains(m));
        selected.insert(pick);
    }

    selected
}

/// First uncovered minterm (ascending) with a single remaining candidate
fn find_essential(
    chart: &CoverageChart,
    remaining: &BTreeMap<Term, BTreeSet<usize>>,
    uncovered: &BTreeSet<usize>,
) -> Option<Term> {
    uncovered.iter().find_map(|&minterm| {
        let mut candidates = chart
            .covering(minterm)
            .iter()
            .filter(|term| remaining.contains_key(*term));
        match (candidates.next(), candidates.next()) {
            (Some(only), None) => Some(only.clone()),
            _ => None,
        }
    })
}

/// Remaining implicant covering the most uncovered minterms
fn find_greedy(
    remaining: &BTreeMap<Term, BTreeSet<usize>>,
    uncovered: &BTreeSet<usize>,
) -> Term {
    let mut best: Option<(&Term, usize)> = None;
    // BTreeMap iterates in Term order, so keeping the first maximum breaks ties
    // towards the smallest term.
    for (term, covered) in remaining {
        let gain = covered.intersection(uncovered).count();
        if best.map_or(true, |(_, best_gain)| gain > best_gain) {
            best = Some((term, gain));
        }
    }
    match best {
        Some((term, gain)) if gain > 0 => term.clone(),
        _ => panic!(
            "no prime implicant covers the {} remaining minterms",
            uncovered.len()
        ),
    }
}
