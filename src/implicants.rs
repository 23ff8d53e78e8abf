//! Prime implicant generation
//!
//! Implements the merging phase of the Quine-McCluskey method: terms are grouped
//! by their number of `1` symbols and terms in adjacent groups that differ in a
//! single position are combined, round after round, until a fixed point.

use crate::term::Term;
use log::debug;
use std::collections::{BTreeSet, HashSet};

/// Compute every prime implicant of the function whose ON-set is `minterms`
///
/// Each round reads the current generation of groups and writes the next one;
/// terms that were never merged during their round are prime. Since every round
/// adds one dash to each surviving term, the loop terminates after at most
/// `num_vars + 1` rounds.
///
/// Returns an empty set when `minterms` is empty. Constant functions must be
/// handled by the caller before reaching this point.
///
/// # Panics
///
/// Panics if `num_vars` is zero while `minterms` is not empty, if a minterm does
/// not fit in `num_vars` bits, or if a minterm appears twice.
///
/// # Examples
///
/// ```
/// use boolgen::{prime_implicants, Term};
///
/// // f(B, C) = B | C
/// let primes = prime_implicants(2, &[1, 2, 3]);
/// let rendered: Vec<String> = primes.iter().map(Term::to_string).collect();
/// assert_eq!(rendered, vec!["1-", "-1"]);
/// ```
pub fn prime_implicants(num_vars: usize, minterms: &[usize]) -> BTreeSet<Term> {
    let mut primes = BTreeSet::new();
    if minterms.is_empty() {
        return primes;
    }
    assert!(num_vars >= 1, "prime implicant generation needs at least one variable");

    let mut groups: Vec<Vec<Term>> = vec![Vec::new(); num_vars + 1];
    let mut seen = HashSet::with_capacity(minterms.len());
    for &minterm in minterms {
        assert!(seen.insert(minterm), "duplicate minterm {}", minterm);
        let term = Term::from_minterm(minterm, num_vars);
        groups[term.count_ones()].push(term);
    }

    let mut round = 0;
    loop {
        let mut next: Vec<BTreeSet<Term>> = vec![BTreeSet::new(); num_vars + 1];
        let mut merged: HashSet<&Term> = HashSet::new();
        let mut merges = 0;

        for i in 0..num_vars {
            for low in &groups[i] {
                for high in &groups[i + 1] {
                    if let Some(combined) = low.combine(high) {
                        next[i].insert(combined);
                        merged.insert(low);
                        merged.insert(high);
                        merges += 1;
                    }
                }
            }
        }

        let before = primes.len();
        for term in groups.iter().flatten() {
            if !merged.contains(term) {
                primes.insert(term.clone());
            }
        }

        debug!(
            "round {}: {} terms, {} merges, {} new primes",
            round,
            groups.iter().map(Vec::len).sum::<usize>(),
            merges,
            primes.len() - before
        );

        if next.iter().all(BTreeSet::is_empty) {
            break;
        }
        groups = next
            .into_iter()
            .map(|group| group.into_iter().collect())
            .collect();
        round += 1;
    }

    primes
}
