//! Prime implicant chart
//!
//! Relates every prime implicant to the minterms it covers and every minterm to
//! the prime implicants covering it.

use crate::term::Term;
use std::collections::{BTreeMap, BTreeSet};

/// Coverage relation between prime implicants and minterms
#[derive(Debug, Clone)]
pub struct CoverageChart {
    /// Prime implicant -> minterms of the instance it covers
    implicants: BTreeMap<Term, BTreeSet<usize>>,
    /// Minterm -> prime implicants covering it, in term order
    coverage: BTreeMap<usize, Vec<Term>>,
}

impl CoverageChart {
    /// Build the chart for `primes` over the instance `minterms`
    ///
    /// # Panics
    ///
    /// Panics if some minterm is not covered by any prime implicant, which
    /// cannot happen when `primes` was produced from the same minterms.
    pub fn new(primes: &BTreeSet<Term>, minterms: &[usize]) -> Self {
        let mut coverage: BTreeMap<usize, Vec<Term>> =
            minterms.iter().map(|&m| (m, Vec::new())).collect();
        let mut implicants = BTreeMap::new();

        for prime in primes {
            let mut covered = BTreeSet::new();
            for m in prime.minterms() {
                if let Some(terms) = coverage.get_mut(&m) {
                    terms.push(prime.clone());
                    covered.insert(m);
                }
            }
            implicants.insert(prime.clone(), covered);
        }

        if let Some((m, _)) = coverage.iter().find(|(_, terms)| terms.is_empty()) {
            panic!("minterm {} is not covered by any prime implicant", m);
        }

        CoverageChart {
            implicants,
            coverage,
        }
    }

    /// Iterate over prime implicants and the minterms each one covers
    pub fn implicants(&self) -> impl Iterator<Item = (&Term, &BTreeSet<usize>)> {
        self.implicants.iter()
    }

    /// Prime implicants covering `minterm` (empty if it is not in the instance)
    pub fn covering(&self, minterm: usize) -> &[Term] {
        self.coverage.get(&minterm).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Minterms that exactly one prime implicant covers
    pub fn essential_minterms(&self) -> impl Iterator<Item = usize> + '_ {
        self.coverage
            .iter()
            .filter(|(_, terms)| terms.len() == 1)
            .map(|(&m, _)| m)
    }

    /// Number of prime implicants in the chart
    pub fn num_implicants(&self) -> usize {
        self.implicants.len()
    }
}
