//! Term types for Quine-McCluskey minimization
//!
//! This module provides the symbolic bit patterns manipulated by the minimizer:
//! - [`Symbol`]: A single position of a term (`0`, `1` or `-`)
//! - [`Term`]: A fixed-width sequence of symbols denoting a set of minterms

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Value of a single position in a term
///
/// The derived ordering (`Zero < One < Dash`) is the ordering used by [`Term`]
/// when the cover selector has to break a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// Variable must be 0 (negated literal)
    Zero,
    /// Variable must be 1 (plain literal)
    One,
    /// Position merged out (don't care)
    Dash,
}

impl Symbol {
    /// Parse a symbol from its character form
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Symbol::Zero),
            '1' => Some(Symbol::One),
            '-' => Some(Symbol::Dash),
            _ => None,
        }
    }

    /// Character form of this symbol
    pub fn to_char(self) -> char {
        match self {
            Symbol::Zero => '0',
            Symbol::One => '1',
            Symbol::Dash => '-',
        }
    }

    /// Whether this position is fixed (not a dash)
    pub fn is_fixed(self) -> bool {
        !matches!(self, Symbol::Dash)
    }

    fn matches_bit(self, bit: bool) -> bool {
        match self {
            Symbol::Zero => !bit,
            Symbol::One => bit,
            Symbol::Dash => true,
        }
    }
}

/// A product term over a fixed number of input variables
///
/// Position 0 corresponds to the first input variable, which is the most
/// significant bit of a minterm index. Terms are pure values: two terms are
/// equal exactly when their symbol sequences are equal.
///
/// # Examples
///
/// ```
/// use boolgen::Term;
///
/// let a = Term::from_minterm(0b010, 3);
/// let b = Term::from_minterm(0b011, 3);
/// let merged = a.combine(&b).unwrap();
///
/// assert_eq!(merged.to_string(), "01-");
/// assert_eq!(merged.minterms().collect::<Vec<_>>(), vec![2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    symbols: Arc<[Symbol]>,
}

impl Term {
    /// Create a term from its symbols
    pub fn new(symbols: &[Symbol]) -> Self {
        Term {
            symbols: symbols.into(),
        }
    }

    /// Create the zero-dash term denoting a single minterm
    ///
    /// # Panics
    ///
    /// Panics if `minterm` does not fit in `num_vars` bits.
    pub fn from_minterm(minterm: usize, num_vars: usize) -> Self {
        assert!(
            num_vars < usize::BITS as usize,
            "{} variables exceed the supported width",
            num_vars
        );
        assert!(
            minterm < (1usize << num_vars),
            "minterm {} out of range for {} variables",
            minterm,
            num_vars
        );
        let symbols: Vec<Symbol> = (0..num_vars)
            .map(|i| {
                if (minterm >> (num_vars - 1 - i)) & 1 == 1 {
                    Symbol::One
                } else {
                    Symbol::Zero
                }
            })
            .collect();
        Term {
            symbols: symbols.into(),
        }
    }

    /// Number of positions (input variables)
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the term has no positions
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get the symbols of this term
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of `1` symbols (the grouping key of the generator)
    pub fn count_ones(&self) -> usize {
        self.symbols.iter().filter(|&&s| s == Symbol::One).count()
    }

    /// Number of `-` symbols
    pub fn num_dashes(&self) -> usize {
        self.symbols.iter().filter(|&&s| s == Symbol::Dash).count()
    }

    /// Merge two terms that differ in exactly one position
    ///
    /// The differing position must hold `0` in one term and `1` in the other;
    /// dashes only match dashes. Returns `None` when the terms cannot be merged.
    pub fn combine(&self, other: &Term) -> Option<Term> {
        if self.len() != other.len() {
            return None;
        }
        let mut diff = None;
        for (i, (a, b)) in self.symbols.iter().zip(other.symbols.iter()).enumerate() {
            if a == b {
                continue;
            }
            if diff.is_some() || !a.is_fixed() || !b.is_fixed() {
                return None;
            }
            diff = Some(i);
        }
        let pos = diff?;
        let mut symbols = self.symbols.to_vec();
        symbols[pos] = Symbol::Dash;
        Some(Term {
            symbols: symbols.into(),
        })
    }

    /// Check whether the fixed positions of this term match `minterm`
    pub fn covers(&self, minterm: usize) -> bool {
        let n = self.len();
        if n < usize::BITS as usize && minterm >> n != 0 {
            return false;
        }
        self.symbols
            .iter()
            .enumerate()
            .all(|(i, s)| s.matches_bit((minterm >> (n - 1 - i)) & 1 == 1))
    }

    /// Iterate over every minterm denoted by this term, in ascending order
    pub fn minterms(&self) -> impl Iterator<Item = usize> + '_ {
        let n = self.len();
        let base = self
            .symbols
            .iter()
            .fold(0usize, |acc, &s| (acc << 1) | usize::from(s == Symbol::One));
        let dash_bits: Vec<usize> = self
            .symbols
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, s)| !s.is_fixed())
            .map(|(i, _)| n - 1 - i)
            .collect();
        (0..(1usize << dash_bits.len())).map(move |k| {
            dash_bits
                .iter()
                .enumerate()
                .filter(|(j, _)| (k >> j) & 1 == 1)
                .fold(base, |acc, (_, &bit)| acc | (1 << bit))
        })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in self.symbols.iter() {
            write!(f, "{}", s.to_char())?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`Term`] from text fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTermError {
    /// The offending character
    pub character: char,
    /// Its position in the input
    pub position: usize,
}

impl fmt::Display for ParseTermError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid term character '{}' at position {}. Expected '0', '1' or '-'.",
            self.character, self.position
        )
    }
}

impl std::error::Error for ParseTermError {}

impl FromStr for Term {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .enumerate()
            .map(|(position, character)| {
                Symbol::from_char(character).ok_or(ParseTermError {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Term {
            symbols: symbols.into(),
        })
    }
}
