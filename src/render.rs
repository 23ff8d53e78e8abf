//! Rendering of selected terms as sum-of-products text
//!
//! Output uses `~` for negation, ` & ` for conjunction and ` | ` for
//! disjunction. Literals inside a product and the products themselves are
//! sorted by their rendered text, which keeps the output reproducible.

use crate::term::{Symbol, Term};
use std::sync::Arc;

/// Negation prefix
pub const NOT: &str = "~";
/// Conjunction separator
pub const AND: &str = " & ";
/// Disjunction separator
pub const OR: &str = " | ";

/// Render one term as a conjunction of literals
///
/// Position `i` of the term maps to `input_vars[i]`. An all-dash term renders
/// as `1`.
///
/// # Panics
///
/// Panics if the term is wider than `input_vars`.
///
/// # Examples
///
/// ```
/// use boolgen::{render_term, Term};
/// use std::sync::Arc;
///
/// let vars: Vec<Arc<str>> = vec![Arc::from("A"), Arc::from("B"), Arc::from("C")];
/// let term: Term = "10-".parse().unwrap();
/// assert_eq!(render_term(&vars, &term), "A & ~B");
/// ```
pub fn render_term(input_vars: &[Arc<str>], term: &Term) -> String {
    assert!(
        term.len() <= input_vars.len(),
        "term {} is wider than the {} input variables",
        term,
        input_vars.len()
    );
    let mut literals: Vec<String> = term
        .symbols()
        .iter()
        .zip(input_vars)
        .filter_map(|(symbol, var)| match symbol {
            Symbol::Zero => Some(format!("{}{}", NOT, var)),
            Symbol::One => Some(var.to_string()),
            Symbol::Dash => None,
        })
        .collect();
    if literals.is_empty() {
        return "1".to_string();
    }
    literals.sort();
    literals.join(AND)
}

/// Render a cover as a disjunction of products
///
/// An empty cover renders as `0`.
pub fn render_cover<'a, I>(input_vars: &[Arc<str>], cover: I) -> String
where
    I: IntoIterator<Item = &'a Term>,
{
    let mut products: Vec<String> = cover
        .into_iter()
        .map(|term| render_term(input_vars, term))
        .collect();
    if products.is_empty() {
        return "0".to_string();
    }
    products.sort();
    products.join(OR)
}
