//! Display formatting for expression trees

use super::Expr;
use std::fmt;

/// Context for formatting expressions with minimal parentheses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None, // Top level or inside parentheses
    And,  // Inside an AND operation
    Or,   // Inside an OR operation
    Not,  // Inside a NOT operation
}

impl Expr {
    /// Format with operator precedence context to minimize parentheses
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        match self {
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Constant(val) => write!(f, "{}", if *val { "1" } else { "0" }),

            Expr::And(operands) => {
                let needs_parens = ctx == OpContext::Not;
                fmt_chain(f, operands, " & ", OpContext::And, needs_parens)
            }

            Expr::Or(operands) => {
                // OR binds weaker than both AND and NOT
                let needs_parens = ctx == OpContext::And || ctx == OpContext::Not;
                fmt_chain(f, operands, " | ", OpContext::Or, needs_parens)
            }

            Expr::Not(inner) => {
                write!(f, "~")?;
                match inner.as_ref() {
                    Expr::Variable(_) | Expr::Constant(_) | Expr::Not(_) => {
                        inner.fmt_with_context(f, OpContext::Not)
                    }
                    _ => {
                        write!(f, "(")?;
                        inner.fmt_with_context(f, OpContext::None)?;
                        write!(f, ")")
                    }
                }
            }
        }
    }
}

fn fmt_chain(
    f: &mut fmt::Formatter<'_>,
    operands: &[Expr],
    separator: &str,
    ctx: OpContext,
    needs_parens: bool,
) -> fmt::Result {
    if needs_parens {
        write!(f, "(")?;
    }
    for (i, operand) in operands.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        operand.fmt_with_context(f, ctx)?;
    }
    if needs_parens {
        write!(f, ")")?;
    }
    Ok(())
}

/// Display formatting for expressions
///
/// Uses the same notation the minimizer emits: `&` for AND, `|` for OR and
/// `~` for NOT, with parentheses only where precedence requires them.
///
/// # Examples
///
/// ```
/// use boolgen::Expr;
///
/// let expr = Expr::parse("(a & b) | ~(c | d)").unwrap();
/// assert_eq!(expr.to_string(), "a & b | ~(c | d)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}
