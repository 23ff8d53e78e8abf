//! Evaluation of expression trees under an input assignment

use super::Expr;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

impl Expr {
    /// Evaluate the expression with a given variable assignment
    ///
    /// Variables missing from the assignment are treated as `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolgen::Expr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let expr = Expr::parse("a & ~b").unwrap();
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("a"), true);
    /// assert!(expr.evaluate(&assignment));
    ///
    /// assignment.insert(Arc::from("b"), true);
    /// assert!(!expr.evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        match self {
            Expr::Constant(val) => *val,
            Expr::Variable(name) => assignment.get(name).copied().unwrap_or(false),
            Expr::Not(inner) => !inner.evaluate(assignment),
            Expr::And(operands) => operands.iter().all(|e| e.evaluate(assignment)),
            Expr::Or(operands) => operands.iter().any(|e| e.evaluate(assignment)),
        }
    }

    /// Collect all variables used in this expression in alphabetical order
    pub fn variables(&self) -> BTreeSet<Arc<str>> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<Arc<str>>) {
        match self {
            Expr::Constant(_) => {}
            Expr::Variable(name) => {
                vars.insert(Arc::clone(name));
            }
            Expr::Not(inner) => inner.collect_variables(vars),
            Expr::And(operands) | Expr::Or(operands) => {
                for operand in operands {
                    operand.collect_variables(vars);
                }
            }
        }
    }
}
