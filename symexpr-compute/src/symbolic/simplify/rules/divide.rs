//! Simplification rules for expressions involving division.
//!
//! Simplification is a pure rewrite: dividing a constant by zero folds to an infinite (or NaN)
//! constant rather than failing. Only evaluation reports division by zero.

use crate::symbolic::{
    expr::{BinOpKind, Node},
    simplify::{rules::{do_binary, fold_constants}, step::Step},
    step_collector::StepCollector,
};

/// `6/3 = 2`
pub fn divide_constants(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = fold_constants(expr, BinOpKind::Div)?;
    step_collector.push(Step::DivideConstants);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        rhs.is_constant_value(1.0).then(|| lhs.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// Applies all division rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    divide_constants(expr, step_collector)
        .or_else(|| divide_one(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::expr::build::*;
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(all(&div(6, 3), &mut ()), Some(num(2.0)));
    }

    #[test]
    fn constant_zero_divisor_folds() {
        assert_eq!(all(&div(1, 0), &mut ()), Some(num(f64::INFINITY)));
    }

    #[test]
    fn one_divisor() {
        assert_eq!(all(&div(var("x"), 1), &mut ()), Some(var("x")));
        assert_eq!(all(&div(1, var("x")), &mut ()), None);
    }
}
