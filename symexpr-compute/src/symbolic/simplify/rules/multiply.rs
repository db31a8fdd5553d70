//! Simplification rules for expressions involving multiplication.

use crate::symbolic::{
    expr::{BinOpKind, Node},
    simplify::{rules::{do_binary, fold_constants}, step::Step},
    step_collector::StepCollector,
};

/// `2*3 = 6`
pub fn multiply_constants(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = fold_constants(expr, BinOpKind::Mul)?;
    step_collector.push(Step::MultiplyConstants);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        (lhs.is_constant_value(0.0) || rhs.is_constant_value(0.0)).then(|| Node::Const(0.0))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if lhs.is_constant_value(1.0) {
            Some(rhs.clone())
        } else if rhs.is_constant_value(1.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Applies all multiplication rules.
///
/// All multiplication rules will reduce the size of the expression.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    multiply_constants(expr, step_collector)
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| multiply_one(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::expr::build::*;
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(all(&mul(-4, 5), &mut ()), Some(num(-20.0)));
    }

    #[test]
    fn zero_absorbs() {
        let mut steps = Vec::new();
        assert_eq!(all(&mul(cos(var("x")), 0), &mut steps), Some(num(0.0)));
        assert_eq!(steps, vec![Step::MultiplyZero]);
    }

    #[test]
    fn constants_take_priority() {
        let mut steps = Vec::new();
        assert_eq!(all(&mul(0, 1), &mut steps), Some(num(0.0)));
        assert_eq!(steps, vec![Step::MultiplyConstants]);
    }

    #[test]
    fn only_this_node_is_rewritten() {
        // the inner `0*x` is left for the recursive pass to handle
        assert_eq!(all(&mul(1, mul(0, var("x"))), &mut ()), Some(mul(0, var("x"))));
    }

    #[test]
    fn one_is_identity() {
        assert_eq!(all(&mul(1, var("x")), &mut ()), Some(var("x")));
        assert_eq!(all(&mul(var("x"), 1), &mut ()), Some(var("x")));
    }
}
