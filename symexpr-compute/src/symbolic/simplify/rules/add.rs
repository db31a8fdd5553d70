//! Simplification rules for expressions involving addition.

use crate::symbolic::{
    expr::{BinOpKind, Node},
    simplify::{rules::{do_binary, fold_constants}, step::Step},
    step_collector::StepCollector,
};

/// `2+3 = 5`
pub fn add_constants(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = fold_constants(expr, BinOpKind::Add)?;
    step_collector.push(Step::AddConstants);
    Some(opt)
}

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if lhs.is_constant_value(0.0) {
            Some(rhs.clone())
        } else if rhs.is_constant_value(0.0) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    add_constants(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
}
