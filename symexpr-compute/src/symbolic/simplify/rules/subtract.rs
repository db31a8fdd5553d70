//! Simplification rules for expressions involving subtraction.

use crate::symbolic::{
    expr::{BinOpKind, Node},
    simplify::{rules::{do_binary, fold_constants}, step::Step},
    step_collector::StepCollector,
};

/// `5-3 = 2`
pub fn subtract_constants(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = fold_constants(expr, BinOpKind::Sub)?;
    step_collector.push(Step::SubtractConstants);
    Some(opt)
}

/// `a-a = 0`
///
/// The operands must be structurally equal.
pub fn subtract_self(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        (lhs == rhs).then(|| Node::Const(0.0))
    })?;

    step_collector.push(Step::SubtractSelf);
    Some(opt)
}

/// Applies all subtraction rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    subtract_constants(expr, step_collector)
        .or_else(|| subtract_self(expr, step_collector))
}
