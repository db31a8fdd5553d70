//! Simplification rules for unary operators.
//!
//! Negation is left as-is; `-(-a)` is not collapsed.

use crate::symbolic::{
    expr::{Node, UnaryOpKind},
    simplify::{rules::do_unary, step::Step},
    step_collector::StepCollector,
};

/// `+a = a`
pub fn unary_plus(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_unary(expr, UnaryOpKind::Plus, |operand| Some(operand.clone()))?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::UnaryPlus);
    Some(opt)
}

/// Applies all unary rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    unary_plus(expr, step_collector)
}
