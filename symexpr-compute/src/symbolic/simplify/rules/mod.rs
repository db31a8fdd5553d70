//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules only look at the node they are given; its children are expected to
//! have been simplified already.
//!
//! Every rule strictly reduces the number of nodes in the expression, so repeatedly applying them
//! always terminates.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod subtract;
pub mod unary;

use crate::symbolic::{
    expr::{BinOpKind, Node, UnaryOpKind},
    step_collector::StepCollector,
};
use super::step::Step;

/// If the expression is a unary expression with the given operator, calls the given
/// transformation function with the operand.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_unary(
    expr: &Node,
    op: UnaryOpKind,
    f: impl Fn(&Node) -> Option<Node>,
) -> Option<Node> {
    match expr {
        Node::Unary(kind, operand) if *kind == op => f(operand),
        _ => None,
    }
}

/// If the expression is a binary expression with the given operator, calls the given
/// transformation function with the left and right operands.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Node,
    op: BinOpKind,
    f: impl Fn(&Node, &Node) -> Option<Node>,
) -> Option<Node> {
    match expr {
        Node::Binary(kind, lhs, rhs) if *kind == op => f(lhs, rhs),
        _ => None,
    }
}

/// If the expression is a binary expression with the given operator and both operands are
/// constants, folds them into a single constant.
///
/// No domain checks are done; `1/0` folds to infinity.
pub(crate) fn fold_constants(expr: &Node, op: BinOpKind) -> Option<Node> {
    do_binary(expr, op, |lhs, rhs| {
        Some(Node::Const(op.apply(lhs.as_constant()?, rhs.as_constant()?)))
    })
}

/// Applies all rules.
pub fn all(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    unary::all(expr, step_collector)
        .or_else(|| add::all(expr, step_collector))
        .or_else(|| subtract::all(expr, step_collector))
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| divide::all(expr, step_collector))
}
