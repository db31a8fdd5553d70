//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into an
//! equivalent one that is no larger. It works bottom-up: the children of a node are simplified
//! first, then the [rewriting rules](rules) are applied to the node itself until none of them
//! apply. The rules are:
//!
//! - constant folding: `2+3 = 5`, `5-3 = 2`, `2*3 = 6`, `6/3 = 2`
//! - identities: `+a = a`, `0+a = a+0 = a`, `1*a = a*1 = a`, `a/1 = a`
//! - absorbing elements: `0*a = a*0 = 0`
//! - self-cancellation: `a-a = 0`, where both sides are structurally equal (NaN constants count as
//!   equal, see [`Node`])
//!
//! Function calls are never rewritten, although their arguments are simplified. Since every rule
//! returns either an already simplified child or a new constant, simplifying an already
//! simplified expression does not change it.

pub mod rules;
pub mod step;

use crate::symbolic::step_collector::StepCollector;
use log::trace;
use step::Step;
use super::expr::Node;

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    // begin by simplifying the expression's children
    let mut expr = match expr {
        Node::Const(_) | Node::Var(_) => expr.clone(),
        Node::Unary(op, operand) => Node::Unary(
            *op,
            Box::new(inner_simplify(operand, step_collector)),
        ),
        Node::Binary(op, lhs, rhs) => Node::Binary(
            *op,
            Box::new(inner_simplify(lhs, step_collector)),
            Box::new(inner_simplify(rhs, step_collector)),
        ),
        Node::Call(func, arg) => Node::Call(
            *func,
            Box::new(inner_simplify(arg, step_collector)),
        ),
    };

    // then rewrite this node until no rule applies
    while let Some(new_expr) = rules::all(&expr, step_collector) {
        trace!("simplified `{}` to `{}`", expr, new_expr);
        expr = new_expr;
    }

    expr
}

/// Simplify the given expression.
pub fn simplify(expr: &Node) -> Node {
    inner_simplify(expr, &mut ())
}

/// Simplify the given expression. The steps taken by the simplifier will also be collected and
/// returned, in the order they were applied. This is useful for debugging, and also for
/// displaying the steps taken to the user.
pub fn simplify_with_steps(expr: &Node) -> (Node, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps);
    (expr, steps)
}
