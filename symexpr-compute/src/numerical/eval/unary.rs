use crate::numerical::{ctxt::Ctxt, error::Error};
use crate::symbolic::expr::{Node, UnaryOpKind};
use super::eval_child;

/// Evaluates the unary operation `node`.
pub(super) fn eval_unary(
    node: &Node,
    op: UnaryOpKind,
    operand: &Node,
    ctxt: &Ctxt,
) -> Result<f64, Error> {
    let value = eval_child(node, 0, operand, ctxt)?;
    Ok(match op {
        UnaryOpKind::Plus => value,
        UnaryOpKind::Minus => -value,
    })
}
