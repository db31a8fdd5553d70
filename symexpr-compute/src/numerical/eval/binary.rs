use crate::numerical::{ctxt::Ctxt, error::{kind::DivisionByZero, Error}};
use crate::symbolic::expr::{BinOpKind, Node};
use super::{eval_child, node_spans};

/// Evaluates the binary operation `node`.
pub(super) fn eval_binary(
    node: &Node,
    op: BinOpKind,
    lhs: &Node,
    rhs: &Node,
    ctxt: &Ctxt,
) -> Result<f64, Error> {
    if op == BinOpKind::Div {
        // the divisor is checked before the dividend is evaluated
        let divisor = eval_child(node, 1, rhs, ctxt)?;
        if divisor == 0.0 {
            return Err(Error::new(node_spans(node), DivisionByZero));
        }

        let dividend = eval_child(node, 0, lhs, ctxt)?;
        return Ok(dividend / divisor);
    }

    let left = eval_child(node, 0, lhs, ctxt)?;
    let right = eval_child(node, 1, rhs, ctxt)?;
    Ok(op.apply(left, right))
}
