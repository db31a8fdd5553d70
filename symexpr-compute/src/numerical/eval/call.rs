use crate::numerical::{ctxt::Ctxt, error::{kind::InvalidDomain, Error}};
use crate::symbolic::expr::{FuncKind, Node};
use super::{eval_child, node_spans};

/// Evaluates the function call `node`.
pub(super) fn eval_call(
    node: &Node,
    func: FuncKind,
    arg: &Node,
    ctxt: &Ctxt,
) -> Result<f64, Error> {
    let value = eval_child(node, 0, arg, ctxt)?;
    let angle = || ctxt.trig_mode.to_radians(value);
    match func {
        FuncKind::Sqrt if value < 0.0 => Err(Error::new(node_spans(node), InvalidDomain { value })),
        FuncKind::Sqrt => Ok(value.sqrt()),
        FuncKind::Sin => Ok(angle().sin()),
        FuncKind::Cos => Ok(angle().cos()),
        FuncKind::Tan => Ok(angle().tan()),
        // unguarded: `Cot(0)` is infinite
        FuncKind::Cot => Ok(1.0 / angle().tan()),
    }
}
