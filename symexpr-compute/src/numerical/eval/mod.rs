mod binary;
mod call;
mod primary;
mod unary;

use crate::symbolic::expr::Node;
use log::debug;
use std::ops::Range;
use super::{ctxt::Ctxt, error::Error};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using the default context, which binds no
    /// variables.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Default::default())
    }
}

impl Eval for Node {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        eval_node(self, ctxt).map_err(|err| {
            debug!("evaluation of `{}` failed: {}", self, err);
            err
        })
    }
}

/// Evaluates the given expression using the given context.
///
/// This is equivalent to calling [`Eval::eval`] on the expression.
pub fn compute(node: &Node, ctxt: &Ctxt) -> Result<f64, Error> {
    node.eval(ctxt)
}

/// Evaluates a node. The spans of any error index into the rendering of this node.
fn eval_node(node: &Node, ctxt: &Ctxt) -> Result<f64, Error> {
    match node {
        Node::Const(value) => Ok(*value),
        Node::Var(name) => primary::eval_var(name, ctxt),
        Node::Unary(op, operand) => unary::eval_unary(node, *op, operand, ctxt),
        Node::Binary(op, lhs, rhs) => binary::eval_binary(node, *op, lhs, rhs, ctxt),
        Node::Call(func, arg) => call::eval_call(node, *func, arg, ctxt),
    }
}

/// Evaluates `child`, the `index`-th child of `parent`. The spans of any error are shifted to
/// index into the rendering of `parent`.
///
/// Offsets are only computed once an error occurs, so a successful evaluation never renders the
/// tree.
fn eval_child(parent: &Node, index: usize, child: &Node, ctxt: &Ctxt) -> Result<f64, Error> {
    eval_node(child, ctxt).map_err(|mut err| {
        let offset = parent.child_offset(index).unwrap_or_default();
        for span in &mut err.spans {
            *span = span.start + offset..span.end + offset;
        }
        err
    })
}

/// Returns the spans of an error raised by `node` itself: the span of the whole node, followed by
/// the span of its last child.
fn node_spans(node: &Node) -> Vec<Range<usize>> {
    let mut spans = vec![node.span_at(0)];
    spans.extend(node.child_spans(0).pop());
    spans
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use crate::numerical::{
        ctxt::TrigMode,
        error::kind::{DivisionByZero, InvalidDomain, UndefinedVariable},
    };
    use crate::symbolic::expr::build::*;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn constant_tree() {
        let expr = (num(1.0) + 2) * 3 - div(8, 4);
        assert_eq!(expr.eval_default().unwrap(), 7.0);
    }

    #[test]
    fn unary_operators() {
        let ctxt = [("x", 2.5)].into_iter().collect::<Ctxt>();
        assert_eq!(minus(var("x")).eval(&ctxt).unwrap(), -2.5);
        assert_eq!(plus(minus(var("x"))).eval(&ctxt).unwrap(), -2.5);
    }

    #[test]
    fn polynomial_with_bindings() {
        let ctxt = [("x", 3.0), ("y", -1.0)].into_iter().collect::<Ctxt>();
        let expr = var("x") * var("x") - 2 * var("x") * var("y") + 1;
        assert_eq!(compute(&expr, &ctxt).unwrap(), 16.0);
    }

    #[test]
    fn square_root() {
        assert_eq!(sqrt(num(16.0) + 9).eval_default().unwrap(), 5.0);
        assert_eq!(sqrt(num(0.0)).eval_default().unwrap(), 0.0);
    }

    #[test]
    fn trigonometry_radians() {
        let ctxt = [("t", std::f64::consts::FRAC_PI_4)].into_iter().collect::<Ctxt>();
        assert_float_absolute_eq!(sin(var("t")).eval(&ctxt).unwrap(), std::f64::consts::FRAC_1_SQRT_2);
        assert_float_absolute_eq!(cos(var("t")).eval(&ctxt).unwrap(), std::f64::consts::FRAC_1_SQRT_2);
        assert_float_absolute_eq!(tan(var("t")).eval(&ctxt).unwrap(), 1.0);
        assert_float_absolute_eq!(cot(var("t")).eval(&ctxt).unwrap(), 1.0);
    }

    #[test]
    fn trigonometry_degrees() {
        let ctxt = Ctxt::with_trig_mode(TrigMode::Degrees);
        assert_float_absolute_eq!(sin(num(90.0)).eval(&ctxt).unwrap(), 1.0);
        assert_float_absolute_eq!(cos(num(180.0)).eval(&ctxt).unwrap(), -1.0);
        assert_float_absolute_eq!(cot(num(45.0)).eval(&ctxt).unwrap(), 1.0);

        // the mode does not affect non-trigonometric functions
        assert_eq!(sqrt(num(81.0)).eval(&ctxt).unwrap(), 9.0);
    }

    #[test]
    fn cotangent_of_zero() {
        assert_eq!(cot(num(0.0)).eval_default().unwrap(), f64::INFINITY);
    }

    #[test]
    fn undefined_variable() {
        let err = (num(2.0) * var("z")).eval_default().unwrap_err();
        assert_eq!(err.downcast_ref::<UndefinedVariable>(), Some(&UndefinedVariable {
            name: "z".to_string(),
            suggestions: vec![],
        }));

        // `(2 * z)`
        assert_eq!(err.spans, vec![5..6]);
        assert_eq!(err.to_string(), "`z` is not defined");
    }

    #[test]
    fn undefined_variable_suggestions() {
        let ctxt = [("x1", 1.0), ("x2", 2.0), ("y", 3.0)].into_iter().collect::<Ctxt>();
        let err = var("x").eval(&ctxt).unwrap_err();
        assert_eq!(err.downcast_ref::<UndefinedVariable>().unwrap().suggestions, vec!["x1", "x2"]);
    }

    #[test]
    fn division_by_zero() {
        let expr = var("a") + div(var("b"), var("c") - var("c"));
        let ctxt = [("a", 1.0), ("b", 2.0), ("c", 5.0)].into_iter().collect::<Ctxt>();
        let err = expr.eval(&ctxt).unwrap_err();
        assert!(err.is::<DivisionByZero>());

        let rendered = expr.to_string();
        assert_eq!(rendered, "(a + (b / (c - c)))");
        assert_eq!(&rendered[err.spans[0].clone()], "(b / (c - c))");
        assert_eq!(&rendered[err.spans[1].clone()], "(c - c)");
    }

    #[test]
    fn divisor_checked_before_dividend() {
        // the dividend is undefined, but the zero divisor is reported first
        let err = div(var("undefined"), 0).eval_default().unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }

    #[test]
    fn negative_radicand() {
        let expr = minus(sqrt(num(3.0) - 4));
        let err = expr.eval_default().unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidDomain>(), Some(&InvalidDomain { value: -1.0 }));

        let rendered = expr.to_string();
        assert_eq!(&rendered[err.spans[0].clone()], "Sqrt((3 - 4))");
        assert_eq!(&rendered[err.spans[1].clone()], "(3 - 4)");
    }

    #[test]
    fn first_error_aborts() {
        // the left operand fails first
        let err = (var("p") + sqrt(num(-1.0))).eval_default().unwrap_err();
        assert!(err.is::<UndefinedVariable>());
    }

    /// `x + 0 + 1 + 2 + ...`, nested to the left.
    fn left_chain(len: usize) -> Node {
        (0..len).fold(var("x"), |acc, i| acc + i as f64)
    }

    #[test]
    fn deep_chain_is_linear() {
        // deep trees recurse, so give the evaluator room
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024 * 1024)
            .spawn(|| {
                let len = 4000;
                let expr = left_chain(len);
                let ctxt = [("x", 0.5)].into_iter().collect::<Ctxt>();

                let start = std::time::Instant::now();
                let value = expr.eval(&ctxt).unwrap();
                let elapsed = start.elapsed();

                assert_eq!(value, 0.5 + (len * (len - 1) / 2) as f64);
                assert!(elapsed.as_millis() < 500, "evaluation took {:?}", elapsed);

                // an error at the far end still points at the right place
                let expr = expr + var("missing");
                let err = expr.eval(&ctxt).unwrap_err();
                let rendered = expr.to_string();
                assert_eq!(err.spans, vec![rendered.len() - "missing)".len()..rendered.len() - 1]);
            })
            .unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn nested_error_spans() {
        let ctxt = [("a", 4.0)].into_iter().collect::<Ctxt>();
        let expr = cos(var("a") * 2) - minus(var("a") + sqrt(var("a") - 5));
        let err = expr.eval(&ctxt).unwrap_err();
        let rendered = expr.to_string();
        assert_eq!(&rendered[err.spans[0].clone()], "Sqrt((a - 5))");
        assert_eq!(&rendered[err.spans[1].clone()], "(a - 5)");
    }
}
