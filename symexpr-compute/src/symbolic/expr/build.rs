//! Combinators to build expression trees.
//!
//! Every combinator accepts anything convertible into a [`Node`], so numbers can be used directly
//! as operands: `mul(2, var("x"))` is the same as `mul(num(2.0), var("x"))`.
//!
//! The arithmetic operators `+`, `-`, `*`, `/` and unary `-` are also implemented for [`Node`],
//! with numbers allowed on either side. There is no unary `+` operator in Rust, so use [`plus`]
//! to build a [`UnaryOpKind::Plus`] node.

use std::ops::{Add, Div, Mul, Neg, Sub};
use super::{BinOpKind, FuncKind, Node, UnaryOpKind};

/// `value`
pub fn num(value: f64) -> Node {
    Node::Const(value)
}

/// A variable with the given name.
pub fn var(name: impl Into<String>) -> Node {
    Node::Var(name.into())
}

/// `+a`
pub fn plus(operand: impl Into<Node>) -> Node {
    Node::unary(UnaryOpKind::Plus, operand)
}

/// `-a`
pub fn minus(operand: impl Into<Node>) -> Node {
    Node::unary(UnaryOpKind::Minus, operand)
}

/// `a + b`
pub fn add(lhs: impl Into<Node>, rhs: impl Into<Node>) -> Node {
    Node::binary(BinOpKind::Add, lhs, rhs)
}

/// `a - b`
pub fn sub(lhs: impl Into<Node>, rhs: impl Into<Node>) -> Node {
    Node::binary(BinOpKind::Sub, lhs, rhs)
}

/// `a * b`
pub fn mul(lhs: impl Into<Node>, rhs: impl Into<Node>) -> Node {
    Node::binary(BinOpKind::Mul, lhs, rhs)
}

/// `a / b`
pub fn div(lhs: impl Into<Node>, rhs: impl Into<Node>) -> Node {
    Node::binary(BinOpKind::Div, lhs, rhs)
}

/// Build the combinator for a function of one argument.
macro_rules! build_func {
    ($($name:ident $kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($kind), "(a)`")]
            pub fn $name(arg: impl Into<Node>) -> Node {
                Node::call(FuncKind::$kind, arg)
            }
        )*
    };
}

build_func! {
    sqrt Sqrt,
    sin Sin,
    cos Cos,
    tan Tan,
    cot Cot,
}

/// Implements a binary operator trait for [`Node`], and for numeric types on the left-hand side.
macro_rules! impl_bin_op {
    ($($trait:ident $method:ident $kind:ident),* $(,)?) => {
        $(
            impl<T: Into<Node>> $trait<T> for Node {
                type Output = Node;

                fn $method(self, rhs: T) -> Node {
                    Node::binary(BinOpKind::$kind, self, rhs)
                }
            }

            impl $trait<Node> for f64 {
                type Output = Node;

                fn $method(self, rhs: Node) -> Node {
                    Node::binary(BinOpKind::$kind, self, rhs)
                }
            }

            impl $trait<Node> for i32 {
                type Output = Node;

                fn $method(self, rhs: Node) -> Node {
                    Node::binary(BinOpKind::$kind, self, rhs)
                }
            }
        )*
    };
}

impl_bin_op! {
    Add add Add,
    Sub sub Sub,
    Mul mul Mul,
    Div div Div,
}

impl Neg for Node {
    type Output = Node;

    fn neg(self) -> Node {
        minus(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn operators_match_combinators() {
        let x = var("x");
        assert_eq!(x.clone() + 1, add(var("x"), 1));
        assert_eq!(1 - x.clone(), sub(1, var("x")));
        assert_eq!(x.clone() * x.clone(), mul(var("x"), var("x")));
        assert_eq!(0.5 / x.clone(), div(0.5, var("x")));
        assert_eq!(-x, minus(var("x")));
    }

    #[test]
    fn functions() {
        assert_eq!(sqrt(4), Node::Call(FuncKind::Sqrt, Box::new(Node::Const(4.0))));
        assert_eq!(cot(var("t")), Node::Call(FuncKind::Cot, Box::new(Node::Var("t".to_string()))));
    }

    #[test]
    fn plus_is_unary() {
        assert_eq!(plus(var("x")), Node::Unary(UnaryOpKind::Plus, Box::new(var("x"))));
    }
}
