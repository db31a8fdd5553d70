//! The expression tree.
//!
//! A [`Node`] is an immutable, finite tree describing a mathematical expression. Every node is
//! one of a closed set of variants: a numeric constant, a named variable, a unary operator
//! applied to one child, a binary operator applied to two children, or a named function applied
//! to one child. Each child is exclusively owned by its parent, so there are no cycles and no
//! back-references. Algorithms over the tree (evaluation, analysis, simplification) never mutate
//! a node; they fold over it and build new trees where needed. Subtrees may be shared freely by
//! cloning them.
//!
//! Nodes are normally built with the combinators in [`build`], or with the arithmetic operators
//! implemented for [`Node`], where numbers are lifted into [`Node::Const`] automatically:
//!
//! ```
//! use symexpr_compute::symbolic::expr::build::{sqrt, var};
//!
//! let x = var("x");
//! let expr = (5 - 3 * x.clone()) * sqrt(16 + x.clone() * x);
//! assert_eq!(expr.to_string(), "((5 - (3 * x)) * Sqrt((16 + (x * x))))");
//! ```
//!
//! # Structural equality
//!
//! The [`PartialEq`] implementation for [`Node`] is **structural**: two nodes are equal if they
//! are the same variant, with equal payloads and pairwise equal children. This is a strict subset
//! of mathematical equality; `x + y` and `y + x` are not equal under it. No reordering or
//! simplification is performed before comparing.
//!
//! Constants compare by value, except that any two NaN constants are equal to each other. This
//! keeps the equality reflexive, so a tree that contains a folded `0/0` is still equal to itself.

pub mod build;
mod fmt;
mod iter;
pub mod op;

pub use iter::NodeIter;
pub use op::{BinOpKind, FuncKind, UnaryOpKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node in an expression tree.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A numeric constant, such as `2` or `0.5`.
    Const(f64),

    /// A variable, such as `x` or `y`.
    Var(String),

    /// A unary operator applied to an operand, such as `-x`.
    Unary(UnaryOpKind, Box<Node>),

    /// A binary operator applied to a left and a right operand, such as `x + 1`.
    Binary(BinOpKind, Box<Node>, Box<Node>),

    /// A named function applied to an argument, such as `Sin(x)`.
    Call(FuncKind, Box<Node>),
}

impl Node {
    /// Creates a [`Node::Const`] with the given value.
    pub fn constant(value: f64) -> Self {
        Self::Const(value)
    }

    /// Creates a [`Node::Var`] with the given name.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Creates a [`Node::Unary`] node.
    pub fn unary(op: UnaryOpKind, operand: impl Into<Node>) -> Self {
        Self::Unary(op, Box::new(operand.into()))
    }

    /// Creates a [`Node::Binary`] node.
    pub fn binary(op: BinOpKind, lhs: impl Into<Node>, rhs: impl Into<Node>) -> Self {
        Self::Binary(op, Box::new(lhs.into()), Box::new(rhs.into()))
    }

    /// Creates a [`Node::Call`] node.
    pub fn call(func: FuncKind, arg: impl Into<Node>) -> Self {
        Self::Call(func, Box::new(arg.into()))
    }

    /// If the node is a [`Node::Const`], returns the contained value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Const(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the node is a [`Node::Const`] with exactly the given value.
    pub fn is_constant_value(&self, value: f64) -> bool {
        self.as_constant() == Some(value)
    }

    /// If the node is a [`Node::Var`], returns a reference to the contained name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Var(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the direct children of this node, from left to right.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Self::Const(_) | Self::Var(_) => Vec::new(),
            Self::Unary(_, operand) | Self::Call(_, operand) => vec![&**operand],
            Self::Binary(_, lhs, rhs) => vec![&**lhs, &**rhs],
        }
    }

    /// Returns the number of nodes in this tree, including this one.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order (i.e.
    /// depth-first).
    pub fn post_order_iter(&self) -> NodeIter<'_> {
        NodeIter::new(self)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Const(a), Self::Const(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Var(a), Self::Var(b)) => a == b,
            (Self::Unary(op_a, a), Self::Unary(op_b, b)) => op_a == op_b && a == b,
            (Self::Binary(op_a, lhs_a, rhs_a), Self::Binary(op_b, lhs_b, rhs_b)) => {
                op_a == op_b && lhs_a == lhs_b && rhs_a == rhs_b
            },
            (Self::Call(func_a, a), Self::Call(func_b, b)) => func_a == func_b && a == b,
            _ => false,
        }
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::Const(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Self::Const(f64::from(value))
    }
}
