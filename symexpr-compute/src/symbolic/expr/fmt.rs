//! Rendering of expression trees to a fully-parenthesized infix string, and the span bookkeeping
//! that lets errors point into that string.
//!
//! Every binary operation is wrapped in parentheses, unary operations are rendered as `(-a)` or
//! `(+a)`, and function calls as `Name(a)`:
//!
//! ```text
//! ((5 - (3 * 3)) * Sqrt((16 + (3 * 3))))
//! ```

use std::{fmt::{self, Display, Formatter, Write}, ops::Range};
use super::Node;

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(value) => write!(f, "{}", value),
            Self::Var(name) => write!(f, "{}", name),
            Self::Unary(op, operand) => write!(f, "({}{})", op.symbol(), operand),
            Self::Binary(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
            Self::Call(func, arg) => write!(f, "{}({})", func.name(), arg),
        }
    }
}

/// A [`Write`] sink that only counts the bytes written to it.
#[derive(Default)]
struct ByteCounter(usize);

impl Write for ByteCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

impl Node {
    /// Returns the length in bytes of the rendered form of this node, without allocating it.
    pub fn rendered_len(&self) -> usize {
        let mut counter = ByteCounter::default();
        // writing to a `ByteCounter` never fails
        let _ = write!(counter, "{}", self);
        counter.0
    }

    /// Returns the span of this node within a rendering where it starts at byte `start`.
    pub fn span_at(&self, start: usize) -> Range<usize> {
        start..start + self.rendered_len()
    }

    /// Returns the byte offset of the `index`-th direct child of this node (in the same order as
    /// [`Node::children`]), relative to the start of this node's rendering. Returns [`None`] if
    /// there is no such child.
    ///
    /// Only the right operand of a binary operation requires rendering a subtree, namely the left
    /// operand.
    pub fn child_offset(&self, index: usize) -> Option<usize> {
        match (self, index) {
            // `(` + symbol
            (Self::Unary(..), 0) => Some(2),
            // `(`
            (Self::Binary(..), 0) => Some(1),
            // `(` lhs ` op `
            (Self::Binary(_, lhs, _), 1) => Some(1 + lhs.rendered_len() + 3),
            // name + `(`
            (Self::Call(func, _), 0) => Some(func.name().len() + 1),
            _ => None,
        }
    }

    /// Returns the span of each direct child of this node (in the same order as
    /// [`Node::children`]), within a rendering where this node starts at byte `start`.
    pub fn child_spans(&self, start: usize) -> Vec<Range<usize>> {
        self.children()
            .into_iter()
            .enumerate()
            .filter_map(|(index, child)| Some(child.span_at(start + self.child_offset(index)?)))
            .collect()
    }
}
