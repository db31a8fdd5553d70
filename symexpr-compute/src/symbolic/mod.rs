//! Symbolic manipulation of expression trees.
//!
//! # Expression representation
//!
//! Expressions are represented as a tree of [`Node`]s, built programmatically with the
//! combinators in [`expr::build`] or with the arithmetic operators implemented for [`Node`]. There
//! is no parser; every tree is constructed in code.
//!
//! ```
//! use symexpr_compute::symbolic::expr::build::{cos, var};
//!
//! let expr = cos(var("x")) * 2 + var("y");
//! assert_eq!(expr.to_string(), "((Cos(x) * 2) + y)");
//! ```
//!
//! # Analysis
//!
//! Structural queries are available as methods on [`Node`]: [`Node::variables`],
//! [`Node::is_constant`], [`Node::is_polynomial`], and [`Node::degree`] /
//! [`Node::polynomial_degree`]. See the [`analysis`] module for the exact rules.
//!
//! # Simplification
//!
//! [`simplify()`] rewrites an expression into an equivalent one using constant folding and
//! identity rules. The result is a new tree; the input is left untouched.
//!
//! ```
//! use symexpr_compute::symbolic::{expr::build::{num, var}, simplify};
//!
//! let expr = (num(2.0) + 3) * var("x") - 0 * var("y");
//! let simplified = simplify(&expr);
//!
//! // `(2 + 3) * x - 0 * y = 5 * x - 0`
//! assert_eq!(simplified.to_string(), "((5 * x) - 0)");
//! ```
//!
//! For more information, see the [`mod@simplify`] module.

pub mod analysis;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use expr::Node;
pub use simplify::{simplify, simplify_with_steps};
pub use step_collector::StepCollector;
