//! Evaluation, structural analysis and simplification of symbolic expression trees.
//!
//! Expressions are immutable trees of [`Node`](symbolic::Node)s, built in code with the
//! combinators in [`symbolic::expr::build`]. Once built, a tree can be:
//!
//! - evaluated to an `f64` with [`numerical::eval::Eval`], given values for its variables
//! - queried for its variables, constancy and polynomial degree (see [`symbolic::analysis`])
//! - simplified into an equivalent, no larger tree with [`symbolic::simplify()`]
//!
//! # Features
//!
//! - `numerical` (default): Enables the [`numerical`] evaluator and the `properties` binary.
//! - `serde`: Derives `Serialize` and `Deserialize` for expression trees and evaluation contexts.

pub mod numerical;
pub mod symbolic;
