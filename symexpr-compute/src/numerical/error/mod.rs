//! Errors that can occur while evaluating an expression.
//!
//! Every error carries spans into the rendered form of the expression that was evaluated, so
//! [`Error::report_to_stderr`] can underline the failing subexpression.

pub mod kind;

pub use symexpr_error::Error;
