//! Numerical evaluation of expression trees.
//!
//! Evaluation is performed through the [`Eval`] trait, using a [`Ctxt`] that binds variable names
//! to values and selects how trigonometric functions interpret their arguments.
//!
//! ```
//! use symexpr_compute::numerical::{ctxt::Ctxt, eval::Eval};
//! use symexpr_compute::symbolic::expr::build::{num, sqrt, var};
//!
//! let ctxt = [("c", 3.0)].into_iter().collect::<Ctxt>();
//! let c = var("c");
//! let expr = (5 - 3 * c.clone()) * sqrt(16 + c.clone() * c);
//! assert_eq!(expr.eval(&ctxt).unwrap(), -20.0);
//! assert_eq!(num(2.0).eval_default().unwrap(), 2.0);
//! ```

#![cfg(feature = "numerical")]

pub mod ctxt;
pub mod error;
pub mod eval;

pub use eval::{compute, Eval};
