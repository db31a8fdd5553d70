//! Structural analysis of expression trees.
//!
//! Every query in this module is a fold over the tree that looks only at its **structure**. No
//! query simplifies the expression first, so the answers describe the tree exactly as it was
//! built. For example, `x*x - x*x` is reported to have degree 2, even though it simplifies to the
//! constant `0`. Call [`simplify`](crate::symbolic::simplify()) first if the degree of the reduced
//! expression is wanted.
//!
//! # Polynomials
//!
//! An expression is classified as polynomial by these rules:
//!
//! | Node                          | Polynomial if                                 | Degree                 |
//! | ----------------------------- | --------------------------------------------- | ---------------------- |
//! | constant                      | always                                        | `0`                    |
//! | variable                      | always                                        | `1`                    |
//! | `+a`, `-a`                    | `a` is                                        | `deg(a)`               |
//! | `a + b`, `a - b`              | `a` and `b` are                               | `max(deg(a), deg(b))`  |
//! | `a * b`                       | `a` and `b` are                               | `deg(a) + deg(b)`      |
//! | `a / b`                       | `a` and `b` are, and `b` is constant          | `deg(a)`               |
//! | `Sqrt(a)`                     | `a` is, and `deg(a)` is even                  | `deg(a) / 2`           |
//! | `Sin`, `Cos`, `Tan`, `Cot`    | never                                         |                        |
//!
//! The `Sqrt` rule is a heuristic that treats an even-degree radicand as a perfect square. It is
//! not a sound test: `Sqrt(x*x + x*x)` is `sqrt(2) * |x|`, which is not a polynomial, yet it is
//! classified as a polynomial of degree 1.

use std::collections::HashSet;
use super::expr::{BinOpKind, FuncKind, Node};

impl Node {
    /// Returns the set of names of all variables that occur in this tree.
    pub fn variables(&self) -> HashSet<&str> {
        self.post_order_iter()
            .filter_map(Node::as_variable)
            .collect()
    }

    /// Returns true if the value of this expression does not depend on any variable, i.e. it
    /// could be folded to a single number.
    ///
    /// Functions of a constant argument are constant too, whatever the function.
    pub fn is_constant(&self) -> bool {
        self.post_order_iter().all(|node| !matches!(node, Node::Var(_)))
    }

    /// Returns true if this expression is a polynomial in its variables.
    ///
    /// See the [module-level documentation](self) for the rules used.
    pub fn is_polynomial(&self) -> bool {
        self.degree().is_some()
    }

    /// Returns the polynomial degree of this expression, or [`None`] if it is not a polynomial.
    ///
    /// See the [module-level documentation](self) for the rules used.
    pub fn degree(&self) -> Option<u32> {
        match self {
            Self::Const(_) => Some(0),
            Self::Var(_) => Some(1),
            Self::Unary(_, operand) => operand.degree(),
            Self::Binary(op, lhs, rhs) => {
                let lhs_degree = lhs.degree()?;
                let rhs_degree = rhs.degree()?;
                match op {
                    BinOpKind::Add | BinOpKind::Sub => Some(lhs_degree.max(rhs_degree)),
                    BinOpKind::Mul => lhs_degree.checked_add(rhs_degree),

                    // dividing by a non-constant breaks polynomiality
                    BinOpKind::Div if rhs.is_constant() => Some(lhs_degree),
                    BinOpKind::Div => None,
                }
            },
            Self::Call(FuncKind::Sqrt, arg) => arg.degree()
                .filter(|degree| degree % 2 == 0)
                .map(|degree| degree / 2),
            Self::Call(_, _) => None,
        }
    }

    /// Returns the polynomial degree of this expression, or `-1` if it is not a polynomial.
    ///
    /// This is [`Node::degree`] with [`None`] mapped to the `-1` sentinel.
    pub fn polynomial_degree(&self) -> i32 {
        self.degree()
            .map(|degree| i32::try_from(degree).unwrap_or(i32::MAX))
            .unwrap_or(-1)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::expr::build::*;
    use std::collections::HashSet;

    #[test]
    fn variables_are_unique() {
        let expr = var("x") * var("y") + sin(var("x")) / sqrt(var("z") - var("y"));
        assert_eq!(expr.variables(), HashSet::from(["x", "y", "z"]));
        assert!(num(5.0).variables().is_empty());
    }

    #[test]
    fn constant_functions() {
        assert!(sin(num(3.0)).is_constant());
        assert!(sqrt(minus(num(2.0)) * 4).is_constant());
        assert!(!cot(var("x")).is_constant());
        assert!(!(num(1.0) + var("x")).is_constant());
    }

    #[test]
    fn constant_iff_no_variables() {
        let corpus = [
            num(1.0),
            var("x"),
            plus(num(2.0)),
            minus(var("x")),
            sqrt(num(9.0)) - tan(num(1.0)),
            cos(var("a")) * 2,
            div(cot(num(0.3)), sin(num(0.2))),
            sqrt(var("x") * var("x")),
        ];

        for expr in corpus {
            assert_eq!(expr.is_constant(), expr.variables().is_empty(), "{}", expr);
        }
    }

    #[test]
    fn leaf_degrees() {
        assert_eq!(num(7.0).polynomial_degree(), 0);
        assert_eq!(var("x").polynomial_degree(), 1);
        assert_eq!(minus(var("x")).polynomial_degree(), 1);
        assert_eq!(plus(num(1.0)).polynomial_degree(), 0);
    }

    #[test]
    fn arithmetic_degrees() {
        let x = var("x");
        let quadratic = x.clone() * x.clone() + 3 * x.clone() + 1;
        assert_eq!(quadratic.polynomial_degree(), 2);
        assert_eq!((quadratic.clone() * x.clone()).polynomial_degree(), 3);
        assert_eq!((quadratic / 4).polynomial_degree(), 2);
        assert_eq!((var("x") * var("y")).polynomial_degree(), 2);
    }

    #[test]
    fn division_by_non_constant() {
        let expr = num(1.0) / var("x");
        assert!(!expr.is_polynomial());
        assert_eq!(expr.polynomial_degree(), -1);
        assert_eq!(expr.degree(), None);

        // constant, but not polynomial
        assert!(!(var("x") / sin(num(2.0))).is_polynomial());
    }

    #[test]
    fn trigonometric_never_polynomial() {
        for expr in [sin(num(1.0)), cos(var("x")), tan(num(0.0)), cot(var("x") * var("x"))] {
            assert!(!expr.is_polynomial(), "{}", expr);
            assert_eq!(expr.polynomial_degree(), -1);
        }
        assert!(!(var("x") + sin(var("x"))).is_polynomial());
    }

    #[test]
    fn sqrt_even_degree() {
        let x = var("x");
        assert_eq!(sqrt(x.clone() * x.clone()).polynomial_degree(), 1);
        assert_eq!(sqrt(num(16.0)).polynomial_degree(), 0);
        assert!(!sqrt(x.clone()).is_polynomial());
        assert!(!sqrt(x.clone() * x.clone() * x.clone()).is_polynomial());
    }

    #[test]
    fn sqrt_heuristic_is_not_sound() {
        // `sqrt(2x^2)` is not a polynomial, but the radicand has even degree
        let x = var("x");
        let expr = sqrt(x.clone() * x.clone() + x.clone() * x);
        assert!(expr.is_polynomial());
        assert_eq!(expr.polynomial_degree(), 1);
    }

    #[test]
    fn degree_of_product_is_sum() {
        let polys = [
            num(3.0),
            var("x"),
            var("x") * var("y") - 2,
            sqrt(var("x") * var("x")),
            minus(var("z") * var("z") * var("z")) / 5,
        ];

        for p in &polys {
            for q in &polys {
                let product = mul(p.clone(), q.clone());
                assert_eq!(
                    product.polynomial_degree(),
                    p.polynomial_degree() + q.polynomial_degree(),
                    "{}",
                    product,
                );
            }
        }
    }

    #[test]
    fn subtraction_degree_is_structural() {
        let x = var("x");
        let expr = x.clone() * x.clone() - x.clone() * x;
        assert_eq!(expr.polynomial_degree(), 2);
    }
}
