//! A line-oriented calculator for sparse multivariate polynomials with
//! wrapping 64-bit integer coefficients.
//!
//! A polynomial in `n` variables is represented recursively: as a univariate
//! polynomial in the leading variable whose coefficients are polynomials over
//! the remaining variables. Every engine operation produces this
//! representation in canonical form, so structural equality coincides with
//! algebraic equality.
//!
//! For example:
//!
//! ```
//! use polycalc::poly::{Mono, Poly};
//!
//! // 3 + 2*x
//! let p = Poly::from_monomials(vec![
//!     Mono::new(Poly::from(3), 0),
//!     Mono::new(Poly::from(2), 1),
//! ]);
//!
//! assert_eq!(p.evaluate(5), Poly::from(13));
//! assert_eq!(p.deg(), 1);
//! assert_eq!(p.to_string(), "(3,0)+(2,1)");
//! ```
//!
//! The [`calculator`] module drives the engine from a line-oriented command
//! language over a value stack; see the `polycalc` binary for the stdin
//! wiring.

pub mod calculator;
pub mod executor;
pub mod parser;
pub mod poly;
pub mod printer;
pub mod stack;
