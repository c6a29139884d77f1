use std::fmt::{self, Write};

use crate::poly::Poly;

/// Wrapper that renders a borrowed polynomial in the canonical text form.
///
/// The same format is accepted back by the parser, so rendering and parsing
/// round-trip.
pub struct PolyPrinter<'a> {
    pub poly: &'a Poly,
}

impl<'a> PolyPrinter<'a> {
    pub fn new(poly: &'a Poly) -> PolyPrinter<'a> {
        PolyPrinter { poly }
    }
}

impl<'a> fmt::Display for PolyPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.poly, f)
    }
}

impl fmt::Display for Poly {
    /// A constant renders as its decimal value; a monomial list renders in
    /// stored (ascending-exponent) order as `+`-joined `(coeff,exp)` pairs,
    /// with each coefficient rendered recursively.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Poly::Coeff(c) => write!(f, "{}", c),
            Poly::Terms(monomials) => {
                let mut first = true;
                for mono in monomials {
                    if !first {
                        f.write_char('+')?;
                    }
                    first = false;

                    write!(f, "({},{})", mono.coeff, mono.exp)?;
                }
                Ok(())
            }
        }
    }
}
