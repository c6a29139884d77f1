pub mod evaluate;
pub mod polynomial;

pub use self::polynomial::Poly;

/// The coefficient type. All coefficient arithmetic wraps on overflow; this
/// is part of the calculator's contract.
pub type Coefficient = i64;

/// The exponent type. Stored exponents are never negative.
pub type Exponent = i32;

/// The degree reported for the zero polynomial. Never stored in a monomial.
pub const ZERO_POLY_DEGREE: Exponent = -1;

/// A single term `coeff * x_k^exp` of a polynomial in the variable `x_k`,
/// where `k` is the recursion depth at which the monomial lives. The
/// coefficient is itself a full polynomial over the remaining variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mono {
    pub exp: Exponent,
    pub coeff: Poly,
}

impl Mono {
    #[inline]
    pub fn new(coeff: Poly, exp: Exponent) -> Mono {
        Mono { exp, coeff }
    }

    /// Returns true if the coefficient is the zero polynomial. Such monomials
    /// never survive into a canonical polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }
}
