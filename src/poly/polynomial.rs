use std::mem;
use std::ops::{Add, Mul, Neg, Sub};

use super::{Coefficient, Exponent, Mono, ZERO_POLY_DEGREE};

/// A sparse multivariate polynomial in recursive canonical form.
///
/// Canonical form means:
/// - the monomials of a `Terms` are sorted by strictly increasing exponent,
/// - no monomial carries a zero coefficient polynomial,
/// - a `Terms` that denotes a plain constant does not occur: it is collapsed
///   to `Coeff`, so `Terms` always holds at least one monomial.
///
/// Every operation on this type both expects and preserves canonical form,
/// which makes the derived structural equality an algebraic equality.
///
/// Binary operations consume their operands; reference variants that clone
/// are provided for the cases where the caller keeps ownership.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Poly {
    /// A constant with respect to every remaining variable.
    Coeff(Coefficient),
    /// An ordered monomial list in the leading variable. The coefficients
    /// are polynomials over the remaining variables.
    Terms(Vec<Mono>),
}

impl From<Coefficient> for Poly {
    #[inline]
    fn from(c: Coefficient) -> Poly {
        Poly::Coeff(c)
    }
}

impl Poly {
    /// Constructs the zero polynomial.
    #[inline]
    pub fn zero() -> Poly {
        Poly::Coeff(0)
    }

    /// Constructs the polynomial one.
    #[inline]
    pub fn one() -> Poly {
        Poly::Coeff(1)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, Poly::Coeff(0))
    }

    /// Returns true if the polynomial is constant with respect to every
    /// remaining variable.
    #[inline]
    pub fn is_coeff(&self) -> bool {
        matches!(self, Poly::Coeff(_))
    }

    /// Builds the canonical polynomial denoted by an arbitrary monomial
    /// list, taking ownership of its entries. The list may be unsorted,
    /// contain duplicate exponents and zero coefficients: duplicates are
    /// merged by recursive addition and zero entries are dropped.
    pub fn from_monomials(mut monomials: Vec<Mono>) -> Poly {
        monomials.sort_by_key(|m| m.exp);

        let mut merged: Vec<Mono> = Vec::with_capacity(monomials.len());
        for mono in monomials {
            match merged.last_mut() {
                Some(last) if last.exp == mono.exp => {
                    last.coeff = mem::replace(&mut last.coeff, Poly::zero()) + mono.coeff;
                }
                Some(last) if last.is_zero() => {
                    *last = mono;
                }
                _ => merged.push(mono),
            }
        }

        // a cancelled merge can leave a zero entry at the write position
        if merged.last().is_some_and(|m| m.is_zero()) {
            merged.pop();
        }

        normalize(merged)
    }

    /// The deep-cloning variant of [`Poly::from_monomials`], for callers
    /// that keep ownership of the list.
    pub fn from_monomials_cloned(monomials: &[Mono]) -> Poly {
        Poly::from_monomials(monomials.to_vec())
    }

    /// Returns the total degree: the maximum over all monomials of the
    /// exponent plus the coefficient's own total degree. The zero polynomial
    /// reports [`ZERO_POLY_DEGREE`].
    pub fn deg(&self) -> Exponent {
        match self {
            Poly::Coeff(0) => ZERO_POLY_DEGREE,
            Poly::Coeff(_) => 0,
            Poly::Terms(monomials) => monomials
                .iter()
                .map(|m| m.exp + m.coeff.deg())
                .max()
                .unwrap(),
        }
    }

    /// Returns the degree with respect to variable `var`, counted from the
    /// leading variable. For `var == 0` the sorted order gives the answer in
    /// O(1); deeper variables recurse through every coefficient.
    pub fn deg_by(&self, var: usize) -> Exponent {
        match self {
            Poly::Coeff(0) => ZERO_POLY_DEGREE,
            Poly::Coeff(_) => 0,
            Poly::Terms(monomials) => {
                if var == 0 {
                    monomials.last().unwrap().exp
                } else {
                    monomials
                        .iter()
                        .map(|m| m.coeff.deg_by(var - 1))
                        .max()
                        .unwrap()
                }
            }
        }
    }

    /// Computes `self^exp` by binary exponentiation.
    pub fn pow(&self, exp: u32) -> Poly {
        if exp == 0 {
            return Poly::one();
        }

        let half = self.pow(exp / 2);
        let squared = half.clone() * half;
        if exp % 2 == 0 {
            squared
        } else {
            self * &squared
        }
    }
}

/// Applies the collapse rules to an ordered, duplicate-free monomial list:
/// an empty list is zero, and a single exponent-0 monomial with a constant
/// coefficient is that constant.
fn normalize(monomials: Vec<Mono>) -> Poly {
    match monomials.as_slice() {
        [] => Poly::zero(),
        [mono] => {
            if mono.is_zero() {
                return Poly::zero();
            }
            if mono.exp == 0 {
                if let Poly::Coeff(c) = mono.coeff {
                    return Poly::Coeff(c);
                }
            }
            Poly::Terms(monomials)
        }
        _ => Poly::Terms(monomials),
    }
}

/// Adds a constant into the exponent-0 slot of an ordered monomial list.
fn add_constant(mut monomials: Vec<Mono>, c: Coefficient) -> Poly {
    debug_assert!(!monomials.is_empty());

    if c == 0 {
        return Poly::Terms(monomials);
    }

    if monomials[0].exp == 0 {
        let sum = mem::replace(&mut monomials[0].coeff, Poly::zero()) + Poly::Coeff(c);
        if sum.is_zero() {
            monomials.remove(0);
        } else {
            monomials[0].coeff = sum;
        }
    } else {
        monomials.insert(0, Mono::new(Poly::Coeff(c), 0));
    }

    normalize(monomials)
}

/// Merges two ordered, duplicate-free monomial lists. Exponents present in
/// both lists are combined by recursive addition and kept only when the sum
/// is non-zero.
fn merge_terms(a: Vec<Mono>, b: Vec<Mono>) -> Poly {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let mut lhs = a.into_iter().peekable();
    let mut rhs = b.into_iter().peekable();

    while let (Some(x), Some(y)) = (lhs.peek(), rhs.peek()) {
        match x.exp.cmp(&y.exp) {
            std::cmp::Ordering::Less => merged.push(lhs.next().unwrap()),
            std::cmp::Ordering::Greater => merged.push(rhs.next().unwrap()),
            std::cmp::Ordering::Equal => {
                let x = lhs.next().unwrap();
                let y = rhs.next().unwrap();
                let coeff = x.coeff + y.coeff;
                if !coeff.is_zero() {
                    merged.push(Mono::new(coeff, x.exp));
                }
            }
        }
    }
    merged.extend(lhs);
    merged.extend(rhs);

    normalize(merged)
}

/// Multiplies every coefficient of an ordered monomial list by a constant.
/// Sortedness and uniqueness are preserved; monomials whose product wraps to
/// zero are dropped.
fn scale_terms(monomials: Vec<Mono>, c: Coefficient) -> Poly {
    if c == 0 {
        return Poly::zero();
    }

    let mut scaled = Vec::with_capacity(monomials.len());
    for mono in monomials {
        let coeff = mono.coeff * Poly::Coeff(c);
        if !coeff.is_zero() {
            scaled.push(Mono::new(coeff, mono.exp));
        }
    }

    normalize(scaled)
}

/// The full cartesian product of two monomial lists. Cross terms collide on
/// exponent and arrive unsorted, so the result goes through the canonical
/// builder.
fn cross_terms(a: Vec<Mono>, b: Vec<Mono>) -> Poly {
    let mut products = Vec::with_capacity(a.len() * b.len());
    for x in &a {
        for y in &b {
            let coeff = &x.coeff * &y.coeff;
            if !coeff.is_zero() {
                products.push(Mono::new(coeff, x.exp + y.exp));
            }
        }
    }

    Poly::from_monomials(products)
}

impl Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Poly) -> Poly {
        match (self, rhs) {
            (Poly::Coeff(a), Poly::Coeff(b)) => Poly::Coeff(a.wrapping_add(b)),
            (Poly::Coeff(c), Poly::Terms(t)) | (Poly::Terms(t), Poly::Coeff(c)) => {
                add_constant(t, c)
            }
            (Poly::Terms(a), Poly::Terms(b)) => merge_terms(a, b),
        }
    }
}

impl<'a, 'b> Add<&'a Poly> for &'b Poly {
    type Output = Poly;

    fn add(self, rhs: &'a Poly) -> Poly {
        self.clone() + rhs.clone()
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        self * Poly::Coeff(-1)
    }
}

impl<'a> Neg for &'a Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        self.clone().neg()
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Poly) -> Poly {
        self + rhs.neg()
    }
}

impl<'a, 'b> Sub<&'a Poly> for &'b Poly {
    type Output = Poly;

    fn sub(self, rhs: &'a Poly) -> Poly {
        self.clone() + rhs.clone().neg()
    }
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Poly {
        match (self, rhs) {
            (Poly::Coeff(a), Poly::Coeff(b)) => Poly::Coeff(a.wrapping_mul(b)),
            (Poly::Coeff(c), Poly::Terms(t)) | (Poly::Terms(t), Poly::Coeff(c)) => {
                scale_terms(t, c)
            }
            (Poly::Terms(a), Poly::Terms(b)) => cross_terms(a, b),
        }
    }
}

impl<'a, 'b> Mul<&'a Poly> for &'b Poly {
    type Output = Poly;

    fn mul(self, rhs: &'a Poly) -> Poly {
        self.clone() * rhs.clone()
    }
}
