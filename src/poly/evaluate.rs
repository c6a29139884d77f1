use super::{Coefficient, Poly};

/// Computes `base^exp` with wrapping arithmetic by binary exponentiation.
fn pow_coeff(base: Coefficient, mut exp: u32) -> Coefficient {
    let mut x = base;
    let mut result: Coefficient = 1;
    while exp > 0 {
        if exp % 2 == 1 {
            result = result.wrapping_mul(x);
        }
        x = x.wrapping_mul(x);
        exp /= 2;
    }
    result
}

impl Poly {
    /// Evaluates the polynomial at `x`, substituting the leading variable
    /// only. The result is a polynomial over the remaining variables, or a
    /// constant if none remain.
    ///
    /// The monomials are walked in increasing exponent order with a running
    /// power of `x`: only the gap to the previous exponent is raised, instead
    /// of recomputing `x^e` per term.
    pub fn evaluate(&self, x: Coefficient) -> Poly {
        let monomials = match self {
            Poly::Coeff(c) => return Poly::Coeff(*c),
            Poly::Terms(monomials) => monomials,
        };

        let mut result = Poly::zero();
        let mut power: Coefficient = 1;
        let mut last_exp = 0;
        for mono in monomials {
            power = power.wrapping_mul(pow_coeff(x, (mono.exp - last_exp) as u32));
            last_exp = mono.exp;
            result = result + mono.coeff.clone() * Poly::Coeff(power);
        }
        result
    }

    /// Substitutes variable `i` with `subs[i]`. Variables beyond the end of
    /// the list are substituted with zero, so composing a non-constant
    /// polynomial against an empty list evaluates every remaining variable
    /// at zero. Constants compose to a copy of themselves.
    pub fn compose(&self, subs: &[Poly]) -> Poly {
        let monomials = match self {
            Poly::Coeff(c) => return Poly::Coeff(*c),
            Poly::Terms(monomials) => monomials,
        };

        let zero = Poly::zero();
        let head = subs.first().unwrap_or(&zero);
        let tail = subs.get(1..).unwrap_or(&[]);

        let mut result = Poly::zero();
        for mono in monomials {
            let inner = mono.coeff.compose(tail);
            if inner.is_zero() {
                continue;
            }
            // 0^0 = 1 keeps the exponent-0 term of a missing substitution
            result = result + head.pow(mono.exp as u32) * inner;
        }
        result
    }
}
