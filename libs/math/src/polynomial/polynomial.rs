//! Polynomial in Finite Field.

use crate::fields::PrimeField;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

/// Polynomial Expression.
///
/// Coefficients are stored in ascending degree order, so `[1, 2, 3]` is
/// `1 + 2x + 3x^2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigUint>,
}

impl Polynomial {
    /// Creates a new polynomial expression.
    pub fn new(coefficients: Vec<BigUint>) -> Polynomial {
        Polynomial { coefficients }
    }

    /// Builds a polynomial with a fixed constant term and uniformly random
    /// higher coefficients.
    ///
    /// The result has `terms` coefficients in total; the constant term carries
    /// the value being shared and the remaining `terms - 1` are drawn from the
    /// provided generator.
    pub fn gen_random<R>(constant: BigUint, terms: u32, field: &PrimeField, rng: &mut R) -> Polynomial
    where
        R: CryptoRng + RngCore,
    {
        let mut coefficients = Vec::with_capacity(terms as usize);
        coefficients.push(constant);
        for _ in 1..terms {
            coefficients.push(field.gen_random_element(rng));
        }
        Polynomial { coefficients }
    }

    /// Get coefficients.
    pub fn coefficients(&self) -> &[BigUint] {
        &self.coefficients
    }

    /// Get the degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates the polynomial at a given x using Horner's method.
    ///
    /// Costs one field multiplication and one addition per coefficient.
    pub fn eval(&self, x: &BigUint, field: &PrimeField) -> BigUint {
        let mut eval = BigUint::zero();
        for coefficient in self.coefficients.iter().rev() {
            eval = field.add(&field.mul(&eval, x), coefficient);
        }
        eval
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    fn make_polynomial(coefficients: &[u32]) -> Polynomial {
        Polynomial::new(coefficients.iter().map(|c| BigUint::from(*c)).collect())
    }

    #[rstest]
    #[case(0, 10)]
    #[case(1, 4)]
    #[case(2, 4)]
    #[case(3, 10)]
    fn evaluate_mod_11(#[case] x: u32, #[case] expected: u32) {
        // 10 + 2x + 3x^2 mod 11
        let field = PrimeField::new(BigUint::from(11u32)).unwrap();
        let polynomial = make_polynomial(&[10, 2, 3]);
        assert_eq!(polynomial.eval(&x.into(), &field), BigUint::from(expected));
    }

    #[test]
    fn random_polynomial_keeps_constant_term() {
        let field = PrimeField::new(BigUint::from(1_000_000_007u64)).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let polynomial = Polynomial::gen_random(BigUint::from(42u32), 5, &field, &mut rng);
        assert_eq!(polynomial.coefficients().len(), 5);
        assert_eq!(polynomial.eval(&BigUint::zero(), &field), BigUint::from(42u32));
        assert!(polynomial.coefficients().iter().all(|c| field.contains(c)));
    }

    #[test]
    fn single_term_polynomial_is_constant() {
        let field = PrimeField::new(BigUint::from(11u32)).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let polynomial = Polynomial::gen_random(BigUint::from(7u32), 1, &field, &mut rng);
        assert_eq!(polynomial.degree(), 0);
        assert_eq!(polynomial.eval(&BigUint::from(5u32), &field), BigUint::from(7u32));
    }
}
