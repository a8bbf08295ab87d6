//! Lagrange in Finite Field.

use crate::{errors::InterpolationError, fields::PrimeField, polynomial::point_sequence::PointSequence};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Lagrange interpolation at zero, O(m^2) field operations.
///
/// For m points `(x_i, y_i)` this evaluates the unique polynomial of degree at
/// most m - 1 through the points at x = 0:
///
/// `sum_i [ y_i * prod_{j != i} x_j * (x_j - x_i)^-1 ] mod p`
pub fn interpolate_at_zero(sequence: &PointSequence, field: &PrimeField) -> Result<BigUint, InterpolationError> {
    if sequence.is_empty() {
        return Err(InterpolationError::EmptySequence);
    }
    if sequence.has_duplicates() {
        return Err(InterpolationError::DuplicateAbscissas);
    }

    let mut result = BigUint::zero();
    for pi in sequence.points() {
        let xi = field.reduce(&BigUint::from(pi.x()));
        let mut numerator = BigUint::one();
        let mut denominator = BigUint::one();
        for pj in sequence.points() {
            if pj.x() == pi.x() {
                continue;
            }
            let xj = field.reduce(&BigUint::from(pj.x()));
            numerator = field.mul(&numerator, &xj);
            denominator = field.mul(&denominator, &field.sub(&xj, &xi));
        }
        let weight = field.mul(&numerator, &field.inverse(&denominator)?);
        result = field.add(&result, &field.mul(pi.y(), &weight));
    }
    Ok(result)
}
