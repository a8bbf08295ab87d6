//! Point Sequence.

use crate::{
    errors::{InterpolationError, NotEnoughPoints},
    fields::PrimeField,
    polynomial::point::Point,
};
use num_bigint::BigUint;
use std::collections::HashSet;

/// A sequence of polynomial evaluations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSequence {
    points: Vec<Point>,
}

impl PointSequence {
    /// Get the points in the sequence.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the point sequence and return the points in it.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Checks if there are any duplicated abscissas.
    pub fn has_duplicates(&self) -> bool {
        let mut x_set = HashSet::new();
        for point in self.points.iter() {
            x_set.insert(point.x);
        }
        x_set.len() != self.points.len()
    }

    /// Add a point to the point sequence.
    pub fn push(&mut self, point: Point) {
        self.points.push(point)
    }

    /// Take the first `count` points as a new sequence.
    pub fn take(&self, count: usize) -> Result<PointSequence, NotEnoughPoints> {
        if count > self.points.len() {
            return Err(NotEnoughPoints);
        }
        Ok(PointSequence { points: self.points.iter().take(count).cloned().collect() })
    }

    /// Lagrange interpolation of the sequence at zero.
    pub fn lagrange_interpolate(&self, field: &PrimeField) -> Result<BigUint, InterpolationError> {
        crate::decoders::interpolate_at_zero(self, field)
    }
}
