//! Point

use num_bigint::BigUint;

/// A polynomial evaluation: a non zero abscissa paired with the evaluation result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub(crate) x: u32,
    pub(crate) y: BigUint,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: u32, y: BigUint) -> Point {
        Point { x, y }
    }

    /// The abscissa of the point.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// The ordinate of the point.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Consumes the point and returns the (x, y) coordinates in it.
    pub fn into_coordinates(self) -> (u32, BigUint) {
        (self.x, self.y)
    }
}
