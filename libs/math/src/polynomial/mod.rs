//! Polynomials over a prime field.

pub mod point;
pub mod point_sequence;
pub mod polynomial;

pub use polynomial::Polynomial;
