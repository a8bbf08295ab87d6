//! Decoders that recover values from point sequences.

pub mod lagrange;

pub use lagrange::interpolate_at_zero;
