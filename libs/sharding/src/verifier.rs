//! Post split verification.

use crate::{
    errors::{CodecError, SelfTestError},
    reconstructor::Reconstructor,
    shard::ShardRecord,
};
use math_core::fields::PrimeField;

/// Re-runs reconstruction on freshly produced shards before they are released.
///
/// A modulus too small for the secret or any other misconfiguration that would
/// make a shard set unrecoverable is caught here, before anything has been
/// persisted.
pub struct SelfTestVerifier {
    reconstructor: Reconstructor,
}

impl SelfTestVerifier {
    /// Creates a verifier for the given field.
    pub fn new(field: PrimeField) -> Result<Self, CodecError> {
        Ok(Self { reconstructor: Reconstructor::new(field)? })
    }

    /// Reconstructs from the minimum number of fresh shards and compares the
    /// result byte for byte with the original secret.
    pub fn verify(&self, records: &[ShardRecord], secret: &[u8]) -> Result<(), SelfTestError> {
        let min = records.first().map(|record| record.min_shards).unwrap_or(0) as usize;
        let subset = records.get(..min).unwrap_or(records);
        let recovered = self.reconstructor.reconstruct(subset)?;
        if recovered != secret {
            return Err(SelfTestError::Mismatch);
        }
        Ok(())
    }
}
