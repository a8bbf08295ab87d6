//! Secret reconstruction from untrusted shard records.

use crate::{
    codec::SecretCodec,
    errors::{CodecError, ReconstructError},
    fingerprint::FingerprintService,
    shard::ShardRecord,
};
use math_core::{
    fields::PrimeField,
    polynomial::{point::Point, point_sequence::PointSequence},
};
use num_bigint::BigUint;
use std::collections::HashSet;

/// Recovers secrets from shard records via Lagrange interpolation at zero.
pub struct Reconstructor {
    field: PrimeField,
    codec: SecretCodec,
    fingerprints: FingerprintService,
}

impl Reconstructor {
    /// Creates a reconstructor for the given field.
    pub fn new(field: PrimeField) -> Result<Self, CodecError> {
        let codec = SecretCodec::new(field.clone())?;
        let fingerprints = FingerprintService::new(field.clone());
        Ok(Self { field, codec, fingerprints })
    }

    /// Reconstructs the secret from the given shard records.
    ///
    /// Records are validated before any arithmetic: the set must be at least
    /// as large as the threshold its metadata claims, agree on that metadata,
    /// contain no duplicate indices, and every record's values must match both
    /// its stored fingerprint and the copy of it carried by its siblings.
    ///
    /// When more than the minimum number of records validate, the first `min`
    /// in shard index order are interpolated; any subset of that size yields
    /// the identical secret.
    pub fn reconstruct(&self, records: &[ShardRecord]) -> Result<Vec<u8>, ReconstructError> {
        let first = records.first().ok_or(ReconstructError::NoShards)?;
        let min = first.min_shards;
        if records.len() < min as usize {
            return Err(ReconstructError::InsufficientShards { required: min, supplied: records.len() });
        }
        self.validate_metadata(records)?;
        self.validate_duplicates(records)?;
        self.validate_fingerprints(records)?;

        let mut selected: Vec<&ShardRecord> = records.iter().collect();
        selected.sort_by_key(|record| record.index);
        selected.truncate(min as usize);

        let mut chunks = Vec::with_capacity(first.values.len());
        for chunk_index in 0..first.values.len() {
            let mut sequence = PointSequence::default();
            for record in &selected {
                let value = record.values.get(chunk_index).ok_or(ReconstructError::InconsistentMetadata)?;
                sequence.push(Point::new(record.index, value.clone()));
            }
            chunks.push(sequence.lagrange_interpolate(&self.field)?);
        }
        Ok(self.codec.decode(&chunks)?)
    }

    fn validate_metadata(&self, records: &[ShardRecord]) -> Result<(), ReconstructError> {
        let first = records.first().ok_or(ReconstructError::NoShards)?;
        let sane = first.min_shards >= 1
            && first.min_shards <= first.total_shards
            && !first.values.is_empty()
            && self.field.contains(&BigUint::from(first.total_shards));
        if !sane {
            return Err(ReconstructError::InconsistentMetadata);
        }
        for record in records {
            let consistent = record.total_shards == first.total_shards
                && record.min_shards == first.min_shards
                && record.values.len() == first.values.len()
                && record.set_fingerprints.len() == first.total_shards as usize
                && record.set_fingerprints == first.set_fingerprints
                && record.index >= 1
                && record.index <= record.total_shards;
            if !consistent {
                return Err(ReconstructError::InconsistentMetadata);
            }
        }
        Ok(())
    }

    fn validate_duplicates(&self, records: &[ShardRecord]) -> Result<(), ReconstructError> {
        let mut seen = HashSet::new();
        for record in records {
            if !seen.insert(record.index) {
                return Err(ReconstructError::DuplicateShard { index: record.index });
            }
        }
        Ok(())
    }

    fn validate_fingerprints(&self, records: &[ShardRecord]) -> Result<(), ReconstructError> {
        for record in records {
            let computed = self.fingerprints.fingerprint(&record.values);
            if computed != record.fingerprint {
                return Err(ReconstructError::FingerprintMismatch { index: record.index });
            }
            // The copy every sibling carries for this index must agree too.
            for sibling in records {
                match sibling.set_fingerprints.get(record.index as usize - 1) {
                    Some(referenced) if *referenced == computed => (),
                    _ => return Err(ReconstructError::FingerprintMismatch { index: record.index }),
                }
            }
        }
        Ok(())
    }
}
