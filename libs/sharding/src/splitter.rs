//! Secret splitting.

use crate::{
    codec::SecretCodec,
    errors::{InvalidShareConfig, SplitError},
    fingerprint::FingerprintService,
    shard::ShardRecord,
    verifier::SelfTestVerifier,
};
use math_core::{fields::PrimeField, polynomial::Polynomial};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

/// How many shards a split produces and how many are needed to reconstruct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShareConfig {
    total: u32,
    min: u32,
}

impl ShareConfig {
    /// Validates and creates a configuration producing `total` shards of which
    /// any `min` reconstruct the secret.
    pub fn new(total: u32, min: u32) -> Result<Self, InvalidShareConfig> {
        if min < 1 {
            return Err(InvalidShareConfig::MinimumTooLow);
        }
        if min > total {
            return Err(InvalidShareConfig::MinimumExceedsTotal);
        }
        Ok(Self { total, min })
    }

    /// Total number of shards produced per split.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Minimum number of shards needed for reconstruction.
    pub fn min(&self) -> u32 {
        self.min
    }
}

/// Splits byte secrets into shard records.
pub struct Splitter {
    field: PrimeField,
    codec: SecretCodec,
    config: ShareConfig,
    fingerprints: FingerprintService,
    verifier: SelfTestVerifier,
}

impl Splitter {
    /// Creates a splitter for the given field and shard configuration.
    ///
    /// Every configuration problem is reported here, before a split consumes
    /// any randomness.
    pub fn new(field: PrimeField, config: ShareConfig) -> Result<Self, SplitError> {
        if !field.contains(&BigUint::from(config.total())) {
            return Err(InvalidShareConfig::TotalExceedsField.into());
        }
        let codec = SecretCodec::new(field.clone())?;
        let fingerprints = FingerprintService::new(field.clone());
        let verifier = SelfTestVerifier::new(field.clone())?;
        Ok(Self { field, codec, config, fingerprints, verifier })
    }

    /// Splits a secret into shard records.
    ///
    /// One fresh polynomial is generated per secret chunk, with the chunk as
    /// its constant term, and evaluated at the shard indices `1..=total`; zero
    /// is never used as an abscissa since the polynomial's value there is the
    /// chunk itself. Each record is stamped with the fingerprints of the whole
    /// set. Before the records are handed back they are reconstructed once as
    /// a self test; the polynomial coefficients never leave this call.
    pub fn split<R>(&self, secret: &[u8], rng: &mut R) -> Result<Vec<ShardRecord>, SplitError>
    where
        R: CryptoRng + RngCore,
    {
        let chunks = self.codec.encode(secret)?;
        let mut shard_values = vec![Vec::with_capacity(chunks.len()); self.config.total() as usize];
        for chunk in chunks {
            let polynomial = Polynomial::gen_random(chunk, self.config.min(), &self.field, rng);
            for (values, x) in shard_values.iter_mut().zip(1u32..) {
                values.push(polynomial.eval(&BigUint::from(x), &self.field));
            }
        }

        let fingerprints: Vec<_> =
            shard_values.iter().map(|values| self.fingerprints.fingerprint(values)).collect();
        let mut records = Vec::with_capacity(shard_values.len());
        for ((values, fingerprint), index) in shard_values.into_iter().zip(fingerprints.iter()).zip(1u32..) {
            records.push(ShardRecord {
                index,
                values,
                total_shards: self.config.total(),
                min_shards: self.config.min(),
                fingerprint: *fingerprint,
                set_fingerprints: fingerprints.clone(),
            });
        }

        self.verifier.verify(&records, secret)?;
        Ok(records)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;
    use math_core::fields::primes;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    fn splitter(total: u32, min: u32) -> Splitter {
        let field = PrimeField::new(primes::mersenne_127()).unwrap();
        Splitter::new(field, ShareConfig::new(total, min).unwrap()).unwrap()
    }

    #[rstest]
    #[case::zero_minimum(5, 0, InvalidShareConfig::MinimumTooLow)]
    #[case::minimum_above_total(3, 5, InvalidShareConfig::MinimumExceedsTotal)]
    fn invalid_configurations(#[case] total: u32, #[case] min: u32, #[case] expected: InvalidShareConfig) {
        assert_eq!(ShareConfig::new(total, min), Err(expected));
    }

    #[test]
    fn shard_count_must_fit_field() {
        let field = PrimeField::new(BigUint::from(131071u32)).unwrap();
        let config = ShareConfig::new(200000, 3).unwrap();
        assert!(matches!(
            Splitter::new(field, config),
            Err(SplitError::InvalidConfig(InvalidShareConfig::TotalExceedsField))
        ));
    }

    #[test]
    fn produces_one_record_per_shard() {
        let mut rng = StdRng::seed_from_u64(1);
        let records = splitter(5, 3).split(b"hello", &mut rng).unwrap();
        assert_eq!(records.len(), 5);
        let indices: Vec<_> = records.iter().map(|record| record.index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
        for record in &records {
            assert_eq!(record.total_shards, 5);
            assert_eq!(record.min_shards, 3);
            assert_eq!(record.values.len(), 1);
            assert_eq!(record.set_fingerprints.len(), 5);
            assert_eq!(record.set_fingerprints.get(record.index as usize - 1), Some(&record.fingerprint));
        }
    }

    #[test]
    fn long_secret_produces_multiple_chunks() {
        let mut rng = StdRng::seed_from_u64(2);
        let secret = vec![7u8; 40];
        let records = splitter(4, 2).split(&secret, &mut rng).unwrap();
        for record in &records {
            assert_eq!(record.values.len(), 3);
        }
    }

    #[test]
    fn split_is_deterministic_under_a_fixed_seed() {
        let splitter = splitter(5, 3);
        let mut first_rng = StdRng::seed_from_u64(9);
        let mut second_rng = StdRng::seed_from_u64(9);
        let first = splitter.split(b"hello", &mut first_rng).unwrap();
        let second = splitter.split(b"hello", &mut second_rng).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn fresh_splits_differ() {
        let splitter = splitter(5, 3);
        let mut rng = StdRng::seed_from_u64(9);
        let first = splitter.split(b"hello", &mut rng).unwrap();
        let second = splitter.split(b"hello", &mut rng).unwrap();
        assert_ne!(first, second);
    }
}
