//! Shard integrity fingerprints.

use math_core::fields::PrimeField;
use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt::{self, Display};

/// Number of digest bytes kept in a fingerprint.
const FINGERPRINT_SIZE: usize = 8;

/// A short deterministic digest of a shard's values.
///
/// Fingerprints only detect tampered or mismatched shards; they play no part
/// in reconstruction itself. They serialize as lowercase hex strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_SIZE]);

impl Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text.len() != FINGERPRINT_SIZE * 2 {
            return Err(de::Error::custom("invalid fingerprint length"));
        }
        let mut bytes = [0u8; FINGERPRINT_SIZE];
        for (index, byte) in bytes.iter_mut().enumerate() {
            let pair = text.get(index * 2..index * 2 + 2).ok_or_else(|| de::Error::custom("invalid fingerprint"))?;
            *byte = u8::from_str_radix(pair, 16).map_err(de::Error::custom)?;
        }
        Ok(Fingerprint(bytes))
    }
}

/// Computes fingerprints over canonical shard value encodings.
#[derive(Clone, Debug)]
pub struct FingerprintService {
    field: PrimeField,
}

impl FingerprintService {
    /// Creates a service bound to the field the shard values live in.
    pub fn new(field: PrimeField) -> Self {
        Self { field }
    }

    /// Fingerprint of a shard's chunk values.
    ///
    /// Each value is hashed in its fixed width big endian form, so shards
    /// produced by different implementations of this scheme verify the same
    /// way as long as they agree on the modulus.
    pub fn fingerprint(&self, values: &[BigUint]) -> Fingerprint {
        let mut hasher = Sha256::new();
        for value in values {
            hasher.update(self.field.element_to_padded_bytes(value));
        }
        let digest = hasher.finalize();
        let mut bytes = [0u8; FINGERPRINT_SIZE];
        for (slot, byte) in bytes.iter_mut().zip(digest.iter()) {
            *slot = *byte;
        }
        Fingerprint(bytes)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;
    use math_core::fields::primes;

    fn service() -> FingerprintService {
        FingerprintService::new(PrimeField::new(primes::mersenne_127()).unwrap())
    }

    #[test]
    fn empty_input_digest_is_pinned() {
        // Truncated SHA-256 of the empty input.
        assert_eq!(service().fingerprint(&[]).to_string(), "e3b0c44298fc1c14");
    }

    #[test]
    fn deterministic_across_instances() {
        let values = vec![BigUint::from(42u32), BigUint::from(1337u32)];
        assert_eq!(service().fingerprint(&values), service().fingerprint(&values));
    }

    #[test]
    fn different_values_produce_different_digests() {
        let service = service();
        let left = service.fingerprint(&[BigUint::from(42u32)]);
        let right = service.fingerprint(&[BigUint::from(43u32)]);
        assert_ne!(left, right);
    }

    #[test]
    fn value_order_matters() {
        let service = service();
        let forward = service.fingerprint(&[BigUint::from(1u32), BigUint::from(2u32)]);
        let reverse = service.fingerprint(&[BigUint::from(2u32), BigUint::from(1u32)]);
        assert_ne!(forward, reverse);
    }

    #[test]
    fn serde_round_trip() {
        let fingerprint = service().fingerprint(&[BigUint::from(7u32)]);
        let encoded = serde_json::to_string(&fingerprint).unwrap();
        assert_eq!(encoded.len(), FINGERPRINT_SIZE * 2 + 2);
        let decoded: Fingerprint = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, fingerprint);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(serde_json::from_str::<Fingerprint>("\"zz00000000000000\"").is_err());
        assert!(serde_json::from_str::<Fingerprint>("\"abcd\"").is_err());
    }
}
