//! Shard records.

use crate::fingerprint::Fingerprint;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// One shard of a split secret, with the metadata needed to validate a set.
///
/// Records are created once at split time and never mutated; reconstruction
/// treats them as untrusted input and validates everything in here. Values
/// serialize as decimal strings so arbitrary precision integers round trip
/// exactly through JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardRecord {
    /// The shard index; the abscissa all of this shard's points were evaluated at.
    pub index: u32,

    /// One polynomial evaluation per secret chunk, in chunk order.
    #[serde(with = "decimal_values")]
    pub values: Vec<BigUint>,

    /// Total number of shards in the set.
    pub total_shards: u32,

    /// Minimum number of shards needed for reconstruction.
    pub min_shards: u32,

    /// Fingerprint of this shard's values.
    pub fingerprint: Fingerprint,

    /// Fingerprints of every shard in the set, ordered by shard index.
    ///
    /// Includes this shard's own fingerprint, so every record carries the same
    /// list and siblings can be cross checked without their values.
    pub set_fingerprints: Vec<Fingerprint>,
}

mod decimal_values {
    //! Big integers as decimal strings, for lossless JSON.

    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub(super) fn serialize<S: Serializer>(values: &[BigUint], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|value| value.to_str_radix(10)))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<BigUint>, D::Error> {
        let texts = Vec::<String>::deserialize(deserializer)?;
        texts.iter().map(|text| BigUint::from_str(text).map_err(de::Error::custom)).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod test {
    use super::*;
    use crate::fingerprint::FingerprintService;
    use math_core::fields::{primes, PrimeField};
    use std::str::FromStr;

    fn make_record() -> ShardRecord {
        let service = FingerprintService::new(PrimeField::new(primes::mersenne_127()).unwrap());
        let values = vec![BigUint::from_str("170141183460469231731687303715884105726").unwrap()];
        let fingerprint = service.fingerprint(&values);
        ShardRecord {
            index: 1,
            values,
            total_shards: 3,
            min_shards: 2,
            fingerprint,
            set_fingerprints: vec![fingerprint, service.fingerprint(&[]), service.fingerprint(&[])],
        }
    }

    #[test]
    fn json_round_trip_is_exact() {
        let record = make_record();
        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: ShardRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn values_serialize_as_decimal_strings() {
        let encoded = serde_json::to_string(&make_record()).unwrap();
        assert!(encoded.contains("\"170141183460469231731687303715884105726\""));
    }

    #[test]
    fn rejects_non_numeric_values() {
        let mut parsed: serde_json::Value = serde_json::from_str(&serde_json::to_string(&make_record()).unwrap()).unwrap();
        parsed["values"][0] = serde_json::Value::String("potato".into());
        assert!(serde_json::from_value::<ShardRecord>(parsed).is_err());
    }
}
