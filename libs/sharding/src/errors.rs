//! Secret sharding errors.

use math_core::errors::InterpolationError;
use thiserror::Error;

/// The requested shard configuration cannot produce a recoverable secret.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum InvalidShareConfig {
    /// Fewer than one shard would be required for reconstruction.
    #[error("minimum shard count must be at least one")]
    MinimumTooLow,

    /// Reconstruction would require more shards than are generated.
    #[error("minimum shard count exceeds total shard count")]
    MinimumExceedsTotal,

    /// There are not enough distinct abscissas in the field for the shards.
    #[error("total shard count must be smaller than the prime modulus")]
    TotalExceedsField,
}

/// Secret encoding failure.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum CodecError {
    /// The secret encodes to a value outside the field.
    #[error("secret encoding does not fit in the field, use a larger prime")]
    SecretTooLarge,

    /// The prime cannot hold even a single byte of payload per element.
    #[error("prime is too small to encode secrets")]
    PrimeTooSmall,

    /// A recovered element is not a valid secret encoding.
    #[error("recovered chunk is not a valid secret encoding")]
    MalformedChunk,
}

/// Split failure.
#[derive(Error, Debug)]
pub enum SplitError {
    /// The shard configuration is unusable.
    #[error(transparent)]
    InvalidConfig(#[from] InvalidShareConfig),

    /// The secret could not be encoded into the field.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The freshly produced shards failed to reconstruct the secret.
    ///
    /// Fatal: the shards must be discarded, not handed to the caller.
    #[error("split self-test failed: {0}")]
    SelfTest(#[from] SelfTestError),
}

/// The post split round trip check failed.
#[derive(Error, Debug)]
pub enum SelfTestError {
    /// Reconstruction from the fresh shards failed.
    #[error(transparent)]
    Reconstruct(#[from] ReconstructError),

    /// The reconstructed secret differs from the original.
    #[error("reconstructed secret does not match the original")]
    Mismatch,
}

/// Secret reconstruction failure.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum ReconstructError {
    /// No shard records were supplied.
    #[error("no shard records supplied")]
    NoShards,

    /// Fewer records were supplied than the threshold in their metadata.
    #[error("{supplied} shard records supplied but {required} are required")]
    InsufficientShards {
        /// The minimum shard count the records claim.
        required: u32,

        /// How many records were actually supplied.
        supplied: usize,
    },

    /// The supplied records disagree on their shard set metadata.
    #[error("shard records carry inconsistent metadata")]
    InconsistentMetadata,

    /// Two records claim the same shard index.
    #[error("duplicate shard index {index}")]
    DuplicateShard {
        /// The index claimed by more than one record.
        index: u32,
    },

    /// A record's values do not match its own or its siblings' fingerprints.
    #[error("fingerprint mismatch for shard index {index}")]
    FingerprintMismatch {
        /// The index of the offending record.
        index: u32,
    },

    /// The polynomial interpolation failed.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    /// A recovered chunk could not be decoded.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
