//! Threshold secret sharing of byte secrets over a prime field.
//!
//! A secret is split into `n` shard records such that any `m` of them
//! reconstruct it while fewer than `m` reveal nothing. Shards carry integrity
//! fingerprints so reconstruction detects tampered or mismatched sets instead
//! of silently producing a wrong secret.
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::invalid_regex,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod codec;
pub mod errors;
pub mod fingerprint;
pub mod reconstructor;
pub mod shard;
pub mod splitter;
pub mod verifier;

pub use codec::SecretCodec;
pub use fingerprint::{Fingerprint, FingerprintService};
pub use reconstructor::Reconstructor;
pub use shard::ShardRecord;
pub use splitter::{ShareConfig, Splitter};
pub use verifier::SelfTestVerifier;
