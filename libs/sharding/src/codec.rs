//! Secret to field element codec.

use crate::errors::CodecError;
use math_core::fields::PrimeField;
use num_bigint::BigUint;

/// Guard byte prepended to every payload before the base 256 conversion.
///
/// It pins the payload length inside the integer value, so payloads with
/// leading zero bytes (and the empty payload) survive the round trip.
const CHUNK_GUARD: u8 = 0x01;

/// Converts between byte secrets and field elements.
///
/// Secrets are treated as opaque bytes. A secret longer than one element can
/// hold is split into fixed size chunks, each encoded as its own element; the
/// chunk size is derived from the modulus so every encoding fits the field by
/// construction, which removes any ceiling on secret length.
#[derive(Clone, Debug)]
pub struct SecretCodec {
    field: PrimeField,
    chunk_size: usize,
}

impl SecretCodec {
    /// Creates a codec for the given field.
    pub fn new(field: PrimeField) -> Result<Self, CodecError> {
        // An encoded chunk is guard + payload, strictly below 2^(8 * (payload + 1)).
        // Capping that exponent at bits(p) - 1 keeps every chunk below p.
        let chunk_size = (field.bits().saturating_sub(1) / 8).saturating_sub(1) as usize;
        if chunk_size == 0 {
            return Err(CodecError::PrimeTooSmall);
        }
        Ok(Self { field, chunk_size })
    }

    /// Number of payload bytes carried per field element.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Encodes a whole secret as a single field element.
    ///
    /// Fails with [CodecError::SecretTooLarge] when the encoding does not fit
    /// the field; the value is never silently truncated.
    pub fn encode_element(&self, secret: &[u8]) -> Result<BigUint, CodecError> {
        let mut bytes = Vec::with_capacity(secret.len().saturating_add(1));
        bytes.push(CHUNK_GUARD);
        bytes.extend_from_slice(secret);
        let value = BigUint::from_bytes_be(&bytes);
        if !self.field.contains(&value) {
            return Err(CodecError::SecretTooLarge);
        }
        Ok(value)
    }

    /// Decodes a single field element back into the bytes it encodes.
    pub fn decode_element(&self, value: &BigUint) -> Result<Vec<u8>, CodecError> {
        let bytes = value.to_bytes_be();
        match bytes.split_first() {
            Some((&CHUNK_GUARD, payload)) => Ok(payload.to_vec()),
            _ => Err(CodecError::MalformedChunk),
        }
    }

    /// Encodes a secret into one field element per chunk, in order.
    ///
    /// An empty secret still produces a single empty chunk so that it round
    /// trips like any other.
    pub fn encode(&self, secret: &[u8]) -> Result<Vec<BigUint>, CodecError> {
        if secret.is_empty() {
            return Ok(vec![self.encode_element(&[])?]);
        }
        secret.chunks(self.chunk_size).map(|chunk| self.encode_element(chunk)).collect()
    }

    /// Decodes chunk elements and concatenates their payloads in order.
    pub fn decode(&self, values: &[BigUint]) -> Result<Vec<u8>, CodecError> {
        let mut secret = Vec::new();
        for value in values {
            secret.extend(self.decode_element(value)?);
        }
        Ok(secret)
    }
}
