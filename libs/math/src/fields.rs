//! Prime fields with a runtime modulus.

use crate::errors::{DivByZero, InvalidModulus};
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

/// A finite field GF(p) for a prime modulus chosen at runtime.
///
/// Elements are plain [BigUint] values in `[0, p)`; every operation reduces its
/// result back into that range. The modulus is carried by value so that callers
/// can run independent fields concurrently without any process-wide state.
///
/// # Examples
///
/// ```
/// use math_core::fields::PrimeField;
/// use num_bigint::BigUint;
///
/// # fn test() -> Result<(), Box<dyn std::error::Error>> {
/// let field = PrimeField::new(BigUint::from(11u32))?;
/// let sum = field.add(&BigUint::from(7u32), &BigUint::from(9u32));
/// assert_eq!(sum, BigUint::from(5u32));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    prime: BigUint,
}

impl PrimeField {
    /// Constructs a field over the given prime modulus.
    ///
    /// The modulus must be at least 2. Primality itself is not verified, it is
    /// the caller's responsibility to pick an actual prime.
    pub fn new(prime: BigUint) -> Result<Self, InvalidModulus> {
        if prime < BigUint::from(2u32) {
            return Err(InvalidModulus);
        }
        Ok(Self { prime })
    }

    /// The prime modulus this field operates on.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Number of bits in the modulus.
    pub fn bits(&self) -> u64 {
        self.prime.bits()
    }

    /// Number of bytes needed to hold any element of this field.
    pub fn byte_width(&self) -> usize {
        self.prime.bits().div_ceil(8) as usize
    }

    /// Reduce an arbitrary value into `[0, p)`.
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.prime
    }

    /// Check whether a value is a valid element of this field.
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.prime
    }

    /// Modular addition.
    pub fn add(&self, left: &BigUint, right: &BigUint) -> BigUint {
        (left + right) % &self.prime
    }

    /// Modular subtraction.
    pub fn sub(&self, left: &BigUint, right: &BigUint) -> BigUint {
        ((left + &self.prime) - right) % &self.prime
    }

    /// Modular multiplication.
    pub fn mul(&self, left: &BigUint, right: &BigUint) -> BigUint {
        (left * right) % &self.prime
    }

    /// Additive inverse.
    pub fn neg(&self, value: &BigUint) -> BigUint {
        (&self.prime - value) % &self.prime
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    ///
    /// Runs one gcd pass over signed big integers, O(log p) word operations.
    /// Zero has no inverse and yields [DivByZero].
    pub fn inverse(&self, value: &BigUint) -> Result<BigUint, DivByZero> {
        if value.is_zero() {
            return Err(DivByZero);
        }
        let modulus = BigInt::from(self.prime.clone());
        let (mut r, mut new_r) = (modulus.clone(), BigInt::from(self.reduce(value)));
        let (mut t, mut new_t) = (BigInt::zero(), BigInt::one());
        while !new_r.is_zero() {
            let quotient = &r / &new_r;
            (r, new_r) = (new_r.clone(), &r - &quotient * &new_r);
            (t, new_t) = (new_t.clone(), &t - &quotient * &new_t);
        }
        if !r.is_one() {
            // gcd(value, p) != 1, so the value shares a factor with the modulus.
            return Err(DivByZero);
        }
        let t = ((t % &modulus) + &modulus) % &modulus;
        // Safety: t was just reduced into [0, p) so it is non-negative.
        #[allow(clippy::unwrap_used)]
        Ok(t.to_biguint().unwrap())
    }

    /// Generates a uniformly random field element from the provided generator.
    pub fn gen_random_element<R: CryptoRng + RngCore>(&self, rng: &mut R) -> BigUint {
        rng.gen_biguint_below(&self.prime)
    }

    /// Canonical fixed-width big-endian encoding of an element.
    ///
    /// The width is [byte_width](Self::byte_width) regardless of the element's
    /// magnitude, so the encoding is stable across platforms and suitable for
    /// hashing.
    pub fn element_to_padded_bytes(&self, value: &BigUint) -> Vec<u8> {
        let width = self.byte_width();
        let bytes = value.to_bytes_be();
        let mut padded = vec![0u8; width.saturating_sub(bytes.len())];
        padded.extend_from_slice(&bytes);
        padded
    }
}

pub mod primes {
    //! Well known prime moduli.

    use num_bigint::BigUint;
    use num_traits::One;

    /// The 12th Mersenne prime, 2^127 - 1.
    ///
    /// A known prime as close as possible to a 128 bit security level, and the
    /// default modulus for secret sharing.
    pub fn mersenne_127() -> BigUint {
        (BigUint::one() << 127u32) - 1u32
    }

    /// The 13th Mersenne prime, 2^521 - 1.
    pub fn mersenne_521() -> BigUint {
        (BigUint::one() << 521u32) - 1u32
    }
}
