//! Scalar abstraction over the backend scalar fields.
//!
//! A [`Scalar`] is a field element in `[0, order)` of one group, tagged
//! with that group. Arithmetic methods consume the receiver and return
//! the updated value, so chains like
//! `s.add(Some(&t))?.multiply(Some(&u))?` read fluently while the value
//! stays uniquely owned. Binary operations check the group tag first and
//! fail with [`Error::CastScalar`] on a mismatch; they never coerce.
//!
//! Operand policies follow the group API contract: a missing (`None`)
//! operand is a no-op for [`Scalar::add`] and [`Scalar::subtract`],
//! absorbs to zero for [`Scalar::multiply`], and acts as a zero exponent
//! for [`Scalar::pow`].

use curve25519_dalek as dalek;
use elliptic_curve::ff::{Field, PrimeField};
use k256::Secp256k1;
use p256::NistP256;
use p384::NistP384;
use p521::NistP521;
use rand_core::{CryptoRngCore, OsRng};
use sha2::{Sha256, Sha384, Sha512};

use crate::backend::{curve25519, weierstrass};
use crate::{Error, Group, Result};

#[cfg(feature = "serde")]
use serdect::serde::{ser, Serialize};

/// A scalar of one prime-order group, always reduced modulo the group
/// order.
///
/// Values are created through [`Group::new_scalar`](crate::Group) (zero)
/// and transformed from there. Sharing a scalar with another owner is an
/// explicit [`Clone`].
#[derive(Clone, Debug, PartialEq)]
pub struct Scalar(pub(crate) ScalarRepr);

/// Closed union over the backend scalar types. Ristretto255 and
/// Edwards25519 share a backend type but are distinct groups, so they
/// keep distinct tags.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ScalarRepr {
    Ristretto255(dalek::Scalar),
    P256(p256::Scalar),
    P384(p384::Scalar),
    P521(p521::Scalar),
    Edwards25519(dalek::Scalar),
    Secp256k1(k256::Scalar),
}

impl ScalarRepr {
    pub(crate) fn group(&self) -> Group {
        match self {
            Self::Ristretto255(_) => Group::Ristretto255Sha512,
            Self::P256(_) => Group::P256Sha256,
            Self::P384(_) => Group::P384Sha384,
            Self::P521(_) => Group::P521Sha512,
            Self::Edwards25519(_) => Group::Edwards25519Sha512,
            Self::Secp256k1(_) => Group::Secp256k1Sha256,
        }
    }

    fn add(self, rhs: &Self) -> Result<Self> {
        Ok(match (self, rhs) {
            (Self::Ristretto255(a), Self::Ristretto255(b)) => Self::Ristretto255(a + b),
            (Self::P256(a), Self::P256(b)) => Self::P256(a + b),
            (Self::P384(a), Self::P384(b)) => Self::P384(a + b),
            (Self::P521(a), Self::P521(b)) => Self::P521(a + b),
            (Self::Edwards25519(a), Self::Edwards25519(b)) => Self::Edwards25519(a + b),
            (Self::Secp256k1(a), Self::Secp256k1(b)) => Self::Secp256k1(a + b),
            _ => return Err(Error::CastScalar),
        })
    }

    fn sub(self, rhs: &Self) -> Result<Self> {
        Ok(match (self, rhs) {
            (Self::Ristretto255(a), Self::Ristretto255(b)) => Self::Ristretto255(a - b),
            (Self::P256(a), Self::P256(b)) => Self::P256(a - b),
            (Self::P384(a), Self::P384(b)) => Self::P384(a - b),
            (Self::P521(a), Self::P521(b)) => Self::P521(a - b),
            (Self::Edwards25519(a), Self::Edwards25519(b)) => Self::Edwards25519(a - b),
            (Self::Secp256k1(a), Self::Secp256k1(b)) => Self::Secp256k1(a - b),
            _ => return Err(Error::CastScalar),
        })
    }

    fn mul(self, rhs: &Self) -> Result<Self> {
        Ok(match (self, rhs) {
            (Self::Ristretto255(a), Self::Ristretto255(b)) => Self::Ristretto255(a * b),
            (Self::P256(a), Self::P256(b)) => Self::P256(a * b),
            (Self::P384(a), Self::P384(b)) => Self::P384(a * b),
            (Self::P521(a), Self::P521(b)) => Self::P521(a * b),
            (Self::Edwards25519(a), Self::Edwards25519(b)) => Self::Edwards25519(a * b),
            (Self::Secp256k1(a), Self::Secp256k1(b)) => Self::Secp256k1(a * b),
            _ => return Err(Error::CastScalar),
        })
    }
}

impl Scalar {
    /// The zero scalar of `group`.
    pub(crate) fn new(group: Group) -> Self {
        Self(match group {
            Group::Ristretto255Sha512 => ScalarRepr::Ristretto255(dalek::Scalar::ZERO),
            Group::P256Sha256 => ScalarRepr::P256(p256::Scalar::ZERO),
            Group::P384Sha384 => ScalarRepr::P384(p384::Scalar::ZERO),
            Group::P521Sha512 => ScalarRepr::P521(p521::Scalar::ZERO),
            Group::Edwards25519Sha512 => ScalarRepr::Edwards25519(dalek::Scalar::ZERO),
            Group::Secp256k1Sha256 => ScalarRepr::Secp256k1(k256::Scalar::ZERO),
            Group::Decaf448Shake256 => panic!("{}", Error::InvalidGroup),
        })
    }

    /// Returns the group this scalar belongs to.
    pub fn group(&self) -> Group {
        self.0.group()
    }

    /// Sets the scalar to 0, and returns it.
    pub fn zero(self) -> Self {
        Self::new(self.group())
    }

    /// Sets the scalar to 1, and returns it.
    pub fn one(self) -> Self {
        Self(match self.0 {
            ScalarRepr::Ristretto255(_) => ScalarRepr::Ristretto255(dalek::Scalar::ONE),
            ScalarRepr::P256(_) => ScalarRepr::P256(p256::Scalar::ONE),
            ScalarRepr::P384(_) => ScalarRepr::P384(p384::Scalar::ONE),
            ScalarRepr::P521(_) => ScalarRepr::P521(p521::Scalar::ONE),
            ScalarRepr::Edwards25519(_) => ScalarRepr::Edwards25519(dalek::Scalar::ONE),
            ScalarRepr::Secp256k1(_) => ScalarRepr::Secp256k1(k256::Scalar::ONE),
        })
    }

    /// Sets the scalar to order - 1, and returns it.
    pub fn minus_one(self) -> Self {
        Self(match self.0 {
            ScalarRepr::Ristretto255(_) => ScalarRepr::Ristretto255(-dalek::Scalar::ONE),
            ScalarRepr::P256(_) => ScalarRepr::P256(-p256::Scalar::ONE),
            ScalarRepr::P384(_) => ScalarRepr::P384(-p384::Scalar::ONE),
            ScalarRepr::P521(_) => ScalarRepr::P521(-p521::Scalar::ONE),
            ScalarRepr::Edwards25519(_) => ScalarRepr::Edwards25519(-dalek::Scalar::ONE),
            ScalarRepr::Secp256k1(_) => ScalarRepr::Secp256k1(-k256::Scalar::ONE),
        })
    }

    /// Sets the scalar to a uniformly random non-zero value drawn from
    /// the system entropy source, and returns it.
    pub fn random(self) -> Self {
        self.random_from_rng(&mut OsRng)
    }

    /// Sets the scalar to a uniformly random non-zero value drawn from
    /// `rng`, and returns it.
    ///
    /// Sampling draws a byte string wider than the field, reduces it
    /// modulo the order, and retries on zero, so the loop terminates
    /// after one iteration except with negligible probability.
    pub fn random_from_rng(self, rng: &mut impl CryptoRngCore) -> Self {
        Self(match self.0 {
            ScalarRepr::Ristretto255(_) => {
                ScalarRepr::Ristretto255(curve25519::random_scalar(&mut *rng))
            }
            ScalarRepr::P256(_) => ScalarRepr::P256(weierstrass::random_scalar::<NistP256>(rng)),
            ScalarRepr::P384(_) => ScalarRepr::P384(weierstrass::random_scalar::<NistP384>(rng)),
            ScalarRepr::P521(_) => ScalarRepr::P521(weierstrass::random_scalar::<NistP521>(rng)),
            ScalarRepr::Edwards25519(_) => {
                ScalarRepr::Edwards25519(curve25519::random_scalar(&mut *rng))
            }
            ScalarRepr::Secp256k1(_) => {
                ScalarRepr::Secp256k1(weierstrass::random_scalar::<Secp256k1>(rng))
            }
        })
    }

    /// Adds `rhs` to the scalar, and returns it. A `None` operand leaves
    /// the value unchanged.
    pub fn add(self, rhs: Option<&Scalar>) -> Result<Self> {
        match rhs {
            None => Ok(self),
            Some(rhs) => Ok(Self(self.0.add(&rhs.0)?)),
        }
    }

    /// Subtracts `rhs` from the scalar, and returns it. A `None` operand
    /// leaves the value unchanged.
    pub fn subtract(self, rhs: Option<&Scalar>) -> Result<Self> {
        match rhs {
            None => Ok(self),
            Some(rhs) => Ok(Self(self.0.sub(&rhs.0)?)),
        }
    }

    /// Multiplies the scalar by `rhs`, and returns it. A `None` operand
    /// is treated as zero and zeroes the receiver.
    pub fn multiply(self, rhs: Option<&Scalar>) -> Result<Self> {
        match rhs {
            None => Ok(self.zero()),
            Some(rhs) => Ok(Self(self.0.mul(&rhs.0)?)),
        }
    }

    /// Raises the scalar to the power `exp` modulo the group order, and
    /// returns it.
    ///
    /// Exponentiation is computed here, independently of backend support,
    /// with a two-accumulator square-and-multiply ladder walking the
    /// exponent bits from the highest set bit down. `pow(None)` and a
    /// zero exponent both yield one (`0^0 == 1` by convention); an
    /// exponent of one returns the base unchanged. Runs in variable time
    /// with respect to the exponent.
    pub fn pow(self, exp: Option<&Scalar>) -> Result<Self> {
        let Some(exp) = exp else { return Ok(self.one()) };

        if self.group() != exp.group() {
            return Err(Error::CastScalar);
        }

        let bits = exp.be_bytes();
        let Some(top) = highest_set_bit(&bits) else {
            return Ok(self.one());
        };

        // Ladder invariant: r1 == r0 * base.
        let mut r0 = self.0;
        let mut r1 = r0.clone().mul(&r0)?;

        for k in (0..top).rev() {
            if bit(&bits, k) {
                r0 = r0.mul(&r1)?;
                r1 = r1.clone().mul(&r1)?;
            } else {
                r1 = r0.clone().mul(&r1)?;
                r0 = r0.clone().mul(&r0)?;
            }
        }

        Ok(Self(r0))
    }

    /// Sets the scalar to its multiplicative inverse, and returns it.
    ///
    /// Inverting the zero scalar returns zero, for every group.
    pub fn invert(self) -> Self {
        Self(match self.0 {
            ScalarRepr::Ristretto255(s) => ScalarRepr::Ristretto255(s.invert()),
            ScalarRepr::P256(s) => {
                ScalarRepr::P256(Option::from(s.invert()).unwrap_or(p256::Scalar::ZERO))
            }
            ScalarRepr::P384(s) => {
                ScalarRepr::P384(Option::from(s.invert()).unwrap_or(p384::Scalar::ZERO))
            }
            ScalarRepr::P521(s) => {
                ScalarRepr::P521(Option::from(s.invert()).unwrap_or(p521::Scalar::ZERO))
            }
            ScalarRepr::Edwards25519(s) => ScalarRepr::Edwards25519(s.invert()),
            ScalarRepr::Secp256k1(s) => {
                ScalarRepr::Secp256k1(Option::from(s.invert()).unwrap_or(k256::Scalar::ZERO))
            }
        })
    }

    /// Returns whether the scalars are equal. A `None` comparand is
    /// unequal; a comparand from another group is an error, never a
    /// silent `false`.
    pub fn equal(&self, other: Option<&Scalar>) -> Result<bool> {
        let Some(other) = other else { return Ok(false) };

        match (&self.0, &other.0) {
            (ScalarRepr::Ristretto255(a), ScalarRepr::Ristretto255(b)) => Ok(a == b),
            (ScalarRepr::P256(a), ScalarRepr::P256(b)) => Ok(a == b),
            (ScalarRepr::P384(a), ScalarRepr::P384(b)) => Ok(a == b),
            (ScalarRepr::P521(a), ScalarRepr::P521(b)) => Ok(a == b),
            (ScalarRepr::Edwards25519(a), ScalarRepr::Edwards25519(b)) => Ok(a == b),
            (ScalarRepr::Secp256k1(a), ScalarRepr::Secp256k1(b)) => Ok(a == b),
            _ => Err(Error::CastScalar),
        }
    }

    /// Returns whether `self <= other`, comparing canonical unsigned
    /// magnitudes. A `None` comparand is `false`.
    pub fn less_or_equal(&self, other: Option<&Scalar>) -> Result<bool> {
        let Some(other) = other else { return Ok(false) };

        if self.group() != other.group() {
            return Err(Error::CastScalar);
        }

        Ok(self.be_bytes() <= other.be_bytes())
    }

    /// Returns whether the scalar is 0.
    pub fn is_zero(&self) -> bool {
        match &self.0 {
            ScalarRepr::Ristretto255(s) | ScalarRepr::Edwards25519(s) => *s == dalek::Scalar::ZERO,
            ScalarRepr::P256(s) => s.is_zero().into(),
            ScalarRepr::P384(s) => s.is_zero().into(),
            ScalarRepr::P521(s) => s.is_zero().into(),
            ScalarRepr::Secp256k1(s) => s.is_zero().into(),
        }
    }

    /// Sets the scalar to the value of `other`, and returns it. A `None`
    /// argument sets it to 0.
    pub fn set(self, other: Option<&Scalar>) -> Result<Self> {
        match other {
            None => Ok(self.zero()),
            Some(other) => {
                if self.group() != other.group() {
                    return Err(Error::CastScalar);
                }

                Ok(other.clone())
            }
        }
    }

    /// Sets the scalar to `value`. Always succeeds: every 64-bit value is
    /// below every supported group order.
    pub fn set_uint64(self, value: u64) -> Self {
        Self(match self.0 {
            ScalarRepr::Ristretto255(_) => ScalarRepr::Ristretto255(dalek::Scalar::from(value)),
            ScalarRepr::P256(_) => ScalarRepr::P256(p256::Scalar::from(value)),
            ScalarRepr::P384(_) => ScalarRepr::P384(p384::Scalar::from(value)),
            ScalarRepr::P521(_) => ScalarRepr::P521(p521::Scalar::from(value)),
            ScalarRepr::Edwards25519(_) => ScalarRepr::Edwards25519(dalek::Scalar::from(value)),
            ScalarRepr::Secp256k1(_) => ScalarRepr::Secp256k1(k256::Scalar::from(value)),
        })
    }

    /// Returns the scalar as a `u64`, or [`Error::UInt64Overflow`] if it
    /// does not fit in 64 bits.
    pub fn uint64(&self) -> Result<u64> {
        let bytes = self.be_bytes();
        let (high, low) = bytes.split_at(bytes.len() - 8);

        if high.iter().any(|&b| b != 0) {
            return Err(Error::UInt64Overflow);
        }

        let mut buf = [0u8; 8];
        buf.copy_from_slice(low);

        Ok(u64::from_be_bytes(buf))
    }

    /// Returns the fixed-length canonical byte encoding of the scalar.
    pub fn encode(&self) -> Vec<u8> {
        match &self.0 {
            ScalarRepr::Ristretto255(s) | ScalarRepr::Edwards25519(s) => s.to_bytes().to_vec(),
            ScalarRepr::P256(s) => s.to_repr().to_vec(),
            ScalarRepr::P384(s) => s.to_repr().to_vec(),
            ScalarRepr::P521(s) => s.to_repr().to_vec(),
            ScalarRepr::Secp256k1(s) => s.to_repr().to_vec(),
        }
    }

    /// Sets the scalar to the decoding of `data`, and returns it.
    ///
    /// Fails with [`Error::ScalarLength`] on a wrong byte count and
    /// [`Error::ScalarEncoding`] when the magnitude is not below the
    /// group order.
    pub fn decode(self, data: &[u8]) -> Result<Self> {
        Ok(Self(match self.0 {
            ScalarRepr::Ristretto255(_) => {
                ScalarRepr::Ristretto255(curve25519::decode_scalar(data)?)
            }
            ScalarRepr::P256(_) => ScalarRepr::P256(weierstrass::decode_scalar::<NistP256>(data)?),
            ScalarRepr::P384(_) => ScalarRepr::P384(weierstrass::decode_scalar::<NistP384>(data)?),
            ScalarRepr::P521(_) => ScalarRepr::P521(weierstrass::decode_scalar::<NistP521>(data)?),
            ScalarRepr::Edwards25519(_) => {
                ScalarRepr::Edwards25519(curve25519::decode_scalar(data)?)
            }
            ScalarRepr::Secp256k1(_) => {
                ScalarRepr::Secp256k1(weierstrass::decode_scalar::<Secp256k1>(data)?)
            }
        }))
    }

    /// Returns the lowercase hexadecimal encoding of the scalar.
    pub fn hex(&self) -> String {
        base16ct::lower::encode_string(&self.encode())
    }

    /// Sets the scalar to the decoding of the hex-encoded `hex`, and
    /// returns it.
    pub fn decode_hex(self, hex: &str) -> Result<Self> {
        let bytes = base16ct::mixed::decode_vec(hex).map_err(|_| Error::Hex)?;
        self.decode(&bytes)
    }

    /// Derives the scalar from `input` and a domain separation tag, via
    /// the group's XMD expansion reduced modulo the order. See
    /// [`Group::hash_to_scalar`](crate::Group::hash_to_scalar).
    pub(crate) fn hash(group: Group, input: &[u8], dst: &[u8]) -> Result<Self> {
        Ok(Self(match group {
            Group::Ristretto255Sha512 => {
                ScalarRepr::Ristretto255(curve25519::hash_to_scalar(input, dst)?)
            }
            Group::P256Sha256 => {
                ScalarRepr::P256(weierstrass::hash_to_scalar::<NistP256, Sha256>(input, dst)?)
            }
            Group::P384Sha384 => {
                ScalarRepr::P384(weierstrass::hash_to_scalar::<NistP384, Sha384>(input, dst)?)
            }
            Group::P521Sha512 => {
                ScalarRepr::P521(weierstrass::hash_to_scalar::<NistP521, Sha512>(input, dst)?)
            }
            Group::Edwards25519Sha512 => {
                ScalarRepr::Edwards25519(curve25519::hash_to_scalar(input, dst)?)
            }
            Group::Secp256k1Sha256 => {
                ScalarRepr::Secp256k1(weierstrass::hash_to_scalar::<Secp256k1, Sha256>(input, dst)?)
            }
            Group::Decaf448Shake256 => return Err(Error::InvalidGroup),
        }))
    }

    /// Canonical bytes normalized to big-endian magnitude, for the
    /// cross-backend comparisons. Never exposed.
    fn be_bytes(&self) -> Vec<u8> {
        let mut bytes = self.encode();

        if self.group().little_endian() {
            bytes.reverse();
        }

        bytes
    }
}

#[cfg(feature = "serde")]
impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.encode(), serializer)
    }
}

fn bit(be_bytes: &[u8], k: usize) -> bool {
    (be_bytes[be_bytes.len() - 1 - k / 8] >> (k % 8)) & 1 == 1
}

fn highest_set_bit(be_bytes: &[u8]) -> Option<usize> {
    for (i, byte) in be_bytes.iter().enumerate() {
        if *byte != 0 {
            let in_byte = 7 - byte.leading_zeros() as usize;
            return Some((be_bytes.len() - 1 - i) * 8 + in_byte);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_scan() {
        assert_eq!(highest_set_bit(&[0, 0]), None);
        assert_eq!(highest_set_bit(&[0, 1]), Some(0));
        assert_eq!(highest_set_bit(&[0, 0x80]), Some(7));
        assert_eq!(highest_set_bit(&[1, 0]), Some(8));
        assert_eq!(highest_set_bit(&[0x40, 0xff]), Some(14));

        let bytes = [0b0000_0010, 0b1000_0001];
        assert!(bit(&bytes, 0));
        assert!(!bit(&bytes, 1));
        assert!(bit(&bytes, 7));
        assert!(!bit(&bytes, 8));
        assert!(bit(&bytes, 9));
    }
}
