//! Element abstraction over the backend curve points.
//!
//! An [`Element`] is either the identity or a member of the prime-order
//! subgroup of one curve, tagged with its group. As with scalars,
//! arithmetic consumes the receiver and returns it, and binary
//! operations check the group tag first.
//!
//! Unlike scalar operands, element operands are never optional:
//! [`Element::add`] and [`Element::subtract`] take `&Element`, so a
//! missing operand is unrepresentable and callers must hold a real
//! value. The one optional operand is the scalar of
//! [`Element::multiply`], where `None` collapses the receiver to the
//! identity.

use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::{constants, traits::Identity};
use k256::Secp256k1;
use p256::NistP256;
use p384::NistP384;
use p521::NistP521;
use sha2::{Sha256, Sha384, Sha512};

use crate::backend::{edwards25519, ristretto, weierstrass};
use crate::scalar::ScalarRepr;
use crate::{Error, Group, Result, Scalar};

#[cfg(feature = "serde")]
use serdect::serde::{ser, Serialize};

/// A point on one group's curve: the identity, or a member of the
/// prime-order subgroup.
///
/// Values are created through [`Group::new_element`](crate::Group)
/// (identity) and [`Group::base`](crate::Group) (generator). Any value
/// obtained from [`Element::decode`] re-encodes to exactly the bytes it
/// was decoded from.
#[derive(Clone, Debug, PartialEq)]
pub struct Element(pub(crate) ElementRepr);

/// Closed union over the backend point types.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum ElementRepr {
    Ristretto255(RistrettoPoint),
    P256(p256::ProjectivePoint),
    P384(p384::ProjectivePoint),
    P521(p521::ProjectivePoint),
    Edwards25519(EdwardsPoint),
    Secp256k1(k256::ProjectivePoint),
}

impl ElementRepr {
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
            _ => return Err(Error::CastElement),
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
            _ => return Err(Error::CastElement),
        })
    }
}

impl Element {
    /// The identity element of `group`.
    pub(crate) fn new(group: Group) -> Self {
        Self(match group {
            Group::Ristretto255Sha512 => ElementRepr::Ristretto255(RistrettoPoint::identity()),
            Group::P256Sha256 => ElementRepr::P256(p256::ProjectivePoint::IDENTITY),
            Group::P384Sha384 => ElementRepr::P384(p384::ProjectivePoint::IDENTITY),
            Group::P521Sha512 => ElementRepr::P521(p521::ProjectivePoint::IDENTITY),
            Group::Edwards25519Sha512 => ElementRepr::Edwards25519(EdwardsPoint::identity()),
            Group::Secp256k1Sha256 => ElementRepr::Secp256k1(k256::ProjectivePoint::IDENTITY),
            Group::Decaf448Shake256 => panic!("{}", Error::InvalidGroup),
        })
    }

    /// The fixed generator of `group`.
    pub(crate) fn generator(group: Group) -> Self {
        Self(match group {
            Group::Ristretto255Sha512 => {
                ElementRepr::Ristretto255(constants::RISTRETTO_BASEPOINT_POINT)
            }
            Group::P256Sha256 => ElementRepr::P256(p256::ProjectivePoint::GENERATOR),
            Group::P384Sha384 => ElementRepr::P384(p384::ProjectivePoint::GENERATOR),
            Group::P521Sha512 => ElementRepr::P521(p521::ProjectivePoint::GENERATOR),
            Group::Edwards25519Sha512 => {
                ElementRepr::Edwards25519(constants::ED25519_BASEPOINT_POINT)
            }
            Group::Secp256k1Sha256 => ElementRepr::Secp256k1(k256::ProjectivePoint::GENERATOR),
            Group::Decaf448Shake256 => panic!("{}", Error::InvalidGroup),
        })
    }

    /// Returns the group this element belongs to.
    pub fn group(&self) -> Group {
        self.0.group()
    }

    /// Sets the element to the group's base point, a.k.a. canonical
    /// generator, and returns it.
    pub fn base(self) -> Self {
        Self::generator(self.group())
    }

    /// Sets the element to the identity (point at infinity), and returns
    /// it.
    pub fn identity(self) -> Self {
        Self::new(self.group())
    }

    /// Adds `rhs` to the element, and returns it.
    pub fn add(self, rhs: &Element) -> Result<Self> {
        Ok(Self(self.0.add(&rhs.0)?))
    }

    /// Subtracts `rhs` from the element, and returns it.
    pub fn subtract(self, rhs: &Element) -> Result<Self> {
        Ok(Self(self.0.sub(&rhs.0)?))
    }

    /// Sets the element to its double, and returns it.
    pub fn double(self) -> Self {
        Self(match self.0 {
            ElementRepr::Ristretto255(p) => ElementRepr::Ristretto255(p + p),
            ElementRepr::P256(p) => ElementRepr::P256(p + p),
            ElementRepr::P384(p) => ElementRepr::P384(p + p),
            ElementRepr::P521(p) => ElementRepr::P521(p + p),
            ElementRepr::Edwards25519(p) => ElementRepr::Edwards25519(p + p),
            ElementRepr::Secp256k1(p) => ElementRepr::Secp256k1(p + p),
        })
    }

    /// Sets the element to its negation, and returns it.
    pub fn negate(self) -> Self {
        Self(match self.0 {
            ElementRepr::Ristretto255(p) => ElementRepr::Ristretto255(-p),
            ElementRepr::P256(p) => ElementRepr::P256(-p),
            ElementRepr::P384(p) => ElementRepr::P384(-p),
            ElementRepr::P521(p) => ElementRepr::P521(-p),
            ElementRepr::Edwards25519(p) => ElementRepr::Edwards25519(-p),
            ElementRepr::Secp256k1(p) => ElementRepr::Secp256k1(-p),
        })
    }

    /// Sets the element to its multiplication by `scalar`, and returns
    /// it. A `None` scalar is treated as zero: the result is the
    /// identity.
    pub fn multiply(self, scalar: Option<&Scalar>) -> Result<Self> {
        let Some(scalar) = scalar else {
            return Ok(self.identity());
        };

        Ok(Self(match (self.0, &scalar.0) {
            (ElementRepr::Ristretto255(p), ScalarRepr::Ristretto255(s)) => {
                ElementRepr::Ristretto255(p * s)
            }
            (ElementRepr::P256(p), ScalarRepr::P256(s)) => ElementRepr::P256(p * s),
            (ElementRepr::P384(p), ScalarRepr::P384(s)) => ElementRepr::P384(p * s),
            (ElementRepr::P521(p), ScalarRepr::P521(s)) => ElementRepr::P521(p * s),
            (ElementRepr::Edwards25519(p), ScalarRepr::Edwards25519(s)) => {
                ElementRepr::Edwards25519(p * s)
            }
            (ElementRepr::Secp256k1(p), ScalarRepr::Secp256k1(s)) => ElementRepr::Secp256k1(p * s),
            _ => return Err(Error::CastScalar),
        }))
    }

    /// Returns whether the elements are equal. A `None` comparand is
    /// unequal; a comparand from another group is an error.
    pub fn equal(&self, other: Option<&Element>) -> Result<bool> {
        let Some(other) = other else { return Ok(false) };

        match (&self.0, &other.0) {
            (ElementRepr::Ristretto255(a), ElementRepr::Ristretto255(b)) => Ok(a == b),
            (ElementRepr::P256(a), ElementRepr::P256(b)) => Ok(a == b),
            (ElementRepr::P384(a), ElementRepr::P384(b)) => Ok(a == b),
            (ElementRepr::P521(a), ElementRepr::P521(b)) => Ok(a == b),
            (ElementRepr::Edwards25519(a), ElementRepr::Edwards25519(b)) => Ok(a == b),
            (ElementRepr::Secp256k1(a), ElementRepr::Secp256k1(b)) => Ok(a == b),
            _ => Err(Error::CastElement),
        }
    }

    /// Returns whether the element is the identity, a.k.a. the point at
    /// infinity.
    pub fn is_identity(&self) -> bool {
        match &self.0 {
            ElementRepr::Ristretto255(p) => *p == RistrettoPoint::identity(),
            ElementRepr::P256(p) => *p == p256::ProjectivePoint::IDENTITY,
            ElementRepr::P384(p) => *p == p384::ProjectivePoint::IDENTITY,
            ElementRepr::P521(p) => *p == p521::ProjectivePoint::IDENTITY,
            ElementRepr::Edwards25519(p) => *p == EdwardsPoint::identity(),
            ElementRepr::Secp256k1(p) => *p == k256::ProjectivePoint::IDENTITY,
        }
    }

    /// Returns the fixed-length canonical compressed encoding of the
    /// element.
    pub fn encode(&self) -> Vec<u8> {
        match &self.0 {
            ElementRepr::Ristretto255(p) => p.compress().to_bytes().to_vec(),
            ElementRepr::P256(p) => weierstrass::encode_point::<NistP256>(p),
            ElementRepr::P384(p) => weierstrass::encode_point::<NistP384>(p),
            ElementRepr::P521(p) => weierstrass::encode_point::<NistP521>(p),
            ElementRepr::Edwards25519(p) => p.compress().to_bytes().to_vec(),
            ElementRepr::Secp256k1(p) => weierstrass::encode_point::<Secp256k1>(p),
        }
    }

    /// Returns the encoding of the element's alternate coordinate: the
    /// big-endian affine x coordinate for the Weierstrass groups, and the
    /// Montgomery u coordinate for Edwards25519. Ristretto255 exposes no
    /// inner coordinate and returns the canonical encoding.
    ///
    /// There is no inverse for this output: decoding it is not guaranteed
    /// to reproduce the original element. It exists solely for
    /// cross-representation interoperability.
    pub fn x_coordinate(&self) -> Vec<u8> {
        match &self.0 {
            ElementRepr::Ristretto255(p) => p.compress().to_bytes().to_vec(),
            ElementRepr::P256(p) => weierstrass::x_coordinate::<NistP256>(p),
            ElementRepr::P384(p) => weierstrass::x_coordinate::<NistP384>(p),
            ElementRepr::P521(p) => weierstrass::x_coordinate::<NistP521>(p),
            ElementRepr::Edwards25519(p) => p.to_montgomery().to_bytes().to_vec(),
            ElementRepr::Secp256k1(p) => weierstrass::x_coordinate::<Secp256k1>(p),
        }
    }

    /// Sets the element to the decoding of `data`, and returns it.
    ///
    /// Fails with [`Error::ElementLength`] on a wrong byte count and
    /// [`Error::ElementEncoding`] for off-curve points, points outside
    /// the prime-order subgroup, and non-canonical encodings. On
    /// Edwards25519, which forbids it, decoding the identity encoding
    /// fails with [`Error::IdentityEncoding`]; the Weierstrass groups
    /// and Ristretto255 accept their identity encodings.
    pub fn decode(self, data: &[u8]) -> Result<Self> {
        Ok(Self(match self.0 {
            ElementRepr::Ristretto255(_) => {
                ElementRepr::Ristretto255(ristretto::decode_point(data)?)
            }
            ElementRepr::P256(_) => ElementRepr::P256(weierstrass::decode_point::<NistP256>(data)?),
            ElementRepr::P384(_) => ElementRepr::P384(weierstrass::decode_point::<NistP384>(data)?),
            ElementRepr::P521(_) => ElementRepr::P521(weierstrass::decode_point::<NistP521>(data)?),
            ElementRepr::Edwards25519(_) => {
                ElementRepr::Edwards25519(edwards25519::decode_point(data)?)
            }
            ElementRepr::Secp256k1(_) => {
                ElementRepr::Secp256k1(weierstrass::decode_point::<Secp256k1>(data)?)
            }
        }))
    }

    /// Returns the lowercase hexadecimal encoding of the element.
    pub fn hex(&self) -> String {
        base16ct::lower::encode_string(&self.encode())
    }

    /// Sets the element to the decoding of the hex-encoded `hex`, and
    /// returns it.
    pub fn decode_hex(self, hex: &str) -> Result<Self> {
        let bytes = base16ct::mixed::decode_vec(hex).map_err(|_| Error::Hex)?;
        self.decode(&bytes)
    }

    /// Derives an element from `input` and a domain separation tag via
    /// the group's random-oracle hash-to-curve suite. See
    /// [`Group::hash_to_group`](crate::Group::hash_to_group).
    pub(crate) fn hash(group: Group, input: &[u8], dst: &[u8]) -> Result<Self> {
        Ok(Self(match group {
            Group::Ristretto255Sha512 => {
                ElementRepr::Ristretto255(ristretto::hash_to_group(input, dst)?)
            }
            Group::P256Sha256 => {
                ElementRepr::P256(weierstrass::hash_to_curve::<NistP256, Sha256>(input, dst)?)
            }
            Group::P384Sha384 => {
                ElementRepr::P384(weierstrass::hash_to_curve::<NistP384, Sha384>(input, dst)?)
            }
            Group::P521Sha512 => {
                ElementRepr::P521(weierstrass::hash_to_curve::<NistP521, Sha512>(input, dst)?)
            }
            Group::Edwards25519Sha512 => {
                ElementRepr::Edwards25519(edwards25519::hash_to_group(input, dst)?)
            }
            Group::Secp256k1Sha256 => {
                ElementRepr::Secp256k1(weierstrass::hash_to_curve::<Secp256k1, Sha256>(input, dst)?)
            }
            Group::Decaf448Shake256 => return Err(Error::InvalidGroup),
        }))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Element {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.encode(), serializer)
    }
}
