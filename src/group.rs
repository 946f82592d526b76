//! Group identifiers and dispatch.
//!
//! A [`Group`] names one prime-order group and resolves every operation
//! to its backend. The identifier table is closed and never changes at
//! runtime: all per-group parameters are constants, safe for
//! unsynchronized concurrent reads.

use hex_literal::hex;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::{Element, Error, Result, Scalar};

/// Order of the two curve25519-based groups,
/// `l = 2^252 + 27742317777372353535851937790883648493`, in the
/// little-endian canonical byte order of those groups.
const CURVE25519_ORDER_LE: [u8; 32] =
    hex!("edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010");

/// NIST P-256 group order, big-endian.
const P256_ORDER: [u8; 32] =
    hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

/// NIST P-384 group order, big-endian.
const P384_ORDER: [u8; 48] = hex!(
    "ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf"
    "581a0db248b0a77aecec196accc52973"
);

/// NIST P-521 group order, big-endian.
const P521_ORDER: [u8; 66] = hex!(
    "01fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa"
    "51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409"
);

/// secp256k1 group order, big-endian.
const SECP256K1_ORDER: [u8; 32] =
    hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// A prime-order group identifier.
///
/// The discriminant is the stable wire identifier: protocol code can
/// store the byte and recover the group with [`Group::try_from`].
/// Identifier 2 is reserved for decaf448, which is not implemented: it
/// reports [`Group::available`] as `false` and rejects every operation.
/// Identifiers outside the table are permanently unavailable and fail
/// [`Group::try_from`] with [`Error::InvalidGroup`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Group {
    /// Ristretto255 with SHA-512.
    Ristretto255Sha512 = 1,
    /// Decaf448 with SHAKE-256. Reserved; not implemented.
    Decaf448Shake256 = 2,
    /// NIST P-256 with SHA-256.
    P256Sha256 = 3,
    /// NIST P-384 with SHA-384.
    P384Sha384 = 4,
    /// NIST P-521 with SHA-512.
    P521Sha512 = 5,
    /// Edwards25519 with SHA-512.
    Edwards25519Sha512 = 6,
    /// secp256k1 with SHA-256.
    Secp256k1Sha256 = 7,
}

/// The hash function associated with a group's ciphersuite.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HashFn {
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
}

impl HashFn {
    /// Digest size in bytes.
    pub fn output_size(&self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// One-shot digest of `data`.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha384 => Sha384::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
        }
    }
}

impl Group {
    /// Returns whether the group is implemented and usable.
    pub fn available(&self) -> bool {
        !matches!(self, Self::Decaf448Shake256)
    }

    /// Returns the group's RFC 9380 ciphersuite name, or
    /// [`Error::InvalidGroup`] if the group is unavailable.
    pub fn ciphersuite(&self) -> Result<&'static str> {
        match self {
            Self::Ristretto255Sha512 => Ok("ristretto255_XMD:SHA-512_R255MAP_RO_"),
            Self::Decaf448Shake256 => Err(Error::InvalidGroup),
            Self::P256Sha256 => Ok("P256_XMD:SHA-256_SSWU_RO_"),
            Self::P384Sha384 => Ok("P384_XMD:SHA-384_SSWU_RO_"),
            Self::P521Sha512 => Ok("P521_XMD:SHA-512_SSWU_RO_"),
            Self::Edwards25519Sha512 => Ok("edwards25519_XMD:SHA-512_ELL2_RO_"),
            Self::Secp256k1Sha256 => Ok("secp256k1_XMD:SHA-256_SSWU_RO_"),
        }
    }

    /// Returns a new scalar set to 0.
    ///
    /// # Panics
    ///
    /// If the group is unavailable; that is a programmer error, not a
    /// runtime condition.
    pub fn new_scalar(&self) -> Scalar {
        Scalar::new(*self)
    }

    /// Returns a new element set to the identity (point at infinity).
    ///
    /// # Panics
    ///
    /// If the group is unavailable.
    pub fn new_element(&self) -> Element {
        Element::new(*self)
    }

    /// Returns the group's base point, a.k.a. canonical generator.
    ///
    /// # Panics
    ///
    /// If the group is unavailable.
    pub fn base(&self) -> Element {
        Element::generator(*self)
    }

    /// Returns the hash function of the group's ciphersuite.
    ///
    /// # Panics
    ///
    /// If the group is unavailable.
    pub fn hash_func(&self) -> HashFn {
        match self {
            Self::Ristretto255Sha512 => HashFn::Sha512,
            Self::Decaf448Shake256 => panic!("{}", Error::InvalidGroup),
            Self::P256Sha256 => HashFn::Sha256,
            Self::P384Sha384 => HashFn::Sha384,
            Self::P521Sha512 => HashFn::Sha512,
            Self::Edwards25519Sha512 => HashFn::Sha512,
            Self::Secp256k1Sha256 => HashFn::Sha256,
        }
    }

    /// Byte length of a canonical scalar encoding.
    ///
    /// # Panics
    ///
    /// If the group is unavailable.
    pub fn scalar_length(&self) -> usize {
        match self {
            Self::Ristretto255Sha512 => 32,
            Self::Decaf448Shake256 => panic!("{}", Error::InvalidGroup),
            Self::P256Sha256 => 32,
            Self::P384Sha384 => 48,
            Self::P521Sha512 => 66,
            Self::Edwards25519Sha512 => 32,
            Self::Secp256k1Sha256 => 32,
        }
    }

    /// Byte length of a canonical element encoding.
    ///
    /// # Panics
    ///
    /// If the group is unavailable.
    pub fn element_length(&self) -> usize {
        match self {
            Self::Ristretto255Sha512 => 32,
            Self::Decaf448Shake256 => panic!("{}", Error::InvalidGroup),
            Self::P256Sha256 => 33,
            Self::P384Sha384 => 49,
            Self::P521Sha512 => 67,
            Self::Edwards25519Sha512 => 32,
            Self::Secp256k1Sha256 => 33,
        }
    }

    /// Returns a fresh copy of the group order bytes, in the group's
    /// canonical byte order.
    ///
    /// # Panics
    ///
    /// If the group is unavailable.
    pub fn order(&self) -> Vec<u8> {
        match self {
            Self::Ristretto255Sha512 | Self::Edwards25519Sha512 => CURVE25519_ORDER_LE.to_vec(),
            Self::Decaf448Shake256 => panic!("{}", Error::InvalidGroup),
            Self::P256Sha256 => P256_ORDER.to_vec(),
            Self::P384Sha384 => P384_ORDER.to_vec(),
            Self::P521Sha512 => P521_ORDER.to_vec(),
            Self::Secp256k1Sha256 => SECP256K1_ORDER.to_vec(),
        }
    }

    /// Assembles the domain separation tag
    /// `<app>-V<version>-CS<id>-<ciphersuite>`, with the version and the
    /// group's ciphersuite index both zero-padded to two digits.
    ///
    /// Fails with [`Error::InvalidGroup`] if the group is unavailable.
    pub fn make_dst(&self, app: &str, version: u8) -> Result<Vec<u8>> {
        let suite = self.ciphersuite()?;
        let id = u8::from(*self);

        Ok(format!("{app}-V{version:02}-CS{id:02}-{suite}").into_bytes())
    }

    /// Maps `input` to a uniformly distributed scalar: the input is
    /// expanded with `expand_message_xmd` under `dst` to a byte string
    /// wider than the scalar field, then reduced modulo the order.
    ///
    /// Fails with [`Error::EmptyDst`] if `dst` is empty and
    /// [`Error::InvalidGroup`] if the group is unavailable.
    pub fn hash_to_scalar(&self, input: &[u8], dst: &[u8]) -> Result<Scalar> {
        Scalar::hash(*self, input, dst)
    }

    /// Maps `input` to a group element, statistically indistinguishable
    /// from a uniformly random one (the "random oracle" hash-to-curve
    /// variant of the group's ciphersuite).
    ///
    /// Fails with [`Error::EmptyDst`] if `dst` is empty and
    /// [`Error::InvalidGroup`] if the group is unavailable.
    pub fn hash_to_group(&self, input: &[u8], dst: &[u8]) -> Result<Element> {
        Element::hash(*self, input, dst)
    }

    /// Maps `input` to a group element.
    ///
    /// This is an alias of [`Group::hash_to_group`]: the output keeps
    /// the uniform distribution of the random-oracle variant, not the
    /// non-uniform distribution of RFC 9380's `encode_to_curve`.
    pub fn encode_to_group(&self, input: &[u8], dst: &[u8]) -> Result<Element> {
        self.hash_to_group(input, dst)
    }

    /// Whether canonical encodings of this group are little-endian.
    /// Internal: cross-backend magnitude comparisons normalize to
    /// big-endian and never expose the normalized form.
    pub(crate) fn little_endian(&self) -> bool {
        matches!(self, Self::Ristretto255Sha512 | Self::Edwards25519Sha512)
    }
}

impl TryFrom<u8> for Group {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            1 => Ok(Self::Ristretto255Sha512),
            2 => Ok(Self::Decaf448Shake256),
            3 => Ok(Self::P256Sha256),
            4 => Ok(Self::P384Sha384),
            5 => Ok(Self::P521Sha512),
            6 => Ok(Self::Edwards25519Sha512),
            7 => Ok(Self::Secp256k1Sha256),
            _ => Err(Error::InvalidGroup),
        }
    }
}

impl From<Group> for u8 {
    fn from(group: Group) -> u8 {
        group as u8
    }
}
