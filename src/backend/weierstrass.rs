//! Generic adapter over the `elliptic-curve` arithmetic and
//! hash-to-curve traits, shared by the P-256, P-384, P-521 and secp256k1
//! backends.
//!
//! Canonical element encodings are SEC1 compressed points, with one
//! extension: the identity, which SEC1 encodes as a single zero byte, is
//! carried as the all-zero string of the full compressed length so that
//! every encoding of a group stays fixed-size.

use digest::core_api::BlockSizeUser;
use digest::Digest;
use elliptic_curve::ff::{Field, PrimeField};
use elliptic_curve::generic_array::typenum::{IsLess, IsLessOrEqual, Unsigned, U256};
use elliptic_curve::generic_array::GenericArray;
use elliptic_curve::group::cofactor::CofactorGroup;
use elliptic_curve::group::{Curve as _, Group as _};
use elliptic_curve::hash2curve::{ExpandMsg, ExpandMsgXmd, FromOkm, GroupDigest};
use elliptic_curve::point::AffineCoordinates;
use elliptic_curve::sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize, ProjectivePoint};
use rand_core::CryptoRngCore;

use crate::hash2field::expand_message_xmd;
use crate::{Error, Result};

pub(crate) fn decode_scalar<C>(data: &[u8]) -> Result<C::Scalar>
where
    C: CurveArithmetic,
{
    if data.len() != FieldBytesSize::<C>::USIZE {
        return Err(Error::ScalarLength);
    }

    let repr = FieldBytes::<C>::clone_from_slice(data);
    Option::from(C::Scalar::from_repr(repr)).ok_or(Error::ScalarEncoding)
}

/// Samples a non-zero scalar by reducing an `L`-byte uniform string,
/// where `L` is the curve's RFC 9380 hash-to-field length — wider than
/// the field, so the result carries no usable bias.
pub(crate) fn random_scalar<C>(mut rng: impl CryptoRngCore) -> C::Scalar
where
    C: CurveArithmetic,
    C::Scalar: FromOkm,
{
    loop {
        let mut okm = GenericArray::<u8, <C::Scalar as FromOkm>::Length>::default();
        rng.fill_bytes(&mut okm);
        let scalar = C::Scalar::from_okm(&okm);

        if !bool::from(scalar.is_zero()) {
            return scalar;
        }
    }
}

pub(crate) fn hash_to_scalar<C, D>(input: &[u8], dst: &[u8]) -> Result<C::Scalar>
where
    C: CurveArithmetic,
    C::Scalar: FromOkm,
    D: Digest + BlockSizeUser,
{
    let mut okm = GenericArray::<u8, <C::Scalar as FromOkm>::Length>::default();
    expand_message_xmd::<D>(input, dst, &mut okm)?;

    Ok(C::Scalar::from_okm(&okm))
}

/// Random-oracle hash to the curve through the backend's `GroupDigest`
/// implementation (simplified SWU, plus the isogeny map on secp256k1).
pub(crate) fn hash_to_curve<C, D>(input: &[u8], dst: &[u8]) -> Result<ProjectivePoint<C>>
where
    C: GroupDigest,
    ProjectivePoint<C>: CofactorGroup,
    D: Digest + BlockSizeUser + Default + digest::FixedOutput + digest::HashMarker,
    <D as digest::OutputSizeUser>::OutputSize: IsLess<U256>,
    <D as digest::OutputSizeUser>::OutputSize: IsLessOrEqual<<D as BlockSizeUser>::BlockSize>,
    for<'a> ExpandMsgXmd<D>: ExpandMsg<'a>,
{
    if dst.is_empty() {
        return Err(Error::EmptyDst);
    }

    C::hash_from_bytes::<ExpandMsgXmd<D>>(&[input], &[dst]).map_err(|_| Error::HashToCurve)
}

pub(crate) fn decode_point<C>(data: &[u8]) -> Result<ProjectivePoint<C>>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C>,
{
    if data.len() != FieldBytesSize::<C>::USIZE + 1 {
        return Err(Error::ElementLength);
    }

    if data.iter().all(|&b| b == 0) {
        return Ok(ProjectivePoint::<C>::identity());
    }

    let encoded = EncodedPoint::<C>::from_bytes(data).map_err(|_| Error::ElementEncoding)?;

    Option::<AffinePoint<C>>::from(AffinePoint::<C>::from_encoded_point(&encoded))
        .map(ProjectivePoint::<C>::from)
        .ok_or(Error::ElementEncoding)
}

pub(crate) fn encode_point<C>(point: &ProjectivePoint<C>) -> Vec<u8>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: ToEncodedPoint<C>,
{
    if bool::from(point.is_identity()) {
        return vec![0u8; FieldBytesSize::<C>::USIZE + 1];
    }

    point.to_affine().to_encoded_point(true).as_bytes().to_vec()
}

/// Big-endian affine x coordinate; all zeroes for the identity.
pub(crate) fn x_coordinate<C>(point: &ProjectivePoint<C>) -> Vec<u8>
where
    C: CurveArithmetic,
{
    point.to_affine().x().to_vec()
}
