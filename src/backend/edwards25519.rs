//! Edwards25519 element adapter over `curve25519-dalek`.

mod field;

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::traits::Identity;
use sha2::Sha512;

use crate::hash2field::expand_message_xmd;
use crate::{Error, Result};

/// RFC 9380 `L` parameter for the curve25519 field at the 128-bit
/// security level.
const FIELD_OKM_LENGTH: usize = 48;

/// Decodes a canonical, non-identity member of the prime-order subgroup.
///
/// dalek's decompression accepts unreduced `y` coordinates, so the result
/// is re-compressed and compared against the input to enforce the
/// round-trip invariant. The identity is rejected with a dedicated error,
/// and points carrying a torsion component are rejected outright.
pub(crate) fn decode_point(data: &[u8]) -> Result<EdwardsPoint> {
    let bytes: [u8; 32] = data.try_into().map_err(|_| Error::ElementLength)?;
    let point = CompressedEdwardsY(bytes)
        .decompress()
        .ok_or(Error::ElementEncoding)?;

    if point.compress().to_bytes() != bytes {
        return Err(Error::ElementEncoding);
    }

    if point == EdwardsPoint::identity() {
        return Err(Error::IdentityEncoding);
    }

    if !point.is_torsion_free() {
        return Err(Error::ElementEncoding);
    }

    Ok(point)
}

/// `edwards25519_XMD:SHA-512_ELL2_RO_`: two field elements through the
/// Elligator 2 map, added, with the cofactor cleared.
pub(crate) fn hash_to_group(input: &[u8], dst: &[u8]) -> Result<EdwardsPoint> {
    let mut uniform = [0u8; 2 * FIELD_OKM_LENGTH];
    expand_message_xmd::<Sha512>(input, dst, &mut uniform)?;

    let q0 = map_to_curve(&uniform[..FIELD_OKM_LENGTH])?;
    let q1 = map_to_curve(&uniform[FIELD_OKM_LENGTH..])?;

    Ok((q0 + q1).mul_by_cofactor())
}

fn map_to_curve(okm: &[u8]) -> Result<EdwardsPoint> {
    let okm: [u8; FIELD_OKM_LENGTH] = okm.try_into().map_err(|_| Error::HashToCurve)?;

    CompressedEdwardsY(field::map_to_edwards_okm(&okm))
        .decompress()
        .ok_or(Error::HashToCurve)
}
