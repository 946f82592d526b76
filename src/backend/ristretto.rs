//! Ristretto255 element adapter over `curve25519-dalek`.
//!
//! Decoding is strict in the backend already: `CompressedRistretto`
//! rejects non-canonical field encodings and negative signs, so a
//! successful decode always re-encodes to the input bytes. The identity
//! encoding (all zeroes) is valid for this group.

use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use sha2::Sha512;

use super::curve25519::UNIFORM_INPUT_LENGTH;
use crate::hash2field::expand_message_xmd;
use crate::{Error, Result};

pub(crate) fn decode_point(data: &[u8]) -> Result<RistrettoPoint> {
    let bytes: [u8; 32] = data.try_into().map_err(|_| Error::ElementLength)?;

    CompressedRistretto(bytes)
        .decompress()
        .ok_or(Error::ElementEncoding)
}

/// `ristretto255_XMD:SHA-512_R255MAP_RO_`: a 64-byte uniform string fed
/// to the one-way ristretto map, applied twice and added.
pub(crate) fn hash_to_group(input: &[u8], dst: &[u8]) -> Result<RistrettoPoint> {
    let mut wide = [0u8; UNIFORM_INPUT_LENGTH];
    expand_message_xmd::<Sha512>(input, dst, &mut wide)?;

    Ok(RistrettoPoint::from_uniform_bytes(&wide))
}
