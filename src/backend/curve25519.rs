//! Scalar field helpers shared by the Ristretto255 and Edwards25519
//! groups, which are both built on curve25519 and share the order
//! `l = 2^252 + 27742317777372353535851937790883648493`.

use curve25519_dalek::Scalar;
use rand_core::CryptoRngCore;
use sha2::Sha512;

use crate::hash2field::expand_message_xmd;
use crate::{Error, Result};

/// Width of the uniform byte string reduced into the scalar field, wide
/// enough to make the reduction bias negligible.
pub(crate) const UNIFORM_INPUT_LENGTH: usize = 64;

pub(crate) fn decode_scalar(data: &[u8]) -> Result<Scalar> {
    let bytes: [u8; 32] = data.try_into().map_err(|_| Error::ScalarLength)?;
    Option::from(Scalar::from_canonical_bytes(bytes)).ok_or(Error::ScalarEncoding)
}

pub(crate) fn random_scalar(mut rng: impl CryptoRngCore) -> Scalar {
    loop {
        let mut wide = [0u8; UNIFORM_INPUT_LENGTH];
        rng.fill_bytes(&mut wide);
        let scalar = Scalar::from_bytes_mod_order_wide(&wide);

        if scalar != Scalar::ZERO {
            return scalar;
        }
    }
}

pub(crate) fn hash_to_scalar(input: &[u8], dst: &[u8]) -> Result<Scalar> {
    let mut wide = [0u8; UNIFORM_INPUT_LENGTH];
    expand_message_xmd::<Sha512>(input, dst, &mut wide)?;

    Ok(Scalar::from_bytes_mod_order_wide(&wide))
}
