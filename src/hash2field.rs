//! `expand_message_xmd` from [RFC 9380 § 5.3.1].
//!
//! The Weierstrass backends run their own expansion inside
//! `elliptic-curve`'s `hash2curve` module; this implementation feeds every
//! other consumer: the dalek-backed groups and all hash-to-scalar paths.
//!
//! [RFC 9380 § 5.3.1]: https://www.rfc-editor.org/rfc/rfc9380.html#name-expand_message_xmd

use digest::core_api::BlockSizeUser;
use digest::{Digest, Output};

use crate::{Error, Result};

/// Salt prefix hashed into an oversized domain separation tag.
const OVERSIZE_DST_SALT: &[u8] = b"H2C-OVERSIZE-DST-";

/// Maximum domain separation tag length.
const MAX_DST_LEN: usize = 255;

/// Expands `msg` into `out.len()` uniform bytes under the domain
/// separation tag `dst`, using the XMD construction over the hash `D`.
///
/// # Errors
///
/// - [`Error::EmptyDst`] if `dst` is zero-length.
/// - [`Error::HashToCurve`] if the requested output length cannot be
///   produced by XMD (`out` empty, longer than 65535 bytes, or needing
///   more than 255 hash blocks).
pub fn expand_message_xmd<D>(msg: &[u8], dst: &[u8], out: &mut [u8]) -> Result<()>
where
    D: Digest + BlockSizeUser,
{
    if dst.is_empty() {
        return Err(Error::EmptyDst);
    }

    let len_in_bytes = out.len();
    let b_in_bytes = <D as Digest>::output_size();
    let ell = (len_in_bytes + b_in_bytes - 1) / b_in_bytes;

    if len_in_bytes == 0 || len_in_bytes > u16::MAX as usize || ell > 255 {
        return Err(Error::HashToCurve);
    }

    // RFC 9380 § 5.3.3: a tag longer than 255 bytes enters through a digest.
    let hashed_dst;
    let dst: &[u8] = if dst.len() > MAX_DST_LEN {
        hashed_dst = D::new()
            .chain_update(OVERSIZE_DST_SALT)
            .chain_update(dst)
            .finalize();
        &hashed_dst
    } else {
        dst
    };
    let dst_len = [dst.len() as u8];

    let z_pad = vec![0u8; D::block_size()];
    let l_i_b_str = (len_in_bytes as u16).to_be_bytes();

    let b_0 = D::new()
        .chain_update(&z_pad)
        .chain_update(msg)
        .chain_update(l_i_b_str)
        .chain_update([0u8])
        .chain_update(dst)
        .chain_update(dst_len)
        .finalize();

    let mut b_i = D::new()
        .chain_update(&b_0)
        .chain_update([1u8])
        .chain_update(dst)
        .chain_update(dst_len)
        .finalize();

    let mut offset = 0;
    let mut i = 1u8;

    loop {
        let n = (len_in_bytes - offset).min(b_in_bytes);
        out[offset..offset + n].copy_from_slice(&b_i[..n]);
        offset += n;

        if offset == len_in_bytes {
            return Ok(());
        }

        i += 1;
        let mut xored = Output::<D>::default();
        for (x, (b0, bi)) in xored.iter_mut().zip(b_0.iter().zip(b_i.iter())) {
            *x = b0 ^ bi;
        }
        b_i = D::new()
            .chain_update(&xored)
            .chain_update([i])
            .chain_update(dst)
            .chain_update(dst_len)
            .finalize();
    }
}
