//! Arithmetic modulo 2^255 - 19 for the Elligator 2 map.
//!
//! `curve25519-dalek` does not export an RFC 9380 conformant map for
//! edwards25519, so the `edwards25519_XMD:SHA-512_ELL2_RO_` suite carries
//! its own map-to-curve. Field elements live in Montgomery form on
//! `crypto-bigint` constant-modulus residues; the map output is handed
//! back to dalek as a compressed point.

use crypto_bigint::modular::constant_mod::Residue;
use crypto_bigint::{impl_modulus, Encoding, U256};

impl_modulus!(
    P25519,
    U256,
    "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed"
);

type Fe = Residue<P25519, { U256::LIMBS }>;

/// J, the Montgomery `A` coefficient of curve25519.
const J: u64 = 486662;

/// sqrt(-1), the canonical even root.
const SQRT_M1: &str = "2b8324804fc1df0b2b4d00993dfbd7a72f431806ad2fe478c4ee1b274a0ea0b0";

/// 2^((p + 3) / 8).
const C2: &str = "2b8324804fc1df0b2b4d00993dfbd7a72f431806ad2fe478c4ee1b274a0ea0b1";

/// (p - 5) / 8.
const C4: &str = "0ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffd";

/// sqrt(-486664), the even root, per RFC 9380 section 6.8.2.
const C1_ED: &str = "0f26edf460a006bbd27b08dc03fc4f7ec5a1d3d14b7d1a82cc6e04aaff457e06";

fn fe_u64(x: u64) -> Fe {
    Fe::new(&U256::from_u64(x))
}

fn fe_hex(hex: &str) -> Fe {
    Fe::new(&U256::from_be_hex(hex))
}

fn fe_eq(a: &Fe, b: &Fe) -> bool {
    a.retrieve() == b.retrieve()
}

fn fe_is_odd(a: &Fe) -> bool {
    a.retrieve().to_le_bytes()[0] & 1 == 1
}

/// Maps a 48-byte uniform block to the curve: big-endian reduction into
/// the field (RFC 9380 section 5.2) followed by the Elligator 2 map.
/// Returns the affine result in compressed Edwards form.
pub(crate) fn map_to_edwards_okm(okm: &[u8; 48]) -> [u8; 32] {
    map_to_edwards(&fe_from_okm(okm))
}

/// Reduces a big-endian okm block to a field element. The block is wider
/// than the field, so the output is statistically close to uniform.
fn fe_from_okm(okm: &[u8; 48]) -> Fe {
    let base = fe_u64(256);
    let mut acc = Fe::ZERO;

    for b in okm {
        acc = acc * base + fe_u64(u64::from(*b));
    }

    acc
}

/// Optimized Elligator 2 for curve25519 (q = 5 mod 8, Z = 2).
///
/// See <https://www.rfc-editor.org/rfc/rfc9380.html#name-curve25519-q-5-mod-8-k-1>.
/// Returns (xn, xd, y) such that (xn / xd, y) is on curve25519; yd = 1.
fn map_to_curve_elligator2_curve25519(u: &Fe) -> (Fe, Fe, Fe) {
    let j = fe_u64(J);
    let c2 = fe_hex(C2);
    let c3 = fe_hex(SQRT_M1);
    let c4 = U256::from_be_hex(C4);

    // 1.  tv1 = u^2
    let mut tv1 = u.square();
    // 2.  tv1 = 2 * tv1
    tv1 = tv1 + tv1;
    // 3.   xd = tv1 + 1             # Nonzero: -1 is square (mod p), tv1 is not
    let xd = tv1 + Fe::ONE;
    // 4.  x1n = -J                  # x1 = x1n / xd = -J / (1 + 2 * u^2)
    let x1n = -j;
    // 5.  tv2 = xd^2
    let mut tv2 = xd.square();
    // 6.  gxd = tv2 * xd            # gxd = xd^3
    let gxd = tv2 * xd;
    // 7.  gx1 = J * tv1             # x1n + J * xd
    let mut gx1 = j * tv1;
    // 8.  gx1 = gx1 * x1n           # x1n^2 + J * x1n * xd
    gx1 = gx1 * x1n;
    // 9.  gx1 = gx1 + tv2           # x1n^2 + J * x1n * xd + xd^2
    gx1 = gx1 + tv2;
    // 10. gx1 = gx1 * x1n           # x1n^3 + J * x1n^2 * xd + x1n * xd^2
    gx1 = gx1 * x1n;
    // 11. tv3 = gxd^2
    let mut tv3 = gxd.square();
    // 12. tv2 = tv3^2               # gxd^4
    tv2 = tv3.square();
    // 13. tv3 = tv3 * gxd           # gxd^3
    tv3 = tv3 * gxd;
    // 14. tv3 = tv3 * gx1           # gx1 * gxd^3
    tv3 = tv3 * gx1;
    // 15. tv2 = tv2 * tv3           # gx1 * gxd^7
    tv2 = tv2 * tv3;
    // 16. y11 = tv2^c4              # (gx1 * gxd^7)^((p - 5) / 8)
    let mut y11 = tv2.pow(&c4);
    // 17. y11 = y11 * tv3           # gx1 * gxd^3 * (gx1 * gxd^7)^((p - 5) / 8)
    y11 = y11 * tv3;
    // 18. y12 = y11 * c3
    let y12 = y11 * c3;
    // 19. tv2 = y11^2
    tv2 = y11.square();
    // 20. tv2 = tv2 * gxd
    tv2 = tv2 * gxd;
    // 21.  e1 = tv2 == gx1
    let e1 = fe_eq(&tv2, &gx1);
    // 22.  y1 = CMOV(y12, y11, e1)  # If e1, y1 = y11, else y1 = y12
    let y1 = if e1 { y11 } else { y12 };
    // 23. x2n = x1n * tv1           # x2 = x2n / xd = 2 * u^2 * x1n / xd
    let x2n = x1n * tv1;
    // 24. y21 = y11 * u
    let mut y21 = y11 * *u;
    // 25. y21 = y21 * c2
    y21 = y21 * c2;
    // 26. y22 = y21 * c3
    let y22 = y21 * c3;
    // 27. gx2 = gx1 * tv1           # gx2 = 2 * u^2 * gx1
    let gx2 = gx1 * tv1;
    // 28. tv2 = y21^2
    tv2 = y21.square();
    // 29. tv2 = tv2 * gxd
    tv2 = tv2 * gxd;
    // 30.  e2 = tv2 == gx2
    let e2 = fe_eq(&tv2, &gx2);
    // 31.  y2 = CMOV(y22, y21, e2)  # If e2, y2 = y21, else y2 = y22
    let y2 = if e2 { y21 } else { y22 };
    // 32. tv2 = y1^2
    tv2 = y1.square();
    // 33. tv2 = tv2 * gxd
    tv2 = tv2 * gxd;
    // 34.  e3 = tv2 == gx1
    let e3 = fe_eq(&tv2, &gx1);
    // 35.  xn = CMOV(x2n, x1n, e3)  # If e3, x = x1, else x = x2
    let xn = if e3 { x1n } else { x2n };
    // 36.   y = CMOV(y2, y1, e3)    # If e3, y = y1, else y = y2
    let mut y = if e3 { y1 } else { y2 };
    // 37.  e4 = sgn0(y) == 1
    let e4 = fe_is_odd(&y);
    // 38.   y = CMOV(y, -y, e3 XOR e4)
    if e3 ^ e4 {
        y = -y;
    }
    // 39. return (xn, xd, y, 1)

    (xn, xd, y)
}

/// Elligator 2 for edwards25519: curve25519 map plus the rational map of
/// RFC 9380 section 6.8.2. Returns the affine result in compressed
/// Edwards form (y with the sign bit of x).
fn map_to_edwards(u: &Fe) -> [u8; 32] {
    // 1. (xMn, xMd, yMn, yMd) = map_to_curve_elligator2_curve25519(u)
    let (x_mn, x_md, y_mn) = map_to_curve_elligator2_curve25519(u);
    let c1 = fe_hex(C1_ED);
    // 2. xn = xMn * yMd; 3. xn = xn * c1
    let xn = x_mn * c1;
    // 4. xd = xMd * yMn
    let xd = x_md * y_mn;
    // 5. yn = xMn - xMd
    let yn = x_mn - x_md;
    // 6. yd = xMn + xMd
    let yd = x_mn + x_md;
    // 7. tv = xd * yd; 8. e = tv == 0
    // 9-12. exceptional case maps to the neutral element (0, 1)
    if fe_eq(&(xd * yd), &Fe::ZERO) {
        return compress(&Fe::ZERO, &Fe::ONE);
    }

    let (xd_inv, _) = xd.invert();
    let (yd_inv, _) = yd.invert();

    compress(&(xn * xd_inv), &(yn * yd_inv))
}

fn compress(x: &Fe, y: &Fe) -> [u8; 32] {
    let mut bytes = y.retrieve().to_le_bytes();
    if fe_is_odd(x) {
        bytes[31] |= 0x80;
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn map(u: u64) -> [u8; 32] {
        map_to_edwards(&fe_u64(u))
    }

    #[test]
    fn zero_maps_to_neutral() {
        assert_eq!(
            map(0),
            hex!("0100000000000000000000000000000000000000000000000000000000000000")
        );
    }

    #[test]
    fn fixed_inputs() {
        assert_eq!(
            map(1),
            hex!("5278d545cf9c859bb5ce01dc6c8b8d4e3a02271ca6d529c835e05a64981fcb8c")
        );
        assert_eq!(
            map(5),
            hex!("99746a762349b0a9740303fc74ed4c1816d0daf3cafa5e537088d2c5dd85165f")
        );
        assert_eq!(
            map(0xdead_beef),
            hex!("db33d0168fdce7f488416aac67af9a9f1f5e1d27c91c3083dfad88ed17667932")
        );
    }

    #[test]
    fn okm_reduction_matches_big_endian_interpretation() {
        let mut okm = [0u8; 48];
        okm[47] = 7;
        assert!(fe_eq(&fe_from_okm(&okm), &fe_u64(7)));

        okm = [0u8; 48];
        okm[46] = 1;
        assert!(fe_eq(&fe_from_okm(&okm), &fe_u64(256)));
    }
}
