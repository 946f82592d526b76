//! Element arithmetic and codec tests.

use hex_literal::hex;
use primegroup::{Element, Error, Group};

fn all_groups() -> [Group; 6] {
    [
        Group::Ristretto255Sha512,
        Group::P256Sha256,
        Group::P384Sha384,
        Group::P521Sha512,
        Group::Edwards25519Sha512,
        Group::Secp256k1Sha256,
    ]
}

fn assert_equal(a: &Element, b: &Element) {
    assert!(a.equal(Some(b)).unwrap());
}

#[test]
fn group_laws() {
    for group in all_groups() {
        let base = group.base();
        let identity = group.new_element();

        // G + G - G == G
        assert_equal(
            &group.base().add(&base).unwrap().subtract(&base).unwrap(),
            &base,
        );

        // 2G == G + G
        assert_equal(&group.base().double(), &group.base().add(&base).unwrap());

        // G + 0 == G
        assert_equal(&group.base().add(&identity).unwrap(), &base);

        // G - G == 0
        assert!(group.base().subtract(&base).unwrap().is_identity());

        // G + (-G) == 0
        assert!(group.base().negate().add(&base).unwrap().is_identity());

        // 0 is its own double and negation.
        assert!(group.new_element().double().is_identity());
        assert!(group.new_element().negate().is_identity());
    }
}

#[test]
fn scalar_multiplication() {
    for group in all_groups() {
        let base = group.base();
        let two = group.new_scalar().set_uint64(2);

        assert_equal(&group.base().multiply(Some(&two)).unwrap(), &group.base().double());

        let one = group.new_scalar().one();
        assert_equal(&group.base().multiply(Some(&one)).unwrap(), &base);

        let zero = group.new_scalar();
        assert!(group.base().multiply(Some(&zero)).unwrap().is_identity());

        // A missing scalar absorbs to the identity.
        assert!(group.base().multiply(None).unwrap().is_identity());

        // Multiplying by the order (encoded as order-1 plus 1) wraps to 0:
        // (order - 1) * G + G == 0.
        let minus_one = group.new_scalar().minus_one();
        let near_full = group.base().multiply(Some(&minus_one)).unwrap();
        assert!(near_full.add(&base).unwrap().is_identity());
    }
}

#[test]
fn inverse_multiply_round_trip() {
    for group in all_groups() {
        let s = group.new_scalar().random();
        let e = group
            .base()
            .multiply(Some(&group.new_scalar().random()))
            .unwrap();

        let multiplied = e.clone().multiply(Some(&s)).unwrap();
        let recovered = multiplied.multiply(Some(&s.invert())).unwrap();
        assert_equal(&recovered, &e);
    }
}

#[test]
fn distributivity_over_scalar_addition() {
    for group in all_groups() {
        let a = group.new_scalar().random();
        let b = group.new_scalar().random();
        let sum = a.clone().add(Some(&b)).unwrap();

        let left = group
            .base()
            .multiply(Some(&a))
            .unwrap()
            .add(&group.base().multiply(Some(&b)).unwrap())
            .unwrap();
        assert_equal(&left, &group.base().multiply(Some(&sum)).unwrap());
    }
}

#[test]
fn encode_round_trip() {
    for group in all_groups() {
        let e = group
            .base()
            .multiply(Some(&group.new_scalar().random()))
            .unwrap();

        let encoded = e.encode();
        assert_eq!(encoded.len(), group.element_length());

        let decoded = group.new_element().decode(&encoded).unwrap();
        assert_equal(&decoded, &e);
        assert_eq!(decoded.encode(), encoded);

        let via_hex = group.new_element().decode_hex(&e.hex()).unwrap();
        assert_equal(&via_hex, &e);
    }
}

#[test]
fn identity_decoding_policy() {
    // Groups that permit the identity encoding round-trip it.
    for group in [
        Group::Ristretto255Sha512,
        Group::P256Sha256,
        Group::P384Sha384,
        Group::P521Sha512,
        Group::Secp256k1Sha256,
    ] {
        let encoded = group.new_element().encode();
        let decoded = group.new_element().decode(&encoded).unwrap();
        assert!(decoded.is_identity(), "{group:?}");
    }

    // Edwards25519 rejects its identity encoding with a dedicated error.
    let encoded = Group::Edwards25519Sha512.new_element().encode();
    assert_eq!(
        Group::Edwards25519Sha512.new_element().decode(&encoded),
        Err(Error::IdentityEncoding)
    );
}

#[test]
fn decode_rejects_wrong_lengths() {
    for group in all_groups() {
        let length = group.element_length();

        for bad in [0, 1, length - 1, length + 1] {
            assert_eq!(
                group.new_element().decode(&vec![2u8; bad]),
                Err(Error::ElementLength),
                "{group:?} length {bad}"
            );
        }
    }
}

#[test]
fn decode_rejects_garbage() {
    for group in all_groups() {
        let junk = vec![0xffu8; group.element_length()];
        assert!(group.new_element().decode(&junk).is_err(), "{group:?}");
    }

    // x = 1 has no square y on P-256: off-curve under a valid SEC1 tag.
    let off_curve = hex!("020000000000000000000000000000000000000000000000000000000000000001");
    assert_eq!(
        Group::P256Sha256.new_element().decode(&off_curve),
        Err(Error::ElementEncoding)
    );
}

#[test]
fn edwards25519_decode_rejects_non_canonical() {
    // y = p encodes the same point as y = 0, but only the reduced form
    // is canonical.
    let non_canonical = hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
    assert_eq!(
        Group::Edwards25519Sha512.new_element().decode(&non_canonical),
        Err(Error::ElementEncoding)
    );
}

#[test]
fn edwards25519_decode_rejects_small_order_points() {
    // A small-order point: valid on the curve, outside the prime-order
    // subgroup.
    let small_order = hex!("c7176a703d4dd84fba3c0b760d10670f2a2053fa2c39ccc64ec7fd7792ac037a");
    assert_eq!(
        Group::Edwards25519Sha512.new_element().decode(&small_order),
        Err(Error::ElementEncoding)
    );
}

#[test]
fn x_coordinates() {
    // Montgomery u of the Edwards25519 base point is 9.
    assert_eq!(
        Group::Edwards25519Sha512.base().x_coordinate(),
        hex!("0900000000000000000000000000000000000000000000000000000000000000")
    );

    // Affine x of the P-256 generator, big-endian.
    assert_eq!(
        Group::P256Sha256.base().x_coordinate(),
        hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296")
    );

    assert_eq!(
        Group::Secp256k1Sha256.base().x_coordinate(),
        hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
    );

    // Ristretto255 exposes no inner coordinate: the canonical encoding
    // stands in.
    assert_eq!(
        Group::Ristretto255Sha512.base().x_coordinate(),
        Group::Ristretto255Sha512.base().encode()
    );

    // Weierstrass identity has an all-zero x.
    let x = Group::P384Sha384.new_element().x_coordinate();
    assert!(x.iter().all(|&b| b == 0));
}

#[test]
fn cross_group_operands_are_rejected() {
    for group in all_groups() {
        for other in all_groups() {
            if group == other {
                continue;
            }

            let e = group.base();
            let foreign = other.base();
            let foreign_scalar = other.new_scalar().one();

            assert_eq!(group.base().add(&foreign), Err(Error::CastElement));
            assert_eq!(group.base().subtract(&foreign), Err(Error::CastElement));
            assert_eq!(
                group.base().multiply(Some(&foreign_scalar)),
                Err(Error::CastScalar)
            );
            assert_eq!(e.equal(Some(&foreign)), Err(Error::CastElement));
        }
    }
}

#[test]
fn equality() {
    for group in all_groups() {
        let base = group.base();

        assert!(base.equal(Some(&group.base())).unwrap());
        assert!(!base.equal(Some(&group.new_element())).unwrap());
        assert!(!base.equal(None).unwrap());
        assert!(group
            .new_element()
            .equal(Some(&group.new_element()))
            .unwrap());
    }
}

#[test]
fn group_tag_is_preserved() {
    for group in all_groups() {
        assert_eq!(group.base().group(), group);
        assert_eq!(group.new_element().double().group(), group);
        assert_eq!(
            group
                .base()
                .multiply(Some(&group.new_scalar().random()))
                .unwrap()
                .group(),
            group
        );
    }
}
