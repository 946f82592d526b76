//! Hash-to-scalar and hash-to-group tests, including RFC 9380
//! conformance vectors for the edwards25519 suite.

use hex_literal::hex;
use primegroup::{Error, Group};

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

fn test_dst(group: Group) -> Vec<u8> {
    format!("app-V01-CS{:02}-test", u8::from(group)).into_bytes()
}

#[test]
fn empty_dst_is_rejected_everywhere() {
    for group in all_groups() {
        assert_eq!(
            group.hash_to_scalar(b"input data", b""),
            Err(Error::EmptyDst),
            "{group:?}"
        );
        assert_eq!(
            group.hash_to_group(b"input data", b""),
            Err(Error::EmptyDst),
            "{group:?}"
        );
        assert_eq!(
            group.encode_to_group(b"input data", b""),
            Err(Error::EmptyDst),
            "{group:?}"
        );
    }
}

#[test]
fn hash_to_scalar_is_deterministic_and_separated() {
    for group in all_groups() {
        let dst = test_dst(group);

        let a = group.hash_to_scalar(b"input data", &dst).unwrap();
        let b = group.hash_to_scalar(b"input data", &dst).unwrap();
        assert!(a.equal(Some(&b)).unwrap(), "{group:?}");

        // Different tag, different scalar.
        let c = group.hash_to_scalar(b"input data", b"other-dst").unwrap();
        assert!(!a.equal(Some(&c)).unwrap(), "{group:?}");

        // Different input, different scalar.
        let d = group.hash_to_scalar(b"other input", &dst).unwrap();
        assert!(!a.equal(Some(&d)).unwrap(), "{group:?}");
    }
}

#[test]
fn hash_to_scalar_output_is_canonical() {
    for group in all_groups() {
        let dst = test_dst(group);
        let s = group.hash_to_scalar(b"input data", &dst).unwrap();

        let encoded = s.encode();
        assert_eq!(encoded.len(), group.scalar_length());

        let decoded = group.new_scalar().decode(&encoded).unwrap();
        assert!(decoded.equal(Some(&s)).unwrap());
    }
}

#[test]
fn hash_to_scalar_vectors() {
    let expected: [(Group, &str); 6] = [
        (
            Group::Ristretto255Sha512,
            "3a3c5464252e486b7e1f5c7e6a1ee07899bf9c450df7fbd3d978d06fa1075a04",
        ),
        (
            Group::P256Sha256,
            "56c0b9cadac9e7621c1d81f65f7a97f44a6c8ec4da64d6530f3b3cc0a23b66bb",
        ),
        (
            Group::P384Sha384,
            "72c8ed82257b0160fb280ffee7f4d28b1bd650c5242fa42eeb7ce94b5fea54c7765fbbfcf6b330c6928a6ce13b082834",
        ),
        (
            Group::P521Sha512,
            "01b72994b96d3dc69b97ea4f80d5d1c732b357cc671a0a2d67e3b4a691e7816b07351bc5dc33f3ee024d3b8d62f99f8e0101dd227eee14ffb9fc64535d78fa37985e",
        ),
        (
            Group::Edwards25519Sha512,
            "e3a311a86730473ec231d3851e044778e283cda2031ae06b8ea714c45913c70f",
        ),
        (
            Group::Secp256k1Sha256,
            "e82ea1cec2ff71ae4e8b1d6174e10a4e3ad501dcf77abc4ea14efbf0e2f5aba5",
        ),
    ];

    for (group, hex) in expected {
        let s = group.hash_to_scalar(b"input data", &test_dst(group)).unwrap();
        assert_eq!(s.hex(), hex, "{group:?}");
    }
}

#[test]
fn hash_to_group_is_deterministic_and_separated() {
    for group in all_groups() {
        let dst = test_dst(group);

        let a = group.hash_to_group(b"input data", &dst).unwrap();
        let b = group.hash_to_group(b"input data", &dst).unwrap();
        assert!(a.equal(Some(&b)).unwrap(), "{group:?}");

        let c = group.hash_to_group(b"input data", b"other-dst").unwrap();
        assert!(!a.equal(Some(&c)).unwrap(), "{group:?}");

        let d = group.hash_to_group(b"other input", &dst).unwrap();
        assert!(!a.equal(Some(&d)).unwrap(), "{group:?}");
    }
}

#[test]
fn hash_to_group_output_is_a_valid_element() {
    for group in all_groups() {
        let e = group.hash_to_group(b"input data", &test_dst(group)).unwrap();
        assert!(!e.is_identity(), "{group:?}");

        let encoded = e.encode();
        assert_eq!(encoded.len(), group.element_length());

        let decoded = group.new_element().decode(&encoded).unwrap();
        assert!(decoded.equal(Some(&e)).unwrap(), "{group:?}");

        // Mapped elements live in the prime-order subgroup: multiplying
        // by the order (as order-1 then +1) lands on the identity.
        let minus_one = group.new_scalar().minus_one();
        let wrapped = e
            .clone()
            .multiply(Some(&minus_one))
            .unwrap()
            .add(&e)
            .unwrap();
        assert!(wrapped.is_identity(), "{group:?}");
    }
}

// RFC 9380 § J.4.1, edwards25519_XMD:SHA-512_ELL2_RO_, in compressed
// form (little-endian y with the sign bit of x).
#[test]
fn edwards25519_rfc9380_vectors() {
    let dst = b"QUUX-V01-CS02-with-edwards25519_XMD:SHA-512_ELL2_RO_";
    let group = Group::Edwards25519Sha512;

    let vectors: [(&[u8], [u8; 32]); 3] = [
        (
            b"",
            hex!("21dc15e10253796df23a7699c8a383ea624cce88c52431f6be220b1a56c8a609"),
        ),
        (
            b"abc",
            hex!("31558a26887f23fb8218f143e69d5f0af2e7831130bd5b432ef23883b895839a"),
        ),
        (
            b"abcdef0123456789",
            hex!("a661c58eea707f2171dd1a8a641e41758ac842cfd31e64dabc7f0e143d0a0653"),
        ),
    ];

    for (msg, expected) in vectors {
        let e = group.hash_to_group(msg, dst).unwrap();
        assert_eq!(e.encode(), expected);
    }
}

#[test]
fn encode_to_group_aliases_hash_to_group() {
    for group in all_groups() {
        let dst = test_dst(group);

        let hashed = group.hash_to_group(b"input data", &dst).unwrap();
        let encoded = group.encode_to_group(b"input data", &dst).unwrap();
        assert!(hashed.equal(Some(&encoded)).unwrap(), "{group:?}");
    }
}

#[test]
fn long_dst_is_accepted() {
    // Tags longer than 255 bytes are folded through the hash per
    // RFC 9380 § 5.3.3 instead of being rejected.
    let long_dst = vec![0x61u8; 300];

    for group in all_groups() {
        let e = group.hash_to_group(b"input data", &long_dst).unwrap();
        assert!(!e.is_identity());

        let s = group.hash_to_scalar(b"input data", &long_dst).unwrap();
        assert!(!s.is_zero());
    }
}
