#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use primegroup::{Group, Result};
//!
//! fn main() -> Result<()> {
//!     // Pick a group; swapping curves is a one-identifier change.
//!     let group = Group::Ristretto255Sha512;
//!
//!     // Diffie-Hellman flavoured round trip.
//!     let secret = group.new_scalar().random();
//!     let public = group.base().multiply(Some(&secret))?;
//!
//!     let encoded = public.encode();
//!     assert_eq!(encoded.len(), group.element_length());
//!
//!     let decoded = group.new_element().decode(&encoded)?;
//!     assert!(decoded.equal(Some(&public))?);
//!
//!     // Hash-to-curve under a protocol tag.
//!     let dst = group.make_dst("protocol", 1)?;
//!     let element = group.hash_to_group(b"input data", &dst)?;
//!     assert!(!element.is_identity());
//!
//!     Ok(())
//! }
//! ```

mod backend;
mod element;
mod error;
mod group;
pub mod hash2field;
mod scalar;

pub use crate::element::Element;
pub use crate::error::{Error, Result};
pub use crate::group::{Group, HashFn};
pub use crate::scalar::Scalar;
