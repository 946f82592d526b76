//! Per-curve adapters between the uniform API and the arithmetic
//! providers.
//!
//! The Weierstrass groups share one generic adapter over the
//! `elliptic-curve` trait stack; the two curve25519-based groups share
//! their scalar field and split only on element handling.

pub(crate) mod curve25519;
pub(crate) mod edwards25519;
pub(crate) mod ristretto;
pub(crate) mod weierstrass;
