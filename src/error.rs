//! Error types.

/// Result type for this crate, with [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// All the ways a group operation can fail.
///
/// Decoding, coercion, and hash-to-curve failures are ordinary runtime
/// conditions a caller is expected to handle. Mixing values of different
/// groups or using an unavailable group identifier signal programmer
/// errors: fallible operations report them as [`Error::CastScalar`],
/// [`Error::CastElement`] or [`Error::InvalidGroup`], and infallible
/// constructors panic with the same message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The group identifier is not in the registered set, or the group is
    /// reserved and permanently unavailable.
    #[error("group identifier is not available")]
    InvalidGroup,

    /// A scalar operand belongs to a different group than the receiver.
    #[error("scalar operand is from a different group")]
    CastScalar,

    /// An element operand belongs to a different group than the receiver.
    #[error("element operand is from a different group")]
    CastElement,

    /// Hash-to-curve or hash-to-scalar was invoked with a nil or
    /// zero-length domain separation tag.
    #[error("domain separation tag is empty")]
    EmptyDst,

    /// A scalar encoding has the wrong byte length for its group.
    #[error("invalid scalar encoding length")]
    ScalarLength,

    /// A scalar encoding is non-canonical: its magnitude is not below the
    /// group order.
    #[error("invalid scalar encoding")]
    ScalarEncoding,

    /// An element encoding has the wrong byte length for its group.
    #[error("invalid element encoding length")]
    ElementLength,

    /// An element encoding is off-curve, outside the prime-order
    /// subgroup, or non-canonical.
    #[error("invalid element encoding")]
    ElementEncoding,

    /// The encoding of the identity element was decoded on a group that
    /// forbids it.
    #[error("decoding the identity element is not allowed for this group")]
    IdentityEncoding,

    /// The scalar does not fit in 64 bits.
    #[error("scalar is too large to fit in a uint64")]
    UInt64Overflow,

    /// A hexadecimal string is malformed (odd length or non-hex digits).
    #[error("invalid hexadecimal encoding")]
    Hex,

    /// The backend rejected a hash-to-curve expansion. Unreachable for
    /// the fixed output lengths used here once the tag is validated.
    #[error("hash-to-curve expansion failed")]
    HashToCurve,
}
