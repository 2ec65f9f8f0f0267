//! Error type for point construction and decoding.
//!
//! Arithmetic operations never fail; invalid results are represented by
//! a NaP ("not-a-point") value which propagates through further
//! computations. Errors are returned only by the validating constructors
//! and decoders, which set the target point to NaP when they fail.

use thiserror::Error;

/// Result type for point construction.
pub type Result<T> = core::result::Result<T, Error>;

/// Point construction errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,

    /// The point is on the curve but not in the prime order subgroup.
    #[error("point is not in the prime order subgroup")]
    NotInSubgroup,

    /// A sign argument is outside of its allowed domain.
    #[error("invalid sign value: {0}")]
    InvalidSign(i32),

    /// A zero sign was provided for a nonzero coordinate.
    #[error("sign 0 is only allowed for a zero coordinate")]
    AmbiguousZeroSign,

    /// The point is at infinity and cannot be represented with affine
    /// coordinates.
    #[error("point at infinity has no affine representation")]
    AtInfinity,

    /// The encoded value has the wrong length or is not canonical.
    #[error("invalid point encoding")]
    InvalidEncoding,
}
