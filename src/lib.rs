//! Arithmetic on the Bandersnatch curve.
//!
//! Bandersnatch is a twisted Edwards curve of equation
//! `a*x^2 + y^2 = 1 + d*x^2*y^2` (with `a = -5`) defined over the
//! scalar field of BLS12-381. The curve order is `4*r` for a prime `r`
//! slightly below 2^253; the rational 2-torsion is `{N, A, E1, E2}`,
//! with `N` the neutral `(0, 1)`, `A` the affine point `(0, -1)`, and
//! `E1`, `E2` the two points at infinity. The curve has an efficiently
//! computable endomorphism of degree 2, which acts on the prime order
//! subgroup as multiplication by an integer `lambda` with
//! `lambda^2 = -2 mod r`; it is used to speed up scalar multiplication
//! (GLV method).
//!
//! Base field arithmetic is implemented in `backend` (generic Montgomery
//! representation over four 64-bit limbs, with the modulus provided as
//! compile-time type parameters); the concrete fields (base field
//! `GFp`, and integers modulo `r` as `Scalar`) are in `field`. The curve
//! itself is in the `bandersnatch` module.
//!
//! # Conventions
//!
//! Points come in three internal representations (projective extended
//! coordinates, affine extended coordinates, and a four-coordinate
//! "EFGH" form which is what addition, doubling and the endomorphism
//! naturally produce), each in two flavors: `Full` points can be any
//! rational point of the curve, including points at infinity; `Subgroup`
//! points are elements of the prime order subgroup, internally stored
//! modulo the 2-torsion point `A`.
//!
//! Invalid values are not reported through the arithmetic API; instead,
//! a reserved coordinate pattern (the "NaP", not-a-point) is stored and
//! propagated. Typed errors (`Error`) are returned only by validating
//! constructors and decoders.
//!
//! Algebraic operations on field elements and curve points are performed
//! with the usual operators (e.g. `+`); appropriate traits are defined
//! so that structure types and pointers to structure types can be used
//! more or less interchangeably. Functions that modify the object on
//! which they are called have a name in `set_*()` (e.g. for a curve point
//! `P`, `P.set_double()` modifies the point in place, while `P.double()`
//! leaves `P` unmodified and returns the double as a new instance).
//!
//! Field elements use the `u32` convention for Boolean results
//! (0xFFFFFFFF for "true", 0x00000000 for "false"). Curve point
//! predicates return plain `bool` values. None of the point operations
//! are constant-time.

macro_rules! static_assert {
    ($condition:expr) => {
        let _ = &[()][1 - ($condition) as usize];
    }
}

pub use rand_core::{CryptoRng, RngCore, Error as RngError};

pub mod backend;
pub mod field;
pub mod error;
pub mod bandersnatch;

pub use error::{Error, Result};
