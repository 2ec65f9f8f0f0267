//! Bandersnatch curve points.
//!
//! Six point types are provided: each of the three representations
//! (`PointXtw`, `PointAxtw`, `PointEfgh`) comes in a `Full` flavor (any
//! rational point, including the points at infinity for the projective
//! representations) and a `Subgroup` flavor (elements of the prime order
//! subgroup, stored modulo the order-2 point `A`).
//!
//! All operations on points are exposed through the `CurvePoint` and
//! `PointConstruct` traits, implemented by all types; `GlvExp` adds
//! endomorphism-accelerated scalar multiplication to subgroup types.
//! Usual operators are implemented as well, with the left operand
//! deciding the type of the result:
//!
//! ```
//! use bandersnatch::bandersnatch::{PointXtwSubgroup, PointAxtwFull,
//!     CurvePoint, PointConstruct, Trust};
//! use bandersnatch::field::Scalar;
//!
//! let G = PointXtwSubgroup::BASE;
//! let k = Scalar::w64be(0, 0, 0, 3);
//! let P = G * k;
//! let Q = PointAxtwFull::from_point(&G, Trust::Untrusted).unwrap();
//! assert!(P.is_equal(&(Q + G + G)));
//! let enc = P.encode().unwrap();
//! assert!(PointXtwSubgroup::decode(&enc).unwrap().is_equal(&P));
//! ```
//!
//! Invalid results (e.g. the sum of points that cannot be represented by
//! the receiver type) are NaP values, which propagate through all
//! operations and never compare equal to anything. `AnyPoint` wraps a
//! point whose type is chosen at runtime.

pub mod params;
pub mod coords;
pub mod point;
pub mod xtw;
pub mod axtw;
pub mod efgh;
pub mod construct;
pub mod endo;
pub mod any;
mod ops;

pub use crate::field::{GFp, Scalar};
pub use point::{CurvePoint, Flavor, Full, Subgroup, PointKind, Representation, Trust};
pub use xtw::{PointXtw, PointXtwFull, PointXtwSubgroup};
pub use axtw::{PointAxtw, PointAxtwFull, PointAxtwSubgroup};
pub use efgh::{PointEfgh, PointEfghFull, PointEfghSubgroup};
pub use construct::PointConstruct;
pub use endo::GlvExp;
pub use any::AnyPoint;
