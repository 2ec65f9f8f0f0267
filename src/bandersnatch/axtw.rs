//! Points in affine extended coordinates.
//!
//! Storage and comparisons are cheaper than with projective coordinates,
//! but every operation which produces a point of this type must invert a
//! field element. Points at infinity cannot be represented; operations
//! that would produce one yield a NaP instead.

use core::marker::PhantomData;

use crate::field::GFp;
use super::coords::{Axtw, Xtw};
use super::params::{GEN_T, GEN_X, GEN_Y};
use super::point::{CurvePoint, Flavor, Full, PointKind, Representation, Subgroup};

/// A point in affine extended coordinates `(x, y, t = x*y)`.
#[derive(Clone, Copy, Debug)]
pub struct PointAxtw<F: Flavor> {
    c: Axtw,
    _flavor: PhantomData<F>,
}

/// Any affine curve point, in affine extended coordinates.
pub type PointAxtwFull = PointAxtw<Full>;

/// A prime order subgroup element, in affine extended coordinates.
pub type PointAxtwSubgroup = PointAxtw<Subgroup>;

impl<F: Flavor> PointAxtw<F> {

    /// The neutral element.
    pub const NEUTRAL: Self = Self::from_raw(Axtw::NEUTRAL);

    /// The NaP value.
    pub const NAP: Self = Self::from_raw(Axtw::NAP);

    /// The conventional generator of the prime order subgroup.
    pub const BASE: Self = Self::from_raw(Axtw {
        x: GEN_X, y: GEN_Y, t: GEN_T,
    });

    pub(crate) const fn from_raw(c: Axtw) -> Self {
        Self { c, _flavor: PhantomData }
    }

    /// Returns the stored affine coordinates `(x, y, t)`.
    pub fn coordinates(&self) -> (GFp, GFp, GFp) {
        (self.c.x, self.c.y, self.c.t)
    }
}

impl PointAxtw<Full> {

    /// The affine point of order 2, `A = (0, -1)`.
    pub const ORDER2: Self = Self::from_raw(Axtw {
        x: GFp::ZERO, y: GFp::MINUS_ONE, t: GFp::ZERO,
    });
}

impl<F: Flavor> CurvePoint for PointAxtw<F> {
    type Flavor = F;

    const KIND: PointKind = PointKind::new(Representation::Axtw, F::SUBGROUP);

    fn from_xtw(c: &Xtw) -> Self {
        // Inversion of zero yields zero, so a point at infinity would
        // become (0, 0, 0), i.e. a NaP.
        if c.is_nap() || c.Z.iszero() != 0 {
            Self::NAP
        } else {
            Self::from_raw(c.to_axtw())
        }
    }

    #[inline]
    fn to_xtw(&self) -> Xtw {
        if self.c.is_nap() {
            Xtw::NAP
        } else {
            self.c.to_xtw()
        }
    }
}
