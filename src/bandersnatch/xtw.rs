//! Points in extended projective coordinates.

use core::marker::PhantomData;

use crate::field::GFp;
use super::coords::Xtw;
use super::params::{GEN_T, GEN_X, GEN_Y};
use super::point::{CurvePoint, Flavor, Full, PointKind, Representation, Subgroup};

/// A point in extended projective coordinates `(X:Y:T:Z)`.
///
/// This is the general-purpose representation, and the canonical one
/// (with the `Full` flavor) for comparisons and conversions.
#[derive(Clone, Copy, Debug)]
pub struct PointXtw<F: Flavor> {
    c: Xtw,
    _flavor: PhantomData<F>,
}

/// Any curve point, in extended projective coordinates.
pub type PointXtwFull = PointXtw<Full>;

/// A prime order subgroup element, in extended projective coordinates.
pub type PointXtwSubgroup = PointXtw<Subgroup>;

impl<F: Flavor> PointXtw<F> {

    /// The neutral element.
    pub const NEUTRAL: Self = Self::from_raw(Xtw::NEUTRAL);

    /// The NaP value.
    pub const NAP: Self = Self::from_raw(Xtw::NAP);

    /// The conventional generator of the prime order subgroup.
    pub const BASE: Self = Self::from_raw(Xtw {
        X: GEN_X, Y: GEN_Y, T: GEN_T, Z: GFp::ONE,
    });

    pub(crate) const fn from_raw(c: Xtw) -> Self {
        Self { c, _flavor: PhantomData }
    }

    /// Returns the stored projective coordinates `(X, Y, T, Z)`.
    pub fn coordinates(&self) -> (GFp, GFp, GFp, GFp) {
        (self.c.X, self.c.Y, self.c.T, self.c.Z)
    }
}

impl PointXtw<Full> {

    /// The affine point of order 2, `A = (0, -1)`.
    pub const ORDER2: Self = Self::from_raw(Xtw::ORDER2);

    /// The point at infinity `E1 = (1:0:s:0)`.
    pub const INFINITY1: Self = Self::from_raw(Xtw::INFINITY1);

    /// The point at infinity `E2 = (1:0:-s:0)`.
    pub const INFINITY2: Self = Self::from_raw(Xtw::INFINITY2);
}

impl<F: Flavor> CurvePoint for PointXtw<F> {
    type Flavor = F;

    const KIND: PointKind = PointKind::new(Representation::Xtw, F::SUBGROUP);

    #[inline]
    fn from_xtw(c: &Xtw) -> Self {
        if c.is_nap() {
            Self::NAP
        } else {
            Self::from_raw(*c)
        }
    }

    #[inline]
    fn to_xtw(&self) -> Xtw {
        self.c
    }
}
