//! Points in `(E, F, G, H)` coordinates.
//!
//! Addition, doubling and the endomorphism all naturally compute four
//! values `E`, `F`, `G` and `H` and then derive the extended coordinates
//! with four extra multiplications. Keeping the four values as they are
//! saves these multiplications when a result is only stored or compared.

#![allow(non_snake_case)]

use core::marker::PhantomData;

use crate::field::GFp;
use super::coords::{Efgh, Xtw};
use super::params::{GEN_X, GEN_Y};
use super::point::{CurvePoint, Flavor, Full, PointKind, Representation, Subgroup};

/// A point in `(E, F, G, H)` coordinates, with `x = E/G` and `y = H/F`.
#[derive(Clone, Copy, Debug)]
pub struct PointEfgh<F: Flavor> {
    c: Efgh,
    _flavor: PhantomData<F>,
}

/// Any curve point, in `(E, F, G, H)` coordinates.
pub type PointEfghFull = PointEfgh<Full>;

/// A prime order subgroup element, in `(E, F, G, H)` coordinates.
pub type PointEfghSubgroup = PointEfgh<Subgroup>;

impl<F: Flavor> PointEfgh<F> {

    /// The neutral element.
    pub const NEUTRAL: Self = Self::from_raw(Efgh {
        E: GFp::ZERO, F: GFp::ONE, G: GFp::ONE, H: GFp::ONE,
    });

    /// The NaP value.
    pub const NAP: Self = Self::from_raw(Efgh::NAP);

    /// The conventional generator of the prime order subgroup.
    pub const BASE: Self = Self::from_raw(Efgh {
        E: GEN_X, F: GFp::ONE, G: GFp::ONE, H: GEN_Y,
    });

    pub(crate) const fn from_raw(c: Efgh) -> Self {
        Self { c, _flavor: PhantomData }
    }

    /// Returns the stored coordinates `(E, F, G, H)`.
    pub fn coordinates(&self) -> (GFp, GFp, GFp, GFp) {
        (self.c.E, self.c.F, self.c.G, self.c.H)
    }
}

impl<F: Flavor> CurvePoint for PointEfgh<F> {
    type Flavor = F;

    const KIND: PointKind = PointKind::new(Representation::Efgh, F::SUBGROUP);

    #[inline]
    fn from_xtw(c: &Xtw) -> Self {
        if c.is_nap() {
            Self::NAP
        } else {
            Self::from_raw(c.to_efgh())
        }
    }

    #[inline]
    fn to_xtw(&self) -> Xtw {
        self.c.to_xtw()
    }

    #[inline]
    fn from_efgh(c: &Efgh) -> Self {
        Self::from_raw(c.normalize_nap())
    }

    fn set_neg(&mut self) {
        self.c = self.c.neg();
    }
}
