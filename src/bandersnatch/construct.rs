//! Point constructors, encoding and decoding.
//!
//! Constructors come in pairs: `set_*()` modifies the point in place and
//! `from_*()` returns a new instance. On failure, the target is set to a
//! NaP and an error is returned; when both curve membership and subgroup
//! membership fail, `Error::NotOnCurve` is reported.
//!
//! With `Trust::Untrusted`, the input is fully validated: subgroup types
//! require the point to be in the prime order subgroup (except for the
//! `x*sign(y)` constructor, which cannot distinguish `P` from `P + A` and
//! thus only checks that the point belongs to the good coset). With
//! `Trust::Trusted`, membership checks are skipped; checks which are a
//! by-product of the computation (square root extraction, sign domains)
//! are still reported.
//!
//! Points of the prime order subgroup are encoded over 32 bytes, as the
//! little-endian encoding of `x*sign(y)`. That value is the same for `P`
//! and `P + A`, so it fully encodes an element of the subgroup.

#![allow(non_snake_case)]

use rand_core::RngCore;

use crate::field::{GFp, Scalar};
use crate::{Error, Result};
use super::coords::Xtw;
use super::endo::mul_glv_raw;
use super::params::{A, D, GEN_X, GEN_Y};
use super::point::{CurvePoint, Flavor, Representation, Trust};

// Final membership checks for a point which is known to be on the curve.
fn check_subgroup<F: Flavor>(c: Xtw, trust: Trust) -> Result<Xtw> {
    if trust == Trust::Untrusted && F::SUBGROUP && !c.is_in_subgroup() {
        return Err(Error::NotInSubgroup);
    }
    Ok(c)
}

#[inline]
fn xtw_from_affine(x: GFp, y: GFp) -> Xtw {
    Xtw { X: x, Y: y, T: x * y, Z: GFp::ONE }
}

// Returns the square root, with sign +1, of y^2 = (1 - a*x^2)/(1 - d*x^2).
// The denominator cannot be zero since d is not a square.
fn y_from_x(x: GFp) -> Option<GFp> {
    let xx = x.square();
    let (y, r) = ((GFp::ONE - A * xx) / (GFp::ONE - D * xx)).sqrt();
    if r != 0 { Some(y) } else { None }
}

fn point_affine<F: Flavor>(x: GFp, y: GFp, trust: Trust) -> Result<Xtw> {
    let c = xtw_from_affine(x, y);
    if trust == Trust::Untrusted && !c.is_on_curve() {
        return Err(Error::NotOnCurve);
    }
    check_subgroup::<F>(c, trust)
}

fn point_x_sign_y<F: Flavor>(x: GFp, sign_y: i32, trust: Trust) -> Result<Xtw> {
    if sign_y != 1 && sign_y != -1 {
        return Err(Error::InvalidSign(sign_y));
    }
    let mut y = y_from_x(x).ok_or(Error::NotOnCurve)?;
    if sign_y < 0 {
        y = -y;
    }
    check_subgroup::<F>(xtw_from_affine(x, y), trust)
}

fn point_y_sign_x<F: Flavor>(y: GFp, sign_x: i32, trust: Trust) -> Result<Xtw> {
    if sign_x < -1 || sign_x > 1 {
        return Err(Error::InvalidSign(sign_x));
    }

    // x^2 = (1 - y^2)/(a - d*y^2). The denominator vanishes for y = s
    // and y = -s, which are not the y coordinates of affine points.
    let yy = y.square();
    let den = A - D * yy;
    if den.iszero() != 0 {
        return Err(Error::NotOnCurve);
    }
    let (mut x, r) = ((GFp::ONE - yy) / den).sqrt();
    if r == 0 {
        return Err(Error::NotOnCurve);
    }

    // For x = 0 (y = 1 or -1), any sign is accepted.
    if x.iszero() == 0 {
        if sign_x == 0 {
            return Err(Error::AmbiguousZeroSign);
        }
        if sign_x < 0 {
            x = -x;
        }
    }
    check_subgroup::<F>(xtw_from_affine(x, y), trust)
}

fn point_x_times_sign_y<F: Flavor>(xs: GFp, trust: Trust) -> Result<Xtw> {
    // Candidates are (xs, y) and (-xs, -y) with sign(y) = +1; they differ
    // by A.
    let y = y_from_x(xs).ok_or(Error::NotOnCurve)?;
    let c = xtw_from_affine(xs, y);
    if trust == Trust::Untrusted && !c.is_in_good_coset() {
        return Err(Error::NotInSubgroup);
    }
    if F::SUBGROUP {
        Ok(c)
    } else {
        Ok(c.normalize_subgroup())
    }
}

fn store<P: CurvePoint>(p: &mut P, r: Result<Xtw>) -> Result<()> {
    match r {
        Ok(c) => {
            *p = P::from_xtw(&c);
            Ok(())
        }
        Err(e) => {
            *p = P::nap();
            Err(e)
        }
    }
}

/// Constructors and encoding, available on all point types.
pub trait PointConstruct: CurvePoint {

    /// Sets this point to its neutral element.
    fn set_neutral(&mut self) {
        *self = Self::neutral();
    }

    /// Sets this point to the order-2 point `A`. For subgroup types, this
    /// is a representative of the neutral element.
    fn set_order2(&mut self) {
        *self = Self::from_xtw(&Xtw::ORDER2);
    }

    /// Sets this point to the point at infinity `E1`. Types which cannot
    /// represent it (affine and subgroup types) are set to a NaP.
    fn set_infinity(&mut self) {
        if Self::Flavor::SUBGROUP {
            *self = Self::nap();
        } else {
            *self = Self::from_xtw(&Xtw::INFINITY1);
        }
    }

    /// Sets this point from its affine coordinates.
    fn set_affine(&mut self, x: GFp, y: GFp, trust: Trust) -> Result<()> {
        store(self, point_affine::<Self::Flavor>(x, y, trust))
    }

    fn from_affine(x: GFp, y: GFp, trust: Trust) -> Result<Self> {
        let mut p = Self::nap();
        p.set_affine(x, y, trust)?;
        Ok(p)
    }

    /// Sets this point from its x coordinate and the sign of its y
    /// coordinate (which must be -1 or +1).
    fn set_x_sign_y(&mut self, x: GFp, sign_y: i32, trust: Trust) -> Result<()> {
        store(self, point_x_sign_y::<Self::Flavor>(x, sign_y, trust))
    }

    fn from_x_sign_y(x: GFp, sign_y: i32, trust: Trust) -> Result<Self> {
        let mut p = Self::nap();
        p.set_x_sign_y(x, sign_y, trust)?;
        Ok(p)
    }

    /// Sets this point from its y coordinate and the sign of its x
    /// coordinate (-1, 0 or +1). A zero sign is allowed only if x is zero,
    /// i.e. for `y = 1` (neutral) and `y = -1` (point `A`); for these two
    /// points, any sign is accepted.
    fn set_y_sign_x(&mut self, y: GFp, sign_x: i32, trust: Trust) -> Result<()> {
        store(self, point_y_sign_x::<Self::Flavor>(y, sign_x, trust))
    }

    fn from_y_sign_x(y: GFp, sign_x: i32, trust: Trust) -> Result<Self> {
        let mut p = Self::nap();
        p.set_y_sign_x(y, sign_x, trust)?;
        Ok(p)
    }

    /// Sets this point from the value `x*sign(y)`. The resulting point is
    /// the element of the prime order subgroup with that value.
    fn set_x_times_sign_y(&mut self, xs: GFp, trust: Trust) -> Result<()> {
        store(self, point_x_times_sign_y::<Self::Flavor>(xs, trust))
    }

    fn from_x_times_sign_y(xs: GFp, trust: Trust) -> Result<Self> {
        let mut p = Self::nap();
        p.set_x_times_sign_y(xs, trust)?;
        Ok(p)
    }

    /// Converts from another point type. A NaP source yields
    /// `Error::NotOnCurve` for untrusted input, and a NaP for trusted
    /// input. For subgroup targets, an untrusted full-curve source must be
    /// in the prime order subgroup.
    fn set_point<Q: CurvePoint>(&mut self, q: &Q, trust: Trust) -> Result<()> {
        let c = if Self::Flavor::SUBGROUP && Q::Flavor::SUBGROUP {
            q.to_xtw()
        } else {
            q.to_xtw_actual()
        };
        if c.is_nap() {
            *self = Self::nap();
            return match trust {
                Trust::Trusted => Ok(()),
                Trust::Untrusted => Err(Error::NotOnCurve),
            };
        }
        if trust == Trust::Untrusted {
            let r = if !c.is_on_curve() {
                Err(Error::NotOnCurve)
            } else if Self::Flavor::SUBGROUP && !Q::Flavor::SUBGROUP
                && !c.is_in_subgroup()
            {
                Err(Error::NotInSubgroup)
            } else if Self::KIND.representation() == Representation::Axtw
                && c.is_at_infinity()
            {
                Err(Error::AtInfinity)
            } else {
                Ok(c)
            };
            return store(self, r);
        }
        *self = Self::from_xtw(&c);
        Ok(())
    }

    fn from_point<Q: CurvePoint>(q: &Q, trust: Trust) -> Result<Self> {
        let mut p = Self::nap();
        p.set_point(q, trust)?;
        Ok(p)
    }

    /// Encodes this point over 32 bytes (`x*sign(y)`, little-endian). Only
    /// elements of the prime order subgroup can be encoded.
    fn encode(&self) -> Result<[u8; 32]> {
        let c = if Self::Flavor::SUBGROUP {
            self.to_xtw()
        } else {
            self.to_xtw_actual()
        };
        if c.is_nap() {
            return Err(Error::NotOnCurve);
        }
        if c.is_at_infinity() {
            return Err(Error::AtInfinity);
        }
        if !Self::Flavor::SUBGROUP && !c.is_in_subgroup() {
            return Err(Error::NotInSubgroup);
        }
        let a = c.to_axtw();
        let xs = if a.y.sign() < 0 { -a.x } else { a.x };
        Ok(xs.encode32())
    }

    /// Decodes a point from 32 bytes. Decoding fails on a wrong length,
    /// a non-canonical value, or a value which does not correspond to an
    /// element of the prime order subgroup; on failure, this point is set
    /// to a NaP.
    fn set_decode(&mut self, buf: &[u8]) -> Result<()> {
        match GFp::decode(buf) {
            Some(xs) => self.set_x_times_sign_y(xs, Trust::Untrusted),
            None => {
                *self = Self::nap();
                Err(Error::InvalidEncoding)
            }
        }
    }

    fn decode(buf: &[u8]) -> Result<Self> {
        let mut p = Self::nap();
        p.set_decode(buf)?;
        Ok(p)
    }

    /// Samples a random point. For subgroup types, the point is a uniform
    /// element of the prime order subgroup; for full-curve types, it is a
    /// uniform affine point of the whole curve.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        if Self::Flavor::SUBGROUP {
            let k = Scalar::random(rng);
            let g = xtw_from_affine(GEN_X, GEN_Y);
            return Self::from_xtw(&mul_glv_raw(&g, &k));
        }
        loop {
            let x = GFp::random(rng);
            if let Some(y) = y_from_x(x) {
                let y = if (rng.next_u32() & 1) != 0 { -y } else { y };
                return Self::from_xtw(&xtw_from_affine(x, y));
            }
        }
    }
}

impl<P: CurvePoint> PointConstruct for P {}
