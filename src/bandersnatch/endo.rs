//! Endomorphism-accelerated scalar multiplication.
//!
//! The curve endomorphism `psi` (see `Xtw::endo()`) acts on the prime
//! order subgroup as the multiplication by `lambda`, with
//! `lambda^2 = -2 mod r`. A scalar `k` is split into `k1 + k2*lambda`
//! with `k1` and `k2` of about half the size of `r` (GLV method); then
//! `k*P = k1*P + k2*psi(P)` is computed with interleaved 5-bit wNAF
//! windows, sharing the doublings.
//!
//! Subgroup points are handled modulo `A`. Since `psi(A) = N`, we have
//! `psi(P + A) = psi(P)`, so the result does not depend on the stored
//! representative (modulo `A`).
//!
//! Outside of the subgroup, `psi(P) - lambda*P` is a 2-torsion point
//! which depends only on the 2-torsion component of `P`: `N` maps to `N`,
//! `A` to `A`, and the two points at infinity are swapped.

#![allow(non_snake_case)]

use num_bigint::{BigInt, Sign};

use crate::field::Scalar;
use super::coords::Xtw;
use super::params::{order, GLV_M1, GLV_N1};
use super::point::{CurvePoint, Subgroup};

/// Splits integer `k` into `k1` and `k2` such that
/// `k = k1 + k2*lambda mod r`, with `|k1| < 2^127` and `|k2| < 2^127`.
pub fn split_glv(k: &BigInt) -> (BigInt, BigInt) {
    let r = order();
    let mut t = k % &r;
    if t.sign() == Sign::Minus {
        t += &r;
    }

    // c1 = round(t*N1/r), c2 = round(t*M1/r)
    let n1 = BigInt::from(GLV_N1);
    let m1 = BigInt::from(GLV_M1);
    let r2 = &r << 1;
    let c1 = ((&t * &n1 << 1) + &r) / &r2;
    let c2 = ((&t * &m1 << 1) + &r) / &r2;

    // Subtract c1*(N1, M1) - c2*(-2*M1, N1) from (t, 0).
    let k1 = &t - &c1 * &n1 - ((&c2 * &m1) << 1);
    let k2 = &c2 * &n1 - &c1 * &m1;
    (k1, k2)
}

// Returns |x| and sgn(x) (0xFFFFFFFF for x < 0, 0 otherwise). The source
// value must be lower than 2^128 in absolute value.
fn abs_u128(x: &BigInt) -> (u128, u32) {
    let d = x.magnitude().to_u64_digits();
    debug_assert!(d.len() <= 2);
    let lo = d.first().copied().unwrap_or(0) as u128;
    let hi = d.get(1).copied().unwrap_or(0) as u128;
    let s = if x.sign() == Sign::Minus { 0xFFFFFFFF } else { 0 };
    (lo | (hi << 64), s)
}

/// Splits a scalar as `split_glv()`, returning `|k1|`, `sgn(k1)`, `|k2|`
/// and `sgn(k2)` with `sgn(x) = 0xFFFFFFFF` for `x < 0`, 0 otherwise.
fn split_scalar(k: &Scalar) -> (u128, u32, u128, u32) {
    let (k1, k2) = split_glv(&BigInt::from(k.to_biguint()));
    let (u1, s1) = abs_u128(&k1);
    let (u2, s2) = abs_u128(&k2);
    (u1, s1, u2, s2)
}

// Recodes a 128-bit integer into 5-bit wNAF: all digits are zero or odd,
// in the -15..+15 range, and any non-zero digit is followed by at least
// four zeros.
fn recode_u128_NAF(n: u128) -> [i8; 130] {
    let mut sd = [0i8; 130];
    let mut y = n;
    for i in 0..129 {
        let x = y as u32;
        let m = (x & 1).wrapping_neg();  // -1 if x is odd, 0 otherwise
        let v = x & m & 31;              // low 5 bits if x odd, or 0
        let c = (v & 16) << 1;           // carry (0 or 32)
        sd[i] = v.wrapping_sub(c) as i8;
        y = y.wrapping_sub(v as u128).wrapping_add(c as u128) >> 1;
    }
    sd
}

/// Computes `k*P` for a point `P` of the good coset (prime order subgroup
/// and its translation by `A`). The result is correct modulo `A`. A NaP
/// yields a NaP.
pub(crate) fn mul_glv_raw(P: &Xtw, k: &Scalar) -> Xtw {
    if P.is_nap() {
        return Xtw::NAP;
    }

    let (u0, s0, u1, s1) = split_scalar(k);

    // Compute the 5-bit windows:
    //   win0[i] = (2*i+1)*sgn(k1)*P         (i = 0 to 7)
    //   win1[i] = (2*i+1)*sgn(k2)*psi(P)    (i = 0 to 7)
    let mut win0 = [Xtw::NEUTRAL; 8];
    win0[0] = if s0 != 0 { P.neg() } else { *P };
    let Q = win0[0].double().to_xtw();
    for i in 1..8 {
        win0[i] = win0[i - 1].add(&Q).to_xtw();
    }
    let mut win1 = [Xtw::NEUTRAL; 8];
    for i in 0..8 {
        win1[i] = win0[i].endo().to_xtw();
        if (s0 ^ s1) != 0 {
            win1[i] = win1[i].neg();
        }
    }

    let sd0 = recode_u128_NAF(u0);
    let sd1 = recode_u128_NAF(u1);

    let mut R = Xtw::NEUTRAL;
    let mut zz = true;
    let mut ndbl = 0u32;
    for i in (0..130).rev() {
        // We have one more doubling to perform.
        ndbl += 1;

        // Get next digits. If they are all zeros, then we can loop
        // immediately.
        let e0 = sd0[i];
        let e1 = sd1[i];
        if ((e0 as u32) | (e1 as u32)) == 0 {
            continue;
        }

        // Apply accumulated doubles.
        if zz {
            zz = false;
        } else {
            for _ in 0..ndbl {
                R = R.double().to_xtw();
            }
        }
        ndbl = 0;

        // Process digits.
        if e0 != 0 {
            if e0 > 0 {
                R = R.add(&win0[e0 as usize >> 1]).to_xtw();
            } else {
                R = R.sub(&win0[(-e0) as usize >> 1]).to_xtw();
            }
        }
        if e1 != 0 {
            if e1 > 0 {
                R = R.add(&win1[e1 as usize >> 1]).to_xtw();
            } else {
                R = R.sub(&win1[(-e1) as usize >> 1]).to_xtw();
            }
        }
    }

    if !zz {
        for _ in 0..ndbl {
            R = R.double().to_xtw();
        }
    }
    R
}

/// Multiplies a point by a scalar: GLV for subgroup types, double-and-add
/// for full-curve types.
pub(crate) fn mul_scalar<P: CurvePoint>(p: &P, k: &Scalar) -> P {
    if <P::Flavor as super::point::Flavor>::SUBGROUP {
        P::from_xtw(&mul_glv_raw(&p.to_xtw(), k))
    } else {
        p.exp_naive(&BigInt::from(k.to_biguint()))
    }
}

/// GLV scalar multiplication, for subgroup types.
pub trait GlvExp: CurvePoint<Flavor = Subgroup> {

    /// Multiplies this point by integer `k` (of any size and sign).
    fn set_exp_glv(&mut self, k: &BigInt) {
        *self = Self::from_xtw(&mul_glv_raw(&self.to_xtw(), &Scalar::from_bigint(k)));
    }

    fn exp_glv(&self, k: &BigInt) -> Self {
        let mut r = *self;
        r.set_exp_glv(k);
        r
    }

    /// Multiplies this point by a scalar.
    fn set_mul_scalar(&mut self, k: &Scalar) {
        *self = Self::from_xtw(&mul_glv_raw(&self.to_xtw(), k));
    }
}

impl<P: CurvePoint<Flavor = Subgroup>> GlvExp for P {}
