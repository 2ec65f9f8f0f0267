//! Raw coordinate systems and formulas.
//!
//! The structures in this module hold plain field elements and do not
//! know about flavors (full curve vs. subgroup); the typed point
//! structures wrap them. Three systems are used:
//!
//!  - `Xtw`: extended twisted Edwards coordinates `(X:Y:T:Z)` with
//!    `x = X/Z`, `y = Y/Z`, `X*Y = T*Z`. Points at infinity have `Z = 0`.
//!
//!  - `Axtw`: affine extended coordinates `(x, y, t = x*y)`.
//!
//!  - `Efgh`: four values `(E, F, G, H)` such that `x = E/G` and
//!    `y = H/F`; the matching extended coordinates are
//!    `(E*F : G*H : E*H : F*G)`. Additions, doublings and the
//!    endomorphism all compute these four values first, so converting
//!    to `Xtw` is delayed until needed.
//!
//! A NaP ("not-a-point") is represented with all coordinates set to
//! zero. No valid point has both `X` and `Y` equal to zero, and the
//! formulas below map a NaP input to a NaP output.

// Projective/fractional coordinates traditionally use uppercase letters,
// using lowercase only for affine coordinates.
#![allow(non_snake_case)]

use crate::field::GFp;
use super::params::{A, ALPHA, D, S, S_MINUS_2};

/// Extended projective coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Xtw {
    pub X: GFp,
    pub Y: GFp,
    pub T: GFp,
    pub Z: GFp,
}

/// Affine extended coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Axtw {
    pub x: GFp,
    pub y: GFp,
    pub t: GFp,
}

/// Coordinates `(E, F, G, H)` with `x = E/G` and `y = H/F`.
#[derive(Clone, Copy, Debug)]
pub struct Efgh {
    pub E: GFp,
    pub F: GFp,
    pub G: GFp,
    pub H: GFp,
}

impl Xtw {

    /// The neutral point `N = (0, 1)`.
    pub const NEUTRAL: Self = Self {
        X: GFp::ZERO, Y: GFp::ONE, T: GFp::ZERO, Z: GFp::ONE,
    };

    /// The affine point of order 2, `A = (0, -1)`.
    pub const ORDER2: Self = Self {
        X: GFp::ZERO, Y: GFp::MINUS_ONE, T: GFp::ZERO, Z: GFp::ONE,
    };

    /// First point at infinity, `E1 = (1:0:s:0)`.
    pub const INFINITY1: Self = Self {
        X: GFp::ONE, Y: GFp::ZERO, T: S, Z: GFp::ZERO,
    };

    /// Second point at infinity, `E2 = (1:0:-s:0)`.
    pub const INFINITY2: Self = Self {
        X: GFp::MINUS_ONE, Y: GFp::ZERO, T: S, Z: GFp::ZERO,
    };

    /// The NaP.
    pub const NAP: Self = Self {
        X: GFp::ZERO, Y: GFp::ZERO, T: GFp::ZERO, Z: GFp::ZERO,
    };

    #[inline]
    pub fn is_nap(&self) -> bool {
        (self.X.iszero() & self.Y.iszero()) != 0
    }

    /// Returns true if this is a point at infinity (not a NaP).
    #[inline]
    pub fn is_at_infinity(&self) -> bool {
        self.Z.iszero() != 0 && !self.is_nap()
    }

    /// Returns true for the exact neutral point `N`.
    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.X.iszero() != 0 && self.Y.iszero() == 0
            && self.Y.equals(self.Z) != 0
    }

    /// Returns true for `N` and `A`.
    #[inline]
    pub fn is_neutral_mod_a(&self) -> bool {
        self.X.iszero() != 0 && self.Y.iszero() == 0
    }

    /// Checks the curve equation `a*X^2 + Y^2 = Z^2 + d*T^2` and the
    /// coordinate relation `X*Y = T*Z`. A NaP is not on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.is_nap() {
            return false;
        }
        let xx = self.X.square();
        let yy = self.Y.square();
        let tt = self.T.square();
        let zz = self.Z.square();
        let r1 = (A * xx + yy).equals(zz + D * tt);
        let r2 = (self.X * self.Y).equals(self.T * self.Z);
        (r1 & r2) != 0
    }

    /// Returns true if the point is in the index-2 subgroup that
    /// contains the prime order subgroup and the point `A`. This is
    /// the case if and only if `Z^2 - a*X^2` is a square.
    pub fn is_in_good_coset(&self) -> bool {
        (self.Z.square() - A * self.X.square()).legendre() == 1
    }

    /// For a point in the good coset, returns true if the point is in
    /// the prime order subgroup (as opposed to its translation by `A`).
    /// The test is that `a*(Y + s*Z)*(Z - Y)` is a square; for the
    /// neutral point, that value is zero.
    pub fn has_subgroup_sign(&self) -> bool {
        if self.Y.equals(self.Z) != 0 {
            return true;
        }
        (A * (self.Y + S * self.Z) * (self.Z - self.Y)).legendre() == 1
    }

    /// Returns true if the point is in the prime order subgroup.
    pub fn is_in_subgroup(&self) -> bool {
        !self.is_nap() && self.is_in_good_coset() && self.has_subgroup_sign()
    }

    /// Returns this point plus `A`.
    #[inline]
    pub fn add_order2(&self) -> Self {
        Self { X: -self.X, Y: -self.Y, T: self.T, Z: self.Z }
    }

    /// Given a point of the good coset, returns whichever of `P` and
    /// `P + A` lies in the prime order subgroup. NaP is unchanged.
    pub fn normalize_subgroup(&self) -> Self {
        if self.is_nap() || self.has_subgroup_sign() {
            *self
        } else {
            self.add_order2()
        }
    }

    #[inline]
    pub fn neg(&self) -> Self {
        Self { X: -self.X, Y: self.Y, T: -self.T, Z: self.Z }
    }

    /// Equality modulo `A`: true if both points are valid and their
    /// difference is `N` or `A`.
    #[inline]
    pub fn equals_mod_a(&self, rhs: &Self) -> bool {
        if self.is_nap() || rhs.is_nap() {
            return false;
        }
        (self.X * rhs.Y).equals(self.Y * rhs.X) != 0
    }

    /// Exact equality of curve points; false if either is a NaP.
    pub fn equals_exact(&self, rhs: &Self) -> bool {
        if !self.equals_mod_a(rhs) {
            return false;
        }
        let r1 = (self.Y * rhs.Z).equals(rhs.Y * self.Z);
        let r2 = (self.X * rhs.T).equals(self.T * rhs.X);
        (r1 & r2) != 0
    }

    /// Unified addition. When the difference of the operands is a point
    /// at infinity, the main formula yields `F = 0` and the dual
    /// formula is used instead.
    pub fn add(&self, rhs: &Self) -> Efgh {
        let (X1, Y1, T1, Z1) = (&self.X, &self.Y, &self.T, &self.Z);
        let (X2, Y2, T2, Z2) = (&rhs.X, &rhs.Y, &rhs.T, &rhs.Z);

        let aa = X1 * X2;
        let bb = Y1 * Y2;
        let cc = D * T1 * T2;
        let dd = Z1 * Z2;
        let E = (X1 + Y1) * (X2 + Y2) - aa - bb;
        let F = dd - cc;
        let G = dd + cc;
        let H = bb - A * aa;
        if F.iszero() == 0 || self.is_nap() || rhs.is_nap() {
            return Efgh { E, F, G, H };
        }

        let tz = T1 * Z2;
        let zt = Z1 * T2;
        Efgh {
            E: tz + zt,
            F: X1 * Y2 - Y1 * X2,
            G: bb + A * aa,
            H: tz - zt,
        }
    }

    #[inline]
    pub fn sub(&self, rhs: &Self) -> Efgh {
        self.add(&rhs.neg())
    }

    /// Doubling. There is no exceptional case for rational points.
    pub fn double(&self) -> Efgh {
        let xx = self.X.square();
        let yy = self.Y.square();
        let zz2 = self.Z.square().mul2();
        let axx = A * xx;
        let E = (self.X + self.Y).square() - xx - yy;
        let G = axx + yy;
        let F = G - zz2;
        let H = axx - yy;
        Efgh { E, F, G, H }
    }

    /// The degree-2 endomorphism:
    ///   psi(x, y) = (alpha*x*(d*y^2 - a)/y, (s - y^2)/((s - 2)*y^2 + 1))
    /// Its kernel is `{N, A}`. Points at infinity yield a NaP.
    pub fn endo(&self) -> Efgh {
        let yy = self.Y.square();
        let zz = self.Z.square();
        Efgh {
            E: ALPHA * self.X * (D * yy - A * zz),
            F: S_MINUS_2 * yy + zz,
            G: self.Y * zz,
            H: S * zz - yy,
        }
    }

    /// The endomorphism, extended to points at infinity (which are
    /// mapped to `A`).
    pub fn endo_full_curve(&self) -> Efgh {
        if self.is_at_infinity() {
            Self::ORDER2.to_efgh()
        } else {
            self.endo()
        }
    }

    pub fn to_efgh(&self) -> Efgh {
        if self.Z.iszero() == 0 {
            Efgh { E: self.X, F: self.Z, G: self.Z, H: self.Y }
        } else {
            // (X:0:T:0) == (X*X : 0 : X*T : 0)
            Efgh { E: self.X, F: self.X, G: GFp::ZERO, H: self.T }
        }
    }

    /// Converts to affine coordinates. Points at infinity and NaP yield
    /// the affine NaP.
    pub fn to_axtw(&self) -> Axtw {
        let iz = self.Z.invert();
        let x = self.X * iz;
        let y = self.Y * iz;
        Axtw { x, y, t: x * y }
    }
}

impl Axtw {

    pub const NEUTRAL: Self = Self {
        x: GFp::ZERO, y: GFp::ONE, t: GFp::ZERO,
    };

    pub const NAP: Self = Self {
        x: GFp::ZERO, y: GFp::ZERO, t: GFp::ZERO,
    };

    #[inline]
    pub fn is_nap(&self) -> bool {
        (self.x.iszero() & self.y.iszero()) != 0
    }

    #[inline]
    pub fn to_xtw(&self) -> Xtw {
        Xtw { X: self.x, Y: self.y, T: self.t, Z: GFp::ONE }
    }
}

impl Efgh {

    pub const NAP: Self = Self {
        E: GFp::ZERO, F: GFp::ZERO, G: GFp::ZERO, H: GFp::ZERO,
    };

    #[inline]
    pub fn to_xtw(&self) -> Xtw {
        let X = self.E * self.F;
        let Y = self.G * self.H;
        if (X.iszero() & Y.iszero()) != 0 {
            return Xtw::NAP;
        }
        Xtw { X, Y, T: self.E * self.H, Z: self.F * self.G }
    }

    #[inline]
    pub fn is_nap(&self) -> bool {
        ((self.E * self.F).iszero() & (self.G * self.H).iszero()) != 0
    }

    /// Returns the same point with all NaP patterns replaced by the
    /// canonical all-zero NaP.
    #[inline]
    pub fn normalize_nap(&self) -> Self {
        if self.is_nap() { Self::NAP } else { *self }
    }

    #[inline]
    pub fn neg(&self) -> Self {
        Self { E: -self.E, F: self.F, G: self.G, H: self.H }
    }
}

#[cfg(test)]
mod tests {

    use super::{Xtw, Efgh};
    use crate::field::GFp;
    use crate::bandersnatch::params::{GEN_X, GEN_Y, GEN_T};

    fn gen() -> Xtw {
        Xtw { X: GEN_X, Y: GEN_Y, T: GEN_T, Z: GFp::ONE }
    }

    #[test]
    fn special_points() {
        let n = Xtw::NEUTRAL;
        let a = Xtw::ORDER2;
        let e1 = Xtw::INFINITY1;
        let e2 = Xtw::INFINITY2;
        for p in [n, a, e1, e2] {
            assert!(p.is_on_curve());
            assert!(!p.is_nap());
            // All 2-torsion points double to the neutral.
            assert!(p.double().to_xtw().equals_exact(&n));
            assert!(p.add(&p).to_xtw().equals_exact(&n));
        }
        assert!(n.is_in_good_coset() && a.is_in_good_coset());
        assert!(!e1.is_in_good_coset() && !e2.is_in_good_coset());
        assert!(n.is_in_subgroup() && !a.is_in_subgroup());
        assert!(e1.is_at_infinity() && !a.is_at_infinity());
        assert!(e1.add(&e2).to_xtw().equals_exact(&a));
        assert!(e1.add(&a).to_xtw().equals_exact(&e2));
        assert!(e1.equals_mod_a(&e2) && !e1.equals_exact(&e2));
        assert!(n.equals_mod_a(&a) && !n.equals_exact(&a));

        let nap = Xtw::NAP;
        assert!(nap.is_nap() && !nap.is_on_curve() && !nap.is_at_infinity());
        assert!(!nap.equals_mod_a(&nap));
        assert!(nap.double().to_xtw().is_nap());
        assert!(nap.add(&n).to_xtw().is_nap());
        assert!(gen().add(&nap).to_xtw().is_nap());
        assert!(nap.endo().to_xtw().is_nap());
        assert!(Efgh::NAP.is_nap());
    }

    #[test]
    fn generator_coset() {
        let g = gen();
        assert!(g.is_on_curve());
        assert!(g.is_in_good_coset());
        assert!(g.has_subgroup_sign());
        assert!(!g.add_order2().has_subgroup_sign());
        assert!(g.add_order2().normalize_subgroup().equals_exact(&g));
        assert!(g.add_order2().equals_mod_a(&g));
        assert!(!g.neg().equals_mod_a(&g));
    }

    #[test]
    fn endomorphism_kernel() {
        let n = Xtw::NEUTRAL;
        assert!(n.endo().to_xtw().equals_exact(&n));
        assert!(Xtw::ORDER2.endo().to_xtw().equals_exact(&n));
        assert!(Xtw::INFINITY1.endo().to_xtw().is_nap());
        assert!(Xtw::INFINITY1.endo_full_curve().to_xtw()
            .equals_exact(&Xtw::ORDER2));
        assert!(Xtw::INFINITY2.endo_full_curve().to_xtw()
            .equals_exact(&Xtw::ORDER2));
        let g = gen();
        assert!(g.endo().to_xtw().is_on_curve());
        assert!(g.endo().to_xtw().is_in_subgroup());
    }

    #[test]
    fn difference_at_infinity() {
        let g = gen();
        let q = g.add(&Xtw::INFINITY1).to_xtw();
        assert!(q.is_on_curve());
        assert!(!q.is_in_good_coset());
        // g - q = E1 (main formula has F = 0 here).
        let d = g.sub(&q).to_xtw();
        assert!(d.is_on_curve());
        assert!(d.equals_exact(&Xtw::INFINITY1));
        let s = g.add(&q).to_xtw();
        assert!(s.is_on_curve());
        assert!(s.equals_exact(&g.double().to_xtw().add(&Xtw::INFINITY1).to_xtw()));
    }
}
