//! Point capabilities shared by all representations.
//!
//! Every point type implements `CurvePoint`, which provides read accessors
//! (affine coordinates, predicates, both equality notions) and the group
//! law. Operands of group operations may use any representation and any
//! flavor; the receiver decides both the representation and the flavor
//! of the result.
//!
//! Mixed flavors are handled as follows:
//!
//!  - A full-curve receiver uses the actual point denoted by a subgroup
//!    operand (the representative which is in the prime order subgroup).
//!
//!  - A subgroup receiver accepts a full-curve operand only if it lies in
//!    the prime order subgroup or in its translation by `A` (both denote
//!    the same element modulo `A`); any other operand yields a NaP.

use core::fmt::Debug;
use num_bigint::{BigInt, Sign};

use crate::field::GFp;
use crate::{Error, Result};
use super::coords::{Efgh, Xtw};
use super::xtw::PointXtw;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Full {}
    impl Sealed for super::Subgroup {}
}

/// Flavor of a point type: full curve or prime order subgroup.
pub trait Flavor: sealed::Sealed + Clone + Copy + Debug + Default + 'static {
    /// True for subgroup-only types.
    const SUBGROUP: bool;
}

/// Marker for point types that can hold any rational point of the curve,
/// including the points at infinity.
#[derive(Clone, Copy, Debug, Default)]
pub struct Full;

/// Marker for point types that hold elements of the prime order subgroup.
/// Such points are internally kept modulo the order-2 point `A`: the
/// stored coordinates may be those of `P` or of `P + A`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Subgroup;

impl Flavor for Full {
    const SUBGROUP: bool = false;
}

impl Flavor for Subgroup {
    const SUBGROUP: bool = true;
}

/// Internal coordinate system of a point type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Extended projective coordinates `(X:Y:T:Z)`.
    Xtw,
    /// Affine extended coordinates `(x, y, t)`.
    Axtw,
    /// The `(E, F, G, H)` form produced by the group law.
    Efgh,
}

/// Type tag: representation and flavor of a point type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointKind {
    XtwFull,
    XtwSubgroup,
    AxtwFull,
    AxtwSubgroup,
    EfghFull,
    EfghSubgroup,
}

impl PointKind {

    /// All point kinds.
    pub const ALL: [PointKind; 6] = [
        PointKind::XtwFull, PointKind::XtwSubgroup,
        PointKind::AxtwFull, PointKind::AxtwSubgroup,
        PointKind::EfghFull, PointKind::EfghSubgroup,
    ];

    pub const fn new(repr: Representation, subgroup: bool) -> Self {
        match (repr, subgroup) {
            (Representation::Xtw, false) => PointKind::XtwFull,
            (Representation::Xtw, true) => PointKind::XtwSubgroup,
            (Representation::Axtw, false) => PointKind::AxtwFull,
            (Representation::Axtw, true) => PointKind::AxtwSubgroup,
            (Representation::Efgh, false) => PointKind::EfghFull,
            (Representation::Efgh, true) => PointKind::EfghSubgroup,
        }
    }

    pub const fn representation(self) -> Representation {
        match self {
            PointKind::XtwFull | PointKind::XtwSubgroup => Representation::Xtw,
            PointKind::AxtwFull | PointKind::AxtwSubgroup => Representation::Axtw,
            PointKind::EfghFull | PointKind::EfghSubgroup => Representation::Efgh,
        }
    }

    pub const fn is_subgroup(self) -> bool {
        matches!(self, PointKind::XtwSubgroup
            | PointKind::AxtwSubgroup | PointKind::EfghSubgroup)
    }
}

/// Trust level of constructor inputs.
///
/// Trusted inputs skip the membership checks; providing invalid trusted
/// input is a contract violation and yields unspecified (but memory-safe)
/// points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trust {
    Trusted,
    Untrusted,
}

// Coordinates of `q`, as an operand for a receiver of flavor `F`.
pub(crate) fn operand_for<F: Flavor, Q: CurvePoint>(q: &Q) -> Xtw {
    let c = q.to_xtw();
    match (F::SUBGROUP, Q::Flavor::SUBGROUP) {
        (false, true) => c.normalize_subgroup(),
        (true, false) => {
            if c.is_nap() || !c.is_in_good_coset() {
                Xtw::NAP
            } else {
                c
            }
        }
        _ => c,
    }
}

/// Capabilities common to all point types.
///
/// The required methods give access to the raw stored coordinates; all
/// other operations are provided.
pub trait CurvePoint: Clone + Copy + Debug + Sized {

    /// Flavor (full curve or subgroup) of this type.
    type Flavor: Flavor;

    /// Type tag.
    const KIND: PointKind;

    /// Builds a point from the provided extended coordinates, which are
    /// used as is (the caller ensures that they are valid for this type,
    /// or a NaP). Points at infinity are turned into a NaP by types that
    /// cannot represent them.
    fn from_xtw(c: &Xtw) -> Self;

    /// Returns the stored point in extended coordinates. For subgroup
    /// types, this is the stored representative (`P` or `P + A`).
    fn to_xtw(&self) -> Xtw;

    /// Builds a point from `(E, F, G, H)` coordinates.
    fn from_efgh(c: &Efgh) -> Self {
        Self::from_xtw(&c.to_xtw())
    }

    /// The neutral element.
    fn neutral() -> Self {
        Self::from_xtw(&Xtw::NEUTRAL)
    }

    /// The NaP value.
    fn nap() -> Self {
        Self::from_xtw(&Xtw::NAP)
    }

    /// Returns the actual curve point in extended coordinates. For
    /// subgroup types, this selects the representative which is in the
    /// prime order subgroup.
    fn to_xtw_actual(&self) -> Xtw {
        let c = self.to_xtw();
        if Self::Flavor::SUBGROUP {
            c.normalize_subgroup()
        } else {
            c
        }
    }

    /// Converts to the canonical representation (extended coordinates,
    /// full curve). The conversion is exact.
    fn to_canonical(&self) -> PointXtw<Full> {
        PointXtw::<Full>::from_xtw(&self.to_xtw_actual())
    }

    /// Returns the affine coordinates `(x, y)` of the actual point.
    ///
    /// A NaP yields `Error::NotOnCurve`; a point at infinity yields
    /// `Error::AtInfinity`.
    fn affine(&self) -> Result<(GFp, GFp)> {
        let c = self.to_xtw_actual();
        if c.is_nap() {
            return Err(Error::NotOnCurve);
        }
        if c.is_at_infinity() {
            return Err(Error::AtInfinity);
        }
        let a = c.to_axtw();
        Ok((a.x, a.y))
    }

    /// Affine x coordinate.
    ///
    /// This function panics on a NaP or a point at infinity.
    fn x_affine(&self) -> GFp {
        match self.affine() {
            Ok((x, _)) => x,
            Err(e) => panic!("x_affine(): {}", e),
        }
    }

    /// Affine y coordinate.
    ///
    /// This function panics on a NaP or a point at infinity.
    fn y_affine(&self) -> GFp {
        match self.affine() {
            Ok((_, y)) => y,
            Err(e) => panic!("y_affine(): {}", e),
        }
    }

    fn is_nap(&self) -> bool {
        self.to_xtw().is_nap()
    }

    /// Returns true for the neutral element of the group this type
    /// represents. For subgroup types, the stored representative may be
    /// `N` or `A`.
    fn is_neutral(&self) -> bool {
        let c = self.to_xtw();
        if Self::Flavor::SUBGROUP {
            c.is_neutral_mod_a()
        } else {
            c.is_neutral()
        }
    }

    /// Returns true if the actual point is exactly `N`.
    fn is_neutral_full_curve(&self) -> bool {
        self.to_xtw_actual().is_neutral()
    }

    /// Returns true for a point at infinity (never for subgroup types).
    fn is_at_infinity(&self) -> bool {
        !Self::Flavor::SUBGROUP && self.to_xtw().is_at_infinity()
    }

    /// Returns true if the actual point is in the prime order subgroup.
    fn is_in_subgroup(&self) -> bool {
        self.to_xtw_actual().is_in_subgroup()
    }

    /// Recomputes the curve equation and, for subgroup types, coset
    /// membership. A NaP is not valid.
    fn validate(&self) -> bool {
        let c = self.to_xtw();
        if !c.is_on_curve() {
            return false;
        }
        !Self::Flavor::SUBGROUP || c.is_in_good_coset()
    }

    /// Equality as elements of the group this type represents: if either
    /// operand is a subgroup type, the comparison is modulo `A`; otherwise
    /// it is exact. A NaP is never equal to anything.
    fn is_equal<Q: CurvePoint>(&self, q: &Q) -> bool {
        if Self::Flavor::SUBGROUP || Q::Flavor::SUBGROUP {
            self.to_xtw().equals_mod_a(&q.to_xtw())
        } else {
            self.to_xtw().equals_exact(&q.to_xtw())
        }
    }

    /// Exact equality of the actual curve points. A NaP is never equal
    /// to anything.
    fn is_equal_full_curve<Q: CurvePoint>(&self, q: &Q) -> bool {
        self.to_xtw_actual().equals_exact(&q.to_xtw_actual())
    }

    /// Adds point `q` to this point.
    fn set_add<Q: CurvePoint>(&mut self, q: &Q) {
        let r = self.to_xtw().add(&operand_for::<Self::Flavor, Q>(q));
        *self = Self::from_efgh(&r);
    }

    /// Subtracts point `q` from this point.
    fn set_sub<Q: CurvePoint>(&mut self, q: &Q) {
        let r = self.to_xtw().sub(&operand_for::<Self::Flavor, Q>(q));
        *self = Self::from_efgh(&r);
    }

    fn set_double(&mut self) {
        *self = Self::from_efgh(&self.to_xtw().double());
    }

    #[inline]
    fn double(self) -> Self {
        let mut r = self;
        r.set_double();
        r
    }

    /// Doubles this point n times.
    fn set_xdouble(&mut self, n: u32) {
        let mut c = self.to_xtw();
        for _ in 0..n {
            c = c.double().to_xtw();
        }
        *self = Self::from_xtw(&c);
    }

    #[inline]
    fn xdouble(self, n: u32) -> Self {
        let mut r = self;
        r.set_xdouble(n);
        r
    }

    fn set_neg(&mut self) {
        *self = Self::from_xtw(&self.to_xtw().neg());
    }

    /// Applies the endomorphism. Points at infinity are outside the domain
    /// of this function and yield a NaP; see `set_endo_full_curve()`.
    fn set_endo(&mut self) {
        *self = Self::from_efgh(&self.to_xtw().endo());
    }

    #[inline]
    fn endo(self) -> Self {
        let mut r = self;
        r.set_endo();
        r
    }

    /// Applies the endomorphism, mapping points at infinity to `A`.
    fn set_endo_full_curve(&mut self) {
        *self = Self::from_efgh(&self.to_xtw().endo_full_curve());
    }

    #[inline]
    fn endo_full_curve(self) -> Self {
        let mut r = self;
        r.set_endo_full_curve();
        r
    }

    /// Multiplies this point by an integer (double-and-add). A NaP yields
    /// a NaP, even for a zero multiplier.
    fn set_exp_naive(&mut self, k: &BigInt) {
        if self.is_nap() {
            *self = Self::nap();
            return;
        }
        let mut base = self.to_xtw();
        if k.sign() == Sign::Minus {
            base = base.neg();
        }
        let m = k.magnitude();
        let mut r = Xtw::NEUTRAL;
        for i in (0..m.bits()).rev() {
            r = r.double().to_xtw();
            if m.bit(i) {
                r = r.add(&base).to_xtw();
            }
        }
        *self = Self::from_xtw(&r);
    }

    #[inline]
    fn exp_naive(&self, k: &BigInt) -> Self {
        let mut r = *self;
        r.set_exp_naive(k);
        r
    }
}

#[cfg(test)]
mod tests {

    use super::{CurvePoint, PointKind, Representation};
    use crate::bandersnatch::construct::PointConstruct;
    use crate::bandersnatch::{PointAxtwFull, PointEfghSubgroup, PointXtwFull};
    use num_bigint::BigInt;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn kinds() {
        for k in PointKind::ALL {
            assert!(PointKind::new(k.representation(), k.is_subgroup()) == k);
        }
        assert!(PointKind::AxtwSubgroup.is_subgroup());
        assert!(!PointKind::EfghFull.is_subgroup());
        assert!(PointKind::EfghFull.representation() == Representation::Efgh);
    }

    #[allow(non_snake_case)]
    #[test]
    fn xdouble() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for n in [0u32, 1, 2, 5, 17] {
            let P = PointAxtwFull::random(&mut rng);
            let Q = PointEfghSubgroup::random(&mut rng);
            let mut P2 = P;
            let mut Q2 = Q;
            for _ in 0..n {
                P2 = P2.double();
                Q2 = Q2.double();
            }
            assert!(P.xdouble(n).is_equal_full_curve(&P2));
            assert!(Q.xdouble(n).is_equal_full_curve(&Q2));
            let k = BigInt::from(1) << (n as usize);
            assert!(P.xdouble(n).is_equal_full_curve(&P.exp_naive(&k)));
            let mut R = Q;
            R.set_xdouble(n);
            assert!(R.is_equal(&Q2));
        }
        assert!(PointXtwFull::INFINITY1.xdouble(1).is_equal_full_curve(&PointXtwFull::NEUTRAL));
        assert!(PointXtwFull::nap().xdouble(3).is_nap());
    }
}
