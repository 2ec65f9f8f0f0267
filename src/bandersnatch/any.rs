//! Points of a type selected at runtime.
//!
//! `AnyPoint` wraps any of the six point types. Binary operations use the
//! type of the left operand for the result, with the same mixed-flavor
//! rules as the statically typed operations.

#![allow(non_snake_case)]

use num_bigint::BigInt;
use rand_core::RngCore;

use crate::field::{GFp, Scalar};
use crate::Result;
use super::axtw::{PointAxtwFull, PointAxtwSubgroup};
use super::construct::PointConstruct;
use super::efgh::{PointEfghFull, PointEfghSubgroup};
use super::endo::mul_scalar;
use super::point::{CurvePoint, PointKind, Trust};
use super::xtw::{PointXtwFull, PointXtwSubgroup};

/// A point of any type.
#[derive(Clone, Copy, Debug)]
pub enum AnyPoint {
    XtwFull(PointXtwFull),
    XtwSubgroup(PointXtwSubgroup),
    AxtwFull(PointAxtwFull),
    AxtwSubgroup(PointAxtwSubgroup),
    EfghFull(PointEfghFull),
    EfghSubgroup(PointEfghSubgroup),
}

macro_rules! dispatch {
    ($v:expr, $p:ident => $e:expr) => {
        match $v {
            AnyPoint::XtwFull($p) => $e,
            AnyPoint::XtwSubgroup($p) => $e,
            AnyPoint::AxtwFull($p) => $e,
            AnyPoint::AxtwSubgroup($p) => $e,
            AnyPoint::EfghFull($p) => $e,
            AnyPoint::EfghSubgroup($p) => $e,
        }
    };
}

macro_rules! by_kind {
    ($k:expr, $t:ident => $e:expr) => {
        match $k {
            PointKind::XtwFull => {
                type $t = PointXtwFull;
                AnyPoint::XtwFull($e)
            }
            PointKind::XtwSubgroup => {
                type $t = PointXtwSubgroup;
                AnyPoint::XtwSubgroup($e)
            }
            PointKind::AxtwFull => {
                type $t = PointAxtwFull;
                AnyPoint::AxtwFull($e)
            }
            PointKind::AxtwSubgroup => {
                type $t = PointAxtwSubgroup;
                AnyPoint::AxtwSubgroup($e)
            }
            PointKind::EfghFull => {
                type $t = PointEfghFull;
                AnyPoint::EfghFull($e)
            }
            PointKind::EfghSubgroup => {
                type $t = PointEfghSubgroup;
                AnyPoint::EfghSubgroup($e)
            }
        }
    };
}

macro_rules! impl_from_point {
    ($t:ident, $v:ident) => {
        impl From<$t> for AnyPoint {
            #[inline(always)]
            fn from(p: $t) -> AnyPoint {
                AnyPoint::$v(p)
            }
        }
    };
}

impl_from_point!(PointXtwFull, XtwFull);
impl_from_point!(PointXtwSubgroup, XtwSubgroup);
impl_from_point!(PointAxtwFull, AxtwFull);
impl_from_point!(PointAxtwSubgroup, AxtwSubgroup);
impl_from_point!(PointEfghFull, EfghFull);
impl_from_point!(PointEfghSubgroup, EfghSubgroup);

fn add_any<P: CurvePoint>(p: &P, q: &AnyPoint) -> P {
    let mut r = *p;
    dispatch!(q, qq => r.set_add(qq));
    r
}

fn sub_any<P: CurvePoint>(p: &P, q: &AnyPoint) -> P {
    let mut r = *p;
    dispatch!(q, qq => r.set_sub(qq));
    r
}

impl AnyPoint {

    pub fn kind(&self) -> PointKind {
        match self {
            AnyPoint::XtwFull(_) => PointKind::XtwFull,
            AnyPoint::XtwSubgroup(_) => PointKind::XtwSubgroup,
            AnyPoint::AxtwFull(_) => PointKind::AxtwFull,
            AnyPoint::AxtwSubgroup(_) => PointKind::AxtwSubgroup,
            AnyPoint::EfghFull(_) => PointKind::EfghFull,
            AnyPoint::EfghSubgroup(_) => PointKind::EfghSubgroup,
        }
    }

    /// The neutral element of the given type.
    pub fn neutral(kind: PointKind) -> Self {
        by_kind!(kind, T => T::neutral())
    }

    /// A NaP of the given type.
    pub fn nap(kind: PointKind) -> Self {
        by_kind!(kind, T => T::nap())
    }

    /// A random point of the given type (see `PointConstruct::random()`).
    pub fn random<R: RngCore + ?Sized>(kind: PointKind, rng: &mut R) -> Self {
        by_kind!(kind, T => T::random(rng))
    }

    /// Converts a point into the given type (see
    /// `PointConstruct::from_point()`).
    pub fn from_point<Q: CurvePoint>(kind: PointKind, q: &Q, trust: Trust)
        -> Result<Self>
    {
        Ok(by_kind!(kind, T => T::from_point(q, trust)?))
    }

    /// Converts this point into the given type.
    pub fn convert(&self, kind: PointKind, trust: Trust) -> Result<Self> {
        dispatch!(self, p => Self::from_point(kind, p, trust))
    }

    /// Decodes a point into the given type.
    pub fn decode(kind: PointKind, buf: &[u8]) -> Result<Self> {
        Ok(by_kind!(kind, T => T::decode(buf)?))
    }

    pub fn encode(&self) -> Result<[u8; 32]> {
        dispatch!(self, p => p.encode())
    }

    pub fn to_canonical(&self) -> PointXtwFull {
        dispatch!(self, p => p.to_canonical())
    }

    pub fn affine(&self) -> Result<(GFp, GFp)> {
        dispatch!(self, p => p.affine())
    }

    pub fn is_nap(&self) -> bool {
        dispatch!(self, p => p.is_nap())
    }

    pub fn is_neutral(&self) -> bool {
        dispatch!(self, p => p.is_neutral())
    }

    pub fn is_neutral_full_curve(&self) -> bool {
        dispatch!(self, p => p.is_neutral_full_curve())
    }

    pub fn is_at_infinity(&self) -> bool {
        dispatch!(self, p => p.is_at_infinity())
    }

    pub fn is_in_subgroup(&self) -> bool {
        dispatch!(self, p => p.is_in_subgroup())
    }

    pub fn validate(&self) -> bool {
        dispatch!(self, p => p.validate())
    }

    /// Equality in the sense of `CurvePoint::is_equal()`.
    pub fn is_equal(&self, q: &AnyPoint) -> bool {
        dispatch!(self, p => dispatch!(q, qq => p.is_equal(qq)))
    }

    pub fn is_equal_full_curve(&self, q: &AnyPoint) -> bool {
        dispatch!(self, p => dispatch!(q, qq => p.is_equal_full_curve(qq)))
    }

    /// Returns `self + q`, with the type of `self`.
    pub fn add(&self, q: &AnyPoint) -> AnyPoint {
        dispatch!(self, p => AnyPoint::from(add_any(p, q)))
    }

    /// Returns `self - q`, with the type of `self`.
    pub fn sub(&self, q: &AnyPoint) -> AnyPoint {
        dispatch!(self, p => AnyPoint::from(sub_any(p, q)))
    }

    pub fn double(&self) -> AnyPoint {
        dispatch!(self, p => AnyPoint::from(p.double()))
    }

    pub fn neg(&self) -> AnyPoint {
        dispatch!(self, p => AnyPoint::from(-p))
    }

    pub fn endo(&self) -> AnyPoint {
        dispatch!(self, p => AnyPoint::from(p.endo()))
    }

    pub fn endo_full_curve(&self) -> AnyPoint {
        dispatch!(self, p => AnyPoint::from(p.endo_full_curve()))
    }

    pub fn exp_naive(&self, k: &BigInt) -> AnyPoint {
        dispatch!(self, p => AnyPoint::from(p.exp_naive(k)))
    }

    /// Multiplies by a scalar (with the endomorphism for subgroup types).
    pub fn mul(&self, k: &Scalar) -> AnyPoint {
        dispatch!(self, p => AnyPoint::from(mul_scalar(p, k)))
    }
}

#[cfg(test)]
mod tests {

    use super::AnyPoint;
    use crate::Error;
    use crate::field::Scalar;
    use crate::bandersnatch::params::order;
    use crate::bandersnatch::point::{CurvePoint, PointKind, Representation, Trust};
    use crate::bandersnatch::construct::PointConstruct;
    use crate::bandersnatch::{PointXtwFull, PointXtwSubgroup};
    use num_bigint::BigInt;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    const FULL: [PointKind; 3] = [
        PointKind::XtwFull, PointKind::AxtwFull, PointKind::EfghFull,
    ];

    // Checks that r has the expected type and denotes the actual point e
    // (or is a NaP if e cannot be held by that type).
    fn check(r: &AnyPoint, kind: PointKind, e: &PointXtwFull) {
        assert!(r.kind() == kind);
        if kind.representation() == Representation::Axtw && e.is_at_infinity() {
            assert!(r.is_nap());
            return;
        }
        assert!(r.validate());
        assert!(r.to_canonical().is_equal_full_curve(e));
    }

    #[test]
    fn subgroup_consistency() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..4 {
            let P = PointXtwSubgroup::random(&mut rng);
            let Q = PointXtwSubgroup::random(&mut rng);
            let k = Scalar::random(&mut rng);
            let eS = (P + Q).to_canonical();
            let eD = (P - Q).to_canonical();
            let e2 = P.double().to_canonical();
            let eN = (-P).to_canonical();
            let eE = P.endo().to_canonical();
            let eK = (P * k).to_canonical();
            for k1 in PointKind::ALL {
                let a = AnyPoint::from_point(k1, &P, Trust::Untrusted).unwrap();
                check(&a, k1, &P.to_canonical());
                check(&a.double(), k1, &e2);
                check(&a.neg(), k1, &eN);
                check(&a.endo(), k1, &eE);
                check(&a.endo_full_curve(), k1, &eE);
                check(&a.mul(&k), k1, &eK);
                assert!(a.encode().unwrap() == P.encode().unwrap());
                for k2 in PointKind::ALL {
                    let b = AnyPoint::from_point(k2, &Q, Trust::Untrusted).unwrap();
                    check(&a.add(&b), k1, &eS);
                    check(&a.sub(&b), k1, &eD);
                    assert!(!a.is_equal(&b));

                    // Conversion commutes with the operations.
                    let c = a.convert(k2, Trust::Untrusted).unwrap();
                    assert!(c.is_equal(&a) && c.is_equal_full_curve(&a));
                    check(&c.add(&b).convert(k1, Trust::Untrusted).unwrap(), k1, &eS);
                }
            }
        }
    }

    #[test]
    fn full_curve_consistency() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        let mut pts = vec![
            PointXtwFull::NEUTRAL, PointXtwFull::ORDER2,
            PointXtwFull::INFINITY1, PointXtwFull::INFINITY2,
        ];
        for _ in 0..3 {
            let P = PointXtwFull::random(&mut rng);
            pts.push(P);
            pts.push(P + PointXtwFull::INFINITY1);
            pts.push(P + PointXtwFull::ORDER2);
        }
        let r = order();
        for P in pts.iter() {
            for k1 in FULL {
                let a = match AnyPoint::from_point(k1, P, Trust::Untrusted) {
                    Ok(a) => a,
                    Err(e) => {
                        assert!(e == Error::AtInfinity && P.is_at_infinity());
                        continue;
                    }
                };
                check(&a, k1, P);
                check(&a.double(), k1, &P.double());
                check(&a.neg(), k1, &(-P));
                check(&a.endo_full_curve(), k1, &P.endo_full_curve());
                check(&a.exp_naive(&(&r + 1)), k1, &P.exp_naive(&(&r + 1)));
                if P.is_at_infinity() {
                    assert!(a.endo().is_nap());
                } else {
                    check(&a.endo(), k1, &P.endo());
                }
                for Q in pts.iter() {
                    let eS = P + Q;
                    let eD = P - Q;
                    for k2 in FULL {
                        let b = match AnyPoint::from_point(k2, Q, Trust::Untrusted) {
                            Ok(b) => b,
                            Err(_) => continue,
                        };
                        check(&a.add(&b), k1, &eS);
                        check(&a.sub(&b), k1, &eD);
                        check(&b.add(&a), k2, &eS);
                        assert!(a.is_equal(&b) == P.is_equal(Q));
                    }
                }
            }
        }
    }

    #[test]
    fn group_axioms() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        for k1 in PointKind::ALL {
            for k2 in PointKind::ALL {
                // Operands of mixed flavors must be in the prime order
                // subgroup for both operand orders to be defined.
                let src = if k1.is_subgroup() || k2.is_subgroup() {
                    PointKind::XtwSubgroup
                } else {
                    PointKind::XtwFull
                };
                let a = AnyPoint::random(src, &mut rng)
                    .convert(k1, Trust::Untrusted).unwrap();
                let b = AnyPoint::random(src, &mut rng)
                    .convert(k2, Trust::Untrusted).unwrap();
                let c = AnyPoint::random(src, &mut rng);
                let n = AnyPoint::neutral(k2);

                // Commutativity, associativity, neutral, inverse.
                assert!(a.add(&b).is_equal(&b.add(&a)));
                assert!(a.add(&b).add(&c).is_equal(&a.add(&b.add(&c))));
                assert!(a.add(&n).is_equal_full_curve(&a));
                assert!(a.sub(&a).is_neutral_full_curve());
                assert!(a.add(&a.neg()).is_neutral());
                assert!(a.double().is_equal(&a.add(&a)));
                assert!(a.neg().neg().is_equal_full_curve(&a));
            }
        }
    }

    #[test]
    fn mixed_flavors() {
        let mut rng = ChaCha8Rng::seed_from_u64(24);
        let E1 = AnyPoint::XtwFull(PointXtwFull::INFINITY1);
        let A = AnyPoint::XtwFull(PointXtwFull::ORDER2);
        for _ in 0..5 {
            let P = AnyPoint::random(PointKind::XtwSubgroup, &mut rng);
            let Q = AnyPoint::random(PointKind::EfghSubgroup, &mut rng);
            let QF = Q.convert(PointKind::AxtwFull, Trust::Untrusted).unwrap();

            // Subgroup receiver, full-curve operand in the good coset.
            assert!(P.add(&QF).is_equal_full_curve(&P.add(&Q)));
            assert!(P.add(&QF.add(&A)).is_equal(&P.add(&Q)));
            assert!(P.add(&QF.add(&A)).is_equal_full_curve(&P.add(&Q)));

            // Subgroup receiver, operand outside of the good coset.
            let QE = QF.convert(PointKind::EfghFull, Trust::Untrusted).unwrap().add(&E1);
            assert!(!QE.is_nap());
            for k in PointKind::ALL {
                let R = P.convert(k, Trust::Untrusted).unwrap();
                let S = R.add(&QE);
                assert!(S.is_nap() == k.is_subgroup());
                assert!(R.add(&E1).is_nap() == k.is_subgroup());
            }

            // Full-curve receiver, subgroup operand stored as Q + A.
            let QA = Q.add(&A);
            assert!(QA.is_equal_full_curve(&Q));
            let F = P.convert(PointKind::XtwFull, Trust::Untrusted).unwrap();
            assert!(F.add(&QA).is_equal_full_curve(&F.add(&QF)));
            let D = F.sub(&QA);
            assert!(D.is_in_subgroup());
            assert!(D.is_equal_full_curve(&F.sub(&QF)));
        }
    }

    #[test]
    fn nap_propagation() {
        let mut rng = ChaCha8Rng::seed_from_u64(25);
        for k1 in PointKind::ALL {
            let X = AnyPoint::nap(k1);
            assert!(X.is_nap() && !X.validate());
            assert!(!X.is_equal(&X) && !X.is_equal_full_curve(&X));
            assert!(!X.is_neutral() && !X.is_at_infinity());
            assert!(X.double().is_nap());
            assert!(X.neg().is_nap());
            assert!(X.endo().is_nap());
            assert!(X.endo_full_curve().is_nap());
            assert!(X.exp_naive(&BigInt::from(0)).is_nap());
            assert!(X.mul(&Scalar::ZERO).is_nap());
            assert!(X.affine().err() == Some(Error::NotOnCurve));
            assert!(X.encode().err() == Some(Error::NotOnCurve));
            assert!(X.to_canonical().is_nap());
            assert!(X.convert(k1, Trust::Untrusted).err() == Some(Error::NotOnCurve));
            assert!(X.convert(k1, Trust::Trusted).unwrap().is_nap());
            for k2 in PointKind::ALL {
                let P = AnyPoint::random(k2, &mut rng);
                assert!(X.add(&P).is_nap());
                assert!(P.add(&X).is_nap());
                assert!(P.sub(&X).is_nap());
                assert!(!P.is_equal(&X) && !X.is_equal(&P));
                assert!(AnyPoint::nap(k2).add(&X).is_nap());
            }
        }
    }

    #[test]
    fn difference_at_infinity() {
        let mut rng = ChaCha8Rng::seed_from_u64(26);
        let E1 = PointXtwFull::INFINITY1;
        let E2 = PointXtwFull::INFINITY2;
        for _ in 0..5 {
            let g = PointXtwFull::random(&mut rng);
            let h = g + E1;
            for k1 in FULL {
                let a = AnyPoint::from_point(k1, &g, Trust::Untrusted).unwrap();
                for k2 in FULL {
                    let b = AnyPoint::from_point(k2, &h, Trust::Untrusted).unwrap();
                    check(&a.sub(&b), k1, &E1);
                    check(&b.sub(&a), k2, &E1);
                    check(&a.add(&b), k1, &(g.double() + E1));
                    let c = AnyPoint::from_point(k2, &(-h + E2), Trust::Untrusted).unwrap();
                    check(&a.add(&c), k1, &(g - h + E2));
                }
            }
        }
    }

    #[test]
    fn decode_kinds() {
        let enc = PointXtwSubgroup::BASE.encode().unwrap();
        for k in PointKind::ALL {
            let P = AnyPoint::decode(k, &enc).unwrap();
            assert!(P.kind() == k);
            assert!(P.is_in_subgroup());
            assert!(P.encode().unwrap() == enc);
            assert!(AnyPoint::decode(k, &enc[..31]).err() == Some(Error::InvalidEncoding));
        }
    }
}
