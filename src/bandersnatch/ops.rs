//! Operator overloads on point types.
//!
//! Addition and subtraction accept any combination of representations and
//! flavors; the left operand decides the type of the result. Multiplication
//! by a `Scalar` uses the endomorphism for subgroup types.

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigInt;

use crate::field::Scalar;
use super::axtw::PointAxtw;
use super::efgh::PointEfgh;
use super::endo::mul_scalar;
use super::point::{CurvePoint, Flavor};
use super::xtw::PointXtw;

macro_rules! impl_point_binop {
    ($tr:ident, $f:ident, $tra:ident, $fa:ident, $set:ident, $t1:ident, $t2:ident) => {
        impl<F: Flavor, G: Flavor> $tr<$t2<G>> for $t1<F> {
            type Output = $t1<F>;

            #[inline(always)]
            fn $f(self, other: $t2<G>) -> $t1<F> {
                let mut r = self;
                r.$set(&other);
                r
            }
        }

        impl<F: Flavor, G: Flavor> $tr<&$t2<G>> for $t1<F> {
            type Output = $t1<F>;

            #[inline(always)]
            fn $f(self, other: &$t2<G>) -> $t1<F> {
                let mut r = self;
                r.$set(other);
                r
            }
        }

        impl<F: Flavor, G: Flavor> $tr<$t2<G>> for &$t1<F> {
            type Output = $t1<F>;

            #[inline(always)]
            fn $f(self, other: $t2<G>) -> $t1<F> {
                let mut r = *self;
                r.$set(&other);
                r
            }
        }

        impl<F: Flavor, G: Flavor> $tr<&$t2<G>> for &$t1<F> {
            type Output = $t1<F>;

            #[inline(always)]
            fn $f(self, other: &$t2<G>) -> $t1<F> {
                let mut r = *self;
                r.$set(other);
                r
            }
        }

        impl<F: Flavor, G: Flavor> $tra<$t2<G>> for $t1<F> {
            #[inline(always)]
            fn $fa(&mut self, other: $t2<G>) {
                self.$set(&other);
            }
        }

        impl<F: Flavor, G: Flavor> $tra<&$t2<G>> for $t1<F> {
            #[inline(always)]
            fn $fa(&mut self, other: &$t2<G>) {
                self.$set(other);
            }
        }
    };
}

macro_rules! impl_point_addsub {
    ($t1:ident, $t2:ident) => {
        impl_point_binop!(Add, add, AddAssign, add_assign, set_add, $t1, $t2);
        impl_point_binop!(Sub, sub, SubAssign, sub_assign, set_sub, $t1, $t2);
    };
}

impl_point_addsub!(PointXtw, PointXtw);
impl_point_addsub!(PointXtw, PointAxtw);
impl_point_addsub!(PointXtw, PointEfgh);
impl_point_addsub!(PointAxtw, PointXtw);
impl_point_addsub!(PointAxtw, PointAxtw);
impl_point_addsub!(PointAxtw, PointEfgh);
impl_point_addsub!(PointEfgh, PointXtw);
impl_point_addsub!(PointEfgh, PointAxtw);
impl_point_addsub!(PointEfgh, PointEfgh);

macro_rules! impl_point_unop {
    ($t:ident) => {
        impl<F: Flavor> Neg for $t<F> {
            type Output = $t<F>;

            #[inline(always)]
            fn neg(self) -> $t<F> {
                let mut r = self;
                r.set_neg();
                r
            }
        }

        impl<F: Flavor> Neg for &$t<F> {
            type Output = $t<F>;

            #[inline(always)]
            fn neg(self) -> $t<F> {
                let mut r = *self;
                r.set_neg();
                r
            }
        }

        impl<F: Flavor> Mul<Scalar> for $t<F> {
            type Output = $t<F>;

            #[inline(always)]
            fn mul(self, other: Scalar) -> $t<F> {
                mul_scalar(&self, &other)
            }
        }

        impl<F: Flavor> Mul<&Scalar> for $t<F> {
            type Output = $t<F>;

            #[inline(always)]
            fn mul(self, other: &Scalar) -> $t<F> {
                mul_scalar(&self, other)
            }
        }

        impl<F: Flavor> Mul<Scalar> for &$t<F> {
            type Output = $t<F>;

            #[inline(always)]
            fn mul(self, other: Scalar) -> $t<F> {
                mul_scalar(self, &other)
            }
        }

        impl<F: Flavor> Mul<&Scalar> for &$t<F> {
            type Output = $t<F>;

            #[inline(always)]
            fn mul(self, other: &Scalar) -> $t<F> {
                mul_scalar(self, other)
            }
        }

        impl<F: Flavor> MulAssign<Scalar> for $t<F> {
            #[inline(always)]
            fn mul_assign(&mut self, other: Scalar) {
                *self = mul_scalar(self, &other);
            }
        }

        impl<F: Flavor> MulAssign<&Scalar> for $t<F> {
            #[inline(always)]
            fn mul_assign(&mut self, other: &Scalar) {
                *self = mul_scalar(self, other);
            }
        }

        impl<F: Flavor> Mul<$t<F>> for Scalar {
            type Output = $t<F>;

            #[inline(always)]
            fn mul(self, other: $t<F>) -> $t<F> {
                mul_scalar(&other, &self)
            }
        }

        impl<F: Flavor> Mul<&$t<F>> for Scalar {
            type Output = $t<F>;

            #[inline(always)]
            fn mul(self, other: &$t<F>) -> $t<F> {
                mul_scalar(other, &self)
            }
        }

        impl<F: Flavor> Mul<$t<F>> for &Scalar {
            type Output = $t<F>;

            #[inline(always)]
            fn mul(self, other: $t<F>) -> $t<F> {
                mul_scalar(&other, self)
            }
        }

        impl<F: Flavor> Mul<&$t<F>> for &Scalar {
            type Output = $t<F>;

            #[inline(always)]
            fn mul(self, other: &$t<F>) -> $t<F> {
                mul_scalar(other, self)
            }
        }

        impl<F: Flavor> Mul<u64> for $t<F> {
            type Output = $t<F>;

            #[inline(always)]
            fn mul(self, other: u64) -> $t<F> {
                self.exp_naive(&BigInt::from(other))
            }
        }

        impl<F: Flavor> Mul<u64> for &$t<F> {
            type Output = $t<F>;

            #[inline(always)]
            fn mul(self, other: u64) -> $t<F> {
                self.exp_naive(&BigInt::from(other))
            }
        }

        impl<F: Flavor> MulAssign<u64> for $t<F> {
            #[inline(always)]
            fn mul_assign(&mut self, other: u64) {
                self.set_exp_naive(&BigInt::from(other));
            }
        }
    };
}

impl_point_unop!(PointXtw);
impl_point_unop!(PointAxtw);
impl_point_unop!(PointEfgh);
