use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::{BigInt, BigUint, Sign};
use rand_core::RngCore;

use super::{addcarry_u64, subborrow_u64, umull, umull_add, umull_add2};

/// Integers modulo a prime `q = M0 + M1*2^64 + M2*2^128 + M3*2^192`.
///
/// The modulus must be odd, greater than 2^192 and lower than 2^255.
#[derive(Clone, Copy, Debug)]
pub struct ModInt256<const M0: u64, const M1: u64, const M2: u64, const M3: u64>([u64; 4]);

impl<const M0: u64, const M1: u64, const M2: u64, const M3: u64> ModInt256<M0, M1, M2, M3> {

    // Modulus must be odd.
    // Top modulus word must not be zero, and must leave room for a
    // carry bit (2^192 < q < 2^255).
    #[allow(dead_code)]
    const COMPILE_TIME_CHECKS: () = Self::compile_time_checks();
    const fn compile_time_checks() {
        static_assert!((M0 & 1) != 0);
        static_assert!(M3 != 0);
        static_assert!(M3 < 0x8000000000000000);
    }

    // Modulus, in base 2^64 (low-to-high order).
    pub const MODULUS: [u64; 4] = [ M0, M1, M2, M3 ];

    // (q - 1)/2
    const QM1D2: [u64; 4] = [
        (M0 >> 1) | (M1 << 63),
        (M1 >> 1) | (M2 << 63),
        (M2 >> 1) | (M3 << 63),
        M3 >> 1,
    ];

    // q - 2 (exponent for inversion)
    const QM2: [u64; 4] = Self::make_qm2();

    pub const ZERO: ModInt256<M0, M1, M2, M3> =
        ModInt256::<M0, M1, M2, M3>([ 0, 0, 0, 0 ]);
    pub const ONE: ModInt256<M0, M1, M2, M3> =
        ModInt256::<M0, M1, M2, M3>::w64le(1, 0, 0, 0);
    pub const MINUS_ONE: ModInt256<M0, M1, M2, M3> =
        ModInt256::<M0, M1, M2, M3>::w64le(M0 - 1, M1, M2, M3);

    const M0I: u64 = Self::make_m0i(M0);
    const HMP1: Self = Self::make_hmp1();
    const R2: Self = Self::make_r2();
    const T64: Self = Self::w64le(0, 1, 0, 0);
    const T128: Self = Self::w64le(0, 0, 1, 0);

    // Tonelli-Shanks parameters: q - 1 = 2^TS_S * TS_Q with TS_Q odd;
    // TS_QP1D2 = (TS_Q + 1)/2; TS_Z = c^TS_Q for the smallest
    // non-residue c.
    const TS_S: u32 = Self::make_ts_s();
    const TS_Q: [u64; 4] = Self::make_ts_q();
    const TS_QP1D2: [u64; 4] = Self::make_ts_qp1d2();
    const TS_Z: Self = Self::make_ts_z();

    // Create an element from its four 64-bit limbs. The limbs are
    // provided in little-endian order (least significant limb first).
    // This function can be used in constant expressions; at runtime,
    // from_w64le() provides the same result and is potentially faster.
    pub const fn w64le(x0: u64, x1: u64, x2: u64, x3: u64) -> Self {
        Self::const_mmul(Self([ x0, x1, x2, x3 ]), Self::R2)
    }

    // Create an element from its four 64-bit limbs. The limbs are
    // provided in big-endian order (most significant limb first).
    pub const fn w64be(x3: u64, x2: u64, x1: u64, x0: u64) -> Self {
        Self::const_mmul(Self([ x0, x1, x2, x3 ]), Self::R2)
    }

    #[inline(always)]
    pub fn from_w64le(x0: u64, x1: u64, x2: u64, x3: u64) -> Self {
        let mut r = Self([ x0, x1, x2, x3 ]);
        r.set_mul(&Self::R2);
        r
    }

    #[inline(always)]
    pub fn from_w64be(x3: u64, x2: u64, x1: u64, x0: u64) -> Self {
        let mut r = Self([ x0, x1, x2, x3 ]);
        r.set_mul(&Self::R2);
        r
    }

    // Create an element by converting the provided integer.
    // If the source value is negative, then it is implicitly reduced
    // modulo the field order.
    #[inline(always)]
    pub fn from_i32(x: i32) -> Self {
        let mut r = Self::from_w64le(x as u64, 0, 0, 0);
        r.set_cond(&(r - Self::T64), (x >> 31) as u32);
        r
    }

    #[inline(always)]
    pub fn from_u32(x: u32) -> Self {
        Self::from_w64le(x as u64, 0, 0, 0)
    }

    #[inline(always)]
    pub fn from_i64(x: i64) -> Self {
        let mut r = Self::from_w64le(x as u64, 0, 0, 0);
        r.set_cond(&(r - Self::T64), (x >> 63) as u32);
        r
    }

    #[inline(always)]
    pub fn from_u64(x: u64) -> Self {
        Self::from_w64le(x, 0, 0, 0)
    }

    #[inline(always)]
    pub fn from_i128(x: i128) -> Self {
        let mut r = Self::from_w64le(x as u64, (x >> 64) as u64, 0, 0);
        r.set_cond(&(r - Self::T128), (x >> 127) as u32);
        r
    }

    #[inline(always)]
    pub fn from_u128(x: u128) -> Self {
        Self::from_w64le(x as u64, (x >> 64) as u64, 0, 0)
    }

    /// Converts an integer of arbitrary size and sign (reduced modulo q).
    pub fn from_bigint(x: &BigInt) -> Self {
        let (sign, bytes) = x.to_bytes_le();
        let mut r = Self::decode_reduce(&bytes);
        if sign == Sign::Minus {
            r.set_neg();
        }
        r
    }

    /// Returns the value as a nonnegative integer (in the `0..q-1` range).
    pub fn to_biguint(self) -> BigUint {
        BigUint::from_bytes_le(&self.encode32())
    }

    /// Returns the modulus as an integer.
    pub fn modulus() -> BigUint {
        let mut buf = [0u8; 32];
        for i in 0..4 {
            buf[(8 * i)..(8 * i + 8)].copy_from_slice(&Self::MODULUS[i].to_le_bytes());
        }
        BigUint::from_bytes_le(&buf)
    }

    #[inline(always)]
    fn set_add(&mut self, rhs: &Self) {
        // Since q < 2^255, the carry fits in the top limb.
        let (d0, cc) = addcarry_u64(self.0[0], rhs.0[0], 0);
        let (d1, cc) = addcarry_u64(self.0[1], rhs.0[1], cc);
        let (d2, cc) = addcarry_u64(self.0[2], rhs.0[2], cc);
        let (d3, _)  = addcarry_u64(self.0[3], rhs.0[3], cc);

        // Subtract the modulus.
        let (e0, cc) = subborrow_u64(d0, M0, 0);
        let (e1, cc) = subborrow_u64(d1, M1, cc);
        let (e2, cc) = subborrow_u64(d2, M2, cc);
        let (e3, cc) = subborrow_u64(d3, M3, cc);

        // Add back the modulus in case the result was negative.
        let w = (cc as u64).wrapping_neg();
        let (d0, cc) = addcarry_u64(e0, w & M0, 0);
        let (d1, cc) = addcarry_u64(e1, w & M1, cc);
        let (d2, cc) = addcarry_u64(e2, w & M2, cc);
        let (d3, _)  = addcarry_u64(e3, w & M3, cc);

        self.0 = [ d0, d1, d2, d3 ];
    }

    #[inline(always)]
    fn set_sub(&mut self, rhs: &Self) {
        let (d0, cc) = subborrow_u64(self.0[0], rhs.0[0], 0);
        let (d1, cc) = subborrow_u64(self.0[1], rhs.0[1], cc);
        let (d2, cc) = subborrow_u64(self.0[2], rhs.0[2], cc);
        let (d3, cc) = subborrow_u64(self.0[3], rhs.0[3], cc);

        // Add back the modulus if there was a borrow.
        let w = (cc as u64).wrapping_neg();
        let (d0, cc) = addcarry_u64(d0, w & M0, 0);
        let (d1, cc) = addcarry_u64(d1, w & M1, cc);
        let (d2, cc) = addcarry_u64(d2, w & M2, cc);
        let (d3, _)  = addcarry_u64(d3, w & M3, cc);

        self.0 = [ d0, d1, d2, d3 ];
    }

    // Negate this value (in place).
    #[inline(always)]
    pub fn set_neg(&mut self) {
        let (d0, cc) = subborrow_u64(0, self.0[0], 0);
        let (d1, cc) = subborrow_u64(0, self.0[1], cc);
        let (d2, cc) = subborrow_u64(0, self.0[2], cc);
        let (d3, cc) = subborrow_u64(0, self.0[3], cc);

        let w = (cc as u64).wrapping_neg();
        let (d0, cc) = addcarry_u64(d0, w & M0, 0);
        let (d1, cc) = addcarry_u64(d1, w & M1, cc);
        let (d2, cc) = addcarry_u64(d2, w & M2, cc);
        let (d3, _)  = addcarry_u64(d3, w & M3, cc);

        self.0 = [ d0, d1, d2, d3 ];
    }

    // Conditionally copy the provided value ('a') into self:
    //  - If ctl == 0xFFFFFFFF, then the value of 'a' is copied into self.
    //  - If ctl == 0, then the value of self is unchanged.
    // ctl MUST be equal to 0 or 0xFFFFFFFF.
    #[inline(always)]
    pub fn set_cond(&mut self, a: &Self, ctl: u32) {
        let cw = ((ctl as i32) as i64) as u64;
        self.0[0] ^= cw & (self.0[0] ^ a.0[0]);
        self.0[1] ^= cw & (self.0[1] ^ a.0[1]);
        self.0[2] ^= cw & (self.0[2] ^ a.0[2]);
        self.0[3] ^= cw & (self.0[3] ^ a.0[3]);
    }

    // Return a value equal to either a0 (if ctl == 0) or a1 (if
    // ctl == 0xFFFFFFFF). Value ctl MUST be either 0 or 0xFFFFFFFF.
    #[inline(always)]
    pub fn select(a0: &Self, a1: &Self, ctl: u32) -> Self {
        let mut r = *a0;
        r.set_cond(a1, ctl);
        r
    }

    // Montgomery reduction (division by 2^256). Input must be normalized;
    // output is normalized.
    #[inline(always)]
    fn set_montyred(&mut self) {
        let (d0, d1, d2, d3) = (self.0[0], self.0[1], self.0[2], self.0[3]);

        // At each round:
        //    d <- (d + f*m) / 2^64
        // The output of each round fits on four limbs; since the input
        // is lower than m, the final output is lower than m.
        let f = d0.wrapping_mul(Self::M0I);
        let (_, hi)  = umull_add(f, M0, d0);
        let (d0, hi) = umull_add2(f, M1, d1, hi);
        let (d1, hi) = umull_add2(f, M2, d2, hi);
        let (d2, d3) = umull_add2(f, M3, d3, hi);

        let f = d0.wrapping_mul(Self::M0I);
        let (_, hi)  = umull_add(f, M0, d0);
        let (d0, hi) = umull_add2(f, M1, d1, hi);
        let (d1, hi) = umull_add2(f, M2, d2, hi);
        let (d2, d3) = umull_add2(f, M3, d3, hi);

        let f = d0.wrapping_mul(Self::M0I);
        let (_, hi)  = umull_add(f, M0, d0);
        let (d0, hi) = umull_add2(f, M1, d1, hi);
        let (d1, hi) = umull_add2(f, M2, d2, hi);
        let (d2, d3) = umull_add2(f, M3, d3, hi);

        let f = d0.wrapping_mul(Self::M0I);
        let (_, hi)  = umull_add(f, M0, d0);
        let (d0, hi) = umull_add2(f, M1, d1, hi);
        let (d1, hi) = umull_add2(f, M2, d2, hi);
        let (d2, d3) = umull_add2(f, M3, d3, hi);

        self.0 = [ d0, d1, d2, d3 ];
    }

    // Montgomery multiplication:
    //    self <- (self * rhs) / 2^256 mod m
    // The right operand (rhs) must be normalized; the left operand
    // (self) may range up to 2^256-1. Output is normalized.
    #[inline(always)]
    fn set_mul(&mut self, rhs: &Self) {
        let (a0, a1, a2, a3) = (self.0[0], self.0[1], self.0[2], self.0[3]);
        let (b0, b1, b2, b3) = (rhs.0[0], rhs.0[1], rhs.0[2], rhs.0[3]);

        // We start with d = 0. At each round, we compute:
        //   d <- (d + aj*b + f*m) / 2^64
        // with aj being the next limb of a, and f being set to the proper
        // value that makes the division exact. If d <= 2*m-1 at the start
        // of a round, then this also holds at the end of the round. Since
        // m < 2^255, d fits on four limbs and d + aj*b on five limbs.

        let (d0, hi) = umull(a0, b0);
        let (d1, hi) = umull_add(a0, b1, hi);
        let (d2, hi) = umull_add(a0, b2, hi);
        let (d3, d4) = umull_add(a0, b3, hi);
        let f = d0.wrapping_mul(Self::M0I);
        let (_, hi)  = umull_add(f, M0, d0);
        let (d0, hi) = umull_add2(f, M1, d1, hi);
        let (d1, hi) = umull_add2(f, M2, d2, hi);
        let (d2, hi) = umull_add2(f, M3, d3, hi);
        let d3 = d4.wrapping_add(hi);

        let (d0, hi) = umull_add(a1, b0, d0);
        let (d1, hi) = umull_add2(a1, b1, d1, hi);
        let (d2, hi) = umull_add2(a1, b2, d2, hi);
        let (d3, d4) = umull_add2(a1, b3, d3, hi);
        let f = d0.wrapping_mul(Self::M0I);
        let (_, hi)  = umull_add(f, M0, d0);
        let (d0, hi) = umull_add2(f, M1, d1, hi);
        let (d1, hi) = umull_add2(f, M2, d2, hi);
        let (d2, hi) = umull_add2(f, M3, d3, hi);
        let d3 = d4.wrapping_add(hi);

        let (d0, hi) = umull_add(a2, b0, d0);
        let (d1, hi) = umull_add2(a2, b1, d1, hi);
        let (d2, hi) = umull_add2(a2, b2, d2, hi);
        let (d3, d4) = umull_add2(a2, b3, d3, hi);
        let f = d0.wrapping_mul(Self::M0I);
        let (_, hi)  = umull_add(f, M0, d0);
        let (d0, hi) = umull_add2(f, M1, d1, hi);
        let (d1, hi) = umull_add2(f, M2, d2, hi);
        let (d2, hi) = umull_add2(f, M3, d3, hi);
        let d3 = d4.wrapping_add(hi);

        let (d0, hi) = umull_add(a3, b0, d0);
        let (d1, hi) = umull_add2(a3, b1, d1, hi);
        let (d2, hi) = umull_add2(a3, b2, d2, hi);
        let (d3, d4) = umull_add2(a3, b3, d3, hi);
        let f = d0.wrapping_mul(Self::M0I);
        let (_, hi)  = umull_add(f, M0, d0);
        let (d0, hi) = umull_add2(f, M1, d1, hi);
        let (d1, hi) = umull_add2(f, M2, d2, hi);
        let (d2, hi) = umull_add2(f, M3, d3, hi);
        let d3 = d4.wrapping_add(hi);

        // Subtract m if needed.
        let (_, cc) = subborrow_u64(d0, M0, 0);
        let (_, cc) = subborrow_u64(d1, M1, cc);
        let (_, cc) = subborrow_u64(d2, M2, cc);
        let (_, cc) = subborrow_u64(d3, M3, cc);
        let w = (cc as u64).wrapping_sub(1);
        let (d0, cc) = subborrow_u64(d0, w & M0, 0);
        let (d1, cc) = subborrow_u64(d1, w & M1, cc);
        let (d2, cc) = subborrow_u64(d2, w & M2, cc);
        let (d3, _)  = subborrow_u64(d3, w & M3, cc);

        self.0 = [ d0, d1, d2, d3 ];
    }

    // Square this value (in place).
    #[inline(always)]
    pub fn set_square(&mut self) {
        let r = *self;
        self.set_mul(&r);
    }

    // Square this value.
    #[inline(always)]
    pub fn square(self) -> Self {
        let mut r = self;
        r.set_square();
        r
    }

    // Square this value n times (in place).
    #[inline]
    fn set_xsquare(&mut self, n: u32) {
        for _ in 0..n {
            self.set_square();
        }
    }

    // Square this value n times.
    #[inline(always)]
    pub fn xsquare(self, n: u32) -> Self {
        let mut r = self;
        r.set_xsquare(n);
        r
    }

    #[inline(always)]
    fn set_half(&mut self) {
        let (a0, a1, a2, a3) = (self.0[0], self.0[1], self.0[2], self.0[3]);

        let d0 = (a0 >> 1) | (a1 << 63);
        let d1 = (a1 >> 1) | (a2 << 63);
        let d2 = (a2 >> 1) | (a3 << 63);
        let d3 = a3 >> 1;
        let w = (a0 & 1).wrapping_neg();
        let (d0, cc) = addcarry_u64(d0, w & Self::HMP1.0[0], 0);
        let (d1, cc) = addcarry_u64(d1, w & Self::HMP1.0[1], cc);
        let (d2, cc) = addcarry_u64(d2, w & Self::HMP1.0[2], cc);
        let (d3, _)  = addcarry_u64(d3, w & Self::HMP1.0[3], cc);

        self.0 = [ d0, d1, d2, d3 ];
    }

    #[inline(always)]
    pub fn half(self) -> Self {
        let mut r = self;
        r.set_half();
        r
    }

    #[inline(always)]
    pub fn mul2(self) -> Self {
        let mut r = self;
        r.set_add(&self);
        r
    }

    // Multiply this value by a small integer provided at runtime.
    #[inline(always)]
    pub fn mul_small(self, x: u32) -> Self {
        self * Self::from_u32(x)
    }

    // Raise this value to the provided exponent. The exponent is public
    // and encoded over four 64-bit limbs (low-to-high order).
    fn set_modpow_pubexp(&mut self, e: &[u64; 4]) {
        // Make a 4-bit window; win[i] contains x^(i+1)
        let mut win = [Self::ZERO; 15];
        win[0] = *self;
        for i in 1..8 {
            let j = i * 2;
            win[j - 1] = win[i - 1].square();
            win[j] = win[j - 1] * win[0];
        }

        // Explore 4-bit chunks of the exponent, high to low. Skip leading
        // chunks of value 0.
        let mut z = false;
        for i in (0..4).rev() {
            let ew = e[i];
            for j in (0..16).rev() {
                if z {
                    self.set_xsquare(4);
                }
                let c = ((ew >> (j << 2)) & 0x0F) as usize;
                if c != 0 {
                    if z {
                        self.set_mul(&win[c - 1]);
                    } else {
                        z = true;
                        *self = win[c - 1];
                    }
                }
            }
        }
        if !z {
            *self = Self::ONE;
        }
    }

    /// Raises this value to a public exponent (little-endian limbs).
    #[inline(always)]
    pub fn pow(self, e: &[u64; 4]) -> Self {
        let mut r = self;
        r.set_modpow_pubexp(e);
        r
    }

    // Invert this value (in place); zero is "inverted" into zero.
    #[inline]
    fn set_invert(&mut self) {
        self.set_modpow_pubexp(&Self::QM2);
    }

    #[inline(always)]
    pub fn invert(self) -> Self {
        let mut r = self;
        r.set_invert();
        r
    }

    #[inline(always)]
    fn set_div(&mut self, y: &Self) {
        let yi = y.invert();
        self.set_mul(&yi);
    }

    // Compute the Legendre symbol on this value. Return value is:
    //   0   if this value is zero
    //  +1   if this value is a non-zero quadratic residue
    //  -1   if this value is not a quadratic residue
    pub fn legendre(self) -> i32 {
        let e = self.pow(&Self::QM1D2);
        if e.iszero() != 0 {
            0
        } else if e.equals(Self::ONE) != 0 {
            1
        } else {
            -1
        }
    }

    // Set this value to its square root. Returned value is 0xFFFFFFFF
    // if the operation succeeded (value was indeed a quadratic residue),
    // 0 otherwise (value was not a quadratic residue). In the latter case,
    // this value is set to zero as well.
    // When this operation succeeds, the returned square root is the one
    // with sign +1 (or zero).
    //
    // This operation returns unspecified results if the modulus is not
    // prime.
    fn set_sqrt(&mut self) -> u32 {
        let x = *self;
        if x.iszero() != 0 {
            return 0xFFFFFFFF;
        }

        // Tonelli-Shanks. Invariants at the start of each round:
        //   c^(2^(m-1)) = -1
        //   t^(2^(m-1)) = 1   (if x is a square)
        //   y^2 = x*t
        let mut m = Self::TS_S;
        let mut c = Self::TS_Z;
        let mut t = x.pow(&Self::TS_Q);
        let mut y = x.pow(&Self::TS_QP1D2);
        while t.equals(Self::ONE) == 0 {
            // Least i such that t^(2^i) = 1.
            let mut i = 0u32;
            let mut tt = t;
            while i < m && tt.equals(Self::ONE) == 0 {
                tt.set_square();
                i += 1;
            }
            if i >= m {
                // x is not a quadratic residue.
                *self = Self::ZERO;
                return 0;
            }
            let b = c.xsquare(m - i - 1);
            m = i;
            c = b.square();
            t *= c;
            y *= b;
        }

        // Choose the square root with sign +1.
        if y.sign() < 0 {
            y.set_neg();
        }

        // Check computed square root; clear this value on mismatch.
        let r = y.square().equals(x);
        *self = y;
        self.set_cond(&Self::ZERO, !r);
        r
    }

    #[inline(always)]
    pub fn sqrt(self) -> (Self, u32) {
        let mut x = self;
        let r = x.set_sqrt();
        (x, r)
    }

    // Return the "sign" of this value: 0 for zero, +1 if the value
    // (normalized in 0..q-1) is at most (q-1)/2, -1 otherwise.
    pub fn sign(self) -> i32 {
        if self.iszero() != 0 {
            return 0;
        }
        let mut r = self;
        r.set_montyred();
        let (_, cc) = subborrow_u64(Self::QM1D2[0], r.0[0], 0);
        let (_, cc) = subborrow_u64(Self::QM1D2[1], r.0[1], cc);
        let (_, cc) = subborrow_u64(Self::QM1D2[2], r.0[2], cc);
        let (_, cc) = subborrow_u64(Self::QM1D2[3], r.0[3], cc);
        if cc != 0 { -1 } else { 1 }
    }

    // Equality check between two elements; returned value is 0xFFFFFFFF
    // on equality, 0 otherwise.
    #[inline]
    pub fn equals(self, rhs: Self) -> u32 {
        let r = (self.0[0] ^ rhs.0[0])
              | (self.0[1] ^ rhs.0[1])
              | (self.0[2] ^ rhs.0[2])
              | (self.0[3] ^ rhs.0[3]);
        ((r | r.wrapping_neg()) >> 63).wrapping_sub(1) as u32
    }

    // Compare this value with zero; returned value is 0xFFFFFFFF if this
    // element is zero, 0 otherwise.
    #[inline]
    pub fn iszero(self) -> u32 {
        let r = self.0[0] | self.0[1] | self.0[2] | self.0[3];
        ((r | r.wrapping_neg()) >> 63).wrapping_sub(1) as u32
    }

    #[inline(always)]
    fn limbs_le(buf: &[u8]) -> [u64; 4] {
        let mut d = [0u64; 4];
        for (i, chunk) in buf.chunks_exact(8).take(4).enumerate() {
            if let Ok(w) = <[u8; 8]>::try_from(chunk) {
                d[i] = u64::from_le_bytes(w);
            }
        }
        d
    }

    // Decoding exactly 32 bytes in little-endian convention; the value is
    // implicitly reduced modulo the field order.
    #[inline]
    fn decode32_reduce(buf: &[u8]) -> Self {
        debug_assert!(buf.len() == 32);
        let mut r = Self(Self::limbs_le(buf));
        // Montgomery multiplication implies automatic reduction.
        r.set_mul(&Self::R2);
        r
    }

    // Encode this value onto exactly 32 bytes. The normalized value (in
    // the 0..m-1 range) is written in little-endian order.
    #[inline]
    pub fn encode32(self) -> [u8; 32] {
        let mut r = self;
        r.set_montyred();
        let mut d = [0u8; 32];
        d[ 0.. 8].copy_from_slice(&r.0[0].to_le_bytes());
        d[ 8..16].copy_from_slice(&r.0[1].to_le_bytes());
        d[16..24].copy_from_slice(&r.0[2].to_le_bytes());
        d[24..32].copy_from_slice(&r.0[3].to_le_bytes());
        d
    }

    // Decode a value from exactly 32 bytes. The value is interpreted in
    // little-endian convention. If the provided slice does not have length
    // exactly 32 bytes, or if the value is not strictly lower than the
    // modulus, then the decoding fails. On failure, this element is set
    // to zero, and 0 is returned; otherwise, this element is set to the
    // decoded value, and 0xFFFFFFFF is returned.
    pub fn set_decode32(&mut self, buf: &[u8]) -> u32 {
        *self = Self::ZERO;
        if buf.len() != 32 {
            return 0;
        }
        self.0 = Self::limbs_le(buf);

        // Clear the value if not canonical.
        let (_, cc) = subborrow_u64(self.0[0], M0, 0);
        let (_, cc) = subborrow_u64(self.0[1], M1, cc);
        let (_, cc) = subborrow_u64(self.0[2], M2, cc);
        let (_, cc) = subborrow_u64(self.0[3], M3, cc);
        let cc = (cc as u64).wrapping_neg();
        self.0[0] &= cc;
        self.0[1] &= cc;
        self.0[2] &= cc;
        self.0[3] &= cc;

        self.set_mul(&Self::R2);
        cc as u32
    }

    #[inline]
    pub fn decode32(buf: &[u8]) -> (Self, u32) {
        let mut r = Self::ZERO;
        let cc = r.set_decode32(buf);
        (r, cc)
    }

    // Decode a field element from exactly 32 bytes; `None` is returned
    // if the length is wrong or the value is not canonical.
    #[inline]
    pub fn decode(buf: &[u8]) -> Option<Self> {
        let (r, cc) = Self::decode32(buf);
        if cc != 0 {
            Some(r)
        } else {
            None
        }
    }

    // Decode an element from some bytes. The bytes are interpreted in
    // unsigned little-endian convention, and the resulting integer is
    // reduced modulo m. This process never fails.
    pub fn set_decode_reduce(&mut self, buf: &[u8]) {
        *self = Self::ZERO;
        let mut n = buf.len();
        if n == 0 {
            return;
        }
        if (n & 31) != 0 {
            let k = n & !(31 as usize);
            let mut tmp = [0u8; 32];
            tmp[..(n - k)].copy_from_slice(&buf[k..]);
            n = k;
            *self = Self::decode32_reduce(&tmp);
        } else {
            n -= 32;
            *self = Self::decode32_reduce(&buf[n..]);
        }

        while n > 0 {
            n -= 32;
            let d = Self::decode32_reduce(&buf[n..n + 32]);
            self.set_mul(&Self::R2);
            self.set_add(&d);
        }
    }

    #[inline(always)]
    pub fn decode_reduce(buf: &[u8]) -> Self {
        let mut r = Self::ZERO;
        r.set_decode_reduce(buf);
        r
    }

    /// Samples a uniform field element (up to a negligible bias).
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut buf = [0u8; 48];
        rng.fill_bytes(&mut buf);
        Self::decode_reduce(&buf)
    }

    // Given m0 (odd), compute -1/m0 mod 2^64.
    const fn make_m0i(m0: u64) -> u64 {
        let y = 2u64.wrapping_sub(m0);
        let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(m0)));
        let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(m0)));
        let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(m0)));
        let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(m0)));
        let y = y.wrapping_mul(2u64.wrapping_sub(y.wrapping_mul(m0)));
        y.wrapping_neg()
    }

    // Custom add-with-carry, for const contexts.
    const fn adc(x: u64, y: u64, cc: u64) -> (u64, u64) {
        let z = (x as u128)
            .wrapping_add(y as u128)
            .wrapping_add(cc as u128);
        (z as u64, (z >> 64) as u64)
    }

    // Custom subtract-with-borrow, for const contexts.
    const fn sbb(x: u64, y: u64, cc: u64) -> (u64, u64) {
        let z = (x as u128)
            .wrapping_sub(y as u128)
            .wrapping_sub(cc as u128);
        (z as u64, (z >> 127) as u64)
    }

    // Compute (m+1)/2.
    const fn make_hmp1() -> Self {
        let d0 = (M0 >> 1) | (M1 << 63);
        let d1 = (M1 >> 1) | (M2 << 63);
        let d2 = (M2 >> 1) | (M3 << 63);
        let d3 = M3 >> 1;
        let (d0, cc) = Self::adc(d0, 1, 0);
        let (d1, cc) = Self::adc(d1, 0, cc);
        let (d2, cc) = Self::adc(d2, 0, cc);
        let d3 = d3.wrapping_add(cc);

        Self([ d0, d1, d2, d3 ])
    }

    // Compute m-2.
    const fn make_qm2() -> [u64; 4] {
        let (d0, cc) = Self::sbb(M0, 2, 0);
        let (d1, cc) = Self::sbb(M1, 0, cc);
        let (d2, cc) = Self::sbb(M2, 0, cc);
        let (d3, _)  = Self::sbb(M3, 0, cc);
        [ d0, d1, d2, d3 ]
    }

    // Montgomery multiplication of a[] by b[] for constant contexts.
    // Value b must be lower than m; value a may be arbitrary (up to
    // 2^256-1). Returned value is a*b/2^256 mod m, fully reduced.
    const fn const_mmul(a: Self, b: Self) -> Self {

        // Compute x*y + a + b, returned over two words (lo, hi).
        const fn umaal(x: u64, y: u64, a: u64, b: u64) -> (u64, u64) {
            let z = (x as u128) * (y as u128) + (a as u128) + (b as u128);
            (z as u64, (z >> 64) as u64)
        }

        let m0i = Self::M0I;
        let mut d = [0u64; 5];
        let mut j = 0;
        while j < 4 {
            // d <- (d + aj*b + f*m) / 2^64; output is at most 2*m-1.
            let aj = a.0[j];
            let (d0, hi) = umaal(aj, b.0[0], d[0], 0);
            let (d1, hi) = umaal(aj, b.0[1], d[1], hi);
            let (d2, hi) = umaal(aj, b.0[2], d[2], hi);
            let (d3, hi) = umaal(aj, b.0[3], d[3], hi);
            let (d4, d5) = Self::adc(d[4], hi, 0);
            let f = d0.wrapping_mul(m0i);
            let (_, hi)  = umaal(f, M0, d0, 0);
            let (e0, hi) = umaal(f, M1, d1, hi);
            let (e1, hi) = umaal(f, M2, d2, hi);
            let (e2, hi) = umaal(f, M3, d3, hi);
            let (e3, cc) = Self::adc(d4, hi, 0);
            let (e4, _)  = Self::adc(d5, 0, cc);
            d = [ e0, e1, e2, e3, e4 ];
            j += 1;
        }
        Self(Self::const_mred1(d[0], d[1], d[2], d[3], d[4]))
    }

    // Given d = d0..d4 of value at most 2*m-1, return d mod m
    // (i.e. subtract m once if needed).
    const fn const_mred1(a0: u64, a1: u64, a2: u64, a3: u64, a4: u64)
        -> [u64; 4]
    {
        // If the input was less than m, then the top word (e4) will
        // be -1 after subtraction; we use it to select the result.
        let (e0, cc) = Self::sbb(a0, M0, 0);
        let (e1, cc) = Self::sbb(a1, M1, cc);
        let (e2, cc) = Self::sbb(a2, M2, cc);
        let (e3, cc) = Self::sbb(a3, M3, cc);
        let e4 = a4.wrapping_sub(cc);

        [ e0 ^ (e4 & (e0 ^ a0)),
          e1 ^ (e4 & (e1 ^ a1)),
          e2 ^ (e4 & (e2 ^ a2)),
          e3 ^ (e4 & (e3 ^ a3)) ]
    }

    // Compute R2 = 2^512 mod m (compile-time).
    const fn make_r2() -> Self {
        // Given a (modulo m), return 2*a mod m.
        const fn mdbl<const M0: u64, const M1: u64,
                      const M2: u64, const M3: u64>(a: [u64; 4]) -> [u64; 4]
        {
            let d0 = a[0] << 1;
            let d1 = (a[0] >> 63) | (a[1] << 1);
            let d2 = (a[1] >> 63) | (a[2] << 1);
            let d3 = (a[2] >> 63) | (a[3] << 1);
            let d4 = a[3] >> 63;
            ModInt256::<M0, M1, M2, M3>::const_mred1(d0, d1, d2, d3, d4)
        }

        // Since m3 != 0, we know that 2^192 < m. We double 2^192 until
        // we get 2^257 mod m, which is the Montgomery representation of 2.
        let mut a: [u64; 4] = [ 0, 0, 0, 1 ];
        let mut i = 0;
        while i < 65 {
            a = mdbl::<M0, M1, M2, M3>(a);
            i += 1;
        }

        // Apply 8 successive Montgomery squarings to get the Montgomery
        // representation of 2^256, i.e. the value R2.
        let mut r = Self(a);
        let mut i = 0;
        while i < 8 {
            r = Self::const_mmul(r, r);
            i += 1;
        }
        r
    }

    // Modular exponentiation (square-and-multiply) in constant contexts.
    const fn const_modpow(x: Self, e: &[u64; 4]) -> Self {
        let mut r = Self::ONE;
        let mut i = 256;
        while i > 0 {
            i -= 1;
            r = Self::const_mmul(r, r);
            if ((e[i >> 6] >> (i & 63)) & 1) != 0 {
                r = Self::const_mmul(r, x);
            }
        }
        r
    }

    const fn const_eq(x: &Self, y: &Self) -> bool {
        x.0[0] == y.0[0] && x.0[1] == y.0[1]
            && x.0[2] == y.0[2] && x.0[3] == y.0[3]
    }

    // Number of trailing zeros of m - 1.
    const fn make_ts_s() -> u32 {
        let w = [ M0 - 1, M1, M2, M3 ];
        let mut i = 0;
        while i < 4 {
            if w[i] != 0 {
                return (i as u32) * 64 + w[i].trailing_zeros();
            }
            i += 1;
        }
        0
    }

    // (m - 1) >> TS_S
    const fn make_ts_q() -> [u64; 4] {
        let w = [ M0 - 1, M1, M2, M3 ];
        let s = Self::make_ts_s() as usize;
        let (ws, bs) = (s >> 6, s & 63);
        let mut d = [0u64; 4];
        let mut i = 0;
        while i + ws < 4 {
            let lo = w[i + ws] >> bs;
            let hi = if bs != 0 && i + ws + 1 < 4 {
                w[i + ws + 1] << (64 - bs)
            } else {
                0
            };
            d[i] = lo | hi;
            i += 1;
        }
        d
    }

    // (TS_Q + 1)/2 = (TS_Q >> 1) + 1, since TS_Q is odd.
    const fn make_ts_qp1d2() -> [u64; 4] {
        let q = Self::make_ts_q();
        let d0 = (q[0] >> 1) | (q[1] << 63);
        let d1 = (q[1] >> 1) | (q[2] << 63);
        let d2 = (q[2] >> 1) | (q[3] << 63);
        let d3 = q[3] >> 1;
        let (d0, cc) = Self::adc(d0, 1, 0);
        let (d1, cc) = Self::adc(d1, 0, cc);
        let (d2, cc) = Self::adc(d2, 0, cc);
        let (d3, _)  = Self::adc(d3, 0, cc);
        [ d0, d1, d2, d3 ]
    }

    // c^TS_Q for the smallest non-residue c (Euler criterion). If no
    // non-residue is found among small integers, zero is returned (and
    // square roots will then fail).
    const fn make_ts_z() -> Self {
        let mut c = 2u64;
        while c < 32 {
            let x = Self::w64le(c, 0, 0, 0);
            let e = Self::const_modpow(x, &Self::QM1D2);
            if Self::const_eq(&e, &Self::MINUS_ONE) {
                return Self::const_modpow(x, &Self::TS_Q);
            }
            c += 1;
        }
        Self::ZERO
    }
}

// ========================================================================
// Implementations of all the traits needed to use the simple operators
// (+, *, /...) on field element instances, with or without references.

macro_rules! impl_modint_binop {
    ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $set:ident) => {
        impl<const M0: u64, const M1: u64, const M2: u64, const M3: u64>
            $trait<ModInt256<M0, M1, M2, M3>> for ModInt256<M0, M1, M2, M3>
        {
            type Output = ModInt256<M0, M1, M2, M3>;

            #[inline(always)]
            fn $fn(self, other: ModInt256<M0, M1, M2, M3>)
                -> ModInt256<M0, M1, M2, M3>
            {
                let mut r = self;
                r.$set(&other);
                r
            }
        }

        impl<const M0: u64, const M1: u64, const M2: u64, const M3: u64>
            $trait<&ModInt256<M0, M1, M2, M3>> for ModInt256<M0, M1, M2, M3>
        {
            type Output = ModInt256<M0, M1, M2, M3>;

            #[inline(always)]
            fn $fn(self, other: &ModInt256<M0, M1, M2, M3>)
                -> ModInt256<M0, M1, M2, M3>
            {
                let mut r = self;
                r.$set(other);
                r
            }
        }

        impl<const M0: u64, const M1: u64, const M2: u64, const M3: u64>
            $trait<ModInt256<M0, M1, M2, M3>> for &ModInt256<M0, M1, M2, M3>
        {
            type Output = ModInt256<M0, M1, M2, M3>;

            #[inline(always)]
            fn $fn(self, other: ModInt256<M0, M1, M2, M3>)
                -> ModInt256<M0, M1, M2, M3>
            {
                let mut r = *self;
                r.$set(&other);
                r
            }
        }

        impl<const M0: u64, const M1: u64, const M2: u64, const M3: u64>
            $trait<&ModInt256<M0, M1, M2, M3>> for &ModInt256<M0, M1, M2, M3>
        {
            type Output = ModInt256<M0, M1, M2, M3>;

            #[inline(always)]
            fn $fn(self, other: &ModInt256<M0, M1, M2, M3>)
                -> ModInt256<M0, M1, M2, M3>
            {
                let mut r = *self;
                r.$set(other);
                r
            }
        }

        impl<const M0: u64, const M1: u64, const M2: u64, const M3: u64>
            $assign_trait<ModInt256<M0, M1, M2, M3>> for ModInt256<M0, M1, M2, M3>
        {
            #[inline(always)]
            fn $assign_fn(&mut self, other: ModInt256<M0, M1, M2, M3>) {
                self.$set(&other);
            }
        }

        impl<const M0: u64, const M1: u64, const M2: u64, const M3: u64>
            $assign_trait<&ModInt256<M0, M1, M2, M3>> for ModInt256<M0, M1, M2, M3>
        {
            #[inline(always)]
            fn $assign_fn(&mut self, other: &ModInt256<M0, M1, M2, M3>) {
                self.$set(other);
            }
        }
    }
}

impl_modint_binop!(Add, add, AddAssign, add_assign, set_add);
impl_modint_binop!(Sub, sub, SubAssign, sub_assign, set_sub);
impl_modint_binop!(Mul, mul, MulAssign, mul_assign, set_mul);
impl_modint_binop!(Div, div, DivAssign, div_assign, set_div);

impl<const M0: u64, const M1: u64, const M2: u64, const M3: u64>
    Neg for ModInt256<M0, M1, M2, M3>
{
    type Output = ModInt256<M0, M1, M2, M3>;

    #[inline(always)]
    fn neg(self) -> ModInt256<M0, M1, M2, M3> {
        let mut r = self;
        r.set_neg();
        r
    }
}

impl<const M0: u64, const M1: u64, const M2: u64, const M3: u64>
    Neg for &ModInt256<M0, M1, M2, M3>
{
    type Output = ModInt256<M0, M1, M2, M3>;

    #[inline(always)]
    fn neg(self) -> ModInt256<M0, M1, M2, M3> {
        let mut r = *self;
        r.set_neg();
        r
    }
}
