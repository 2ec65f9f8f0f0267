//! Portable implementation of prime fields over 64-bit limbs.
//!
//! The `ModInt256` type implements integers modulo a prime `q` which is
//! provided as four 64-bit type parameters (low-to-high order). The
//! modulus must be lower than 2^255 and greater than 2^192. Elements are
//! kept in Montgomery representation. The following properties apply:
//!
//!  - An instance encapsulates a field element.
//!
//!  - The constant values `Self::ZERO`, `Self::ONE` and `Self::MINUS_ONE`
//!    contain the elements of value 0, 1 and -1, respectively.
//!
//!  - Usual arithmetic operators can be used on field elements (`+`, `-`,
//!    `*`, `/`, and the compound assignments `+=`, `-=`, `*=` and `/=`).
//!    Division by zero is tolerated, and yields zero (regardless of the
//!    dividend). Operators can use both the raw types, and references
//!    thereof.
//!
//!  - Function `set_square(&mut self)` squares a field element (in place).
//!    Corresponding function `square(self) -> Self` returns the result
//!    as a new instance. Sequences of multiple squarings can be performed
//!    with `xsquare(self, n: u32)`.
//!
//!  - Function `set_cond(&mut self, a: &Self, ctl: u32)` sets
//!    the instance to the value of the other instance `a` if `ctl` is
//!    equal to 0xFFFFFFFF, or leaves the instance value unmodified if
//!    `ctl` is equal to 0x00000000. Function `select(a0, a1, ctl)`
//!    returns a copy of `a0` (`ctl == 0`) or `a1` (`ctl == 0xFFFFFFFF`).
//!
//!  - Functions `half()`, `mul2()` and `mul_small()` multiply by 1/2,
//!    by 2, and by a small integer provided at runtime, respectively.
//!
//!  - Constant values can be defined with the const-qualified `w64le()`
//!    and `w64be()` functions, which take the value as four 64-bit limbs
//!    in little-endian and big-endian order, respectively. The 256-bit
//!    value is implicitly reduced modulo the field order.
//!
//!  - Conversions from `i32`, `u32`, `i64`, `u64`, `i128` and `u128`
//!    use the functions `from_i32()`, `from_u32()`, and so on. Arbitrary
//!    size integers (`num_bigint::BigInt`) are converted with
//!    `from_bigint()` (reduced modulo `q`).
//!
//!  - Function `equals(self, rhs: Self) -> u32` returns 0xFFFFFFFF
//!    if `self` and `rhs` represent the same value, or 0x00000000
//!    otherwise. Function `iszero(self) -> u32` is a specialized
//!    subcase that compares `self` with zero.
//!
//!  - Function `legendre(self) -> i32` returns the Legendre symbol of
//!    the value (0, +1 or -1). Function `sqrt(self) -> (Self, u32)`
//!    computes a square root (Tonelli-Shanks, which works for all odd
//!    prime moduli); the returned root is the one with sign +1, and
//!    the second returned value is 0xFFFFFFFF on success, 0 if the
//!    source was not a square (the returned root is then zero).
//!
//!  - Function `sign(self) -> i32` returns 0 for zero, +1 if the value,
//!    as an integer in `0..q-1`, is at most `(q-1)/2`, and -1 otherwise.
//!
//!  - Functions `encode32()` and `decode32()` convert to and from the
//!    canonical little-endian encoding over 32 bytes; `decode_reduce()`
//!    accepts an input of any length and reduces it modulo `q`.
//!
//! Carrying addition and subtraction should use u64::carrying_add()
//! and u64::borrowing_sub(), but these functions are currently only
//! experimental; the helpers below are used instead.

pub mod modint;

pub use modint::ModInt256;

// Add with carry; carry is 0 or 1.
// (x, y, c_in) -> x + y + c_in mod 2^64, c_out

#[cfg(target_arch = "x86_64")]
#[inline(always)]
#[allow(unused_unsafe)]
pub(crate) fn addcarry_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    use core::arch::x86_64::_addcarry_u64;
    unsafe {
        let mut d = 0u64;
        let cc = _addcarry_u64(c, x, y, &mut d);
        (d, cc)
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
pub(crate) const fn addcarry_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    let z = (x as u128).wrapping_add(y as u128).wrapping_add(c as u128);
    (z as u64, (z >> 64) as u8)
}

// Subtract with borrow; borrow is 0 or 1.
// (x, y, c_in) -> x - y - c_in mod 2^64, c_out

#[cfg(target_arch = "x86_64")]
#[inline(always)]
#[allow(unused_unsafe)]
pub(crate) fn subborrow_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    use core::arch::x86_64::_subborrow_u64;
    unsafe {
        let mut d = 0u64;
        let cc = _subborrow_u64(c, x, y, &mut d);
        (d, cc)
    }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
pub(crate) const fn subborrow_u64(x: u64, y: u64, c: u8) -> (u64, u8) {
    let z = (x as u128).wrapping_sub(y as u128).wrapping_sub(c as u128);
    (z as u64, (z >> 127) as u8)
}

// Compute x*y over 128 bits, returned as two 64-bit words (lo, hi)
#[inline(always)]
pub(crate) const fn umull(x: u64, y: u64) -> (u64, u64) {
    let z = (x as u128) * (y as u128);
    (z as u64, (z >> 64) as u64)
}

// Compute x*y+z over 128 bits, returned as two 64-bit words (lo, hi)
#[inline(always)]
pub(crate) const fn umull_add(x: u64, y: u64, z: u64) -> (u64, u64) {
    let t = ((x as u128) * (y as u128)).wrapping_add(z as u128);
    (t as u64, (t >> 64) as u64)
}

// Compute x*y+z1+z2 over 128 bits, returned as two 64-bit words (lo, hi)
#[inline(always)]
pub(crate) const fn umull_add2(x: u64, y: u64, z1: u64, z2: u64) -> (u64, u64) {
    let t = ((x as u128) * (y as u128))
        .wrapping_add(z1 as u128).wrapping_add(z2 as u128);
    (t as u64, (t >> 64) as u64)
}
