//! Curve constants.
//!
//! The curve has equation `a*x^2 + y^2 = 1 + d*x^2*y^2` over `GFp`, with
//! `a = -5`. Neither `a` nor `d` is a square, but `a/d` is; hence the
//! addition law has exceptional cases and the curve has two rational
//! points at infinity.

use num_bigint::{BigInt, BigUint, Sign};

use crate::field::{GFp, Scalar};

/// The `a` curve constant (-5).
pub const A: GFp = GFp::w64be(
    0x73EDA753299D7D48, 0x3339D80809A1D805,
    0x53BDA402FFFE5BFE, 0xFFFFFFFEFFFFFFFC);

/// The `d` curve constant.
pub const D: GFp = GFp::w64be(
    0x6389C12633C267CB, 0xC66E3BF86BE3B6D8,
    0xCB66677177E54F92, 0xB369F2F5188D58E7);

/// `s = sqrt(a/d)` (the root with sign +1; `s = 1 + sqrt(2)`).
///
/// The points at infinity are `(1:0:s:0)` and `(1:0:-s:0)` in extended
/// coordinates `(X:Y:T:Z)`.
pub const S: GFp = GFp::w64be(
    0x2123B4C7A71956A2, 0xD149CACDA650BD7D,
    0x2516918BF2636728, 0x11F0FEB1E8DAEF4D);

/// `s - 2`
pub const S_MINUS_2: GFp = GFp::w64be(
    0x2123B4C7A71956A2, 0xD149CACDA650BD7D,
    0x2516918BF2636728, 0x11F0FEB1E8DAEF4B);

/// Scaling factor in the endomorphism x-coordinate.
pub const ALPHA: GFp = GFp::w64be(
    0x07278283A3492584, 0x89BD690A9D8A06FD,
    0xCF66F83300C76715, 0xAEA37F92209AF4C4);

/// Affine x coordinate of the conventional generator.
pub const GEN_X: GFp = GFp::w64be(
    0x29C132CC2C0B34C5, 0x743711777BBE42F3,
    0x2B79C022AD998465, 0xE1E71866A252AE18);

/// Affine y coordinate of the conventional generator.
pub const GEN_Y: GFp = GFp::w64be(
    0x2A6C669EDA123E0F, 0x157D8B50BADCD586,
    0x358CAD81EEE46460, 0x5E3167B6CC974166);

/// `GEN_X*GEN_Y`
pub const GEN_T: GFp = GFp::w64be(
    0x5E61C8A110562844, 0x571F0FDC470AC5EA,
    0x53E51C121B538D00, 0xE2594F7A0D4781AB);

/// Order `r` of the prime order subgroup, as little-endian 64-bit limbs.
pub const ORDER: [u64; 4] = Scalar::MODULUS;

/// Eigenvalue of the endomorphism on the prime order subgroup
/// (`lambda^2 = -2 mod r`), big-endian 64-bit limbs.
pub const LAMBDA_W64BE: [u64; 4] = [
    0x13B4F3DC4A39A493, 0xEDF849562B38C72B,
    0xCFC49DB970A5056E, 0xD13D21408783DF05,
];

/// `lambda` as a scalar.
pub const LAMBDA: Scalar = Scalar::w64be(
    0x13B4F3DC4A39A493, 0xEDF849562B38C72B,
    0xCFC49DB970A5056E, 0xD13D21408783DF05);

/// Reduced basis of the GLV lattice `{(k1, k2) : k1 + k2*lambda = 0 mod r}`:
/// the vectors are `(N1, M1)` and `(-2*M1, N1)`.
pub const GLV_N1: u128 = 113482231691339203864511368254957623327;
pub const GLV_M1: u128 = 10741319382058138887739339959866629956;

/// Cofactor of the curve.
pub const COFACTOR: u32 = 4;

fn w64be_to_biguint(w: &[u64; 4]) -> BigUint {
    let mut buf = [0u8; 32];
    for i in 0..4 {
        buf[(8 * i)..(8 * i + 8)].copy_from_slice(&w[i].to_be_bytes());
    }
    BigUint::from_bytes_be(&buf)
}

/// Returns the prime subgroup order `r`.
pub fn order() -> BigInt {
    BigInt::from_biguint(Sign::Plus, Scalar::modulus())
}

/// Returns the curve order `4*r`.
pub fn curve_order() -> BigInt {
    order() * COFACTOR
}

/// Returns the endomorphism eigenvalue `lambda`.
pub fn lambda() -> BigInt {
    BigInt::from_biguint(Sign::Plus, w64be_to_biguint(&LAMBDA_W64BE))
}
