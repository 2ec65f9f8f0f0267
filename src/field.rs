//! Finite fields.
//!
//! This module defines the two fields used by the Bandersnatch curve,
//! as specializations of the backend-provided `ModInt256` type:
//!
//!  - `GFp`: integers modulo the prime
//!    `p = 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001`
//!    (the scalar field of BLS12-381), over which the curve is defined.
//!
//!  - `Scalar`: integers modulo the prime
//!    `r = 0x1cfb69d4ca675f520cce760202687600ff8f87007419047174fd06b52876e7e1`
//!    which is the order of the prime order subgroup of the curve.

pub use crate::backend::ModInt256;

/// Base field of the curve.
pub type GFp = ModInt256<0xFFFFFFFF00000001, 0x53BDA402FFFE5BFE,
                         0x3339D80809A1D805, 0x73EDA753299D7D48>;

/// Integers modulo the order of the prime order subgroup.
pub type Scalar = ModInt256<0x74FD06B52876E7E1, 0xFF8F870074190471,
                            0x0CCE760202687600, 0x1CFB69D4CA675F52>;

#[cfg(test)]
mod tests {

    use super::{GFp, Scalar};
    use num_bigint::BigUint;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn moduli() {
        let p = BigUint::parse_bytes(
            b"73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
            16).unwrap();
        let r = BigUint::parse_bytes(
            b"1cfb69d4ca675f520cce760202687600ff8f87007419047174fd06b52876e7e1",
            16).unwrap();
        assert!(GFp::modulus() == p);
        assert!(Scalar::modulus() == r);
        assert!(GFp::MINUS_ONE.to_biguint() == &p - 1u32);
        assert!(Scalar::MINUS_ONE.to_biguint() == &r - 1u32);

        // Smallest non-residues.
        assert!(GFp::from_u32(2).legendre() == 1);
        assert!(GFp::from_u32(3).legendre() == 1);
        assert!(GFp::from_u32(5).legendre() == -1);
        assert!(Scalar::from_u32(7).legendre() == -1);
    }

    #[test]
    fn random_elements() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x62616E64);
        let a = GFp::random(&mut rng);
        let b = GFp::random(&mut rng);
        assert!(a.equals(b) == 0);
        assert!(a.iszero() == 0);
        let c = Scalar::random(&mut rng);
        let d = Scalar::from_bigint(&c.to_biguint().into());
        assert!(c.equals(d) == 0xFFFFFFFF);
    }
}
