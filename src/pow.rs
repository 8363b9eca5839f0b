//! Exponentiation modulo `2^32` and `2^64`, i.e. with natural wraparound.
//!
//! These are strategy-independent: the modulus is the storage width itself,
//! so no accumulator wider than the operands is ever needed, and both the
//! wide and portable builds share this module. Besides jumping the
//! multiplier state of a power-of-two-modulus generator, [`pow_u32`] and
//! [`pow_u64`] are how odd values are inverted modulo `2^k`
//! ([`invert_odd_u32`], [`invert_odd_u64`]), which the closed-form
//! geometric series relies on.

crate::macros::define_pow! {
    /// Compute `base^n mod 2^32`.
    ///
    /// The result is `base^n` truncated to the low 32 bits; `n = 0` yields 1.
    /// Iterative binary exponentiation, `O(log n)` multiplications.
    pow_u32(u32)
}

crate::macros::define_pow! {
    /// Compute `base^n mod 2^64`.
    ///
    /// The result is `base^n` truncated to the low 64 bits; `n = 0` yields 1.
    /// Iterative binary exponentiation, `O(log n)` multiplications.
    pow_u64(u64)
}

crate::macros::define_invert_odd! {
    /// Compute the multiplicative inverse of an odd `x` modulo `2^32`.
    ///
    /// Raises `x` to `2^32 - 1`, which is `x^-1` by the structure of the odd
    /// residue group — 32 multiplications, no division. Passing an even `x`
    /// is a precondition violation (checked in debug builds); even values
    /// have no inverse modulo a power of two.
    invert_odd_u32(u32) via crate::pow::pow_u32
}

crate::macros::define_invert_odd! {
    /// Compute the multiplicative inverse of an odd `x` modulo `2^64`.
    ///
    /// Raises `x` to `2^64 - 1`, which is `x^-1` by the structure of the odd
    /// residue group — 64 multiplications, no division. Passing an even `x`
    /// is a precondition violation (checked in debug builds); even values
    /// have no inverse modulo a power of two.
    invert_odd_u64(u64) via crate::pow::pow_u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_modular::ModularPow;

    #[test]
    fn pow_zero_exponent() {
        for base in [0u32, 1, 2, 69069, u32::MAX] {
            assert_eq!(pow_u32(base, 0), 1);
        }
        for base in [0u64, 1, 2, 6364136223846793005, u64::MAX] {
            assert_eq!(pow_u64(base, 0), 1);
        }
    }

    #[test]
    fn pow_matches_oracle() {
        let mut rng = fastrand::Rng::with_seed(0x706f_7732_6b);
        for _ in 0..500 {
            let n = rng.u64(..);
            let base32 = rng.u32(..);
            assert_eq!(
                pow_u32(base32, n),
                (base32 as u64).powm(n, &(1u64 << 32)) as u32,
                "base={base32} n={n}",
            );
            let base64 = rng.u64(..);
            assert_eq!(
                pow_u64(base64, n),
                (base64 as u128).powm(n as u128, &(1u128 << 64)) as u64,
                "base={base64} n={n}",
            );
        }
    }

    #[test]
    fn pow_known_vectors() {
        assert_eq!(pow_u32(69069, 1000000), 3666487553);
        assert_eq!(pow_u64(6364136223846793005, 1000000000), 8183995770485401601);
    }

    #[test]
    fn invert_odd_small_values_exhaustively() {
        for x in (1u32..=1001).step_by(2) {
            assert_eq!(x.wrapping_mul(invert_odd_u32(x)), 1, "x={x}");
            let x = x as u64;
            assert_eq!(x.wrapping_mul(invert_odd_u64(x)), 1, "x={x}");
        }
    }

    #[test]
    fn invert_odd_random_values() {
        let mut rng = fastrand::Rng::with_seed(0x696e_7665_7274);
        for _ in 0..2000 {
            let x = rng.u32(..) | 1;
            assert_eq!(x.wrapping_mul(invert_odd_u32(x)), 1, "x={x}");
            let x = rng.u64(..) | 1;
            assert_eq!(x.wrapping_mul(invert_odd_u64(x)), 1, "x={x}");
        }
    }

    #[test]
    fn invert_odd_known_vectors() {
        assert_eq!(invert_odd_u32(1), 1);
        assert_eq!(invert_odd_u32(u32::MAX), u32::MAX);
        assert_eq!(invert_odd_u32(69069), 2783094533);
        assert_eq!(invert_odd_u64(6364136223846793005), 13877824140714322085);
    }
}
