//! The bit-serial strategy: every operation stays within the operand width.
//!
//! Modular multiplication cannot simply form the full product when no type
//! twice the operand width exists, so it is built from `O(k)` conditional
//! additions instead: walk the bits of `a` from least to most significant,
//! keep a doubling copy of `b`, and fold it into the result on every set
//! bit, reducing modulo `m` by a single conditional subtraction at each
//! step so that no intermediate ever leaves `[0, 2^k)`.
//!
//! The same applies one level up: there is no `u256`, so the `u128`
//! multiplication that the closed-form geometric series needs (see
//! [`wide`](crate::wide)) also lives here, instantiated from the same
//! macro.
//!
//! The geometric series `1 + r + ... + r^(n-1) mod 2^k` cannot use the
//! closed form without a wider modulus, so it pairs terms instead:
//!
//! ```text
//! 1 + r + ... + r^(n-1)
//!     = (1 + r)(1 + r^2 + r^4 + ... + (r^2)^(n/2-1)) + [n odd] r^(n-1)
//! ```
//!
//! Iterating this halves `n` each round, giving `O(log n)` time with `O(1)`
//! state and no recursion.

crate::macros::define_mul_mod_portable! {
    /// Compute `(a * b) mod m` using only 32-bit operations.
    ///
    /// `m` may be any value in `[1, 2^32 - 1]`; `m = 0` is a precondition
    /// violation (checked in debug builds). `O(32)` conditional additions.
    mul_mod_u32(u32)
}

crate::macros::define_mul_mod_portable! {
    /// Compute `(a * b) mod m` using only 64-bit operations.
    ///
    /// `m` may be any value in `[1, 2^64 - 1]`; `m = 0` is a precondition
    /// violation (checked in debug builds). `O(64)` conditional additions.
    mul_mod_u64(u64)
}

crate::macros::define_mul_mod_portable! {
    /// Compute `(a * b) mod m` using only 128-bit operations.
    ///
    /// This width exists for the 64-bit closed-form geometric series, whose
    /// numerator is taken modulo `common_factor * 2^64 > 2^64`; it is
    /// public so that the same capability is available to callers with
    /// other oversized moduli.
    mul_mod_u128(u128)
}

crate::macros::define_pow_mod! {
    /// Compute `base^n mod m` using only 32-bit operations.
    ///
    /// Binary exponentiation with every product routed through
    /// [`mul_mod_u32`]; `O(log n)` modular multiplications.
    pow_mod_u32(u32) via crate::portable::mul_mod_u32
}

crate::macros::define_pow_mod! {
    /// Compute `base^n mod m` using only 64-bit operations.
    ///
    /// Binary exponentiation with every product routed through
    /// [`mul_mod_u64`]; `O(log n)` modular multiplications.
    pow_mod_u64(u64) via crate::portable::mul_mod_u64
}

crate::macros::define_pow_mod! {
    /// Compute `base^n mod m` using only 128-bit operations.
    ///
    /// See [`mul_mod_u128`] for why this width exists.
    pow_mod_u128(u128) via crate::portable::mul_mod_u128
}

crate::macros::define_geom_series_pairing! {
    /// Compute `1 + r + r^2 + ... + r^(n-1) mod 2^32` by pairing terms.
    ///
    /// `n = 0` yields 0; `n = 1` and `r = 0` yield 1. `O(log n)` rounds,
    /// each with one wraparound exponentiation at most.
    geom_series_u32(u32) via crate::pow::pow_u32
}

crate::macros::define_geom_series_pairing! {
    /// Compute `1 + r + r^2 + ... + r^(n-1) mod 2^64` by pairing terms.
    ///
    /// `n = 0` yields 0; `n = 1` and `r = 0` yield 1. `O(log n)` rounds,
    /// each with one wraparound exponentiation at most.
    geom_series_u64(u64) via crate::pow::pow_u64
}

#[cfg(test)]
mod test32 {
    crate::macros::test_mod_ops!(u32 as u64, super::mul_mod_u32, super::pow_mod_u32);
    crate::macros::test_geom_series!(
        u32, super::geom_series_u32,
        vectors = [
            (69069, 1000000, 815480000),
            (0xFFFF_FFFF, 10, 0),
            (0xFFFF_FFFF, 11, 1),
            (0xFFFF_FFFF, 1000000, 0),
            (0xFFFF_FFFF, 1000001, 1),
            (2, 64, 4294967295),
        ]
    );
}

#[cfg(test)]
mod test64 {
    crate::macros::test_mod_ops!(u64 as u128, super::mul_mod_u64, super::pow_mod_u64);
    crate::macros::test_geom_series!(
        u64, super::geom_series_u64,
        vectors = [
            (6364136223846793005, 1000000, 7931393013735444672),
            (6364136223846793005, 1000000000, 990329299382070784),
            ((1 << 63) + 1, 5, 5),
            (u64::MAX, 10, 0),
            (u64::MAX, 11, 1),
        ]
    );
}

#[cfg(test)]
mod test128 {
    crate::macros::test_mod_ops!(u128 as u128, super::mul_mod_u128, super::pow_mod_u128);
}
