//! The wide-accumulator strategy: each operation uses a native type twice
//! the operand width (`u64` for 32-bit operands, `u128` for 64-bit ones).
//!
//! Multiplication forms the exact double-width product and reduces once.
//! The geometric series `1 + r + ... + r^(n-1) mod 2^k` uses the closed
//! form `(r^n - 1) / (r - 1)`, which takes some care modulo a power of
//! two: `r - 1` is split into its largest power-of-two factor (shared with
//! the modulus) and its odd part. The odd part is inverted modulo `2^k`;
//! the power-of-two factor is divided out of the numerator directly, which
//! is only exact when the numerator `r^n - 1` is known modulo
//! `common_factor * 2^k` — a modulus *larger* than `2^k`. That numerator
//! is why 64-bit (and, for the 64-bit series, 128-bit) modular
//! exponentiation is needed even for 32-bit operands. The 128-bit
//! exponentiation comes from [`portable`](crate::portable): there is no
//! `u256` to widen into.
//!
//! See <https://www.codechef.com/wiki/tutorial-just-simple-sum> for a
//! derivation of the series calculation.

crate::macros::define_mul_mod_wide! {
    /// Compute `(a * b) mod m` via an exact 64-bit product.
    ///
    /// `m` may be any value in `[1, 2^32 - 1]`; `m = 0` is a precondition
    /// violation (checked in debug builds). `O(1)`.
    mul_mod_u32(u32 as u64)
}

crate::macros::define_mul_mod_wide! {
    /// Compute `(a * b) mod m` via an exact 128-bit product.
    ///
    /// `m` may be any value in `[1, 2^64 - 1]`; `m = 0` is a precondition
    /// violation (checked in debug builds). `O(1)`.
    mul_mod_u64(u64 as u128)
}

crate::macros::define_pow_mod! {
    /// Compute `base^n mod m` with 64-bit intermediate products.
    ///
    /// Binary exponentiation over [`mul_mod_u32`]; `O(log n)`.
    pow_mod_u32(u32) via crate::wide::mul_mod_u32
}

crate::macros::define_pow_mod! {
    /// Compute `base^n mod m` with 128-bit intermediate products.
    ///
    /// Binary exponentiation over [`mul_mod_u64`]; `O(log n)`.
    pow_mod_u64(u64) via crate::wide::mul_mod_u64
}

crate::macros::define_geom_series_closed! {
    /// Compute `1 + r + r^2 + ... + r^(n-1) mod 2^32` by the closed form.
    ///
    /// `n = 0` yields 0; `n = 1` and `r = 0` yield 1; `r = 1` yields
    /// `n mod 2^32`. The numerator `r^n - 1` is evaluated by a 64-bit
    /// [`pow_mod_u64`] under the enlarged modulus, so the whole series
    /// costs `O(log n)` 64-bit modular multiplications plus one 32-bit
    /// odd-inverse.
    geom_series_u32(u32 as u64) via crate::wide::pow_mod_u64, crate::pow::invert_odd_u32
}

crate::macros::define_geom_series_closed! {
    /// Compute `1 + r + r^2 + ... + r^(n-1) mod 2^64` by the closed form.
    ///
    /// `n = 0` yields 0; `n = 1` and `r = 0` yield 1; `r = 1` yields
    /// `n mod 2^64`. The numerator needs a modulus up to `2^127`, beyond
    /// any native product, so it is evaluated by the bit-serial
    /// [`pow_mod_u128`](crate::portable::pow_mod_u128) — the same
    /// situation the portable strategy handles one width down.
    geom_series_u64(u64 as u128) via crate::portable::pow_mod_u128, crate::pow::invert_odd_u64
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
