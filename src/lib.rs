//! Exact modular arithmetic for jumping linear generators ahead.
//!
//! A linear congruential generator `x' = a*x + c (mod 2^k)` advanced `n`
//! steps lands on
//!
//! ```text
//! a^n * x + c * (1 + a + a^2 + ... + a^(n-1))    (mod 2^k)
//! ```
//!
//! so skipping `n` outputs without producing them needs exactly two
//! quantities: `a^n mod 2^k` and the finite geometric series of `a` modulo
//! `2^k`, both for arbitrarily large `n` in `O(log n)` time. This crate
//! provides those, plus the general-modulus multiplication and
//! exponentiation they are built from, at 32-bit and 64-bit width:
//!
//! - [`mul_mod_u32`]/[`mul_mod_u64`]: exact `(a * b) mod m` for any
//!   `m >= 1`, not only powers of two.
//! - [`pow_u32`]/[`pow_u64`]: `base^n` with natural wraparound at `2^k`.
//! - [`pow_mod_u32`]/[`pow_mod_u64`]: `base^n mod m` for any `m >= 1`.
//! - [`geom_series_u32`]/[`geom_series_u64`]:
//!   `1 + r + r^2 + ... + r^(n-1) mod 2^k` without summing `n` terms.
//! - [`invert_odd_u32`]/[`invert_odd_u64`]: inverse of an odd value modulo
//!   `2^k`, computed by exponentiation rather than division.
//!
//! Jumping the classic `Cong` generator a thousand steps in one move:
//!
//! ```
//! use jump2k::{geom_series_u32, pow_u32};
//!
//! // x' = 69069 x + 12345 (mod 2^32)
//! let (a, c) = (69069u32, 12345u32);
//!
//! let mut state = 0x3141_5926u32;
//! for _ in 0..1000 {
//!     state = state.wrapping_mul(a).wrapping_add(c);
//! }
//!
//! let jumped = pow_u32(a, 1000)
//!     .wrapping_mul(0x3141_5926)
//!     .wrapping_add(c.wrapping_mul(geom_series_u32(a, 1000)));
//! assert_eq!(jumped, state);
//! ```
//!
//! Generators with an explicit non-power-of-two modulus (multiply-with-carry
//! lag-1 in its cyclic form, for instance) jump with [`pow_mod_u32`] instead
//! of [`pow_u32`].
//!
//!
//! ## Strategies
//!
//! Every operation exists in two implementations with identical behavior:
//!
//! - [`wide`]: uses a native accumulator twice the operand width — `u64`
//!   products for 32-bit operands, `u128` products for 64-bit operands.
//! - [`portable`]: stays within the operand width, replacing wide products
//!   with bit-serial double-and-add. Useful where the doubled multiply is
//!   unavailable or prohibitive, and the only option one level up, where a
//!   `u256` would otherwise be required.
//!
//! The `wide` Cargo feature (enabled by default) selects which strategy the
//! crate-root re-exports resolve to. Both modules are always compiled and
//! public, so the strategies can be cross-checked against each other
//! regardless of the feature set.
//!
//!
//! ## Bare metal support
//!
//! This is a `#![no_std]` crate. All operations are pure, allocation-free,
//! and complete in a bounded number of steps determined by the bit-width
//! and `log2(n)`.

#![no_std]
#![warn(clippy::cargo)]

#[cfg(test)]
extern crate std;

mod macros;
pub mod portable;
pub mod pow;
pub mod wide;

pub use pow::{invert_odd_u32, invert_odd_u64, pow_u32, pow_u64};

#[cfg(feature = "wide")]
pub use wide::{
    geom_series_u32, geom_series_u64, mul_mod_u32, mul_mod_u64, pow_mod_u32, pow_mod_u64,
};

#[cfg(not(feature = "wide"))]
pub use portable::{
    geom_series_u32, geom_series_u64, mul_mod_u32, mul_mod_u64, pow_mod_u32, pow_mod_u64,
};
