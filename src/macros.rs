// The same algorithms run at several widths (u32, u64, and u128 for the
// closed-form numerator), and making a common trait just to merge the `uN`
// inherent methods quickly gets unwieldy. Use macros instead.

macro_rules! define_mul_mod_portable {
    (
        $(#[$meta:meta])*
        $name:ident($native:ident)
    ) => {
        $(#[$meta])*
        pub const fn $name(mut a: $native, mut b: $native, m: $native) -> $native {
            debug_assert!(m != 0, "modulus must be non-zero");
            if b >= m {
                if m > $native::MAX / 2 {
                    // `b < 2m` is guaranteed here, so one subtraction reduces.
                    b -= m;
                } else {
                    b %= m;
                }
            }
            let mut result: $native = 0;
            while a != 0 {
                if a & 1 == 1 {
                    // `result + b` modulo `m` without leaving the native
                    // width: both operands are below `m`, so subtracting `m`
                    // from one of them first keeps the sum in range.
                    if b >= m - result {
                        result = result.wrapping_sub(m);
                    }
                    result = result.wrapping_add(b);
                }
                a >>= 1;

                // Double `b` modulo `m` with the same guard.
                let mut doubled = b;
                if b >= m - doubled {
                    doubled = doubled.wrapping_sub(m);
                }
                b = b.wrapping_add(doubled);
            }
            result
        }
    };
}
pub(crate) use define_mul_mod_portable;

macro_rules! define_mul_mod_wide {
    (
        $(#[$meta:meta])*
        $name:ident($native:ident as $wide:ident)
    ) => {
        $(#[$meta])*
        #[inline]
        pub const fn $name(a: $native, b: $native, m: $native) -> $native {
            debug_assert!(m != 0, "modulus must be non-zero");
            ((a as $wide * b as $wide) % m as $wide) as $native
        }
    };
}
pub(crate) use define_mul_mod_wide;

macro_rules! define_pow {
    (
        $(#[$meta:meta])*
        $name:ident($native:ident)
    ) => {
        $(#[$meta])*
        pub const fn $name(base: $native, mut n: u64) -> $native {
            let mut result: $native = 1;
            let mut square = base;
            loop {
                if n & 1 == 1 {
                    result = result.wrapping_mul(square);
                }
                n >>= 1;
                if n == 0 {
                    break;
                }
                square = square.wrapping_mul(square);
            }
            result
        }
    };
}
pub(crate) use define_pow;

macro_rules! define_invert_odd {
    (
        $(#[$meta:meta])*
        $name:ident($native:ident) via $pow:path
    ) => {
        $(#[$meta])*
        pub const fn $name(x: $native) -> $native {
            debug_assert!(x & 1 == 1, "only odd values are invertible modulo a power of two");
            // The group of odd residues modulo `2^k` has exponent `2^(k-2)`,
            // and `2^k - 1 = -1 (mod 2^(k-2))`, so `x^(2^k - 1) = x^-1`.
            $pow(x, $native::MAX as u64)
        }
    };
}
pub(crate) use define_invert_odd;

macro_rules! define_pow_mod {
    (
        $(#[$meta:meta])*
        $name:ident($native:ident) via $mul_mod:path
    ) => {
        $(#[$meta])*
        pub const fn $name(base: $native, mut n: u64, m: $native) -> $native {
            debug_assert!(m != 0, "modulus must be non-zero");
            let mut result: $native = 1;
            let mut square = base;
            loop {
                if n & 1 == 1 {
                    result = $mul_mod(result, square, m);
                }
                n >>= 1;
                if n == 0 {
                    break;
                }
                square = $mul_mod(square, square, m);
            }
            result
        }
    };
}
pub(crate) use define_pow_mod;

macro_rules! define_geom_series_pairing {
    (
        $(#[$meta:meta])*
        $name:ident($native:ident) via $pow:path
    ) => {
        $(#[$meta])*
        pub const fn $name(r: $native, mut n: u64) -> $native {
            if n == 0 {
                return 0;
            }
            let mut temp_r = r;
            let mut mult: $native = 1;
            let mut result: $native = 0;
            while n > 1 {
                if n & 1 == 1 {
                    // Odd tail term `mult * temp_r^(n-1)`.
                    result = result.wrapping_add(mult.wrapping_mul($pow(temp_r, n - 1)));
                }
                mult = mult.wrapping_mul(temp_r.wrapping_add(1));
                temp_r = temp_r.wrapping_mul(temp_r);
                n >>= 1;
            }
            result.wrapping_add(mult)
        }
    };
}
pub(crate) use define_geom_series_pairing;

macro_rules! define_geom_series_closed {
    (
        $(#[$meta:meta])*
        $name:ident($native:ident as $wide:ident) via $pow_mod_wide:path, $invert_odd:path
    ) => {
        $(#[$meta])*
        pub const fn $name(r: $native, n: u64) -> $native {
            if n == 0 {
                return 0;
            }
            if n == 1 || r == 0 {
                return 1;
            }
            if r == 1 {
                // A sum of `n` ones. The factor split below cannot represent
                // `r - 1 = 0`, so this case is answered directly.
                return n as $native;
            }
            // Split `r - 1` into the largest power of two (shared with the
            // modulus `2^k`) and the remaining odd part, which is coprime
            // with `2^k` and therefore invertible.
            let mut other_factors = r - 1;
            let mut common_factor: $native = 1;
            while other_factors & 1 == 0 {
                other_factors >>= 1;
                common_factor <<= 1;
            }
            let other_factors_inverse = $invert_odd(other_factors);
            // The numerator `r^n - 1` is needed modulo `common_factor * 2^k`
            // so that the exact division below does not lose low bits. This
            // is the step that forces double-width arithmetic.
            let modulus = (common_factor as $wide) << $native::BITS;
            let numerator = $pow_mod_wide(r as $wide, n, modulus).wrapping_sub(1);
            ((numerator / common_factor as $wide) as $native).wrapping_mul(other_factors_inverse)
        }
    };
}
pub(crate) use define_geom_series_closed;

#[cfg(test)]
macro_rules! test_mod_ops {
    ($native:ident as $wide:ident, $mul_mod:path, $pow_mod:path) => {
        use num_modular::{ModularCoreOps, ModularPow};

        const MODULI: &[$native] = &[
            1,
            2,
            3,
            5,
            64,
            251,
            12345,
            $native::MAX / 2,
            // Exercises the single-subtraction reduction branch.
            $native::MAX / 2 + 1,
            $native::MAX - 1,
            $native::MAX,
        ];

        fn values() -> impl Iterator<Item = $native> + Clone {
            [
                0,
                1,
                2,
                3,
                7,
                69069,
                (1 as $native) << ($native::BITS - 1),
                $native::MAX / 3,
                $native::MAX - 1,
                $native::MAX,
            ]
            .into_iter()
        }

        #[test]
        fn mul_mod_matches_oracle() {
            for &m in MODULI {
                for a in values() {
                    for b in values() {
                        assert_eq!($mul_mod(a, b, m), a.mulm(b, &m), "a={a} b={b} m={m}");
                    }
                }
            }

            let mut rng = fastrand::Rng::with_seed(0x6d75_6c6d_6f64 ^ $native::BITS as u64);
            for _ in 0..2000 {
                let a = rng.$native(..);
                let b = rng.$native(..);
                let m = rng.$native(1..=$native::MAX);
                assert_eq!($mul_mod(a, b, m), a.mulm(b, &m), "a={a} b={b} m={m}");
            }
        }

        #[test]
        fn pow_mod_matches_oracle() {
            let mut rng = fastrand::Rng::with_seed(0x706f_776d_6f64 ^ $native::BITS as u64);
            for _ in 0..500 {
                let base = rng.$native(..);
                let n = rng.u64(..);
                let m = rng.$native(1..=$native::MAX);
                let expected = (base as $wide).powm(n as $wide, &(m as $wide)) as $native;
                assert_eq!($pow_mod(base, n, m), expected, "base={base} n={n} m={m}");
            }
        }

        #[test]
        fn pow_mod_splits_exponents() {
            let mut rng = fastrand::Rng::with_seed(0x6164_6469 ^ $native::BITS as u64);
            for _ in 0..500 {
                let base = rng.$native(..);
                let m = rng.$native(1..=$native::MAX);
                let n1 = rng.u64(1..1 << 62);
                let n2 = rng.u64(1..1 << 62);
                assert_eq!(
                    $pow_mod(base, n1 + n2, m),
                    $mul_mod($pow_mod(base, n1, m), $pow_mod(base, n2, m), m),
                    "base={base} n1={n1} n2={n2} m={m}",
                );
            }
        }

        #[test]
        fn pow_mod_zero_exponent() {
            for base in values() {
                assert_eq!($pow_mod(base, 0, $native::MAX), 1);
            }
        }
    };
}
#[cfg(test)]
pub(crate) use test_mod_ops;

#[cfg(test)]
macro_rules! test_geom_series {
    (
        $native:ident, $geom:path,
        vectors = [$(($r:expr, $n:expr, $want:expr)),* $(,)?]
    ) => {
        #[test]
        fn geom_edge_cases() {
            for r in [0 as $native, 1, 2, 69069, $native::MAX] {
                assert_eq!($geom(r, 0), 0, "r={r}");
                assert_eq!($geom(r, 1), 1, "r={r}");
            }
            for n in [2u64, 3, 100, u64::MAX] {
                assert_eq!($geom(0, n), 1, "n={n}");
                assert_eq!($geom(1, n), n as $native, "n={n}");
            }
        }

        #[test]
        fn geom_matches_direct_summation() {
            let mut rng = fastrand::Rng::with_seed(0x6765_6f6d ^ $native::BITS as u64);
            let samples = core::iter::repeat_with(|| rng.$native(..))
                .take(20)
                .chain([0, 1, 2, 69069, $native::MAX / 2, $native::MAX - 1, $native::MAX]);
            for r in samples {
                // `sum` holds `1 + r + ... + r^(n-1)` at step `n`.
                let mut sum: $native = 0;
                for n in 0..200u64 {
                    assert_eq!($geom(r, n), sum, "r={r} n={n}");
                    sum = sum.wrapping_mul(r).wrapping_add(1);
                }
            }
        }

        #[test]
        fn geom_recurrence_at_large_n() {
            let mut rng = fastrand::Rng::with_seed(0x7265_6375_7272 ^ $native::BITS as u64);
            for _ in 0..200 {
                let r = rng.$native(..);
                let n = rng.u64(..u64::MAX);
                assert_eq!(
                    $geom(r, n + 1),
                    $geom(r, n).wrapping_mul(r).wrapping_add(1),
                    "r={r} n={n}",
                );
            }
        }

        #[test]
        fn geom_known_vectors() {
            $(
                assert_eq!($geom($r, $n), $want);
            )*
        }
    };
}
#[cfg(test)]
pub(crate) use test_geom_series;
