// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The real scalar types the solvers are generic over.

use core::fmt::Debug;

use num_traits::Float;

/// A real floating-point scalar: implemented for `f32` and `f64`.
///
/// Besides the [`Float`] operations, this carries the handful of constants the
/// closed-form solvers need, so that generic code never has to go through a
/// fallible numeric cast.
pub trait Real: Float + Debug + Default + Send + Sync + 'static {
    /// Absolute tolerance used when classifying discriminants and the
    /// coefficients of a depressed cubic.
    ///
    /// This is `1e-10` for both `f32` and `f64`.
    const TOLERANCE: Self;

    /// `√3 / 2`, the imaginary part of the primitive cube roots of unity.
    const HALF_SQRT_3: Self;

    /// Converts a small literal into this type.
    ///
    /// Only intended for exactly representable constants like `3.0` or `27.0`.
    fn from_f64(x: f64) -> Self;
}

macro_rules! impl_real {
    ($ty:ty, $half_sqrt_3:literal, $from_f64:path) => {
        impl Real for $ty {
            const TOLERANCE: $ty = 1e-10;
            const HALF_SQRT_3: $ty = $half_sqrt_3;

            #[inline]
            fn from_f64(x: f64) -> $ty {
                $from_f64(x)
            }
        }
    };
}

#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "only used for exactly representable literals"
)]
fn narrow(x: f64) -> f32 {
    x as f32
}

impl_real!(f32, 0.866_025_4, narrow);
impl_real!(f64, 0.866_025_403_784_438_6, core::convert::identity);

/// Is `x` within [`Real::TOLERANCE`] of zero?
#[inline]
pub fn is_negligible<T: Real>(x: T) -> bool {
    x.abs() <= T::TOLERANCE
}
