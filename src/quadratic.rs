// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arrayvec::ArrayVec;
use num_complex::Complex;

use crate::{Quadratic, Real};

impl<T: Real> Quadratic<T> {
    /// The discriminant `b² - 4ac`.
    pub fn discriminant(&self) -> T {
        self.b * self.b - T::from_f64(4.0) * self.a * self.c
    }

    /// Returns both roots of this quadratic, as complex numbers.
    ///
    /// With `s` the principal square root of the discriminant, the roots are
    /// `(-b + s) / 2a` followed by `(-b - s) / 2a`, always in that order. A
    /// double root is returned twice, and when the discriminant is negative
    /// the two entries are complex conjugates.
    ///
    /// # Preconditions
    ///
    /// `a` must be non-zero. This is only checked in debug builds.
    pub fn roots(&self) -> [Complex<T>; 2] {
        debug_assert!(self.a != T::zero(), "leading coefficient must be non-zero");
        let s = Complex::new(self.discriminant(), T::zero()).sqrt();
        let minus_b = Complex::new(-self.b, T::zero());
        let two_a = T::from_f64(2.0) * self.a;
        [(minus_b + s) / two_a, (minus_b - s) / two_a]
    }

    /// Returns the real roots, in the same order as [`Quadratic::roots`].
    ///
    /// This is empty when the discriminant is negative, and otherwise has both
    /// roots (so a double root is reported twice).
    pub fn real_roots(&self) -> ArrayVec<T, 2> {
        if self.discriminant() < T::zero() {
            return ArrayVec::new();
        }
        self.roots().iter().map(|r| r.re).collect()
    }
}

/// The discriminant `b² - 4ac` of the quadratic `a x² + b x + c`.
///
/// See [`Quadratic::discriminant`].
pub fn quadratic_discriminant<T: Real>(a: T, b: T, c: T) -> T {
    Quadratic::new(a, b, c).discriminant()
}

/// Both complex roots of the quadratic `a x² + b x + c`, with `a` non-zero.
///
/// See [`Quadratic::roots`] for the ordering guarantees.
pub fn quadratic_roots<T: Real>(a: T, b: T, c: T) -> [Complex<T>; 2] {
    Quadratic::new(a, b, c).roots()
}
