// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use num_complex::Complex;

use crate::Real;

/// A quadratic polynomial `a x² + b x + c`.
///
/// The leading coefficient `a` must be non-zero. This isn't checked on
/// construction, but solving a quadratic with `a == 0` is a caller error
/// (it trips a debug assertion, and produces non-finite roots otherwise).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quadratic<T> {
    /// The coefficient of `x²`.
    pub a: T,
    /// The coefficient of `x`.
    pub b: T,
    /// The constant coefficient.
    pub c: T,
}

/// A cubic polynomial `a x³ + b x² + c x + d`.
///
/// The leading coefficient `a` must be non-zero; see [`Quadratic`] for what
/// happens if it isn't.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cubic<T> {
    /// The coefficient of `x³`.
    pub a: T,
    /// The coefficient of `x²`.
    pub b: T,
    /// The coefficient of `x`.
    pub c: T,
    /// The constant coefficient.
    pub d: T,
}

impl<T: Real> Quadratic<T> {
    /// Creates a new quadratic, leading coefficient first.
    pub const fn new(a: T, b: T, c: T) -> Self {
        Quadratic { a, b, c }
    }

    /// The coefficients, leading coefficient first.
    pub fn coeffs(&self) -> [T; 3] {
        [self.a, self.b, self.c]
    }

    /// Evaluates this polynomial at a (possibly complex) point.
    pub fn eval(&self, x: Complex<T>) -> Complex<T> {
        horner(&self.coeffs(), x)
    }

    /// Returns the largest absolute value of any coefficient.
    pub fn magnitude(&self) -> T {
        magnitude(&self.coeffs())
    }

    /// Are all the coefficients finite?
    pub fn is_finite(&self) -> bool {
        self.coeffs().iter().all(|c| c.is_finite())
    }
}

impl<T: Real> Cubic<T> {
    /// Creates a new cubic, leading coefficient first.
    pub const fn new(a: T, b: T, c: T, d: T) -> Self {
        Cubic { a, b, c, d }
    }

    /// The coefficients, leading coefficient first.
    pub fn coeffs(&self) -> [T; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Evaluates this polynomial at a (possibly complex) point.
    pub fn eval(&self, x: Complex<T>) -> Complex<T> {
        horner(&self.coeffs(), x)
    }

    /// Returns the largest absolute value of any coefficient.
    pub fn magnitude(&self) -> T {
        magnitude(&self.coeffs())
    }

    /// Are all the coefficients finite?
    pub fn is_finite(&self) -> bool {
        self.coeffs().iter().all(|c| c.is_finite())
    }
}

// Coefficients are leading-first, so this walks them in order.
fn horner<T: Real>(coeffs: &[T], x: Complex<T>) -> Complex<T> {
    let mut acc = Complex::new(T::zero(), T::zero());
    for &c in coeffs {
        // It would be nice to use `mul_add` here, but it's slow on
        // architectures that don't have a dedicated instruction.
        acc = acc * x + c;
    }
    acc
}

fn magnitude<T: Real>(coeffs: &[T]) -> T {
    coeffs
        .iter()
        .fold(T::zero(), |max, c| max.max(c.abs()))
}
