// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utilities for fuzz and/or property testing using `arbitrary`.
//!
//! Everything generated here is well-posed: the leading coefficient is
//! bounded away from zero and all coefficients are of moderate size, so
//! that the absolute tolerance the solvers classify with is meaningful.

use arbitrary::Unstructured;

use crate::{Cubic, Quadratic};

/// Largest magnitude of a generated root or non-leading coefficient.
pub const MAX_MAGNITUDE: f64 = 4.0;

/// A float in `[lower, upper]`.
pub fn float_in_range(
    u: &mut Unstructured<'_>,
    lower: f64,
    upper: f64,
) -> Result<f64, arbitrary::Error> {
    let bits: u32 = u.arbitrary()?;
    let t = f64::from(bits) / f64::from(u32::MAX);
    Ok(lower + t * (upper - lower))
}

/// A float in `[-MAX_MAGNITUDE, MAX_MAGNITUDE]`.
pub fn coefficient(u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    float_in_range(u, -MAX_MAGNITUDE, MAX_MAGNITUDE)
}

/// A leading coefficient: its magnitude is between 0.5 and `MAX_MAGNITUDE`.
pub fn leading_coefficient(u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    let magnitude = float_in_range(u, 0.5, MAX_MAGNITUDE)?;
    let negative: bool = u.arbitrary()?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Generate a root, but give it a chance to repeat or nearly repeat `orig`.
fn another_root(orig: f64, u: &mut Unstructured<'_>) -> Result<f64, arbitrary::Error> {
    match u.int_in_range(0..=3)? {
        0 => Ok(orig),
        1 => {
            let ulps: i32 = u.int_in_range(-32..=32)?;
            Ok(orig * (1.0 + f64::from(ulps) * f64::EPSILON))
        }
        _ => coefficient(u),
    }
}

/// Generate an arbitrary quadratic.
///
/// Half of the time the coefficients are independent; otherwise the quadratic
/// is built from its (possibly repeated) real roots.
pub fn quadratic(u: &mut Unstructured<'_>) -> Result<Quadratic<f64>, arbitrary::Error> {
    let a = leading_coefficient(u)?;
    let use_coeffs: bool = u.arbitrary()?;
    if use_coeffs {
        Ok(Quadratic::new(a, coefficient(u)?, coefficient(u)?))
    } else {
        let r0 = coefficient(u)?;
        let r1 = another_root(r0, u)?;
        Ok(Quadratic::new(a, -a * (r0 + r1), a * r0 * r1))
    }
}

/// Generate an arbitrary cubic.
///
/// Half of the time the coefficients are independent; otherwise the cubic is
/// built from planted roots, as in [`cubic_with_real_roots`].
pub fn cubic(u: &mut Unstructured<'_>) -> Result<Cubic<f64>, arbitrary::Error> {
    let use_coeffs: bool = u.arbitrary()?;
    if use_coeffs {
        let a = leading_coefficient(u)?;
        Ok(Cubic::new(a, coefficient(u)?, coefficient(u)?, coefficient(u)?))
    } else {
        Ok(cubic_with_real_roots(u)?.0)
    }
}

/// Generate a cubic with three real roots, with a bias towards roots being
/// repeated or almost repeated.
///
/// Returns the cubic along with its roots.
pub fn cubic_with_real_roots(
    u: &mut Unstructured<'_>,
) -> Result<(Cubic<f64>, [f64; 3]), arbitrary::Error> {
    let a = leading_coefficient(u)?;
    let r0 = coefficient(u)?;
    let r1 = another_root(r0, u)?;
    let r2 = another_root(r1, u)?;
    let cubic = Cubic::new(
        a,
        -a * (r0 + r1 + r2),
        a * (r0 * r1 + r0 * r2 + r1 * r2),
        -a * r0 * r1 * r2,
    );
    Ok((cubic, [r0, r1, r2]))
}
