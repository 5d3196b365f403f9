// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form roots of quadratic and cubic equations with real coefficients.
//!
//! Quadratics are solved with the quadratic formula and cubics with Cardano's
//! formula, after reducing them to a depressed cubic `y³ + p y + q`. Roots are
//! always returned as complex numbers, in a fixed order, with repeated roots
//! repeated. Everything is generic over `f32` and `f64` (see [`Real`]).
//!
//! # Examples
//!
//! ```
//! use cardano::{cubic_real_root_count, cubic_roots, quadratic_roots};
//!
//! // x² + x + 1 has a pair of complex conjugate roots.
//! let [x0, x1] = quadratic_roots(1.0_f64, 1.0, 1.0);
//! assert_eq!(x0, x1.conj());
//! assert!(x0.im > 0.0);
//!
//! // x³ - x = x (x - 1) (x + 1)
//! let [x1, x2, x3] = cubic_roots(1.0_f64, 0.0, -1.0, 0.0);
//! assert!((x1.re - 1.0).abs() < 1e-12 && x1.im.abs() < 1e-12);
//! assert!((x2.re + 1.0).abs() < 1e-12 && x2.im.abs() < 1e-12);
//! assert!(x3.norm() < 1e-12);
//! assert_eq!(cubic_real_root_count(1.0_f64, 0.0, -1.0, 0.0), 3);
//! ```
//!
//! The same operations are available as methods on [`Quadratic`] and
//! [`Cubic`]:
//!
//! ```
//! use cardano::{Cubic, CubicRootKind};
//!
//! let c = Cubic::new(1.0_f64, -2.0, 1.0, 0.0);
//! assert_eq!(c.classify(), CubicRootKind::OneSimpleOneDoubleReal);
//! assert_eq!(c.real_roots().len(), 3);
//! ```
//!
//! # Preconditions
//!
//! The leading coefficient must be non-zero. Degenerate polynomials are not
//! detected: passing `a == 0` trips a debug assertion, and in release builds
//! the results are meaningless (typically NaN or infinite).
//!
//! # Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on [`Quadratic`] and [`Cubic`].
//! - `arbitrary`: Expose the [`arbitrary`](crate::arbitrary) module of polynomial generators,
//!   for fuzzing and property testing.
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://docs.rs/libm

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("cardano requires either the `std` or `libm` feature");

mod cubic;
mod poly;
mod quadratic;
mod real;

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;

// Only used by the benchmarks.
#[cfg(test)]
use criterion as _;

pub use num_complex;

pub use cubic::{cubic_discriminant, cubic_real_root_count, cubic_roots, CubicRootKind};
pub use poly::{Cubic, Quadratic};
pub use quadratic::{quadratic_discriminant, quadratic_roots};
pub use real::{is_negligible, Real};
