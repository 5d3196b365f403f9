// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use arrayvec::ArrayVec;
use num_complex::Complex;
use num_traits::Zero;

use crate::real::is_negligible;
use crate::{Cubic, Real};

/// How the roots of a real cubic are distributed.
///
/// Every real cubic has at least one real root, so there's no variant for
/// "no real roots".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[expect(
    clippy::exhaustive_enums,
    reason = "a real cubic always falls into exactly one of these cases"
)]
pub enum CubicRootKind {
    /// Three distinct real roots.
    ThreeDistinctReal,
    /// One real root and a pair of complex conjugate roots.
    OneRealTwoComplex,
    /// A simple real root and a double real root.
    OneSimpleOneDoubleReal,
    /// A single real root of multiplicity three.
    TripleReal,
}

impl CubicRootKind {
    /// The number of distinct real roots.
    pub fn distinct_real_roots(self) -> u8 {
        match self {
            Self::ThreeDistinctReal => 3,
            Self::OneSimpleOneDoubleReal => 2,
            Self::OneRealTwoComplex | Self::TripleReal => 1,
        }
    }

    /// Are all three roots real (counting multiplicity)?
    pub fn all_real(self) -> bool {
        self != Self::OneRealTwoComplex
    }
}

/// The depressed cubic `y³ + p y + q`, obtained from `a x³ + b x² + c x + d`
/// by substituting `x = y - b / 3a`.
///
/// That gives `p = (3ac - b²) / 3a²` and `q = (2b³ - 9abc + 27a²d) / 27a³`,
/// with discriminant `-4p³ - 27q²`.
#[derive(Clone, Copy, Debug)]
struct Depressed<T> {
    p: T,
    q: T,
    /// `b / 3a`, so that `x = y - shift`.
    shift: T,
}

impl<T: Real> Depressed<T> {
    /// The depressed form of `x³ + b x² + c x + d`.
    fn from_monic(b: T, c: T, d: T) -> Self {
        let three = T::from_f64(3.0);
        let shift = b / three;
        let p = c - three * shift * shift;
        let q = T::from_f64(2.0) * shift * shift * shift - shift * c + d;
        Self { p, q, shift }
    }

    fn discriminant(&self) -> T {
        let Self { p, q, .. } = *self;
        -T::from_f64(4.0) * p * p * p - T::from_f64(27.0) * q * q
    }

    fn classify(&self, disc: T) -> CubicRootKind {
        if disc > T::TOLERANCE {
            CubicRootKind::ThreeDistinctReal
        } else if disc < -T::TOLERANCE {
            CubicRootKind::OneRealTwoComplex
        } else if is_negligible(self.p) {
            CubicRootKind::TripleReal
        } else {
            CubicRootKind::OneSimpleOneDoubleReal
        }
    }

    /// The three roots `x = y - shift`, in the order documented on
    /// [`Cubic::roots`].
    fn roots(&self) -> [Complex<T>; 3] {
        let Self { p, q, shift } = *self;
        let shift = Complex::new(-shift, T::zero());

        // The cube roots are badly conditioned around the triple root.
        if is_negligible(p) && is_negligible(q) {
            return [shift; 3];
        }

        let half_q = q * T::from_f64(0.5);
        let third_p = p / T::from_f64(3.0);

        // s² = q²/4 + p³/27. At a double root it is only rounding noise, and
        // taking its square root would blow that noise up.
        let s_sq = self.discriminant() / T::from_f64(-108.0);
        let terms = half_q * half_q + (third_p * third_p * third_p).abs();
        let s_sq = if terms.is_finite() && s_sq.abs() <= T::TOLERANCE * terms {
            T::zero()
        } else {
            s_sq
        };
        let u = if s_sq < T::zero() {
            // -q/2 ± s is a conjugate pair, so there's no cancellation.
            Complex::new(-half_q, (-s_sq).sqrt()).cbrt()
        } else {
            let s = s_sq.sqrt();
            let w_plus = -half_q + s;
            let w_minus = -half_q - s;
            // w_plus * w_minus = -(p/3)³, so recover the smaller one from
            // the larger one instead of losing it to cancellation.
            let w = if w_minus.abs() > w_plus.abs() {
                -(third_p * third_p * third_p) / w_minus
            } else {
                w_plus
            };
            Complex::new(w, T::zero()).cbrt()
        };
        let v = if u.is_zero() {
            Complex::new(-q, T::zero()).cbrt()
        } else {
            u.inv() * -third_p
        };

        let omega = Complex::new(T::from_f64(-0.5), T::HALF_SQRT_3);
        let omega_sq = omega.conj();
        [
            u + v + shift,
            omega * u + omega_sq * v + shift,
            omega_sq * u + omega * v + shift,
        ]
    }
}

impl<T: Real> Cubic<T> {
    // Divide through by `a` first, so that we never form a³.
    fn depressed(&self) -> Depressed<T> {
        let b = self.b / self.a;
        let c = self.c / self.a;
        let d = self.d / self.a;
        Depressed::from_monic(b, c, d)
    }

    /// The depressed form to solve, and the factor to scale its roots by.
    ///
    /// Usually that's just the depressed form of this cubic, with a factor of
    /// one. If its discriminant overflows (`p³` and `q²` go out of range well
    /// before the coefficients do), we substitute `x = k z` instead, with `k`
    /// a power of two that brings the monic coefficients down to at most 8 in
    /// magnitude, and solve for `z`.
    fn depressed_in_range(&self) -> (Depressed<T>, T) {
        let dep = self.depressed();
        if dep.discriminant().is_finite() {
            (dep, T::one())
        } else {
            self.rescaled().unwrap_or((dep, T::one()))
        }
    }

    #[cold]
    fn rescaled(&self) -> Option<(Depressed<T>, T)> {
        let two = T::from_f64(2.0);
        // Work with logarithms, since b / a itself may overflow.
        let log_a = self.a.abs().log2();
        let exponent = (self.b.abs().log2() - log_a)
            .max((self.c.abs().log2() - log_a) / two)
            .max((self.d.abs().log2() - log_a) / T::from_f64(3.0))
            .floor();
        if !exponent.is_finite() {
            return None;
        }
        let k = two.powf(exponent);
        let b = self.b / k / self.a;
        let c = self.c / k / k / self.a;
        let d = self.d / k / k / k / self.a;
        if !(b.is_finite() && c.is_finite() && d.is_finite()) {
            return None;
        }
        Some((Depressed::from_monic(b, c, d), k))
    }

    /// The discriminant of this cubic, normalised to its depressed form.
    ///
    /// This is `-4p³ - 27q²`, where `y³ + p y + q` is the depressed cubic
    /// obtained by substituting `x = y - b / 3a`. It is positive when there are
    /// three distinct real roots, negative when two of the roots are complex,
    /// and zero when there is a repeated root.
    ///
    /// For very large coefficients this overflows to infinity (or NaN).
    /// [`Cubic::classify`] and [`Cubic::roots`] still work in that case.
    pub fn discriminant(&self) -> T {
        self.depressed().discriminant()
    }

    /// Classifies the roots of this cubic by their multiplicity and reality.
    ///
    /// The discriminant and `p` are compared against zero with an absolute
    /// tolerance of [`Real::TOLERANCE`]. If the discriminant overflows, the
    /// cubic is classified after rescaling `x` by a power of two, which keeps
    /// the sign of the discriminant.
    pub fn classify(&self) -> CubicRootKind {
        let (dep, _) = self.depressed_in_range();
        dep.classify(dep.discriminant())
    }

    /// The number of distinct real roots, which is 1, 2 or 3.
    pub fn real_root_count(&self) -> u8 {
        let count = self.classify().distinct_real_roots();
        debug_assert!(count > 0, "a real cubic has at least one real root");
        count
    }

    /// Returns all three roots of this cubic, as complex numbers.
    ///
    /// The roots come from Cardano's formula. With `u` the principal cube root
    /// of `-q/2 + √(q²/4 + p³/27)`, `v = -p / 3u` and `ω = (-1 + i√3) / 2`,
    /// they are returned in the order
    ///
    /// 1. `u + v - b/3a`
    /// 2. `ωu + ω²v - b/3a`
    /// 3. `ω²u + ωv - b/3a`
    ///
    /// Repeated roots are returned repeatedly. If the cubic has a complex
    /// conjugate pair, the pair is made up of two of these entries.
    ///
    /// Coefficients large enough for `p³` or `q²` to overflow are handled by
    /// solving for `x / k` with `k` a power of two, which scales `u`, `v` and
    /// the shift alike and so keeps the order.
    ///
    /// # Preconditions
    ///
    /// `a` must be non-zero. This is only checked in debug builds.
    pub fn roots(&self) -> [Complex<T>; 3] {
        debug_assert!(self.a != T::zero(), "leading coefficient must be non-zero");
        let (dep, k) = self.depressed_in_range();
        dep.roots().map(|z| z * k)
    }

    /// Returns the real roots, in the same order as [`Cubic::roots`].
    ///
    /// A root counts as real when its imaginary part is within `√ε` (machine
    /// epsilon) of the largest root's magnitude, or of 1 if that's smaller.
    /// Since nonreal roots come in conjugate pairs, this normally has three
    /// entries (repeated roots are reported with their multiplicity) or just
    /// one. The root closest to the real axis is always included.
    ///
    /// This is decided from the computed roots rather than from
    /// [`Cubic::classify`], whose absolute tolerance on the discriminant
    /// calls any cubic with small enough coefficients a repeated root.
    pub fn real_roots(&self) -> ArrayVec<T, 3> {
        let roots = self.roots();
        let scale = roots.iter().fold(T::one(), |m, r| m.max(r.norm()));
        let tolerance = T::epsilon().sqrt() * scale;
        let mut ret: ArrayVec<T, 3> = roots
            .iter()
            .filter(|r| r.im.abs() <= tolerance)
            .map(|r| r.re)
            .collect();
        if ret.is_empty() {
            let mut real = roots[0];
            for r in &roots[1..] {
                if r.im.abs() < real.im.abs() {
                    real = *r;
                }
            }
            ret.push(real.re);
        }
        ret
    }
}

/// The discriminant of the cubic `a x³ + b x² + c x + d`.
///
/// See [`Cubic::discriminant`] for the normalisation used.
pub fn cubic_discriminant<T: Real>(a: T, b: T, c: T, d: T) -> T {
    Cubic::new(a, b, c, d).discriminant()
}

/// The number of distinct real roots of the cubic `a x³ + b x² + c x + d`.
///
/// See [`Cubic::real_root_count`].
pub fn cubic_real_root_count<T: Real>(a: T, b: T, c: T, d: T) -> u8 {
    Cubic::new(a, b, c, d).real_root_count()
}

/// All three complex roots of the cubic `a x³ + b x² + c x + d`, with `a`
/// non-zero.
///
/// See [`Cubic::roots`] for the ordering guarantees.
pub fn cubic_roots<T: Real>(a: T, b: T, c: T, d: T) -> [Complex<T>; 3] {
    Cubic::new(a, b, c, d).roots()
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;

    use super::*;

    fn assert_near(actual: Complex64, re: f64, im: f64) {
        assert!(
            (actual.re - re).abs() < 1e-10 && (actual.im - im).abs() < 1e-10,
            "expected {re} + {im}i, got {actual}"
        );
    }

    fn sorted_real_parts(roots: [Complex64; 3]) -> [f64; 3] {
        let mut re = roots.map(|r| r.re);
        re.sort_by(f64::total_cmp);
        re
    }

    #[test]
    fn depressed() {
        let dep = Cubic::new(2.0_f64, -6.0, 6.0, -2.0).depressed();
        assert_eq!((dep.p, dep.q, dep.shift), (0.0, 0.0, -1.0));

        let dep = Cubic::new(1.0_f64, 0.0, -1.0, 0.0).depressed();
        assert_eq!((dep.p, dep.q), (-1.0, 0.0));

        // x³ + 3x² + 4x + 5 = (x + 1)³ + (x + 1) + 3
        let dep = Cubic::new(1.0_f64, 3.0, 4.0, 5.0).depressed();
        assert!((dep.p - 1.0).abs() < 1e-12);
        assert!((dep.q - 3.0).abs() < 1e-12);
    }

    #[test]
    fn discriminant() {
        assert_eq!(cubic_discriminant(1.0_f64, -3.0, 3.0, -1.0), 0.0);
        assert_eq!(cubic_discriminant(1.0_f64, 0.0, -1.0, 0.0), 4.0);
        assert_eq!(cubic_discriminant(1.0_f64, 0.0, 0.0, -1.0), -27.0);
        assert!(cubic_discriminant(1.0_f64, -2.0, 1.0, 0.0).abs() < 1e-10);
    }

    #[test]
    fn classify() {
        use CubicRootKind::{
            OneRealTwoComplex, OneSimpleOneDoubleReal, ThreeDistinctReal, TripleReal,
        };
        assert_eq!(Cubic::new(1.0_f64, -3.0, 3.0, -1.0).classify(), TripleReal);
        assert_eq!(Cubic::new(1.0_f64, 0.0, -1.0, 0.0).classify(), ThreeDistinctReal);
        assert_eq!(Cubic::new(1.0_f64, -2.0, 1.0, 0.0).classify(), OneSimpleOneDoubleReal);
        assert_eq!(Cubic::new(1.0_f64, 0.0, 0.0, -1.0).classify(), OneRealTwoComplex);
        assert_eq!(Cubic::new(1.0_f32, 0.0, 0.0, 1.0).classify(), OneRealTwoComplex);
    }

    #[test]
    fn real_root_count() {
        assert_eq!(cubic_real_root_count(1.0_f64, -3.0, 3.0, -1.0), 1);
        assert_eq!(cubic_real_root_count(1.0_f64, 0.0, -1.0, 0.0), 3);
        assert_eq!(cubic_real_root_count(1.0_f64, -2.0, 1.0, 0.0), 2);
        assert_eq!(cubic_real_root_count(1.0_f64, 0.0, 0.0, -1.0), 1);
        assert_eq!(cubic_real_root_count(-2.0_f64, 0.0, 2.0, 0.0), 3);
    }

    #[test]
    fn triple_root() {
        let roots = cubic_roots(1.0_f64, -3.0, 3.0, -1.0);
        for r in roots {
            assert_eq!(r, Complex64::new(1.0, 0.0));
        }
        let roots = cubic_roots(-4.0_f64, 0.0, 0.0, 0.0);
        assert_eq!(roots, [Complex64::new(0.0, 0.0); 3]);
    }

    #[test]
    fn three_real_roots() {
        let [x1, x2, x3] = cubic_roots(1.0_f64, 0.0, -1.0, 0.0);
        assert_near(x1, 1.0, 0.0);
        assert_near(x2, -1.0, 0.0);
        assert_near(x3, 0.0, 0.0);

        // (x - 1)(x - 2)(x - 3)
        let roots = cubic_roots(1.0_f64, -6.0, 11.0, -6.0);
        for r in roots {
            assert!(r.im.abs() < 1e-10);
        }
        let re = sorted_real_parts(roots);
        for (r, expected) in re.iter().zip([1.0, 2.0, 3.0]) {
            assert!((r - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn double_root() {
        let [x1, x2, x3] = cubic_roots(1.0_f64, -2.0, 1.0, 0.0);
        assert_near(x1, 1.0, 0.0);
        assert_near(x2, 0.0, 0.0);
        assert_near(x3, 1.0, 0.0);

        // (x + 1)² (x - 2)
        let re = sorted_real_parts(cubic_roots(1.0_f64, 0.0, -3.0, -2.0));
        for (r, expected) in re.iter().zip([-1.0, -1.0, 2.0]) {
            assert!((r - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn one_real_root() {
        let [x1, x2, x3] = cubic_roots(1.0_f64, 0.0, 0.0, -1.0);
        let half_sqrt_3 = 3.0_f64.sqrt() / 2.0;
        assert_near(x1, 1.0, 0.0);
        assert_near(x2, -0.5, half_sqrt_3);
        assert_near(x3, -0.5, -half_sqrt_3);
    }

    // Here -q/2 + s is exactly zero, so u is zero and v has to come from -q.
    #[test]
    fn vanishing_u() {
        let roots = cubic_roots(1.0_f64, 0.0, 0.0, 1.0);
        let c = Cubic::new(1.0_f64, 0.0, 0.0, 1.0);
        for r in roots {
            assert!(c.eval(r).norm() < 1e-12, "{r} is not a root");
        }
        assert_eq!(c.real_roots().len(), 1);
        assert!((c.real_roots()[0] + 1.0).abs() < 1e-12);
    }

    // q > 0 makes -q/2 + s suffer from cancellation unless it's recovered
    // from its partner.
    #[test]
    fn cancellation() {
        // x³ + 1e-4 x + 2
        let c = Cubic::new(1.0_f64, 0.0, 1e-4, 2.0);
        let roots = c.roots();
        for r in roots {
            assert!(c.eval(r).norm() < 1e-12, "{r} is not a root");
        }
        let sum: Complex64 = roots.iter().sum();
        assert!(sum.norm() < 1e-12);
    }

    #[test]
    fn real_roots() {
        let c = Cubic::new(1.0_f64, 0.0, -1.0, 0.0);
        let re = c.real_roots();
        assert_eq!(re.len(), 3);
        assert!((re[0] - 1.0).abs() < 1e-10);
        assert!((re[1] + 1.0).abs() < 1e-10);
        assert!(re[2].abs() < 1e-10);

        let re = Cubic::new(1.0_f64, -3.0, 3.0, -1.0).real_roots();
        assert_eq!(re.as_slice(), &[1.0, 1.0, 1.0]);

        let re = Cubic::new(2.0_f64, 0.0, 0.0, -16.0).real_roots();
        assert_eq!(re.len(), 1);
        assert!((re[0] - 2.0).abs() < 1e-10);
    }

    // With tiny coefficients the discriminant is below the absolute tolerance
    // even though two of the roots are far from real.
    #[test]
    fn real_roots_small_coefficients() {
        // x³ + 1e-6, with roots -0.01 and 0.01 e^(±iπ/3)
        let c = Cubic::new(1.0_f64, 0.0, 0.0, 1e-6);
        assert_ne!(c.classify(), CubicRootKind::OneRealTwoComplex);
        let re = c.real_roots();
        assert_eq!(re.len(), 1, "{re:?}");
        assert!((re[0] + 0.01).abs() < 1e-12, "{re:?}");

        // x ((x - 1e-3)² + 1e-10), with roots 0 and 1e-3 ± 1e-5 i
        let c = Cubic::new(1.0_f64, -2e-3, 1.000_000_000_1e-6, 0.0);
        let re = c.real_roots();
        assert_eq!(re.len(), 1, "{re:?}");
        assert!(re[0].abs() < 1e-12, "{re:?}");
    }

    // p³ and q² overflow long before the coefficients themselves do.
    #[test]
    fn huge_coefficients() {
        // x³ - 1e110 x = x (x - 1e55) (x + 1e55)
        let c = Cubic::new(1.0_f64, 0.0, -1e110, 0.0);
        assert!(!c.discriminant().is_finite());
        assert_eq!(c.classify(), CubicRootKind::ThreeDistinctReal);
        let roots = c.roots();
        for r in roots {
            assert!(r.re.is_finite() && r.im.is_finite(), "{r}");
            assert!(r.im.abs() < 1e-12 * 1e55, "{r}");
        }
        let re = sorted_real_parts(roots);
        for (r, expected) in re.iter().zip([-1e55, 0.0, 1e55]) {
            assert!((r - expected).abs() < 1e-12 * 1e55, "{re:?}");
        }
        assert_eq!(c.real_roots().len(), 3);

        // x³ + 3e103 x², with a double root at 0
        let c = Cubic::new(1.0_f64, 3e103, 0.0, 0.0);
        let roots = c.roots();
        for r in roots {
            assert!(r.re.is_finite() && r.im.is_finite(), "{r}");
        }
        let re = sorted_real_parts(roots);
        for (r, expected) in re.iter().zip([-3e103, 0.0, 0.0]) {
            assert!((r - expected).abs() < 1e-12 * 3e103, "{re:?}");
        }
        assert_eq!(c.real_roots().len(), 3);

        // Substituting x = 2^150 z gives a cubic that is solved without
        // rescaling, and its roots come out in the same order.
        let k = 2.0_f64.powi(150);
        let small = Cubic::new(1.0_f64, 0.0, -1e110 / (k * k), 0.0).roots();
        let big = Cubic::new(1.0_f64, 0.0, -1e110, 0.0).roots();
        for (s, b) in small.iter().zip(&big) {
            assert!((*s * k - *b).norm() < 1e-12 * 1e55, "{s} {b}");
        }
    }

    #[test]
    fn single_precision() {
        let c = Cubic::new(1.0_f32, -6.0, 11.0, -6.0);
        assert_eq!(c.real_root_count(), 3);
        for r in c.roots() {
            assert!(c.eval(r).norm() < 1e-4, "{r} is not a root");
        }
    }

    #[test]
    fn vieta() {
        arbtest::arbtest(|u| {
            let c = crate::arbitrary::cubic(u)?;
            let [x1, x2, x3] = c.roots();
            let scale = c.magnitude() / c.a.abs();
            let e1 = x1 + x2 + x3;
            let e2 = x1 * x2 + x1 * x3 + x2 * x3;
            let e3 = x1 * x2 * x3;
            let tol = 1e-9;
            assert!((e1 - Complex64::new(-c.b / c.a, 0.0)).norm() <= tol * scale);
            assert!((e2 - Complex64::new(c.c / c.a, 0.0)).norm() <= tol * scale * scale);
            assert!((e3 - Complex64::new(-c.d / c.a, 0.0)).norm() <= tol * scale * scale * scale);
            Ok(())
        })
        .budget_ms(1_000);
    }

    #[test]
    fn planted_roots() {
        arbtest::arbtest(|u| {
            let (c, planted) = crate::arbitrary::cubic_with_real_roots(u)?;
            // Planted roots are real, so there's no conjugate pair.
            assert!(c.classify().all_real() || c.discriminant().abs() < 1e-6);
            for r in c.roots() {
                let residual = c.eval(r).norm();
                assert!(residual <= 1e-9, "residual {residual} at {r} for {planted:?}");
            }
            Ok(())
        })
        .budget_ms(1_000);
    }

    #[test]
    fn conjugate_pairs() {
        arbtest::arbtest(|u| {
            let c = crate::arbitrary::cubic(u)?;
            if c.classify() != CubicRootKind::OneRealTwoComplex {
                return Ok(());
            }
            let roots = c.roots();
            // Some pair of entries must be conjugate, and the third is real.
            let (i, j, k) = [(0, 1, 2), (0, 2, 1), (1, 2, 0)]
                .into_iter()
                .min_by(|&(i, j, _), &(k, l, _)| {
                    let d0 = (roots[i] - roots[j].conj()).norm();
                    let d1 = (roots[k] - roots[l].conj()).norm();
                    d0.total_cmp(&d1)
                })
                .unwrap();
            let scale = c.magnitude() / c.a.abs();
            assert!((roots[i] - roots[j].conj()).norm() <= 1e-9 * scale);
            assert!(roots[k].im.abs() <= 1e-9 * scale);
            Ok(())
        })
        .budget_ms(1_000);
    }

    #[test]
    fn idempotent() {
        arbtest::arbtest(|u| {
            let c = crate::arbitrary::cubic(u)?;
            let first = c.roots();
            let second = c.roots();
            for (x, y) in first.iter().zip(&second) {
                assert_eq!(x.re.to_bits(), y.re.to_bits());
                assert_eq!(x.im.to_bits(), y.im.to_bits());
            }
            Ok(())
        });
    }
}
