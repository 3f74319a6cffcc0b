// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

/// ln Σ_j exp(v_j), shifted by the maximum so that no term overflows.
///
/// An empty slice, or one where every entry is `-inf`, yields `-inf`.
pub fn logsumexp(v: ArrayView1<'_, f64>) -> f64 {
    let max = v.fold(f64::NEG_INFINITY, |m, &x| m.max(x));
    if !max.is_finite() {
        return max;
    }
    let sum: f64 = v.iter().map(|&x| exp(x - max)).sum();
    max + sum.ln()
}

/// Row-wise [`logsumexp`] of a 2D array, one value per row.
pub fn logsumexp_rows(a: ArrayView2<'_, f64>) -> Array1<f64> {
    a.map_axis(Axis(1), logsumexp)
}

#[cfg(not(feature = "fast_exp"))]
#[inline]
fn exp(x: f64) -> f64 {
    x.exp()
}

/// Fast approximation of the exponential function for non-positive inputs
///
/// After the max-shift every argument is ≤ 0, which is the only range this
/// approximation is tuned for:
///
/// 1. For small negative values (x > -0.5), a 5th-order Taylor series.
/// 2. For medium negative values (-2.5 < x <= -0.5), a 3rd-order rational approximation.
/// 3. For large negative values (x <= -2.5), a 6th-order rational approximation.
///
/// Accuracy degrades to tens of percent below x = -3, where the terms
/// are small compared to the row maximum's contribution of exactly 1.
#[cfg(feature = "fast_exp")]
#[inline]
fn exp(x: f64) -> f64 {
    if x < -700.0 {
        return 0.0;
    }
    if x > 700.0 {
        return f64::INFINITY;
    }

    if x > -0.5 {
        // exp(x) ≈ 1 + x + x²/2 + x³/6 + x⁴/24 + x⁵/120
        return 1.0
            + x * (1.0 + x * (0.5 + x * (1.0 / 6.0 + x * (1.0 / 24.0 + x * (1.0 / 120.0)))));
    }

    if x > -2.5 {
        // exp(x) ≈ 1 / (1 - x + x²/2 - x³/6)
        return 1.0 / (1.0 - x + x * x / 2.0 - x * x * x / 6.0);
    }

    // exp(x) ≈ 1 / (1 - x + x²/2 - x³/6 + x⁴/24 - x⁵/120 + x⁶/720)
    1.0 / (1.0 - x + x * x / 2.0 - x * x * x / 6.0 + x * x * x * x / 24.0
        - x * x * x * x * x / 120.0
        + x * x * x * x * x * x / 720.0)
}
