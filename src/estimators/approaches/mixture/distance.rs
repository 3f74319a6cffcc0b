// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use log::trace;
#[cfg(feature = "gpu_support")]
use log::warn;
use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Full N×N matrix of squared Euclidean distances between the rows of `x`.
///
/// Uses the outer-sum-minus-Gram identity
///
/// D = r·1ᵀ + 1·rᵀ − 2·X·Xᵀ,   r_i = Σ_k X_ik²
///
/// so the O(N²M) work is a single matrix product instead of a nested loop.
///
/// # Clamping
///
/// Cancellation in the identity can leave entries slightly below zero,
/// most visibly on the diagonal. Every negative entry is clamped to `0.0`
/// and the diagonal is set to exactly `0.0`, so consumers may take a square
/// root or logarithm without further checks.
///
/// # GPU Acceleration
///
/// With the `gpu_support` feature and at least
/// [`GPU_MIN_POINTS`](super::gpu::GPU_MIN_POINTS) rows, the matrix is built
/// by a compute shader in single precision. Any GPU failure falls back to
/// the CPU path.
pub fn pairwise_squared_distances(x: ArrayView2<'_, f64>) -> Array2<f64> {
    #[cfg(feature = "gpu_support")]
    {
        if x.nrows() >= super::gpu::GPU_MIN_POINTS {
            match super::gpu::pairwise_squared_distances_gpu(x) {
                Ok(dists) => return dists,
                Err(e) => warn!("GPU distance calculation failed: {e}, falling back to CPU implementation"),
            }
        }
    }
    pairwise_squared_distances_cpu(x)
}

/// CPU implementation of [`pairwise_squared_distances`], always double precision.
pub fn pairwise_squared_distances_cpu(x: ArrayView2<'_, f64>) -> Array2<f64> {
    let norms = squared_row_norms(x);
    let col = norms.view().insert_axis(Axis(1));
    let row = norms.view().insert_axis(Axis(0));

    // [N, 1] + [1, N] broadcasts to [N, N]
    let mut dists = &col + &row;
    dists.scaled_add(-2.0, &x.dot(&x.t()));

    let clamped = clamp_non_negative(&mut dists);
    trace!(
        "pairwise distances: n={}, m={}, clamped {} negative entries",
        x.nrows(),
        x.ncols(),
        clamped
    );
    dists
}

/// r_i = Σ_k X_ik²
pub fn squared_row_norms(x: ArrayView2<'_, f64>) -> Array1<f64> {
    x.map_axis(Axis(1), |row| row.dot(&row))
}

/// Zero the diagonal and every negative entry, returning how many entries
/// were negative.
pub(crate) fn clamp_non_negative(dists: &mut Array2<f64>) -> usize {
    let mut clamped = 0usize;
    dists.mapv_inplace(|d| {
        if d < 0.0 {
            clamped += 1;
            0.0
        } else {
            d
        }
    });
    dists.diag_mut().fill(0.0);
    clamped
}
