// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Pairwise-Distance Bounds on Gaussian Mixture Entropy
//!
//! A set of N samples x_1, …, x_N ∈ ℝ^d together with a noise variance σ²
//! defines the equal-weight mixture
//!
//! p(t) = (1/N) ∑_i N(t; x_i, σ²·I)
//!
//! whose differential entropy has no closed form. Kolchinsky & Tracey (2017)
//! bound it from both sides using only pairwise distances between the
//! component means:
//!
//! - **Upper bound** ([`KlMixtureEntropy`]): pairwise KL divergences, which for
//!   shared isotropic covariance reduce to a Gaussian kernel density estimate
//!   evaluated at the sample points.
//! - **Lower bound** ([`BhattacharyyaMixtureEntropy`]): pairwise Bhattacharyya
//!   distances, equal to the KL estimate at variance 4σ² plus a constant.
//!
//! [`GaussianNoiseEntropy`] gives the exact entropy of a single component,
//! which is the conditional entropy H(T|X) when T = X + noise.
//!
//! All values are in nats unless a different base is selected with
//! `with_base`.
//!
//! ## Implementation Details
//!
//! The squared distance matrix is built with the Gram identity and a single
//! matrix product, then reduced row-wise with a max-shifted log-sum-exp.
//! Memory is O(N²). With the `gpu_support` feature the distance matrix can
//! be built on the GPU; with `fast_exp` the exponentials inside the
//! log-sum-exp use a rational approximation.

mod bhattacharyya;
mod dataset;
mod distance;
mod gaussian;
#[cfg(feature = "gpu_support")]
pub mod gpu;
mod kl;
mod logsumexp;

pub use bhattacharyya::{BhattacharyyaMixtureEntropy, entropy_lower_bound_bd};
pub use dataset::{MixtureDataset, check_samples};
pub use distance::{
    pairwise_squared_distances, pairwise_squared_distances_cpu, squared_row_norms,
};
pub use gaussian::{GaussianNoiseEntropy, conditional_entropy, gaussian_entropy};
pub use kl::{KlMixtureEntropy, entropy_upper_bound_kl};
pub use logsumexp::{logsumexp, logsumexp_rows};

/// Express a value computed in nats in the given logarithm base.
pub(crate) fn convert_base(nats: f64, base: f64) -> f64 {
    if base == std::f64::consts::E {
        nats
    } else {
        nats / base.ln()
    }
}
