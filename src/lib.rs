// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # mixentropy
//!
//! Pairwise-distance estimators for the differential entropy of Gaussian
//! mixtures, as used to track information in noisy neural representations.
//!
//! ## Quick Start
//!
//! ```rust
//! use mixentropy::estimators::entropy::Entropy;
//! use mixentropy::estimators::traits::GlobalValue;
//! use ndarray::array;
//!
//! let hidden = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
//! let var = 1.0;
//!
//! let upper = Entropy::new_kl_upper_bound(hidden.clone(), var).unwrap().global_value();
//! let lower = Entropy::new_bd_lower_bound(hidden.clone(), var).unwrap().global_value();
//! let noise = Entropy::new_conditional(hidden.view(), var).unwrap().global_value();
//! assert!(lower <= upper);
//! assert!(noise <= upper);
//! ```
//!
//! The same computations are available as plain functions over array views:
//!
//! ```rust
//! use mixentropy::{entropy_upper_bound_kl, pairwise_squared_distances};
//! use ndarray::array;
//!
//! let x = array![[0.0, 0.0], [3.0, 4.0]];
//! let d = pairwise_squared_distances(x.view());
//! assert_eq!(d[[0, 1]], 25.0);
//! let h = entropy_upper_bound_kl(x.view(), 0.5).unwrap();
//! assert!(h.is_finite());
//! ```
//!
//! ## Estimators
//!
//! | Quantity | Type | Free function |
//! |----------|------|---------------|
//! | Squared distance matrix | – | [`pairwise_squared_distances`] |
//! | Mixture entropy, upper bound | [`KlMixtureEntropy`] | [`entropy_upper_bound_kl`] |
//! | Mixture entropy, lower bound | [`BhattacharyyaMixtureEntropy`] | [`entropy_lower_bound_bd`] |
//! | Isotropic Gaussian entropy | [`GaussianNoiseEntropy`] | [`conditional_entropy`] |
//! | I(X; X + noise) bounds | [`MixtureMutualInformation`] | – |
//!
//! All values are in nats by default; estimators accept `with_base` to
//! report bits or any other unit.
//!
//! ## Errors
//!
//! Inputs are validated instead of silently producing NaN: an empty sample
//! matrix or a variance that is not a finite positive number (or so large
//! that the Gaussian normalisation overflows) returns a
//! [`MixtureError`].
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade at `debug`
//! and `trace` level. No logger is installed by this crate.
//!
//! ## Feature Flags
//!
//! - `gpu_support`: Build large distance matrices (N ≥ 500) with a wgpu compute shader
//! - `fast_exp`: Use fast exponential approximations (trades accuracy for speed)

pub mod estimators;

pub use estimators::approaches::mixture::{
    BhattacharyyaMixtureEntropy, GaussianNoiseEntropy, KlMixtureEntropy, MixtureDataset,
    conditional_entropy, entropy_lower_bound_bd, entropy_upper_bound_kl, gaussian_entropy,
    logsumexp_rows, pairwise_squared_distances,
};
pub use estimators::error::{MixtureError, Result};
pub use estimators::mutual_information::MixtureMutualInformation;
pub use estimators::traits::{GlobalValue, LocalValues};
