// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::f64::consts::{E, PI};

use log::debug;
use ndarray::{Array1, Array2, ArrayView2};

use super::convert_base;
use super::dataset::{MixtureDataset, check_samples};
use super::distance::pairwise_squared_distances;
use super::logsumexp::logsumexp_rows;
use crate::estimators::error::{Result, check_base, check_variance};
use crate::estimators::traits::{GlobalValue, LocalValues};

/// KL-divergence based upper bound on the entropy of a Gaussian mixture
///
/// The mixture has one equal-weight component N(x_i, var·I) per sample row.
/// Following Kolchinsky & Tracey (2017), "Estimating Mixture Entropy with
/// Pairwise Distances", the bound is
///
/// Ĥ_KL = d/2 − (1/N) Σ_i ln( (1/N) Σ_j N(x_i; x_j, var·I) )
///
/// where the inner sum runs over every component including j = i.
///
/// # Examples
///
/// ```
/// use mixentropy::estimators::approaches::mixture::KlMixtureEntropy;
/// use mixentropy::estimators::traits::{GlobalValue, LocalValues};
/// use ndarray::array;
///
/// let x = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
/// let est = KlMixtureEntropy::new(x, 1.0).unwrap();
/// let h = est.global_value();
/// assert!((h - 3.2182).abs() < 1e-2);
/// assert_eq!(est.local_values().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct KlMixtureEntropy {
    pub nd: MixtureDataset,
    /// Shared isotropic component variance
    pub variance: f64,
    /// Logarithm base of reported values (default e)
    pub base: f64,
}

impl KlMixtureEntropy {
    /// Construct from 2D data (rows = samples, cols = dimensions).
    pub fn new(data: Array2<f64>, variance: f64) -> Result<Self> {
        Self::from_dataset(MixtureDataset::from_array2(data)?, variance)
    }

    /// Construct from 1D data (convenience)
    pub fn new_1d(data: Array1<f64>, variance: f64) -> Result<Self> {
        Self::from_dataset(MixtureDataset::from_array1(data)?, variance)
    }

    pub fn from_dataset(nd: MixtureDataset, variance: f64) -> Result<Self> {
        let variance = check_variance(variance)?;
        debug!(
            "KL mixture entropy: n={}, dims={}, var={}",
            nd.n, nd.dims, variance
        );
        Ok(Self { nd, variance, base: E })
    }

    /// Set logarithm base (default e)
    pub fn with_base(mut self, base: f64) -> Result<Self> {
        self.base = check_base(base)?;
        Ok(self)
    }

    /// ln p̂(x_i) under the mixture, one entry per sample, in nats.
    pub fn log_probs(&self) -> Array1<f64> {
        kl_log_probs(self.nd.view(), self.variance)
    }

    pub(crate) fn global_nats(&self) -> f64 {
        let (dims, n) = self.nd.shape_f64();
        let h = -(self.log_probs().sum() / n);
        dims / 2.0 + h
    }

    pub(crate) fn local_nats(&self) -> Array1<f64> {
        let half_dims = self.nd.dims as f64 / 2.0;
        self.log_probs().mapv(|lp| half_dims - lp)
    }
}

impl GlobalValue for KlMixtureEntropy {
    fn global_value(&self) -> f64 {
        convert_base(self.global_nats(), self.base)
    }
}

impl LocalValues for KlMixtureEntropy {
    fn local_values(&self) -> Array1<f64> {
        let base = self.base;
        self.local_nats().mapv(|h| convert_base(h, base))
    }
}

/// Per-sample mixture log-densities for the KL bound.
///
/// lprob_i = logsumexp_j(−D_ij / 2var) − ln N − (d/2)·ln(2π·var)
///
/// ln N and the normalisation constant are subtracted per row, before
/// averaging.
fn kl_log_probs(x: ArrayView2<'_, f64>, var: f64) -> Array1<f64> {
    let dims = x.ncols() as f64;
    let n = x.nrows() as f64;

    let mut dists = pairwise_squared_distances(x);
    let two_var = 2.0 * var;
    dists.mapv_inplace(|d| -(d / two_var));

    let normconst = (dims / 2.0) * (2.0 * PI * var).ln();
    let ln_n = n.ln();
    let mut lprobs = logsumexp_rows(dists.view());
    lprobs.mapv_inplace(|l| l - ln_n - normconst);
    lprobs
}

/// Upper bound (in nats) on the entropy of the equal-weight Gaussian mixture
/// centred on the rows of `x` with covariance `var·I`.
///
/// # Errors
///
/// Fails if `x` has no rows or columns, or if `var` is not a finite
/// positive number.
pub fn entropy_upper_bound_kl(x: ArrayView2<'_, f64>, var: f64) -> Result<f64> {
    check_samples(x)?;
    let var = check_variance(var)?;
    let dims = x.ncols() as f64;
    let n = x.nrows() as f64;
    let h = -(kl_log_probs(x, var).sum() / n);
    Ok(dims / 2.0 + h)
}
