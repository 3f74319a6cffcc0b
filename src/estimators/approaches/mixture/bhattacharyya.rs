// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::f64::consts::E;

use log::debug;
use ndarray::{Array1, Array2, ArrayView2};

use super::convert_base;
use super::dataset::MixtureDataset;
use super::kl::{KlMixtureEntropy, entropy_upper_bound_kl};
use crate::estimators::error::{MixtureError, Result, check_base, check_variance};
use crate::estimators::traits::{GlobalValue, LocalValues};

/// Bandwidth multiplier relating the Bhattacharyya kernel to the KL kernel.
const BD_VARIANCE_SCALE: f64 = 4.0;

/// ln(1/4) · d/2, the closed-form shift applied to the widened KL estimate.
fn bd_correction(dims: usize) -> f64 {
    0.25f64.ln() * dims as f64 / 2.0
}

/// Validate the caller's variance and return the widened one, `4·var`.
///
/// Overflow of the widened variance is reported against the caller's value.
fn widen_variance(var: f64) -> Result<f64> {
    let var = check_variance(var)?;
    check_variance(BD_VARIANCE_SCALE * var).map_err(|_| MixtureError::VarianceOverflow(var))
}

/// Bhattacharyya-distance based lower bound on the entropy of a Gaussian mixture
///
/// For components sharing the covariance var·I, the Bhattacharyya coefficient
/// between two components equals a Gaussian kernel of variance 4·var up to a
/// constant, so the bound is the KL estimate evaluated at 4·var plus
/// ln(1/4)·d/2 (Kolchinsky & Tracey 2017, Section 4).
#[derive(Debug, Clone)]
pub struct BhattacharyyaMixtureEntropy {
    /// KL estimator at the widened variance 4·var
    pub widened: KlMixtureEntropy,
    /// Component variance as passed by the caller
    pub variance: f64,
    pub base: f64,
}

impl BhattacharyyaMixtureEntropy {
    pub fn new(data: Array2<f64>, variance: f64) -> Result<Self> {
        Self::from_dataset(MixtureDataset::from_array2(data)?, variance)
    }

    pub fn new_1d(data: Array1<f64>, variance: f64) -> Result<Self> {
        Self::from_dataset(MixtureDataset::from_array1(data)?, variance)
    }

    pub fn from_dataset(nd: MixtureDataset, variance: f64) -> Result<Self> {
        let widened_var = widen_variance(variance)?;
        debug!(
            "BD mixture entropy: n={}, dims={}, var={}",
            nd.n, nd.dims, variance
        );
        let widened = KlMixtureEntropy::from_dataset(nd, widened_var)?;
        Ok(Self { widened, variance, base: E })
    }

    /// Set logarithm base (default e)
    pub fn with_base(mut self, base: f64) -> Result<Self> {
        self.base = check_base(base)?;
        Ok(self)
    }

    pub(crate) fn global_nats(&self) -> f64 {
        self.widened.global_nats() + bd_correction(self.widened.nd.dims)
    }
}

impl GlobalValue for BhattacharyyaMixtureEntropy {
    fn global_value(&self) -> f64 {
        convert_base(self.global_nats(), self.base)
    }
}

impl LocalValues for BhattacharyyaMixtureEntropy {
    fn local_values(&self) -> Array1<f64> {
        let shift = bd_correction(self.widened.nd.dims);
        let base = self.base;
        self.widened
            .local_nats()
            .mapv(|h| convert_base(h + shift, base))
    }
}

/// Lower bound (in nats) on the entropy of the equal-weight Gaussian mixture
/// centred on the rows of `x` with covariance `var·I`.
///
/// # Errors
///
/// Same preconditions as [`entropy_upper_bound_kl`].
pub fn entropy_lower_bound_bd(x: ArrayView2<'_, f64>, var: f64) -> Result<f64> {
    let widened_var = widen_variance(var)?;
    let val = entropy_upper_bound_kl(x, widened_var)?;
    Ok(val + bd_correction(x.ncols()))
}
