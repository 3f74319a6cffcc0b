// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::f64::consts::{E, PI};

use ndarray::ArrayView2;

use super::convert_base;
use crate::estimators::error::{Result, check_base, check_variance};
use crate::estimators::traits::GlobalValue;

/// Exact differential entropy of an isotropic Gaussian N(μ, var·I) in `dims`
/// dimensions, in nats.
///
/// H = (d/2)·(ln(2π·var) + 1)
///
/// This is the entropy of the representation conditioned on its input when
/// the only randomness is additive isotropic noise.
#[derive(Debug, Clone)]
pub struct GaussianNoiseEntropy {
    pub dims: usize,
    pub variance: f64,
    pub base: f64,
}

impl GaussianNoiseEntropy {
    pub fn new(dims: usize, variance: f64) -> Result<Self> {
        let variance = check_variance(variance)?;
        Ok(Self { dims, variance, base: E })
    }

    /// Take the dimensionality from the column count of an output matrix.
    pub fn from_output(output: ArrayView2<'_, f64>, variance: f64) -> Result<Self> {
        Self::new(output.ncols(), variance)
    }

    /// Set logarithm base (default e)
    pub fn with_base(mut self, base: f64) -> Result<Self> {
        self.base = check_base(base)?;
        Ok(self)
    }

    pub(crate) fn global_nats(&self) -> f64 {
        closed_form(self.dims, self.variance)
    }
}

impl GlobalValue for GaussianNoiseEntropy {
    fn global_value(&self) -> f64 {
        convert_base(self.global_nats(), self.base)
    }
}

fn closed_form(dims: usize, var: f64) -> f64 {
    (dims as f64 / 2.0) * ((2.0 * PI * var).ln() + 1.0)
}

/// Entropy (in nats) of an isotropic Gaussian with `dims` dimensions.
pub fn gaussian_entropy(dims: usize, var: f64) -> Result<f64> {
    Ok(closed_form(dims, check_variance(var)?))
}

/// Entropy (in nats) of isotropic Gaussian noise of variance `var` added to
/// an output with as many dimensions as `output` has columns.
///
/// Only the column count of `output` is used.
pub fn conditional_entropy(output: ArrayView2<'_, f64>, var: f64) -> Result<f64> {
    gaussian_entropy(output.ncols(), var)
}
