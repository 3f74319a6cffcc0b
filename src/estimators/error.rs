// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::f64::consts::PI;

use thiserror::Error;

/// Invalid-argument errors raised by the mixture entropy estimators.
///
/// The numeric kernels themselves never fail; these are precondition checks
/// performed before any logarithm or division by the variance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MixtureError {
    #[error("variance must be strictly positive, got {0}")]
    NonPositiveVariance(f64),

    #[error("variance must be finite, got {0}")]
    NonFiniteVariance(f64),

    #[error("variance {0} is too large: the Gaussian normalisation constant overflows")]
    VarianceOverflow(f64),

    #[error("sample matrix has no rows")]
    EmptySamples,

    #[error("sample matrix has no columns")]
    ZeroDimensions,

    #[error("logarithm base must be positive, finite and != 1, got {0}")]
    InvalidBase(f64),
}

pub type Result<T> = std::result::Result<T, MixtureError>;

/// Check that `var` can be used as a divisor and inside a logarithm.
pub fn check_variance(var: f64) -> Result<f64> {
    if !var.is_finite() {
        return Err(MixtureError::NonFiniteVariance(var));
    }
    if var <= 0.0 {
        return Err(MixtureError::NonPositiveVariance(var));
    }
    if !(2.0 * PI * var).is_finite() {
        return Err(MixtureError::VarianceOverflow(var));
    }
    Ok(var)
}

pub fn check_base(base: f64) -> Result<f64> {
    if !base.is_finite() || base <= 0.0 || base == 1.0 {
        return Err(MixtureError::InvalidBase(base));
    }
    Ok(base)
}
