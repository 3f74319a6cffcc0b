// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::estimators::error::{MixtureError, Result};

/// Sample matrix shared by the mixture estimators.
///
/// Rows are samples (mixture component means), columns are dimensions.
/// The data is owned and never mutated after construction.
#[derive(Debug, Clone)]
pub struct MixtureDataset {
    pub data: Array2<f64>,
    pub n: usize,
    pub dims: usize,
}

impl MixtureDataset {
    /// Wrap a 2D array (rows = samples, cols = dimensions).
    ///
    /// Fails with [`MixtureError::EmptySamples`] for zero rows and
    /// [`MixtureError::ZeroDimensions`] for zero columns.
    pub fn from_array2(data: Array2<f64>) -> Result<Self> {
        let (n, dims) = check_samples(data.view())?;
        Ok(Self { data, n, dims })
    }

    /// Treat a 1D array as N one-dimensional samples.
    pub fn from_array1(data: Array1<f64>) -> Result<Self> {
        Self::from_array2(data.insert_axis(Axis(1)))
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// `(dims, N)` as floats, ready for the normalisation arithmetic.
    pub fn shape_f64(&self) -> (f64, f64) {
        (self.dims as f64, self.n as f64)
    }
}

/// Validate a borrowed sample matrix, returning `(n, dims)`.
pub fn check_samples(x: ArrayView2<'_, f64>) -> Result<(usize, usize)> {
    let (n, dims) = x.dim();
    if n == 0 {
        return Err(MixtureError::EmptySamples);
    }
    if dims == 0 {
        return Err(MixtureError::ZeroDimensions);
    }
    Ok((n, dims))
}

impl TryFrom<Array2<f64>> for MixtureDataset {
    type Error = MixtureError;

    fn try_from(data: Array2<f64>) -> Result<Self> {
        Self::from_array2(data)
    }
}

impl TryFrom<Array1<f64>> for MixtureDataset {
    type Error = MixtureError;

    fn try_from(data: Array1<f64>) -> Result<Self> {
        Self::from_array1(data)
    }
}
