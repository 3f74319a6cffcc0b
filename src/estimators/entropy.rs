use ndarray::ArrayView2;

use crate::estimators::approaches::mixture::{
    BhattacharyyaMixtureEntropy, GaussianNoiseEntropy, KlMixtureEntropy, MixtureDataset,
};
use crate::estimators::error::{MixtureError, Result};
pub use crate::estimators::traits::{GlobalValue, LocalValues};

/// Entropy estimation methods for Gaussian mixtures
///
/// This struct provides static methods for creating entropy estimators for a
/// sample matrix (rows = component means) and a shared isotropic variance.
pub struct Entropy;

impl Entropy {
    /// Creates the KL-based upper bound estimator
    ///
    /// # Arguments
    ///
    /// * `data` - Component means, 1D (`Array1`) or 2D (`Array2`, rows = samples)
    /// * `variance` - Shared isotropic component variance, must be > 0
    ///
    /// # Errors
    ///
    /// [`MixtureError`] if the data is empty or the variance is not a finite
    /// positive number.
    pub fn new_kl_upper_bound(
        data: impl TryInto<MixtureDataset, Error = MixtureError>,
        variance: f64,
    ) -> Result<KlMixtureEntropy> {
        KlMixtureEntropy::from_dataset(data.try_into()?, variance)
    }

    /// Creates the Bhattacharyya-based lower bound estimator
    ///
    /// # Arguments
    ///
    /// * `data` - Component means, 1D (`Array1`) or 2D (`Array2`, rows = samples)
    /// * `variance` - Shared isotropic component variance, must be > 0
    pub fn new_bd_lower_bound(
        data: impl TryInto<MixtureDataset, Error = MixtureError>,
        variance: f64,
    ) -> Result<BhattacharyyaMixtureEntropy> {
        BhattacharyyaMixtureEntropy::from_dataset(data.try_into()?, variance)
    }

    /// Creates the exact entropy of the isotropic noise added to `output`
    ///
    /// Only the column count of `output` is used.
    pub fn new_conditional(output: ArrayView2<'_, f64>, variance: f64) -> Result<GaussianNoiseEntropy> {
        GaussianNoiseEntropy::from_output(output, variance)
    }
}
