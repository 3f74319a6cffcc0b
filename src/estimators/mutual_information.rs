use std::f64::consts::E;

use ndarray::Array2;

use crate::estimators::approaches::mixture::{
    BhattacharyyaMixtureEntropy, GaussianNoiseEntropy, KlMixtureEntropy, MixtureDataset,
    convert_base,
};
use crate::estimators::error::{MixtureError, Result, check_base};
use crate::estimators::traits::GlobalValue;

/// Mutual information between an input X and its noisy representation
/// T = X + ε, ε ~ N(0, var·I)
///
/// I(X; T) = H(T) − H(T|X). H(T|X) is the exact noise entropy and H(T) is the
/// entropy of the Gaussian mixture centred on the samples of X, so the
/// mixture bounds carry over:
///
/// - `upper_bound()` = Ĥ_KL − H(T|X)
/// - `lower_bound()` = Ĥ_BD − H(T|X)
///
/// [`GlobalValue::global_value`] reports the upper bound, the estimate
/// commonly used as a training objective.
#[derive(Debug, Clone)]
pub struct MixtureMutualInformation {
    pub upper: KlMixtureEntropy,
    pub lower: BhattacharyyaMixtureEntropy,
    pub noise: GaussianNoiseEntropy,
    pub base: f64,
}

impl MixtureMutualInformation {
    pub fn new(data: Array2<f64>, variance: f64) -> Result<Self> {
        Self::from_dataset(MixtureDataset::from_array2(data)?, variance)
    }

    pub fn from_dataset(nd: MixtureDataset, variance: f64) -> Result<Self> {
        let noise = GaussianNoiseEntropy::new(nd.dims, variance)?;
        let lower = BhattacharyyaMixtureEntropy::from_dataset(nd.clone(), variance)?;
        let upper = KlMixtureEntropy::from_dataset(nd, variance)?;
        Ok(Self { upper, lower, noise, base: E })
    }

    /// Set logarithm base (default e)
    pub fn with_base(mut self, base: f64) -> Result<Self> {
        self.base = check_base(base)?;
        Ok(self)
    }

    pub fn upper_bound(&self) -> f64 {
        convert_base(self.upper.global_nats() - self.noise.global_nats(), self.base)
    }

    pub fn lower_bound(&self) -> f64 {
        convert_base(self.lower.global_nats() - self.noise.global_nats(), self.base)
    }

    /// `(lower, upper)` in one call
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower_bound(), self.upper_bound())
    }
}

impl GlobalValue for MixtureMutualInformation {
    fn global_value(&self) -> f64 {
        self.upper_bound()
    }
}

pub struct MutualInformation;

impl MutualInformation {
    /// Creates the pairwise-distance MI bounds for a noisy Gaussian channel
    ///
    /// # Arguments
    ///
    /// * `data` - Samples of X, 1D (`Array1`) or 2D (`Array2`, rows = samples)
    /// * `variance` - Variance of the additive isotropic noise, must be > 0
    pub fn new_mixture(
        data: impl TryInto<MixtureDataset, Error = MixtureError>,
        variance: f64,
    ) -> Result<MixtureMutualInformation> {
        MixtureMutualInformation::from_dataset(data.try_into()?, variance)
    }
}
