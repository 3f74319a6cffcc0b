pub mod mixture;

// Re-export the estimators so tests and users can import
// mixentropy::estimators::approaches::* ergonomically.
pub use mixture::{BhattacharyyaMixtureEntropy, GaussianNoiseEntropy, KlMixtureEntropy};
