pub mod approaches;
pub mod entropy;
pub mod error;
pub mod mutual_information;
pub mod traits;

pub use entropy::Entropy;
pub use error::{MixtureError, Result};
pub use mutual_information::{MixtureMutualInformation, MutualInformation};
pub use traits::{GlobalValue, LocalValues};
