use mixentropy::estimators::entropy::Entropy;
use mixentropy::estimators::mutual_information::MutualInformation;
use mixentropy::estimators::traits::{GlobalValue, LocalValues};
use ndarray::{Array2, array};
use rand::prelude::*;
use rand_distr::{Distribution, Normal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Three well-separated component means in 2D
    let data = array![
        [0.0, 0.0], // Component 1
        [1.0, 0.0], // Component 2
        [0.0, 1.0]  // Component 3
    ];

    println!("var      lower      upper      H(T|X)");
    for var in [2.0, 1.0, 0.5, 0.1, 0.01] {
        let upper = Entropy::new_kl_upper_bound(data.clone(), var)?.global_value();
        let lower = Entropy::new_bd_lower_bound(data.clone(), var)?.global_value();
        let noise = Entropy::new_conditional(data.view(), var)?.global_value();
        println!("{var:<8} {lower:<10.5} {upper:<10.5} {noise:<10.5}");
    }

    // Hidden activations of a noisy layer: 200 samples, 4 units
    let mut rng = thread_rng();
    let normal = Normal::new(0.0, 1.0)?;
    let hidden = Array2::from_shape_fn((200, 4), |_| normal.sample(&mut rng));

    let kl = Entropy::new_kl_upper_bound(hidden.clone(), 0.1)?.with_base(2.0)?;
    let local = kl.local_values();
    println!("Per-sample contributions (bits), first five: {:?}", local.slice(ndarray::s![..5]));
    println!("Upper bound (bits): {}", kl.global_value());

    let mi = MutualInformation::new_mixture(hidden, 0.1)?.with_base(2.0)?;
    let (lower, upper) = mi.bounds();
    println!("I(X;T) in [{lower:.4}, {upper:.4}] bits");
    Ok(())
}
