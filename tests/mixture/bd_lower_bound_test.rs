// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use mixentropy::estimators::approaches::mixture::{
    BhattacharyyaMixtureEntropy, conditional_entropy, entropy_lower_bound_bd,
    entropy_upper_bound_kl,
};
use mixentropy::estimators::entropy::Entropy;
use mixentropy::estimators::traits::{GlobalValue, LocalValues};
use ndarray::array;
use rstest::rstest;

use crate::test_helpers::{
    assert_entropy_values_close, generate_gaussian_data, recording_logger, reference_tolerance,
};

#[rstest]
#[case(1.0, 2.9449339865132345)]
#[case(0.5, 2.3507601412097516)]
#[case(0.1, 1.2737201121741262)]
#[case(0.01, -0.6686857997769029)]
fn unit_triangle_reference(#[case] var: f64, #[case] expected: f64) {
    let x = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]];
    let (eps, rel) = reference_tolerance();
    let h = entropy_lower_bound_bd(x.view(), var).unwrap();
    assert_entropy_values_close(h, expected, eps, rel, &format!("BD triangle var={var}"));
}

#[rstest]
#[case(0.5, 4.266464255732611)]
#[case(2.0, 5.747778561678281)]
fn three_dimensional_reference(#[case] var: f64, #[case] expected: f64) {
    let x = array![
        [1.0, 2.0, -0.5],
        [0.3, -1.2, 2.2],
        [-0.7, 0.4, 0.1],
        [2.5, 1.1, -1.3]
    ];
    let (eps, rel) = reference_tolerance();
    let est = Entropy::new_bd_lower_bound(x, var).unwrap();
    assert_entropy_values_close(est.global_value(), expected, eps, rel, "BD 4x3");
}

#[test]
fn is_the_widened_kl_estimate_plus_correction() {
    let x = generate_gaussian_data(30, 5, 0.0, 1.0, 8);
    let var = 0.6;
    let widened = entropy_upper_bound_kl(x.view(), 4.0 * var).unwrap();
    let bd = entropy_lower_bound_bd(x.view(), var).unwrap();
    assert_abs_diff_eq!(bd, widened + 0.25f64.ln() * 5.0 / 2.0, epsilon = 1e-12);
}

#[rstest]
fn lower_bound_never_exceeds_upper_bound(
    #[values(42, 7, 1234)] seed: u64,
    #[values(0.01, 0.1, 1.0, 10.0)] var: f64,
) {
    let x = generate_gaussian_data(50, 4, 0.0, 1.0, seed);
    let lower = entropy_lower_bound_bd(x.view(), var).unwrap();
    let upper = entropy_upper_bound_kl(x.view(), var).unwrap();
    assert!(lower <= upper, "lower={lower} upper={upper} (seed={seed}, var={var})");
}

#[test]
fn single_point_equals_gaussian_entropy() {
    // one component: both bounds are tight
    let x = array![[0.5, -0.5, 2.0]];
    let var = 1.3;
    let bd = entropy_lower_bound_bd(x.view(), var).unwrap();
    let exact = conditional_entropy(x.view(), var).unwrap();
    assert_abs_diff_eq!(bd, exact, epsilon = 1e-12);
}

#[test]
fn local_values_average_to_global_value() {
    let x = generate_gaussian_data(45, 3, 1.0, 0.5, 17);
    let est = BhattacharyyaMixtureEntropy::new(x, 0.2).unwrap();
    assert_eq!(est.variance, 0.2);
    assert_eq!(est.widened.variance, 0.8);
    let local = est.local_values();
    assert_eq!(local.len(), 45);
    assert_abs_diff_eq!(local.mean().unwrap(), est.global_value(), epsilon = 1e-12);
}

#[test]
fn base_conversion_applies_to_local_values() {
    let x = generate_gaussian_data(20, 2, 0.0, 1.0, 4);
    let nats = BhattacharyyaMixtureEntropy::new(x.clone(), 1.0).unwrap();
    let bits = BhattacharyyaMixtureEntropy::new(x, 1.0)
        .unwrap()
        .with_base(2.0)
        .unwrap();
    for (b, n) in bits.local_values().iter().zip(nats.local_values().iter()) {
        assert_abs_diff_eq!(*b, n / 2f64.ln(), epsilon = 1e-12);
    }
}

#[test]
fn construction_logs_the_callers_variance() {
    let logger = recording_logger();
    let x = generate_gaussian_data(7, 2, 0.0, 1.0, 23);
    BhattacharyyaMixtureEntropy::new(x, 0.375).unwrap();
    assert!(logger.contains("BD mixture entropy: n=7, dims=2, var=0.375"));
}
