// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use mixentropy::estimators::mutual_information::{MixtureMutualInformation, MutualInformation};
use mixentropy::estimators::traits::GlobalValue;
use ndarray::array;
use rstest::rstest;

use crate::test_helpers::{
    assert_entropy_values_close, generate_gaussian_data, generate_random_nd_data, reference_tolerance,
};

#[test]
fn reference_bounds() {
    let x = array![
        [1.0, 2.0, -0.5],
        [0.3, -1.2, 2.2],
        [-0.7, 0.4, 0.1],
        [2.5, 1.1, -1.3]
    ];
    let mi = MutualInformation::new_mixture(x, 0.5).unwrap();
    let noise = 3.2170948287741;
    let (lower, upper) = mi.bounds();
    let (eps, rel) = reference_tolerance();
    assert_entropy_values_close(upper, 4.589525241297407 - noise, eps, rel, "MI upper");
    assert_entropy_values_close(lower, 4.266464255732611 - noise, eps, rel, "MI lower");
    assert_eq!(mi.global_value(), upper);
}

#[test]
fn single_sample_carries_no_information() {
    let mi = MixtureMutualInformation::new(array![[0.3, -0.2]], 0.9).unwrap();
    assert_abs_diff_eq!(mi.upper_bound(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(mi.lower_bound(), 0.0, epsilon = 1e-12);
}

#[rstest]
fn bounds_are_ordered_and_capped_by_log_n(#[values(0.01, 0.1, 1.0)] var: f64) {
    let n = 80;
    let x = generate_gaussian_data(n, 3, 0.0, 1.0, 13);
    let mi = MixtureMutualInformation::new(x, var).unwrap();
    let (lower, upper) = mi.bounds();
    assert!(lower <= upper);
    assert!(lower >= -1e-12);
    // the self term keeps every row's log-sum-exp at or above zero
    assert!(upper <= (n as f64).ln() + 1e-12);
}

#[test]
fn more_noise_means_less_information() {
    let x = generate_random_nd_data(40, 2, 3);
    let mut previous = f64::INFINITY;
    for var in [0.1, 1.0, 10.0, 100.0] {
        let upper = MixtureMutualInformation::new(x.clone(), var).unwrap().upper_bound();
        assert!(upper < previous);
        previous = upper;
    }
}

#[test]
fn reported_in_bits() {
    let x = generate_gaussian_data(30, 2, 0.0, 1.0, 2);
    let nats = MixtureMutualInformation::new(x.clone(), 0.5).unwrap();
    let bits = MixtureMutualInformation::new(x, 0.5).unwrap().with_base(2.0).unwrap();
    assert_abs_diff_eq!(bits.upper_bound(), nats.upper_bound() / 2f64.ln(), epsilon = 1e-12);
    assert_abs_diff_eq!(bits.lower_bound(), nats.lower_bound() / 2f64.ln(), epsilon = 1e-12);
}
