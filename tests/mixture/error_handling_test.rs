// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use mixentropy::estimators::approaches::mixture::{
    GaussianNoiseEntropy, KlMixtureEntropy, conditional_entropy, entropy_lower_bound_bd,
    entropy_upper_bound_kl,
};
use mixentropy::estimators::entropy::Entropy;
use mixentropy::estimators::error::MixtureError;
use ndarray::{Array1, Array2, array};
use rstest::rstest;

#[rstest]
#[case(0.0)]
#[case(-1.0)]
#[case(-1e-300)]
fn non_positive_variance_is_rejected(#[case] var: f64) {
    let x = array![[0.0, 1.0], [2.0, 3.0]];
    let expected = MixtureError::NonPositiveVariance(var);
    assert_eq!(entropy_upper_bound_kl(x.view(), var).unwrap_err(), expected);
    assert_eq!(entropy_lower_bound_bd(x.view(), var).unwrap_err(), expected);
    assert_eq!(conditional_entropy(x.view(), var).unwrap_err(), expected);
    assert_eq!(KlMixtureEntropy::new(x, var).unwrap_err(), expected);
}

#[rstest]
fn non_finite_variance_is_rejected(#[values(f64::NAN, f64::INFINITY)] var: f64) {
    let x = array![[0.0], [1.0]];
    assert!(matches!(
        entropy_upper_bound_kl(x.view(), var),
        Err(MixtureError::NonFiniteVariance(_))
    ));
    assert!(matches!(
        Entropy::new_bd_lower_bound(x, var),
        Err(MixtureError::NonFiniteVariance(_))
    ));
}

#[rstest]
#[case(f64::MAX)]
#[case(1e308)]
fn overflowing_variance_names_the_callers_value(#[case] var: f64) {
    let x = array![[0.0, 1.0], [2.0, 3.0]];
    let expected = MixtureError::VarianceOverflow(var);
    assert_eq!(entropy_lower_bound_bd(x.view(), var).unwrap_err(), expected);
    assert_eq!(
        Entropy::new_bd_lower_bound(x.clone(), var).unwrap_err(),
        expected
    );
    assert_eq!(
        mixentropy::MixtureMutualInformation::new(x, var).unwrap_err(),
        expected
    );
}

#[test]
fn kl_bound_rejects_variance_whose_normalisation_overflows() {
    let x = array![[0.0], [1.0]];
    assert_eq!(
        entropy_upper_bound_kl(x.view(), f64::MAX).unwrap_err(),
        MixtureError::VarianceOverflow(f64::MAX)
    );
    // 4·var still fits for the KL bound itself
    assert!(entropy_upper_bound_kl(x.view(), 1e300).unwrap().is_finite());
}

#[test]
fn empty_sample_matrix_is_rejected() {
    let x = Array2::<f64>::zeros((0, 4));
    assert_eq!(entropy_upper_bound_kl(x.view(), 1.0).unwrap_err(), MixtureError::EmptySamples);
    assert_eq!(entropy_lower_bound_bd(x.view(), 1.0).unwrap_err(), MixtureError::EmptySamples);
    assert_eq!(
        Entropy::new_kl_upper_bound(Array1::<f64>::zeros(0), 1.0).unwrap_err(),
        MixtureError::EmptySamples
    );
}

#[test]
fn zero_dimensional_samples_are_rejected() {
    let x = Array2::<f64>::zeros((5, 0));
    assert_eq!(
        entropy_upper_bound_kl(x.view(), 1.0).unwrap_err(),
        MixtureError::ZeroDimensions
    );
}

#[rstest]
fn invalid_base_is_rejected(#[values(1.0, 0.0, -2.0, f64::NAN)] base: f64) {
    let est = GaussianNoiseEntropy::new(2, 1.0).unwrap();
    assert!(matches!(est.with_base(base), Err(MixtureError::InvalidBase(_))));
}

#[test]
fn errors_render_readable_messages() {
    let err = entropy_upper_bound_kl(array![[1.0]].view(), -0.5).unwrap_err();
    assert_eq!(err.to_string(), "variance must be strictly positive, got -0.5");
    assert_eq!(MixtureError::EmptySamples.to_string(), "sample matrix has no rows");
}
