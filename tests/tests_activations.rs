//! Tests for the activations module
//!
//! Covers the derivative identities of every cataloged function, the
//! default registry contents, and the configuration-error path for
//! unknown activation names.

use std::sync::Arc;

use ndarray::array;
use resona_core::activations::*;
use resona_core::ResonaCoreError;

/// Central finite difference of `f` at `x`.
fn finite_difference(f: &dyn DifferentiableFunction, x: f64) -> f64 {
    let h = 1e-6;
    (f.evaluate(x + h) - f.evaluate(x - h)) / (2.0 * h)
}

/// Asserts the closed-form derivative matches the finite difference at
/// every sample point. Samples must avoid non-differentiable kinks.
fn assert_derivative_matches(f: &dyn DifferentiableFunction, samples: &[f64]) {
    for &x in samples {
        let y = f.evaluate(x);
        let analytic = f.derivative(x, y);
        let numeric = finite_difference(f, x);
        assert!(
            (analytic - numeric).abs() < 1e-6,
            "{} at x={}: analytic {} vs numeric {}",
            f.name(),
            x,
            analytic,
            numeric
        );
    }
}

#[cfg(test)]
mod test_function_formulas {
    use super::*;

    #[test]
    fn test_smooth_functions_match_finite_difference() {
        assert_derivative_matches(&Sigmoid, &[-4.0, -1.0, 0.0, 1.0, 4.0]);
        assert_derivative_matches(&Tanh, &[-4.0, -1.0, 0.0, 1.0, 4.0]);
        assert_derivative_matches(&Tanh01, &[-4.0, -1.0, 0.0, 1.0, 4.0]);
        assert_derivative_matches(&Isru::default(), &[-3.0, -1.0, 0.0, 1.0, 3.0]);
        assert_derivative_matches(&Swish, &[-4.0, -1.0, 0.0, 1.0, 4.0]);
        assert_derivative_matches(&Gaussian, &[-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_derivative_matches(&Square, &[-3.0, -1.0, 0.0, 1.0, 3.0]);
        assert_derivative_matches(&Exp, &[-2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_piecewise_functions_match_finite_difference_off_the_kink() {
        assert_derivative_matches(&Relu, &[-2.0, -0.5, 0.5, 2.0]);
        assert_derivative_matches(&LeakyRelu::default(), &[-2.0, -0.5, 0.5, 2.0]);
        assert_derivative_matches(&Elu::default(), &[-2.0, -0.5, 0.5, 2.0]);
        assert_derivative_matches(&Isrlu::default(), &[-2.0, -0.5, 0.0, 0.5, 2.0]);
        assert_derivative_matches(&Abs, &[-2.0, -0.5, 0.5, 2.0]);
    }

    #[test]
    fn test_restricted_domain_functions_match_finite_difference() {
        assert_derivative_matches(&Sqrt, &[0.25, 1.0, 4.0, 9.0]);
        assert_derivative_matches(&Log, &[0.25, 1.0, 2.0, 10.0]);
    }

    #[test]
    fn test_relu_values_and_boundary() {
        assert_eq!(Relu.evaluate(-1.0), 0.0);
        assert_eq!(Relu.evaluate(0.0), 0.0);
        assert_eq!(Relu.evaluate(2.0), 2.0);
        // x = 0 sits on the non-negative branch.
        assert_eq!(Relu.derivative(0.0, Relu.evaluate(0.0)), 1.0);
        assert_eq!(LeakyRelu::default().derivative(0.0, 0.0), 1.0);
    }

    #[test]
    fn test_leaky_relu_negative_slope() {
        let lrelu = LeakyRelu::default();
        assert!((lrelu.evaluate(-10.0) - -1.0).abs() < 1e-12);
        assert_eq!(lrelu.derivative(-10.0, -1.0), 0.1);
    }

    #[test]
    fn test_abs_derivative_is_zero_at_origin() {
        assert_eq!(Abs.derivative(0.0, 0.0), 0.0);
        assert_eq!(Abs.derivative(3.0, 3.0), 1.0);
        assert_eq!(Abs.derivative(-3.0, 3.0), -1.0);
    }

    #[test]
    fn test_isru_family_unit_derivative_at_origin() {
        assert_eq!(Isru::default().derivative(0.0, 0.0), 1.0);
        assert_eq!(Isrlu::default().derivative(0.0, 0.0), 1.0);
    }

    #[test]
    fn test_sigmoid_family_ranges() {
        assert!(Sigmoid.evaluate(40.0) < 1.0 + 1e-12);
        assert!(Sigmoid.evaluate(-40.0) > 0.0);
        assert!(Tanh.evaluate(40.0) <= 1.0);
        assert!(Tanh.evaluate(-40.0) >= -1.0);
        assert_eq!(Tanh01.evaluate(0.0), 0.5);
        assert!(Tanh01.evaluate(40.0) <= 1.0);
        assert!(Tanh01.evaluate(-40.0) >= 0.0);
    }

    #[test]
    fn test_elu_floor() {
        let elu = Elu::default();
        // Saturates toward -alpha on the far negative side.
        assert!(elu.evaluate(-50.0) > -0.05 - 1e-12);
        assert!(elu.evaluate(-50.0) < 0.0);
    }

    #[test]
    fn test_out_of_domain_inputs_follow_ieee_semantics() {
        assert!(Sqrt.evaluate(-1.0).is_nan());
        assert!(Log.evaluate(-1.0).is_nan());
        assert_eq!(Log.evaluate(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_evaluate_with_derivative_pairs_are_consistent() {
        let functions: Vec<Box<dyn DifferentiableFunction>> = vec![
            Box::new(Sigmoid),
            Box::new(Tanh),
            Box::new(Elu::default()),
            Box::new(Swish),
            Box::new(Exp),
        ];
        for f in &functions {
            let (y, dydx) = f.evaluate_with_derivative(0.7);
            assert_eq!(y, f.evaluate(0.7));
            assert_eq!(dydx, f.derivative(0.7, y));
        }
    }

    #[test]
    fn test_catalog_names() {
        assert_eq!(Sigmoid.name(), "SIGMOID");
        assert_eq!(Tanh.name(), "TANH");
        assert_eq!(Tanh01.name(), "TANH_01");
        assert_eq!(Isru::default().name(), "ISRU");
        assert_eq!(Relu.name(), "RELU");
        assert_eq!(LeakyRelu::default().name(), "LRELU");
        assert_eq!(Elu::default().name(), "ELU");
        assert_eq!(Isrlu::default().name(), "ISRLU");
        assert_eq!(Swish.name(), "SWISH");
        assert_eq!(Abs.name(), "ABS");
        assert_eq!(Gaussian.name(), "GAUSSIAN");
        assert_eq!(Square.name(), "SQUARE");
        assert_eq!(Sqrt.name(), "SQRT");
        assert_eq!(Log.name(), "LOG");
        assert_eq!(Exp.name(), "EXP");
    }

    #[test]
    fn test_evaluate_frame_applies_elementwise() {
        let frame = array![-1.0f32, 0.0, 2.5];
        let rectified = Relu.evaluate_frame(frame.view());
        assert_eq!(rectified, array![0.0f32, 0.0, 2.5]);
    }
}

#[cfg(test)]
mod test_registry {
    use super::*;

    #[test]
    fn test_default_set_contents() {
        let registry = ActivationRegistry::with_defaults();
        assert_eq!(registry.len(), 7);
        for name in [
            "RELU", "LEAKY_RELU", "ISRLU", "ELU", "TANH", "TANH_01", "GAUSSIAN",
        ] {
            assert!(registry.contains(name), "default set is missing {}", name);
        }
        // Cataloged but not part of the default active set.
        assert!(registry.resolve("SWISH").is_none());
        assert!(registry.resolve("SIGMOID").is_none());
        assert!(registry.resolve("ABS").is_none());
    }

    #[test]
    fn test_leaky_relu_registered_under_config_name() {
        let registry = ActivationRegistry::with_defaults();
        let lrelu = registry.require("LEAKY_RELU").unwrap();
        assert_eq!(lrelu.name(), "LRELU");
        assert_eq!(lrelu.evaluate(-1.0), -0.1);
    }

    #[test]
    fn test_require_unknown_name_is_a_configuration_error() {
        let registry = ActivationRegistry::with_defaults();
        let result = registry.require("SOFTMAX");
        assert!(result.is_err());
        if let Err(ResonaCoreError::UnknownActivation(name)) = result {
            assert_eq!(name, "SOFTMAX");
        } else {
            panic!("Expected UnknownActivation error");
        }
    }

    #[test]
    fn test_register_adds_catalog_function() {
        let mut registry = ActivationRegistry::with_defaults();
        assert!(registry.resolve("SWISH").is_none());
        registry.register("SWISH", Arc::new(Swish));
        let swish = registry.require("SWISH").unwrap();
        assert!((swish.evaluate(1.0) - 1.0 / (1.0 + (-1.0f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn test_register_replaces_existing_mapping() {
        let mut registry = ActivationRegistry::with_defaults();
        registry.register("RELU", Arc::new(LeakyRelu::default()));
        assert_eq!(registry.len(), 7);
        assert_eq!(registry.require("RELU").unwrap().name(), "LRELU");
    }

    #[test]
    fn test_empty_registry() {
        let registry = ActivationRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve("RELU").is_none());
        assert_eq!(registry.names().count(), 0);
    }

    #[test]
    fn test_resolved_functions_share_one_instance() {
        let registry = ActivationRegistry::with_defaults();
        let a = registry.require("TANH").unwrap();
        let b = registry.require("TANH").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
