//! Tests for builder configuration and parameter validation.

use std::sync::Arc;

use nns_dep::prelude::*;
use nns_dep::PartitionMode;

#[test]
fn test_duplicate_parameters_rejected() {
    let err = Dependence::<f64>::new()
        .seed(1)
        .seed(2)
        .adapter(Permutation)
        .build()
        .unwrap_err();
    assert_eq!(err, DependenceError::DuplicateParameter { parameter: "seed" });

    let err = Dependence::<f64>::new()
        .asym(true)
        .asym(false)
        .adapter(Bivariate)
        .build()
        .unwrap_err();
    assert_eq!(err, DependenceError::DuplicateParameter { parameter: "asym" });

    let err = Dependence::<f64>::new()
        .copula(Arc::new(PartialMomentCopula::default()))
        .copula(Arc::new(PartialMomentCopula { continuous: false }))
        .adapter(Matrix)
        .build()
        .unwrap_err();
    assert_eq!(err, DependenceError::DuplicateParameter { parameter: "copula" });
}

#[test]
fn test_invalid_permutation_parameters() {
    assert_eq!(
        Dependence::<f64>::new()
            .permutations(1)
            .adapter(Permutation)
            .build()
            .unwrap_err(),
        DependenceError::InvalidPermutations { got: 1, min: 2 }
    );
    assert_eq!(
        Dependence::<f64>::new()
            .interval_probability(0.5)
            .adapter(Permutation)
            .build()
            .unwrap_err(),
        DependenceError::InvalidProbability(0.5)
    );
    assert!(Dependence::<f64>::new()
        .interval_probability(-0.1)
        .adapter(Permutation)
        .build()
        .is_err());
}

#[test]
fn test_irrelevant_parameters_ignored() {
    assert!(Dependence::<f64>::new()
        .permutations(1)
        .seed(3)
        .adapter(Bivariate)
        .build()
        .is_ok());
    assert!(Dependence::<f64>::new()
        .interval_probability(0.9)
        .adapter(Matrix)
        .build()
        .is_ok());
}

#[test]
fn test_adapter_builder_setters() {
    let model = Dependence::<f64>::new()
        .adapter(Permutation)
        .permutations(7)
        .seed(99)
        .build()
        .unwrap();
    assert_eq!(model.permutations(), 7);
    assert_eq!(model.seed(), 99);

    let default_seed = Dependence::<f64>::new().adapter(Permutation).build().unwrap();
    assert_eq!(default_seed.permutations(), 99);
    assert_eq!(default_seed.seed(), 123);
}

#[test]
fn test_custom_partitioner() {
    #[derive(Debug)]
    struct JointGravity;

    impl Partitioner<f64> for JointGravity {
        fn partition(
            &self,
            x: &[f64],
            y: &[f64],
            config: &nns_dep::PartitionConfig,
        ) -> nns_dep::Partition<f64> {
            let joint = nns_dep::PartitionConfig {
                mode: PartitionMode::Joint,
                ..*config
            };
            GravityPartitioner.partition(x, y, &joint)
        }
    }

    let x: Vec<f64> = (0..40).map(f64::from).collect();
    let result = Dependence::<f64>::new()
        .partitioner(Arc::new(JointGravity))
        .adapter(Bivariate)
        .build()
        .unwrap()
        .fit(&x, &x)
        .unwrap();

    assert!((result.correlation - 1.0).abs() < 1e-6);
}

#[test]
fn test_malformed_partition_is_degenerate() {
    #[derive(Debug)]
    struct Malformed {
        short: bool,
    }

    impl Partitioner<f64> for Malformed {
        fn partition(
            &self,
            x: &[f64],
            _y: &[f64],
            _config: &nns_dep::PartitionConfig,
        ) -> nns_dep::Partition<f64> {
            let (len, id) = if self.short {
                (x.len() - 1, 0)
            } else {
                (x.len(), 3)
            };
            nns_dep::Partition {
                assignments: vec![nns_dep::QuadrantId(id); len],
                labels: vec![String::from("q")],
                regression_points: vec![nns_dep::RegressionPoint {
                    quadrant: nns_dep::QuadrantId(0),
                    x: 0.0,
                    y: 0.0,
                }],
                order: 0,
            }
        }
    }

    let x: Vec<f64> = (0..40).map(f64::from).collect();
    for short in [true, false] {
        let result = Dependence::<f64>::new()
            .partitioner(Arc::new(Malformed { short }))
            .return_diagnostics()
            .adapter(Bivariate)
            .build()
            .unwrap()
            .fit(&x, &x)
            .unwrap();

        assert_eq!(result.pair(), (0.0, 0.0));
        assert!(result.diagnostics.is_none());
    }
}
