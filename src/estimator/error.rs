use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire estimator module.
pub type Result<T> = std::result::Result<T, EstimatorErr>;

/// The estimator module's error type.
///
/// Build errors come from a malformed `EstimatorSpec`, the rest are raised while predicting.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimatorErr {
    EmptyForest,
    EmptyTree {
        tree: usize,
    },
    MalformedNode {
        tree: usize,
        node: usize,
        reason: &'static str,
    },
    EmptyCoefficients,
    WidthMismatch {
        got: usize,
        expected: usize,
    },
    NonFiniteInput {
        index: usize,
    },
    NonFiniteOutput,
}

impl Display for EstimatorErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorErr::EmptyForest => f.write_str("the forest has no trees"),
            EstimatorErr::EmptyTree { tree } => write!(f, "tree {tree} has no nodes"),
            EstimatorErr::MalformedNode { tree, node, reason } => {
                write!(f, "tree {tree}, node {node}: {reason}")
            }
            EstimatorErr::EmptyCoefficients => f.write_str("the linear model has no coefficients"),
            EstimatorErr::WidthMismatch { got, expected } => write!(
                f,
                "the input has {got} features but the estimator expects {expected}"
            ),
            EstimatorErr::NonFiniteInput { index } => {
                write!(f, "feature {index} of the input is not a finite number")
            }
            EstimatorErr::NonFiniteOutput => f.write_str("the estimator produced a non finite value"),
        }
    }
}

impl Error for EstimatorErr {}
