use serde::{Deserialize, Serialize};

/// The serialized form of a fitted estimator, as exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstimatorSpec {
    RandomForest {
        n_features: usize,
        trees: Vec<TreeSpec>,
    },
    Linear {
        intercept: f64,
        coefficients: Vec<f64>,
    },
}

/// The specification for a single regression tree, node `0` is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeSpec {
    pub nodes: Vec<NodeSpec>,
}

/// The specification for a tree node.
///
/// A split sends the sample to `left` when `features[feature] <= threshold`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeSpec {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}
