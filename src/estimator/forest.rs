use super::{
    predictor::{check_input, check_output},
    EstimatorErr, NodeSpec, Predictor, Result, TreeSpec,
};

#[derive(Debug, Clone, Copy)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(f64),
}

/// A single binary regression tree stored as a flat node array.
///
/// Every child index is strictly greater than its parent's, so a walk from the root
/// always reaches a leaf.
#[derive(Debug, Clone)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

impl RegressionTree {
    /// Builds and validates a tree.
    ///
    /// # Arguments
    /// * `index` - The position of this tree in its forest, for error reporting.
    /// * `spec` - The serialized tree.
    /// * `n_features` - The input width of the forest.
    ///
    /// # Returns
    /// A new tree or an `EstimatorErr` describing the first malformed node.
    pub fn new(index: usize, spec: &TreeSpec, n_features: usize) -> Result<Self> {
        if spec.nodes.is_empty() {
            return Err(EstimatorErr::EmptyTree { tree: index });
        }

        let len = spec.nodes.len();
        let malformed = |node, reason| EstimatorErr::MalformedNode {
            tree: index,
            node,
            reason,
        };

        let mut nodes = Vec::with_capacity(len);
        for (i, node) in spec.nodes.iter().enumerate() {
            let node = match *node {
                NodeSpec::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(malformed(i, "split feature is out of range"));
                    }
                    if !threshold.is_finite() {
                        return Err(malformed(i, "split threshold is not finite"));
                    }
                    if left <= i || right <= i || left >= len || right >= len {
                        return Err(malformed(i, "children must come after their parent"));
                    }

                    Node::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    }
                }
                NodeSpec::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(malformed(i, "leaf value is not finite"));
                    }
                    Node::Leaf(value)
                }
            };

            nodes.push(node);
        }

        Ok(Self { nodes })
    }

    /// Walks the tree from the root down to a leaf.
    ///
    /// `features` must already be checked against the forest's width.
    pub fn predict(&self, features: &[f64]) -> f64 {
        let mut i = 0;
        loop {
            match self.nodes[i] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    i = if features[feature] <= threshold { left } else { right };
                }
                Node::Leaf(value) => return value,
            }
        }
    }
}

/// An averaging ensemble of regression trees.
#[derive(Debug, Clone)]
pub struct ForestRegressor {
    n_features: usize,
    trees: Vec<RegressionTree>,
}

impl ForestRegressor {
    /// Creates a new `ForestRegressor`.
    ///
    /// # Errors
    /// `EmptyForest` without trees, or the first tree validation error.
    pub fn new(n_features: usize, trees: &[TreeSpec]) -> Result<Self> {
        if trees.is_empty() {
            return Err(EstimatorErr::EmptyForest);
        }

        let trees = trees
            .iter()
            .enumerate()
            .map(|(i, spec)| RegressionTree::new(i, spec, n_features))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { n_features, trees })
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Predictor for ForestRegressor {
    fn algorithm(&self) -> &str {
        "Random Forest Regressor"
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<f64> {
        check_input(features, self.n_features)?;

        let sum: f64 = self.trees.iter().map(|tree| tree.predict(features)).sum();
        check_output(sum / self.trees.len() as f64)
    }
}
