//! Entropy and information gain over the rows covered by tree nodes.
//!
//! Weights are relative to the size of the *whole* training sample,
//! not to the size of the parent node.
use crate::Sample;
use super::node::*;
use super::split::SplitResult;


impl ClassCounts {
    /// Binary entropy of the class distribution, in bits.
    ///
    /// Panics if no row is counted.
    pub fn entropy(&self) -> f64 {
        let total = self.total();
        assert!(total > 0, "Entropy of an empty set of rows is undefined");

        if self.is_uniform() {
            return 0f64;
        }
        let p0 = self.zeros as f64 / total as f64;
        let p1 = 1f64 - p0;

        -p0 * p0.log2() - p1 * p1.log2()
    }
}


/// Entropy of the class labels of the rows reaching `node`.
/// If the rows share one class, `node` is marked pure.
pub fn entropy(node: &mut TreeNode, sample: &Sample) -> f64 {
    let counts = ClassCounts::from_indexes(sample, node.data_indexes());
    let value = counts.entropy();
    if counts.is_uniform() && node.purity == Purity::Mixed {
        node.purity = Purity::Uniform;
    }
    value
}


/// Entropy of `node` weighted by its share of the `n_total` rows.
#[inline]
pub fn weighted_entropy(node: &TreeNode, n_total: usize) -> f64 {
    let counts = node.class_counts();
    counts.total() as f64 / n_total as f64 * counts.entropy()
}


/// Weighted sum of the entropies of the children produced by `split`.
/// A rejected split produces no child, so it contributes nothing.
pub fn child_entropy(split: &SplitResult, n_total: usize) -> f64 {
    match split {
        SplitResult::Split { left, right } => {
            weighted_entropy(left, n_total) + weighted_entropy(right, n_total)
        },
        SplitResult::Rejected | SplitResult::Skipped => 0f64,
    }
}


/// Information gain of replacing `parent_entropy` by `child_entropy`.
#[inline(always)]
pub fn information_gain(parent_entropy: f64, child_entropy: f64) -> f64 {
    parent_entropy - child_entropy
}
