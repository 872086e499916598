//! The binary split policy.
//! `try_split` computes a candidate split without touching the node;
//! `commit` applies a candidate to the node.
use crate::{Binary, Sample};
use super::node::*;


/// Candidate split of a node on a feature.
#[derive(Debug)]
pub enum SplitResult {
    /// The node is pure; nothing to split.
    Skipped,
    /// The feature sends every row to one side.
    Rejected,
    /// Rows with value `0` go to `left`, rows with value `1` to `right`.
    Split {
        /// Rows with feature value `0`.
        left: TreeNode,
        /// Rows with feature value `1`.
        right: TreeNode,
    },
}


impl SplitResult {
    /// Returns `true` if this candidate produces children.
    #[inline]
    pub fn is_split(&self) -> bool {
        matches!(self, SplitResult::Split { .. })
    }
}


/// Partition the rows of `node` by the value of `feature`.
/// This function does not modify `node`.
pub fn try_split(node: &TreeNode, feature: &str, sample: &Sample)
    -> SplitResult
{
    if node.is_pure() {
        return SplitResult::Skipped;
    }

    let (lindices, rindices): (Vec<usize>, Vec<usize>) = node.data_indexes()
        .iter()
        .copied()
        .partition(|&i| sample[i].feature(feature) == Binary::Zero);


    // If the split has no meaning, the node cannot be grown.
    if lindices.is_empty() || rindices.is_empty() {
        return SplitResult::Rejected;
    }

    let left = TreeNode::new(lindices, sample);
    let right = TreeNode::new(rindices, sample);
    SplitResult::Split { left, right }
}


/// Apply `split`, computed by `try_split(node, feature, _)`, to `node`.
/// A rejected split turns `node` into a forced leaf.
pub fn commit(node: &mut TreeNode, feature: &str, split: SplitResult) {
    match split {
        SplitResult::Skipped => {},
        SplitResult::Rejected => {
            node.purity = Purity::ForcedLeaf;
        },
        SplitResult::Split { left, right } => {
            assert!(
                !node.is_pure() && node.is_leaf(),
                "Tried to split a pure or already split node"
            );
            node.feature_name = Some(feature.to_string());
            node.children = Some((Box::new(left), Box::new(right)));
        },
    }
}
