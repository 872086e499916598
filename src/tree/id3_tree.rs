//! Defines the tree produced by [`Id3`](crate::Id3).
use crate::{Binary, DataPoint, StopSet};
use crate::evaluation::{Classifier, Pruned};
use super::node::TreeNode;
use super::labeler::count_nodes_after_prune;


/// A labeled ID3 decision tree.
/// This struct is a wrapper of the root [`TreeNode`]
/// together with its node and leaf counts.
#[derive(Debug)]
pub struct Id3Tree {
    root: TreeNode,
    n_nodes: usize,
    n_leaves: usize,
}


impl Id3Tree {
    /// Construct an `Id3Tree` from a root that is already labeled.
    #[inline]
    pub(crate) fn from_components(
        root: TreeNode,
        n_nodes: usize,
        n_leaves: usize,
    ) -> Self
    {
        Self { root, n_nodes, n_leaves, }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }


    /// Returns the total number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.n_nodes
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.n_leaves
    }


    /// Returns a view of this tree where the nodes in `stop_set`
    /// are treated as leaves.
    #[inline]
    pub fn pruned<'a>(&'a self, stop_set: &'a StopSet) -> Pruned<'a> {
        Pruned::new(self, stop_set)
    }


    /// Count `(# of nodes, # of leaves)` of this tree pruned at `stop_set`.
    #[inline]
    pub fn count_nodes_after_prune(&self, stop_set: &StopSet)
        -> (usize, usize)
    {
        count_nodes_after_prune(&self.root, stop_set)
    }


    /// Visit the nodes in breadth-first order.
    pub fn nodes(&self) -> Vec<&TreeNode> {
        let mut nodes = vec![&self.root];
        let mut k = 0;
        while k < nodes.len() {
            let node = nodes[k];
            if let Some((left, right)) = node.children() {
                nodes.push(left);
                nodes.push(right);
            }
            k += 1;
        }
        nodes
    }
}


impl Classifier for Id3Tree {
    #[inline]
    fn predict(&self, point: &DataPoint) -> Binary {
        self.pruned(&StopSet::new()).predict(point)
    }
}
