//! Breadth-first labeling and counting of tree nodes.
use std::collections::VecDeque;

use crate::StopSet;
use super::node::TreeNode;


/// Assign breadth-first indexes to the nodes under `root` (root is `0`)
/// and return the pair `(# of nodes, # of leaves)`.
pub fn label_tree(root: &mut TreeNode) -> (usize, usize) {
    let mut n_nodes = 0_usize;
    let mut n_leaves = 0_usize;

    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        node.node_index = n_nodes;
        n_nodes += 1;

        match node.children_mut() {
            Some((left, right)) => {
                queue.push_back(left);
                queue.push_back(right);
            },
            None => { n_leaves += 1; },
        }
    }

    (n_nodes, n_leaves)
}


/// Count `(# of nodes, # of leaves)` when the nodes in `stop_set`
/// are treated as leaves. Subtrees below a stop node are not counted.
pub fn count_nodes_after_prune(root: &TreeNode, stop_set: &StopSet)
    -> (usize, usize)
{
    let mut n_nodes = 0_usize;
    let mut n_leaves = 0_usize;

    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        n_nodes += 1;
        if stop_set.contains(node.node_index()) {
            n_leaves += 1;
            continue;
        }

        match node.children() {
            Some((left, right)) => {
                queue.push_back(left);
                queue.push_back(right);
            },
            None => { n_leaves += 1; },
        }
    }

    (n_nodes, n_leaves)
}
