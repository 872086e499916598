//! The ID3 decision tree: nodes, entropy, splitting, induction,
//! and labeling.

/// Defines the tree nodes.
pub mod node;
/// Defines entropy and information gain.
pub mod entropy;
/// Defines the binary split policy.
pub mod split;
/// Defines the breadth-first labeling.
pub mod labeler;

mod id3;
mod id3_tree;
mod printer;


pub use id3::Id3;
pub use id3_tree::Id3Tree;
pub use node::{TreeNode, Purity, ClassCounts};
pub use split::{SplitResult, try_split, commit};
pub use entropy::{entropy, child_entropy, information_gain};
pub use labeler::{label_tree, count_nodes_after_prune};
