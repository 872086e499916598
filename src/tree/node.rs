//! Defines the node of the ID3 decision tree.
use crate::{Binary, Sample};

use std::fmt;


/// Purity state of a [`TreeNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purity {
    /// The node covers both classes and may still be split.
    Mixed,
    /// Every row reaching this node has the same class.
    Uniform,
    /// The committed feature does not separate the rows of this node,
    /// so the node became a leaf although its classes may be mixed.
    ForcedLeaf,
}


/// Number of rows of each class covered by a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassCounts {
    /// Number of rows labeled `0`.
    pub zeros: usize,
    /// Number of rows labeled `1`.
    pub ones: usize,
}


impl ClassCounts {
    /// Count the classes of `sample` at the given rows.
    pub fn from_indexes(sample: &Sample, indexes: &[usize]) -> Self {
        indexes.iter()
            .fold(Self::default(), |mut counts, &i| {
                match sample.class_of(i) {
                    Binary::Zero => counts.zeros += 1,
                    Binary::One => counts.ones += 1,
                }
                counts
            })
    }


    /// Returns the total number of rows.
    #[inline]
    pub fn total(&self) -> usize {
        self.zeros + self.ones
    }


    /// Returns `true` if at most one class is present.
    #[inline]
    pub fn is_uniform(&self) -> bool {
        self.zeros == 0 || self.ones == 0
    }


    /// Majority class.
    /// Class `0` wins only if it covers strictly more than half the rows.
    #[inline]
    pub fn majority(&self) -> Binary {
        Binary::from(2 * self.zeros <= self.total())
    }
}


/// A node of the ID3 decision tree.
/// Each node refers to the training rows reaching it by index.
/// A node has either two children or none.
pub struct TreeNode {
    pub(crate) data_indexes: Vec<usize>,
    pub(crate) feature_name: Option<String>,
    pub(crate) children: Option<(Box<TreeNode>, Box<TreeNode>)>,
    pub(crate) purity: Purity,
    pub(crate) node_index: usize,

    // Class distribution over `data_indexes`,
    // and the class of `data_indexes[0]`.
    pub(crate) counts: ClassCounts,
    pub(crate) first_class: Binary,
}


impl TreeNode {
    /// Construct a childless node covering the rows `data_indexes`.
    /// The node is `Uniform` if its rows share one class.
    ///
    /// Panics if `data_indexes` is empty.
    pub fn new(data_indexes: Vec<usize>, sample: &Sample) -> Self {
        assert!(
            !data_indexes.is_empty(),
            "A tree node must cover at least one row"
        );
        let counts = ClassCounts::from_indexes(sample, &data_indexes[..]);
        let first_class = sample.class_of(data_indexes[0]);
        let purity = if counts.is_uniform() {
            Purity::Uniform
        } else {
            Purity::Mixed
        };

        Self {
            data_indexes,
            feature_name: None,
            children: None,
            purity,
            node_index: 0,
            counts,
            first_class,
        }
    }


    /// Returns the rows reaching this node.
    #[inline]
    pub fn data_indexes(&self) -> &[usize] {
        &self.data_indexes[..]
    }


    /// Returns the feature this node splits on.
    #[inline]
    pub fn feature_name(&self) -> Option<&str> {
        self.feature_name.as_deref()
    }


    /// Returns the child for feature value `0`.
    #[inline]
    pub fn left(&self) -> Option<&TreeNode> {
        self.children.as_ref().map(|(left, _)| left.as_ref())
    }


    /// Returns the child for feature value `1`.
    #[inline]
    pub fn right(&self) -> Option<&TreeNode> {
        self.children.as_ref().map(|(_, right)| right.as_ref())
    }


    /// Returns both children.
    #[inline]
    pub fn children(&self) -> Option<(&TreeNode, &TreeNode)> {
        self.children.as_ref()
            .map(|(left, right)| (left.as_ref(), right.as_ref()))
    }


    #[inline]
    pub(crate) fn children_mut(&mut self)
        -> Option<(&mut TreeNode, &mut TreeNode)>
    {
        self.children.as_mut()
            .map(|(left, right)| (left.as_mut(), right.as_mut()))
    }


    /// Returns the child that the given feature value leads to.
    #[inline]
    pub fn child(&self, value: Binary) -> Option<&TreeNode> {
        match value {
            Binary::Zero => self.left(),
            Binary::One => self.right(),
        }
    }


    /// Returns the purity state.
    #[inline]
    pub fn purity(&self) -> Purity {
        self.purity
    }


    /// Returns `true` if this node needs no further split.
    #[inline]
    pub fn is_pure(&self) -> bool {
        self.purity != Purity::Mixed
    }


    /// Returns `true` if this node has no child.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }


    /// Returns the breadth-first index of this node.
    #[inline]
    pub fn node_index(&self) -> usize {
        self.node_index
    }


    /// Returns the class distribution of the covered training rows.
    #[inline]
    pub fn class_counts(&self) -> ClassCounts {
        self.counts
    }


    /// Predicts the class of a row that stops at this node.
    /// A pure node (`Uniform` or `ForcedLeaf`) predicts the class
    /// of its first row. A `Mixed` node, reached only through
    /// a stop-set, predicts the majority class of its rows.
    #[inline]
    pub fn prediction(&self) -> Binary {
        match self.purity {
            Purity::Uniform | Purity::ForcedLeaf => self.first_class,
            Purity::Mixed => self.counts.majority(),
        }
    }
}


impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("index", &self.node_index)
            .field("feature", &self.feature_name)
            .field("purity", &self.purity)
            .field("rows", &self.data_indexes.len())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}
