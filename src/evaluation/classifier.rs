use rayon::prelude::*;

use crate::{Binary, DataPoint, Sample, Id3Tree, StopSet};
use crate::tree::TreeNode;


/// A trait that defines the behavior of a binary classifier.
/// You only need to implement `predict` method.
pub trait Classifier: Sync {
    /// Predicts the class of `point`.
    fn predict(&self, point: &DataPoint) -> Binary;


    /// Predicts the classes of every example in `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<Binary> {
        sample.points()
            .par_iter()
            .map(|point| self.predict(point))
            .collect::<Vec<_>>()
    }


    /// Returns the fraction of examples of `sample`
    /// whose class is predicted correctly.
    /// An empty sample has accuracy `0.0`.
    fn accuracy(&self, sample: &Sample) -> f64 {
        if sample.is_empty() {
            return 0f64;
        }
        let n_correct = sample.points()
            .par_iter()
            .filter(|point| self.predict(point) == point.class_name())
            .count();

        n_correct as f64 / sample.len() as f64
    }
}


/// An [`Id3Tree`] whose nodes in a [`StopSet`] are treated as leaves.
#[derive(Debug, Clone, Copy)]
pub struct Pruned<'a> {
    tree: &'a Id3Tree,
    stop_set: &'a StopSet,
}


impl<'a> Pruned<'a> {
    #[inline]
    pub(crate) fn new(tree: &'a Id3Tree, stop_set: &'a StopSet) -> Self {
        Self { tree, stop_set }
    }


    /// Returns the node at which `point` stops.
    pub fn stopping_node(&self, point: &DataPoint) -> &'a TreeNode {
        let mut node = self.tree.root();
        while let Some((left, right)) = node.children() {
            if self.stop_set.contains(node.node_index()) {
                break;
            }
            // Branch nodes always have a feature name.
            let feature = node.feature_name().unwrap_or_default();
            node = match point.feature(feature) {
                Binary::Zero => left,
                Binary::One => right,
            };
        }
        node
    }
}


impl Classifier for Pruned<'_> {
    #[inline]
    fn predict(&self, point: &DataPoint) -> Binary {
        self.stopping_node(point).prediction()
    }
}


/// Accuracy of `tree` on `sample` when the nodes in `stop_set`
/// are treated as leaves.
/// Pass an empty `StopSet` to descend to the true leaves.
#[inline]
pub fn evaluate(tree: &Id3Tree, sample: &Sample, stop_set: &StopSet) -> f64 {
    tree.pruned(stop_set).accuracy(sample)
}


/// Predicts the class of `point` with `tree` pruned at `stop_set`.
#[inline]
pub fn predict(tree: &Id3Tree, point: &DataPoint, stop_set: &StopSet)
    -> Binary
{
    tree.pruned(stop_set).predict(point)
}
