//! The ID3 algorithm with level-synchronized induction.
use colored::Colorize;

use crate::{Error, Result, Sample};
use crate::constants::PRINT_WIDTH;
use super::{
    node::*,
    split::*,
    entropy::*,
    labeler::label_tree,
    id3_tree::Id3Tree,
};


/// The ID3 algorithm.
/// Given a set of training examples with binary features and
/// binary labels, [`Id3`] grows an [`Id3Tree`].
///
/// The tree grows one level at a time.
/// At each level, the single feature that maximizes
/// the total information gain over *all* nodes of the level
/// is used to split every node of the level,
/// and is never considered again.
/// Ties are broken by the declaration order of the features.
///
/// # Example
/// ```no_run
/// use miniid3::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/training_set.csv")
///     .target_feature("Class")
///     .read()
///     .unwrap();
///
/// let tree = Id3::init(&sample)
///     .verbose(true)
///     .train()
///     .unwrap();
///
/// let accuracy = tree.accuracy(&sample);
/// println!("accuracy (train) is: {accuracy}");
/// ```
pub struct Id3<'a> {
    sample: &'a Sample,
    verbose: bool,
}


impl<'a> Id3<'a> {
    /// Initialize [`Id3`] for the training sample `sample`.
    #[inline]
    pub fn init(sample: &'a Sample) -> Self {
        Self { sample, verbose: false, }
    }


    /// Set the verbose parameter.
    /// If `true`, [`Id3::train`] prints the feature chosen
    /// at each level.
    /// Default value is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Grow the tree and label its nodes in breadth-first order.
    pub fn train(&self) -> Result<Id3Tree> {
        let sample = self.sample;
        let n_sample = sample.len();
        if n_sample == 0 {
            return Err(Error::EmptySample);
        }

        let mut root = TreeNode::new((0..n_sample).collect(), sample);
        let parent_entropy = entropy(&mut root, sample);
        self.grow(&mut root, parent_entropy);

        let (n_nodes, n_leaves) = label_tree(&mut root);
        Ok(Id3Tree::from_components(root, n_nodes, n_leaves))
    }


    /// Split the tree under `root` level by level
    /// until the features run out or every branch is pure.
    fn grow(&self, root: &mut TreeNode, mut parent_entropy: f64) {
        let sample = self.sample;
        let n_sample = sample.len();

        let mut candidates = sample.feature_names()
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>();

        // Nodes at the current depth.
        let mut level = vec![root];
        let mut depth = 0_usize;
        while !candidates.is_empty() && !level.is_empty() {
            let mut max_gain = 0f64;
            let mut best = None;
            for (k, feature) in candidates.iter().enumerate() {
                let splits = level.iter()
                    .map(|node| try_split(node, feature, sample))
                    .collect::<Vec<_>>();

                let child = level_entropy(&level, &splits, n_sample);
                let gain = information_gain(parent_entropy, child);
                if gain > max_gain {
                    max_gain = gain;
                    best = Some((k, splits));
                }
            }


            // No feature reduces the entropy.
            // Fall back to the first remaining feature.
            let (k, splits) = match best {
                Some(best) => best,
                None => {
                    let splits = level.iter()
                        .map(|node| try_split(node, candidates[0], sample))
                        .collect::<Vec<_>>();
                    (0, splits)
                },
            };
            let feature = candidates.remove(k);


            let mut next = Vec::with_capacity(2 * level.len());
            for (node, split) in level.into_iter().zip(splits) {
                commit(node, feature, split);
                if let Some((left, right)) = node.children_mut() {
                    next.push(left);
                    next.push(right);
                }
            }

            if self.verbose {
                print_level(depth, feature, max_gain, next.len());
            }

            level = next;
            parent_entropy -= max_gain;
            depth += 1;
        }
    }
}


/// Weighted entropy of a level after applying `splits`.
/// A node whose split is rejected keeps its own entropy.
fn level_entropy(
    level: &[&mut TreeNode],
    splits: &[SplitResult],
    n_total: usize,
) -> f64
{
    level.iter()
        .zip(splits)
        .map(|(node, split)| match split {
            SplitResult::Rejected => weighted_entropy(node, n_total),
            _ => child_entropy(split, n_total),
        })
        .sum::<f64>()
}


fn print_level(depth: usize, feature: &str, gain: f64, n_next: usize) {
    println!(
        "{}    {}    {}    {}",
        format!("  [LEVEL {: >3}]", depth).bold().red(),
        format!("[FEATURE {:>PRINT_WIDTH$}]", feature).bold().green(),
        format!("[GAIN {:>PRINT_WIDTH$.5}]", gain).bold().yellow(),
        format!("[NEXT {:>PRINT_WIDTH$}]", n_next).bold().cyan(),
    );
}
