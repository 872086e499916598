//! Randomized post-pruning.
//!
//! [`PruneSearch`] repeatedly picks a random set of nodes,
//! treats them as leaves, and keeps the first set
//! that improves the validation accuracy by more than a margin.
//! The tree itself is never modified.
use rand::prelude::*;
use rand::seq::index;
use colored::Colorize;

use crate::{Result, Sample, Id3Tree, StopSet};
use crate::common::checker;
use crate::evaluation::evaluate;
use crate::constants::{
    DEFAULT_MAX_ITER,
    DEFAULT_MARGIN,
    DEFAULT_SEED,
    PRINT_WIDTH,
};


/// The result of [`PruneSearch::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct PruneOutcome {
    /// Validation accuracy with `stop_set`,
    /// or the baseline accuracy if no candidate was accepted.
    pub accuracy: f64,
    /// The accepted stop-set. Empty if no candidate was accepted.
    pub stop_set: StopSet,
    /// Number of candidates evaluated.
    pub iterations: usize,
    /// `true` if a candidate was accepted.
    pub improved: bool,
}


/// A randomized local search for a stop-set.
/// # Example
/// ```no_run
/// use miniid3::prelude::*;
///
/// # fn run(train: &Sample, validation: &Sample) -> miniid3::Result<()> {
/// let tree = Id3::init(train).train()?;
/// let base = evaluate(&tree, validation, &StopSet::new());
///
/// let outcome = PruneSearch::from_factor(tree.node_count(), 0.1)?
///     .max_iter(100)
///     .seed(777)
///     .run(&tree, validation, base);
///
/// let (n_nodes, n_leaves) = tree.count_nodes_after_prune(&outcome.stop_set);
/// println!("{n_nodes} nodes, {n_leaves} leaves, {}", outcome.accuracy);
/// # Ok(())
/// # }
/// ```
pub struct PruneSearch {
    n_nodes: usize,
    prune_num: usize,
    max_iter: usize,
    margin: f64,
    seed: u64,
    verbose: bool,
}


impl PruneSearch {
    /// Construct a new instance of `PruneSearch`
    /// that prunes `prune_num` out of `n_nodes` nodes.
    ///
    /// Panics if `prune_num > n_nodes`.
    pub fn new(n_nodes: usize, prune_num: usize) -> Self {
        checker::prune_num(prune_num, n_nodes);
        Self {
            n_nodes,
            prune_num,
            max_iter: DEFAULT_MAX_ITER,
            margin: DEFAULT_MARGIN,
            seed: DEFAULT_SEED,
            verbose: false,
        }
    }


    /// Construct a new instance of `PruneSearch` that prunes
    /// `floor(n_nodes * factor)` nodes.
    /// `factor` must be in `[0, 1]`.
    pub fn from_factor(n_nodes: usize, factor: f64) -> Result<Self> {
        let factor = checker::prune_factor(factor)?;
        let prune_num = (n_nodes as f64 * factor) as usize;
        Ok(Self::new(n_nodes, prune_num.min(n_nodes)))
    }


    /// Set the maximal number of candidates to evaluate.
    /// Default value is `50`.
    #[inline]
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }


    /// Set the accuracy improvement a candidate must exceed.
    /// Default value is `0.01`.
    #[inline]
    pub fn margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }


    /// Set the seed of the randomness used by [`PruneSearch::run`].
    /// Default value is `1234`.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, every candidate is printed.
    /// Default value is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Returns the number of nodes each candidate prunes.
    #[inline]
    pub fn prune_num(&self) -> usize {
        self.prune_num
    }


    /// Run the search with a `StdRng` seeded by [`PruneSearch::seed`].
    pub fn run(&self, tree: &Id3Tree, validation: &Sample, base_accuracy: f64)
        -> PruneOutcome
    {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.run_with_rng(tree, validation, base_accuracy, &mut rng)
    }


    /// Run the search drawing candidates from `rng`.
    /// Each candidate holds `prune_num` distinct node indexes
    /// drawn uniformly from `[0, n_nodes)`.
    pub fn run_with_rng<R>(
        &self,
        tree: &Id3Tree,
        validation: &Sample,
        base_accuracy: f64,
        rng: &mut R,
    ) -> PruneOutcome
        where R: Rng + ?Sized,
    {
        for iter in 1..=self.max_iter {
            let mut stop_set = StopSet::with_capacity(self.n_nodes);
            stop_set.extend(index::sample(rng, self.n_nodes, self.prune_num));

            let accuracy = evaluate(tree, validation, &stop_set);

            if self.verbose {
                print_candidate(iter, &stop_set, accuracy, base_accuracy);
            }

            if accuracy - base_accuracy > self.margin {
                return PruneOutcome {
                    accuracy,
                    stop_set,
                    iterations: iter,
                    improved: true,
                };
            }
        }

        PruneOutcome {
            accuracy: base_accuracy,
            stop_set: StopSet::new(),
            iterations: self.max_iter,
            improved: false,
        }
    }
}


fn print_candidate(iter: usize, stop_set: &StopSet, accuracy: f64, base: f64) {
    println!(
        "{}    {}    {}",
        format!("  [{: >3}'th candidate]", iter).bold().red(),
        format!("[ACC. {:>PRINT_WIDTH$.4}]", accuracy).bold().green(),
        format!("[BASE {:>PRINT_WIDTH$.4}]", base).bold().yellow(),
    );
    println!("      {stop_set:?}");
}
