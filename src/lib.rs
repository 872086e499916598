#![warn(missing_docs)]

//!
//! A crate that grows ID3 decision trees over binary features
//! and prunes them by a randomized search.
//!
//! - Induction
//!     [`Id3`] grows the tree one level at a time.
//!     At each level, the feature with the largest total information
//!     gain over the level splits every node of the level.
//!
//! - Evaluation
//!     [`evaluate`] measures the accuracy of a tree.
//!     A [`StopSet`] of node indexes makes the evaluation stop early
//!     at those nodes, as if the tree were pruned there.
//!
//! - Pruning
//!     [`PruneSearch`] draws random stop-sets and keeps the first one
//!     that improves the validation accuracy.
//!
//! # Example
//! ```no_run
//! use miniid3::prelude::*;
//!
//! fn main() -> miniid3::Result<()> {
//!     let train = SampleReader::default()
//!         .file("training_set.csv")
//!         .target_feature("Class")
//!         .read()?;
//!     let validation = SampleReader::default()
//!         .file("validation_set.csv")
//!         .target_feature("Class")
//!         .read()?;
//!
//!     let tree = Id3::init(&train).train()?;
//!     println!("{tree}");
//!
//!     let base = evaluate(&tree, &validation, &StopSet::new());
//!     let outcome = PruneSearch::from_factor(tree.node_count(), 0.2)?
//!         .run(&tree, &validation, base);
//!     println!("validation accuracy: {base} -> {}", outcome.accuracy);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod constants;
pub mod sample;
pub mod tree;
pub mod evaluation;
pub mod pruning;
pub mod report;
pub mod prelude;

pub(crate) mod common;


pub use error::{Error, Result};

pub use sample::{
    Binary,
    DataPoint,
    Sample,
    SampleReader,
};

pub use tree::{
    Id3,
    Id3Tree,
    TreeNode,
    Purity,
};

pub use evaluation::{
    Classifier,
    StopSet,
    evaluate,
};

pub use pruning::{
    PruneSearch,
    PruneOutcome,
};
