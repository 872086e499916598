//! Exports the standard structs, traits and functions.
//!
pub use crate::error::{Error, Result};

pub use crate::sample::{
    Binary,
    DataPoint,
    Sample,
    SampleReader,
};

pub use crate::tree::{
    Id3,
    Id3Tree,
    TreeNode,
    Purity,
    count_nodes_after_prune,
};

pub use crate::evaluation::{
    Classifier,
    StopSet,
    evaluate,
};

pub use crate::pruning::{
    PruneSearch,
    PruneOutcome,
};

pub use crate::report::Summary;
