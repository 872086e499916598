//! Classification with a (virtually pruned) tree and its accuracy.

mod stop_set;
mod classifier;


pub use stop_set::StopSet;
pub use classifier::{
    Classifier,
    Pruned,
    evaluate,
    predict,
};
