//! Default parameters.

/// Default number of candidates evaluated by the pruning search.
pub const DEFAULT_MAX_ITER:    usize = 50;
/// Default accuracy improvement required to accept a candidate.
pub const DEFAULT_MARGIN:        f64 = 0.01;
/// Default seed of the pruning search.
pub const DEFAULT_SEED:          u64 = 1234;
/// Default name of the class column.
pub const DEFAULT_TARGET:       &str = "Class";

pub(crate) const PRINT_WIDTH:  usize = 9;
