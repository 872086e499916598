//! This file defines some functions that checks some pre-conditions
//! E.g., the range of the prune factor.

use crate::{Error, Result};


/// Check whether the prune factor is in `[0, 1]`.
#[inline(always)]
pub(crate) fn prune_factor(factor: f64) -> Result<f64> {
    if (0f64..=1f64).contains(&factor) {
        Ok(factor)
    } else {
        Err(Error::InvalidArgument(
            format!("prune factor must be in [0, 1]. got {factor}.")
        ))
    }
}


/// Check whether the number of nodes to prune is achievable.
#[inline(always)]
pub(crate) fn prune_num(prune_num: usize, n_nodes: usize) {
    assert!(
        prune_num <= n_nodes,
        "cannot prune {prune_num} nodes from a tree of {n_nodes} nodes"
    );
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_factor_success_01() {
        assert_eq!(prune_factor(0f64).unwrap(), 0f64);
    }

    #[test]
    fn test_prune_factor_success_02() {
        assert_eq!(prune_factor(1f64).unwrap(), 1f64);
    }

    #[test]
    fn test_prune_factor_failure_01() {
        assert!(prune_factor(-0.1).is_err());
    }

    #[test]
    fn test_prune_factor_failure_02() {
        assert!(prune_factor(f64::NAN).is_err());
    }

    #[test]
    fn test_prune_num_success() {
        prune_num(0, 0);
        prune_num(5, 5);
    }

    #[test]
    #[should_panic]
    fn test_prune_num_failure() {
        prune_num(6, 5);
    }
}
