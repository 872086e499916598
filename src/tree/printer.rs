//! Renders a tree as indented text:
//!
//! ```text
//! Decision tree:
//! XA = 0 :
//! | XB = 0 : 1
//! | XB = 1 : 0
//! XA = 1 : 1
//! ```
use std::fmt;

use crate::Binary;
use super::node::TreeNode;
use super::id3_tree::Id3Tree;


impl fmt::Display for Id3Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decision tree:")?;
        write_node(self.root(), 0, f)
    }
}


fn write_node(node: &TreeNode, depth: usize, f: &mut fmt::Formatter<'_>)
    -> fmt::Result
{
    let (left, right) = match node.children() {
        Some(children) => children,
        None => {
            return writeln!(f, "{}", node.prediction());
        },
    };

    // Branch nodes always have a feature name.
    let feature = node.feature_name().unwrap_or_default();
    let indent = "| ".repeat(depth);

    writeln!(f)?;
    write!(f, "{indent}{feature} = {} : ", Binary::Zero)?;
    write_node(left, depth + 1, f)?;
    write!(f, "{indent}{feature} = {} : ", Binary::One)?;
    write_node(right, depth + 1, f)
}
