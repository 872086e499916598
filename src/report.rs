//! Summaries printed before and after pruning.
use colored::Colorize;

use std::fmt;

use crate::Sample;


/// Size and accuracy of a tree on one dataset.
///
/// ```text
/// Number of training instances = 600
/// Number of training attributes = 20
/// Total number of nodes in the tree = 297
/// Number of leaf nodes in the tree = 149
/// Accuracy of the model on the training dataset = 100.0%
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    name: String,
    n_instances: usize,
    n_attributes: usize,
    tree_size: Option<(usize, usize)>,
    accuracy: f64,
    stage: Option<String>,
}


impl Summary {
    /// Construct a summary of `accuracy` (in `[0, 1]`) on `sample`.
    /// `name` is the name of the dataset, e.g., `"training"`.
    pub fn new<S: Into<String>>(name: S, sample: &Sample, accuracy: f64)
        -> Self
    {
        let (n_instances, n_attributes) = sample.shape();
        Self {
            name: name.into(),
            n_instances,
            n_attributes,
            tree_size: None,
            accuracy,
            stage: None,
        }
    }


    /// Also report the number of nodes and leaves.
    #[inline]
    pub fn tree_size(mut self, n_nodes: usize, n_leaves: usize) -> Self {
        self.tree_size = Some((n_nodes, n_leaves));
        self
    }


    /// Qualify the accuracy line, e.g., `"before pruning"`.
    #[inline]
    pub fn stage<S: Into<String>>(mut self, stage: S) -> Self {
        self.stage = Some(stage.into());
        self
    }
}


impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.name;
        writeln!(f, "Number of {name} instances = {}", self.n_instances)?;
        writeln!(f, "Number of {name} attributes = {}", self.n_attributes)?;

        if let Some((n_nodes, n_leaves)) = self.tree_size {
            writeln!(f, "Total number of nodes in the tree = {n_nodes}")?;
            writeln!(f, "Number of leaf nodes in the tree = {n_leaves}")?;
        }

        let stage = self.stage.as_ref()
            .map(|stage| format!(" {stage}"))
            .unwrap_or_default();
        write!(
            f,
            "Accuracy of the model on the {name} dataset{stage} = {:.1}%",
            self.accuracy * 100f64
        )
    }
}


/// Print a section header.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().blue());
    println!("{}", "- ".repeat(13).trim_end());
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Binary, DataPoint};
    use std::collections::HashMap;

    #[test]
    fn render_summary() {
        let mut sample = Sample::new(["A"]);
        for class in [true, false] {
            let map = HashMap::from([("A".to_string(), Binary::One)]);
            sample.push(DataPoint::new(map, Binary::from(class))).unwrap();
        }

        let summary = Summary::new("validation", &sample, 0.5)
            .tree_size(3, 2)
            .stage("after pruning");
        let expected = "\
            Number of validation instances = 2\n\
            Number of validation attributes = 1\n\
            Total number of nodes in the tree = 3\n\
            Number of leaf nodes in the tree = 2\n\
            Accuracy of the model on the validation dataset after pruning = 50.0%";
        assert_eq!(format!("{summary}"), expected);

        let summary = Summary::new("test", &sample, 1.0);
        assert!(format!("{summary}").ends_with("test dataset = 100.0%"));
    }
}
