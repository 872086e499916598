use miniid3::prelude::*;
use polars::prelude::*;


fn sample(columns: &[(&str, &[i64])], class: &[i64]) -> Sample {
    let series = columns.iter()
        .map(|(name, values)| Series::new(name, *values))
        .collect::<Vec<_>>();
    let df = DataFrame::new(series).unwrap();
    let target = Series::new("Class", class);

    Sample::from_dataframe(df, target).unwrap()
}


// A | B | Class
// --+---+------
// 0 | 0 |   0
// 0 | 1 |   0
// 1 | 0 |   1
// 1 | 1 |   1
fn class_equals_a() -> Sample {
    sample(
        &[("A", &[0, 0, 1, 1]), ("B", &[0, 1, 0, 1])],
        &[0, 0, 1, 1],
    )
}


// Class = A xor B.
// No single feature reduces the entropy at the root.
fn xor() -> Sample {
    sample(
        &[("A", &[0, 0, 1, 1]), ("B", &[0, 1, 0, 1])],
        &[0, 1, 1, 0],
    )
}


#[test]
fn splits_on_the_informative_feature() {
    let sample = class_equals_a();
    let tree = Id3::init(&sample).train().unwrap();

    let root = tree.root();
    assert_eq!(root.feature_name(), Some("A"));
    assert_eq!(tree.node_count(), 3);
    assert_eq!(tree.leaf_count(), 2);

    let (left, right) = root.children().unwrap();
    assert!(left.is_leaf() && left.is_pure());
    assert!(right.is_leaf() && right.is_pure());
    assert_eq!(left.prediction(), Binary::Zero);
    assert_eq!(right.prediction(), Binary::One);
    assert_eq!(left.data_indexes(), &[0, 1]);
    assert_eq!(right.data_indexes(), &[2, 3]);

    assert_eq!(evaluate(&tree, &sample, &StopSet::new()), 1.0);
}


#[test]
fn single_class_sample_is_a_single_leaf() {
    let sample = sample(
        &[("A", &[0, 1, 0]), ("B", &[1, 1, 0])],
        &[1, 1, 1],
    );
    let tree = Id3::init(&sample).train().unwrap();

    assert!(tree.root().is_leaf());
    assert_eq!(tree.root().purity(), Purity::Uniform);
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.leaf_count(), 1);
    assert_eq!(tree.accuracy(&sample), 1.0);
}


#[test]
fn ties_follow_declaration_order() {
    let ab = sample(
        &[("A", &[0, 0, 1, 1]), ("B", &[0, 0, 1, 1])],
        &[0, 0, 1, 1],
    );
    let tree = Id3::init(&ab).train().unwrap();
    assert_eq!(tree.root().feature_name(), Some("A"));


    let ba = sample(
        &[("B", &[0, 0, 1, 1]), ("A", &[0, 0, 1, 1])],
        &[0, 0, 1, 1],
    );
    let tree = Id3::init(&ba).train().unwrap();
    assert_eq!(tree.root().feature_name(), Some("B"));
}


#[test]
fn falls_back_to_the_first_feature_without_gain() {
    let sample = xor();
    let tree = Id3::init(&sample).train().unwrap();

    assert_eq!(tree.root().feature_name(), Some("A"));
    assert_eq!(tree.node_count(), 7);
    assert_eq!(tree.leaf_count(), 4);

    let (left, right) = tree.root().children().unwrap();
    assert_eq!(left.feature_name(), Some("B"));
    assert_eq!(right.feature_name(), Some("B"));
    assert_eq!(tree.accuracy(&sample), 1.0);
}


#[test]
fn constant_feature_forces_a_leaf() {
    // Rows 0 and 1 agree on every feature but disagree on the class.
    let sample = sample(
        &[("A", &[0, 0, 1, 1]), ("B", &[0, 0, 1, 0])],
        &[0, 1, 1, 1],
    );
    let tree = Id3::init(&sample).train().unwrap();

    assert_eq!(tree.root().feature_name(), Some("A"));
    assert_eq!(tree.node_count(), 3);
    assert_eq!(tree.leaf_count(), 2);

    let (left, right) = tree.root().children().unwrap();
    assert_eq!(left.purity(), Purity::ForcedLeaf);
    assert!(left.is_leaf());
    assert_eq!(right.purity(), Purity::Uniform);

    // A forced leaf predicts the class of its first row.
    assert_eq!(left.data_indexes(), &[0, 1]);
    assert_eq!(left.prediction(), Binary::Zero);
    assert_eq!(tree.accuracy(&sample), 0.75);
}


#[test]
fn forced_root_predicts_first_row() {
    let sample = sample(&[("A", &[0, 0, 0])], &[0, 1, 1]);
    let tree = Id3::init(&sample).train().unwrap();

    assert_eq!(tree.root().purity(), Purity::ForcedLeaf);
    assert_eq!(tree.root().prediction(), Binary::Zero);
    assert_eq!(tree.accuracy(&sample), 1.0 / 3.0);
    assert_eq!(tree.to_string(), "Decision tree:0\n");
}


// R | X | Y | Class
// --+---+---+------
// 0 | 0 | 0 |   0
// 1 | 1 | 1 |   1
// 0 | 0 | 1 |   0
// 1 | 1 | 0 |   0
// 0 | 0 | 0 |   1
// 1 | 0 | 0 |   1
//
// `R` splits the root into two mixed nodes.
// `X` is constant on the left node and splits the right one;
// `Y` splits both.
#[test]
fn constant_feature_keeps_the_node_entropy() {
    let sample = sample(
        &[
            ("R", &[0, 1, 0, 1, 0, 1]),
            ("X", &[0, 1, 0, 1, 0, 0]),
            ("Y", &[0, 1, 1, 0, 0, 0]),
        ],
        &[0, 1, 0, 0, 1, 1],
    );
    let tree = Id3::init(&sample).train().unwrap();

    let root = tree.root();
    assert_eq!(root.feature_name(), Some("R"));

    // If the left node counted as entropy-free under `X`,
    // `X` would win this level and the left node would be forced.
    let (left, right) = root.children().unwrap();
    assert_eq!(left.purity(), Purity::Mixed);
    assert_eq!(left.feature_name(), Some("Y"));
    assert_eq!(right.feature_name(), Some("Y"));

    // `X` is committed on the next level.
    let (left_zero, left_one) = left.children().unwrap();
    assert_eq!(left_zero.data_indexes(), &[0, 4]);
    assert_eq!(left_zero.purity(), Purity::ForcedLeaf);
    assert_eq!(left_zero.prediction(), Binary::Zero);
    assert_eq!(left_one.purity(), Purity::Uniform);

    let (right_zero, right_one) = right.children().unwrap();
    assert_eq!(right_zero.data_indexes(), &[3, 5]);
    assert_eq!(right_zero.feature_name(), Some("X"));
    assert_eq!(right_one.purity(), Purity::Uniform);

    assert_eq!(tree.node_count(), 9);
    assert_eq!(tree.leaf_count(), 5);
    assert_eq!(tree.accuracy(&sample), 5.0 / 6.0);
}


#[test]
fn nodes_are_labeled_in_breadth_first_order() {
    let sample = xor();
    let tree = Id3::init(&sample).train().unwrap();

    let indexes = tree.nodes()
        .into_iter()
        .map(|node| node.node_index())
        .collect::<Vec<_>>();
    assert_eq!(indexes, (0..7).collect::<Vec<_>>());

    let (left, right) = tree.root().children().unwrap();
    assert_eq!(left.node_index(), 1);
    assert_eq!(right.node_index(), 2);
    assert_eq!(left.left().unwrap().node_index(), 3);
    assert_eq!(right.right().unwrap().node_index(), 6);
}


#[test]
fn empty_sample_cannot_be_trained() {
    let sample = Sample::new(["A", "B"]);
    let result = Id3::init(&sample).train();
    assert!(matches!(result, Err(Error::EmptySample)));
}


#[test]
fn verbose_training_builds_the_same_tree() {
    let sample = xor();
    let quiet = Id3::init(&sample).train().unwrap();
    let loud = Id3::init(&sample).verbose(true).train().unwrap();

    assert_eq!(quiet.to_string(), loud.to_string());
}


#[test]
fn print_single_level_tree() {
    let sample = class_equals_a();
    let tree = Id3::init(&sample).train().unwrap();

    let expected = "Decision tree:\nA = 0 : 0\nA = 1 : 1\n";
    assert_eq!(tree.to_string(), expected);
}


#[test]
fn print_two_level_tree() {
    let sample = xor();
    let tree = Id3::init(&sample).train().unwrap();

    // Branch lines end with "= v : " before the line break.
    let expected = "Decision tree:\n\
        A = 0 : \n\
        | B = 0 : 0\n\
        | B = 1 : 1\n\
        A = 1 : \n\
        | B = 0 : 1\n\
        | B = 1 : 0\n";
    assert_eq!(tree.to_string(), expected);
}
