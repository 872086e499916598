use colored::Colorize;
use miniid3::prelude::*;
use miniid3::report::print_header;
use miniid3::constants::DEFAULT_TARGET;

use std::process;

const USAGE: &str = "\
[USAGE] miniid3 \
[csv file (training)] [csv file (validation)] [csv file (test)] \
[prune factor in [0, 1]]";


fn main() {
    let args = std::env::args().skip(1).collect::<Vec<_>>();

    if args.len() != 4 {
        eprintln!(
            "{}",
            format!("Four arguments needed! Found: {}", args.len()).bold().red()
        );
        eprintln!("{USAGE}");
        process::exit(1);
    }

    if let Err(err) = run(&args) {
        eprintln!("{} {err}", "[ERROR]".bold().red());
        process::exit(1);
    }
}


fn read(path: &str) -> Result<Sample> {
    SampleReader::default()
        .file(path)
        .has_header(true)
        .target_feature(DEFAULT_TARGET)
        .read()
}


fn run(args: &[String]) -> Result<()> {
    let prune_factor = args[3].parse::<f64>()
        .map_err(|_| {
            Error::InvalidArgument(format!("`{}` is not a number", args[3]))
        })?;

    println!("Use training data from {}", args[0]);
    println!("Use validation data from {}", args[1]);
    println!("Use test data from {}", args[2]);
    println!("Use prune factor: {prune_factor}");
    println!();

    let train = read(&args[0])?;
    let validation = read(&args[1])?;
    let test = read(&args[2])?;
    train.check_compatible(&validation)?;
    train.check_compatible(&test)?;


    // ---------------------------------------------------------------------
    // Training
    let tree = Id3::init(&train).train()?;
    print!("{tree}");

    let no_stop = StopSet::new();
    let (n_nodes, n_leaves) = (tree.node_count(), tree.leaf_count());


    // ---------------------------------------------------------------------
    // Before pruning
    print_header("Pre-Pruned Accuracy");
    let accuracy = evaluate(&tree, &train, &no_stop);
    let summary = Summary::new("training", &train, accuracy)
        .tree_size(n_nodes, n_leaves);
    println!("{summary}\n");

    let validation_accuracy = evaluate(&tree, &validation, &no_stop);
    let summary = Summary::new("validation", &validation, validation_accuracy)
        .stage("before pruning");
    println!("{summary}\n");

    let accuracy = evaluate(&tree, &test, &no_stop);
    let summary = Summary::new("test", &test, accuracy)
        .stage("before pruning");
    println!("{summary}");


    // ---------------------------------------------------------------------
    // Pruning
    print_header("Post-Pruned Accuracy");
    let outcome = PruneSearch::from_factor(n_nodes, prune_factor)?
        .run(&tree, &validation, validation_accuracy);
    let stop_set = &outcome.stop_set;
    let (n_nodes, n_leaves) = tree.count_nodes_after_prune(stop_set);


    // ---------------------------------------------------------------------
    // After pruning
    let accuracy = evaluate(&tree, &train, stop_set);
    let summary = Summary::new("training", &train, accuracy)
        .tree_size(n_nodes, n_leaves);
    println!("{summary}\n");

    let summary = Summary::new("validation", &validation, outcome.accuracy)
        .stage("after pruning");
    println!("{summary}");
    if stop_set.is_empty() {
        println!("{}", "Pruning did not improve validation accuracy!".yellow());
    }
    println!();

    let accuracy = evaluate(&tree, &test, stop_set);
    let summary = Summary::new("test", &test, accuracy)
        .stage("after pruning");
    println!("{summary}");

    Ok(())
}
