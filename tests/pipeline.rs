use std::{
    env, fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use digit_logreg::{
    LogRegErr,
    artifacts::{ArtifactWriter, read_bounds, read_weights},
    config::TrainingConfig,
    initialization::WeightInit,
    pipeline,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("digit_logreg-e2e-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn config(dir: &Path, train: &str, test: &str) -> TrainingConfig {
    let train_path = dir.join("train.csv");
    let test_path = dir.join("test.csv");
    fs::write(&train_path, train).unwrap();
    fs::write(&test_path, test).unwrap();

    TrainingConfig {
        train_path,
        test_path,
        output_dir: dir.join("out"),
        features: NonZeroUsize::new(2).unwrap(),
        iterations: NonZeroUsize::new(50).unwrap(),
        learning_rate: 0.5,
        init: WeightInit::Const { value: 0.0 },
        seed: Some(0),
        ..Default::default()
    }
}

#[test]
fn trains_scores_and_persists() {
    let dir = scratch_dir("full");
    let config = config(&dir, "0,0,0\n0,1,0\n1,0,1\n1,1,1\n", "0,1,0\n1,1,1\n");

    let report = pipeline::run(&config).unwrap();

    assert_eq!(report.history.len(), 50);
    assert!(report.train_accuracy() >= 75.);
    assert_eq!(report.test_accuracy, 100.);
    assert_eq!((report.bounds.max(), report.bounds.min()), (1., 0.));

    let writer = ArtifactWriter::new(&config.output_dir);

    let weights = read_weights(writer.weights_path()).unwrap();
    assert_eq!(weights.len(), report.weights.len());
    for (a, b) in weights.iter().zip(&report.weights) {
        assert!((a - b).abs() < 1e-6);
    }

    assert_eq!(read_bounds(writer.bounds_path()).unwrap(), report.bounds);

    let history = fs::read_to_string(writer.cost_history_path()).unwrap();
    let lines: Vec<_> = history.lines().collect();
    assert_eq!(lines.len(), 50);
    assert!(lines[0].starts_with("0,"));
    assert!(lines[49].starts_with("49,"));
}

#[test]
fn test_set_uses_the_training_bounds() {
    let dir = scratch_dir("bounds");
    let config = config(&dir, "0,0,0\n0,4,0\n4,0,4\n4,4,4\n", "0,2,0\n8,8,4\n");

    let report = pipeline::run(&config).unwrap();

    // bounds fitted on the test set alone would have been (8, 0)
    assert_eq!((report.bounds.max(), report.bounds.min()), (4., 0.));
}

#[test]
fn degenerate_training_set_aborts_before_writing() {
    let dir = scratch_dir("degenerate");
    let config = config(&dir, "0,0,0\n0,0,0\n", "0,1,0\n");

    let err = pipeline::run(&config).unwrap_err();

    assert!(matches!(err, LogRegErr::Normalization(_)));
    assert!(!config.output_dir.exists());
}

#[test]
fn malformed_test_set_aborts() {
    let dir = scratch_dir("malformed");
    let config = config(&dir, "0,0,0\n1,1,1\n", "0,1,zero\n");

    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(err, LogRegErr::Parse { line: 1, column: 3, .. }));
}

#[test]
fn non_finite_test_values_abort_before_writing() {
    let dir = scratch_dir("nonfinite");
    let config = config(
        &dir,
        "0,0,0\n0,1,0\n1,0,1\n1,1,1\n",
        "1e40,1,1\nNaN,0,0\n",
    );

    let err = pipeline::run(&config).unwrap_err();

    assert!(matches!(err, LogRegErr::Parse { line: 1, column: 1, ref field } if field == "1e40"));
    assert!(!config.output_dir.exists());
}

#[test]
fn missing_training_file_is_an_io_error() {
    let dir = scratch_dir("missing");
    let mut config = config(&dir, "0,0,0\n", "0,0,0\n");
    config.train_path = dir.join("nope.csv");

    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(err, LogRegErr::Io { .. }));
}
