use std::{env, path::PathBuf};

use anyhow::Context;
use log::info;

use digit_logreg::{config::TrainingConfig, pipeline};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = env::args_os().nth(1).map(PathBuf::from);
    let config = TrainingConfig::load(config_path.as_deref()).context("loading config")?;
    info!(
        "training with lr {} for {} iterations",
        config.learning_rate, config.iterations
    );

    let report = pipeline::run(&config).context("training run failed")?;

    info!(
        "max: {} min: {}",
        report.bounds.max(),
        report.bounds.min()
    );
    info!(
        "train accuracy: {:.2}%, test accuracy: {:.2}%",
        report.train_accuracy(),
        report.test_accuracy
    );

    Ok(())
}
