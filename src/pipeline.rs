use log::info;
use ndarray::Array1;

use crate::{
    Result,
    arch::check_shapes,
    artifacts::ArtifactWriter,
    config::TrainingConfig,
    dataset::DatasetLoader,
    evaluation::accuracy,
    initialization::generate_rng,
    normalization::{Bounds, normalize, normalize_with},
    optimization::GradientDescent,
    training::{BatchTrainer, CostHistory},
};

/// The outcome of a full training run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub weights: Array1<f32>,
    pub bounds: Bounds,
    pub history: CostHistory,
    pub test_accuracy: f32,
}

impl RunReport {
    /// Returns the training accuracy reached on the last iteration.
    pub fn train_accuracy(&self) -> f32 {
        self.history.last().unwrap_or_default()
    }
}

/// Runs the whole job: load both datasets, normalize them with the training bounds, train,
/// score the test set and persist the artifacts.
///
/// # Errors
/// Any load, normalization, configuration or write failure aborts the run. Artifacts are
/// only written once training and evaluation succeeded.
pub fn run(config: &TrainingConfig) -> Result<RunReport> {
    config.validate()?;

    let loader = DatasetLoader::new(config.features, config.delimiter);
    let mut train = loader.load(&config.train_path)?;
    let mut test = loader.load(&config.test_path)?;

    let bounds = normalize(&mut train)?;
    normalize_with(&mut test, &bounds);

    let mut rng = generate_rng(config.seed);
    let mut weights = config.init.weights(train.features(), &mut rng)?;

    let optimizer = GradientDescent::new(config.learning_rate);
    let mut trainer = BatchTrainer::new(optimizer, config.iterations);
    let history = trainer.train(train.x().view(), &mut weights, train.y().view())?;

    check_shapes(test.x().view(), weights.view(), test.y().view())?;
    let test_accuracy = accuracy(test.x().view(), weights.view(), test.y().view());
    info!("test accuracy: {test_accuracy:.2}%");

    ArtifactWriter::new(&config.output_dir).save(weights.view(), &bounds, &history)?;

    Ok(RunReport {
        weights,
        bounds,
        history,
        test_accuracy,
    })
}
