use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{LogRegErr, Result, initialization::WeightInit};

pub const DEFAULT_TRAIN_PATH: &str = "./data/data/usps-4-9-train.csv";
pub const DEFAULT_TEST_PATH: &str = "./data/data/usps-4-9-test-shuf.csv";
pub const DEFAULT_FEATURES: usize = 256;
pub const DEFAULT_ITERATIONS: usize = 100;
pub const DEFAULT_LEARNING_RATE: f32 = 0.1;

pub const ITERATIONS_VAR: &str = "LOGREG_ITERATIONS";
pub const LEARNING_RATE_VAR: &str = "LOGREG_LEARNING_RATE";

/// Everything a training run needs to know up front.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    pub train_path: PathBuf,
    pub test_path: PathBuf,
    /// Directory the artifacts are written to.
    pub output_dir: PathBuf,
    /// The amount of feature columns per line, the label is the extra column after them.
    pub features: NonZeroUsize,
    pub iterations: NonZeroUsize,
    pub learning_rate: f32,
    pub init: WeightInit,
    pub seed: Option<u64>,
    pub delimiter: char,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            train_path: DEFAULT_TRAIN_PATH.into(),
            test_path: DEFAULT_TEST_PATH.into(),
            output_dir: PathBuf::from("."),
            features: NonZeroUsize::new(DEFAULT_FEATURES).unwrap_or(NonZeroUsize::MIN),
            iterations: NonZeroUsize::new(DEFAULT_ITERATIONS).unwrap_or(NonZeroUsize::MIN),
            learning_rate: DEFAULT_LEARNING_RATE,
            init: WeightInit::default(),
            seed: None,
            delimiter: ',',
        }
    }
}

impl TrainingConfig {
    /// Loads a config from a JSON file. Missing fields keep their default value.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LogRegErr::io(path, e))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| LogRegErr::InvalidConfig(format!("invalid JSON: {e}")))
    }

    /// Resolves the config of a run: an optional JSON file, then the environment overrides.
    ///
    /// # Arguments
    /// * `path` - The JSON config file, if any.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };

        let config = config.with_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Applies the `LOGREG_*` overrides found through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ITERATIONS_VAR) {
            self.iterations = raw.trim().parse().map_err(|_| {
                LogRegErr::InvalidConfig(format!(
                    "{ITERATIONS_VAR} must be a positive integer, got '{raw}'"
                ))
            })?;
        }

        if let Some(raw) = lookup(LEARNING_RATE_VAR) {
            self.learning_rate = raw.trim().parse().map_err(|_| {
                LogRegErr::InvalidConfig(format!(
                    "{LEARNING_RATE_VAR} must be a number, got '{raw}'"
                ))
            })?;
        }

        Ok(self)
    }

    /// Checks the ranges that the type system doesn't already enforce.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(LogRegErr::InvalidConfig(format!(
                "learning rate must be positive, got {}",
                self.learning_rate
            )));
        }

        if self.delimiter.is_ascii_digit() || matches!(self.delimiter, '.' | '-' | '+') {
            return Err(LogRegErr::InvalidConfig(format!(
                "'{}' can't be used as a delimiter",
                self.delimiter
            )));
        }

        self.init.validate()
    }
}
