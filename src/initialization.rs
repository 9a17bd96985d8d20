use ndarray::Array1;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Uniform};
use serde::Deserialize;

use crate::{LogRegErr, Result};

/// How the weight vector is filled before training.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WeightInit {
    /// Samples every weight uniformly from `[low, high]`.
    Random { low: f32, high: f32 },
    /// Sets every weight to `value`.
    Const { value: f32 },
}

impl Default for WeightInit {
    fn default() -> Self {
        Self::Random {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl WeightInit {
    /// Checks that the strategy can actually produce weights.
    ///
    /// # Returns
    /// An `InvalidConfig` error if a bound or value is not finite or `low >= high`.
    pub fn validate(&self) -> Result<()> {
        match *self {
            WeightInit::Random { low, high } => {
                if !low.is_finite() || !high.is_finite() || low >= high {
                    return Err(LogRegErr::InvalidConfig(format!(
                        "random init range [{low}, {high}] is invalid"
                    )));
                }
            }
            WeightInit::Const { value } => {
                if !value.is_finite() {
                    return Err(LogRegErr::InvalidConfig(format!(
                        "const init value {value} is not finite"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Generates a new weight vector.
    ///
    /// # Arguments
    /// * `n` - The amount of weights.
    /// * `rng` - A random number generator, only used by `Random`.
    pub fn weights<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Array1<f32>> {
        self.validate()?;

        let weights: Array1<f32> = match *self {
            WeightInit::Random { low, high } => {
                let distribution = Uniform::new_inclusive(low, high)
                    .map_err(|e| LogRegErr::InvalidConfig(e.to_string()))?;
                distribution.sample_iter(rng).take(n).collect()
            }
            WeightInit::Const { value } => Array1::from_elem(n, value),
        };

        Ok(weights)
    }
}

/// Builds the random number generator for a run, seeded when reproducibility is wanted.
pub fn generate_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
