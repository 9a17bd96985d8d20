use std::num::NonZeroUsize;

use log::{debug, info};
use ndarray::{Array1, ArrayView1, ArrayView2};

use super::CostHistory;
use crate::{
    Result,
    arch::{check_shapes, gradient_into},
    evaluation::accuracy,
    optimization::Optimizer,
};

/// Batch gradient descent trainer. Every iteration uses the gradient accumulated over the
/// whole dataset, and training always runs for the configured amount of iterations.
pub struct BatchTrainer<O: Optimizer> {
    optimizer: O,
    iterations: NonZeroUsize,
}

impl<O: Optimizer> BatchTrainer<O> {
    /// Creates a new `BatchTrainer`.
    ///
    /// # Arguments
    /// * `optimizer` - The rule used to update the weights after each gradient computation.
    /// * `iterations` - The exact amount of iterations `train` will run.
    pub fn new(optimizer: O, iterations: NonZeroUsize) -> Self {
        Self {
            optimizer,
            iterations,
        }
    }

    /// Trains `w` in place over the given dataset.
    ///
    /// Each iteration computes the gradient, steps the weights and then measures the
    /// accuracy of the *updated* weights over the same data.
    ///
    /// # Arguments
    /// * `x` - The feature matrix.
    /// * `w` - The weights, modified in place.
    /// * `y` - The labels.
    ///
    /// # Returns
    /// The accuracy after every iteration, or a `SizeMismatch` error if the shapes of the
    /// arguments don't agree. Nothing can fail once the loop starts.
    pub fn train(
        &mut self,
        x: ArrayView2<f32>,
        w: &mut Array1<f32>,
        y: ArrayView1<f32>,
    ) -> Result<CostHistory> {
        check_shapes(x, w.view(), y)?;

        let iterations = self.iterations.get();
        let mut history = CostHistory::new(self.iterations);
        let mut grad = Array1::zeros(w.len());

        info!(
            "training over {} rows for {iterations} iterations",
            x.nrows()
        );

        for i in 0..iterations {
            gradient_into(w.view(), x, y, grad.view_mut());
            self.optimizer.update_params(w.view_mut(), grad.view());

            let cost = accuracy(x, w.view(), y);
            history.record(i, cost);
            debug!("iteration {i}: accuracy {cost:.2}%");
        }

        info!(
            "training finished with {:.2}% accuracy",
            history.last().unwrap_or_default()
        );

        Ok(history)
    }
}
