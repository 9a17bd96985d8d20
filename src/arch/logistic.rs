use ndarray::{Array1, ArrayView1, ArrayView2, ArrayViewMut1};

use super::activations::Sigmoid;
use crate::{LogRegErr, Result};

/// Computes the probability the model assigns to the positive class for a single example.
///
/// # Arguments
/// * `w` - The weight vector.
/// * `xi` - A single row of the feature matrix.
///
/// # Returns
/// `sigmoid(w · xi)`.
pub fn hypothesis(w: ArrayView1<f32>, xi: ArrayView1<f32>) -> f32 {
    Sigmoid.f(w.dot(&xi))
}

/// Thresholds the hypothesis into a hard `{0, 1}` prediction.
pub fn predict(w: ArrayView1<f32>, xi: ArrayView1<f32>) -> f32 {
    hypothesis(w, xi).round()
}

/// Computes the batch gradient over every row of `x`.
///
/// The error of each row is taken against the *rounded* prediction, so rows that are
/// already classified correctly don't contribute at all.
///
/// # Arguments
/// * `w` - The weight vector.
/// * `x` - The feature matrix.
/// * `y` - The labels.
///
/// # Returns
/// A fresh gradient vector with the same length as `w`.
pub fn gradient(w: ArrayView1<f32>, x: ArrayView2<f32>, y: ArrayView1<f32>) -> Array1<f32> {
    let mut grad = Array1::zeros(w.len());
    gradient_into(w, x, y, grad.view_mut());
    grad
}

/// Same as `gradient` but writes into a caller provided buffer, which gets zeroed first.
pub fn gradient_into(
    w: ArrayView1<f32>,
    x: ArrayView2<f32>,
    y: ArrayView1<f32>,
    mut grad: ArrayViewMut1<f32>,
) {
    grad.fill(0.);

    for (xi, &yi) in x.rows().into_iter().zip(y) {
        let err = predict(w, xi) - yi;
        if err != 0. {
            grad.scaled_add(err, &xi);
        }
    }
}

/// Validates that the weights, features and labels agree on their sizes.
pub fn check_shapes(x: ArrayView2<f32>, w: ArrayView1<f32>, y: ArrayView1<f32>) -> Result<()> {
    if w.len() != x.ncols() {
        return Err(LogRegErr::SizeMismatch {
            a: "weights",
            b: "features",
            got: w.len(),
            expected: x.ncols(),
        });
    }

    if y.len() != x.nrows() {
        return Err(LogRegErr::SizeMismatch {
            a: "labels",
            b: "rows",
            got: y.len(),
            expected: x.nrows(),
        });
    }

    Ok(())
}
