use ndarray::{ArrayView1, ArrayView2};

use crate::arch::predict;

/// Computes the classification accuracy of `w` over a dataset.
///
/// A row counts as a hit when the rounded hypothesis equals its label exactly.
///
/// # Arguments
/// * `x` - The feature matrix.
/// * `w` - The weight vector.
/// * `y` - The labels.
///
/// # Returns
/// The percentage of hits, in `[0, 100]`. An empty dataset scores 0.
pub fn accuracy(x: ArrayView2<f32>, w: ArrayView1<f32>, y: ArrayView1<f32>) -> f32 {
    if y.is_empty() {
        return 0.;
    }

    let hits = x
        .rows()
        .into_iter()
        .zip(y)
        .filter(|(xi, yi)| predict(w, *xi) == **yi)
        .count();

    hits as f32 / y.len() as f32 * 100.
}
