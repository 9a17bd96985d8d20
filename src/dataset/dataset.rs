use ndarray::{Array1, Array2, ArrayView1};

use crate::{LogRegErr, Result};

/// An in-memory labeled dataset: a feature matrix with one row per example and a label
/// per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    x: Array2<f32>,
    y: Array1<f32>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `x` - The feature matrix, shape `(rows, features)`.
    /// * `y` - The labels, one per row of `x`.
    ///
    /// # Returns
    /// An error if `x` and `y` have a different amount of rows or there are no rows.
    pub fn new(x: Array2<f32>, y: Array1<f32>) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(LogRegErr::SizeMismatch {
                a: "features",
                b: "labels",
                got: y.len(),
                expected: x.nrows(),
            });
        }

        if x.nrows() == 0 {
            return Err(LogRegErr::EmptyDataset);
        }

        Ok(Self { x, y })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.y.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Returns the amount of features per example.
    #[inline]
    pub fn features(&self) -> usize {
        self.x.ncols()
    }

    #[inline]
    pub fn x(&self) -> &Array2<f32> {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &Array1<f32> {
        &self.y
    }

    /// Returns the features of the example at `idx` (panics if out of bounds).
    #[inline]
    pub fn row(&self, idx: usize) -> ArrayView1<'_, f32> {
        self.x.row(idx)
    }

    /// Gives mutable access to both the features and labels at once.
    pub fn parts_mut(&mut self) -> (&mut Array2<f32>, &mut Array1<f32>) {
        (&mut self.x, &mut self.y)
    }
}
