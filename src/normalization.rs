use log::{info, warn};
use ndarray::{Array1, Array2};

use crate::{LogRegErr, Result, dataset::Dataset};

/// The global `(max, min)` pair used to rescale a dataset into `[0, 1]`.
///
/// A single pair is shared by the features and the labels, it's computed once from the
/// training data and then reused as-is for every dataset scored by the same model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    max: f32,
    min: f32,
}

impl Bounds {
    /// Creates a new `Bounds`.
    ///
    /// # Returns
    /// An error if either value is not finite or `max <= min`, since the rescale would
    /// divide by zero or flip the data.
    pub fn new(max: f32, min: f32) -> Result<Self> {
        if !max.is_finite() || !min.is_finite() {
            return Err(LogRegErr::Normalization(format!(
                "bounds must be finite, got max {max} and min {min}"
            )));
        }

        if max <= min {
            return Err(LogRegErr::Normalization(format!(
                "max ({max}) must be greater than min ({min})"
            )));
        }

        Ok(Self { max, min })
    }

    /// Derives the bounds jointly from a feature matrix and its labels.
    ///
    /// # Arguments
    /// * `x` - The feature matrix.
    /// * `y` - The label vector.
    ///
    /// # Returns
    /// The largest and smallest value across both, or a `Normalization` error when the data
    /// is empty, constant or contains non-finite values.
    pub fn fit(x: &Array2<f32>, y: &Array1<f32>) -> Result<Self> {
        let mut values = x.iter().chain(y.iter()).copied().peekable();
        if values.peek().is_none() {
            return Err(LogRegErr::Normalization("there is no data".into()));
        }

        let mut max = f32::NEG_INFINITY;
        let mut min = f32::INFINITY;

        for v in values {
            if !v.is_finite() {
                return Err(LogRegErr::Normalization(format!(
                    "found non-finite value {v}"
                )));
            }

            max = max.max(v);
            min = min.min(v);
        }

        if max == min {
            return Err(LogRegErr::Normalization(format!(
                "every value equals {max}, the dataset is degenerate"
            )));
        }

        Self::new(max, min)
    }

    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Rescales a single value with these bounds.
    #[inline]
    pub fn scale(&self, v: f32) -> f32 {
        (v - self.min) / (self.max - self.min)
    }

    /// Rescales every feature and label in place without recomputing the bounds.
    ///
    /// # Arguments
    /// * `x` - The feature matrix.
    /// * `y` - The label vector.
    pub fn apply(&self, x: &mut Array2<f32>, y: &mut Array1<f32>) {
        x.mapv_inplace(|v| self.scale(v));
        y.mapv_inplace(|v| self.scale(v));
    }
}

/// Min-max normalizes a dataset in place using the bounds derived from itself.
///
/// # Returns
/// The bounds that were applied, to be reused on other datasets.
pub fn normalize(dataset: &mut Dataset) -> Result<Bounds> {
    let (x, y) = dataset.parts_mut();
    let bounds = Bounds::fit(x, y)?;
    bounds.apply(x, y);

    info!(
        "normalized with max {} and min {}",
        bounds.max(),
        bounds.min()
    );

    Ok(bounds)
}

/// Rescales a dataset in place with previously computed bounds.
///
/// Values that end up outside `[0, 1]` are kept, they only mean the dataset spans a wider
/// range than the one the bounds were fitted on.
pub fn normalize_with(dataset: &mut Dataset, bounds: &Bounds) {
    let (x, y) = dataset.parts_mut();
    bounds.apply(x, y);

    let outside = x
        .iter()
        .chain(y.iter())
        .filter(|v| !(0.0..=1.0).contains(*v))
        .count();

    if outside > 0 {
        warn!("{outside} value(s) fall outside [0, 1] after applying the training bounds");
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    fn dataset(x: Array2<f32>, y: Array1<f32>) -> Dataset {
        Dataset::new(x, y).unwrap()
    }

    #[test]
    fn bounds_span_features_and_labels() {
        let x = array![[2.0, 4.0], [6.0, 3.0]];
        let y = array![-2.0, 10.0];

        let bounds = Bounds::fit(&x, &y).unwrap();
        assert_eq!(bounds.max(), 10.0);
        assert_eq!(bounds.min(), -2.0);
    }

    #[test]
    fn normalized_values_lie_in_unit_interval() {
        let mut ds = dataset(
            array![[0.0, 255.0], [128.0, 64.0], [3.0, 7.0]],
            array![1.0, 0.0, 1.0],
        );
        let bounds = normalize(&mut ds).unwrap();
        assert_eq!((bounds.max(), bounds.min()), (255.0, 0.0));

        let all: Vec<f32> = ds.x().iter().chain(ds.y().iter()).copied().collect();
        assert!(all.iter().all(|v| (0.0..=1.0).contains(v)));
        assert_eq!(all.iter().copied().fold(f32::NEG_INFINITY, f32::max), 1.0);
        assert_eq!(all.iter().copied().fold(f32::INFINITY, f32::min), 0.0);
    }

    #[test]
    fn refitting_normalized_data_gives_unit_bounds() {
        let mut ds = dataset(array![[5.0, -3.0], [12.0, 1.0]], array![1.0, 0.0]);
        normalize(&mut ds).unwrap();

        let refit = Bounds::fit(ds.x(), ds.y()).unwrap();
        assert_eq!((refit.max(), refit.min()), (1.0, 0.0));
    }

    #[test]
    fn degenerate_dataset_fails_without_touching_data() {
        let mut ds = dataset(Array2::zeros((3, 2)), Array1::zeros(3));
        let err = normalize(&mut ds).unwrap_err();

        assert!(matches!(err, LogRegErr::Normalization(_)));
        assert!(ds.x().iter().all(|v| *v == 0.0));
        assert!(ds.y().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn non_finite_values_fail() {
        let err = Bounds::fit(&array![[1.0, f32::NAN]], &array![0.0]).unwrap_err();
        assert!(matches!(err, LogRegErr::Normalization(_)));
    }

    #[test]
    fn second_dataset_reuses_training_bounds() {
        let mut train = dataset(array![[0.0, 10.0], [5.0, 2.0]], array![0.0, 1.0]);
        let mut test = dataset(array![[0.0, 5.0]], array![1.0]);

        let bounds = normalize(&mut train).unwrap();
        normalize_with(&mut test, &bounds);

        assert_eq!(test.x(), &array![[0.0, 0.5]]);
        assert_eq!(test.y(), &array![0.1]);
    }

    #[test]
    fn invalid_bounds_are_rejected() {
        assert!(Bounds::new(1.0, 1.0).is_err());
        assert!(Bounds::new(0.0, 1.0).is_err());
        assert!(Bounds::new(f32::INFINITY, 0.0).is_err());
        assert!(Bounds::new(1.0, 0.0).is_ok());
    }
}
