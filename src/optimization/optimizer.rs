use ndarray::{ArrayView1, ArrayViewMut1};

/// An update rule that moves the parameters given a gradient.
pub trait Optimizer {
    fn update_params(&mut self, params: ArrayViewMut1<f32>, grad: ArrayView1<f32>);
}
