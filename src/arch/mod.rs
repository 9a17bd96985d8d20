pub mod activations;
mod logistic;

pub use logistic::{check_shapes, gradient, gradient_into, hypothesis, predict};
