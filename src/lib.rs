//! Binary logistic regression trained with batch gradient descent, built to tell apart
//! hand-written "4"s from "9"s of the USPS digits dataset.

pub mod arch;
pub mod artifacts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod initialization;
pub mod normalization;
pub mod optimization;
pub mod pipeline;
pub mod training;

pub use error::{LogRegErr, Result};
