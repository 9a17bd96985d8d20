use std::{num::NonZeroUsize, ops::Index};

/// The accuracy reached after every training iteration.
///
/// Its length is fixed to the amount of iterations when it's created.
#[derive(Debug, Clone, PartialEq)]
pub struct CostHistory {
    costs: Box<[f32]>,
}

impl CostHistory {
    pub(crate) fn new(iterations: NonZeroUsize) -> Self {
        Self {
            costs: vec![0.; iterations.get()].into_boxed_slice(),
        }
    }

    /// Stores the accuracy for iteration `i` (panics if out of bounds).
    pub(crate) fn record(&mut self, i: usize, cost: f32) {
        self.costs[i] = cost;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<f32> {
        self.costs.get(i).copied()
    }

    /// Returns the accuracy after the final iteration.
    pub fn last(&self) -> Option<f32> {
        self.costs.last().copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.costs
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.costs.iter().copied()
    }
}

impl Index<usize> for CostHistory {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        &self.costs[i]
    }
}
