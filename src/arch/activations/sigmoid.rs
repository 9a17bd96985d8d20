/// The logistic function, maps any real number into `(0, 1)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sigmoid;

impl Sigmoid {
    /// Evaluates the sigmoid at `z`.
    ///
    /// `exp` is only ever computed on a non-positive argument, so it can't overflow no
    /// matter how large `|z|` gets.
    pub fn f(&self, z: f32) -> f32 {
        if z >= 0. {
            1. / (1. + (-z).exp())
        } else {
            let e = z.exp();
            e / (1. + e)
        }
    }
}
