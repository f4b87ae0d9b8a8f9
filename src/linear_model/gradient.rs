use ndarray::ArrayView1;

use crate::Series;
use crate::error::{Error, Result};

/// Line parameters: `y = w * x + b`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Parameters {
    pub w: f64,
    pub b: f64,
}

impl Parameters {
    pub fn new(w: f64, b: f64) -> Self {
        Self { w, b }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.w * x + self.b
    }

    /// One descent step against `grad`, scaled by `learning_rate`.
    pub fn step(&self, grad: &Gradient, learning_rate: f64) -> Self {
        Self {
            w: self.w - learning_rate * grad.dw,
            b: self.b - learning_rate * grad.db,
        }
    }
}

/// Averaged partial derivatives of the squared error with respect to `w` and `b`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Gradient {
    pub dw: f64,
    pub db: f64,
}

/// Mean-squared-error gradient of `params` over paired series.
///
/// The factor of 2 from differentiating the square is left out; it is
/// folded into the learning rate.
pub fn gradient(x: &Series, y: &Series, params: &Parameters) -> Result<Gradient> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.is_empty() {
        return Err(Error::DegenerateInput);
    }

    let (x, y) = (x.to_vector(), y.to_vector());
    Ok(gradient_dense(x.view(), y.view(), params))
}

/// Unchecked form of [`gradient`] over already widened samples.
///
/// Callers guarantee `x.len() == y.len() > 0`.
pub(crate) fn gradient_dense(
    x: ArrayView1<f64>,
    y: ArrayView1<f64>,
    params: &Parameters,
) -> Gradient {
    let n_samples = x.len() as f64;
    let residuals = x.mapv(|xi| params.predict(xi)) - &y;

    Gradient {
        dw: residuals.dot(&x) / n_samples,
        db: residuals.sum() / n_samples,
    }
}
