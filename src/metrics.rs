use crate::error::{Error, Result};
use crate::{Dataset, Parameters, Vector};

fn predictions(data: &Dataset, params: &Parameters) -> Result<(Vector, Vector)> {
    if data.is_empty() {
        return Err(Error::DegenerateInput);
    }

    let (x, y) = data.to_vectors();
    Ok((x.mapv(|xi| params.predict(xi)), y))
}

/// Mean of squared residuals, `(1/n) * sum((w * x + b - y)^2)`.
pub fn mean_squared_error(data: &Dataset, params: &Parameters) -> Result<f64> {
    let (y_pred, y_true) = predictions(data, params)?;

    let diff = &y_true - &y_pred;
    Ok(diff.mapv(|x| x * x).sum() / diff.len() as f64)
}

pub fn r2_score(data: &Dataset, params: &Parameters) -> Result<f64> {
    let (y_pred, y_true) = predictions(data, params)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let ss_res = (&y_true - &y_pred).mapv(|x| x * x).sum();
    let ss_tot = y_true.mapv(|x| (x - y_mean) * (x - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }

    Ok(1.0 - ss_res / ss_tot)
}
