use polars::prelude::*;

use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub mean: f64,
    pub q3: f64,
    pub max: f64,
}

// Quartiles are linearly interpolated over the sorted samples, so every
// summary value lies within [min, max].
pub fn summarize(samples: &[f64]) -> Result<Summary, EvalError> {
    if samples.is_empty() {
        return Err(EvalError::EmptyInput);
    }

    let series = Series::new("totals", samples);
    let totals = series.f64()?;
    let quartile = |q: f64| -> Result<f64, EvalError> {
        totals
            .quantile(q, QuantileInterpolOptions::Linear)?
            .ok_or(EvalError::EmptyInput)
    };

    Ok(Summary {
        min: totals.min().ok_or(EvalError::EmptyInput)?,
        q1: quartile(0.25)?,
        median: series.median().ok_or(EvalError::EmptyInput)?,
        mean: series.mean().ok_or(EvalError::EmptyInput)?,
        q3: quartile(0.75)?,
        max: totals.max().ok_or(EvalError::EmptyInput)?,
    })
}
