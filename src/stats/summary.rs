use serde_derive::Serialize;

use crate::error::StatResult;
use crate::number::Number;
use crate::validate::validate;
use crate::value::Value;

use super::{mean_of, median_of, non_empty, std_deviation_of};

/// All three statistics from a single validation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: Number,
    pub std_deviation: f64,
}

impl Summary {
    pub fn from_numbers(numbers: &[Number]) -> StatResult<Self> {
        let numbers = non_empty(numbers)?;
        Ok(Summary {
            count: numbers.len(),
            mean: mean_of(numbers)?,
            median: median_of(numbers)?,
            std_deviation: std_deviation_of(numbers)?,
        })
    }
}

/// Count, mean, median and population standard deviation of `input`.
pub fn describe(input: &Value) -> StatResult<Summary> {
    let summary = Summary::from_numbers(&validate(input)?)?;
    log::debug!(
        "described {} values: mean={} median={} std={}",
        summary.count,
        summary.mean,
        summary.median,
        summary.std_deviation
    );
    Ok(summary)
}
