use crate::error::StatResult;
use crate::number::Number;
use crate::validate::validate;
use crate::value::Value;

use super::non_empty;

/// Arithmetic mean of a validated, non-empty sequence.
///
/// Plain left-to-right summation; no compensation.
pub fn mean_of(numbers: &[Number]) -> StatResult<f64> {
    let numbers = non_empty(numbers)?;
    let total = numbers.iter().fold(0.0, |acc, n| acc + n.as_f64());
    Ok(total / numbers.len() as f64)
}

/// Arithmetic mean of every leaf in `input`.
pub fn mean(input: &Value) -> StatResult<f64> {
    mean_of(&validate(input)?)
}
