use crate::error::StatResult;
use crate::number::Number;
use crate::validate::validate;
use crate::value::Value;

use super::mean::mean_of;

/// Population standard deviation (divides by `n`) of a validated,
/// non-empty sequence.
pub fn std_deviation_of(numbers: &[Number]) -> StatResult<f64> {
    let center = mean_of(numbers)?;
    let squares = numbers.iter().fold(0.0, |acc, n| {
        let d = n.as_f64() - center;
        acc + d * d
    });
    Ok((squares / numbers.len() as f64).sqrt())
}

/// Population standard deviation of every leaf in `input`.
pub fn std_deviation(input: &Value) -> StatResult<f64> {
    std_deviation_of(&validate(input)?)
}
