use crate::error::StatResult;
use crate::number::Number;
use crate::validate::validate;
use crate::value::Value;

use super::non_empty;

/// Median of a validated, non-empty sequence. The input is not reordered.
///
/// An odd count returns the middle element as it is, variant included. For
/// an even count the two middle elements are averaged into a float, unless
/// they are numerically equal, in which case the lower one is returned
/// unchanged. So `[1, 2, 2, 100]` gives `Int(2)`, not `Float(2.0)`.
pub fn median_of(numbers: &[Number]) -> StatResult<Number> {
    let numbers = non_empty(numbers)?;
    let mut sorted = numbers.to_vec();
    // stable: equal keys keep input order
    sorted.sort_by(|a, b| a.total_cmp(*b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        return Ok(sorted[mid]);
    }
    let (a, b) = (sorted[mid - 1], sorted[mid]);
    if a == b {
        return Ok(a);
    }
    Ok(Number::Float((a.as_f64() + b.as_f64()) / 2.0))
}

/// Median of every leaf in `input`.
pub fn median(input: &Value) -> StatResult<Number> {
    median_of(&validate(input)?)
}
