//! Descriptive statistics over nested numeric input.
//!
//! Each public entry point validates its input first and fails with
//! [`StatError::EmptyInput`](crate::StatError::EmptyInput) when nothing
//! numeric is left. The `*_of` kernels take already validated data.

mod deviation;
mod mean;
mod median;
mod summary;

pub use deviation::{std_deviation, std_deviation_of};
pub use mean::{mean, mean_of};
pub use median::{median, median_of};
pub use summary::{Summary, describe};

use crate::error::{StatError, StatResult};
use crate::number::Number;

fn non_empty(numbers: &[Number]) -> StatResult<&[Number]> {
    if numbers.is_empty() {
        return Err(StatError::EmptyInput);
    }
    Ok(numbers)
}
