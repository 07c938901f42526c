//! Error types shared by the flatten/validate pipeline and the statistics.

use thiserror::Error;

use crate::value::Value;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    /// The top-level argument is a scalar or a text/bytes atom.
    #[error("top-level value must be a non-text iterable collection, got {kind}")]
    InvalidInput { kind: &'static str },

    /// A flattened leaf is not a bool, integer or float.
    #[error("{value} is not a numeric value")]
    NonNumericValue { value: Value },

    #[error("the number list needs to have at least one numeric element")]
    EmptyInput,
}

pub type StatResult<T> = Result<T, StatError>;
