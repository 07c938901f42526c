//! Flattening and descriptive statistics for nested numeric data.
//!
//! Input arrives as a [`Value`] tree. [`flatten`] walks it depth-first,
//! [`validate`] additionally demands every leaf be a [`Number`], and the
//! statistics ([`mean`], [`median`], [`std_deviation`], [`describe`]) run on
//! the validated sequence.
//!
//! Booleans are numeric (0 and 1). Maps are walked over their keys only.
//!
//! ```
//! use nest_stats::{mean, median, nested, Number};
//!
//! let data = nested![4, [1, 3], 2];
//! assert_eq!(mean(&data).unwrap(), 2.5);
//! assert_eq!(median(&data).unwrap(), Number::Float(2.5));
//! ```

pub mod error;
pub mod flatten;
pub mod number;
pub mod stats;
pub mod validate;
pub mod value;

pub use error::{StatError, StatResult};
pub use flatten::{Leaves, flatten, leaves};
pub use number::Number;
pub use stats::{
    Summary, describe, mean, mean_of, median, median_of, std_deviation, std_deviation_of,
};
pub use validate::validate;
pub use value::{Children, Value};
