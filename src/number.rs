//! Validated numeric scalars.
//!
//! Booleans are numbers here: `false` is 0 and `true` is 1 in every
//! arithmetic context, and they compare equal to the matching integer or
//! float. Keeping them as their own variant lets a median of booleans come
//! back as a boolean.

use std::cmp::Ordering;
use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy)]
pub enum Number {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Bool(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            }
            Number::Int(i) => i as f64,
            Number::Float(x) => x,
        }
    }

    /// Total order by exact numeric value.
    ///
    /// Integers never pass through `f64`, so values above 2^53 stay
    /// distinct. `-0.0` equals `0`, and NaN sorts after everything else.
    pub fn total_cmp(self, other: Self) -> Ordering {
        match (self.exact(), other.exact()) {
            (Exact::Int(a), Exact::Int(b)) => a.cmp(&b),
            (Exact::Int(a), Exact::Float(b)) => cmp_int_float(a, b),
            (Exact::Float(a), Exact::Int(b)) => cmp_int_float(b, a).reverse(),
            (Exact::Float(a), Exact::Float(b)) => OrderedFloat(a).cmp(&OrderedFloat(b)),
        }
    }

    fn exact(self) -> Exact {
        match self {
            Number::Bool(b) => Exact::Int(b as i64),
            Number::Int(i) => Exact::Int(i),
            Number::Float(x) => Exact::Float(x),
        }
    }

    fn is_nan(self) -> bool {
        matches!(self, Number::Float(x) if x.is_nan())
    }
}

enum Exact {
    Int(i64),
    Float(f64),
}

// 2^63, the first float past i64::MAX
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn cmp_int_float(i: i64, x: f64) -> Ordering {
    if x.is_nan() || x >= I64_BOUND {
        return Ordering::Less;
    }
    if x < -I64_BOUND {
        return Ordering::Greater;
    }
    // in range, so the truncated float converts to i64 without loss
    let whole = x.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&x).unwrap_or(Ordering::Equal),
        other => other,
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        !self.is_nan() && !other.is_nan() && self.total_cmp(*other) == Ordering::Equal
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        Some(self.total_cmp(*other))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Bool(b) => write!(f, "{}", b),
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::Bool(b) => serializer.serialize_bool(b),
            Number::Int(i) => serializer.serialize_i64(i),
            Number::Float(x) => serializer.serialize_f64(x),
        }
    }
}

impl From<bool> for Number {
    fn from(v: bool) -> Self {
        Number::Bool(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(v as i64)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bools_count_as_zero_and_one() {
        assert_eq!(Number::Bool(false).as_f64(), 0.0);
        assert_eq!(Number::Bool(true).as_f64(), 1.0);
    }

    #[test]
    fn equality_crosses_variants() {
        assert_eq!(Number::Bool(true), Number::Int(1));
        assert_eq!(Number::Int(2), Number::Float(2.0));
        assert_ne!(Number::Bool(false), Number::Float(0.5));
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(Number::Bool(false) < Number::Bool(true));
        assert!(Number::Bool(true) < Number::Float(1.5));
        assert!(Number::Int(-2) < Number::Bool(false));
        assert_eq!(Number::Float(-0.0), Number::Int(0));
    }

    #[test]
    fn large_integers_compare_exactly() {
        let big: i64 = 1 << 53;
        assert_eq!(Number::Int(big + 1).total_cmp(Number::Int(big)), Ordering::Greater);
        // big + 1 rounds to big as an f64, but must not compare equal to it
        assert_ne!(Number::Int(big + 1), Number::Float(big as f64));
        assert!(Number::Float(big as f64) < Number::Int(big + 1));
        assert_eq!(Number::Int(big), Number::Float(big as f64));
        assert!(Number::Int(i64::MAX) < Number::Float(I64_BOUND));
        assert!(Number::Int(i64::MIN) > Number::Float(-1e30));
    }

    #[test]
    fn fractional_floats_sit_between_integers() {
        assert_eq!(Number::Int(2).total_cmp(Number::Float(2.5)), Ordering::Less);
        assert_eq!(Number::Int(3).total_cmp(Number::Float(2.5)), Ordering::Greater);
        assert_eq!(Number::Int(-2).total_cmp(Number::Float(-2.5)), Ordering::Greater);
        assert_eq!(Number::Float(2.5).total_cmp(Number::Bool(true)), Ordering::Greater);
    }

    #[test]
    fn nan_sorts_last_and_equals_nothing() {
        let nan = Number::Float(f64::NAN);
        assert_eq!(nan.total_cmp(Number::Int(i64::MAX)), Ordering::Greater);
        assert_eq!(Number::Float(f64::INFINITY).total_cmp(nan), Ordering::Less);
        assert_ne!(nan, nan);
        assert_eq!(nan.partial_cmp(&Number::Int(0)), None);
    }

    #[test]
    fn serializes_as_plain_json_scalars() {
        let out = serde_json::to_string(&vec![
            Number::Bool(true),
            Number::Int(3),
            Number::Float(2.5),
        ])
        .unwrap();
        assert_eq!(out, "[true,3,2.5]");
    }
}
