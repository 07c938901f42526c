//! Depth-first, left-to-right flattening of nested values.
//!
//! The walk keeps its own stack of child iterators, so nesting depth costs
//! heap, not call stack.

use crate::error::{StatError, StatResult};
use crate::value::{Children, Value};

/// Lazy iterator over the leaves of a collection.
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    stack: Vec<Children<'a>>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(child) => match child.children() {
                    Some(grand) => self.stack.push(grand),
                    None => return Some(child),
                },
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

/// Starts a leaf walk over `input`.
///
/// Fails with [`StatError::InvalidInput`] when `input` itself is an atom,
/// text and bytes included.
pub fn leaves(input: &Value) -> StatResult<Leaves<'_>> {
    let root = input
        .children()
        .ok_or(StatError::InvalidInput { kind: input.kind() })?;
    Ok(Leaves { stack: vec![root] })
}

/// Collects every leaf of `input` into one flat sequence.
///
/// Order and duplicates are preserved; empty collections contribute nothing.
pub fn flatten(input: &Value) -> StatResult<Vec<Value>> {
    let flat: Vec<Value> = leaves(input)?.cloned().collect();
    log::trace!("flattened {} input into {} leaves", input.kind(), flat.len());
    Ok(flat)
}
