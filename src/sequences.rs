//! Ordered integer sequences: iteration, transformation, searching,
//! ordering, ranges, and copy semantics.
//!
//! Every function here takes its input by reference and leaves it
//! untouched, except [`splice`] which replaces elements in place on
//! purpose, and the aliasing demonstration where shared mutation is the
//! entire point.

// shared ownership with interior mutability, for the aliasing demo
use std::cell::RefCell;
use std::rc::Rc;

/// A sequence deliberately reachable through more than one binding.
/// Cloning the handle clones the reference, not the storage, so mutation
/// through any handle is visible through all of them.
pub type SharedSeq = Rc<RefCell<Vec<i64>>>;

pub fn shared(values: &[i64]) -> SharedSeq {
    Rc::new(RefCell::new(values.to_vec()))
}

/// Each element incremented by one. The source stays as it was; no new
/// meaning is attached to the result beyond printing it.
pub fn bump_each(values: &[i64]) -> Vec<i64> {
    values.iter().map(|v| v + 1).collect()
}

/// Order-preserving concatenation of two sequences into a new one.
pub fn concat(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut combined = Vec::with_capacity(left.len() + right.len());
    combined.extend_from_slice(left);
    combined.extend_from_slice(right);
    combined
}

pub fn contains(values: &[i64], probe: i64) -> bool {
    values.contains(&probe)
}

pub fn doubled(values: &[i64]) -> Vec<i64> {
    values.iter().map(|n| n * 2).collect()
}

pub fn evens(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|n| n % 2 == 0).collect()
}

pub fn sum(values: &[i64]) -> i64 {
    values.iter().fold(0, |acc, n| acc + n)
}

/// First element satisfying the predicate, if any.
pub fn first_over(values: &[i64], threshold: i64) -> Option<i64> {
    values.iter().copied().find(|n| *n > threshold)
}

/// Index of the first element satisfying the predicate, if any.
pub fn index_over(values: &[i64], threshold: i64) -> Option<usize> {
    values.iter().position(|n| *n > threshold)
}

pub fn any_even(values: &[i64]) -> bool {
    values.iter().any(|n| n % 2 == 0)
}

pub fn all_even(values: &[i64]) -> bool {
    values.iter().all(|n| n % 2 == 0)
}

/// Descending sort of a copy. The source is never reordered.
pub fn sorted_descending(values: &[i64]) -> Vec<i64> {
    let mut copy = values.to_vec();
    copy.sort_by(|a, b| b.cmp(a));
    copy
}

/// The half-open sub-range `[from, to)`, clamped to the sequence bounds.
pub fn slice_range(values: &[i64], from: usize, to: usize) -> Vec<i64> {
    let to = to.min(values.len());
    let from = from.min(to);
    values[from..to].to_vec()
}

/// Replace `count` elements starting at `start` with `replacement`,
/// in place, returning the removed elements. The delete count is clamped
/// to the available tail; a `start` past the end inserts at the end.
pub fn splice(values: &mut Vec<i64>, start: usize, count: usize, replacement: &[i64]) -> Vec<i64> {
    let start = start.min(values.len());
    let end = start.saturating_add(count).min(values.len());
    values.splice(start..end, replacement.iter().copied()).collect()
}
