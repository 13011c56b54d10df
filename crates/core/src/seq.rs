//! # Sequences
//!
//! Operations on [`Seq<T>`], a `Vec<T>` or a failure.
//!
//! Elementwise operations (`map`, `convert_to`, `split`) visit elements in
//! index order and stop at the first failing element: later elements are never
//! handed to the callback, and the successes computed so far are dropped.
//!
//! ```rust
//! use maybe_core::{Maybe, Seq};
//!
//! let words = Seq::from_items(["23", "42", "0"]);
//! let nums = words.convert_to(|s| Maybe::new(s.parse::<i64>()));
//! assert_eq!(nums.unbox().unwrap(), vec![23, 42, 0]);
//! ```

use crate::container::{traverse, Container};
use crate::dim::Vector;
use crate::{Mat, Maybe, Seq};

impl<T> Container<T, Vector> {
    /// A valid sequence of the given items, in iteration order.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::just(items.into_iter().collect())
    }

    /// Reduce the whole list to a scalar of any kind.
    pub fn join<W, F>(self, f: F) -> Maybe<W>
    where
        F: FnOnce(Vec<T>) -> Maybe<W>,
    {
        match self.unbox() {
            Ok(items) => f(items),
            Err(error) => Maybe::fail(error),
        }
    }

    /// Expand every element into a row, producing a matrix.
    ///
    /// Fails fast on the first element whose expansion fails.
    pub fn split<U, F>(self, mut f: F) -> Mat<U>
    where
        F: FnMut(T) -> Seq<U>,
    {
        match self.unbox() {
            Ok(items) => Mat::new(traverse(items, |item| f(item).unbox())),
            Err(error) => Mat::fail(error),
        }
    }

    /// Transform every element, failing fast.
    pub fn map<W, F>(self, mut f: F) -> Seq<W>
    where
        F: FnMut(T) -> Maybe<W>,
    {
        match self.unbox() {
            Ok(items) => Seq::new(traverse(items, |item| f(item).unbox())),
            Err(error) => Seq::fail(error),
        }
    }

    /// Convert every element to another kind ("parse all").
    ///
    /// Same contract as [`map`](Self::map).
    pub fn convert_to<W, F>(self, f: F) -> Seq<W>
    where
        F: FnMut(T) -> Maybe<W>,
    {
        self.map(f)
    }

    /// Number of elements, or `None` for a failure.
    pub fn len(&self) -> Option<usize> {
        self.as_just().map(Vec::len)
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Seq::just(items)
    }
}

/// Collect scalars into a sequence; the first failure wins and the iterator
/// is not advanced past it.
impl<T> FromIterator<Maybe<T>> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        Seq::new(traverse(iter, |item: Maybe<T>| item.unbox()))
    }
}
