//! # Matrices
//!
//! Operations on [`Mat<T>`], a `Vec<Vec<T>>` or a failure.
//!
//! Row-wise operations (`join`, `map`) hand each row to the callback in row
//! order. [`convert_to`](Container::convert_to) goes one level deeper and
//! visits leaves in row-major order: row 0 left to right, then row 1, and so
//! on. All of them stop at the first failure and never expose a partially
//! built matrix.
//!
//! Rows are not required to have equal lengths.

use crate::container::{traverse, Container};
use crate::dim::Matrix;
use crate::{Mat, Maybe, Seq};

impl<T> Container<T, Matrix> {
    /// A valid matrix built from nested iterables, one row per outer item.
    pub fn from_rows<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        Self::just(
            rows.into_iter()
                .map(|row| row.into_iter().collect())
                .collect(),
        )
    }

    /// Reduce each row to a single value, producing a sequence.
    pub fn join<W, F>(self, mut f: F) -> Seq<W>
    where
        F: FnMut(Vec<T>) -> Maybe<W>,
    {
        match self.unbox() {
            Ok(rows) => Seq::new(traverse(rows, |row| f(row).unbox())),
            Err(error) => Seq::fail(error),
        }
    }

    /// Concatenate all rows, in order, into one sequence.
    pub fn flatten(self) -> Seq<T> {
        match self.unbox() {
            Ok(rows) => Seq::just(rows.into_iter().flatten().collect()),
            Err(error) => Seq::fail(error),
        }
    }

    /// Transform each row into a new row.
    pub fn map<W, F>(self, mut f: F) -> Mat<W>
    where
        F: FnMut(Vec<T>) -> Seq<W>,
    {
        match self.unbox() {
            Ok(rows) => Mat::new(traverse(rows, |row| f(row).unbox())),
            Err(error) => Mat::fail(error),
        }
    }

    /// Convert every leaf to another kind, in row-major order.
    pub fn convert_to<W, F>(self, mut f: F) -> Mat<W>
    where
        F: FnMut(T) -> Maybe<W>,
    {
        match self.unbox() {
            Ok(rows) => Mat::new(traverse(rows, |row| {
                traverse(row, |leaf| f(leaf).unbox())
            })),
            Err(error) => Mat::fail(error),
        }
    }

    /// Number of rows, or `None` for a failure.
    pub fn rows(&self) -> Option<usize> {
        self.as_just().map(Vec::len)
    }
}

impl<T> From<Vec<Vec<T>>> for Mat<T> {
    fn from(rows: Vec<Vec<T>>) -> Self {
        Mat::just(rows)
    }
}

/// Collect sequences as rows; the first failed row wins.
impl<T> FromIterator<Seq<T>> for Mat<T> {
    fn from_iter<I: IntoIterator<Item = Seq<T>>>(iter: I) -> Self {
        Mat::new(traverse(iter, |row: Seq<T>| row.unbox()))
    }
}
