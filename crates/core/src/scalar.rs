//! Scalar-only operations on [`Maybe`].

use crate::container::Container;
use crate::dim::Scalar;
use crate::{Maybe, Seq};

impl<T> Container<T, Scalar> {
    /// Raise to a sequence.
    ///
    /// A failure becomes a `Seq` failure with the same error; otherwise the
    /// result is `f(value)`.
    pub fn split<U, F>(self, f: F) -> Seq<U>
    where
        F: FnOnce(T) -> Seq<U>,
    {
        match self.unbox() {
            Ok(value) => f(value),
            Err(error) => Seq::fail(error),
        }
    }

    /// Convert the value to another kind.
    pub fn convert_to<W, F>(self, f: F) -> Maybe<W>
    where
        F: FnOnce(T) -> Maybe<W>,
    {
        match self.unbox() {
            Ok(value) => f(value),
            Err(error) => Maybe::fail(error),
        }
    }
}
