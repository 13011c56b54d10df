//! # Container - A Value or a Failure
//!
//! [`Container<T, D>`] is the single generic type behind every alias in this
//! crate. It holds exactly one of:
//!
//! - a payload of shape `D` over `T` (see [`crate::dim`]), or
//! - one [`Error`].
//!
//! ## State Machine
//!
//! ```text
//!   just / new(Ok) ──► Valid ──(callback fails)──► Invalid ◄── err / new(Err) / Default
//!                        │                            │
//!                        └──(callback succeeds)──┐    └──(any operation)──┐
//!                                                ▼                        ▼
//!                                              Valid                   Invalid
//! ```
//!
//! `Invalid` is absorbing: no operation ever turns a failure back into a
//! payload, and the error travels unchanged.
//!
//! ## No Zero State
//!
//! There is no way to observe a half-built container. The only constructor
//! that is not an explicit success or failure is [`Default`], and it yields a
//! failure carrying [`Error::Uninitialized`]. A deliberately empty sequence
//! (`Seq::just(vec![])`) is valid and unrelated to that case.

use std::fmt;

use crate::dim::{Dim, Scalar};
use crate::error::Error;

#[derive(Clone, PartialEq)]
enum State<P> {
    Just(P),
    Err(Error),
}

/// A payload of shape `D` over element kind `T`, or a failure.
///
/// Use the aliases [`crate::Maybe`], [`crate::Seq`] and [`crate::Mat`] rather
/// than naming this type directly; they fix `D` so constructors infer `T`.
pub struct Container<T, D: Dim = Scalar> {
    state: State<D::Payload<T>>,
}

impl<T, D: Dim> Container<T, D> {
    /// A valid container holding `value`.
    pub fn just(value: D::Payload<T>) -> Self {
        Self {
            state: State::Just(value),
        }
    }

    /// A failed container holding `error`.
    pub fn err(error: impl Into<Error>) -> Self {
        Self::fail(error.into())
    }

    /// Wrap the result of a fallible call.
    ///
    /// ```rust
    /// use maybe_core::Maybe;
    ///
    /// let n = Maybe::new("42".parse::<i64>());
    /// assert_eq!(n.unbox().unwrap(), 42);
    ///
    /// let bad = Maybe::new("forty-two".parse::<i64>());
    /// assert!(bad.is_err());
    /// ```
    pub fn new<E: Into<Error>>(result: Result<D::Payload<T>, E>) -> Self {
        match result {
            Ok(value) => Self::just(value),
            Err(error) => Self::err(error),
        }
    }

    /// Build from a value/error pair. A present error wins, whatever the value.
    pub fn from_pair(value: D::Payload<T>, error: Option<Error>) -> Self {
        match error {
            Some(error) => Self::fail(error),
            None => Self::just(value),
        }
    }

    pub(crate) fn fail(error: Error) -> Self {
        Self {
            state: State::Err(error),
        }
    }

    /// True for a failure, including a never-constructed container.
    pub fn is_err(&self) -> bool {
        matches!(self.state, State::Err(_))
    }

    pub fn is_just(&self) -> bool {
        !self.is_err()
    }

    /// Chain a same-shape transform over the whole payload.
    ///
    /// A failure is returned as-is and `f` is never invoked.
    pub fn bind<F>(self, f: F) -> Self
    where
        F: FnOnce(D::Payload<T>) -> Self,
    {
        match self.state {
            State::Just(value) => f(value),
            State::Err(error) => Self::fail(error),
        }
    }

    /// Extract the payload or the error.
    pub fn unbox(self) -> Result<D::Payload<T>, Error> {
        match self.state {
            State::Just(value) => Ok(value),
            State::Err(error) => Err(error),
        }
    }

    /// Extract as a `(payload, error)` pair; exactly one side is `Some`.
    pub fn into_parts(self) -> (Option<D::Payload<T>>, Option<Error>) {
        match self.state {
            State::Just(value) => (Some(value), None),
            State::Err(error) => (None, Some(error)),
        }
    }

    pub fn as_just(&self) -> Option<&D::Payload<T>> {
        match &self.state {
            State::Just(value) => Some(value),
            State::Err(_) => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match &self.state {
            State::Just(_) => None,
            State::Err(error) => Some(error),
        }
    }

    /// Nesting depth of the payload: 0, 1 or 2.
    pub fn rank(&self) -> usize {
        D::RANK
    }
}

impl<T, D: Dim> Default for Container<T, D> {
    /// The never-constructed container: always a failure.
    fn default() -> Self {
        Self::fail(Error::Uninitialized(D::NAME))
    }
}

impl<T, D: Dim> Clone for Container<T, D>
where
    D::Payload<T>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T, D: Dim> PartialEq for Container<T, D>
where
    D::Payload<T>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<T, D: Dim> fmt::Debug for Container<T, D>
where
    D::Payload<T>: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Just(value) => f.debug_tuple("Just").field(value).finish(),
            State::Err(error) => f.debug_tuple("Err").field(error).finish(),
        }
    }
}

impl<T, D: Dim> fmt::Display for Container<T, D>
where
    D::Payload<T>: fmt::Debug,
{
    /// `Just <payload>` or `Err <error>`; diagnostic only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Just(value) => write!(f, "Just {:?}", value),
            State::Err(error) => write!(f, "Err {}", error),
        }
    }
}

// ============================================================================
// Fail-Fast Traversal
// ============================================================================

/// Apply `f` to each item in order, stopping at the first failure.
///
/// Items after the failing one are never pulled from the iterator, so `f`
/// runs exactly `index + 1` times when item `index` fails.
pub(crate) fn traverse<I, U, F>(items: I, mut f: F) -> Result<Vec<U>, Error>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<U, Error>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            f(item).map_err(|error| {
                ::tracing::trace!(index, error = %error, "short-circuit");
                error
            })
        })
        .collect()
}
