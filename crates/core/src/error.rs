//! # Error Types
//!
//! A container carries at most one error, and that error travels unchanged
//! through every operation chained after the failure. Nothing here wraps,
//! annotates or aggregates errors: the first failure in evaluation order is
//! the only one a caller ever sees.
//!
//! Two families of failure exist:
//!
//! - **Caller failures** - produced by a callback or a data source
//!   ([`Error::Message`], [`Error::Source`], [`Error::KindMismatch`]).
//! - **Uninitialized access** - synthesized by a container obtained through
//!   `Default` instead of an explicit constructor ([`Error::Uninitialized`]).
//!
//! Both look identical to `is_err()`.

use std::error::Error as StdError;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use std::sync::Arc;

use thiserror::Error;

/// The single error type carried by every container.
///
/// Cloning is cheap: messages and sources are reference counted, so a
/// propagated error is the *same* allocation as the original.
#[derive(Clone, Error)]
pub enum Error {
    /// The container was never explicitly constructed.
    #[error("zero-value {0}")]
    Uninitialized(&'static str),

    /// A plain caller-supplied message.
    #[error("{0}")]
    Message(Arc<str>),

    /// Any caller error value, carried opaquely.
    #[error(transparent)]
    Source(Arc<dyn StdError + Send + Sync + 'static>),

    /// A dynamic value held a different kind than the one requested.
    #[error("expected {expected}, found {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl Error {
    /// Wrap an arbitrary error value.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Error::Source(Arc::new(error))
    }

    /// Build an error from a message.
    pub fn msg(message: impl Into<Arc<str>>) -> Self {
        Error::Message(message.into())
    }

    /// True for the error synthesized by a never-constructed container.
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Error::Uninitialized(_))
    }

    /// Borrow the wrapped source as a concrete error type, if it is one.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match self {
            Error::Source(source) => source.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Strict identity: both errors share one allocation (or are the same
    /// unit-like variant).
    ///
    /// Equality (`==`) compares messages by text; `same` is what proves an
    /// error was propagated rather than rebuilt.
    pub fn same(a: &Error, b: &Error) -> bool {
        match (a, b) {
            (Error::Message(x), Error::Message(y)) => Arc::ptr_eq(x, y),
            (Error::Source(x), Error::Source(y)) => Arc::ptr_eq(x, y),
            _ => a == b,
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::Uninitialized(a), Error::Uninitialized(b)) => a == b,
            (Error::Message(a), Error::Message(b)) => a == b,
            // Opaque sources have no equality of their own.
            (Error::Source(a), Error::Source(b)) => Arc::ptr_eq(a, b),
            (
                Error::KindMismatch {
                    expected: e1,
                    found: f1,
                },
                Error::KindMismatch {
                    expected: e2,
                    found: f2,
                },
            ) => e1 == e2 && f1 == f2,
            _ => false,
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Uninitialized(shape) => f.debug_tuple("Uninitialized").field(shape).finish(),
            Error::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Error::Source(source) => f.debug_tuple("Source").field(source).finish(),
            Error::KindMismatch { expected, found } => f
                .debug_struct("KindMismatch")
                .field("expected", expected)
                .field("found", found)
                .finish(),
        }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::msg(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::msg(message)
    }
}

impl From<ParseIntError> for Error {
    fn from(error: ParseIntError) -> Self {
        Error::new(error)
    }
}

impl From<ParseFloatError> for Error {
    fn from(error: ParseFloatError) -> Self {
        Error::new(error)
    }
}

impl From<ParseBoolError> for Error {
    fn from(error: ParseBoolError) -> Self {
        Error::new(error)
    }
}
