//! # Dimensions - Shapes as Types
//!
//! Every container is parameterised by a shape marker. The marker decides, at
//! compile time, what the payload looks like:
//!
//! | Marker | Rank | Payload of `T` | Alias |
//! |--------|------|----------------|-------|
//! | [`Scalar`] | 0 | `T` | [`crate::Maybe`] |
//! | [`Vector`] | 1 | `Vec<T>` | [`crate::Seq`] |
//! | [`Matrix`] | 2 | `Vec<Vec<T>>` | [`crate::Mat`] |
//!
//! Operations that change dimension (`split`, `join`, `flatten`) therefore
//! change the marker, and a mismatched pipeline is a type error rather than a
//! runtime one.

use std::fmt;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Scalar {}
    impl Sealed for super::Vector {}
    impl Sealed for super::Matrix {}
}

/// A container dimensionality.
///
/// Sealed: the algebra is only defined for the three shapes below.
pub trait Dim: sealed::Sealed + 'static {
    /// Number of nested list levels around each element.
    const RANK: usize;

    /// Short name used in diagnostics ("zero-value Seq").
    const NAME: &'static str;

    /// The payload held by a valid container of element kind `T`.
    type Payload<T>;
}

/// Rank 0: a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scalar;

/// Rank 1: an ordered sequence of elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector;

/// Rank 2: an ordered sequence of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Matrix;

impl Dim for Scalar {
    const RANK: usize = 0;
    const NAME: &'static str = "Maybe";
    type Payload<T> = T;
}

impl Dim for Vector {
    const RANK: usize = 1;
    const NAME: &'static str = "Seq";
    type Payload<T> = Vec<T>;
}

impl Dim for Matrix {
    const RANK: usize = 2;
    const NAME: &'static str = "Mat";
    type Payload<T> = Vec<Vec<T>>;
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAME)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAME)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::NAME)
    }
}
