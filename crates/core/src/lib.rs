//! # Core - Fail-Fast Maybe Containers
//!
//! This crate provides "a value or a failure" uniformly across three shapes
//! and any element kind:
//!
//! - **Dimensions**: Compile-time shape markers (`Scalar`, `Vector`, `Matrix`)
//! - **Container**: The single generic value-or-failure type
//! - **Scalars / Sequences / Matrices**: Shape-specific operations
//! - **Errors**: One opaque error per container, propagated unchanged
//! - **Values**: A tagged union for dynamically typed elements
//! - **Tracing**: Zero-cost compile-time configurable stage tracing
//!
//! ## Design Philosophy
//!
//! Pipelines are chains of total functions over containers. A failure at any
//! step is absorbing: later steps pass it through untouched, so the caller
//! inspects the result once, at the end.
//!
//! ```rust
//! use maybe_core::{Maybe, Seq};
//!
//! let validate = |x: i64| {
//!     if x < 0 {
//!         Maybe::err(format!("{} is negative", x))
//!     } else {
//!         Maybe::just(x)
//!     }
//! };
//!
//! let nums = Seq::just(vec!["23", "-42", "0"])
//!     .convert_to(|s| Maybe::new(s.parse::<i64>()))
//!     .map(validate);
//!
//! assert_eq!(nums.to_string(), "Err -42 is negative");
//! ```
//!
//! ## Shape Transitions
//!
//! | From | Operation | To |
//! |------|-----------|----|
//! | `Maybe<T>` | `split` | `Seq<U>` |
//! | `Seq<T>` | `join` | `Maybe<W>` |
//! | `Seq<T>` | `split` | `Mat<U>` |
//! | `Mat<T>` | `join` | `Seq<W>` |
//! | `Mat<T>` | `flatten` | `Seq<T>` |

pub mod container;
pub mod dim;
pub mod error;
pub mod mat;
pub mod scalar;
pub mod seq;
pub mod tracing;
pub mod value;

// Re-export key types at crate root for convenience
pub use crate::container::Container;
pub use crate::dim::{Dim, Matrix, Scalar, Vector};
pub use crate::error::Error;
pub use crate::tracing::{stage, Outcome, Stage, StageExt, TraceNode, Traced};
pub use crate::value::Value;

/// A single `T`, or a failure.
pub type Maybe<T> = Container<T, Scalar>;

/// An ordered `Vec<T>`, or a failure.
pub type Seq<T> = Container<T, Vector>;

/// An ordered `Vec<Vec<T>>`, or a failure.
pub type Mat<T> = Container<T, Matrix>;

/// Everything a pipeline usually needs.
pub mod prelude {
    pub use crate::tracing::{stage, Stage, StageExt};
    pub use crate::{Error, Mat, Maybe, Seq, Value};
}
